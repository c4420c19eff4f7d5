use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

pub const INPUT_FILE: &str = "dev-wallet.json";
pub const OUTPUT_FILE: &str = "convert-result-dev-wallet.json";

const BASE_DIR_KEY: &str = "BASE_DIR";
const INPUT_FILE_KEY: &str = "INPUT_FILE";
const OUTPUT_FILE_KEY: &str = "OUTPUT_FILE";

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Config rooted at the process working directory
    pub fn new() -> Config {
        let base_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Config::with_base_dir(base_dir)
    }

    pub fn with_base_dir<P: AsRef<Path>>(base_dir: P) -> Config {
        let mut map = HashMap::new();
        map.insert(
            String::from(BASE_DIR_KEY),
            base_dir.as_ref().to_string_lossy().into_owned(),
        );
        map.insert(String::from(INPUT_FILE_KEY), String::from(INPUT_FILE));
        map.insert(String::from(OUTPUT_FILE_KEY), String::from(OUTPUT_FILE));

        Config {
            inner: RwLock::new(map),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn get(&self, key: &str) -> String {
        self.read().get(key).cloned().unwrap_or_default()
    }

    pub fn get_base_dir(&self) -> PathBuf {
        PathBuf::from(self.get(BASE_DIR_KEY))
    }

    pub fn set_base_dir<P: AsRef<Path>>(&self, base_dir: P) {
        self.write().insert(
            String::from(BASE_DIR_KEY),
            base_dir.as_ref().to_string_lossy().into_owned(),
        );
    }

    pub fn get_input_file(&self) -> String {
        self.get(INPUT_FILE_KEY)
    }

    pub fn get_output_file(&self) -> String {
        self.get(OUTPUT_FILE_KEY)
    }

    /// Absolute path of the keypair file to convert
    pub fn input_path(&self) -> PathBuf {
        self.get_base_dir().join(self.get_input_file())
    }

    /// Absolute path the encoded result is written to
    pub fn output_path(&self) -> PathBuf {
        self.get_base_dir().join(self.get_output_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_file_names() {
        let config = Config::with_base_dir("/tmp/wallets");
        assert_eq!(config.get_input_file(), "dev-wallet.json");
        assert_eq!(config.get_output_file(), "convert-result-dev-wallet.json");
        assert_eq!(
            config.input_path(),
            PathBuf::from("/tmp/wallets/dev-wallet.json")
        );
        assert_eq!(
            config.output_path(),
            PathBuf::from("/tmp/wallets/convert-result-dev-wallet.json")
        );
    }

    #[test]
    fn test_set_base_dir() {
        let config = Config::with_base_dir("/a");
        config.set_base_dir("/b");
        assert_eq!(config.get_base_dir(), PathBuf::from("/b"));
        assert_eq!(config.input_path(), PathBuf::from("/b/dev-wallet.json"));
    }

    #[test]
    fn test_global_config_uses_working_directory() {
        let cwd = env::current_dir().unwrap();
        assert_eq!(GLOBAL_CONFIG.input_path(), cwd.join(INPUT_FILE));
        assert_eq!(GLOBAL_CONFIG.output_path(), cwd.join(OUTPUT_FILE));
    }
}
