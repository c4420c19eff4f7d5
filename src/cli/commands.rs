use clap::{Parser, Subcommand};

use crate::config::INPUT_FILE;

#[derive(Debug, Parser)]
#[command(
    name = "keypair-convert",
    about = "Convert a JSON byte-array keypair into base58",
    long_about = "Run without a subcommand to convert ./dev-wallet.json into \
                  ./convert-result-dev-wallet.json"
)]
pub struct Opt {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    #[command(
        name = "convert",
        about = "Convert ./dev-wallet.json into ./convert-result-dev-wallet.json"
    )]
    Convert,
    #[command(
        name = "to-base58",
        about = "Read a wallet byte array from stdin and print it as base58"
    )]
    ToBase58,
    #[command(
        name = "from-base58",
        about = "Read a base58 key from stdin and print it as a wallet byte array"
    )]
    FromBase58,
    #[command(name = "pubkey", about = "Print the public key of a 64-byte keypair file")]
    Pubkey {
        #[arg(default_value = INPUT_FILE, help = "Keypair file to inspect")]
        path: String,
    },
    #[command(name = "keygen", about = "Generate a new keypair")]
    Keygen,
}
