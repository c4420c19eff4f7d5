use crate::error::{KeypairError, Result};
use std::io::BufRead;

/// First line of a reader, without its line ending
pub fn read_first_line<R: BufRead>(reader: R) -> Result<String> {
    match reader.lines().next() {
        Some(line) => Ok(line?),
        None => Err(KeypairError::Io("No input provided".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_first_line() {
        let line = read_first_line(Cursor::new("[1,2,3]\nignored\n")).unwrap();
        assert_eq!(line, "[1,2,3]");
    }

    #[test]
    fn test_read_first_line_empty_input() {
        let result = read_first_line(Cursor::new(""));
        assert!(matches!(result, Err(KeypairError::Io(_))));
    }
}
