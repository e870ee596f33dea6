use std::fs;
use std::io;

use crate::error::Result;

/// Read PEM text from a file or stdin
///
/// If `file` is `Some`, reads from the given file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Ok(io::read_to_string(io::stdin())?),
    }
}
