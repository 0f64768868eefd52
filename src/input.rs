use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};

pub const INPUT_PATH: &str = "input.txt";

/// Reads the whole file and splits it into lines. The file handle is
/// released before this returns.
pub fn read_input_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines: Vec<String> = content.lines().map(str::to_owned).collect();
    debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}
