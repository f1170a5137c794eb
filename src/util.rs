use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Could not read input list {path}: {source}")]
pub struct InputListError {
    pub path: PathBuf,
    pub source: std::io::Error,
}

/// Reads one input per line, skipping blank lines and `#` comments.
pub fn read_input_list(path: &Path) -> Result<Vec<String>, InputListError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputListError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_input_list(&contents))
}

fn parse_input_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
