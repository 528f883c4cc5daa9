use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Used when neither the command line nor saved settings name any words
pub const DEFAULT_WORDS: [&str; 5] = ["seat", "tea", "east", "set", "eat"];

/// Split command-line input on commas and whitespace
pub fn parse_list<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| {
            arg.as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Parse a word file: one word per line, blank lines and `#` comments skipped
pub fn parse_word_file(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_word_file(path: &Path) -> Result<Vec<String>, AppError> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::WordFile {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_word_file(&contents);
    if words.is_empty() {
        return Err(AppError::EmptyWordFile {
            path: path.to_path_buf(),
        });
    }
    Ok(words)
}
