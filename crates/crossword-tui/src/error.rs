use crossword_core::GenerateError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the `crossword` binary
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read word file {}: {source}", path.display())]
    WordFile { path: PathBuf, source: io::Error },
    #[error("word file {} contains no words", path.display())]
    EmptyWordFile { path: PathBuf },
}
