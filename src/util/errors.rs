use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("The specified directory does not exist: `{0}`")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read directory `{0}`: {1}")]
    ReadDirError(PathBuf, #[source] io::Error),

    #[error("Input string cannot be empty")]
    EmptyInput,
}
