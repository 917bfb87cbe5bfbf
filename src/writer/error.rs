use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriterError {
    /// `argc` counts the program name, the way the OS reports it.
    #[error("Invalid number of arguments, argc = {argc}")]
    InvalidArgumentCount { argc: usize },

    #[error("File {} could not be opened in write mode: {source}", path.display())]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed writing to {}: {source}", path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, WriterError>;
