use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SegcatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read failed on {}: {source}", path.display())]
    StreamRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("output write failed: {source}")]
    SinkWrite {
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write log {}: {source}", path.display())]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("index {index} does not fit in {digits} digits")]
    IndexTooWide { index: u64, digits: usize },

    #[error("Config error: {0}")]
    Config(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SegcatError>;
