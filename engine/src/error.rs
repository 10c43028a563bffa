use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A command was recognised but is missing its argument.
    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Command not supported. Enter :help for list of supported commands")]
    Unsupported(String),

    /// Buffer access outside `0..len`. Always a caller bug.
    #[error("Index {index} out of range for buffer of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
