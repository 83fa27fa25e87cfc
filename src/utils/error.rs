use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for Recipebook operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for Recipebook operations
#[derive(Debug)]
pub enum RecipebookError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Front matter parsing error
    FrontMatter(String),
    /// Content directory or entry error
    Content(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for RecipebookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipebookError::Io(err) => write!(f, "IO error: {}", err),
            RecipebookError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RecipebookError::FrontMatter(msg) => write!(f, "Front matter error: {}", msg),
            RecipebookError::Content(msg) => write!(f, "Content error: {}", msg),
            RecipebookError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for RecipebookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecipebookError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RecipebookError {
    fn from(err: io::Error) -> Self {
        RecipebookError::Io(err)
    }
}

impl From<String> for RecipebookError {
    fn from(msg: String) -> Self {
        RecipebookError::Generic(msg)
    }
}

impl From<&str> for RecipebookError {
    fn from(msg: &str) -> Self {
        RecipebookError::Generic(msg.to_string())
    }
}
