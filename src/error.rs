use serde_json::Error as JsonError;
use std::fmt;

#[derive(Debug)]
pub enum PmonError {
    DetectionError(String),
    UnsupportedTypeError(String),
    UnsupportedFormatError(String),
    IoError(String),
}

impl fmt::Display for PmonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DetectionError(msg) => write!(f, "Detection error: {}", msg),
            Self::UnsupportedTypeError(kind) => {
                write!(f, "unsupported project type: {}", kind)
            }
            Self::UnsupportedFormatError(format) => {
                write!(f, "unsupported output format: {}", format)
            }
            Self::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for PmonError {}

impl From<std::io::Error> for PmonError {
    fn from(error: std::io::Error) -> Self {
        PmonError::IoError(error.to_string())
    }
}

impl From<JsonError> for PmonError {
    fn from(error: JsonError) -> Self {
        PmonError::IoError(format!("JSON serialization error: {}", error))
    }
}
