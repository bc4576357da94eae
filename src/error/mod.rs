//! Error types and handling infrastructure for the JSON combine pipeline

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error types for the combine process
#[derive(Debug, thiserror::Error)]
pub enum CombineErrorKind {
    #[error("directory access error: {message}")]
    DirectoryAccess {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("invalid UTF-8 in {}: undecodable byte at offset {offset}", .path.display())]
    Decode { path: PathBuf, offset: usize },

    #[error("file too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("write error for {}: {message}", .path.display())]
    Write { message: String, path: PathBuf },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("serialization error: {message}")]
    Serialize { message: String },
}

impl CombineErrorKind {
    pub fn directory_access(message: String, path: Option<PathBuf>) -> Self {
        Self::DirectoryAccess { message, path }
    }

    pub fn decode(path: PathBuf, offset: usize) -> Self {
        Self::Decode { path, offset }
    }

    pub fn write(message: String, path: PathBuf) -> Self {
        Self::Write { message, path }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn serialize(message: String) -> Self {
        Self::Serialize { message }
    }
}

/// Main error type for combine operations
#[derive(Debug, thiserror::Error)]
pub enum CombineError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Combine {
        kind: CombineErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl CombineError {
    pub fn parse(message: String, location: Option<(usize, usize)>) -> Self {
        Self::ParseError(ParseError::new(message, location))
    }

    pub fn combine(kind: CombineErrorKind) -> Self {
        Self::Combine { kind, source: None }
    }

    pub fn combine_with_source(kind: CombineErrorKind, source: anyhow::Error) -> Self {
        Self::Combine {
            kind,
            source: Some(source),
        }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => {
                let mut msg = match err.location {
                    Some((line, col)) => format!(
                        "JSON parse error at line {}, column {}: {}",
                        line, col, err.message
                    ),
                    None => format!("JSON parse error: {}", err.message),
                };
                if let Some(path) = &err.path {
                    msg.push_str(&format!(" (in {})", path.display()));
                }
                msg
            }
            Self::Combine { kind, .. } => match kind {
                CombineErrorKind::FileTooLarge { path, size, limit } => {
                    format!(
                        "JSON file too large: {} is {} bytes (limit: {} bytes)",
                        path.display(),
                        size,
                        limit
                    )
                }
                CombineErrorKind::Decode { path, offset } => {
                    format!(
                        "File is not valid UTF-8: {} (first bad byte at offset {})",
                        path.display(),
                        offset
                    )
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub path: Option<PathBuf>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            path: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        if let Some(path) = &self.path {
            write!(f, " in {}", path.display())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for combine operations
pub type CombineResult<T> = Result<T, CombineError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
