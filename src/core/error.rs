//! Error types for the logger
//!
//! These errors stay inside the crate: the emission API never surfaces a
//! failure to callers. Sinks return `Result` so the logger can count what
//! went wrong, then swallow it.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error while writing to the destination
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    Writer(String),
}

impl LoggerError {
    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoggerError::writer("destination closed");
        assert_eq!(err.to_string(), "Writer error: destination closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();
        assert!(matches!(err, LoggerError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
