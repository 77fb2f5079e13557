use thiserror::Error;

/// Main error type for ireval
#[derive(Error, Debug)]
pub enum IrevalError {
    /// A judgment row that could not be parsed
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// A ratio was requested with a zero denominator
    #[error("Division by zero for run {run_id}: {reason}")]
    DivisionByZero { run_id: u32, reason: String },

    /// A run that never appeared in the input
    #[error("No judgment data for run {0}")]
    MissingRunData(u32),

    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenient Result type using IrevalError
pub type Result<T> = std::result::Result<T, IrevalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IrevalError::Config("Test error".to_string());
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("Test error"));
    }

    #[test]
    fn test_malformed_input_names_line() {
        let err = IrevalError::MalformedInput {
            line: 7,
            reason: "expected at least 3 fields, found 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("3 fields"));
    }

    #[test]
    fn test_missing_run_names_run() {
        let err = IrevalError::MissingRunData(42);
        assert!(err.to_string().contains("run 42"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: IrevalError = io_err.into();
        assert!(matches!(err, IrevalError::Io(_)));
    }
}
