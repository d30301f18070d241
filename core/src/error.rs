use thiserror::Error;

/// Result type for diagtree operations
pub type Result<T> = std::result::Result<T, DiagnoserError>;

/// Error types for diagtree operations
#[derive(Error, Debug)]
pub enum DiagnoserError {
    /// Requested tree depth is outside `[0, number of symptoms]`
    #[error("Invalid depth: {depth} (must be between 0 and {max})")]
    InvalidDepth { depth: usize, max: usize },

    /// Symptom list contains the same symptom more than once
    #[error("Duplicate symptom: {0}")]
    DuplicateSymptom(String),

    /// Operation needs at least one record
    #[error("Records list is empty")]
    EmptyRecords,

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DiagnoserError::InvalidDepth { depth: 4, max: 2 };
        assert_eq!(err.to_string(), "Invalid depth: 4 (must be between 0 and 2)");

        let err = DiagnoserError::DuplicateSymptom("fever".to_string());
        assert_eq!(err.to_string(), "Duplicate symptom: fever");

        assert_eq!(DiagnoserError::EmptyRecords.to_string(), "Records list is empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DiagnoserError = io.into();
        assert!(matches!(err, DiagnoserError::IoError(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
