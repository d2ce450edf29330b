//! Error types for isoline extraction.

use thiserror::Error;

/// Result type alias using ContourError.
pub type ContourResult<T> = Result<T, ContourError>;

/// Primary error type for field construction and contour extraction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContourError {
    // === Input shape errors ===
    #[error(
        "Dimension mismatch: coordinate vectors describe {expected_width}x{expected_height}, \
         sample array is {actual_width}x{actual_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    #[error("Dimension mismatch: expected {expected_len} samples, buffer holds {actual_len}")]
    BufferLengthMismatch {
        expected_len: usize,
        actual_len: usize,
    },

    // === Internal scan errors ===
    #[error("Index ({i}, {j}) out of range for {width}x{height} field")]
    IndexOutOfRange {
        i: usize,
        j: usize,
        width: usize,
        height: usize,
    },

    // === Configuration errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ContourError {
    /// True for every variant that reports a field whose sample extents
    /// disagree with its coordinate vectors.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            ContourError::DimensionMismatch { .. } | ContourError::BufferLengthMismatch { .. }
        )
    }
}

// Conversion from common error types
impl From<std::io::Error> for ContourError {
    fn from(err: std::io::Error) -> Self {
        ContourError::InvalidConfig(err.to_string())
    }
}

impl From<serde_json::Error> for ContourError {
    fn from(err: serde_json::Error) -> Self {
        ContourError::InvalidConfig(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_classification() {
        let err = ContourError::DimensionMismatch {
            expected_width: 5,
            expected_height: 3,
            actual_width: 6,
            actual_height: 3,
        };
        assert!(err.is_dimension_mismatch());

        let err = ContourError::BufferLengthMismatch {
            expected_len: 12,
            actual_len: 11,
        };
        assert!(err.is_dimension_mismatch());

        let err = ContourError::IndexOutOfRange {
            i: 4,
            j: 0,
            width: 4,
            height: 4,
        };
        assert!(!err.is_dimension_mismatch());
    }

    #[test]
    fn test_error_messages() {
        let err = ContourError::DimensionMismatch {
            expected_width: 5,
            expected_height: 3,
            actual_width: 6,
            actual_height: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("5x3"));
        assert!(msg.contains("6x3"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: ContourError = json_err.into();
        assert!(matches!(err, ContourError::InvalidConfig(ref m) if m.starts_with("JSON error")));
    }
}
