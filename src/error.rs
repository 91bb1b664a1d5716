//! Binary Value Error Types
//!
//! Core error types for binary value construction and manipulation.

use thiserror::Error;

/// Result type for binfield operations
pub type Result<T> = std::result::Result<T, BinaryError>;

/// Binary value errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinaryError {
    /// Construction or operand input rejected
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Target byte length too small for the stored magnitude
    #[error("Encoding overflow: {required} bytes required but only {length} available")]
    EncodingOverflow { length: usize, required: usize },

    /// Negative shift amount
    #[error("Cannot shift by a negative amount: {0}")]
    InvalidShift(i64),

    /// Unrecognized operation name
    #[error("Invalid operation '{0}'. Available operations are 'and', 'or', 'xor', 'not', 'shift_left', 'shift_right'")]
    InvalidOperation(String),

    /// Byte swap attempted on an odd-length value
    #[error("Cannot swap an odd number of bytes ({0})")]
    OddByteLength(usize),

    /// Non-positive alignment
    #[error("Alignment must be greater than 0")]
    InvalidAlignment,

    /// Malformed digit string
    #[error("Parse error: invalid base-{radix} digit string '{input}'")]
    ParseError { input: String, radix: u32 },
}

// Helper methods for creating errors
impl BinaryError {
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        BinaryError::InvalidValue(msg.into())
    }

    pub fn invalid_operation(name: impl Into<String>) -> Self {
        BinaryError::InvalidOperation(name.into())
    }

    pub fn parse_error(input: impl Into<String>, radix: u32) -> Self {
        BinaryError::ParseError {
            input: input.into(),
            radix,
        }
    }

    /// Get error code (for logs and diagnostics)
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue(_) => "INVALID_VALUE",
            Self::EncodingOverflow { .. } => "ENCODING_OVERFLOW",
            Self::InvalidShift(_) => "INVALID_SHIFT",
            Self::InvalidOperation(_) => "INVALID_OPERATION",
            Self::OddByteLength(_) => "ODD_BYTE_LENGTH",
            Self::InvalidAlignment => "INVALID_ALIGNMENT",
            Self::ParseError { .. } => "PARSE_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BinaryError::invalid_value("test").error_code(),
            "INVALID_VALUE"
        );
        assert_eq!(
            BinaryError::EncodingOverflow {
                length: 1,
                required: 2
            }
            .error_code(),
            "ENCODING_OVERFLOW"
        );
        assert_eq!(BinaryError::InvalidAlignment.error_code(), "INVALID_ALIGNMENT");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            BinaryError::InvalidShift(-3).to_string(),
            "Cannot shift by a negative amount: -3"
        );
        assert_eq!(
            BinaryError::OddByteLength(3).to_string(),
            "Cannot swap an odd number of bytes (3)"
        );
        assert!(BinaryError::invalid_operation("nand")
            .to_string()
            .contains("'shift_left'"));
    }
}
