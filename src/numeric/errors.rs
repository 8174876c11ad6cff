// ============================================================================
// Numeric Errors
// Error types for exact rational arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during rational arithmetic and decimal parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Numerator or denominator left the i128 range
    Overflow,
    /// Attempted division by zero (or a zero denominator)
    DivisionByZero,
    /// Input string or value is not a decimal number
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value too large to represent exactly")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: not a decimal number"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
