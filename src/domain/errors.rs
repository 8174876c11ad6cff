// ============================================================================
// Mixture Errors
// Failure taxonomy shared by every solver path
// ============================================================================

use crate::numeric::{NumericError, Rational};
use std::fmt;

/// Errors a solve request can end with.
///
/// Everything except `InternalInvariant` is caused by the request itself and
/// is reported back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MixError {
    /// Malformed or out-of-domain input
    Validation { message: String },

    /// Two components share an intensity that differs from the target
    DegenerateComponents { intensity: Rational, target: Rational },

    /// Target intensity lies outside the interval spanned by a pair
    InfeasibleRange {
        target: Rational,
        low: Rational,
        high: Rational,
    },

    /// No admissible allocation exists for the whole request
    Infeasible { message: String },

    /// Every ratio term is zero
    DegenerateRatio,

    /// A computed result failed its own post-condition
    InternalInvariant { message: String },

    /// Arithmetic left the exactly representable range
    Numeric(NumericError),
}

impl MixError {
    pub fn validation(message: impl Into<String>) -> Self {
        MixError::Validation {
            message: message.into(),
        }
    }

    pub fn infeasible(message: impl Into<String>) -> Self {
        MixError::Infeasible {
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        MixError::InternalInvariant {
            message: message.into(),
        }
    }

    /// Whether the failure was caused by the request rather than the engine.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, MixError::InternalInvariant { .. })
    }

    /// Stable short name, used in logs and events.
    pub fn kind(&self) -> &'static str {
        match self {
            MixError::Validation { .. } => "validation",
            MixError::DegenerateComponents { .. } => "degenerate_components",
            MixError::InfeasibleRange { .. } => "infeasible_range",
            MixError::Infeasible { .. } => "infeasible",
            MixError::DegenerateRatio => "degenerate_ratio",
            MixError::InternalInvariant { .. } => "internal_invariant",
            MixError::Numeric(_) => "numeric",
        }
    }
}

impl fmt::Display for MixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixError::Validation { message } => write!(f, "invalid input: {}", message),
            MixError::DegenerateComponents { intensity, target } => write!(
                f,
                "components share intensity {} so they cannot reach intensity {}",
                intensity.to_f64(),
                target.to_f64()
            ),
            MixError::InfeasibleRange { target, low, high } => write!(
                f,
                "desired intensity {} must lie between {} and {}",
                target.to_f64(),
                low.to_f64(),
                high.to_f64()
            ),
            MixError::Infeasible { message } => write!(f, "no feasible mixture: {}", message),
            MixError::DegenerateRatio => {
                write!(f, "cannot reduce a ratio whose terms are all zero")
            },
            MixError::InternalInvariant { message } => {
                write!(f, "internal invariant violated: {}", message)
            },
            MixError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MixError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for MixError {
    fn from(err: NumericError) -> Self {
        MixError::Numeric(err)
    }
}

/// Result type alias for solver operations
pub type MixResult<T> = Result<T, MixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MixError::InfeasibleRange {
            target: Rational::from_integer(100),
            low: Rational::from_integer(70),
            high: Rational::from_integer(95),
        };
        assert_eq!(
            err.to_string(),
            "desired intensity 100 must lie between 70 and 95"
        );

        assert_eq!(
            MixError::validation("total amount must be positive").to_string(),
            "invalid input: total amount must be positive"
        );
    }

    #[test]
    fn test_user_error_classification() {
        assert!(MixError::DegenerateRatio.is_user_error());
        assert!(MixError::Numeric(NumericError::Overflow).is_user_error());
        assert!(!MixError::invariant("ratio not coprime").is_user_error());
    }

    #[test]
    fn test_from_numeric_error() {
        let err: MixError = NumericError::DivisionByZero.into();
        assert_eq!(err, MixError::Numeric(NumericError::DivisionByZero));
        assert_eq!(err.kind(), "numeric");
        assert!(std::error::Error::source(&err).is_some());
    }
}
