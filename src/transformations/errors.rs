/// Crate-wide result alias for transformation construction.
pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Logistic bounds must be finite with `lower < upper`.
    InvalidBounds {
        lower: f64,
        upper: f64,
        reason: &'static str,
    },

    /// LogexpClipped lower bound must be finite and strictly positive.
    InvalidLowerBound {
        lower: f64,
        reason: &'static str,
    },
}

impl std::error::Error for TransformError {}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::InvalidBounds { lower, upper, reason } => {
                write!(f, "Invalid interval bounds ({lower}, {upper}): {reason}")
            }
            TransformError::InvalidLowerBound { lower, reason } => {
                write!(f, "Invalid lower bound {lower}: {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Display formatting of each error variant.
    //
    // They intentionally DO NOT cover:
    // - The constructor validation paths that produce these errors (tested
    //   next to the constructors themselves).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidBounds` includes both bounds and the reason text.
    //
    // Given
    // -----
    // - An `InvalidBounds` error with bounds (2.0, 1.0).
    //
    // Expect
    // ------
    // - The formatted message contains both bounds and the reason.
    fn invalid_bounds_display_includes_bounds_and_reason() {
        let err = TransformError::InvalidBounds {
            lower: 2.0,
            upper: 1.0,
            reason: "lower must be strictly less than upper",
        };

        let text = err.to_string();
        assert!(text.contains("(2, 1)"));
        assert!(text.contains("lower must be strictly less than upper"));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidLowerBound` includes the offending value.
    //
    // Given
    // -----
    // - An `InvalidLowerBound` error with lower = -1.0.
    //
    // Expect
    // ------
    // - The formatted message contains the value and the reason.
    fn invalid_lower_bound_display_includes_value() {
        let err = TransformError::InvalidLowerBound {
            lower: -1.0,
            reason: "lower bound must be strictly positive",
        };

        let text = err.to_string();
        assert!(text.contains("-1"));
        assert!(text.contains("strictly positive"));
    }
}
