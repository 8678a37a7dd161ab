//! Constraint domains a transformation can map into.
//!
//! The domain is declarative: it tells callers (containers, display code)
//! what range a transform targets. Nothing here enforces membership; each
//! variant's `f` is the only authority on the values it actually produces.

use std::fmt;

/// Domain — the constrained-space range a transformation maps into.
///
/// Used by callers for validation and display only. A transformation's
/// operations do not consult it at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Strictly positive reals `(0, ∞)`.
    Positive,
    /// Strictly negative reals `(−∞, 0)`.
    Negative,
    /// A bounded open interval `(lower, upper)` fixed per instance.
    Bounded,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Positive => write!(f, "positive"),
            Domain::Negative => write!(f, "negative"),
            Domain::Bounded => write!(f, "bounded"),
        }
    }
}
