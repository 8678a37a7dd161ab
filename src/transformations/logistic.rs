//! transformations::logistic — bounded-interval transform with per-instance
//! bounds.
//!
//! Purpose
//! -------
//! Map the whole real line onto a caller-chosen open interval
//! `(lower, upper)` through a rescaled sigmoid, so bounded parameters (e.g.
//! mixture weights, correlation-like coefficients) can be optimized without
//! box constraints in the solver.
//!
//! Key behaviors
//! -------------
//! - `f(x) = lower + (upper − lower)/(1 + e^{−x})`: monotone, saturating to
//!   the interval endpoints as `x → ∓∞` without overflow (the denominator
//!   overflows to ∞ first, which drives the ratio to 0).
//! - `finv` clamps both the numerator `y − lower` and the denominator
//!   `upper − y` away from zero by [`BOUNDARY_EPS`] so endpoint values map
//!   to large finite logits rather than ±∞.
//! - `gradfactor(y) = (y − lower)(upper − y)/(upper − lower)`, the sigmoid
//!   derivative reparameterized in terms of the constrained value.
//! - Repair replaces out-of-interval entries with `f(0)`, the interval
//!   midpoint, leaving in-interval entries untouched.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower < upper`, both finite, enforced at construction via
//!   [`Logistic::new`]; `difference = upper − lower` is cached and never
//!   mutated.
//! - `f` maps every finite `x` strictly inside `[lower, upper]` up to
//!   floating-point rounding at the endpoints.
//!
//! Testing notes
//! -------------
//! - Unit tests cover constructor validation, midpoint/endpoint behavior,
//!   boundary-guarded inversion, the gradient-factor formula, repair
//!   semantics, and the interval display tag.

use std::fmt;

use crate::transformations::{
    contract::Transformation,
    domain::Domain,
    errors::{TransformError, TransformResult},
    limits::BOUNDARY_EPS,
};

/// Logistic — rescaled sigmoid onto a bounded open interval.
///
/// Purpose
/// -------
/// Represent a per-parameter bounded constraint `(lower, upper)` as a
/// smooth bijection from the real line, with the bounds fixed at
/// construction and immutable thereafter.
///
/// Fields
/// ------
/// - `lower`: `f64` — interval lower bound (finite, `< upper`).
/// - `upper`: `f64` — interval upper bound (finite, `> lower`).
/// - `difference`: `f64` — cached `upper − lower`, the sigmoid's scale.
///
/// Invariants
/// ----------
/// - `lower < upper` and both bounds finite, established by
///   [`Logistic::new`] and never revalidated afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Logistic {
    lower: f64,
    upper: f64,
    difference: f64,
}

impl Logistic {
    /// Construct a bounded-interval transform from validated bounds.
    ///
    /// Parameters
    /// ----------
    /// - `lower`: `f64`
    ///   Interval lower bound in constrained space.
    /// - `upper`: `f64`
    ///   Interval upper bound in constrained space.
    ///
    /// Returns
    /// -------
    /// `TransformResult<Logistic>`
    ///   - `Ok(Logistic)` when both bounds are finite and `lower < upper`.
    ///   - `Err(TransformError::InvalidBounds)` otherwise.
    ///
    /// Errors
    /// ------
    /// - `TransformError::InvalidBounds`
    ///   Returned when either bound is non-finite or `lower >= upper`.
    ///
    /// Panics
    /// ------
    /// - Never panics; all invalid inputs are reported via the error type.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use paramspace::transformations::{Logistic, Transformation};
    /// let unit = Logistic::new(0.0, 1.0).unwrap();
    /// assert_eq!(unit.f(0.0), 0.5);
    ///
    /// assert!(Logistic::new(1.0, 0.0).is_err());
    /// ```
    pub fn new(lower: f64, upper: f64) -> TransformResult<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(TransformError::InvalidBounds {
                lower,
                upper,
                reason: "bounds must be finite",
            });
        }
        if lower >= upper {
            return Err(TransformError::InvalidBounds {
                lower,
                upper,
                reason: "lower must be strictly less than upper",
            });
        }
        Ok(Logistic { lower, upper, difference: upper - lower })
    }

    /// Interval lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Interval upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Cached `upper − lower`.
    pub fn difference(&self) -> f64 {
        self.difference
    }
}

impl fmt::Display for Logistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.lower, self.upper)
    }
}

impl Transformation for Logistic {
    fn domain(&self) -> Domain {
        Domain::Bounded
    }

    fn f(&self, x: f64) -> f64 {
        self.lower + self.difference / (1.0 + (-x).exp())
    }

    fn finv(&self, y: f64) -> f64 {
        let above_lower = (y - self.lower).clamp(BOUNDARY_EPS, f64::INFINITY);
        let below_upper = (self.upper - y).clamp(BOUNDARY_EPS, f64::INFINITY);
        (above_lower / below_upper).ln()
    }

    fn gradfactor(&self, y: f64) -> f64 {
        (y - self.lower) * (self.upper - y) / self.difference
    }

    fn repair(&self, y: f64) -> f64 {
        // Out-of-interval entries land on the midpoint f(0). NaN fails both
        // comparisons and passes through.
        if y < self.lower || y > self.upper { self.f(0.0) } else { y }
    }
}
