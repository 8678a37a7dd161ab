//! transformations::logexp — the softplus family (positive/negative domains).
//!
//! Purpose
//! -------
//! Provide the guarded softplus bijection [`Logexp`] onto the positive
//! reals, its point reflection [`NegativeLogexp`] onto the negative reals,
//! and the hard-clipped variant [`LogexpClipped`] that bounds both the
//! input exponent and the output so no input magnitude can overflow.
//!
//! Key behaviors
//! -------------
//! - Compute `ln(1 + exp(x))` via `exp(x).ln_1p()` below the saturation
//!   threshold and return `x` directly above it, where softplus is the
//!   identity to machine precision.
//! - Compute the inverse via `exp_m1(y).ln()` with the matching guard,
//!   avoiding the catastrophic cancellation of the naïve `ln(exp(y) − 1)`.
//! - Express the gradient factor in terms of the constrained value:
//!   `1 − exp(−y)` (the sigmoid of the pre-image), saturating to `1`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `finv(f(x)) ≈ x` for all `x` below the saturation threshold, and
//!   exactly `x` above it (both branches return the input unchanged).
//! - `f` is strictly positive for all finite `x`; `finv` on non-positive
//!   `y` yields NaN (caller error by contract).
//! - `LogexpClipped` outputs always lie in `[CLIP_MIN, CLIP_MAX]`.
//!
//! Conventions
//! -----------
//! - `NegativeLogexp` owns a private `Logexp` and delegates every operation
//!   through explicit reflection; it has no guarded formulas of its own.
//! - Repair takes the absolute value (negated for the reflected variant),
//!   so in-domain values round-trip bit-identically through `initialize`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover formula agreement on safe grids, the saturation
//!   branches, clipping floors/ceilings, reflection delegation, and
//!   constructor validation for the clipped variant.

use std::fmt;

use crate::transformations::{
    contract::Transformation,
    domain::Domain,
    errors::{TransformError, TransformResult},
    limits::{CLIP_MAX, CLIP_MIN, LOG_CLIP_MAX, LOG_CLIP_MIN, SATURATION_LIMIT},
};

/// Logexp — guarded softplus onto the positive reals.
///
/// `f(x) = ln(1 + e^x)`, saturating to the identity above the shared
/// threshold. The workhorse positive-domain transform: smooth, monotone,
/// and asymptotically linear, so optimizer steps in unconstrained space
/// translate into well-scaled moves near both ends of the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logexp;

impl fmt::Display for Logexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(+ve)")
    }
}

impl Transformation for Logexp {
    fn domain(&self) -> Domain {
        Domain::Positive
    }

    fn f(&self, x: f64) -> f64 {
        if x > *SATURATION_LIMIT { x } else { x.exp().ln_1p() }
    }

    fn finv(&self, y: f64) -> f64 {
        if y > *SATURATION_LIMIT { y } else { y.exp_m1().ln() }
    }

    fn gradfactor(&self, y: f64) -> f64 {
        // 1 − e^{−y} is the sigmoid of the pre-image x, reparameterized
        // in terms of y = softplus(x).
        if y > *SATURATION_LIMIT { 1.0 } else { 1.0 - (-y).exp() }
    }

    fn repair(&self, y: f64) -> f64 {
        y.abs()
    }
}

/// NegativeLogexp — point reflection of [`Logexp`] onto the negative reals.
///
/// Every operation delegates to the owned base instance: `f(x) = −base.f(x)`,
/// `finv(y) = base.finv(−y)`, `gradfactor(y) = −base.gradfactor(−y)`,
/// `repair(y) = −base.repair(y)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NegativeLogexp {
    base: Logexp,
}

impl fmt::Display for NegativeLogexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(-ve)")
    }
}

impl Transformation for NegativeLogexp {
    fn domain(&self) -> Domain {
        Domain::Negative
    }

    fn f(&self, x: f64) -> f64 {
        -self.base.f(x)
    }

    fn finv(&self, y: f64) -> f64 {
        self.base.finv(-y)
    }

    fn gradfactor(&self, y: f64) -> f64 {
        -self.base.gradfactor(-y)
    }

    fn repair(&self, y: f64) -> f64 {
        -self.base.repair(y)
    }
}

/// LogexpClipped — softplus with hard clipping, positive domain.
///
/// Clamps the input exponent into `[ln(CLIP_MIN), ln(CLIP_MAX)]` before
/// exponentiating and the result into `[CLIP_MIN, CLIP_MAX]`, so no input
/// magnitude can overflow regardless of what the optimizer proposes.
///
/// The constructor-supplied `lower` bound (default 1e-6) is validated and
/// retained for callers but is not enforced by any operation; the gradient
/// factor in particular does not zero out below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogexpClipped {
    lower: f64,
}

impl LogexpClipped {
    /// Default lower bound retained for callers.
    pub const DEFAULT_LOWER: f64 = 1e-6;

    /// Construct a clipped softplus with a caller-visible lower bound.
    ///
    /// Returns
    /// -------
    /// `TransformResult<LogexpClipped>`
    ///   - `Ok` when `lower` is finite and strictly positive.
    ///   - `Err(TransformError::InvalidLowerBound)` otherwise.
    pub fn new(lower: f64) -> TransformResult<Self> {
        if !lower.is_finite() {
            return Err(TransformError::InvalidLowerBound {
                lower,
                reason: "lower bound must be finite",
            });
        }
        if lower <= 0.0 {
            return Err(TransformError::InvalidLowerBound {
                lower,
                reason: "lower bound must be strictly positive",
            });
        }
        Ok(LogexpClipped { lower })
    }

    /// The caller-visible lower bound fixed at construction.
    pub fn lower(&self) -> f64 {
        self.lower
    }
}

impl Default for LogexpClipped {
    fn default() -> Self {
        LogexpClipped { lower: Self::DEFAULT_LOWER }
    }
}

impl fmt::Display for LogexpClipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(+ve_c)")
    }
}

impl Transformation for LogexpClipped {
    fn domain(&self) -> Domain {
        Domain::Positive
    }

    fn f(&self, x: f64) -> f64 {
        let exp = x.clamp(*LOG_CLIP_MIN, *LOG_CLIP_MAX).exp();
        exp.ln_1p().clamp(CLIP_MIN, CLIP_MAX)
    }

    fn finv(&self, y: f64) -> f64 {
        // Guarded softplus inverse, same form as Logexp: clipping changes
        // the forward map only at the extremes, so the interior inverse is
        // identical.
        if y > *SATURATION_LIMIT { y } else { y.exp_m1().ln() }
    }

    fn gradfactor(&self, y: f64) -> f64 {
        // (e^y − 1)/e^y degenerates to ∞/∞ once e^y overflows; above the
        // saturation threshold the ratio is 1 to machine precision.
        if y > *SATURATION_LIMIT {
            1.0
        } else {
            let ey = y.exp();
            (ey - 1.0) / ey
        }
    }

    fn repair(&self, y: f64) -> f64 {
        y.abs()
    }
}
