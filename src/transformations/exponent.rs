//! transformations::exponent — the exponential pair (positive/negative).
//!
//! Purpose
//! -------
//! Provide the saturated exponential bijection [`Exponent`] onto the
//! positive reals and its point reflection [`NegativeExponent`] onto the
//! negative reals. Unlike the softplus family, the exponential map grows
//! multiplicatively, which suits scale-like parameters spanning many orders
//! of magnitude.
//!
//! Key behaviors
//! -------------
//! - Saturate `f(x) = e^x` at `exp(±SATURATION_LIMIT)` so extreme optimizer
//!   proposals map to finite boundary values instead of overflowing to ∞ or
//!   underflowing to 0 (which would make `finv` blow up).
//! - `finv(y) = ln(y)`: NaN for non-positive `y`, by the documented caller
//!   contract.
//! - `gradfactor(y) = y`, since `d/dx e^x = e^x = y`.
//!
//! Invariants & assumptions
//! ------------------------
//! - `f` always returns a strictly positive finite value for finite input.
//! - `NegativeExponent::gradfactor` returns `y` unnegated: the constrained
//!   value is itself negative, so `d/dx(−e^x) = −e^x = y` already carries
//!   the sign. The asymmetry with the softplus reflection is intentional.
//!
//! Testing notes
//! -------------
//! - Unit tests cover saturation on both sides, round-trips inside the
//!   unsaturated band, the unnegated reflected gradient factor, and tags.

use std::fmt;

use crate::transformations::{
    contract::Transformation, domain::Domain, limits::SATURATION_LIMIT,
};

/// Exponent — saturated exponential onto the positive reals.
///
/// `f(x) = e^x`, pinned to `exp(±SATURATION_LIMIT)` outside the
/// representable precision band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exponent;

impl fmt::Display for Exponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(+ve)")
    }
}

impl Transformation for Exponent {
    fn domain(&self) -> Domain {
        Domain::Positive
    }

    fn f(&self, x: f64) -> f64 {
        let lim = *SATURATION_LIMIT;
        if x > lim {
            lim.exp()
        } else if x < -lim {
            (-lim).exp()
        } else {
            x.exp()
        }
    }

    fn finv(&self, y: f64) -> f64 {
        y.ln()
    }

    fn gradfactor(&self, y: f64) -> f64 {
        y
    }

    fn repair(&self, y: f64) -> f64 {
        y.abs()
    }
}

/// NegativeExponent — point reflection of [`Exponent`] onto the negative
/// reals.
///
/// `f(x) = −base.f(x)` and `finv(y) = base.finv(−y)`; the gradient factor
/// is `y` unnegated because the negative constrained value already carries
/// the derivative's sign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NegativeExponent {
    base: Exponent,
}

impl fmt::Display for NegativeExponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(-ve)")
    }
}

impl Transformation for NegativeExponent {
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
        // Deliberately unnegated: d/dx(−e^x) = −e^x = y.
        y
    }

    fn repair(&self, y: f64) -> f64 {
        -self.base.repair(y)
    }
}
