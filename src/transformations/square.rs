//! Squaring transform onto the positive reals.
//!
//! No saturation is needed: `x²` stays finite for every finite `x` the
//! optimizer can reach before the objective itself degenerates. The map is
//! not injective over all reals (±x collide), which is acceptable for
//! parameters where only the magnitude matters.

use std::fmt;

use crate::transformations::{contract::Transformation, domain::Domain};

/// Square — `f(x) = x²`, positive domain.
///
/// `finv(y) = √y` (NaN for negative `y`), `gradfactor(y) = 2√y` since
/// `d/dx x² = 2x = 2√y` on the principal branch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Square;

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(+sq)")
    }
}

impl Transformation for Square {
    fn domain(&self) -> Domain {
        Domain::Positive
    }

    fn f(&self, x: f64) -> f64 {
        x * x
    }

    fn finv(&self, y: f64) -> f64 {
        y.sqrt()
    }

    fn gradfactor(&self, y: f64) -> f64 {
        2.0 * y.sqrt()
    }

    fn repair(&self, y: f64) -> f64 {
        y.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Round-trip on the principal (non-negative) branch.
    // - The gradient-factor formula and out-of-domain NaN behavior.
    //
    // They intentionally DO NOT cover:
    // - Finite-difference gradient agreement (integration suite).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the round-trip `finv(f(x)) == x` on the non-negative branch.
    //
    // Given
    // -----
    // - Non-negative x values of varying magnitude.
    //
    // Expect
    // ------
    // - The round-trip recovers x to tight relative tolerance.
    fn square_round_trip_on_principal_branch() {
        // Arrange
        let t = Square;
        let grid = [0.0, 0.25, 1.0, 7.5, 1e4];

        // Act / Assert
        for &x in &grid {
            assert_relative_eq!(t.finv(t.f(x)), x, max_relative = 1e-12, epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify `gradfactor(y) = 2√y` against the chain-rule identity
    // `df/dx = 2x` at `y = x²`.
    //
    // Given
    // -----
    // - Positive x values.
    //
    // Expect
    // ------
    // - `gradfactor(x²)` equals `2x` to tight tolerance; negative y yields
    //   NaN.
    fn square_gradfactor_matches_chain_rule() {
        // Arrange
        let t = Square;

        // Act / Assert
        for &x in &[0.5, 2.0, 10.0] {
            assert_relative_eq!(t.gradfactor(t.f(x)), 2.0 * x, max_relative = 1e-12);
        }
        assert!(t.gradfactor(-1.0).is_nan());
        assert_eq!(Square.to_string(), "(+sq)");
    }
}
