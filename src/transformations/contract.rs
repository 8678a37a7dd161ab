//! transformations::contract — the four-operation transformation trait.
//!
//! Purpose
//! -------
//! Define the functional contract every constrained-parameter transformation
//! implements: a forward map into constrained space, an inverse map back to
//! unconstrained space, a gradient-scaling factor expressed in terms of the
//! constrained value, and an initialization-time repair for user-supplied
//! starting values.
//!
//! Key behaviors
//! -------------
//! - Require the scalar operations (`f`, `finv`, `gradfactor`, `repair`)
//!   from each variant; provide the elementwise array operations
//!   (`f_array`, `finv_array`, `gradfactor_array`, `initialize`) on top of
//!   them so every variant gets consistent array semantics for free.
//! - Emit exactly one `log::warn!` from [`Transformation::initialize`] per
//!   call that corrected at least one entry, and none otherwise.
//!
//! Invariants & assumptions
//! ------------------------
//! - Scalar operations are pure and total over finite inputs; variants
//!   branch or clip internally so extreme magnitudes stay finite.
//! - `gradfactor` takes the *constrained* value `y = f(x)`, not `x`: the
//!   factor is reparameterized so callers that only track constrained values
//!   can still chain-rule without re-deriving `x`. It is consumed as
//!   `grad_unconstrained = grad_constrained * gradfactor(y)`.
//! - `finv` and `gradfactor` are partial in the mathematical sense: values
//!   outside the variant's declared domain yield NaN/∞ elementwise. That is
//!   caller error, not a condition the variant guards against beyond its
//!   documented clipping.
//!
//! Conventions
//! -----------
//! - Array operations take `ArrayViewD<f64>` and return `ArrayD<f64>` so
//!   the trait stays object-safe and shape-generic; callers with
//!   fixed-dimension arrays pass `arr.view().into_dyn()`.
//! - The `Display` supertrait carries the short domain tag used when
//!   annotating constrained parameters in summaries (e.g. `(+ve)`,
//!   `(0,1)`).
//! - The trait itself plays the role of the abstract base: only concrete
//!   variants exist, so there is no runtime "not implemented" failure mode
//!   to guard against.
//!
//! Downstream usage
//! ----------------
//! - Parameter containers hold a transformation per constrained parameter
//!   (concretely or as `Box<dyn Transformation>`) and call `f`/`finv` to
//!   convert between stored and reported values.
//! - Optimizers call `gradfactor` once per step per parameter.
//!
//! Testing notes
//! -------------
//! - The provided array operations are exercised here against `Logexp` (the
//!   simplest concrete variant); per-variant scalar semantics are tested in
//!   the variant files and in the integration suite.

use ndarray::{ArrayD, ArrayViewD};

use crate::transformations::domain::Domain;

/// Log target for initialization-repair warnings.
pub const WARN_TARGET: &str = "paramspace::transformations";

/// Transformation — bijection plus gradient factor between optimizer space
/// and a constrained parameter domain.
///
/// Purpose
/// -------
/// Capture the narrow contract the surrounding model/optimizer consumes: it
/// holds unconstrained values, asks for the constrained value when
/// evaluating the objective, and asks for the gradient factor to rescale a
/// constrained-space gradient before taking a step.
///
/// Key behaviors
/// -------------
/// - `f` / `finv` form a bijection away from saturation zones.
/// - `gradfactor` returns `df/dx` as a function of the constrained value.
/// - `repair` is the pure value-correction used by `initialize`.
/// - The provided array operations apply the scalar operations elementwise
///   over arrays of arbitrary shape.
///
/// Invariants
/// ----------
/// - Implementations own no mutable state; construction-time bounds (where
///   present) are fixed for the instance's lifetime.
/// - No operation panics or returns an error for finite inputs.
///
/// Notes
/// -----
/// - Reflected variants delegate to a privately owned base instance rather
///   than re-deriving the guarded formulas.
pub trait Transformation: std::fmt::Display {
    /// The constrained-space range this transform maps into.
    fn domain(&self) -> Domain;

    /// Forward map: unconstrained `x` → constrained `y`.
    fn f(&self, x: f64) -> f64;

    /// Inverse map: constrained `y` → unconstrained `x`.
    ///
    /// Undefined (NaN/∞) when `y` lies outside the declared domain.
    fn finv(&self, y: f64) -> f64;

    /// Gradient-scaling factor `df/dx` evaluated where `f(x) = y`,
    /// expressed as a function of the constrained value `y`.
    fn gradfactor(&self, y: f64) -> f64;

    /// Pure correction of a possibly out-of-domain starting value.
    ///
    /// Returns a value inside the declared domain; in-domain inputs pass
    /// through unchanged. Never fails and emits no warning — warning
    /// emission is handled by [`Transformation::initialize`].
    fn repair(&self, y: f64) -> f64;

    /// Elementwise forward map over an array of arbitrary shape.
    fn f_array(&self, x: ArrayViewD<'_, f64>) -> ArrayD<f64> {
        x.mapv(|v| self.f(v))
    }

    /// Elementwise inverse map over an array of arbitrary shape.
    fn finv_array(&self, y: ArrayViewD<'_, f64>) -> ArrayD<f64> {
        y.mapv(|v| self.finv(v))
    }

    /// Elementwise gradient factor over an array of arbitrary shape.
    fn gradfactor_array(&self, y: ArrayViewD<'_, f64>) -> ArrayD<f64> {
        y.mapv(|v| self.gradfactor(v))
    }

    /// initialize — repair out-of-domain starting values, warning once.
    ///
    /// Purpose
    /// -------
    /// Given user-supplied starting values that may violate the domain,
    /// return corrected values inside the domain. Emits exactly one
    /// `log::warn!` (target [`WARN_TARGET`]) when any entry was corrected,
    /// and none when all entries were already in-domain.
    ///
    /// Parameters
    /// ----------
    /// - `values`: `ArrayViewD<f64>`
    ///   Proposed constrained-space starting values of arbitrary shape.
    ///
    /// Returns
    /// -------
    /// `ArrayD<f64>`
    ///   The elementwise-repaired values. Same shape as the input.
    ///
    /// Errors
    /// ------
    /// - Never fails; correction is always possible for finite inputs.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    ///
    /// Notes
    /// -----
    /// - The warning is a side channel only: callers capture, redirect, or
    ///   silence it through whatever `log::Log` implementation they install.
    /// - NaN entries pass through as NaN; repairing a NaN into the domain
    ///   would invent a value the caller never proposed.
    fn initialize(&self, values: ArrayViewD<'_, f64>) -> ArrayD<f64> {
        let repaired = values.mapv(|v| self.repair(v));
        let corrected = values
            .iter()
            .zip(repaired.iter())
            .filter(|(before, after)| value_changed(**before, **after))
            .count();
        if corrected > 0 {
            log::warn!(
                target: WARN_TARGET,
                "changing {corrected} parameter value(s) to satisfy the {} domain constraint",
                self.domain()
            );
        }
        repaired
    }
}

/// True when repair actually altered a value. NaN → NaN is not a change.
fn value_changed(before: f64, after: f64) -> bool {
    before != after && !(before.is_nan() && after.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transformations::logexp::Logexp;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The provided elementwise array operations against a concrete variant.
    // - Change detection inside `initialize`, including NaN and signed-zero
    //   edge cases.
    //
    // They intentionally DO NOT cover:
    // - Warning emission counts (asserted through a counting logger in the
    //   integration suite; no logger is installed in unit tests).
    // - Per-variant scalar formulas (tested in the variant files).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that the provided array operations apply the scalar operations
    // elementwise and preserve shape.
    //
    // Given
    // -----
    // - A 2×2 array of unconstrained values and the `Logexp` variant.
    //
    // Expect
    // ------
    // - `f_array` matches scalar `f` entry by entry and keeps the shape.
    fn array_operations_apply_scalar_operations_elementwise() {
        // Arrange
        let t = Logexp;
        let x = array![[-1.0_f64, 0.0], [0.5, 2.0]].into_dyn();

        // Act
        let y = t.f_array(x.view());

        // Assert
        assert_eq!(y.shape(), x.shape());
        for (xv, yv) in x.iter().zip(y.iter()) {
            assert_eq!(*yv, t.f(*xv));
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that `initialize` repairs out-of-domain entries and leaves
    // in-domain entries untouched.
    //
    // Given
    // -----
    // - A vector mixing a negative (out-of-domain for Logexp) and a positive
    //   entry.
    //
    // Expect
    // ------
    // - The negative entry is reflected to its absolute value; the positive
    //   entry is returned bit-identically.
    fn initialize_repairs_only_out_of_domain_entries() {
        // Arrange
        let t = Logexp;
        let proposed = array![-3.0_f64, 2.0].into_dyn();

        // Act
        let out = t.initialize(proposed.view());

        // Assert
        assert_eq!(out[[0]], 3.0);
        assert_eq!(out[[1]], 2.0);
    }

    #[test]
    // Purpose
    // -------
    // Confirm the change-detection edge cases: NaN → NaN is not a change,
    // and −0.0 → 0.0 is not a change (IEEE equality).
    //
    // Given
    // -----
    // - Direct calls to `value_changed`.
    //
    // Expect
    // ------
    // - NaN/NaN and −0.0/0.0 report unchanged; a genuine correction reports
    //   changed.
    fn value_changed_handles_nan_and_signed_zero() {
        assert!(!value_changed(f64::NAN, f64::NAN));
        assert!(!value_changed(-0.0, 0.0));
        assert!(value_changed(-3.0, 3.0));
    }
}
