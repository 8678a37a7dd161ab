//! paramspace — constrained-parameter transformations for gradient-based fitting.
//!
//! Purpose
//! -------
//! Serve as the crate root for the transformation layer that maps unconstrained
//! optimizer-space values onto constrained model parameters (positive reals,
//! negative reals, bounded intervals) and back, together with the
//! gradient-scaling factors needed to chain-rule gradients through the
//! transform during iterative optimization.
//!
//! Key behaviors
//! -------------
//! - Expose the [`transformations`] module: one four-operation contract
//!   (forward map, inverse map, gradient factor, initialization repair) and
//!   seven concrete variants covering positive, negative, and bounded
//!   constraint domains.
//! - Keep every operation total over finite inputs via internal saturation
//!   and clipping, so a long-running optimizer loop never sees an overflow,
//!   a panic, or an unexpected NaN from the transform layer itself.
//! - Route initialization-time value corrections through the `log` facade so
//!   callers can capture, redirect, or silence them.
//!
//! Invariants & assumptions
//! ------------------------
//! - Transformation instances are immutable after construction and safe to
//!   share read-only across threads; no operation holds or mutates global
//!   state beyond one lazily computed saturation threshold.
//! - `finv`/`gradfactor` called on values outside a transform's declared
//!   domain yield NaN/∞ elementwise rather than failing; detecting misuse is
//!   the caller's responsibility.
//!
//! Conventions
//! -----------
//! - Scalar operations are the required trait surface; elementwise array
//!   operations over `ndarray` dynamic views are provided on top of them.
//! - Fallible constructors return `TransformResult<T>`; operations themselves
//!   never return `Result`.
//!
//! Downstream usage
//! ----------------
//! - Parameter containers select one transformation per constrained parameter
//!   and call `f`/`finv` to move between stored (unconstrained) and reported
//!   (constrained) values.
//! - Optimizers call `gradfactor` once per step per parameter to rescale
//!   constrained-space gradients into unconstrained space.
//! - Reporting layers use the `Display` implementation of each variant to
//!   annotate constrained parameters in summaries.
//!
//! Testing notes
//! -------------
//! - Unit tests live in `#[cfg(test)]` modules next to each variant and cover
//!   local formulas, saturation branches, and constructor validation.
//! - `tests/integration_transformations.rs` exercises the cross-variant
//!   properties: round-trips, finite-difference gradient agreement,
//!   saturation safety at extreme magnitudes, reflection symmetry, and the
//!   warn-exactly-once initialization contract.

pub mod transformations;
