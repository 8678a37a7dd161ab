//! transformations — bijections between optimizer space and constrained space.
//!
//! Purpose
//! -------
//! Collect the constrained-parameter transformation family: numerically
//! guarded bijections between an unconstrained domain (all reals, where the
//! optimizer searches) and a constrained domain (positive reals, negative
//! reals, or a bounded interval, where the model parameter lives), each with
//! the gradient-scaling factor needed to chain-rule gradients through the
//! map and an initialization-time repair for user-supplied starting values.
//!
//! Key behaviors
//! -------------
//! - Define the four-operation [`Transformation`] contract (`f`, `finv`,
//!   `gradfactor`, `repair`) plus provided elementwise array operations and
//!   the warning-emitting [`Transformation::initialize`].
//! - Provide seven concrete variants: [`Logexp`], [`NegativeLogexp`],
//!   [`LogexpClipped`] (positive domain), [`Exponent`], [`NegativeExponent`]
//!   (positive/negative exponential family), [`Square`] (positive), and
//!   [`Logistic`] (bounded interval, per-instance bounds).
//! - Centralize the shared saturation threshold and clip constants
//!   ([`SATURATION_LIMIT`], [`CLIP_MIN`], [`CLIP_MAX`], [`BOUNDARY_EPS`]) so
//!   every exponential-family variant saturates consistently.
//!
//! Invariants & assumptions
//! ------------------------
//! - `finv(f(x)) ≈ x` wherever `f` is not saturated, and `f(finv(y)) ≈ y`
//!   strictly inside the constrained domain's open interior.
//! - `gradfactor(y)` equals `df/dx` evaluated at the `x` where `f(x) = y`,
//!   expressed as a function of the constrained value `y` so that callers who
//!   only track constrained values can still apply the chain rule.
//! - Every operation is total over finite inputs: extreme magnitudes
//!   saturate or clip to finite boundary values instead of overflowing.
//!
//! Conventions
//! -----------
//! - Out-of-domain inputs to `finv`/`gradfactor` produce NaN/∞ elementwise
//!   rather than errors; this matches array-programming semantics and keeps
//!   the contract allocation- and branch-free at the call site. Callers that
//!   need to detect misuse check for NaN.
//! - Reflected variants (`NegativeLogexp`, `NegativeExponent`) delegate to a
//!   privately owned instance of their base variant; there is no implicit
//!   method resolution between variants.
//! - `initialize` is the only operation with a side effect: one
//!   `log::warn!` (target `paramspace::transformations`) per call that
//!   corrected at least one entry. It never writes to a fixed stream and
//!   never fails.
//!
//! Downstream usage
//! ----------------
//! - Select a variant when a parameter's constraint is declared and hold it
//!   for the parameter's lifetime; all variants are `Copy`-cheap and
//!   shareable read-only across threads.
//! - Front-ends are expected to depend on the re-exported surface or the
//!   [`prelude`], not on the internal file layout.
//!
//! Testing notes
//! -------------
//! - Per-variant unit tests cover formula agreement on safe grids, the
//!   saturation branches, constructor validation, and tag formatting.
//! - `tests/integration_transformations.rs` covers round-trips,
//!   finite-difference gradient agreement, extreme-input safety, reflection
//!   symmetry, and warning emission counts.

pub mod contract;
pub mod domain;
pub mod errors;
pub mod exponent;
pub mod limits;
pub mod logexp;
pub mod logistic;
pub mod square;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::contract::Transformation;
pub use self::domain::Domain;
pub use self::errors::{TransformError, TransformResult};
pub use self::exponent::{Exponent, NegativeExponent};
pub use self::limits::{BOUNDARY_EPS, CLIP_MAX, CLIP_MIN, SATURATION_LIMIT};
pub use self::logexp::{Logexp, LogexpClipped, NegativeLogexp};
pub use self::logistic::Logistic;
pub use self::square::Square;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use paramspace::transformations::prelude::*;
//
// to import the main transformation surface in a single line.

pub mod prelude {
    pub use super::contract::Transformation;
    pub use super::domain::Domain;
    pub use super::errors::{TransformError, TransformResult};
    pub use super::exponent::{Exponent, NegativeExponent};
    pub use super::limits::SATURATION_LIMIT;
    pub use super::logexp::{Logexp, LogexpClipped, NegativeLogexp};
    pub use super::logistic::Logistic;
    pub use super::square::Square;
}
