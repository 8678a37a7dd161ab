//! Shared numeric thresholds for the transformation family.
//!
//! The saturation threshold is derived from the host's floating-point
//! epsilon rather than hardcoded, so the same guard logic stays valid if the
//! scalar type's precision ever changes. It is computed once per process and
//! exposed read-only; there is no other global state in this crate.

use std::sync::LazyLock;

/// Saturation threshold for the exponential-family transforms.
///
/// Defined as `−ln(machine ε)` (≈ 36.04 for `f64`). Beyond this point
/// `exp(x)` no longer contributes representable precision to expressions
/// like `ln(1 + exp(x))`, so the softplus family returns its asymptote
/// directly and `Exponent` pins its output at `exp(±SATURATION_LIMIT)`.
pub static SATURATION_LIMIT: LazyLock<f64> = LazyLock::new(|| -f64::EPSILON.ln());

/// Lower clip bound for `LogexpClipped` outputs (and its input exponent,
/// via [`LOG_CLIP_MIN`]).
pub const CLIP_MIN: f64 = 1e-10;

/// Upper clip bound for `LogexpClipped` outputs (and its input exponent,
/// via [`LOG_CLIP_MAX`]).
pub const CLIP_MAX: f64 = 1e100;

/// `ln(CLIP_MIN)`, the lower clamp applied to the input exponent.
pub static LOG_CLIP_MIN: LazyLock<f64> = LazyLock::new(|| CLIP_MIN.ln());

/// `ln(CLIP_MAX)`, the upper clamp applied to the input exponent.
pub static LOG_CLIP_MAX: LazyLock<f64> = LazyLock::new(|| CLIP_MAX.ln());

/// Boundary guard for the `Logistic` inverse (default 1e-10).
///
/// Keeps `ln((y − lower)/(upper − y))` finite when `y` sits exactly on an
/// interval endpoint.
pub const BOUNDARY_EPS: f64 = 1e-10;
