//! Shared numeric domain guards for the occultation solvers.
//!
//! The law-of-cosines arguments in both solvers sit exactly on ±1 when the
//! circles are tangent, and floating-point rounding can push them a few ulps
//! outside the `acos` domain. Guarding here, once, keeps those measure-zero
//! configurations finite instead of letting them surface as NaN.

/// Inverse cosine with its argument clamped into `[-1, 1]`.
///
/// An argument outside the domain only arises from rounding at a tangent
/// configuration, so clamping maps it onto the tangent geometry it
/// represents: `acos(1) = 0` (circles touching externally) or
/// `acos(-1) = π` (touching internally).
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
