//! Occultation of a single concentric ring of the stellar disk.
//!
//! Radially non-uniform disks (limb darkening) are handled by slicing the
//! star into thin concentric rings and weighting each by its own surface
//! brightness; that integration lives with the caller. This module answers
//! the per-ring question: what fraction of the ring circle of radius `r` is
//! hidden behind the occulter? For a thin ring the hidden arc fraction is
//! also the hidden flux fraction.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::numeric::clamped_acos;

/// Relative configuration of a ring circle and the occulter.
///
/// As with the whole-disk regimes, the conditions meet at tangency and the
/// test order in [`RingCoverage::classify`] decides membership there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum RingCoverage {
    /// The occulter reaches no point of the ring circle: it either floats
    /// inside the ring without touching it (`r ≥ z + p`) or lies wholly
    /// beyond it (`r ≤ z − p`)
    Clear,

    /// `r + z ≤ p` - the whole ring circle lies inside the occulter
    Covered,

    /// The occulter hides one arc of the ring
    Partial,
}

impl RingCoverage {
    /// Classify the ring/occulter configuration.
    ///
    /// # Arguments
    /// * `radius_ratio` - Occulter radius divided by the stellar radius
    /// * `ring_radius` - Ring radius divided by the stellar radius
    /// * `separation` - Center separation divided by the stellar radius (`≥ 0`)
    pub fn classify(radius_ratio: f64, ring_radius: f64, separation: f64) -> Self {
        let p = radius_ratio;
        let r = ring_radius;
        let z = separation;
        if r >= z + p || r <= z - p {
            Self::Clear
        } else if r + z <= p {
            Self::Covered
        } else {
            Self::Partial
        }
    }
}

/// Fraction of a concentric ring hidden by the occulter.
///
/// In the partial regime the hidden arc subtends the angle
/// `β = 2·arccos((z² − p² + r²) / 2zr)` at the stellar center (law of
/// cosines for the triangle formed by the two centers and a rim
/// intersection point), and the result is `β / 2π`.
///
/// Callers pass a non-negative separation; unlike [`relative_flux`] no
/// absolute value is applied here.
///
/// [`relative_flux`]: crate::uniform_disk::relative_flux
///
/// # Arguments
/// * `radius_ratio` - Occulter radius divided by the stellar radius
/// * `ring_radius` - Ring radius divided by the stellar radius
/// * `separation` - Center separation divided by the stellar radius (`≥ 0`)
///
/// # Returns
/// Hidden fraction of the ring in `[0, 1]`
///
/// # Examples
/// ```
/// use transit::ring_occulted_fraction;
///
/// // The centers and a rim crossing form a right triangle: half the ring
/// // is hidden
/// let hidden = ring_occulted_fraction(0.5, 0.4, 0.3);
/// assert!((hidden - 0.5).abs() < 1e-12);
///
/// // A ring outside the occulter's reach is untouched
/// assert_eq!(ring_occulted_fraction(0.1, 0.5, 0.0), 0.0);
/// ```
pub fn ring_occulted_fraction(radius_ratio: f64, ring_radius: f64, separation: f64) -> f64 {
    let p = radius_ratio;
    let r = ring_radius;
    let z = separation;
    match RingCoverage::classify(p, r, z) {
        RingCoverage::Clear => 0.0,
        RingCoverage::Covered => 1.0,
        RingCoverage::Partial => {
            // Partial never sees r = 0 or z = 0: both land in Clear or
            // Covered above, so the divisor is nonzero.
            let beta = 2.0 * clamped_acos((z * z - p * p + r * r) / (2.0 * z * r));
            beta / (2.0 * PI)
        }
    }
}
