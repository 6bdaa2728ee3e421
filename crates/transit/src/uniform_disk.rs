//! Whole-disk occultation of a uniformly bright star.
//!
//! Implements the uniform-source obscuration function of Mandel & Agol
//! (2002): the fraction of a circular stellar disk hidden by a smaller
//! opaque circular occulter, as a function of the planet-to-star radius
//! ratio `p` and the sky-projected center separation `z`, both normalized
//! to the stellar radius.
//!
//! The geometry falls into four regimes: the occulter can miss the disk
//! entirely, sit fully on the disk face, swallow the disk whole, or straddle
//! the stellar limb. [`DiskOverlap::classify`] names the regime and
//! [`occulted_area_fraction`] evaluates its closed-form blocked area; only
//! the limb-straddling regime needs trigonometry (the two-circle lens area).
//!
//! # References
//! - Mandel & Agol (2002) - "Analytic Light Curves for Planetary Transit
//!   Searches", <http://dx.doi.org/10.1086/345520>

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

use crate::numeric::clamped_acos;

/// Relative geometric configuration of the occulter and the stellar disk.
///
/// The conditions overlap at tangency, so membership depends on the test
/// order in [`DiskOverlap::classify`] being preserved: tangent
/// configurations belong to the first regime whose condition they satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub enum DiskOverlap {
    /// `1 + p < z` - the disks do not touch
    Clear,

    /// `z ≤ 1 − p` - the occulter is projected entirely on the disk face
    Interior,

    /// `z ≤ p − 1` - the occulter covers the whole disk (needs `p > 1`)
    Total,

    /// The occulter straddles the stellar limb
    Partial,
}

impl DiskOverlap {
    /// Classify the occulter/disk configuration.
    ///
    /// # Arguments
    /// * `radius_ratio` - Occulter radius divided by the stellar radius
    /// * `separation` - Center separation divided by the stellar radius (`≥ 0`)
    ///
    /// # Returns
    /// The geometric regime the configuration falls in
    ///
    /// # Examples
    /// ```
    /// use transit::DiskOverlap;
    ///
    /// // A Jupiter-sized planet at mid-transit sits on the disk face
    /// assert_eq!(DiskOverlap::classify(0.1, 0.0), DiskOverlap::Interior);
    ///
    /// // During ingress it straddles the limb
    /// assert_eq!(DiskOverlap::classify(0.1, 1.0), DiskOverlap::Partial);
    /// ```
    pub fn classify(radius_ratio: f64, separation: f64) -> Self {
        let p = radius_ratio;
        let z = separation;
        if 1.0 + p < z {
            Self::Clear
        } else if z <= 1.0 - p {
            Self::Interior
        } else if z <= p - 1.0 {
            Self::Total
        } else {
            Self::Partial
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Interior => "Interior",
            Self::Total => "Total",
            Self::Partial => "Partial",
        }
    }
}

impl std::fmt::Display for DiskOverlap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Fraction of the stellar disk area hidden by the occulter.
///
/// This is λ in Mandel & Agol (2002): the lens-shaped intersection area of
/// the two projected disks, normalized by the stellar disk area π. It is 0
/// when the occulter is clear of the disk and never increases as the
/// separation grows.
///
/// # Arguments
/// * `radius_ratio` - Occulter radius divided by the stellar radius
/// * `separation` - Center separation divided by the stellar radius (`≥ 0`)
///
/// # Returns
/// Blocked area fraction in `[0, 1]`
///
/// # Examples
/// ```
/// use transit::occulted_area_fraction;
///
/// // Mid-transit: a Jupiter-sized planet hides 1% of a Sun-like disk
/// let blocked = occulted_area_fraction(0.1, 0.0);
/// assert!((blocked - 0.01).abs() < 1e-12);
///
/// // Well before ingress nothing is hidden
/// assert_eq!(occulted_area_fraction(0.1, 1.2), 0.0);
/// ```
pub fn occulted_area_fraction(radius_ratio: f64, separation: f64) -> f64 {
    let p = radius_ratio;
    let z = separation;
    match DiskOverlap::classify(p, z) {
        DiskOverlap::Clear => 0.0,
        DiskOverlap::Interior => p * p,
        DiskOverlap::Total => 1.0,
        DiskOverlap::Partial => lens_area_fraction(p, z),
    }
}

/// Relative stellar flux during a transit of a uniformly bright disk.
///
/// `1 − λ(p, |z|)`: the fraction of the star's light that survives the
/// occultation. This is the quantity a photometer records, one call per
/// light-curve sample. The separation may carry a sign (projected position
/// along the transit chord); only its magnitude matters.
///
/// # Arguments
/// * `radius_ratio` - Occulter radius divided by the stellar radius
/// * `separation` - Signed center separation divided by the stellar radius
///
/// # Returns
/// Surviving flux fraction in `[0, 1]`
///
/// # Examples
/// ```
/// use transit::relative_flux;
///
/// // A 0.1 radius ratio gives the classic 1% transit depth
/// assert!((relative_flux(0.1, 0.0) - 0.99).abs() < 1e-12);
///
/// // Out of transit the star is unobscured
/// assert_eq!(relative_flux(0.1, 1.2), 1.0);
/// ```
pub fn relative_flux(radius_ratio: f64, separation: f64) -> f64 {
    1.0 - occulted_area_fraction(radius_ratio, separation.abs())
}

/// Lens-area fraction for an occulter straddling the stellar limb.
///
/// Heron-style decomposition of the two-circle intersection: circular
/// segments subtended by the half-angles κ₀ (at the occulter center) and κ₁
/// (at the stellar center), minus the kite spanned by the centers and the
/// two rim intersection points, all over the stellar disk area π.
///
/// Only reachable with `z > |1 − p|`, so both divisors are nonzero. The
/// radicand is non-negative throughout the regime in exact arithmetic and
/// can only dip below zero through rounding at tangency; the tangent limit
/// keeps the κ terms and drops the kite, so it is floored at zero. The
/// final clamp absorbs cancellation a few ulps past `[0, 1]` at the same
/// boundaries.
fn lens_area_fraction(p: f64, z: f64) -> f64 {
    let kappa0 = clamped_acos((p * p + z * z - 1.0) / (2.0 * p * z));
    let kappa1 = clamped_acos((1.0 - p * p + z * z) / (2.0 * z));
    let radicand = (4.0 * z * z - (1.0 + z * z - p * p).powi(2)) / 4.0;
    ((kappa0 * p * p + kappa1 - radicand.max(0.0).sqrt()) / PI).clamp(0.0, 1.0)
}
