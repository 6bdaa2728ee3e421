//! WASM bindings for transit occultation geometry.
//!
//! This crate provides JavaScript/TypeScript bindings for the transit crate:
//! per-sample relative flux for uniform-disk transits, and per-ring occulted
//! fractions for callers integrating radially non-uniform disks.
//!
//! Everything here is a thin, stateless pass-through; unlike the simulation
//! bindings there is no mutable state to hold on the JS side.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { relative_flux, light_curve } from 'transit-wasm';
//!
//! await init();
//!
//! // A Jupiter-sized planet mid-transit: the classic 1% dip
//! const flux = relative_flux(0.1, 0.0);
//!
//! // A whole light curve in one call
//! const separations = Float64Array.from([-1.2, -0.6, 0.0, 0.6, 1.2]);
//! const samples = light_curve(0.1, separations);
//! ```

use serde::Serialize;
use wasm_bindgen::prelude::*;

use transit::{DiskOverlap, RingCoverage};

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Relative stellar flux for one light-curve sample.
///
/// # Arguments
/// * `radius_ratio` - Occulter radius divided by the stellar radius
/// * `separation` - Signed center separation divided by the stellar radius
#[wasm_bindgen]
pub fn relative_flux(radius_ratio: f64, separation: f64) -> f64 {
    transit::relative_flux(radius_ratio, separation)
}

/// Fraction of the stellar disk area hidden by the occulter.
///
/// # Arguments
/// * `radius_ratio` - Occulter radius divided by the stellar radius
/// * `separation` - Center separation divided by the stellar radius (`>= 0`)
#[wasm_bindgen]
pub fn occulted_area_fraction(radius_ratio: f64, separation: f64) -> f64 {
    transit::occulted_area_fraction(radius_ratio, separation)
}

/// Fraction of a concentric ring hidden by the occulter.
///
/// # Arguments
/// * `radius_ratio` - Occulter radius divided by the stellar radius
/// * `ring_radius` - Ring radius divided by the stellar radius
/// * `separation` - Center separation divided by the stellar radius (`>= 0`)
#[wasm_bindgen]
pub fn ring_occulted_fraction(radius_ratio: f64, ring_radius: f64, separation: f64) -> f64 {
    transit::ring_occulted_fraction(radius_ratio, ring_radius, separation)
}

/// Evaluate the relative flux independently at each separation.
///
/// Convenience wrapper for plotting: one call per light curve instead of
/// one call per sample. Separations may be signed.
#[wasm_bindgen]
pub fn light_curve(radius_ratio: f64, separations: &[f64]) -> Vec<f64> {
    separations
        .iter()
        .map(|&z| transit::relative_flux(radius_ratio, z))
        .collect()
}

/// Classify the occulter/disk configuration.
///
/// Returns the regime name as a serialized enum variant
/// (`"Clear" | "Interior" | "Total" | "Partial"`).
#[wasm_bindgen]
pub fn disk_overlap(radius_ratio: f64, separation: f64) -> Result<JsValue, JsError> {
    to_js(&DiskOverlap::classify(radius_ratio, separation))
}

/// Classify the ring/occulter configuration.
///
/// Returns the regime name as a serialized enum variant
/// (`"Clear" | "Covered" | "Partial"`).
#[wasm_bindgen]
pub fn ring_coverage(
    radius_ratio: f64,
    ring_radius: f64,
    separation: f64,
) -> Result<JsValue, JsError> {
    to_js(&RingCoverage::classify(radius_ratio, ring_radius, separation))
}
