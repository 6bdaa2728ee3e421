//! Analytic transit occultation geometry.
//!
//! Pure circle-overlap solvers for building transit light curves, following
//! the uniform-source solution of Mandel & Agol (2002):
//!
//! - [`relative_flux`] and [`occulted_area_fraction`] answer how much of a
//!   uniformly bright stellar disk a transiting planet hides, one call per
//!   light-curve sample;
//! - [`ring_occulted_fraction`] answers how much of a single concentric ring
//!   the planet hides, the building block external integrators use to
//!   support radially non-uniform disks (limb darkening).
//!
//! Every function is a stateless decision tree over `f64` scalars: no
//! allocation, no configuration, no shared state. Callers may evaluate any
//! number of samples or rings in parallel.
//!
//! # References
//! - Mandel & Agol (2002) - "Analytic Light Curves for Planetary Transit
//!   Searches", <http://dx.doi.org/10.1086/345520>

pub mod numeric;
pub mod ring;
pub mod uniform_disk;

#[cfg(test)]
mod uniform_disk_test;

// Re-export the solver surface
pub use ring::{ring_occulted_fraction, RingCoverage};
pub use uniform_disk::{occulted_area_fraction, relative_flux, DiskOverlap};
