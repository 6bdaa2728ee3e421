use approx::assert_relative_eq;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::uniform_disk::{occulted_area_fraction, relative_flux, DiskOverlap};

#[test]
fn classify_orders_the_regimes_by_precedence() {
    // Plain representatives of each regime
    assert_eq!(DiskOverlap::classify(0.1, 2.0), DiskOverlap::Clear);
    assert_eq!(DiskOverlap::classify(0.1, 0.5), DiskOverlap::Interior);
    assert_eq!(DiskOverlap::classify(1.5, 0.3), DiskOverlap::Total);
    assert_eq!(DiskOverlap::classify(0.1, 1.0), DiskOverlap::Partial);

    // Tangency belongs to the first regime whose condition holds: external
    // tangency (z = 1 + p) fails the strict Clear test and falls through to
    // Partial, internal tangency (z = 1 - p) meets the inclusive Interior
    // test, full-cover tangency (z = p - 1) meets the inclusive Total test
    assert_eq!(DiskOverlap::classify(0.1, 1.1), DiskOverlap::Partial);
    assert_eq!(DiskOverlap::classify(0.5, 0.5), DiskOverlap::Interior);
    assert_eq!(DiskOverlap::classify(1.5, 0.5), DiskOverlap::Total);

    // p = 1 at mid-transit covers the disk exactly: Interior by precedence
    assert_eq!(DiskOverlap::classify(1.0, 0.0), DiskOverlap::Interior);
}

#[test]
fn flux_is_unity_when_clear_of_the_disk() {
    for z in [1.2, 1.5, 2.0, 10.0] {
        assert_eq!(relative_flux(0.1, z), 1.0, "flux at z = {} should be 1", z);
        assert_eq!(
            occulted_area_fraction(0.1, z),
            0.0,
            "blocked area at z = {} should be 0",
            z
        );
    }
}

#[test]
fn interior_occulter_blocks_its_own_area() {
    // z <= 1 - p: the occulter contributes exactly its own disk area p^2
    assert_relative_eq!(relative_flux(0.1, 0.0), 0.99, epsilon = 1e-12);
    assert_relative_eq!(relative_flux(0.1, 0.5), 0.99, epsilon = 1e-12);
    assert_relative_eq!(relative_flux(0.1, 0.9), 0.99, epsilon = 1e-12);
    assert_relative_eq!(occulted_area_fraction(0.3, 0.2), 0.09, epsilon = 1e-12);

    // A vanishing occulter blocks nothing anywhere
    for z in [0.0, 0.5, 1.0, 2.0] {
        assert_eq!(relative_flux(0.0, z), 1.0);
    }
}

#[test]
fn oversized_occulter_eclipses_totally() {
    for z in [0.0, 0.1] {
        assert_eq!(relative_flux(1.2, z), 0.0, "p = 1.2 at z = {} is total", z);
        assert_eq!(occulted_area_fraction(1.2, z), 1.0);
    }
    for z in [0.0, 0.25, 0.5] {
        assert_eq!(relative_flux(1.5, z), 0.0, "p = 1.5 at z = {} is total", z);
    }
}

#[test]
fn partial_overlap_matches_lens_area() {
    // Reference values from evaluating the Mandel & Agol lens-area formula
    // in extended precision
    assert_relative_eq!(
        occulted_area_fraction(0.5, 0.75),
        0.19039306906259287,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        occulted_area_fraction(0.1, 1.0),
        0.0048938701574415405,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        occulted_area_fraction(0.8, 0.9),
        0.3123172511473112,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        occulted_area_fraction(1.0, 0.5),
        0.6850376424742927,
        epsilon = 1e-12
    );
    // The limb-crossing regime also covers occulters larger than the star
    assert_relative_eq!(
        occulted_area_fraction(2.0, 1.5),
        0.7615722762503715,
        epsilon = 1e-12
    );

    assert_relative_eq!(relative_flux(0.5, 0.75), 0.8096069309374071, epsilon = 1e-12);
}

#[test]
fn flux_is_symmetric_in_separation_sign() {
    for p in [0.0, 0.1, 0.5, 1.0, 1.5] {
        for i in 0..=60 {
            let z = i as f64 * 0.05;
            assert_eq!(
                relative_flux(p, z),
                relative_flux(p, -z),
                "flux should be even in z at p = {}, z = {}",
                p,
                z
            );
        }
    }
}

#[test]
fn flux_is_continuous_across_regime_boundaries() {
    // Probe each boundary from both sides; the formula limits agree with the
    // adjacent closed forms, so the gap should be far below 1e-9
    let eps = 1e-12;
    let boundaries = [
        (0.1, 1.1), // external tangency, z = 1 + p
        (0.1, 0.9), // internal tangency, z = 1 - p
        (0.5, 1.5),
        (0.5, 0.5),
        (1.2, 0.2), // full-cover tangency, z = p - 1
        (1.0, 0.0), // both interior boundaries collapse onto z = 0
    ];
    for (p, z) in boundaries {
        let below = relative_flux(p, z - eps);
        let above = relative_flux(p, z + eps);
        assert!(
            (below - above).abs() < 1e-9,
            "flux jumps across z = {} at p = {}: {} vs {}",
            z,
            p,
            below,
            above
        );
    }
}

#[test]
fn blocked_area_never_grows_with_separation() {
    for p in [0.05, 0.1, 0.5, 1.0, 1.5] {
        let mut previous = occulted_area_fraction(p, 0.0);
        for i in 1..=3000 {
            let z = i as f64 * 0.001;
            let current = occulted_area_fraction(p, z);
            assert!(
                current <= previous + 1e-12,
                "blocked area grew from {} to {} at p = {}, z = {}",
                previous,
                current,
                p,
                z
            );
            previous = current;
        }
    }
}

#[test]
fn dense_grid_stays_finite_and_in_range() {
    for i in 0..=100 {
        let p = i as f64 * 0.02;
        for j in 0..=100 {
            let z = j as f64 * 0.03;
            let blocked = occulted_area_fraction(p, z);
            let flux = relative_flux(p, z);
            assert!(
                blocked.is_finite() && (0.0..=1.0).contains(&blocked),
                "blocked area out of range at p = {}, z = {}: {}",
                p,
                z,
                blocked
            );
            assert!(
                flux.is_finite() && (0.0..=1.0).contains(&flux),
                "flux out of range at p = {}, z = {}: {}",
                p,
                z,
                flux
            );
        }
    }
}

#[test]
fn random_sweep_stays_finite_and_in_range() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..10_000 {
        let p: f64 = rng.random::<f64>() * 2.0;
        let z: f64 = rng.random::<f64>() * 6.0 - 3.0;
        let flux = relative_flux(p, z);
        assert!(
            flux.is_finite() && (0.0..=1.0).contains(&flux),
            "flux out of range at p = {}, z = {}: {}",
            p,
            z,
            flux
        );
    }
}
