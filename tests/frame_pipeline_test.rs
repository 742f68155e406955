mod common;

use approx::assert_relative_eq;
use proptest::prelude::*;
use skyseek::{
    body::Body,
    coords::{ecliptic_j2000, equator_from_vector, horizon, inverse_refraction, refraction_angle, Refraction},
    earth_orientation::{gyration_from_j2000, gyration_into_j2000},
    frames::Eqj,
    rotation::{rotation_eqj_ecl, rotation_eqj_gal, rotation_eqj_hor},
    sidereal::SiderealCache,
    sky::Sky,
    time::Instant,
    vector::AstroVector,
};

proptest! {
    #[test]
    fn prop_terrestrial_time_round_trip(ut in -36_500.0f64..36_500.0) {
        let t = Instant::from_ut(ut);
        let back = Instant::from_terrestrial_time(t.tt);
        prop_assert!((back.ut - ut).abs() < 1e-9);
        prop_assert!((back.tt - t.tt).abs() < 1e-9);
    }

    #[test]
    fn prop_rotation_inverse_is_identity(
        x in -2.0f64..2.0, y in -2.0f64..2.0, z in -2.0f64..2.0, ut in -20_000.0f64..20_000.0,
    ) {
        let t = Instant::from_ut(ut);
        let v = AstroVector::<Eqj>::new(x, y, z, t);
        let ecl = rotation_eqj_ecl();
        let gal = rotation_eqj_gal();
        let back_ecl = ecl.inverse().apply(&ecl.apply(&v));
        let back_gal = gal.inverse().apply(&gal.apply(&v));
        prop_assert!((back_ecl.xyz - v.xyz).norm() < 1e-12);
        prop_assert!((back_gal.xyz - v.xyz).norm() < 1e-12);
        prop_assert!((ecl.apply(&v).length() - v.length()).abs() < 1e-12);
    }

    #[test]
    fn prop_gyration_round_trip(
        x in -40.0f64..40.0, y in -40.0f64..40.0, z in -40.0f64..40.0, ut in -36_500.0f64..36_500.0,
    ) {
        let v = AstroVector::<Eqj>::new(x, y, z, Instant::from_ut(ut));
        let back = gyration_into_j2000(&gyration_from_j2000(&v));
        prop_assert!((back.xyz - v.xyz).norm() < 1e-10 * (1.0 + v.length()));
    }

    #[test]
    fn prop_refraction_inverts(bent in -5.0f64..89.0) {
        let correction = inverse_refraction(Refraction::Normal, bent).unwrap();
        let geometric = bent + correction;
        prop_assert!(correction <= 0.0);
        prop_assert!((geometric + refraction_angle(Refraction::Normal, geometric) - bent).abs() < 1e-9);
    }
}

#[test]
fn test_horizon_rotation_agrees_with_horizon() {
    let sidereal = SiderealCache::new();
    let observer = common::site(-24.6, -70.4, 2600.0);
    let t = common::utc(2022, 12, 3, 4, 30);

    let target = AstroVector::<Eqj>::new(0.3, -0.8, -0.5, t);
    let hor = rotation_eqj_hor(&t, &observer, &sidereal).apply(&target);
    let ofdate = equator_from_vector(&gyration_from_j2000(&target));
    let topo = horizon(&t, &observer, ofdate.ra, ofdate.dec, Refraction::None, &sidereal);

    let altitude = (hor.z() / hor.length()).asin().to_degrees();
    assert_relative_eq!(topo.altitude, altitude, epsilon = 1e-9);
}

#[test]
fn test_planets_near_ecliptic() {
    let sky = Sky::new();
    let t = common::utc(2026, 5, 1, 0, 0);
    for body in [Body::VENUS, Body::MARS, Body::JUPITER, Body::SATURN, Body::NEPTUNE] {
        let ecl = ecliptic_j2000(&sky.helio_vector(body, &t).unwrap());
        assert!(ecl.elat.abs() < 3.5, "{body}: {}", ecl.elat);
    }
    let pluto = ecliptic_j2000(&sky.helio_vector(Body::Pluto, &t).unwrap());
    assert!(pluto.elat.abs() < 18.0);
}

#[test]
fn test_galilean_moons_stay_close_to_jupiter() {
    let sky = Sky::new();
    let info = sky.jupiter_moons(&common::utc(2024, 12, 7, 0, 0)).unwrap();
    // Callisto orbits at 0.0126 AU.
    for (state, max) in [(info.io, 0.003), (info.europa, 0.005), (info.ganymede, 0.008), (info.callisto, 0.013)] {
        let r = state.pos.norm();
        assert!(r > 0.002 && r < max, "{r}");
    }
}
