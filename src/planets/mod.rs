//! # Analytic planetary theory
//!
//! Heliocentric positions of Mercury through Neptune from truncated VSOP87D series.
//!
//! ## Series
//!
//! Each planet carries three families of blocks, one per spherical coordinate
//! (longitude `L`, latitude `B`, radius `R`). Block `k` is a list of `(A, B, C)` terms and
//! contributes
//!
//! ```text
//! τᵏ · Σ A · cos(B + C·τ)
//! ```
//!
//! where `τ` is the number of Julian millennia of TT since J2000.0. The result is referred
//! to the mean ecliptic and equinox of date ([`Ecm`]); [`rotation_ecm_eqj`] carries it to
//! the J2000 mean equator.
//!
//! Velocities come from the analytic time derivative of the same sums, so position and
//! velocity are always consistent with each other.
//!
//! ## Barycenter
//!
//! [`ssb_state`] approximates the Solar System barycenter by weighting the Sun and the four
//! giant planets with their gravitational parameters; the terrestrial planets move the
//! barycenter by less than the truncation error of the series.
mod tables;

use nalgebra::Vector3;

use crate::{
    body::Planet,
    constants::{
        normalize_degrees, Degree, DAYS_PER_MILLENNIUM, GENERAL_PRECESSION_RATE, RADEG, SUN_GM,
    },
    frames::{Ecm, Eqj},
    rotation::rotation_ecm_eqj,
    time::Instant,
    vector::{AstroVector, Spherical, StateVector},
};

/// One `(amplitude, phase, frequency)` term of a series block.
pub(crate) type Term = (f64, f64, f64);

/// The L/B/R series blocks of one planet.
pub(crate) struct VsopModel {
    pub lon: &'static [&'static [Term]],
    pub lat: &'static [&'static [Term]],
    pub rad: &'static [&'static [Term]],
}

/// Giant planets included in the barycenter estimate.
const BARYCENTER_PLANETS: [Planet; 4] = [
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
];

fn vsop_model(planet: Planet) -> &'static VsopModel {
    match planet {
        Planet::Mercury => &tables::MERCURY,
        Planet::Venus => &tables::VENUS,
        Planet::Earth => &tables::EARTH,
        Planet::Mars => &tables::MARS,
        Planet::Jupiter => &tables::JUPITER,
        Planet::Saturn => &tables::SATURN,
        Planet::Uranus => &tables::URANUS,
        Planet::Neptune => &tables::NEPTUNE,
    }
}

/// Evaluate one coordinate family at `tau`.
///
/// Return
/// ----------
/// * `(value, d value / d τ)`
fn eval_series(blocks: &[&[Term]], tau: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut rate = 0.0;
    let mut tpow = 1.0;
    let mut dpow = 0.0;

    for (k, block) in blocks.iter().enumerate() {
        let (sum, dsum) = block
            .iter()
            .fold((0.0, 0.0), |(s, ds), &(a, b, c)| {
                let (sin, cos) = (b + c * tau).sin_cos();
                (s + a * cos, ds - a * c * sin)
            });
        value += tpow * sum;
        rate += dpow * sum + tpow * dsum;
        dpow = (k + 1) as f64 * tpow;
        tpow *= tau;
    }

    (value, rate)
}

/// Spherical coordinates and their rates, all per millennium.
struct SeriesOutput {
    lon: (f64, f64),
    lat: (f64, f64),
    rad: (f64, f64),
}

fn eval_model(planet: Planet, time: &Instant) -> SeriesOutput {
    let model = vsop_model(planet);
    let tau = time.julian_millennia();
    SeriesOutput {
        lon: eval_series(model.lon, tau),
        lat: eval_series(model.lat, tau),
        rad: eval_series(model.rad, tau),
    }
}

/// Heliocentric ecliptic coordinates of date.
///
/// Return
/// ----------
/// * Longitude in `[0, 360)` degrees, latitude in degrees and distance in AU, referred to
///   the mean ecliptic and equinox of date.
pub fn helio_spherical(planet: Planet, time: &Instant) -> Spherical {
    let out = eval_model(planet, time);
    Spherical {
        lat: out.lat.0 / RADEG,
        lon: normalize_degrees(out.lon.0 / RADEG),
        dist: out.rad.0,
    }
}

/// Heliocentric state on the mean ecliptic of date, in AU and AU/day.
pub fn helio_state_of_date(planet: Planet, time: &Instant) -> StateVector<Ecm> {
    let out = eval_model(planet, time);
    let (l, dl) = out.lon;
    let (b, db) = out.lat;
    let (r, dr) = out.rad;
    let (dl, db, dr) = (
        dl / DAYS_PER_MILLENNIUM,
        db / DAYS_PER_MILLENNIUM,
        dr / DAYS_PER_MILLENNIUM,
    );

    let (sl, cl) = l.sin_cos();
    let (sb, cb) = b.sin_cos();

    let pos = Vector3::new(r * cb * cl, r * cb * sl, r * sb);
    let vel = Vector3::new(
        dr * cb * cl - r * sb * cl * db - r * cb * sl * dl,
        dr * cb * sl - r * sb * sl * db + r * cb * cl * dl,
        dr * sb + r * cb * db,
    );
    StateVector::new(pos, vel, *time)
}

/// Heliocentric state in the J2000 mean equator frame.
///
/// The ecliptic of date turns about its pole at the general precession rate; that drift is
/// removed from the series velocity before rotating to J2000.
pub fn helio_state(planet: Planet, time: &Instant) -> StateVector<Eqj> {
    let mut s = helio_state_of_date(planet, time);
    let spin = Vector3::new(0.0, 0.0, GENERAL_PRECESSION_RATE);
    s.vel -= spin.cross(&s.pos);
    rotation_ecm_eqj(time).apply_state(&s)
}

pub fn helio_vector(planet: Planet, time: &Instant) -> AstroVector<Eqj> {
    helio_state(planet, time).position()
}

/// Heliocentric ecliptic longitude of date, degrees.
pub fn helio_longitude(planet: Planet, time: &Instant) -> Degree {
    helio_spherical(planet, time).lon
}

/// Heliocentric state of the Solar System barycenter in J2000.
///
/// ```text
/// r_ssb = Σ GMᵢ·rᵢ / (GM_sun + Σ GMᵢ)     i ∈ {Jupiter, Saturn, Uranus, Neptune}
/// ```
pub fn ssb_state(time: &Instant) -> StateVector<Eqj> {
    let (weighted, total) = BARYCENTER_PLANETS.iter().fold(
        (StateVector::<Eqj>::zero(*time), SUN_GM),
        |(acc, gm_sum), planet| {
            let gm = planet.gm();
            (acc + helio_state(*planet, time).scale(gm), gm_sum + gm)
        },
    );
    weighted.scale(1.0 / total)
}

#[cfg(test)]
mod planets_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_venus_meeus_example() {
        // Meeus example 32.a: 1992 December 20, 0h TD.
        let t = Instant::from_terrestrial_time(2_448_976.5 - 2_451_545.0);
        let sph = helio_spherical(Planet::Venus, &t);
        assert_relative_eq!(sph.lon, 26.114_28, epsilon = 5e-4);
        assert_relative_eq!(sph.lat, -2.620_70, epsilon = 5e-4);
        assert_relative_eq!(sph.dist, 0.724_603, epsilon = 1e-5);
    }

    #[test]
    fn test_earth_distance_at_j2000() {
        let t = Instant::from_terrestrial_time(0.0);
        let sph = helio_spherical(Planet::Earth, &t);
        // Perihelion is two days later; the distance is close to its minimum.
        assert_relative_eq!(sph.dist, 0.983_3, epsilon = 1e-3);
        assert_relative_eq!(sph.lon, 100.46, epsilon = 0.05);
    }

    #[test]
    fn test_distances_are_plausible() {
        let bounds = [
            (Planet::Mercury, 0.30, 0.47),
            (Planet::Venus, 0.71, 0.73),
            (Planet::Earth, 0.98, 1.02),
            (Planet::Mars, 1.37, 1.67),
            (Planet::Jupiter, 4.9, 5.5),
            (Planet::Saturn, 8.9, 10.2),
            (Planet::Uranus, 18.2, 20.2),
            (Planet::Neptune, 29.7, 30.4),
        ];
        for k in 0..40 {
            let t = Instant::from_ut(-20_000.0 + 1_000.0 * k as f64);
            for &(planet, lo, hi) in &bounds {
                let d = helio_vector(planet, &t).length();
                assert!(d > lo && d < hi, "{planet:?} at {}: {d}", t.ut);
            }
        }
    }

    #[test]
    fn test_series_velocity_matches_finite_difference() {
        let t = Instant::from_ut(3_210.7);
        let h = 0.01;
        for planet in Planet::ALL {
            let s = helio_state_of_date(planet, &t);
            let before = helio_state_of_date(planet, &Instant::from_terrestrial_time(t.tt - h));
            let after = helio_state_of_date(planet, &Instant::from_terrestrial_time(t.tt + h));
            let numeric = (after.pos - before.pos) / (2.0 * h);
            assert!((numeric - s.vel).norm() < 1e-6 * s.vel.norm(), "{planet:?}");
        }
    }

    #[test]
    fn test_j2000_velocity_matches_finite_difference() {
        let t = Instant::from_ut(-7_000.0);
        let h = 0.01;
        for planet in Planet::ALL {
            let s = helio_state(planet, &t);
            let before = helio_vector(planet, &Instant::from_terrestrial_time(t.tt - h));
            let after = helio_vector(planet, &Instant::from_terrestrial_time(t.tt + h));
            let numeric = (after.xyz - before.xyz) / (2.0 * h);
            assert!((numeric - s.vel).norm() < 2e-4 * s.vel.norm(), "{planet:?}");
        }
    }

    #[test]
    fn test_barycenter_offset() {
        let t = Instant::from_ut(0.0);
        let ssb = ssb_state(&t);
        // The Sun wanders about one solar radius around the barycenter.
        let d = ssb.pos.norm();
        assert!(d > 1e-4 && d < 1.2e-2, "{d}");
    }
}
