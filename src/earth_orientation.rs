//! # Earth orientation: obliquity, precession and nutation
//!
//! The orientation of the Earth's equator relative to the J2000 frame is the product of
//! two rotations:
//!
//! * **precession** ([`precession_rotation`]), the secular drift of the mean equator, from
//!   the IAU 2006 angles ψ_A, ω_A, χ_A,
//! * **nutation** ([`nutation_rotation`]), the short-period wobble of the true equator
//!   around the mean one, from a truncated IAU 1980 lunisolar series ([`nutation_angles`]).
//!
//! [`e_tilt`] bundles the nutation angles with the mean and true obliquity and the equation
//! of the equinoxes; the sidereal clock and the ecliptic-of-date rotations are built from it.
//! [`gyration_from_j2000`] / [`gyration_into_j2000`] apply the full chain to vectors and
//! states.
use crate::{
    constants::{ArcSec, Days, Degree, Radian, DAYS_PER_CENTURY, RADEG, RADSEC},
    frames::{Eqd, Eqj, Eqm},
    rotation::{Axis, RotationMatrix},
    time::Instant,
    vector::{AstroVector, StateVector},
};

/// Mean obliquity of the ecliptic at J2000.0 in arcseconds (IAU 2006).
pub const OBLIQUITY_J2000_ARCSEC: ArcSec = 84_381.406;

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 2006 model).
///
/// Arguments
/// ---------
/// * `tt`: Terrestrial Time, days since J2000.0.
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// Formula
/// -------
/// ```text
/// ε(T) = 84381.406 − 46.836769·T − 0.0001831·T² + 0.00200340·T³
///        − 0.000000576·T⁴ − 0.0000000434·T⁵        [arcsec]
/// ```
/// with `T` in Julian centuries of TT, evaluated with Horner's method.
pub fn mean_obliquity(tt: Days) -> Radian {
    let t = tt / DAYS_PER_CENTURY;
    let asec = ((((-0.000_000_043_4 * t - 0.000_000_576) * t + 0.002_003_40) * t
        - 0.000_183_1)
        * t
        - 46.836_769)
        * t
        + OBLIQUITY_J2000_ARCSEC;
    asec * RADSEC
}

/// One row of the nutation series: multipliers of (D, M, M′, F, Ω), then the longitude
/// coefficients `(S, S_t)` and obliquity coefficients `(C, C_t)` in units of 0.0001″.
struct NutationTerm {
    args: [i8; 5],
    dpsi: (f64, f64),
    deps: (f64, f64),
}

macro_rules! nut {
    ($d:expr, $m:expr, $mp:expr, $f:expr, $om:expr; $s:expr, $st:expr; $c:expr, $ct:expr) => {
        NutationTerm {
            args: [$d, $m, $mp, $f, $om],
            dpsi: ($s, $st),
            deps: ($c, $ct),
        }
    };
}

/// Leading terms of the IAU 1980 nutation theory (Wahr), down to ~0.005″.
#[rustfmt::skip]
const NUTATION_SERIES: [NutationTerm; 18] = [
    nut!( 0,  0,  0, 0, 1; -171_996.0, -174.2; 92_025.0,  8.9),
    nut!(-2,  0,  0, 2, 2;  -13_187.0,   -1.6;  5_736.0, -3.1),
    nut!( 0,  0,  0, 2, 2;   -2_274.0,   -0.2;    977.0, -0.5),
    nut!( 0,  0,  0, 0, 2;    2_062.0,    0.2;   -895.0,  0.5),
    nut!( 0,  1,  0, 0, 0;    1_426.0,   -3.4;     54.0, -0.1),
    nut!( 0,  0,  1, 0, 0;      712.0,    0.1;     -7.0,  0.0),
    nut!(-2,  1,  0, 2, 2;     -517.0,    1.2;    224.0, -0.6),
    nut!( 0,  0,  0, 2, 1;     -386.0,   -0.4;    200.0,  0.0),
    nut!( 0,  0,  1, 2, 2;     -301.0,    0.0;    129.0, -0.1),
    nut!(-2, -1,  0, 2, 2;      217.0,   -0.5;    -95.0,  0.3),
    nut!(-2,  0,  1, 0, 0;     -158.0,    0.0;      0.0,  0.0),
    nut!(-2,  0,  0, 2, 1;      129.0,    0.1;    -70.0,  0.0),
    nut!( 0,  0, -1, 2, 2;      123.0,    0.0;    -53.0,  0.0),
    nut!( 2,  0,  0, 0, 0;       63.0,    0.0;      0.0,  0.0),
    nut!( 0,  0,  1, 0, 1;       63.0,    0.1;    -33.0,  0.0),
    nut!( 2,  0, -1, 2, 2;      -59.0,    0.0;     26.0,  0.0),
    nut!( 0,  0, -1, 0, 1;      -58.0,   -0.1;     32.0,  0.0),
    nut!( 0,  0,  1, 2, 1;      -51.0,    0.0;     27.0,  0.0),
];

/// Compute the nutation angles in longitude and obliquity (truncated IAU 1980 model).
///
/// The five fundamental arguments are the mean elongation of the Moon (D), the mean
/// anomalies of the Sun (M) and Moon (M′), the Moon's argument of latitude (F) and the
/// longitude of its ascending node (Ω), as cubic polynomials of Julian centuries.
///
/// Returns
/// --------
/// * `(Δψ, Δε)` in arcseconds.
pub fn nutation_angles(tt: Days) -> (ArcSec, ArcSec) {
    let t = tt / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.850_36 + 445_267.111_480 * t - 0.001_914_2 * t2 + t3 / 189_474.0;
    let m = 357.527_72 + 35_999.050_340 * t - 0.000_160_3 * t2 - t3 / 300_000.0;
    let mp = 134.962_98 + 477_198.867_398 * t + 0.008_697_2 * t2 + t3 / 56_250.0;
    let f = 93.271_91 + 483_202.017_538 * t - 0.003_682_5 * t2 + t3 / 327_270.0;
    let om = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t2 + t3 / 450_000.0;
    let fundamentals = [d, m, mp, f, om];

    let (dpsi, deps) = NUTATION_SERIES
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), term| {
            let arg: Degree = term
                .args
                .iter()
                .zip(fundamentals.iter())
                .map(|(&k, &a)| f64::from(k) * a)
                .sum();
            let (s, c) = (arg * RADEG).sin_cos();
            (
                dpsi + (term.dpsi.0 + term.dpsi.1 * t) * s,
                deps + (term.deps.0 + term.deps.1 * t) * c,
            )
        });

    (dpsi * 1e-4, deps * 1e-4)
}

/// Earth tilt parameters at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthTilt {
    pub tt: Days,
    /// Nutation in longitude, arcseconds.
    pub dpsi: ArcSec,
    /// Nutation in obliquity, arcseconds.
    pub deps: ArcSec,
    /// Equation of the equinoxes, seconds of time.
    pub ee: f64,
    /// Mean obliquity, degrees.
    pub mobl: Degree,
    /// True obliquity, degrees.
    pub tobl: Degree,
}

pub fn e_tilt(time: &Instant) -> EarthTilt {
    let (dpsi, deps) = nutation_angles(time.tt);
    let mobl = mean_obliquity(time.tt) / RADEG;
    let tobl = mobl + deps / 3600.0;
    EarthTilt {
        tt: time.tt,
        dpsi,
        deps,
        ee: dpsi * (mobl * RADEG).cos() / 15.0,
        mobl,
        tobl,
    }
}

/// IAU 2006 precession angles `(ψ_A, ω_A, χ_A)` in arcseconds.
fn precession_angles(tt: Days) -> (ArcSec, ArcSec, ArcSec) {
    let t = tt / DAYS_PER_CENTURY;

    let psia = ((((-0.000_000_095_1 * t + 0.000_132_851) * t - 0.001_140_45) * t
        - 1.079_006_9)
        * t
        + 5_038.481_507)
        * t;

    let omegaa = ((((0.000_000_333_7 * t - 0.000_000_467) * t - 0.007_725_03) * t
        + 0.051_262_3)
        * t
        - 0.025_754)
        * t
        + OBLIQUITY_J2000_ARCSEC;

    let chia = ((((-0.000_000_056_0 * t + 0.000_170_663) * t - 0.001_211_97) * t
        - 2.381_429_2)
        * t
        + 10.556_403)
        * t;

    (psia, omegaa, chia)
}

/// Precession rotation from the J2000 mean equator to the mean equator of date.
///
/// ```text
/// P = R3(χ_A) · R1(−ω_A) · R3(−ψ_A) · R1(ε₀)
/// ```
/// where every `Rᵢ` turns the coordinate axes.
pub fn precession_rotation(time: &Instant) -> RotationMatrix<Eqj, Eqm> {
    let (psia, omegaa, chia) = precession_angles(time.tt);
    RotationMatrix::<Eqj, Eqj>::identity()
        .pivot::<Eqm>(Axis::X, OBLIQUITY_J2000_ARCSEC / 3600.0)
        .pivot::<Eqm>(Axis::Z, -psia / 3600.0)
        .pivot::<Eqm>(Axis::X, -omegaa / 3600.0)
        .pivot(Axis::Z, chia / 3600.0)
}

/// Nutation rotation from the mean equator of date to the true equator of date.
///
/// ```text
/// N = R1(−ε_A − Δε) · R3(−Δψ) · R1(ε_A)
/// ```
pub fn nutation_rotation(time: &Instant) -> RotationMatrix<Eqm, Eqd> {
    let tilt = e_tilt(time);
    RotationMatrix::<Eqm, Eqm>::identity()
        .pivot::<Eqm>(Axis::X, tilt.mobl)
        .pivot::<Eqm>(Axis::Z, -tilt.dpsi / 3600.0)
        .pivot(Axis::X, -tilt.tobl)
}

/// Rotate a J2000 vector onto the true equator of its own date (precession then nutation).
pub fn gyration_from_j2000(v: &AstroVector<Eqj>) -> AstroVector<Eqd> {
    precession_rotation(&v.t)
        .then(&nutation_rotation(&v.t))
        .apply(v)
}

/// Rotate a true-equator-of-date vector back onto J2000 (inverse nutation then inverse
/// precession).
pub fn gyration_into_j2000(v: &AstroVector<Eqd>) -> AstroVector<Eqj> {
    precession_rotation(&v.t)
        .then(&nutation_rotation(&v.t))
        .inverse()
        .apply(v)
}

/// State variant of [`gyration_from_j2000`]; the rotation is held fixed over the state.
pub fn gyration_state_from_j2000(s: &StateVector<Eqj>) -> StateVector<Eqd> {
    precession_rotation(&s.t)
        .then(&nutation_rotation(&s.t))
        .apply_state(s)
}

pub fn gyration_state_into_j2000(s: &StateVector<Eqd>) -> StateVector<Eqj> {
    precession_rotation(&s.t)
        .then(&nutation_rotation(&s.t))
        .inverse()
        .apply_state(s)
}

#[cfg(test)]
mod earth_orientation_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_obliquity_j2000() {
        assert_relative_eq!(mean_obliquity(0.0) / RADEG, 23.439_279_4, epsilon = 1e-7);
    }

    #[test]
    fn test_nutation_meeus_example() {
        // Meeus, example 22.a: 1987 April 10, 0h TD.
        let tt = 2_446_895.5 - crate::constants::JD_J2000;
        let (dpsi, deps) = nutation_angles(tt);
        assert_relative_eq!(dpsi, -3.788, epsilon = 0.05);
        assert_relative_eq!(deps, 9.443, epsilon = 0.05);
    }

    #[test]
    fn test_precession_is_identity_at_j2000() {
        let p = precession_rotation(&Instant::from_terrestrial_time(0.0));
        assert!((p.rot - nalgebra::Matrix3::identity()).norm() < 1e-7);
    }

    #[test]
    fn test_precession_of_equinox_per_century() {
        // A star on the J2000 equinox gains ~4612″ of right ascension per century.
        let t = Instant::from_terrestrial_time(DAYS_PER_CENTURY);
        let x = AstroVector::<Eqj>::new(1.0, 0.0, 0.0, t);
        let moved = precession_rotation(&t).apply(&x).to_spherical();
        let ra = if moved.lon > 180.0 { moved.lon - 360.0 } else { moved.lon };
        assert!(ra > 1.2 && ra < 1.35, "ra = {ra}");
    }

    #[test]
    fn test_gyration_round_trip() {
        let t = Instant::from_ut(-12_345.6);
        let v = AstroVector::<Eqj>::new(-0.3, 0.8, 0.52, t);
        let back = gyration_into_j2000(&gyration_from_j2000(&v));
        assert_relative_eq!(v.xyz, back.xyz, epsilon = 1e-9);
    }
}
