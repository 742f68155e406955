//! # Geocentric Moon
//!
//! Truncated ELP-2000/82 series in the form tabulated by Meeus (*Astronomical Algorithms*,
//! chapter 47): sixty periodic terms for longitude and distance, sixty for latitude, plus
//! the additive terms driven by Venus, Jupiter and the flattening of the Earth.
//!
//! The series gives the geometric position referred to the mean ecliptic and equinox of
//! date. Velocity is obtained by differentiating every term with the rates of the
//! fundamental arguments.
use nalgebra::Vector3;

use crate::{
    constants::{
        normalize_degrees, Degree, Kilometer, AU, DAYS_PER_CENTURY, GENERAL_PRECESSION_RATE, RADEG,
    },
    frames::{Ecm, Eqj},
    rotation::rotation_ecm_eqj,
    time::Instant,
    vector::{AstroVector, StateVector},
};

/// Mean Earth–Moon distance of the series, km.
const MEAN_DISTANCE_KM: Kilometer = 385_000.56;

/// Multipliers of `(D, M, M′, F)`, then the sine coefficient of longitude and the cosine
/// coefficient of distance (1e-6 degree and 1e-3 km).
#[rustfmt::skip]
const LON_DIST_TERMS: [(i8, i8, i8, i8, f64, f64); 60] = [
    (0, 0, 1, 0, 6_288_774.0, -20_905_355.0),
    (2, 0, -1, 0, 1_274_027.0, -3_699_111.0),
    (2, 0, 0, 0, 658_314.0, -2_955_968.0),
    (0, 0, 2, 0, 213_618.0, -569_925.0),
    (0, 1, 0, 0, -185_116.0, 48_888.0),
    (0, 0, 0, 2, -114_332.0, -3_149.0),
    (2, 0, -2, 0, 58_793.0, 246_158.0),
    (2, -1, -1, 0, 57_066.0, -152_138.0),
    (2, 0, 1, 0, 53_322.0, -170_733.0),
    (2, -1, 0, 0, 45_758.0, -204_586.0),
    (0, 1, -1, 0, -40_923.0, -129_620.0),
    (1, 0, 0, 0, -34_720.0, 108_743.0),
    (0, 1, 1, 0, -30_383.0, 104_755.0),
    (2, 0, 0, -2, 15_327.0, 10_321.0),
    (0, 0, 1, 2, -12_528.0, 0.0),
    (0, 0, 1, -2, 10_980.0, 79_661.0),
    (4, 0, -1, 0, 10_675.0, -34_782.0),
    (0, 0, 3, 0, 10_034.0, -23_210.0),
    (4, 0, -2, 0, 8_548.0, -21_636.0),
    (2, 1, -1, 0, -7_888.0, 24_208.0),
    (2, 1, 0, 0, -6_766.0, 30_824.0),
    (1, 0, -1, 0, -5_163.0, -8_379.0),
    (1, 1, 0, 0, 4_987.0, -16_675.0),
    (2, -1, 1, 0, 4_036.0, -12_831.0),
    (2, 0, 2, 0, 3_994.0, -10_445.0),
    (4, 0, 0, 0, 3_861.0, -11_650.0),
    (2, 0, -3, 0, 3_665.0, 14_403.0),
    (0, 1, -2, 0, -2_689.0, -7_003.0),
    (2, 0, -1, 2, -2_602.0, 0.0),
    (2, -1, -2, 0, 2_390.0, 10_056.0),
    (1, 0, 1, 0, -2_348.0, 6_322.0),
    (2, -2, 0, 0, 2_236.0, -9_884.0),
    (0, 1, 2, 0, -2_120.0, 5_751.0),
    (0, 2, 0, 0, -2_069.0, 0.0),
    (2, -2, -1, 0, 2_048.0, -4_950.0),
    (2, 0, 1, -2, -1_773.0, 4_130.0),
    (2, 0, 0, 2, -1_595.0, 0.0),
    (4, -1, -1, 0, 1_215.0, -3_958.0),
    (0, 0, 2, 2, -1_110.0, 0.0),
    (3, 0, -1, 0, -892.0, 3_258.0),
    (2, 1, 1, 0, -810.0, 2_616.0),
    (4, -1, -2, 0, 759.0, -1_897.0),
    (0, 2, -1, 0, -713.0, -2_117.0),
    (2, 2, -1, 0, -700.0, 2_354.0),
    (2, 1, -2, 0, 691.0, 0.0),
    (2, -1, 0, -2, 596.0, 0.0),
    (4, 0, 1, 0, 549.0, -1_423.0),
    (0, 0, 4, 0, 537.0, -1_117.0),
    (4, -1, 0, 0, 520.0, -1_571.0),
    (1, 0, -2, 0, -487.0, -1_739.0),
    (2, 1, 0, -2, -399.0, 0.0),
    (0, 0, 2, -2, -381.0, -4_421.0),
    (1, 1, 1, 0, 351.0, 0.0),
    (3, 0, -2, 0, -340.0, 0.0),
    (4, 0, -3, 0, 330.0, 0.0),
    (2, -1, 2, 0, 327.0, 0.0),
    (0, 2, 1, 0, -323.0, 1_165.0),
    (1, 1, -1, 0, 299.0, 0.0),
    (2, 0, 3, 0, 294.0, 0.0),
    (2, 0, -1, -2, 0.0, 8_752.0),
];

/// Multipliers of `(D, M, M′, F)` and the sine coefficient of latitude (1e-6 degree).
#[rustfmt::skip]
const LAT_TERMS: [(i8, i8, i8, i8, f64); 60] = [
    (0, 0, 0, 1, 5_128_122.0),
    (0, 0, 1, 1, 280_602.0),
    (0, 0, 1, -1, 277_693.0),
    (2, 0, 0, -1, 173_237.0),
    (2, 0, -1, 1, 55_413.0),
    (2, 0, -1, -1, 46_271.0),
    (2, 0, 0, 1, 32_573.0),
    (0, 0, 2, 1, 17_198.0),
    (2, 0, 1, -1, 9_266.0),
    (0, 0, 2, -1, 8_822.0),
    (2, -1, 0, -1, 8_216.0),
    (2, 0, -2, -1, 4_324.0),
    (2, 0, 1, 1, 4_200.0),
    (2, 1, 0, -1, -3_359.0),
    (2, -1, -1, 1, 2_463.0),
    (2, -1, 0, 1, 2_211.0),
    (2, -1, -1, -1, 2_065.0),
    (0, 1, -1, -1, -1_870.0),
    (4, 0, -1, -1, 1_828.0),
    (0, 1, 0, 1, -1_794.0),
    (0, 0, 0, 3, -1_749.0),
    (0, 1, -1, 1, -1_565.0),
    (1, 0, 0, 1, -1_491.0),
    (0, 1, 1, 1, -1_475.0),
    (0, 1, 1, -1, -1_410.0),
    (0, 1, 0, -1, -1_344.0),
    (1, 0, 0, -1, -1_335.0),
    (0, 0, 3, 1, 1_107.0),
    (4, 0, 0, -1, 1_021.0),
    (4, 0, -1, 1, 833.0),
    (0, 0, 1, -3, 777.0),
    (4, 0, -2, 1, 671.0),
    (2, 0, 0, -3, 607.0),
    (2, 0, 2, -1, 596.0),
    (2, -1, 1, -1, 491.0),
    (2, 0, -2, 1, -451.0),
    (0, 0, 3, -1, 439.0),
    (2, 0, 2, 1, 422.0),
    (2, 0, -3, -1, 421.0),
    (2, 1, -1, 1, -366.0),
    (2, 1, 0, 1, -351.0),
    (4, 0, 0, 1, 331.0),
    (2, -1, 1, 1, 315.0),
    (2, -2, 0, -1, 302.0),
    (0, 0, 1, 3, -283.0),
    (2, 1, 1, -1, -229.0),
    (1, 1, 0, -1, 223.0),
    (1, 1, 0, 1, 223.0),
    (0, 1, -2, -1, -220.0),
    (2, 1, -1, -1, -220.0),
    (1, 0, 1, 1, -185.0),
    (2, -1, -2, -1, 181.0),
    (0, 1, 2, 1, -177.0),
    (4, 0, -2, -1, 176.0),
    (4, -1, -1, -1, 166.0),
    (1, 0, 1, -1, -164.0),
    (4, 0, 1, -1, 132.0),
    (1, 0, -1, -1, -119.0),
    (4, -1, 0, -1, 115.0),
    (2, -2, 0, 1, 107.0),
];

/// A fundamental argument and its rate, both in degrees (rate per Julian century).
#[derive(Clone, Copy)]
struct Arg {
    value: Degree,
    rate: Degree,
}

impl Arg {
    /// Evaluate `c0 + c1·T + c2·T² + c3·T³ + c4·T⁴` and its derivative.
    fn poly(t: f64, c: [f64; 5]) -> Self {
        Arg {
            value: (((c[4] * t + c[3]) * t + c[2]) * t + c[1]) * t + c[0],
            rate: ((4.0 * c[4] * t + 3.0 * c[3]) * t + 2.0 * c[2]) * t + c[1],
        }
    }

    fn combine(terms: &[(f64, Arg)]) -> Self {
        terms.iter().fold(
            Arg {
                value: 0.0,
                rate: 0.0,
            },
            |acc, &(k, a)| Arg {
                value: acc.value + k * a.value,
                rate: acc.rate + k * a.rate,
            },
        )
    }
}

/// Accumulates `Σ coeff·sin(arg)` (or cosine) together with its time derivative.
#[derive(Default)]
struct Sum {
    value: f64,
    rate: f64,
}

impl Sum {
    fn add_sin(&mut self, coeff: f64, arg: Arg) {
        let (s, c) = (arg.value * RADEG).sin_cos();
        self.value += coeff * s;
        self.rate += coeff * c * arg.rate * RADEG;
    }

    fn add_cos(&mut self, coeff: f64, arg: Arg) {
        let (s, c) = (arg.value * RADEG).sin_cos();
        self.value += coeff * c;
        self.rate -= coeff * s * arg.rate * RADEG;
    }
}

/// Geocentric ecliptic coordinates of the Moon and their rates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonEcliptic {
    /// Longitude, degrees, mean equinox of date.
    pub lon: Degree,
    /// Latitude, degrees.
    pub lat: Degree,
    /// Distance between the centres of the Earth and the Moon, km.
    pub dist: Kilometer,
    /// `d lon / dt`, degrees per day.
    pub lon_rate: f64,
    /// `d lat / dt`, degrees per day.
    pub lat_rate: f64,
    /// `d dist / dt`, km per day.
    pub dist_rate: f64,
}

/// Evaluate the lunar series at `time`.
pub fn moon_ecliptic(time: &Instant) -> MoonEcliptic {
    let t = time.julian_centuries();

    let lp = Arg::poly(
        t,
        [218.316_447_7, 481_267.881_234_21, -0.001_578_6, 1.0 / 538_841.0, -1.0 / 65_194_000.0],
    );
    let d = Arg::poly(
        t,
        [297.850_192_1, 445_267.111_403_4, -0.001_881_9, 1.0 / 545_868.0, -1.0 / 113_065_000.0],
    );
    let m = Arg::poly(
        t,
        [357.529_109_2, 35_999.050_290_9, -0.000_153_6, 1.0 / 24_490_000.0, 0.0],
    );
    let mp = Arg::poly(
        t,
        [134.963_396_4, 477_198.867_505_5, 0.008_741_4, 1.0 / 69_699.0, -1.0 / 14_712_000.0],
    );
    let f = Arg::poly(
        t,
        [93.272_095_0, 483_202.017_523_3, -0.003_653_9, -1.0 / 3_526_000.0, 1.0 / 863_310_000.0],
    );
    let a1 = Arg::poly(t, [119.75, 131.849, 0.0, 0.0, 0.0]);
    let a2 = Arg::poly(t, [53.09, 479_264.290, 0.0, 0.0, 0.0]);
    let a3 = Arg::poly(t, [313.45, 481_266.484, 0.0, 0.0, 0.0]);

    // Eccentricity of the Earth's orbit damps every term containing M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e_factor = |mult: i8| match mult.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };

    let mut sl = Sum::default();
    let mut sr = Sum::default();
    let mut sb = Sum::default();

    for &(kd, km, kmp, kf, cl, cr) in LON_DIST_TERMS.iter() {
        let arg = Arg::combine(&[
            (kd as f64, d),
            (km as f64, m),
            (kmp as f64, mp),
            (kf as f64, f),
        ]);
        let ef = e_factor(km);
        if cl != 0.0 {
            sl.add_sin(cl * ef, arg);
        }
        if cr != 0.0 {
            sr.add_cos(cr * ef, arg);
        }
    }

    for &(kd, km, kmp, kf, cb) in LAT_TERMS.iter() {
        let arg = Arg::combine(&[
            (kd as f64, d),
            (km as f64, m),
            (kmp as f64, mp),
            (kf as f64, f),
        ]);
        sb.add_sin(cb * e_factor(km), arg);
    }

    sl.add_sin(3_958.0, a1);
    sl.add_sin(1_962.0, Arg::combine(&[(1.0, lp), (-1.0, f)]));
    sl.add_sin(318.0, a2);

    sb.add_sin(-2_235.0, lp);
    sb.add_sin(382.0, a3);
    sb.add_sin(175.0, Arg::combine(&[(1.0, a1), (-1.0, f)]));
    sb.add_sin(175.0, Arg::combine(&[(1.0, a1), (1.0, f)]));
    sb.add_sin(127.0, Arg::combine(&[(1.0, lp), (-1.0, mp)]));
    sb.add_sin(-115.0, Arg::combine(&[(1.0, lp), (1.0, mp)]));

    MoonEcliptic {
        lon: normalize_degrees(lp.value + sl.value * 1e-6),
        lat: sb.value * 1e-6,
        dist: MEAN_DISTANCE_KM + sr.value * 1e-3,
        lon_rate: (lp.rate + sl.rate * 1e-6) / DAYS_PER_CENTURY,
        lat_rate: sb.rate * 1e-6 / DAYS_PER_CENTURY,
        dist_rate: sr.rate * 1e-3 / DAYS_PER_CENTURY,
    }
}

/// Geocentric state of the Moon on the mean ecliptic of date, AU and AU/day.
pub fn geo_moon_state_of_date(time: &Instant) -> StateVector<Ecm> {
    let ecl = moon_ecliptic(time);
    let r = ecl.dist / AU;
    let dr = ecl.dist_rate / AU;
    let (dl, db) = (ecl.lon_rate * RADEG, ecl.lat_rate * RADEG);
    let (sl, cl) = (ecl.lon * RADEG).sin_cos();
    let (sb, cb) = (ecl.lat * RADEG).sin_cos();

    StateVector::new(
        Vector3::new(r * cb * cl, r * cb * sl, r * sb),
        Vector3::new(
            dr * cb * cl - r * sb * cl * db - r * cb * sl * dl,
            dr * cb * sl - r * sb * sl * db + r * cb * cl * dl,
            dr * sb + r * cb * db,
        ),
        *time,
    )
}

/// Geocentric state of the Moon in J2000 mean equatorial coordinates.
///
/// The series longitude is counted from the moving equinox of date, so the precession
/// spin is taken out of the velocity before rotating, as for the planets.
pub fn geo_moon_state(time: &Instant) -> StateVector<Eqj> {
    let mut s = geo_moon_state_of_date(time);
    let spin = Vector3::new(0.0, 0.0, GENERAL_PRECESSION_RATE);
    s.vel -= spin.cross(&s.pos);
    rotation_ecm_eqj(time).apply_state(&s)
}

/// Geocentric position of the Moon in J2000 mean equatorial coordinates.
pub fn geo_moon(time: &Instant) -> AstroVector<Eqj> {
    geo_moon_state(time).position()
}

#[cfg(test)]
mod moon_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_meeus_example_47a() {
        // 1992 April 12, 0h TD.
        let t = Instant::from_terrestrial_time(2_448_724.5 - 2_451_545.0);
        let ecl = moon_ecliptic(&t);
        // Geometric longitude before nutation: 133.162655°.
        assert_relative_eq!(ecl.lon, 133.162_655, epsilon = 1e-5);
        assert_relative_eq!(ecl.lat, -3.229_126, epsilon = 1e-5);
        assert_relative_eq!(ecl.dist, 368_409.7, epsilon = 0.1);
    }

    #[test]
    fn test_distance_range() {
        for k in 0..400 {
            let t = Instant::from_ut(-3_000.0 + 1.37 * k as f64);
            let d = geo_moon(&t).length() * AU;
            assert!(d > 356_000.0 && d < 407_000.0, "{d}");
        }
    }

    #[test]
    fn test_rates_match_finite_difference() {
        let t = Instant::from_ut(1_234.5);
        let h = 1e-3;
        let mid = moon_ecliptic(&t);
        let before = moon_ecliptic(&Instant::from_terrestrial_time(t.tt - h));
        let after = moon_ecliptic(&Instant::from_terrestrial_time(t.tt + h));
        assert_relative_eq!(mid.lon_rate, (after.lon - before.lon) / (2.0 * h), epsilon = 1e-5);
        assert_relative_eq!(mid.lat_rate, (after.lat - before.lat) / (2.0 * h), epsilon = 1e-5);
        assert_relative_eq!(mid.dist_rate, (after.dist - before.dist) / (2.0 * h), epsilon = 1e-2);
        // Mean motion of about 13.2° per day.
        assert!(mid.lon_rate > 11.0 && mid.lon_rate < 16.0);
    }

    #[test]
    fn test_j2000_velocity_matches_finite_difference() {
        let t = Instant::from_ut(8_765.4);
        let h = 1e-3;
        let s = geo_moon_state(&t);
        let before = geo_moon(&Instant::from_terrestrial_time(t.tt - h));
        let after = geo_moon(&Instant::from_terrestrial_time(t.tt + h));
        let numeric = (after.xyz - before.xyz) / (2.0 * h);
        // The precession spin alone is about 3e-6 of the lunar velocity.
        let err = (numeric - s.vel).norm() / s.vel.norm();
        assert!(err < 5e-7, "{err}");
    }
}
