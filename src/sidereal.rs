//! # Greenwich apparent sidereal time
//!
//! GAST is the Earth rotation angle plus the accumulated precession in right ascension and
//! the equation of the equinoxes. Horizon conversions evaluate it many times at the same
//! instant while a search refines a root, so [`SiderealCache`] memoizes the last value.
use parking_lot::Mutex;

use crate::{
    constants::{Days, Hour, DAYS_PER_CENTURY},
    earth_orientation::e_tilt,
    time::Instant,
};

/// Earth rotation angle in revolutions, in `[0, 1)`.
///
/// ```text
/// θ(ut) = 0.7790572732640 + 0.00273781191135448·ut + frac(ut)
/// ```
pub fn earth_rotation_angle(ut: Days) -> f64 {
    let theta = (0.779_057_273_264_0 + 0.002_737_811_911_354_48 * ut).rem_euclid(1.0);
    (theta + ut.rem_euclid(1.0)).rem_euclid(1.0)
}

/// Greenwich apparent sidereal time in sidereal hours, in `[0, 24)`.
pub fn sidereal_time(time: &Instant) -> Hour {
    let t = time.tt / DAYS_PER_CENTURY;
    let tilt = e_tilt(time);
    let theta = earth_rotation_angle(time.ut);
    // Polynomial part of GMST − θ, arcseconds, plus the equation of the equinoxes.
    let st = tilt.ee * 15.0
        + 0.014_506
        + ((((-0.000_000_036_8 * t - 0.000_029_956) * t - 0.000_000_44) * t + 1.391_581_7) * t
            + 4_612.156_534)
            * t;
    let gst = (st / 3600.0 + theta * 360.0).rem_euclid(360.0) / 15.0;
    if gst >= 24.0 {
        0.0
    } else {
        gst
    }
}

/// Single-slot memo of the last `(tt, gast)` pair.
#[derive(Debug, Default)]
pub struct SiderealCache {
    last: Mutex<Option<(Days, Hour)>>,
}

impl SiderealCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Greenwich apparent sidereal time at `time`, reusing the previous value when the
    /// TT instant is unchanged.
    pub fn gast(&self, time: &Instant) -> Hour {
        let mut last = self.last.lock();
        match *last {
            Some((tt, gst)) if tt == time.tt => gst,
            _ => {
                let gst = sidereal_time(time);
                *last = Some((time.tt, gst));
                gst
            }
        }
    }
}

impl Clone for SiderealCache {
    fn clone(&self) -> Self {
        SiderealCache {
            last: Mutex::new(*self.last.lock()),
        }
    }
}

#[cfg(test)]
mod sidereal_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gmst_meeus_example() {
        // Meeus example 12.b: 1987 April 10, 19h21m00s UT → GMST 8h34m57.09s, GAST ≈ 8h34m56.86s.
        let t = Instant::from_calendar(1987, 4, 10, 19, 21, 0.0).unwrap();
        let expected = 8.0 + 34.0 / 60.0 + 56.858 / 3600.0;
        assert_relative_eq!(sidereal_time(&t), expected, epsilon = 2e-4);
    }

    #[test]
    fn test_cache_matches_direct() {
        let cache = SiderealCache::new();
        let t = Instant::from_ut(1234.567);
        let a = cache.gast(&t);
        let b = cache.gast(&t);
        assert_eq!(a, b);
        assert_eq!(a, sidereal_time(&t));
        let u = t.add_days(0.25);
        assert_relative_eq!(cache.gast(&u), sidereal_time(&u));
    }

    #[test]
    fn test_range() {
        for k in 0..200 {
            let g = sidereal_time(&Instant::from_ut(-5000.0 + 37.3 * k as f64));
            assert!((0.0..24.0).contains(&g));
        }
    }
}
