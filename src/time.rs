//! # Time scales
//!
//! An [`Instant`] stores the same moment in two scales, both as fractional days since the
//! J2000.0 epoch (2000-01-01 12:00):
//!
//! * `ut` – Universal Time, the scale that follows Earth rotation,
//! * `tt` – Terrestrial Time, the uniform scale used by every orbital model.
//!
//! `tt` is never set independently: it is always recomputed from `ut` through the
//! polynomial ΔT model of [`delta_t_seconds`]. Calendar conversions go through
//! [`hifitime::Epoch`], treating UTC as an approximation of UT.
use std::fmt;
use std::str::FromStr;

use hifitime::Epoch;

use crate::{
    astro_errors::AstroError,
    constants::{Days, DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, DAYS_PER_YEAR, JD_J2000, SECONDS_PER_DAY},
};

/// Calendar year at which the ΔT model switches branch.
const DELTA_T_PIVOT_YEAR: f64 = 1974.0;

/// ΔT value (seconds) at the pivot year.
const DELTA_T_PIVOT_VALUE: f64 = 44.4841;

/// ΔT slope at the pivot year (seconds / year), shared by both branches.
const DELTA_T_PIVOT_SLOPE: f64 = 0.6014;

/// Curvature of the historical branch (long-term tidal braking, s/yr²).
const DELTA_T_PAST_CURVATURE: f64 = 0.0032;

/// Curvature of the modern branch (s/yr²).
const DELTA_T_MODERN_CURVATURE: f64 = 0.0001;

/// Convergence threshold of the TT → UT inversion, in days.
const TT_INVERSION_TOLERANCE: Days = 1e-12;

const TT_INVERSION_MAX_ITER: usize = 8;

/// Approximate ΔT = TT − UT in seconds for a UT day offset from J2000.
///
/// The model is a pair of quadratics in `t = year − 1974`:
///
/// ```text
/// t < 0 :  ΔT = 44.4841 + 0.6014·t + 0.0032·t²
/// t ≥ 0 :  ΔT = 44.4841 + 0.6014·t + 0.0001·t²
/// ```
///
/// Both branches share value and first derivative at 1974, so ΔT is C¹-continuous.
pub fn delta_t_seconds(ut: Days) -> f64 {
    let year = 2000.0 + (ut + 0.5) / DAYS_PER_YEAR;
    let t = year - DELTA_T_PIVOT_YEAR;
    let curvature = if t < 0.0 {
        DELTA_T_PAST_CURVATURE
    } else {
        DELTA_T_MODERN_CURVATURE
    };
    DELTA_T_PIVOT_VALUE + (DELTA_T_PIVOT_SLOPE + curvature * t) * t
}

fn terrestrial_time(ut: Days) -> Days {
    ut + delta_t_seconds(ut) / SECONDS_PER_DAY
}

/// A moment in time, held simultaneously as UT and TT days since J2000.0.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    /// Universal Time, days since 2000-01-01 12:00 UT.
    pub ut: Days,
    /// Terrestrial Time, days since 2000-01-01 12:00 TT.
    pub tt: Days,
}

impl Instant {
    /// Build an instant from a UT day offset relative to J2000.0.
    pub fn from_ut(ut: Days) -> Self {
        Instant {
            ut,
            tt: terrestrial_time(ut),
        }
    }

    /// Build an instant from a Terrestrial Time day offset.
    ///
    /// The UT value is obtained by fixed-point iteration on `ut = tt − ΔT(ut)`; the
    /// ΔT polynomial is smooth and nearly constant over a day, so the loop settles in one
    /// to three passes. The result always satisfies `|result.tt − tt| < 1e-12` days.
    pub fn from_terrestrial_time(tt: Days) -> Self {
        let mut time = Instant::from_ut(tt);
        // Far from J2000 the f64 spacing of `tt` exceeds the tolerance; the cap keeps
        // the loop finite once the residual is down to rounding noise.
        for _ in 0..TT_INVERSION_MAX_ITER {
            let err = time.tt - tt;
            if err.abs() < TT_INVERSION_TOLERANCE {
                break;
            }
            time = Instant::from_ut(time.ut - err);
        }
        time
    }

    /// Build an instant from a [`hifitime::Epoch`], reading it on the UTC scale.
    pub fn from_epoch(epoch: Epoch) -> Self {
        Instant::from_ut(epoch.to_jde_utc_days() - JD_J2000)
    }

    /// Build an instant from Gregorian calendar fields (UTC).
    ///
    /// Arguments
    /// -----------------
    /// * `year`, `month`, `day`: calendar date.
    /// * `hour`, `minute`: clock fields.
    /// * `second`: seconds including the fractional part, in `[0, 60)`.
    ///
    /// Return
    /// ----------
    /// * The matching [`Instant`], or [`AstroError::InvalidTimeFormat`] if the fields do not
    ///   form a valid date.
    pub fn from_calendar(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: f64,
    ) -> Result<Self, AstroError> {
        if !(0.0..60.0).contains(&second) {
            return Err(AstroError::InvalidTimeFormat(format!(
                "seconds out of range: {second}"
            )));
        }
        let whole = second.trunc();
        let nanos = ((second - whole) * 1e9).round().min(999_999_999.0) as u32;
        let epoch =
            Epoch::maybe_from_gregorian_utc(year, month, day, hour, minute, whole as u8, nanos)?;
        Ok(Instant::from_epoch(epoch))
    }

    /// Convert back to a [`hifitime::Epoch`] on the UTC scale.
    pub fn to_epoch(&self) -> Epoch {
        Epoch::from_jde_utc(self.ut + JD_J2000)
    }

    /// Gregorian calendar year of this instant.
    pub fn year(&self) -> i32 {
        self.to_epoch().to_gregorian_utc().0
    }

    /// Return a new instant shifted by `days` of Universal Time.
    pub fn add_days(&self, days: Days) -> Self {
        Instant::from_ut(self.ut + days)
    }

    /// Julian centuries of TT since J2000.0.
    pub fn julian_centuries(&self) -> f64 {
        self.tt / DAYS_PER_CENTURY
    }

    /// Julian millennia of TT since J2000.0, the time argument of the planetary series.
    pub fn julian_millennia(&self) -> f64 {
        self.tt / DAYS_PER_MILLENNIUM
    }
}

impl FromStr for Instant {
    type Err = AstroError;

    /// Parse an ISO 8601 timestamp such as `2023-08-22T00:00:00 UTC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Instant::from_epoch(Epoch::from_str(s)?))
    }
}

impl From<Epoch> for Instant {
    fn from(epoch: Epoch) -> Self {
        Instant::from_epoch(epoch)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_epoch())
    }
}

#[cfg(test)]
mod time_test {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_j2000_from_calendar() {
        let t = Instant::from_calendar(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert_relative_eq!(t.ut, 0.0, epsilon = 1e-9);
        // ΔT around 2000 is about a minute.
        let dt = (t.tt - t.ut) * SECONDS_PER_DAY;
        assert!(dt > 55.0 && dt < 70.0, "dt = {dt}");
    }

    #[test]
    fn test_delta_t_continuity_at_pivot() {
        let ut_pivot = (DELTA_T_PIVOT_YEAR - 2000.0) * DAYS_PER_YEAR - 0.5;
        let before = delta_t_seconds(ut_pivot - 1e-6);
        let after = delta_t_seconds(ut_pivot + 1e-6);
        assert_relative_eq!(before, after, epsilon = 1e-6);
        assert_relative_eq!(delta_t_seconds(ut_pivot), DELTA_T_PIVOT_VALUE, epsilon = 1e-9);
    }

    #[test]
    fn test_add_days_is_pure() {
        let t = Instant::from_ut(100.0);
        let u = t.add_days(1.5);
        assert_eq!(t.ut, 100.0);
        assert_relative_eq!(u.ut, 101.5);
        assert!(u.tt > t.tt);
    }

    #[test]
    fn test_parse_iso() {
        let t: Instant = "2023-08-22T00:00:00 UTC".parse().unwrap();
        let c = Instant::from_calendar(2023, 8, 22, 0, 0, 0.0).unwrap();
        assert_relative_eq!(t.ut, c.ut, epsilon = 1e-9);
        assert_eq!(t.year(), 2023);
    }

    #[test]
    fn test_invalid_calendar() {
        assert!(Instant::from_calendar(2023, 13, 1, 0, 0, 0.0).is_err());
        assert!(Instant::from_calendar(2023, 1, 1, 0, 0, 61.0).is_err());
    }

    proptest! {
        #[test]
        fn tt_inversion_round_trip(ut in -300_000.0f64..300_000.0) {
            let t = Instant::from_ut(ut);
            let back = Instant::from_terrestrial_time(t.tt);
            prop_assert!((back.tt - t.tt).abs() < 1e-9);
            prop_assert!((back.ut - t.ut).abs() < 1e-9);
        }
    }
}
