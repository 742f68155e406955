//! # Lunar phases
//!
//! The phase angle is the geocentric ecliptic longitude of the Moon minus that of the Sun:
//! 0° new moon, 90° first quarter, 180° full moon, 270° third quarter. It grows by about
//! 12.19° per day, so a target phase can be predicted to within a day and a half from the
//! current one, and only a three-day bracket needs to be searched.
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    body::Body,
    constants::{longitude_offset, Degree, MEAN_SYNODIC_MONTH},
    search::engine::{search, SearchOptions},
    sky::Sky,
    time::Instant,
};

/// Half-width of the bracket around the predicted phase time, days.
const PHASE_UNCERTAINTY_DAYS: f64 = 1.5;

/// One of the four principal lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quarter {
    NewMoon,
    FirstQuarter,
    FullMoon,
    ThirdQuarter,
}

impl Quarter {
    fn from_index(index: u8) -> Quarter {
        match index % 4 {
            0 => Quarter::NewMoon,
            1 => Quarter::FirstQuarter,
            2 => Quarter::FullMoon,
            _ => Quarter::ThirdQuarter,
        }
    }

    /// Phase angle of the quarter, degrees.
    pub fn phase_angle(&self) -> Degree {
        90.0 * (*self as u8) as f64
    }

    pub fn next(&self) -> Quarter {
        Quarter::from_index(*self as u8 + 1)
    }
}

/// A lunar quarter and the time it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoonQuarter {
    pub quarter: Quarter,
    pub time: Instant,
}

impl Sky {
    /// Phase angle of the Moon, degrees in `[0, 360)`.
    pub fn moon_phase(&self, time: &Instant) -> Result<Degree, AstroError> {
        self.pair_longitude(Body::Moon, Body::Sun, time)
    }

    /// Time at which the phase angle reaches `target_lon`.
    ///
    /// Arguments
    /// -----------------
    /// * `target_lon`: phase angle in degrees.
    /// * `start`: the search starts here.
    /// * `limit_days`: window length; negative searches backward.
    ///
    /// Return
    /// ----------
    /// * `Ok(None)` when the phase is not reached inside the window.
    pub fn search_moon_phase(
        &self,
        target_lon: Degree,
        start: &Instant,
        limit_days: f64,
    ) -> Result<Option<Instant>, AstroError> {
        if !limit_days.is_finite() {
            return Err(AstroError::InvalidInput(format!("limit_days must be finite, got {limit_days}")));
        }
        let moon_offset =
            |t: &Instant| -> Result<f64, AstroError> { Ok(longitude_offset(self.moon_phase(t)? - target_lon)) };

        let mut ya = moon_offset(start)?;
        let (dt1, dt2) = if limit_days < 0.0 {
            if ya < 0.0 {
                ya += 360.0;
            }
            let est_dt = -(MEAN_SYNODIC_MONTH * ya) / 360.0;
            let dt2 = est_dt + PHASE_UNCERTAINTY_DAYS;
            if dt2 < limit_days {
                return Ok(None);
            }
            (limit_days.max(est_dt - PHASE_UNCERTAINTY_DAYS), dt2)
        } else {
            if ya > 0.0 {
                ya -= 360.0;
            }
            let est_dt = -(MEAN_SYNODIC_MONTH * ya) / 360.0;
            let dt1 = est_dt - PHASE_UNCERTAINTY_DAYS;
            if dt1 > limit_days {
                return Ok(None);
            }
            (dt1, limit_days.min(est_dt + PHASE_UNCERTAINTY_DAYS))
        };

        let t1 = start.add_days(dt1);
        let t2 = start.add_days(dt2);
        search(moon_offset, t1, t2, SearchOptions::with_tolerance(0.1))
    }

    /// First lunar quarter after `start`.
    pub fn search_moon_quarter(&self, start: &Instant) -> Result<MoonQuarter, AstroError> {
        let phase = self.moon_phase(start)?;
        let quarter = Quarter::from_index((phase / 90.0).floor() as u8).next();
        let time = self
            .search_moon_phase(quarter.phase_angle(), start, 10.0)?
            .ok_or_else(|| AstroError::NonConvergence(format!("cannot find {quarter:?} after {start}")))?;
        debug!(?quarter, %time, "moon quarter");
        Ok(MoonQuarter { quarter, time })
    }

    /// The quarter following `previous`.
    pub fn next_moon_quarter(&self, previous: &MoonQuarter) -> Result<MoonQuarter, AstroError> {
        // Six days lands safely between two quarters.
        self.search_moon_quarter(&previous.time.add_days(6.0))
    }
}

#[cfg(test)]
mod moon_phase_test {
    use super::*;

    #[test]
    fn test_full_moon_2024() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2024, 1, 1, 0, 0, 0.0).unwrap();
        let full = sky.search_moon_phase(180.0, &start, 40.0).unwrap().unwrap();
        // 2024-01-25 17:54 UTC.
        let expected = Instant::from_calendar(2024, 1, 25, 17, 54, 0.0).unwrap();
        assert!((full.ut - expected.ut).abs() * 1440.0 < 10.0);
    }

    #[test]
    fn test_backward_phase() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2024, 1, 30, 0, 0, 0.0).unwrap();
        let full = sky.search_moon_phase(180.0, &start, -40.0).unwrap().unwrap();
        assert!(full.ut < start.ut && start.ut - full.ut < 6.0);
    }

    #[test]
    fn test_short_window() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2024, 1, 1, 0, 0, 0.0).unwrap();
        assert_eq!(sky.search_moon_phase(180.0, &start, 5.0).unwrap(), None);
    }

    #[test]
    fn test_quarters_cycle() {
        let sky = Sky::new();
        let mut mq = sky
            .search_moon_quarter(&Instant::from_calendar(2023, 7, 1, 0, 0, 0.0).unwrap())
            .unwrap();
        for _ in 0..12 {
            let next = sky.next_moon_quarter(&mq).unwrap();
            assert_eq!(next.quarter, mq.quarter.next());
            let gap = next.time.ut - mq.time.ut;
            assert!(gap > 5.5 && gap < 9.0, "{gap}");
            mq = next;
        }
    }
}
