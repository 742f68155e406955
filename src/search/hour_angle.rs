//! # Hour-angle search
//!
//! The hour angle of a body is the local apparent sidereal time minus its right ascension.
//! Culmination is hour angle 0, lower culmination hour angle 12.
//!
//! This search does not use the generic engine. Each pass converts the remaining
//! hour-angle error into sidereal hours and steps the clock by the matching number of solar
//! days; the right ascension is re-evaluated at the new time and the loop repeats until
//! the error is below 0.1 second.
use tracing::{debug, trace};

use crate::{
    astro_errors::AstroError,
    body::Body,
    constants::{Hour, SOLAR_DAYS_PER_SIDEREAL_DAY},
    coords::{EquatorEpoch, Refraction, Topocentric},
    light_time::Aberration,
    observer::Observer,
    search::SearchDirection,
    sky::Sky,
    time::Instant,
};

const HOUR_ANGLE_TOLERANCE_SECONDS: f64 = 0.1;

const HOUR_ANGLE_MAX_ITER: usize = 20;

/// Time at which a body reaches an hour angle, with its apparent horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HourAngleEvent {
    pub time: Instant,
    /// Azimuth and altitude with normal refraction.
    pub hor: Topocentric,
}

impl Sky {
    /// Next (or previous) time `body` reaches `hour_angle` for `observer`.
    ///
    /// Arguments
    /// -----------------
    /// * `hour_angle`: target hour angle in sidereal hours, `[0, 24)`; 0 is the upper
    ///   culmination.
    /// * `start`: the search starts here.
    /// * `direction`: the first step is always taken this way in time.
    ///
    /// Return
    /// ----------
    /// * The event, which always exists since every body culminates once per sidereal day.
    /// * [`AstroError::InvalidInput`] for an hour angle outside `[0, 24)`,
    ///   [`AstroError::UnsupportedBody`] for the Earth, and
    ///   [`AstroError::NonConvergence`] if the refinement does not settle.
    pub fn search_hour_angle(
        &self,
        body: Body,
        observer: &Observer,
        hour_angle: Hour,
        start: &Instant,
        direction: SearchDirection,
    ) -> Result<HourAngleEvent, AstroError> {
        if body.is_earth() {
            return Err(AstroError::UnsupportedBody(body));
        }
        if !(0.0..24.0).contains(&hour_angle) {
            return Err(AstroError::InvalidInput(format!(
                "hour angle {hour_angle} outside [0, 24)"
            )));
        }

        let mut time = *start;
        for iter in 0..HOUR_ANGLE_MAX_ITER {
            let gast = self.sidereal().gast(&time);
            let ofdate = self.equator(body, &time, observer, EquatorEpoch::OfDate, Aberration::Corrected)?;

            // Sidereal hours still to go until the target hour angle.
            let mut delta = (hour_angle + ofdate.ra - observer.longitude() / 15.0 - gast) % 24.0;
            if iter == 0 {
                match direction {
                    SearchDirection::Forward if delta < 0.0 => delta += 24.0,
                    SearchDirection::Backward if delta > 0.0 => delta -= 24.0,
                    _ => {}
                }
            } else if delta < -12.0 {
                delta += 24.0;
            } else if delta > 12.0 {
                delta -= 24.0;
            }
            trace!(iter, delta, "hour-angle pass");

            if delta.abs() * 3600.0 < HOUR_ANGLE_TOLERANCE_SECONDS {
                let hor = self.horizon(&time, observer, ofdate.ra, ofdate.dec, Refraction::Normal);
                debug!(%body, hour_angle, ut = time.ut, "hour angle reached");
                return Ok(HourAngleEvent { time, hor });
            }
            time = time.add_days(delta / 24.0 * SOLAR_DAYS_PER_SIDEREAL_DAY);
        }

        Err(AstroError::NonConvergence(format!(
            "hour-angle search for {body} did not settle after {HOUR_ANGLE_MAX_ITER} passes"
        )))
    }

    /// Hour angle of `body` at `time`, sidereal hours in `[0, 24)`.
    pub fn hour_angle(&self, body: Body, time: &Instant, observer: &Observer) -> Result<Hour, AstroError> {
        let gast = self.sidereal().gast(time);
        let ofdate = self.equator(body, time, observer, EquatorEpoch::OfDate, Aberration::Corrected)?;
        Ok((gast + observer.longitude() / 15.0 - ofdate.ra).rem_euclid(24.0))
    }
}

#[cfg(test)]
mod hour_angle_test {
    use super::*;

    #[test]
    fn test_culmination_is_highest_point() {
        let sky = Sky::new();
        let site = Observer::new(40.0, -75.0, 0.0).unwrap();
        let start = Instant::from_calendar(2024, 4, 10, 0, 0, 0.0).unwrap();
        let event = sky
            .search_hour_angle(Body::Sun, &site, 0.0, &start, SearchDirection::Forward)
            .unwrap();
        assert!(event.time.ut > start.ut && event.time.ut < start.ut + 1.0);
        // The Sun transits due south from mid-northern latitudes.
        assert!((event.hor.azimuth - 180.0).abs() < 0.1, "{}", event.hor.azimuth);

        let ha = sky.hour_angle(Body::Sun, &event.time, &site).unwrap();
        let ha = if ha > 12.0 { ha - 24.0 } else { ha };
        assert!(ha.abs() * 3600.0 < 1.0);

        for dt in [-0.05, 0.05] {
            let t = event.time.add_days(dt);
            let eq = sky
                .equator(Body::Sun, &t, &site, EquatorEpoch::OfDate, Aberration::Corrected)
                .unwrap();
            let hor = sky.horizon(&t, &site, eq.ra, eq.dec, Refraction::Normal);
            assert!(hor.altitude < event.hor.altitude);
        }
    }

    #[test]
    fn test_backward_direction() {
        let sky = Sky::new();
        let site = Observer::new(-20.0, 30.0, 0.0).unwrap();
        let start = Instant::from_calendar(2024, 1, 5, 6, 0, 0.0).unwrap();
        let event = sky
            .search_hour_angle(Body::MARS, &site, 12.0, &start, SearchDirection::Backward)
            .unwrap();
        assert!(event.time.ut < start.ut && event.time.ut > start.ut - 1.0);
    }

    #[test]
    fn test_rejects_bad_hour_angle() {
        let sky = Sky::new();
        let site = Observer::new(0.0, 0.0, 0.0).unwrap();
        let err = sky
            .search_hour_angle(Body::Moon, &site, 24.0, &Instant::from_ut(0.0), SearchDirection::Forward)
            .unwrap_err();
        assert!(matches!(err, AstroError::InvalidInput(_)));
    }
}
