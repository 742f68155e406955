//! # Declination and ecliptic latitude extrema
//!
//! A maximum of a smooth quantity is an instant where its rate changes from positive to
//! negative. Rates are taken as central differences and the window is scanned in steps
//! short enough that a body cannot turn around twice inside one step; the first step whose
//! rate changes sign is handed to the generic engine.
use itertools::Itertools;
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    body::{Body, Planet},
    constants::Degree,
    coords::{ecliptic, equator_from_vector},
    light_time::Aberration,
    rotation::rotation_eqj_eqd,
    search::engine::{search, SearchOptions},
    sky::Sky,
    time::Instant,
};

/// Half-step of the central difference, days.
const RATE_STEP_DAYS: f64 = 0.01;

/// Longest window an extremum scan accepts, days (one Julian century).
pub const MAX_EXTREMUM_WINDOW_DAYS: f64 = 36_525.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExtremumKind {
    Maximum,
    Minimum,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtremumEvent {
    pub time: Instant,
    /// Value of the coordinate at the extremum, degrees.
    pub value: Degree,
    pub kind: ExtremumKind,
}

fn scan_step(body: Body) -> f64 {
    match body {
        Body::Moon => 1.0,
        Body::MERCURY => 2.0,
        Body::Sun | Body::Planet(Planet::Venus) => 5.0,
        Body::Pluto => 30.0,
        _ => 10.0,
    }
}

impl Sky {
    fn declination_of_date(&self, body: Body, time: &Instant) -> Result<Degree, AstroError> {
        let v = self.geo_vector(body, time, Aberration::Corrected)?;
        Ok(equator_from_vector(&rotation_eqj_eqd(time).apply(&v)).dec)
    }

    fn true_ecliptic_latitude(&self, body: Body, time: &Instant) -> Result<Degree, AstroError> {
        Ok(ecliptic(&self.geo_vector(body, time, Aberration::Corrected)?).elat)
    }

    fn search_extremum<G>(
        &self,
        body: Body,
        kind: ExtremumKind,
        start: &Instant,
        limit_days: f64,
        value: G,
    ) -> Result<Option<ExtremumEvent>, AstroError>
    where
        G: Fn(&Instant) -> Result<Degree, AstroError>,
    {
        if body.is_earth() {
            return Err(AstroError::UnsupportedBody(body));
        }
        if !(limit_days > 0.0 && limit_days <= MAX_EXTREMUM_WINDOW_DAYS) {
            return Err(AstroError::InvalidInput(format!(
                "extremum search needs a window in (0, {MAX_EXTREMUM_WINDOW_DAYS}] days, got {limit_days}"
            )));
        }
        let sign = match kind {
            ExtremumKind::Maximum => -1.0,
            ExtremumKind::Minimum => 1.0,
        };
        let slope = |t: &Instant| -> Result<f64, AstroError> {
            let before = value(&t.add_days(-RATE_STEP_DAYS))?;
            let after = value(&t.add_days(RATE_STEP_DAYS))?;
            Ok(sign * (after - before) / (2.0 * RATE_STEP_DAYS))
        };

        let step = scan_step(body);
        let count = (limit_days / step).ceil() as usize;
        let samples = (0..=count).map(|i| {
            let t = start.add_days((i as f64 * step).min(limit_days));
            slope(&t).map(|f| (t, f))
        });
        for (a, b) in samples.tuple_windows() {
            let ((t1, f1), (t2, f2)) = (a?, b?);
            if f1 <= 0.0 && f2 > 0.0 {
                let options = SearchOptions::default().with_initial_values(f1, f2);
                if let Some(time) = search(&slope, t1, t2, options)? {
                    let event = ExtremumEvent {
                        time,
                        value: value(&time)?,
                        kind,
                    };
                    debug!(%body, ?kind, value = event.value, ut = time.ut, "extremum");
                    return Ok(Some(event));
                }
            }
        }
        Ok(None)
    }

    /// First maximum or minimum of the apparent geocentric declination of date of `body`
    /// within `limit_days` after `start`.
    ///
    /// Return
    /// ----------
    /// * `Ok(None)` when the window holds no such extremum.
    /// * [`AstroError::InvalidInput`] for a non-positive window or one longer than
    ///   [`MAX_EXTREMUM_WINDOW_DAYS`], [`AstroError::UnsupportedBody`] for the Earth.
    pub fn search_declination_extremum(
        &self,
        body: Body,
        kind: ExtremumKind,
        start: &Instant,
        limit_days: f64,
    ) -> Result<Option<ExtremumEvent>, AstroError> {
        self.search_extremum(body, kind, start, limit_days, |t| self.declination_of_date(body, t))
    }

    /// First maximum or minimum of the geocentric latitude of `body` on the true ecliptic
    /// of date.
    pub fn search_ecliptic_latitude_extremum(
        &self,
        body: Body,
        kind: ExtremumKind,
        start: &Instant,
        limit_days: f64,
    ) -> Result<Option<ExtremumEvent>, AstroError> {
        self.search_extremum(body, kind, start, limit_days, |t| self.true_ecliptic_latitude(body, t))
    }
}

#[cfg(test)]
mod extrema_test {
    use super::*;
    use crate::unit_test_global::SKY_TEST;
    use crate::earth_orientation::e_tilt;

    #[test]
    fn test_june_solstice_is_declination_maximum() {
        let sky = &*SKY_TEST;
        let start = Instant::from_calendar(2024, 5, 1, 0, 0, 0.0).unwrap();
        let event = sky
            .search_declination_extremum(Body::Sun, ExtremumKind::Maximum, &start, 90.0)
            .unwrap()
            .unwrap();
        let solstice = Instant::from_calendar(2024, 6, 20, 20, 51, 0.0).unwrap();
        // Declination is flat near the solstice; the peak is only known to a few hours.
        assert!((event.time.ut - solstice.ut).abs() < 0.5, "{}", event.time.ut - solstice.ut);
        assert!((event.value - e_tilt(&event.time).tobl).abs() < 0.02, "{}", event.value);
    }

    #[test]
    fn test_moon_declination_minimum_follows_maximum() {
        let sky = &*SKY_TEST;
        let start = Instant::from_calendar(2024, 2, 1, 0, 0, 0.0).unwrap();
        let max = sky
            .search_declination_extremum(Body::Moon, ExtremumKind::Maximum, &start, 30.0)
            .unwrap()
            .unwrap();
        let min = sky
            .search_declination_extremum(Body::Moon, ExtremumKind::Minimum, &max.time, 30.0)
            .unwrap()
            .unwrap();
        let gap = min.time.ut - max.time.ut;
        assert!(gap > 12.0 && gap < 15.5, "{gap}");
        assert!(max.value > 0.0 && min.value < 0.0);
    }

    #[test]
    fn test_moon_latitude_bounded_by_inclination() {
        let sky = &*SKY_TEST;
        let start = Instant::from_calendar(2024, 3, 1, 0, 0, 0.0).unwrap();
        let event = sky
            .search_ecliptic_latitude_extremum(Body::Moon, ExtremumKind::Maximum, &start, 30.0)
            .unwrap()
            .unwrap();
        assert!(event.value > 4.9 && event.value < 5.4, "{}", event.value);
    }

    #[test]
    fn test_invalid_requests() {
        let sky = &*SKY_TEST;
        let t = Instant::from_ut(0.0);
        assert!(matches!(
            sky.search_declination_extremum(Body::EARTH, ExtremumKind::Maximum, &t, 10.0),
            Err(AstroError::UnsupportedBody(_))
        ));
        assert!(matches!(
            sky.search_declination_extremum(Body::Moon, ExtremumKind::Maximum, &t, 0.0),
            Err(AstroError::InvalidInput(_))
        ));
        for huge in [1e30, f64::INFINITY, f64::NAN, MAX_EXTREMUM_WINDOW_DAYS + 1.0] {
            assert!(
                matches!(
                    sky.search_ecliptic_latitude_extremum(Body::Moon, ExtremumKind::Minimum, &t, huge),
                    Err(AstroError::InvalidInput(_))
                ),
                "{huge}"
            );
        }
        assert_eq!(
            sky.search_declination_extremum(Body::Sun, ExtremumKind::Maximum, &t, 1.0)
                .unwrap(),
            None
        );
    }
}
