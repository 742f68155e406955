//! # Rise, set and altitude crossings
//!
//! The searched function is the topocentric altitude of a body (of its upper limb for
//! rise/set) minus a target altitude, multiplied by `+1` for rising and `−1` for setting,
//! so both events are upward zero crossings.
//!
//! Time is scanned in windows of [`RISE_SET_WINDOW_DAYS`]. Within a window,
//! [`find_ascent`] uses a bound on the altitude rate to decide where a crossing can hide;
//! the bound is the diurnal rotation rate corrected for the fastest apparent motion of the
//! body class:
//!
//! ```text
//! max |dh/dt| = |(360/k − ṙα)·cos φ| + |ṙδ·sin φ|        k = solar days per sidereal day
//! ```
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    body::{Body, Planet},
    constants::{
        Degree, Meter, AU, EARTH_MEAN_RADIUS_KM, MOON_EQUATORIAL_RADIUS_KM, RADEG,
        REFRACTION_NEAR_HORIZON, SOLAR_DAYS_PER_SIDEREAL_DAY, SUN_RADIUS_KM,
    },
    coords::{EquatorEpoch, Refraction},
    light_time::Aberration,
    observer::Observer,
    search::{
        ascent::{find_ascent, refine_ascent},
        Direction,
    },
    sky::Sky,
    time::Instant,
};

/// Width of one scanning window, days. Shorter than half a day so that a window never
/// holds both a rise and the next rise.
pub const RISE_SET_WINDOW_DAYS: f64 = 0.42;

/// Final time tolerance of rise/set refinement, seconds.
const RISE_SET_TOLERANCE_SECONDS: f64 = 0.1;

/// Upper bounds on the apparent right ascension and declination rates of a body class,
/// degrees per day.
fn apparent_motion_bound(body: Body) -> Result<(f64, f64), AstroError> {
    match body {
        Body::Moon => Ok((4.5, 8.2)),
        Body::Sun => Ok((0.8, 0.5)),
        Body::Planet(Planet::Mercury) => Ok((-1.6, 1.0)),
        Body::Planet(Planet::Venus) => Ok((-0.8, 0.6)),
        Body::Planet(Planet::Mars) => Ok((-0.5, 0.4)),
        Body::Planet(Planet::Jupiter | Planet::Saturn | Planet::Uranus | Planet::Neptune)
        | Body::Pluto => Ok((-0.2, 0.2)),
        Body::Star(_) => Ok((-0.008, 0.008)),
        Body::Planet(Planet::Earth) | Body::Barycenter(_) => Err(AstroError::UnsupportedBody(body)),
    }
}

/// Bound on `|dh/dt|` in degrees per day for `body` seen from `observer`.
fn max_altitude_rate(body: Body, observer: &Observer) -> Result<f64, AstroError> {
    let (deriv_ra, deriv_dec) = apparent_motion_bound(body)?;
    let (sinlat, coslat) = (observer.latitude() * RADEG).sin_cos();
    Ok(((360.0 / SOLAR_DAYS_PER_SIDEREAL_DAY - deriv_ra) * coslat).abs() + (deriv_dec * sinlat).abs())
}

/// Altitude of the sea-level horizon seen from `height` meters up, degrees.
///
/// ```text
/// dip = −acos(R / (R + h))
/// ```
///
/// Sites at or below sea level keep the geometric horizon.
fn horizon_dip(height: Meter) -> Degree {
    if height <= 0.0 {
        return 0.0;
    }
    let radius = EARTH_MEAN_RADIUS_KM * 1000.0;
    -(radius / (radius + height)).acos() / RADEG
}

/// Physical radius used to move from the centre to the upper limb, AU.
fn limb_radius(body: Body) -> f64 {
    match body {
        Body::Sun => SUN_RADIUS_KM / AU,
        Body::Moon => MOON_EQUATORIAL_RADIUS_KM / AU,
        _ => 0.0,
    }
}

impl Sky {
    /// Signed altitude offset used by the rise/set searches.
    fn altitude_offset(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        body_radius_au: f64,
        target_altitude: Degree,
        time: &Instant,
    ) -> Result<f64, AstroError> {
        let ofdate = self.equator(body, time, observer, EquatorEpoch::OfDate, Aberration::Corrected)?;
        let hor = self.horizon(time, observer, ofdate.ra, ofdate.dec, Refraction::None);
        let altitude = hor.altitude + (body_radius_au / ofdate.dist).asin() / RADEG;
        Ok(direction.sign() * (altitude - target_altitude))
    }

    fn search_altitude_crossing(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        start: &Instant,
        limit_days: f64,
        body_radius_au: f64,
        target_altitude: Degree,
    ) -> Result<Option<Instant>, AstroError> {
        if !limit_days.is_finite() {
            return Err(AstroError::InvalidInput(format!("limit_days must be finite, got {limit_days}")));
        }
        let max_deriv = max_altitude_rate(body, observer)?;
        let mut f = |t: &Instant| {
            self.altitude_offset(body, observer, direction, body_radius_au, target_altitude, t)
        };

        let backward = limit_days < 0.0;
        let mut t1 = *start;
        let mut t2 = *start;
        let mut f1 = f(&t1)?;
        let mut f2 = f1;

        loop {
            if backward {
                t1 = t2.add_days(-RISE_SET_WINDOW_DAYS);
                f1 = f(&t1)?;
            } else {
                t2 = t1.add_days(RISE_SET_WINDOW_DAYS);
                f2 = f(&t2)?;
            }

            if let Some(ascent) = find_ascent(&mut f, max_deriv, t1, t2, f1, f2)? {
                let time = refine_ascent(&mut f, &ascent, RISE_SET_TOLERANCE_SECONDS)?;
                let outside = if backward {
                    time.ut < start.ut + limit_days
                } else {
                    time.ut > start.ut + limit_days
                };
                debug!(%body, ?direction, ut = time.ut, outside, "altitude crossing");
                return Ok(if outside { None } else { Some(time) });
            }

            if backward {
                if t1.ut < start.ut + limit_days {
                    return Ok(None);
                }
                t2 = t1;
                f2 = f1;
            } else {
                if t2.ut > start.ut + limit_days {
                    return Ok(None);
                }
                t1 = t2;
                f1 = f2;
            }
        }
    }

    /// Next (or previous) rise or set of `body`.
    ///
    /// The Sun and Moon rise when their upper limb reaches the standard refracted horizon
    /// (34′ below the geometric one); other bodies use their centre. An observer above sea
    /// level sees that horizon lowered further by the dip `−acos(R / (R + h))`.
    ///
    /// Arguments
    /// -----------------
    /// * `direction`: rise or set.
    /// * `start`: where the search begins.
    /// * `limit_days`: window length; negative searches backward in time.
    ///
    /// Return
    /// ----------
    /// * `Ok(None)` when the event does not happen within the window, e.g. in polar
    ///   day or night.
    /// * [`AstroError::UnsupportedBody`] for the Earth and barycenters.
    pub fn search_rise_set(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        start: &Instant,
        limit_days: f64,
    ) -> Result<Option<Instant>, AstroError> {
        self.search_altitude_crossing(
            body,
            observer,
            direction,
            start,
            limit_days,
            limb_radius(body),
            horizon_dip(observer.height()) - REFRACTION_NEAR_HORIZON,
        )
    }

    /// Next (or previous) time the centre of `body` crosses a given geometric altitude,
    /// for instance −6°, −12° or −18° for the twilights.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::InvalidInput`] when `altitude` is outside `[−90, 90]`.
    pub fn search_altitude(
        &self,
        body: Body,
        observer: &Observer,
        direction: Direction,
        start: &Instant,
        limit_days: f64,
        altitude: Degree,
    ) -> Result<Option<Instant>, AstroError> {
        if !(-90.0..=90.0).contains(&altitude) {
            return Err(AstroError::InvalidInput(format!(
                "altitude {altitude} outside [-90, 90]"
            )));
        }
        self.search_altitude_crossing(body, observer, direction, start, limit_days, 0.0, altitude)
    }
}

#[cfg(test)]
mod rise_set_test {
    use super::*;
    use approx::assert_relative_eq;

    fn paris() -> Observer {
        Observer::new(48.85, 2.35, 0.0).unwrap()
    }

    #[test]
    fn test_sunrise_in_paris() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2024, 6, 1, 0, 0, 0.0).unwrap();
        let rise = sky
            .search_rise_set(Body::Sun, &paris(), Direction::Rise, &start, 1.0)
            .unwrap()
            .unwrap();
        let set = sky
            .search_rise_set(Body::Sun, &paris(), Direction::Set, &start, 1.0)
            .unwrap()
            .unwrap();
        // 03:51 and 19:46 UTC.
        assert_relative_eq!((rise.ut - start.ut) * 24.0, 3.85, epsilon = 0.1);
        assert_relative_eq!((set.ut - start.ut) * 24.0, 19.77, epsilon = 0.1);
        assert!(rise.ut < set.ut);
    }

    #[test]
    fn test_horizon_dip() {
        assert_eq!(horizon_dip(0.0), 0.0);
        assert_eq!(horizon_dip(-400.0), 0.0);
        // About 1.76′·√h for h in meters.
        assert_relative_eq!(horizon_dip(100.0), -0.3210, epsilon = 1e-3);
        assert_relative_eq!(horizon_dip(4000.0), -2.0298, epsilon = 1e-3);
    }

    #[test]
    fn test_mountain_sunrise_comes_earlier() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2024, 6, 1, 0, 0, 0.0).unwrap();
        let event = |height: f64, direction: Direction| {
            let site = Observer::new(45.0, 7.0, height).unwrap();
            sky.search_rise_set(Body::Sun, &site, direction, &start, 1.0)
                .unwrap()
                .unwrap()
        };
        // The Sun climbs about 9° per hour at this latitude, so a 2° dip is worth ~13 min.
        let earlier = (event(0.0, Direction::Rise).ut - event(4000.0, Direction::Rise).ut) * 1440.0;
        assert!(earlier > 10.0 && earlier < 17.0, "{earlier}");
        let later = (event(4000.0, Direction::Set).ut - event(0.0, Direction::Set).ut) * 1440.0;
        assert!(later > 10.0 && later < 17.0, "{later}");
    }

    #[test]
    fn test_backward_search() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2024, 6, 1, 12, 0, 0.0).unwrap();
        let rise = sky
            .search_rise_set(Body::Sun, &paris(), Direction::Rise, &start, -1.0)
            .unwrap()
            .unwrap();
        assert!(rise.ut < start.ut && rise.ut > start.ut - 0.5);
    }

    #[test]
    fn test_twilight_precedes_sunrise() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2024, 3, 1, 0, 0, 0.0).unwrap();
        let dawn = sky
            .search_altitude(Body::Sun, &paris(), Direction::Rise, &start, 1.0, -6.0)
            .unwrap()
            .unwrap();
        let rise = sky
            .search_rise_set(Body::Sun, &paris(), Direction::Rise, &start, 1.0)
            .unwrap()
            .unwrap();
        let minutes = (rise.ut - dawn.ut) * 1440.0;
        assert!(minutes > 25.0 && minutes < 45.0, "{minutes}");
    }

    #[test]
    fn test_polar_night_has_no_sunrise() {
        let sky = Sky::new();
        let site = Observer::new(80.0, 15.0, 0.0).unwrap();
        let start = Instant::from_calendar(2024, 12, 21, 0, 0, 0.0).unwrap();
        let rise = sky
            .search_rise_set(Body::Sun, &site, Direction::Rise, &start, 2.0)
            .unwrap();
        assert_eq!(rise, None);
    }

    #[test]
    fn test_invalid_requests() {
        let sky = Sky::new();
        let start = Instant::from_ut(0.0);
        assert!(matches!(
            sky.search_rise_set(Body::EARTH, &paris(), Direction::Rise, &start, 1.0),
            Err(AstroError::UnsupportedBody(_))
        ));
        assert!(matches!(
            sky.search_altitude(Body::Sun, &paris(), Direction::Rise, &start, 1.0, 95.0),
            Err(AstroError::InvalidInput(_))
        ));
    }
}
