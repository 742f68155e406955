//! # Relative longitude, conjunctions and elongation
//!
//! The relative longitude of a planet is the difference between the heliocentric ecliptic
//! longitudes of the Earth and the planet, signed so that it grows with time:
//!
//! * `0°` is an inferior conjunction for Mercury and Venus, an opposition for the others;
//! * `180°` is a superior conjunction, or a conjunction with the Sun for outer planets.
//!
//! [`Sky::search_relative_longitude`] steps by the fraction of a synodic period that the
//! angular error represents. Near convergence, the ratio between successive errors
//! rescales that period, which matters for the eccentric orbits of Mercury and Mars.
use tracing::{debug, trace};

use crate::{
    astro_errors::AstroError,
    body::{Body, EARTH_ORBITAL_PERIOD},
    constants::{longitude_offset, normalize_degrees, Days, Degree, MEAN_SYNODIC_MONTH, SECONDS_PER_DAY},
    coords::ecliptic,
    light_time::Aberration,
    sky::Sky,
    time::Instant,
};

const RELATIVE_LONGITUDE_MAX_ITER: usize = 100;

/// Whether a body is best seen after sunset or before sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    Morning,
    Evening,
}

/// Angular relation between a body and the Sun as seen from the Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElongationEvent {
    pub time: Instant,
    pub visibility: Visibility,
    /// Angle between the body and the Sun, degrees.
    pub elongation: Degree,
    /// Difference of true ecliptic longitudes, degrees in `[0, 180]`.
    pub ecliptic_separation: Degree,
}

/// Mean time between two identical Sun–Earth–body configurations, days.
///
/// Return
/// ----------
/// * [`AstroError::UnsupportedBody`] for the Earth and every body without a heliocentric
///   orbital period.
pub fn synodic_period(body: Body) -> Result<Days, AstroError> {
    if body.is_earth() {
        return Err(AstroError::UnsupportedBody(body));
    }
    if body == Body::Moon {
        return Ok(MEAN_SYNODIC_MONTH);
    }
    let period = heliocentric_period(body)?;
    Ok((EARTH_ORBITAL_PERIOD / (EARTH_ORBITAL_PERIOD / period - 1.0)).abs())
}

fn heliocentric_period(body: Body) -> Result<Days, AstroError> {
    match body {
        Body::Planet(_) | Body::Pluto => body.orbital_period().ok_or(AstroError::UnsupportedBody(body)),
        _ => Err(AstroError::UnsupportedBody(body)),
    }
}

impl Sky {
    /// Next time at or after `start` when the relative longitude of `body` equals
    /// `target_rel_lon` degrees.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::UnsupportedBody`] for the Earth, the Sun, the Moon and other
    ///   non-planets.
    /// * [`AstroError::NonConvergence`] if a hundred steps do not reach the target.
    pub fn search_relative_longitude(
        &self,
        body: Body,
        target_rel_lon: Degree,
        start: &Instant,
    ) -> Result<Instant, AstroError> {
        if body.is_earth() {
            return Err(AstroError::UnsupportedBody(body));
        }
        let period = heliocentric_period(body)?;
        let mut syn = synodic_period(body)?;
        let sign = if period > EARTH_ORBITAL_PERIOD { 1.0 } else { -1.0 };

        let offset = |t: &Instant| -> Result<Degree, AstroError> {
            let plon = self.ecliptic_longitude(body, t)?;
            let elon = self.ecliptic_longitude(Body::EARTH, t)?;
            Ok(longitude_offset(sign * (elon - plon) - target_rel_lon))
        };

        // A negative error means the target lies ahead; force the first step forward.
        let mut error_angle = offset(start)?;
        if error_angle > 0.0 {
            error_angle -= 360.0;
        }

        let mut time = *start;
        for iter in 0..RELATIVE_LONGITUDE_MAX_ITER {
            let day_adjust = (-error_angle / 360.0) * syn;
            time = time.add_days(day_adjust);
            trace!(iter, day_adjust, error_angle, "relative longitude pass");
            if day_adjust.abs() * SECONDS_PER_DAY < 1.0 {
                debug!(%body, target_rel_lon, ut = time.ut, "relative longitude reached");
                return Ok(time);
            }

            let prev_angle = error_angle;
            error_angle = offset(&time)?;
            if prev_angle.abs() < 30.0 && prev_angle != error_angle {
                let ratio = prev_angle / (prev_angle - error_angle);
                if ratio > 0.5 && ratio < 2.0 {
                    syn *= ratio;
                }
            }
        }

        Err(AstroError::NonConvergence(format!(
            "relative longitude search for {body} stalled near ut {} (error {error_angle}°)",
            time.ut
        )))
    }

    /// Difference of the geocentric true ecliptic longitudes `body1 − body2`, degrees in
    /// `[0, 360)`.
    pub fn pair_longitude(&self, body1: Body, body2: Body, time: &Instant) -> Result<Degree, AstroError> {
        if body1.is_earth() || body2.is_earth() {
            return Err(AstroError::UnsupportedBody(Body::EARTH));
        }
        let eclip1 = ecliptic(&self.geo_vector(body1, time, Aberration::None)?);
        let eclip2 = ecliptic(&self.geo_vector(body2, time, Aberration::None)?);
        Ok(normalize_degrees(eclip1.elon - eclip2.elon))
    }

    /// Apparent angle between `body` and the Sun seen from the Earth, degrees.
    pub fn angle_from_sun(&self, body: Body, time: &Instant) -> Result<Degree, AstroError> {
        if body.is_earth() {
            return Err(AstroError::UnsupportedBody(body));
        }
        let sv = self.geo_vector(Body::Sun, time, Aberration::Corrected)?;
        let bv = self.geo_vector(body, time, Aberration::Corrected)?;
        sv.angle_with(&bv)
    }

    /// Elongation of `body` and whether it is a morning or evening object.
    pub fn elongation(&self, body: Body, time: &Instant) -> Result<ElongationEvent, AstroError> {
        let rel_lon = self.pair_longitude(body, Body::Sun, time)?;
        let (visibility, ecliptic_separation) = if rel_lon > 180.0 {
            (Visibility::Morning, 360.0 - rel_lon)
        } else {
            (Visibility::Evening, rel_lon)
        };
        Ok(ElongationEvent {
            time: *time,
            visibility,
            elongation: self.angle_from_sun(body, time)?,
            ecliptic_separation,
        })
    }
}

#[cfg(test)]
mod relative_longitude_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_synodic_periods() {
        assert_relative_eq!(synodic_period(Body::MARS).unwrap(), 779.9, epsilon = 1.0);
        assert_relative_eq!(synodic_period(Body::VENUS).unwrap(), 583.9, epsilon = 1.0);
        assert_relative_eq!(synodic_period(Body::JUPITER).unwrap(), 398.9, epsilon = 1.0);
        assert!(synodic_period(Body::EARTH).is_err());
    }

    #[test]
    fn test_mars_opposition_2020() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2020, 1, 1, 0, 0, 0.0).unwrap();
        let t = sky.search_relative_longitude(Body::MARS, 0.0, &start).unwrap();
        // Opposition on 2020-10-13 23:20 UT.
        let expected = Instant::from_calendar(2020, 10, 13, 23, 20, 0.0).unwrap();
        assert!((t.ut - expected.ut).abs() < 0.25, "{}", t.ut - expected.ut);
    }

    #[test]
    fn test_consecutive_oppositions() {
        let sky = Sky::new();
        let start = Instant::from_calendar(2010, 1, 1, 0, 0, 0.0).unwrap();
        let first = sky.search_relative_longitude(Body::SATURN, 0.0, &start).unwrap();
        let second = sky
            .search_relative_longitude(Body::SATURN, 0.0, &first.add_days(1.0))
            .unwrap();
        let syn = synodic_period(Body::SATURN).unwrap();
        assert!(((second.ut - first.ut) / syn - 1.0).abs() < 0.03);
    }

    #[test]
    fn test_earth_and_sun_are_rejected() {
        let sky = Sky::new();
        let t = Instant::from_ut(0.0);
        assert!(matches!(
            sky.search_relative_longitude(Body::EARTH, 0.0, &t),
            Err(AstroError::UnsupportedBody(_))
        ));
        assert!(matches!(
            sky.search_relative_longitude(Body::Sun, 0.0, &t),
            Err(AstroError::UnsupportedBody(_))
        ));
        assert!(sky.angle_from_sun(Body::EARTH, &t).is_err());
    }

    #[test]
    fn test_venus_elongation_is_bounded() {
        let sky = Sky::new();
        for k in 0..20 {
            let t = Instant::from_ut(30.0 * k as f64);
            let e = sky.elongation(Body::VENUS, &t).unwrap();
            assert!(e.elongation < 47.5, "{}", e.elongation);
            assert!(e.ecliptic_separation <= 180.0);
        }
    }
}
