//! # Sky: execution context for body resolution
//!
//! [`Sky`] owns every piece of mutable state the computations need:
//!
//! 1. **Star table** ([`StarTable`]): the eight user-definable stars, changed only through
//!    [`Sky::define_star`].
//! 2. **Sidereal memo** ([`SiderealCache`]): the last Greenwich apparent sidereal time,
//!    keyed by Terrestrial Time.
//! 3. **Pluto grid** ([`PlutoCache`]): integrated barycentric states of Pluto.
//!
//! Both caches sit behind mutexes, so a shared `&Sky` can be used from several threads.
//! All position queries go through this type, which maps a [`Body`] onto the model that
//! computes it.
//!
//! ## Typical usage
//!
//! ```rust
//! use skyseek::body::{Body, StarSlot};
//! use skyseek::coords::EquatorEpoch;
//! use skyseek::light_time::Aberration;
//! use skyseek::observer::Observer;
//! use skyseek::sky::Sky;
//! use skyseek::time::Instant;
//!
//! let mut sky = Sky::new();
//! sky.define_star(StarSlot::Star1, 6.75, -16.7, 8.6).unwrap();
//!
//! let site = Observer::new(48.85, 2.35, 35.0).unwrap();
//! let t = Instant::from_calendar(2024, 1, 1, 0, 0, 0.0).unwrap();
//! let eq = sky
//!     .equator(Body::MARS, &t, &site, EquatorEpoch::OfDate, Aberration::Corrected)
//!     .unwrap();
//! assert!((0.0..24.0).contains(&eq.ra));
//! ```
//!
//! The event searches are methods of [`Sky`] as well; they are defined next to their
//! algorithms in the [`search`](crate::search) modules.
use nalgebra::Vector3;
use tracing::trace;

use crate::{
    astro_errors::AstroError,
    body::{BarycenterKind, Body, Planet, StarSlot},
    constants::{Degree, Hour, EARTH_MOON_MASS_RATIO},
    coords::{self, ecliptic_j2000, equator_from_vector, EquatorEpoch, Equatorial, Refraction, Topocentric},
    earth_orientation::gyration_from_j2000,
    frames::Eqj,
    jupiter_moons::{jupiter_moons, JupiterMoonsInfo},
    light_time::{back_date_position, Aberration},
    moon::{geo_moon, geo_moon_state},
    observer::Observer,
    planets,
    pluto::PlutoCache,
    sidereal::SiderealCache,
    stars::StarTable,
    time::Instant,
    vector::{AstroVector, StateVector},
};

#[derive(Debug, Default)]
pub struct Sky {
    stars: StarTable,
    sidereal: SiderealCache,
    pluto: PlutoCache,
}

impl Sky {
    /// A context with no star defined and empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// A context using an already filled star table.
    pub fn with_stars(stars: StarTable) -> Self {
        Sky {
            stars,
            ..Self::default()
        }
    }

    /// Define (or redefine) a user star.
    ///
    /// Arguments
    /// -----------------
    /// * `slot`: which of the eight star bodies to set.
    /// * `ra`: J2000 right ascension, sidereal hours in `[0, 24)`.
    /// * `dec`: J2000 declination, degrees in `[-90, 90]`.
    /// * `distance_ly`: distance in light years, at least one.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::InvalidInput`] on an out-of-range value; the table is unchanged.
    pub fn define_star(
        &mut self,
        slot: StarSlot,
        ra: Hour,
        dec: Degree,
        distance_ly: f64,
    ) -> Result<(), AstroError> {
        self.stars.define(slot, ra, dec, distance_ly)
    }

    pub fn stars(&self) -> &StarTable {
        &self.stars
    }

    pub fn sidereal(&self) -> &SiderealCache {
        &self.sidereal
    }

    pub fn pluto(&self) -> &PlutoCache {
        &self.pluto
    }

    /// Heliocentric state of `body` in J2000 equatorial coordinates (AU, AU/day).
    ///
    /// User stars have a constant position and zero velocity. An undefined star slot is
    /// [`AstroError::UnsupportedBody`].
    pub fn helio_state(&self, body: Body, time: &Instant) -> Result<StateVector<Eqj>, AstroError> {
        match body {
            Body::Sun => Ok(StateVector::zero(*time)),
            Body::Planet(planet) => Ok(planets::helio_state(planet, time)),
            Body::Moon => Ok(planets::helio_state(Planet::Earth, time) + geo_moon_state(time)),
            Body::Pluto => self.pluto.helio_state(time),
            Body::Barycenter(BarycenterKind::EarthMoon) => {
                let earth = planets::helio_state(Planet::Earth, time);
                Ok(earth + geo_moon_state(time).scale(1.0 / (1.0 + EARTH_MOON_MASS_RATIO)))
            }
            Body::Barycenter(BarycenterKind::SolarSystem) => Ok(planets::ssb_state(time)),
            Body::Star(slot) => {
                let pos = self.stars.helio_vector(slot, *time)?;
                Ok(StateVector::new(pos.xyz, Vector3::zeros(), *time))
            }
        }
    }

    pub fn helio_vector(&self, body: Body, time: &Instant) -> Result<AstroVector<Eqj>, AstroError> {
        Ok(self.helio_state(body, time)?.position())
    }

    /// State of `body` relative to the Solar System barycenter, J2000 equatorial.
    pub fn bary_state(&self, body: Body, time: &Instant) -> Result<StateVector<Eqj>, AstroError> {
        match body {
            Body::Barycenter(BarycenterKind::SolarSystem) => Ok(StateVector::zero(*time)),
            Body::Pluto => self.pluto.bary_state(time),
            _ => Ok(self.helio_state(body, time)? - planets::ssb_state(time)),
        }
    }

    /// Geocentric position of `body`, corrected for light travel time.
    ///
    /// The Earth itself is the zero vector. The Moon is close enough that its geometric
    /// position is returned unchanged.
    pub fn geo_vector(
        &self,
        body: Body,
        time: &Instant,
        aberration: Aberration,
    ) -> Result<AstroVector<Eqj>, AstroError> {
        match body {
            Body::Planet(Planet::Earth) => Ok(AstroVector::zero(*time)),
            Body::Moon => Ok(geo_moon(time)),
            _ => back_date_position(self, time, Body::EARTH, body, aberration),
        }
    }

    /// Topocentric equatorial coordinates of `body` seen by `observer`.
    ///
    /// Arguments
    /// -----------------
    /// * `epoch`: J2000 mean equator, or true equator of date.
    /// * `aberration`: whether to apply the aberration of light.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::UnsupportedBody`] for the Earth.
    pub fn equator(
        &self,
        body: Body,
        time: &Instant,
        observer: &Observer,
        epoch: EquatorEpoch,
        aberration: Aberration,
    ) -> Result<Equatorial, AstroError> {
        if body.is_earth() {
            return Err(AstroError::UnsupportedBody(body));
        }
        let site = observer.geo_position(time, &self.sidereal);
        let target = self.geo_vector(body, time, aberration)?;
        let topo = target - site;
        trace!(%body, dist = topo.length(), "topocentric vector");
        Ok(match epoch {
            EquatorEpoch::J2000 => equator_from_vector(&topo),
            EquatorEpoch::OfDate => equator_from_vector(&gyration_from_j2000(&topo)),
        })
    }

    /// Horizontal coordinates of an equator-of-date direction, using this context's
    /// sidereal memo.
    pub fn horizon(
        &self,
        time: &Instant,
        observer: &Observer,
        ra: Hour,
        dec: Degree,
        refraction: Refraction,
    ) -> Topocentric {
        coords::horizon(time, observer, ra, dec, refraction, &self.sidereal)
    }

    /// Heliocentric ecliptic longitude of `body` on the J2000 ecliptic, degrees.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::UnsupportedBody`] for the Sun.
    pub fn ecliptic_longitude(&self, body: Body, time: &Instant) -> Result<Degree, AstroError> {
        if body == Body::Sun {
            return Err(AstroError::UnsupportedBody(body));
        }
        Ok(ecliptic_j2000(&self.helio_vector(body, time)?).elon)
    }

    /// Jovicentric states of the Galilean moons.
    pub fn jupiter_moons(&self, time: &Instant) -> Result<JupiterMoonsInfo, AstroError> {
        jupiter_moons(time)
    }
}

#[cfg(test)]
mod sky_test {
    use super::*;
    use crate::constants::AU_PER_LIGHT_YEAR;
    use approx::assert_relative_eq;

    #[test]
    fn test_sky_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Sky>();
    }

    #[test]
    fn test_earth_geo_vector_is_zero() {
        let sky = Sky::new();
        for &ut in &[-3000.0, 0.0, 8123.4] {
            let t = Instant::from_ut(ut);
            let v = sky.geo_vector(Body::EARTH, &t, Aberration::Corrected).unwrap();
            assert_eq!(v.length(), 0.0);
        }
    }

    #[test]
    fn test_star_helio_vector_is_constant() {
        let mut sky = Sky::new();
        sky.define_star(StarSlot::Star1, 12.0, 45.0, 100.0).unwrap();
        let a = sky.helio_vector(Body::Star(StarSlot::Star1), &Instant::from_ut(0.0)).unwrap();
        let b = sky.helio_vector(Body::Star(StarSlot::Star1), &Instant::from_ut(9000.0)).unwrap();
        assert_eq!(a.xyz, b.xyz);
        assert_relative_eq!(a.length(), 100.0 * AU_PER_LIGHT_YEAR, max_relative = 1e-12);
    }

    #[test]
    fn test_undefined_star_is_unsupported() {
        let sky = Sky::new();
        let err = sky
            .helio_vector(Body::Star(StarSlot::Star3), &Instant::from_ut(0.0))
            .unwrap_err();
        assert_eq!(err, AstroError::UnsupportedBody(Body::Star(StarSlot::Star3)));
    }

    #[test]
    fn test_earth_moon_barycenter_lies_between() {
        let sky = Sky::new();
        let t = Instant::from_ut(321.0);
        let earth = sky.helio_vector(Body::EARTH, &t).unwrap();
        let moon = sky.helio_vector(Body::Moon, &t).unwrap();
        let emb = sky.helio_vector(Body::EMB, &t).unwrap();
        let to_moon = (moon - earth).length();
        let to_emb = (emb - earth).length();
        assert_relative_eq!(to_emb / to_moon, 1.0 / (1.0 + EARTH_MOON_MASS_RATIO), epsilon = 1e-12);
    }

    #[test]
    fn test_equator_rejects_earth() {
        let sky = Sky::new();
        let site = Observer::new(10.0, 20.0, 0.0).unwrap();
        let err = sky
            .equator(Body::EARTH, &Instant::from_ut(0.0), &site, EquatorEpoch::J2000, Aberration::None)
            .unwrap_err();
        assert!(matches!(err, AstroError::UnsupportedBody(_)));
    }

    #[test]
    fn test_sun_declination_stays_within_obliquity() {
        let sky = Sky::new();
        let site = Observer::new(-33.9, 18.4, 10.0).unwrap();
        for k in 0..24 {
            let t = Instant::from_ut(k as f64 * 15.3);
            let eq = sky
                .equator(Body::Sun, &t, &site, EquatorEpoch::OfDate, Aberration::Corrected)
                .unwrap();
            assert!(eq.dec.abs() < 23.5, "{}", eq.dec);
            assert!(eq.dist > 0.98 && eq.dist < 1.02);
        }
    }

    #[test]
    fn test_bary_state_of_barycenter() {
        let sky = Sky::new();
        let t = Instant::from_ut(10.0);
        let s = sky.bary_state(Body::SSB, &t).unwrap();
        assert_eq!(s.pos.norm(), 0.0);
        let sun = sky.bary_state(Body::Sun, &t).unwrap();
        assert!(sun.pos.norm() < 0.012);
    }
}
