//! # Observer & site geometry
//!
//! An [`Observer`] is a point on or near the Earth's surface, given by geodetic latitude,
//! longitude and height above the reference ellipsoid. The geodetic coordinates are
//! converted once into normalized **parallax coordinates** (ρ·cosφ, ρ·sinφ), from which the
//! site position in the Earth-fixed frame follows.
//!
//! ```text
//! Earth-fixed  --(GAST spin)-->  true equator of date  --(inverse gyration)-->  J2000
//! ```
//!
//! The reverse direction, from a geocentric vector of date back to latitude, longitude and
//! height, is [`Observer::from_vector`]; the global solar eclipse search uses it to report
//! where the shadow axis touches the ground.
//!
//! ## Units
//!
//! - Latitude and longitude: **degrees** (north and east positive).
//! - Height: **meters** above the ellipsoid.
//! - Positions: **AU**; velocities: **AU/day**.
use std::fmt;

use nalgebra::Vector3;
use ordered_float::NotNan;

use crate::{
    astro_errors::AstroError,
    constants::{
        longitude_offset, Degree, Kilometer, Meter, AU, EARTH_AXIS_RATIO,
        EARTH_EQUATORIAL_RADIUS_KM, EARTH_ROTATION_RATE, ERAU, RADEG,
    },
    earth_orientation::{gyration_into_j2000, gyration_state_into_j2000},
    frames::{Eqd, Eqj},
    rotation::{rotmt, Axis},
    sidereal::SiderealCache,
    time::Instant,
    vector::{AstroVector, StateVector},
};

/// Maximum number of passes of the geodetic latitude iteration in [`Observer::from_vector`].
const INVERSE_GEODESY_MAX_ITER: usize = 20;

/// A geographic observing site.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Observer {
    /// Geodetic latitude in **degrees**, north positive.
    latitude: NotNan<f64>,

    /// Geodetic longitude in **degrees**, east positive.
    longitude: NotNan<f64>,

    /// Height above the ellipsoid in **meters**.
    height: NotNan<f64>,

    /// ρ·cosφ (geocentric latitude φ), in Earth equatorial radii.
    rho_cos_phi: NotNan<f64>,

    /// ρ·sinφ (geocentric latitude φ), in Earth equatorial radii.
    rho_sin_phi: NotNan<f64>,
}

impl Observer {
    /// Create an observer from geodetic coordinates.
    ///
    /// Arguments
    /// -----------------
    /// * `latitude`: geodetic latitude in degrees, within `[-90, 90]`.
    /// * `longitude`: longitude in degrees east of Greenwich, within `[-180, 180]`.
    /// * `height`: height above the ellipsoid in meters.
    ///
    /// Return
    /// ----------
    /// * The observer, or [`AstroError::InvalidInput`] when a value is not finite or out of
    ///   range.
    pub fn new(latitude: Degree, longitude: Degree, height: Meter) -> Result<Observer, AstroError> {
        if !latitude.is_finite() || !longitude.is_finite() || !height.is_finite() {
            return Err(AstroError::InvalidInput(format!(
                "observer coordinates must be finite (lat={latitude}, lon={longitude}, height={height})"
            )));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(AstroError::InvalidInput(format!(
                "observer latitude {latitude} outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(AstroError::InvalidInput(format!(
                "observer longitude {longitude} outside [-180, 180]"
            )));
        }

        let (rho_cos_phi, rho_sin_phi) = geodetic_to_parallax(latitude, height / 1000.0);

        Ok(Observer {
            latitude: NotNan::new(latitude)?,
            longitude: NotNan::new(longitude)?,
            height: NotNan::new(height)?,
            rho_cos_phi: NotNan::new(rho_cos_phi)?,
            rho_sin_phi: NotNan::new(rho_sin_phi)?,
        })
    }

    pub fn latitude(&self) -> Degree {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> Degree {
        self.longitude.into_inner()
    }

    pub fn height(&self) -> Meter {
        self.height.into_inner()
    }

    /// Site position in the Earth-fixed frame, in AU.
    pub fn body_fixed_coord(&self) -> Vector3<f64> {
        let (slon, clon) = (self.longitude() * RADEG).sin_cos();
        let rcp = self.rho_cos_phi.into_inner();
        Vector3::new(
            ERAU * rcp * clon,
            ERAU * rcp * slon,
            ERAU * self.rho_sin_phi.into_inner(),
        )
    }

    /// Geocentric state of the site on the true equator of date.
    ///
    /// The Earth-fixed position is spun by the Greenwich apparent sidereal angle; the
    /// velocity is `ω × r` with the mean rotation rate of the Earth.
    pub fn state_of_date(&self, time: &Instant, sidereal: &SiderealCache) -> StateVector<Eqd> {
        let gast = sidereal.gast(time) * 15.0 * RADEG;
        let pos = rotmt(gast, Axis::Z) * self.body_fixed_coord();
        let omega = Vector3::new(0.0, 0.0, EARTH_ROTATION_RATE);
        StateVector::new(pos, omega.cross(&pos), *time)
    }

    pub fn position_of_date(&self, time: &Instant, sidereal: &SiderealCache) -> AstroVector<Eqd> {
        self.state_of_date(time, sidereal).position()
    }

    /// Geocentric position of the site in the J2000 equatorial frame.
    pub fn geo_position(&self, time: &Instant, sidereal: &SiderealCache) -> AstroVector<Eqj> {
        gyration_into_j2000(&self.position_of_date(time, sidereal))
    }

    /// Geocentric state of the site in the J2000 equatorial frame.
    pub fn geo_state(&self, time: &Instant, sidereal: &SiderealCache) -> StateVector<Eqj> {
        gyration_state_into_j2000(&self.state_of_date(time, sidereal))
    }

    /// Recover the geodetic site whose position of date is `v`.
    ///
    /// Longitude comes from the equatorial direction minus the sidereal angle. Latitude is
    /// refined by fixed-point iteration on the ellipsoid normal, starting from the
    /// spherical estimate; points on the polar axis are handled directly.
    ///
    /// Return
    /// ----------
    /// * The observer, or [`AstroError::NonConvergence`] if the latitude iteration does not
    ///   settle.
    pub fn from_vector(v: &AstroVector<Eqd>, sidereal: &SiderealCache) -> Result<Observer, AstroError> {
        let x = v.x() * AU;
        let y = v.y() * AU;
        let z = v.z() * AU;
        let p = x.hypot(y);
        let a = EARTH_EQUATORIAL_RADIUS_KM;
        let e2 = 1.0 - EARTH_AXIS_RATIO * EARTH_AXIS_RATIO;

        if p < 1.0e-6 {
            let lat = if z >= 0.0 { 90.0 } else { -90.0 };
            let height_km = z.abs() - a * EARTH_AXIS_RATIO;
            return Observer::new(lat, 0.0, height_km * 1000.0);
        }

        let gast = sidereal.gast(&v.t);
        let lon = longitude_offset(y.atan2(x) / RADEG - gast * 15.0);

        let mut lat = z.atan2(p * (1.0 - e2));
        let mut converged = false;
        for _ in 0..INVERSE_GEODESY_MAX_ITER {
            let n = a / (1.0 - e2 * lat.sin().powi(2)).sqrt();
            let next = (z + e2 * n * lat.sin()).atan2(p);
            let delta = (next - lat).abs();
            lat = next;
            if delta < 1.0e-12 {
                converged = true;
                break;
            }
        }
        if !converged {
            return Err(AstroError::NonConvergence(
                "geodetic latitude iteration".into(),
            ));
        }

        let n = a / (1.0 - e2 * lat.sin().powi(2)).sqrt();
        let height_km: Kilometer = if lat.cos().abs() > 1.0e-3 {
            p / lat.cos() - n
        } else {
            z / lat.sin() - n * (1.0 - e2)
        };

        Observer::new((lat / RADEG).clamp(-90.0, 90.0), lon, height_km * 1000.0)
    }
}

impl fmt::Display for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Observer(lat={:.6}°, lon={:.6}°, h={:.1} m)",
            self.latitude(),
            self.longitude(),
            self.height()
        )
    }
}

/// Convert geodetic latitude and height into normalized parallax coordinates.
///
/// Arguments
/// ---------
/// * `lat` - Geodetic latitude of the observer in **radians**.
/// * `height` - Observer's altitude above the reference ellipsoid in **kilometers**.
///
/// Returns
/// -------
/// A tuple `(rho_cos_phi, rho_sin_phi)` in units of the Earth's equatorial radius.
///
/// Details
/// -------
/// ```text
/// u = atan( (sin φ * (b/a)) / cos φ )
/// ρ_sinφ = (b/a) * sin u + (h/a) * sin φ
/// ρ_cosφ = cos u + (h/a) * cos φ
/// ```
pub fn lat_alt_to_parallax(lat: f64, height: Kilometer) -> (f64, f64) {
    let u = (lat.sin() * EARTH_AXIS_RATIO).atan2(lat.cos());
    let h = height / EARTH_EQUATORIAL_RADIUS_KM;
    let rho_sin_phi = EARTH_AXIS_RATIO * u.sin() + h * lat.sin();
    let rho_cos_phi = u.cos() + h * lat.cos();
    (rho_cos_phi, rho_sin_phi)
}

/// Degree wrapper around [`lat_alt_to_parallax`].
pub fn geodetic_to_parallax(lat: Degree, height: Kilometer) -> (f64, f64) {
    lat_alt_to_parallax(lat * RADEG, height)
}

#[cfg(test)]
mod observer_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_invalid() {
        assert!(Observer::new(91.0, 0.0, 0.0).is_err());
        assert!(Observer::new(0.0, 181.0, 0.0).is_err());
        assert!(Observer::new(f64::NAN, 0.0, 0.0).is_err());
        assert!(Observer::new(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_geodetic_to_parallax_equator() {
        let (rc, rs) = geodetic_to_parallax(0.0, 0.0);
        assert_relative_eq!(rc, 1.0, epsilon = 1e-15);
        assert_relative_eq!(rs, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_geodetic_to_parallax_pole() {
        let (rc, rs) = geodetic_to_parallax(90.0, 0.0);
        assert!(rc.abs() < 1e-12);
        assert_relative_eq!(rs, EARTH_AXIS_RATIO, epsilon = 1e-12);
    }

    #[test]
    fn test_from_vector_round_trip() {
        let cache = SiderealCache::new();
        let t = Instant::from_ut(8_500.3);
        for &(lat, lon, h) in &[
            (48.85, 2.35, 35.0),
            (-33.9, 18.4, 1200.0),
            (6.56784, -1.5674, 0.0),
            (89.99, -120.0, 10.0),
        ] {
            let obs = Observer::new(lat, lon, h).unwrap();
            let v = obs.position_of_date(&t, &cache);
            let back = Observer::from_vector(&v, &cache).unwrap();
            assert_relative_eq!(back.latitude(), lat, epsilon = 1e-7);
            assert_relative_eq!(back.longitude(), lon, epsilon = 1e-7);
            assert_relative_eq!(back.height(), h, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_site_velocity_magnitude() {
        let cache = SiderealCache::new();
        let obs = Observer::new(0.0, 0.0, 0.0).unwrap();
        let s = obs.state_of_date(&Instant::from_ut(0.0), &cache);
        // ~0.465 km/s at the equator.
        let kms = s.vel.norm() * AU / 86_400.0;
        assert_relative_eq!(kms, 0.465, epsilon = 1e-3);
    }
}
