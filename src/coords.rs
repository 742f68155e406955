//! # Observable coordinates
//!
//! Conversions from Cartesian vectors to the angles an observer reports:
//!
//! * equatorial right ascension / declination ([`equator_from_vector`]),
//! * horizontal azimuth / altitude with optional atmospheric refraction ([`horizon`]),
//! * ecliptic longitude / latitude, J2000 or true of date ([`ecliptic_j2000`], [`ecliptic`]),
//! * galactic longitude / latitude ([`galactic`]).
//!
//! [`sun_position`] gives the apparent geocentric ecliptic coordinates of the Sun, the
//! quantity the season search tracks.
//!
//! Azimuth is measured from north through east. Refraction only ever changes altitude
//! (and the right ascension / declination recomputed from the bent direction).
use nalgebra::Vector3;

use crate::{
    astro_errors::AstroError,
    body::Planet,
    constants::{normalize_degrees, AstroUnit, Degree, Hour, RADEG, VLIGHT_AU},
    earth_orientation::gyration_from_j2000,
    frames::{Ecl, Ect, Eqd, Eqj, Frame},
    observer::Observer,
    planets,
    rotation::{rotation_eqd_ect, rotation_eqd_hor, rotation_eqj_ecl, rotation_eqj_gal},
    sidereal::SiderealCache,
    time::Instant,
    vector::{AstroVector, Spherical},
};

const INVERSE_REFRACTION_MAX_ITER: usize = 50;

/// Atmospheric refraction model applied to altitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Refraction {
    /// Geometric altitude.
    None,
    /// Empirical bending for a standard atmosphere, tapered to zero below the horizon.
    #[default]
    Normal,
    /// Same bending, without the taper (matches JPL Horizons output).
    JplHorizons,
}

/// Equator a right ascension / declination is referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquatorEpoch {
    /// Mean equator and equinox of J2000.
    J2000,
    /// True equator and equinox of date.
    #[default]
    OfDate,
}

/// Equatorial coordinates of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equatorial {
    /// Right ascension, sidereal hours in `[0, 24)`.
    pub ra: Hour,
    /// Declination, degrees.
    pub dec: Degree,
    /// Distance, AU.
    pub dist: AstroUnit,
    /// Cartesian vector the angles were computed from, in the frame of the requested epoch.
    pub vec: Vector3<f64>,
}

/// Horizontal coordinates, with the equatorial coordinates of the refracted direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Topocentric {
    /// Degrees east of north, `[0, 360)`.
    pub azimuth: Degree,
    /// Degrees above the horizon.
    pub altitude: Degree,
    /// Right ascension of the (possibly refracted) direction, hours.
    pub ra: Hour,
    /// Declination of the (possibly refracted) direction, degrees.
    pub dec: Degree,
}

/// Ecliptic coordinates together with the vector they come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ecliptic<F: Frame> {
    pub vec: AstroVector<F>,
    /// Latitude, degrees.
    pub elat: Degree,
    /// Longitude, degrees in `[0, 360)`.
    pub elon: Degree,
}

impl<F: Frame> Ecliptic<F> {
    fn from_vector(vec: AstroVector<F>) -> Self {
        let sph = vec.to_spherical();
        Ecliptic {
            vec,
            elat: sph.lat,
            elon: sph.lon,
        }
    }
}

/// Right ascension, declination and distance of an equatorial vector.
pub fn equator_from_vector<F: Frame>(v: &AstroVector<F>) -> Equatorial {
    let sph = v.to_spherical();
    Equatorial {
        ra: sph.lon / 15.0,
        dec: sph.lat,
        dist: sph.dist,
        vec: v.xyz,
    }
}

/// Refraction at a given geometric altitude, in degrees (to be added to the altitude).
///
/// ```text
/// R = 1.02 / tan(h + 10.3 / (h + 5.11)) / 60        h clamped to ≥ −1°
/// ```
/// For [`Refraction::Normal`] the value is tapered linearly to zero between −1° and the
/// nadir so the function stays continuous.
pub fn refraction_angle(refraction: Refraction, altitude: Degree) -> Degree {
    if !(-90.0..=90.0).contains(&altitude) {
        return 0.0;
    }
    match refraction {
        Refraction::None => 0.0,
        Refraction::Normal | Refraction::JplHorizons => {
            let hd = altitude.max(-1.0);
            let mut refr = (1.02 / ((hd + 10.3 / (hd + 5.11)) * RADEG).tan()) / 60.0;
            if refraction == Refraction::Normal && altitude < -1.0 {
                refr *= (altitude + 90.0) / 89.0;
            }
            refr
        }
    }
}

/// Correction to subtract from a refracted (apparent) altitude to recover the geometric one.
///
/// Return
/// ----------
/// * A value `≤ 0` such that `bent + result` is the geometric altitude, or
///   [`AstroError::NonConvergence`] if the iteration does not settle.
pub fn inverse_refraction(refraction: Refraction, bent_altitude: Degree) -> Result<Degree, AstroError> {
    if !(-90.0..=90.0).contains(&bent_altitude) {
        return Ok(0.0);
    }
    let mut altitude = bent_altitude - refraction_angle(refraction, bent_altitude);
    for _ in 0..INVERSE_REFRACTION_MAX_ITER {
        let diff = (altitude + refraction_angle(refraction, altitude)) - bent_altitude;
        if diff.abs() < 1.0e-14 {
            return Ok(altitude - bent_altitude);
        }
        altitude -= diff;
    }
    Err(AstroError::NonConvergence(format!(
        "inverse refraction at altitude {bent_altitude}"
    )))
}

/// Horizontal coordinates of a direction given on the true equator of date.
///
/// Arguments
/// -----------------
/// * `time`: observation time.
/// * `observer`: site.
/// * `ra`, `dec`: right ascension (hours) and declination (degrees) of date.
/// * `refraction`: model applied to the altitude.
/// * `sidereal`: sidereal time memo.
pub fn horizon(
    time: &Instant,
    observer: &Observer,
    ra: Hour,
    dec: Degree,
    refraction: Refraction,
    sidereal: &SiderealCache,
) -> Topocentric {
    let rot = rotation_eqd_hor(time, observer, sidereal);
    let p = AstroVector::from_spherical(
        &Spherical {
            lat: dec,
            lon: ra * 15.0,
            dist: 1.0,
        },
        *time,
    );
    let hor = rot.apply(&p);
    let (pn, pw, pz) = (hor.x(), hor.y(), hor.z());

    let proj = pn.hypot(pw);
    let azimuth = if proj > 0.0 {
        normalize_degrees(-pw.atan2(pn) / RADEG)
    } else {
        0.0
    };
    let mut zenith = proj.atan2(pz) / RADEG;
    let mut out_ra = ra;
    let mut out_dec = dec;

    if refraction != Refraction::None {
        let zd0 = zenith;
        let refr = refraction_angle(refraction, 90.0 - zenith);
        zenith -= refr;

        if refr > 0.0 && zenith > 3.0e-4 {
            // Swing the direction toward the zenith inside the vertical plane.
            let uz = rot.rot.row(2).transpose();
            let (sinzd, coszd) = (zenith * RADEG).sin_cos();
            let (sinzd0, coszd0) = (zd0 * RADEG).sin_cos();
            let pr = (p.xyz - uz * coszd0) / sinzd0 * sinzd + uz * coszd;
            let sph = AstroVector::<Eqd>::from_xyz(pr, *time).to_spherical();
            out_ra = sph.lon / 15.0;
            out_dec = sph.lat;
        }
    }

    Topocentric {
        azimuth,
        altitude: 90.0 - zenith,
        ra: out_ra,
        dec: out_dec,
    }
}

/// Coordinates on the mean ecliptic and equinox of J2000.
pub fn ecliptic_j2000(v: &AstroVector<Eqj>) -> Ecliptic<Ecl> {
    Ecliptic::from_vector(rotation_eqj_ecl().apply(v))
}

/// Coordinates on the true ecliptic and equinox of date.
pub fn ecliptic(v: &AstroVector<Eqj>) -> Ecliptic<Ect> {
    let of_date = gyration_from_j2000(v);
    Ecliptic::from_vector(rotation_eqd_ect(&v.t).apply(&of_date))
}

/// Galactic latitude and longitude (degrees) and distance.
pub fn galactic(v: &AstroVector<Eqj>) -> Spherical {
    rotation_eqj_gal().apply(v).to_spherical()
}

/// Apparent geocentric position of the Sun on the true ecliptic of date.
///
/// The Earth is back-dated by the light time of one astronomical unit, which folds in
/// both the light delay and the annual aberration.
pub fn sun_position(time: &Instant) -> Ecliptic<Ect> {
    let adjusted = Instant::from_terrestrial_time(time.tt - 1.0 / VLIGHT_AU);
    let earth = planets::helio_vector(Planet::Earth, &adjusted);
    ecliptic(&(-earth).at(*time))
}

#[cfg(test)]
mod coords_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_refraction_at_horizon() {
        let r = refraction_angle(Refraction::Normal, 0.0);
        assert_relative_eq!(r, 0.48, epsilon = 0.02);
        assert_eq!(refraction_angle(Refraction::None, 0.0), 0.0);
        assert!(refraction_angle(Refraction::Normal, 89.0) < 0.01);
        // The taper only applies to the normal model.
        assert!(refraction_angle(Refraction::Normal, -45.0) < refraction_angle(Refraction::JplHorizons, -45.0));
    }

    #[test]
    fn test_inverse_refraction_round_trip() {
        for &alt in &[-0.5, 0.0, 2.0, 10.0, 45.0] {
            let bent = alt + refraction_angle(Refraction::Normal, alt);
            let back = bent + inverse_refraction(Refraction::Normal, bent).unwrap();
            assert_relative_eq!(back, alt, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_zenith_and_pole() {
        let sky = SiderealCache::new();
        let obs = Observer::new(40.0, -75.0, 0.0).unwrap();
        let t = Instant::from_ut(1_000.0);
        let lst = sky.gast(&t) + obs.longitude() / 15.0;
        let z = horizon(&t, &obs, lst.rem_euclid(24.0), 40.0, Refraction::None, &sky);
        assert_relative_eq!(z.altitude, 90.0, epsilon = 1e-9);

        // The celestial pole stands at the latitude, due north.
        let p = horizon(&t, &obs, 0.0, 90.0, Refraction::None, &sky);
        assert_relative_eq!(p.altitude, 40.0, epsilon = 1e-9);
        assert!(p.azimuth < 1e-6 || p.azimuth > 360.0 - 1e-6);
    }

    #[test]
    fn test_refraction_lifts_altitude() {
        let sky = SiderealCache::new();
        let obs = Observer::new(40.0, 10.0, 0.0).unwrap();
        let t = Instant::from_ut(2_000.0);
        let plain = horizon(&t, &obs, 3.0, 5.0, Refraction::None, &sky);
        let bent = horizon(&t, &obs, 3.0, 5.0, Refraction::Normal, &sky);
        assert_relative_eq!(plain.azimuth, bent.azimuth, epsilon = 1e-9);
        if plain.altitude > -1.0 {
            assert!(bent.altitude > plain.altitude);
        }
    }

    #[test]
    fn test_sun_position_near_equinox() {
        // 2000 March 20, 07:35 UT: the vernal equinox.
        let t = Instant::from_calendar(2000, 3, 20, 7, 35, 0.0).unwrap();
        let sun = sun_position(&t);
        let lon = if sun.elon > 180.0 { sun.elon - 360.0 } else { sun.elon };
        assert!(lon.abs() < 0.02, "{lon}");
        assert!(sun.elat.abs() < 0.001);
    }

    #[test]
    fn test_ecliptic_of_vernal_point() {
        let t = Instant::from_ut(0.0);
        let e = ecliptic_j2000(&AstroVector::new(1.0, 0.0, 0.0, t));
        assert_relative_eq!(e.elon, 0.0, epsilon = 1e-12);
        assert_relative_eq!(e.elat, 0.0, epsilon = 1e-12);
    }
}
