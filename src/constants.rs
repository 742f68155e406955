//! # Constants and type definitions for skyseek
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants (AU, speed of light, Earth ellipsoid)
//! - Unit conversions (degrees ↔ radians, days ↔ seconds, light years ↔ AU)
//! - Gravitational parameters of the Sun and the major planets in AU³/day²
//! - Physical radii used by the eclipse and rise/set searches
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Number of days in a Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Number of days in a Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const JD_J2000: f64 = 2_451_545.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// General precession in longitude, radians per day (5029.0966″ per century)
pub const GENERAL_PRECESSION_RATE: f64 = 5_029.096_6 * RADSEC / DAYS_PER_CENTURY;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Speed of light in astronomical units per day
pub const VLIGHT_AU: f64 = VLIGHT / AU * SECONDS_PER_DAY;

/// Astronomical units in one light year
pub const AU_PER_LIGHT_YEAR: f64 = 63_241.077_088_07;

/// Ratio of solar days to sidereal days
pub const SOLAR_DAYS_PER_SIDEREAL_DAY: f64 = 0.997_269_571_759_259_2;

/// Earth rotation rate in radians per day
pub const EARTH_ROTATION_RATE: f64 = DPI * 1.002_737_909_35;

/// Earth equatorial radius in kilometers (WGS84)
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.1366;

/// Ratio of the Earth polar radius to its equatorial radius (1 − f, WGS84)
pub const EARTH_AXIS_RATIO: f64 = 0.996_647_180_302_104;

/// Earth polar radius in kilometers
pub const EARTH_POLAR_RADIUS_KM: f64 = EARTH_EQUATORIAL_RADIUS_KM * EARTH_AXIS_RATIO;

/// Earth mean radius in kilometers
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

/// Effective radius of the Earth's shadow-casting disc (solid Earth + atmosphere)
pub const EARTH_ECLIPSE_RADIUS_KM: f64 = EARTH_MEAN_RADIUS_KM + 88.0;

/// Earth equatorial radius expressed in astronomical units
pub const ERAU: f64 = EARTH_EQUATORIAL_RADIUS_KM / AU;

/// Sun photospheric radius in kilometers
pub const SUN_RADIUS_KM: f64 = 695_700.0;

/// Moon equatorial radius in kilometers
pub const MOON_EQUATORIAL_RADIUS_KM: f64 = 1738.1;

/// Moon mean radius in kilometers
pub const MOON_MEAN_RADIUS_KM: f64 = 1737.4;

/// Moon polar radius in kilometers
pub const MOON_POLAR_RADIUS_KM: f64 = 1736.0;

/// Mean synodic month in days
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588;

/// Ratio of the Earth mass to the Moon mass
pub const EARTH_MOON_MASS_RATIO: f64 = 81.300_56;

/// Refraction of a body at the horizon, in degrees
pub const REFRACTION_NEAR_HORIZON: f64 = 34.0 / 60.0;

// -------------------------------------------------------------------------------------------------
// Gravitational parameters (AU³/day²)
// -------------------------------------------------------------------------------------------------

/// Gaussian gravitational constant k
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², the heliocentric gravitational parameter in AU³/day²
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

pub const SUN_GM: f64 = 0.295_912_208_285_591_1e-03;
pub const MERCURY_GM: f64 = 0.491_254_957_186_794e-10;
pub const VENUS_GM: f64 = 0.724_345_233_264_412e-09;
pub const EARTH_GM: f64 = 0.888_769_244_512_563_4e-09;
pub const MARS_GM: f64 = 0.954_954_869_555_077e-10;
pub const JUPITER_GM: f64 = 0.282_534_590_952_422_6e-06;
pub const SATURN_GM: f64 = 0.845_971_518_568_065_9e-07;
pub const URANUS_GM: f64 = 0.129_202_491_678_196_9e-07;
pub const NEPTUNE_GM: f64 = 0.152_435_890_078_427_6e-07;
pub const PLUTO_GM: f64 = 0.218_869_976_542_597e-11;
pub const MOON_GM: f64 = EARTH_GM / EARTH_MOON_MASS_RATIO;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Angle in sidereal hours
pub type Hour = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in meters
pub type Meter = f64;
/// Distance in astronomical units
pub type AstroUnit = f64;
/// Duration or offset in days
pub type Days = f64;

/// Normalize an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(angle: Degree) -> Degree {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Normalize an angle in degrees into `(-180, +180]`.
pub fn longitude_offset(diff: Degree) -> Degree {
    let mut offset = diff;
    while offset <= -180.0 {
        offset += 360.0;
    }
    while offset > 180.0 {
        offset -= 360.0;
    }
    offset
}

/// Normalize an angle in radians into `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    let r = a.rem_euclid(DPI);
    if r >= DPI {
        0.0
    } else {
        r
    }
}

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
    }

    #[test]
    fn test_longitude_offset() {
        assert_eq!(longitude_offset(190.0), -170.0);
        assert_eq!(longitude_offset(-180.0), 180.0);
        assert_eq!(longitude_offset(45.0), 45.0);
    }

    #[test]
    fn test_light_speed_au_per_day() {
        assert!((VLIGHT_AU - 173.144_632_674).abs() < 1e-6);
    }
}
