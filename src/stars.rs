//! User-defined fixed stars.
//!
//! A [`StarTable`] holds eight slots addressed by [`StarSlot`]. Each defined slot is a
//! direction on the J2000 equator plus a distance; the resulting heliocentric vector is
//! constant in time (no proper motion, no parallax beyond the finite distance).
use nalgebra::Vector3;

use crate::{
    astro_errors::AstroError,
    body::{Body, StarSlot},
    constants::{AstroUnit, Degree, Hour, AU_PER_LIGHT_YEAR},
    frames::Eqj,
    time::Instant,
    vector::{AstroVector, Spherical},
};

/// Minimum accepted star distance, in light years.
pub const MIN_STAR_DISTANCE_LY: f64 = 1.0;

/// Coordinates of one defined star.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarDef {
    /// J2000 right ascension, sidereal hours.
    pub ra: Hour,
    /// J2000 declination, degrees.
    pub dec: Degree,
    /// Heliocentric distance, AU.
    pub dist: AstroUnit,
}

impl StarDef {
    /// Heliocentric J2000 equatorial vector of the star, stamped at `time`.
    pub fn helio_vector(&self, time: Instant) -> AstroVector<Eqj> {
        AstroVector::from_spherical(
            &Spherical {
                lat: self.dec,
                lon: self.ra * 15.0,
                dist: self.dist,
            },
            time,
        )
    }
}

/// Eight user-definable star slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StarTable {
    slots: [Option<StarDef>; 8],
}

impl StarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) the star in `slot`.
    ///
    /// Arguments
    /// -----------------
    /// * `ra`: J2000 right ascension in sidereal hours, `[0, 24)`.
    /// * `dec`: J2000 declination in degrees, `[-90, 90]`.
    /// * `distance_ly`: distance in light years, at least [`MIN_STAR_DISTANCE_LY`].
    ///
    /// Return
    /// ----------
    /// * [`AstroError::InvalidInput`] when a value is out of range; the slot is left
    ///   untouched in that case.
    pub fn define(
        &mut self,
        slot: StarSlot,
        ra: Hour,
        dec: Degree,
        distance_ly: f64,
    ) -> Result<(), AstroError> {
        if !ra.is_finite() || !(0.0..24.0).contains(&ra) {
            return Err(AstroError::InvalidInput(format!(
                "star right ascension {ra} outside [0, 24)"
            )));
        }
        if !dec.is_finite() || !(-90.0..=90.0).contains(&dec) {
            return Err(AstroError::InvalidInput(format!(
                "star declination {dec} outside [-90, 90]"
            )));
        }
        if !distance_ly.is_finite() || distance_ly < MIN_STAR_DISTANCE_LY {
            return Err(AstroError::InvalidInput(format!(
                "star distance {distance_ly} ly below {MIN_STAR_DISTANCE_LY} ly"
            )));
        }
        self.slots[slot.index()] = Some(StarDef {
            ra,
            dec,
            dist: distance_ly * AU_PER_LIGHT_YEAR,
        });
        Ok(())
    }

    pub fn get(&self, slot: StarSlot) -> Option<&StarDef> {
        self.slots[slot.index()].as_ref()
    }

    /// The star definition behind `slot`, or [`AstroError::UnsupportedBody`] when the slot
    /// has not been defined.
    pub fn require(&self, slot: StarSlot) -> Result<&StarDef, AstroError> {
        self.get(slot)
            .ok_or(AstroError::UnsupportedBody(Body::Star(slot)))
    }

    pub fn helio_vector(&self, slot: StarSlot, time: Instant) -> Result<AstroVector<Eqj>, AstroError> {
        Ok(self.require(slot)?.helio_vector(time))
    }

    /// Unit direction of the star in J2000.
    pub fn direction(&self, slot: StarSlot) -> Result<Vector3<f64>, AstroError> {
        let def = self.require(slot)?;
        Ok(def.helio_vector(Instant::from_ut(0.0)).xyz / def.dist)
    }
}

#[cfg(test)]
mod stars_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_define_and_lookup() {
        let mut table = StarTable::new();
        table.define(StarSlot::Star1, 12.0, 45.0, 100.0).unwrap();
        let t = Instant::from_ut(123.0);
        let v = table.helio_vector(StarSlot::Star1, t).unwrap();
        assert_relative_eq!(v.length(), 100.0 * AU_PER_LIGHT_YEAR, max_relative = 1e-12);
        let sph = v.to_spherical();
        assert_relative_eq!(sph.lon, 180.0, epsilon = 1e-9);
        assert_relative_eq!(sph.lat, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn test_undefined_slot() {
        let table = StarTable::new();
        assert_eq!(
            table.require(StarSlot::Star4).unwrap_err(),
            AstroError::UnsupportedBody(Body::Star(StarSlot::Star4))
        );
    }

    #[test]
    fn test_validation() {
        let mut table = StarTable::new();
        assert!(table.define(StarSlot::Star2, 24.0, 0.0, 10.0).is_err());
        assert!(table.define(StarSlot::Star2, -0.1, 0.0, 10.0).is_err());
        assert!(table.define(StarSlot::Star2, 1.0, 90.5, 10.0).is_err());
        assert!(table.define(StarSlot::Star2, 1.0, 0.0, 0.5).is_err());
        assert!(table.get(StarSlot::Star2).is_none());
        assert!(table.define(StarSlot::Star2, 0.0, -90.0, 1.0).is_ok());
    }
}
