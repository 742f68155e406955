//! # Frame-tagged vectors
//!
//! [`AstroVector`] and [`StateVector`] wrap [`nalgebra::Vector3`] components together with
//! the [`Instant`] they are valid at and a zero-sized [`Frame`] marker. All arithmetic
//! returns new values; two vectors can only be combined when their frames agree. Sums and
//! differences also expect both operands at the same instant: re-stamp with `at` first
//! when mixing times is intended.
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};

use nalgebra::Vector3;

use crate::{
    astro_errors::AstroError,
    constants::{normalize_degrees, AstroUnit, Degree, RADEG},
    frames::Frame,
    time::Instant,
};

/// Tolerance on the TT of two operands, days (about 1 µs).
const SAME_INSTANT_DAYS: f64 = 1e-11;

fn check_same_instant(a: &Instant, b: &Instant) {
    debug_assert!(
        (a.tt - b.tt).abs() <= SAME_INSTANT_DAYS,
        "combining vectors stamped at TT {} and TT {}",
        a.tt,
        b.tt
    );
}

/// A position (or direction) in AU, expressed in frame `F` at time `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AstroVector<F: Frame> {
    pub xyz: Vector3<f64>,
    pub t: Instant,
    frame: PhantomData<F>,
}

/// Spherical coordinates: latitude and longitude in degrees, distance in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spherical {
    pub lat: Degree,
    pub lon: Degree,
    pub dist: AstroUnit,
}

impl<F: Frame> AstroVector<F> {
    pub fn new(x: f64, y: f64, z: f64, t: Instant) -> Self {
        Self::from_xyz(Vector3::new(x, y, z), t)
    }

    pub fn from_xyz(xyz: Vector3<f64>, t: Instant) -> Self {
        AstroVector {
            xyz,
            t,
            frame: PhantomData,
        }
    }

    pub fn zero(t: Instant) -> Self {
        Self::from_xyz(Vector3::zeros(), t)
    }

    pub fn x(&self) -> f64 {
        self.xyz.x
    }

    pub fn y(&self) -> f64 {
        self.xyz.y
    }

    pub fn z(&self) -> f64 {
        self.xyz.z
    }

    pub fn length(&self) -> AstroUnit {
        self.xyz.norm()
    }

    pub fn dot(&self, other: &AstroVector<F>) -> f64 {
        self.xyz.dot(&other.xyz)
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::from_xyz(self.xyz * k, self.t)
    }

    /// Same vector re-stamped at another instant.
    pub fn at(&self, t: Instant) -> Self {
        Self::from_xyz(self.xyz, t)
    }

    /// Unit vector along `self`.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::InvalidInput`] for a zero-length vector.
    pub fn normalize(&self) -> Result<Self, AstroError> {
        let len = self.length();
        if len == 0.0 {
            return Err(AstroError::InvalidInput(
                "cannot normalize a zero-length vector".into(),
            ));
        }
        Ok(self.scale(1.0 / len))
    }

    /// Angle between two vectors in degrees, in `[0, 180]`.
    pub fn angle_with(&self, other: &AstroVector<F>) -> Result<Degree, AstroError> {
        let r = self.length() * other.length();
        if r < 1.0e-8 {
            return Err(AstroError::InvalidInput(
                "cannot measure the angle of a zero-length vector".into(),
            ));
        }
        let cos = (self.dot(other) / r).clamp(-1.0, 1.0);
        Ok(cos.acos() / RADEG)
    }

    /// Convert to spherical coordinates (longitude in `[0, 360)`).
    pub fn to_spherical(&self) -> Spherical {
        let xyproj = self.xyz.x.hypot(self.xyz.y);
        let dist = xyproj.hypot(self.xyz.z);
        let (lat, lon) = if xyproj == 0.0 {
            let lat = if self.xyz.z > 0.0 {
                90.0
            } else if self.xyz.z < 0.0 {
                -90.0
            } else {
                0.0
            };
            (lat, 0.0)
        } else {
            (
                self.xyz.z.atan2(xyproj) / RADEG,
                normalize_degrees(self.xyz.y.atan2(self.xyz.x) / RADEG),
            )
        };
        Spherical { lat, lon, dist }
    }

    pub fn from_spherical(sph: &Spherical, t: Instant) -> Self {
        let (slat, clat) = (sph.lat * RADEG).sin_cos();
        let (slon, clon) = (sph.lon * RADEG).sin_cos();
        let rcoslat = sph.dist * clat;
        Self::new(rcoslat * clon, rcoslat * slon, sph.dist * slat, t)
    }
}

impl<F: Frame> Add for AstroVector<F> {
    type Output = AstroVector<F>;

    fn add(self, rhs: Self) -> Self::Output {
        check_same_instant(&self.t, &rhs.t);
        AstroVector::from_xyz(self.xyz + rhs.xyz, self.t)
    }
}

impl<F: Frame> Sub for AstroVector<F> {
    type Output = AstroVector<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        check_same_instant(&self.t, &rhs.t);
        AstroVector::from_xyz(self.xyz - rhs.xyz, self.t)
    }
}

impl<F: Frame> Neg for AstroVector<F> {
    type Output = AstroVector<F>;

    fn neg(self) -> Self::Output {
        AstroVector::from_xyz(-self.xyz, self.t)
    }
}

/// Position (AU) and velocity (AU/day) sharing one instant and one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector<F: Frame> {
    pub pos: Vector3<f64>,
    pub vel: Vector3<f64>,
    pub t: Instant,
    frame: PhantomData<F>,
}

impl<F: Frame> StateVector<F> {
    pub fn new(pos: Vector3<f64>, vel: Vector3<f64>, t: Instant) -> Self {
        StateVector {
            pos,
            vel,
            t,
            frame: PhantomData,
        }
    }

    pub fn zero(t: Instant) -> Self {
        Self::new(Vector3::zeros(), Vector3::zeros(), t)
    }

    pub fn position(&self) -> AstroVector<F> {
        AstroVector::from_xyz(self.pos, self.t)
    }

    pub fn velocity(&self) -> AstroVector<F> {
        AstroVector::from_xyz(self.vel, self.t)
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.pos * k, self.vel * k, self.t)
    }
}

impl<F: Frame> Add for StateVector<F> {
    type Output = StateVector<F>;

    fn add(self, rhs: Self) -> Self::Output {
        check_same_instant(&self.t, &rhs.t);
        StateVector::new(self.pos + rhs.pos, self.vel + rhs.vel, self.t)
    }
}

impl<F: Frame> Sub for StateVector<F> {
    type Output = StateVector<F>;

    fn sub(self, rhs: Self) -> Self::Output {
        check_same_instant(&self.t, &rhs.t);
        StateVector::new(self.pos - rhs.pos, self.vel - rhs.vel, self.t)
    }
}

impl<F: Frame> Neg for StateVector<F> {
    type Output = StateVector<F>;

    fn neg(self) -> Self::Output {
        StateVector::new(-self.pos, -self.vel, self.t)
    }
}

#[cfg(test)]
mod vector_test {
    use super::*;
    use crate::frames::Eqj;
    use approx::assert_relative_eq;

    fn t0() -> Instant {
        Instant::from_ut(0.0)
    }

    #[test]
    fn test_spherical_round_trip() {
        let v = AstroVector::<Eqj>::new(0.3, -1.2, 0.7, t0());
        let sph = v.to_spherical();
        let back = AstroVector::<Eqj>::from_spherical(&sph, t0());
        assert_relative_eq!(v.xyz, back.xyz, epsilon = 1e-12);
        assert!((0.0..360.0).contains(&sph.lon));
    }

    #[test]
    fn test_pole_spherical() {
        let sph = AstroVector::<Eqj>::new(0.0, 0.0, -2.0, t0()).to_spherical();
        assert_eq!(sph.lat, -90.0);
        assert_eq!(sph.lon, 0.0);
        assert_eq!(sph.dist, 2.0);
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert!(AstroVector::<Eqj>::zero(t0()).normalize().is_err());
        let n = AstroVector::<Eqj>::new(3.0, 4.0, 0.0, t0()).normalize().unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_angle_with() {
        let a = AstroVector::<Eqj>::new(1.0, 0.0, 0.0, t0());
        let b = AstroVector::<Eqj>::new(0.0, 2.0, 0.0, t0());
        assert_relative_eq!(a.angle_with(&b).unwrap(), 90.0, epsilon = 1e-12);
        assert_relative_eq!(a.angle_with(&(-a)).unwrap(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_restamped_difference_keeps_left_instant() {
        let a = AstroVector::<Eqj>::new(1.0, 2.0, 3.0, t0());
        let later = Instant::from_ut(1.5);
        let b = AstroVector::<Eqj>::new(0.5, 0.5, 0.5, later);
        let d = a - b.at(t0());
        assert_eq!(d.t, t0());
        assert_relative_eq!(d.xyz, Vector3::new(0.5, 1.5, 2.5), epsilon = 1e-15);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "combining vectors stamped at")]
    fn test_sum_of_different_instants_panics() {
        let a = AstroVector::<Eqj>::new(1.0, 0.0, 0.0, t0());
        let b = AstroVector::<Eqj>::new(0.0, 1.0, 0.0, Instant::from_ut(0.25));
        let _ = a + b;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "combining vectors stamped at")]
    fn test_state_difference_of_different_instants_panics() {
        let a = StateVector::<Eqj>::zero(t0());
        let b = StateVector::<Eqj>::zero(Instant::from_ut(-3.0));
        let _ = a - b;
    }
}
