//! # Rotation matrices between reference frames
//!
//! A [`RotationMatrix<A, B>`] maps vectors expressed in frame `A` to frame `B`
//! (`v_B = R · v_A`). The phantom frame parameters make composition type-checked:
//! `a.then(&b)` needs `a: A → B` and `b: B → C` and produces `A → C`.
//!
//! Elementary rotations are built with [`rotmt`] on top of
//! [`nalgebra::Rotation3::from_axis_angle`]; frame changes are expressed with
//! [`RotationMatrix::pivot`], which turns the *coordinate axes* (a passive rotation).
//!
//! The named constructors at the bottom of this module chain elementary pivots:
//!
//! * `rotation_eqj_ecl` / `rotation_ecl_eqj`: J2000 obliquity,
//! * `rotation_eqj_eqd` / `rotation_eqd_eqj`: IAU 2006 precession + IAU 1980 nutation,
//! * `rotation_eqd_hor` / `rotation_hor_eqd` / `rotation_eqj_hor`: sidereal rotation to the
//!   local horizon,
//! * `rotation_eqj_gal` / `rotation_gal_eqj`: IAU galactic frame,
//! * `rotation_eqd_ect`: true obliquity of date,
//! * `rotation_ecm_eqj`: mean ecliptic of date back to J2000 (series output),
//! * `rotation_jup_eqj`: Jupiter equatorial frame.
use std::marker::PhantomData;

use nalgebra::{Matrix3, Rotation3, Vector3};
use once_cell::sync::Lazy;

use crate::{
    constants::{Degree, Radian, RADEG},
    earth_orientation::{e_tilt, mean_obliquity, nutation_rotation, precession_rotation},
    frames::{Ecl, Ecm, Ect, Eqd, Eqj, Eqm, Frame, Gal, Hor, Jup},
    observer::Observer,
    sidereal::SiderealCache,
    time::Instant,
    vector::{AstroVector, StateVector},
};

/// Principal axis of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// The matrix is an **active rotation** of a vector by `alpha` (counter-clockwise seen
/// from the tip of the axis), so that the rotated vector is `x' = R · x`.
///
/// # See also
/// * [`RotationMatrix::pivot`] – the passive (change of axes) counterpart
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };
    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// A rotation taking vectors from frame `A` to frame `B`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix<A: Frame, B: Frame> {
    pub rot: Matrix3<f64>,
    frames: PhantomData<(A, B)>,
}

impl<A: Frame> RotationMatrix<A, A> {
    pub fn identity() -> Self {
        RotationMatrix::from_matrix(Matrix3::identity())
    }
}

impl<A: Frame, B: Frame> RotationMatrix<A, B> {
    /// Wrap a raw matrix. The caller guarantees it is orthonormal and maps `A` to `B`.
    pub(crate) fn from_matrix(rot: Matrix3<f64>) -> Self {
        RotationMatrix {
            rot,
            frames: PhantomData,
        }
    }

    /// Rotate the coordinate axes of the destination frame by `angle` degrees about `axis`.
    ///
    /// The result maps `A` to the pivoted frame `C`. A positive angle turns the axes
    /// counter-clockwise seen from the tip of `axis`, so vector coordinates turn the
    /// other way.
    pub fn pivot<C: Frame>(&self, axis: Axis, angle: Degree) -> RotationMatrix<A, C> {
        RotationMatrix::from_matrix(rotmt(-angle * RADEG, axis) * self.rot)
    }

    /// Apply `self` first, then `next`.
    pub fn then<C: Frame>(&self, next: &RotationMatrix<B, C>) -> RotationMatrix<A, C> {
        RotationMatrix::from_matrix(next.rot * self.rot)
    }

    /// The inverse rotation, i.e. the transpose.
    pub fn inverse(&self) -> RotationMatrix<B, A> {
        RotationMatrix::from_matrix(self.rot.transpose())
    }

    pub fn apply(&self, v: &AstroVector<A>) -> AstroVector<B> {
        AstroVector::from_xyz(self.rot * v.xyz, v.t)
    }

    pub fn apply_state(&self, s: &StateVector<A>) -> StateVector<B> {
        StateVector::new(self.rot * s.pos, self.rot * s.vel, s.t)
    }
}

/// Rotation from J2000 mean equator to J2000 mean ecliptic.
pub fn rotation_eqj_ecl() -> RotationMatrix<Eqj, Ecl> {
    let obl = mean_obliquity(0.0) / RADEG;
    RotationMatrix::<Eqj, Eqj>::identity().pivot(Axis::X, obl)
}

pub fn rotation_ecl_eqj() -> RotationMatrix<Ecl, Eqj> {
    rotation_eqj_ecl().inverse()
}

/// Rotation from the mean ecliptic of date, the native frame of the planetary and lunar
/// series, to the J2000 mean equator.
pub fn rotation_ecm_eqj(time: &Instant) -> RotationMatrix<Ecm, Eqj> {
    let mobl = mean_obliquity(time.tt) / RADEG;
    RotationMatrix::<Ecm, Ecm>::identity()
        .pivot::<Eqm>(Axis::X, -mobl)
        .then(&precession_rotation(time).inverse())
}

/// Rotation from J2000 mean equator to the true equator of date (precession then nutation).
pub fn rotation_eqj_eqd(time: &Instant) -> RotationMatrix<Eqj, Eqd> {
    precession_rotation(time).then(&nutation_rotation(time))
}

pub fn rotation_eqd_eqj(time: &Instant) -> RotationMatrix<Eqd, Eqj> {
    rotation_eqj_eqd(time).inverse()
}

/// Rotation from the true equator of date to the horizontal frame of `observer`.
///
/// The destination axes point north, west and zenith. They are obtained by turning the
/// equator-of-date axes by the local apparent sidereal angle, then tilting by the
/// colatitude.
pub fn rotation_eqd_hor(
    time: &Instant,
    observer: &Observer,
    sidereal: &SiderealCache,
) -> RotationMatrix<Eqd, Hor> {
    let (sinlat, coslat) = (observer.latitude() * RADEG).sin_cos();
    let spin = sidereal.gast(time) * 15.0 + observer.longitude();
    let (sinsp, cossp) = (spin * RADEG).sin_cos();

    let uze = Vector3::new(coslat * cossp, coslat * sinsp, sinlat);
    let une = Vector3::new(-sinlat * cossp, -sinlat * sinsp, coslat);
    let uwe = Vector3::new(sinsp, -cossp, 0.0);

    RotationMatrix::from_matrix(Matrix3::from_rows(&[
        une.transpose(),
        uwe.transpose(),
        uze.transpose(),
    ]))
}

pub fn rotation_hor_eqd(
    time: &Instant,
    observer: &Observer,
    sidereal: &SiderealCache,
) -> RotationMatrix<Hor, Eqd> {
    rotation_eqd_hor(time, observer, sidereal).inverse()
}

pub fn rotation_eqj_hor(
    time: &Instant,
    observer: &Observer,
    sidereal: &SiderealCache,
) -> RotationMatrix<Eqj, Hor> {
    rotation_eqj_eqd(time).then(&rotation_eqd_hor(time, observer, sidereal))
}

pub fn rotation_hor_eqj(
    time: &Instant,
    observer: &Observer,
    sidereal: &SiderealCache,
) -> RotationMatrix<Hor, Eqj> {
    rotation_eqj_hor(time, observer, sidereal).inverse()
}

/// J2000 equatorial → IAU galactic (Hipparcos realisation of the 1958 pole and node).
static EQJ_TO_GAL: Lazy<Matrix3<f64>> = Lazy::new(|| {
    Matrix3::new(
        -0.054_875_560_4,
        -0.873_437_090_2,
        -0.483_835_015_5,
        0.494_109_427_9,
        -0.444_829_630_0,
        0.746_982_244_5,
        -0.867_666_149_0,
        -0.198_076_373_4,
        0.455_983_776_2,
    )
});

pub fn rotation_eqj_gal() -> RotationMatrix<Eqj, Gal> {
    RotationMatrix::from_matrix(*EQJ_TO_GAL)
}

pub fn rotation_gal_eqj() -> RotationMatrix<Gal, Eqj> {
    rotation_eqj_gal().inverse()
}

/// Rotation from the true equator of date to the true ecliptic of date.
pub fn rotation_eqd_ect(time: &Instant) -> RotationMatrix<Eqd, Ect> {
    let tilt = e_tilt(time);
    RotationMatrix::<Eqd, Eqd>::identity().pivot(Axis::X, tilt.tobl)
}

pub fn rotation_ect_eqd(time: &Instant) -> RotationMatrix<Ect, Eqd> {
    rotation_eqd_ect(time).inverse()
}

/// Right ascension of Jupiter's north pole at J2000, degrees (IAU WGCCRE).
const JUPITER_POLE_RA: Degree = 268.056_595;

/// Declination of Jupiter's north pole at J2000, degrees.
const JUPITER_POLE_DEC: Degree = 64.495_303;

/// Rotation from Jupiter's equatorial frame to J2000 equatorial.
///
/// The Jupiter frame has its z axis along the spin pole and its x axis along the
/// ascending node of Jupiter's equator on the J2000 equator.
pub fn rotation_jup_eqj() -> RotationMatrix<Jup, Eqj> {
    RotationMatrix::<Jup, Jup>::identity()
        .pivot::<Jup>(Axis::X, -(90.0 - JUPITER_POLE_DEC))
        .pivot(Axis::Z, -(JUPITER_POLE_RA + 90.0))
}

#[cfg(test)]
mod rotation_test {
    use super::*;
    use approx::assert_relative_eq;

    fn is_orthonormal(m: &Matrix3<f64>) -> bool {
        (m * m.transpose() - Matrix3::identity()).norm() < 1e-12
    }

    #[test]
    fn test_pivot_is_passive() {
        let t = Instant::from_ut(0.0);
        let r = RotationMatrix::<Eqj, Eqj>::identity().pivot::<Ecl>(Axis::Z, 90.0);
        // Turning the axes by +90° about z brings the old +y onto the new +x.
        let v = r.apply(&AstroVector::new(0.0, 1.0, 0.0, t));
        assert_relative_eq!(v.xyz, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_eqj_ecl_pole() {
        let t = Instant::from_ut(0.0);
        // The ecliptic north pole sits at RA 18h, Dec 90° − ε in J2000 equatorial.
        let pole = rotation_ecl_eqj().apply(&AstroVector::new(0.0, 0.0, 1.0, t));
        let sph = pole.to_spherical();
        assert_relative_eq!(sph.lon, 270.0, epsilon = 1e-9);
        assert_relative_eq!(sph.lat, 90.0 - 23.439_291, epsilon = 1e-4);
    }

    #[test]
    fn test_round_trip_and_orthonormality() {
        let t = Instant::from_ut(8_000.25);
        let v = AstroVector::<Eqj>::new(0.4, -0.9, 1.3, t);
        let r = rotation_eqj_eqd(&t);
        assert!(is_orthonormal(&r.rot));
        let back = r.inverse().apply(&r.apply(&v));
        assert_relative_eq!(v.xyz, back.xyz, epsilon = 1e-9);

        let g = rotation_eqj_gal();
        assert!(is_orthonormal(&g.rot));
        let back = rotation_gal_eqj().apply(&g.apply(&v));
        assert_relative_eq!(v.xyz, back.xyz, epsilon = 1e-9);
    }

    #[test]
    fn test_galactic_center_direction() {
        let t = Instant::from_ut(0.0);
        // Galactic centre: RA 17h45m37s, Dec −28°56′10″.
        let ra = (17.0 + 45.0 / 60.0 + 37.2 / 3600.0) * 15.0;
        let dec = -(28.0 + 56.0 / 60.0 + 10.2 / 3600.0);
        let gc = AstroVector::<Eqj>::from_spherical(
            &crate::vector::Spherical {
                lat: dec,
                lon: ra,
                dist: 1.0,
            },
            t,
        );
        let g = rotation_eqj_gal().apply(&gc).to_spherical();
        assert!(g.lat.abs() < 0.02, "b = {}", g.lat);
        assert!(g.lon < 0.02 || g.lon > 359.98, "l = {}", g.lon);
    }

    #[test]
    fn test_jupiter_pole() {
        let t = Instant::from_ut(0.0);
        let pole = rotation_jup_eqj()
            .apply(&AstroVector::new(0.0, 0.0, 1.0, t))
            .to_spherical();
        assert_relative_eq!(pole.lon, JUPITER_POLE_RA, epsilon = 1e-9);
        assert_relative_eq!(pole.lat, JUPITER_POLE_DEC, epsilon = 1e-9);
    }
}
