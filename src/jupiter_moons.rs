//! # Galilean moons
//!
//! Jovicentric states of Io, Europa, Ganymede and Callisto from mean-element theory.
//!
//! For each moon the mean longitude advances linearly. The eccentricity vector
//! `z = k + i·h` and the inclination vector `ζ = sin(i/2)·e^{iΩ}` are short sums of
//! rotating terms:
//!
//! * the forced eccentricities of Io, Europa and Ganymede follow the Laplace resonance,
//!   so their pericentres track the conjunction longitudes `2λ₂ − λ₁` and `2λ₃ − λ₂`;
//! * Ganymede and Callisto carry a slowly precessing free eccentricity;
//! * every orbit plane regresses about Jupiter's equator.
//!
//! The elements are turned into a Cartesian state in Jupiter's equatorial frame through
//! [`EquinoctialElements::to_state`], then rotated to J2000.
use std::f64::consts::PI;

use crate::{
    astro_errors::AstroError,
    constants::Days,
    frames::Eqj,
    orbit::EquinoctialElements,
    rotation::rotation_jup_eqj,
    time::Instant,
    vector::StateVector,
};

/// One rotating term `amplitude · e^{i(phase + rate·t)}`, `t` in days of TT since J2000.
type RotatingTerm = (f64, f64, f64);

struct GalileanModel {
    /// Semi-major axis, AU.
    a: f64,
    /// Mean motion, radians per day.
    n: f64,
    /// Mean longitude at J2000, radians.
    lambda0: f64,
    ecc: &'static [RotatingTerm],
    incl: &'static [RotatingTerm],
}

/// Rate of the Io–Europa and Europa–Ganymede conjunction lines, radians per day.
const CONJUNCTION_RATE: f64 = -0.012_906_864;

const IO: GalileanModel = GalileanModel {
    a: 0.002_819_347,
    n: 3.551_552_286,
    lambda0: 1.446_213_296_0,
    ecc: &[(0.004_1, -2.193_265_983_4, CONJUNCTION_RATE)],
    incl: &[(0.000_314, 0.75, -0.002_319)],
};

const EUROPA: GalileanModel = GalileanModel {
    a: 0.004_485_872,
    n: 1.769_322_711,
    lambda0: -0.373_526_343_7,
    ecc: &[(0.009_4, -2.193_265_983_4 + PI, CONJUNCTION_RATE)],
    incl: &[(0.004_067, 3.81, -0.000_570)],
};

const GANYMEDE: GalileanModel = GalileanModel {
    a: 0.007_155_352,
    n: 0.878_207_923,
    lambda0: 0.287_408_939_1,
    ecc: &[
        (0.000_6, 0.948_344_221_9 + PI, CONJUNCTION_RATE),
        (0.001_5, 0.93, 0.000_125_57),
    ],
    incl: &[(0.001_545, 5.95, -0.000_125_57)],
};

const CALLISTO: GalileanModel = GalileanModel {
    a: 0.012_585_436,
    n: 0.376_486_233,
    lambda0: -0.362_034_129_1,
    ecc: &[(0.007_4, 2.81, 0.000_029_77)],
    incl: &[(0.001_676, 5.44, -0.000_029_77)],
};

/// The four Galilean moons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GalileanMoon {
    Io,
    Europa,
    Ganymede,
    Callisto,
}

impl GalileanMoon {
    pub const ALL: [GalileanMoon; 4] = [
        GalileanMoon::Io,
        GalileanMoon::Europa,
        GalileanMoon::Ganymede,
        GalileanMoon::Callisto,
    ];

    fn model(&self) -> &'static GalileanModel {
        match self {
            GalileanMoon::Io => &IO,
            GalileanMoon::Europa => &EUROPA,
            GalileanMoon::Ganymede => &GANYMEDE,
            GalileanMoon::Callisto => &CALLISTO,
        }
    }

    /// Mean orbital radius, AU.
    pub fn semi_major_axis(&self) -> f64 {
        self.model().a
    }
}

/// Jovicentric J2000 states of the four moons at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JupiterMoonsInfo {
    pub io: StateVector<Eqj>,
    pub europa: StateVector<Eqj>,
    pub ganymede: StateVector<Eqj>,
    pub callisto: StateVector<Eqj>,
}

impl JupiterMoonsInfo {
    pub fn get(&self, moon: GalileanMoon) -> &StateVector<Eqj> {
        match moon {
            GalileanMoon::Io => &self.io,
            GalileanMoon::Europa => &self.europa,
            GalileanMoon::Ganymede => &self.ganymede,
            GalileanMoon::Callisto => &self.callisto,
        }
    }
}

fn sum_terms(terms: &[RotatingTerm], t: Days) -> (f64, f64) {
    terms.iter().fold((0.0, 0.0), |(re, im), &(amp, phase, rate)| {
        let (s, c) = (phase + rate * t).sin_cos();
        (re + amp * c, im + amp * s)
    })
}

fn elements(model: &GalileanModel, t: Days) -> EquinoctialElements {
    let (k, h) = sum_terms(model.ecc, t);
    let (zeta_re, zeta_im) = sum_terms(model.incl, t);
    // ζ holds sin(i/2); the equinoctial set wants tan(i/2).
    let to_tan = 1.0 / (1.0 - zeta_re * zeta_re - zeta_im * zeta_im).sqrt();
    EquinoctialElements {
        semi_major_axis: model.a,
        eccentricity_sin_lon: h,
        eccentricity_cos_lon: k,
        tan_half_incl_sin_node: zeta_im * to_tan,
        tan_half_incl_cos_node: zeta_re * to_tan,
        mean_longitude: model.lambda0 + model.n * t,
    }
}

/// Jovicentric state of one moon in J2000 equatorial coordinates.
pub fn galilean_moon_state(moon: GalileanMoon, time: &Instant) -> Result<StateVector<Eqj>, AstroError> {
    let model = moon.model();
    let (pos, vel) = elements(model, time.tt).to_state(model.n)?;
    Ok(rotation_jup_eqj().apply_state(&StateVector::new(pos, vel, *time)))
}

/// Jovicentric states of all four Galilean moons.
pub fn jupiter_moons(time: &Instant) -> Result<JupiterMoonsInfo, AstroError> {
    Ok(JupiterMoonsInfo {
        io: galilean_moon_state(GalileanMoon::Io, time)?,
        europa: galilean_moon_state(GalileanMoon::Europa, time)?,
        ganymede: galilean_moon_state(GalileanMoon::Ganymede, time)?,
        callisto: galilean_moon_state(GalileanMoon::Callisto, time)?,
    })
}

#[cfg(test)]
mod jupiter_moons_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_orbit_radius_and_speed() {
        for k in 0..50 {
            let t = Instant::from_ut(-500.0 + 17.3 * k as f64);
            let info = jupiter_moons(&t).unwrap();
            for moon in GalileanMoon::ALL {
                let s = info.get(moon);
                let model = moon.model();
                let r = s.pos.norm();
                assert!((r / model.a - 1.0).abs() < 0.02, "{moon:?} r = {r}");
                let v = s.vel.norm();
                assert!((v / (model.n * model.a) - 1.0).abs() < 0.03, "{moon:?} v = {v}");
            }
        }
    }

    #[test]
    fn test_orbits_lie_near_jupiter_equator() {
        let pole = rotation_jup_eqj().rot.column(2).into_owned();
        let t = Instant::from_ut(777.0);
        let info = jupiter_moons(&t).unwrap();
        for moon in GalileanMoon::ALL {
            let s = info.get(moon);
            let normal = s.pos.cross(&s.vel).normalize();
            assert!(normal.dot(&pole) > 0.9999, "{moon:?}");
        }
    }

    #[test]
    fn test_velocity_is_derivative_of_position() {
        let t = Instant::from_ut(123.0);
        let h = 1e-4;
        for moon in GalileanMoon::ALL {
            let s = galilean_moon_state(moon, &t).unwrap();
            let a = galilean_moon_state(moon, &Instant::from_terrestrial_time(t.tt + h)).unwrap();
            let b = galilean_moon_state(moon, &Instant::from_terrestrial_time(t.tt - h)).unwrap();
            let numeric = (a.pos - b.pos) / (2.0 * h);
            assert_relative_eq!(numeric, s.vel, epsilon = 1e-3 * s.vel.norm());
        }
    }
}
