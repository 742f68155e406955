//! # Pluto by numerical integration
//!
//! Pluto has no analytic series here. Its barycentric state is propagated with a
//! velocity-Verlet integrator under the attraction of the Sun and the four giant planets,
//! whose positions come from the planetary series.
//!
//! ## Grid
//!
//! The integration starts from an osculating state at J2000 and advances in fixed steps of
//! [`PLUTO_STEP_DAYS`]. Every grid node reached is kept in a [`PlutoCache`], so later
//! requests resume from the nearest known node instead of from J2000. A request at an
//! arbitrary time uses the grid node on the J2000 side of the target and integrates a
//! single fractional step to reach it.
//!
//! The model is only trusted within [`PLUTO_SPAN_DAYS`] of J2000; outside that window the
//! lookup returns [`AstroError::OutOfRange`].
use std::collections::BTreeMap;

use nalgebra::Vector3;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    body::Planet,
    constants::{Days, RADEG, SUN_GM},
    frames::{Ecl, Eqj},
    orbit::EquinoctialElements,
    planets,
    rotation::rotation_ecl_eqj,
    time::Instant,
    vector::{AstroVector, StateVector},
};

/// Integration step, days.
pub const PLUTO_STEP_DAYS: Days = 40.0;

/// Half-width of the supported time span around J2000, days (two thousand Julian years).
pub const PLUTO_SPAN_DAYS: Days = 730_500.0;

/// Mean elements of Pluto at J2000, mean ecliptic and equinox of J2000 (degrees and AU).
const PLUTO_A: f64 = 39.482_116_75;
const PLUTO_E: f64 = 0.248_827_30;
const PLUTO_I: f64 = 17.140_012_06;
const PLUTO_NODE: f64 = 110.303_936_84;
const PLUTO_PERI_LON: f64 = 224.068_916_29;
const PLUTO_MEAN_LON: f64 = 238.929_038_33;

const PERTURBERS: [Planet; 4] = [
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
];

/// Barycentric state of Pluto at a grid node, with the acceleration already evaluated.
#[derive(Debug, Clone, Copy)]
struct PlutoSample {
    tt: Days,
    pos: Vector3<f64>,
    vel: Vector3<f64>,
    acc: Vector3<f64>,
}

/// Barycentric positions of the attracting bodies, paired with their GM.
///
/// The barycenter is rebuilt from the same four heliocentric positions rather than
/// through [`planets::ssb_state`], which would evaluate the series a second time.
fn attractors(tt: Days) -> [(f64, Vector3<f64>); 5] {
    let time = Instant::from_terrestrial_time(tt);
    let helio = PERTURBERS.map(|planet| (planet.gm(), planets::helio_vector(planet, &time).xyz));
    let total = helio.iter().map(|(gm, _)| gm).sum::<f64>() + SUN_GM;
    let ssb = helio
        .iter()
        .fold(Vector3::<f64>::zeros(), |acc, (gm, r)| acc + r * *gm)
        / total;

    let mut out = [(SUN_GM, -ssb); 5];
    for (slot, (gm, r)) in out.iter_mut().skip(1).zip(helio.iter()) {
        *slot = (*gm, r - ssb);
    }
    out
}

fn acceleration(tt: Days, pos: &Vector3<f64>) -> Vector3<f64> {
    attractors(tt)
        .iter()
        .fold(Vector3::<f64>::zeros(), |acc, (gm, body)| {
            let d = body - pos;
            let r = d.norm();
            acc + d * (gm / (r * r * r))
        })
}

/// One velocity-Verlet step of length `dt` (negative to integrate backward).
fn verlet_step(s: &PlutoSample, dt: Days) -> PlutoSample {
    let tt = s.tt + dt;
    let pos = s.pos + s.vel * dt + s.acc * (0.5 * dt * dt);
    let acc = acceleration(tt, &pos);
    let vel = s.vel + (s.acc + acc) * (0.5 * dt);
    PlutoSample { tt, pos, vel, acc }
}

/// Osculating barycentric state at J2000 from the mean elements.
///
/// For a body this distant the Sun and the giant planets act as a single central mass at
/// the barycenter, so the two-body motion uses their summed GM.
static PLUTO_J2000: Lazy<Result<PlutoSample, AstroError>> = Lazy::new(|| {
    let mu = PERTURBERS.iter().map(Planet::gm).sum::<f64>() + SUN_GM;
    let elements = EquinoctialElements::from_classical(
        PLUTO_A,
        PLUTO_E,
        PLUTO_I * RADEG,
        PLUTO_NODE * RADEG,
        PLUTO_PERI_LON * RADEG,
        PLUTO_MEAN_LON * RADEG,
    );
    let (pos, vel) = elements.to_state((mu / PLUTO_A.powi(3)).sqrt())?;
    let t0 = Instant::from_terrestrial_time(0.0);
    let ecl = StateVector::<Ecl>::new(pos, vel, t0);
    let eqj = rotation_ecl_eqj().apply_state(&ecl);
    Ok(PlutoSample {
        tt: 0.0,
        pos: eqj.pos,
        vel: eqj.vel,
        acc: acceleration(0.0, &eqj.pos),
    })
});

/// Memo of integrated grid nodes, keyed by node index (`tt = index · PLUTO_STEP_DAYS`).
#[derive(Debug, Default)]
pub struct PlutoCache {
    grid: Mutex<BTreeMap<i64, PlutoSample>>,
}

impl PlutoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of grid nodes integrated so far.
    pub fn len(&self) -> usize {
        self.grid.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Integrated state at grid node `index`, extending the cached grid as needed.
    fn node(&self, index: i64) -> Result<PlutoSample, AstroError> {
        let mut grid = self.grid.lock();
        if let Some(sample) = grid.get(&index) {
            return Ok(*sample);
        }
        if grid.is_empty() {
            let start = (*PLUTO_J2000).clone()?;
            grid.insert(0, start);
        }

        let step: i64 = if index >= 0 { 1 } else { -1 };
        // Furthest cached node between J2000 and the target, on the target side.
        let (mut k, mut sample) = if step > 0 {
            grid.range(0..=index).next_back()
        } else {
            grid.range(index..=0).next()
        }
        .map(|(k, s)| (*k, *s))
        .ok_or_else(|| AstroError::OutOfRange("Pluto grid is missing its J2000 node".into()))?;

        debug!(from = k, to = index, "extending Pluto integration grid");
        while k != index {
            sample = verlet_step(&sample, step as f64 * PLUTO_STEP_DAYS);
            k += step;
            grid.insert(k, sample);
        }
        Ok(sample)
    }

    /// Barycentric state of Pluto in J2000 equatorial coordinates.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::OutOfRange`] when `time` is further than [`PLUTO_SPAN_DAYS`] from
    ///   J2000.
    pub fn bary_state(&self, time: &Instant) -> Result<StateVector<Eqj>, AstroError> {
        if !time.tt.is_finite() || time.tt.abs() > PLUTO_SPAN_DAYS {
            return Err(AstroError::OutOfRange(format!(
                "Pluto model covers ±{PLUTO_SPAN_DAYS} days around J2000, got tt = {}",
                time.tt
            )));
        }
        let index = (time.tt / PLUTO_STEP_DAYS).trunc() as i64;
        let node = self.node(index)?;
        let dt = time.tt - node.tt;
        let s = if dt == 0.0 { node } else { verlet_step(&node, dt) };
        Ok(StateVector::new(s.pos, s.vel, *time))
    }

    /// Heliocentric state of Pluto in J2000 equatorial coordinates.
    pub fn helio_state(&self, time: &Instant) -> Result<StateVector<Eqj>, AstroError> {
        let bary = self.bary_state(time)?;
        Ok(bary + planets::ssb_state(time))
    }

    pub fn helio_vector(&self, time: &Instant) -> Result<AstroVector<Eqj>, AstroError> {
        Ok(self.helio_state(time)?.position())
    }
}

#[cfg(test)]
mod pluto_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_range() {
        let cache = PlutoCache::new();
        for k in -5..=5 {
            let t = Instant::from_ut(k as f64 * 7_300.0 + 13.7);
            let d = cache.helio_vector(&t).unwrap().length();
            assert!(d > 29.0 && d < 50.0, "{d}");
        }
    }

    #[test]
    fn test_out_of_range() {
        let cache = PlutoCache::new();
        let err = cache
            .bary_state(&Instant::from_ut(PLUTO_SPAN_DAYS + 10.0))
            .unwrap_err();
        assert!(matches!(err, AstroError::OutOfRange(_)));
    }

    #[test]
    fn test_grid_is_reused() {
        let cache = PlutoCache::new();
        let t = Instant::from_ut(4_000.0);
        let a = cache.bary_state(&t).unwrap();
        let n = cache.len();
        let b = cache.bary_state(&t).unwrap();
        assert_eq!(n, cache.len());
        assert_eq!(a.pos, b.pos);
    }

    #[test]
    fn test_position_at_2000() {
        let cache = PlutoCache::new();
        let t = Instant::from_terrestrial_time(0.0);
        let v = cache.helio_vector(&t).unwrap();
        // About 30.2 AU from the Sun at the start of 2000.
        assert_relative_eq!(v.length(), 30.2, epsilon = 0.3);
    }

    #[test]
    fn test_speed_is_continuous_across_nodes() {
        let cache = PlutoCache::new();
        let before = cache
            .bary_state(&Instant::from_terrestrial_time(PLUTO_STEP_DAYS * 3.0 - 1e-3))
            .unwrap();
        let after = cache
            .bary_state(&Instant::from_terrestrial_time(PLUTO_STEP_DAYS * 3.0 + 1e-3))
            .unwrap();
        assert!((after.pos - before.pos).norm() < 1e-5);
        assert!((after.vel - before.vel).norm() < 1e-7);
    }
}
