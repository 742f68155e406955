//! # Light-time and aberration
//!
//! A body is seen where it was when the light now arriving left it. [`correct_light_travel`]
//! solves the fixed point
//!
//! ```text
//! t′ = t − |r(t′)| / c
//! ```
//!
//! for any position function `r`, and [`back_date_position`] applies it to a pair of
//! bodies, optionally adding the first-order stellar aberration due to the observer's
//! barycentric velocity.
use tracing::trace;

use crate::{
    astro_errors::AstroError,
    body::Body,
    constants::{Days, VLIGHT_AU},
    frames::Eqj,
    sky::Sky,
    time::Instant,
    vector::AstroVector,
};

/// Convergence threshold on the emission time, days.
pub const LIGHT_TIME_TOLERANCE: Days = 1e-9;

const LIGHT_TIME_MAX_ITER: usize = 10;

/// Whether to apply the aberration of light to apparent positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Aberration {
    /// Apparent direction, shifted toward the observer's velocity.
    #[default]
    Corrected,
    /// Geometric direction at the emission time.
    None,
}

/// Iterate the light-travel fixed point for a relative position function.
///
/// Arguments
/// -----------------
/// * `position`: observer-to-target vector as a function of the emission time.
/// * `time`: observation time.
///
/// Return
/// ----------
/// * The relative vector at the converged emission time, stamped with `time`.
/// * [`AstroError::NonConvergence`] when the loop does not settle within ten passes, or
///   when observer and target coincide.
pub fn correct_light_travel<F>(mut position: F, time: &Instant) -> Result<AstroVector<Eqj>, AstroError>
where
    F: FnMut(&Instant) -> Result<AstroVector<Eqj>, AstroError>,
{
    let mut ltime = *time;
    for iter in 0..LIGHT_TIME_MAX_ITER {
        let pos = position(&ltime)?;
        let dist = pos.length();
        if dist == 0.0 {
            return Err(AstroError::NonConvergence(
                "light-time correction between coincident points".into(),
            ));
        }
        let next = Instant::from_terrestrial_time(time.tt - dist / VLIGHT_AU);
        let change = (next.tt - ltime.tt).abs();
        trace!(iter, change, "light-time pass");
        if change < LIGHT_TIME_TOLERANCE {
            return Ok(pos.at(*time));
        }
        ltime = next;
    }
    Err(AstroError::NonConvergence(format!(
        "light-time correction did not settle after {LIGHT_TIME_MAX_ITER} passes"
    )))
}

/// Apparent position of `target_body` as seen from `observer_body` at `time`.
///
/// Both bodies are taken relative to the Solar System barycenter. The target is back-dated
/// by the light delay; with [`Aberration::Corrected`] the observer's barycentric velocity
/// times that delay is added to the result.
///
/// User stars are not back-dated: their heliocentric vector is constant, so only the
/// aberration term is applied.
pub fn back_date_position(
    sky: &Sky,
    time: &Instant,
    observer_body: Body,
    target_body: Body,
    aberration: Aberration,
) -> Result<AstroVector<Eqj>, AstroError> {
    let observer = sky.bary_state(observer_body, time)?;
    let obs_pos = observer.position();
    let obs_vel = observer.velocity();

    let apparent = |pos: AstroVector<Eqj>, delay: Days| match aberration {
        Aberration::Corrected => pos + obs_vel.scale(delay),
        Aberration::None => pos,
    };

    if let Body::Star(_) = target_body {
        let pos = sky.bary_state(target_body, time)?.position() - obs_pos;
        let delay = pos.length() / VLIGHT_AU;
        return Ok(apparent(pos, delay));
    }

    correct_light_travel(
        |t| {
            let target = sky.bary_state(target_body, t)?.position();
            let pos = target.at(*time) - obs_pos;
            Ok(apparent(pos, time.tt - t.tt))
        },
        time,
    )
}

#[cfg(test)]
mod light_time_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_static_target_converges_immediately() {
        let t = Instant::from_ut(100.0);
        let mut calls = 0;
        let v = correct_light_travel(
            |_| {
                calls += 1;
                Ok(AstroVector::new(2.0, 0.0, 0.0, t))
            },
            &t,
        )
        .unwrap();
        assert_eq!(v.xyz.x, 2.0);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_coincident_points() {
        let t = Instant::from_ut(0.0);
        let err = correct_light_travel(|_| Ok(AstroVector::zero(t)), &t).unwrap_err();
        assert!(matches!(err, AstroError::NonConvergence(_)));
    }

    #[test]
    fn test_receding_target_is_back_dated() {
        let t = Instant::from_ut(0.0);
        // Target moving away at 0.01 AU/day from 5 AU.
        let v = correct_light_travel(
            |e| Ok(AstroVector::new(5.0 + 0.01 * (e.tt - t.tt), 0.0, 0.0, *e)),
            &t,
        )
        .unwrap();
        let delay = 5.0 / VLIGHT_AU;
        assert_relative_eq!(v.xyz.x, 5.0 - 0.01 * delay, epsilon = 1e-6);
    }

    #[test]
    fn test_geo_jupiter_delay() {
        let sky = Sky::new();
        let t = Instant::from_ut(0.0);
        let apparent = back_date_position(&sky, &t, Body::EARTH, Body::JUPITER, Aberration::None).unwrap();
        let geometric = sky.helio_vector(Body::JUPITER, &t).unwrap() - sky.helio_vector(Body::EARTH, &t).unwrap();
        // Jupiter moves a few thousand km during the ~40 min delay; the difference is tiny
        // but non-zero.
        let diff = (apparent.xyz - geometric.xyz).norm();
        assert!(diff > 1e-6 && diff < 1e-3, "{diff}");
    }

    #[test]
    fn test_aberration_magnitude() {
        let sky = Sky::new();
        let t = Instant::from_ut(500.0);
        let with = back_date_position(&sky, &t, Body::EARTH, Body::SATURN, Aberration::Corrected).unwrap();
        let without = back_date_position(&sky, &t, Body::EARTH, Body::SATURN, Aberration::None).unwrap();
        let angle = with.angle_with(&without).unwrap() * 3600.0;
        // Annual aberration never exceeds about 20.5 arcseconds.
        assert!(angle < 21.0, "{angle}");
    }
}
