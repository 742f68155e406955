//! # Ascent detection
//!
//! Functions such as "altitude minus target altitude" can stay negative for hours and then
//! cross zero quickly, so two samples at the ends of a window say little about what
//! happens in between. Given a bound `D` on `|f′|`, a window of length `Δt` whose end
//! values both have magnitude above `D·Δt/2` cannot contain a zero at all. Windows that
//! cannot be ruled out that way are split in two until either an upward crossing is
//! isolated or the pieces become shorter than a second.
use tracing::trace;

use crate::{
    astro_errors::AstroError,
    constants::SECONDS_PER_DAY,
    search::engine::{search, SearchOptions},
    time::Instant,
};

/// Recursion depth past which the derivative bound is considered violated.
const MAX_ASCENT_DEPTH: usize = 17;

/// A sub-interval whose ends straddle zero going upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ascent {
    pub t1: Instant,
    pub t2: Instant,
    pub f1: f64,
    pub f2: f64,
}

/// Locate an interval inside `[t1, t2]` where `f` goes from negative to non-negative.
///
/// Arguments
/// -----------------
/// * `f`: the function, evaluated at interval midpoints.
/// * `max_deriv`: upper bound on `|df/dt|`, units of `f` per day.
/// * `t1`, `t2`, `f1`, `f2`: the interval and the function values at its ends.
///
/// Return
/// ----------
/// * `Ok(Some(ascent))` for the earliest upward crossing found.
/// * `Ok(None)` when the interval provably holds none, or only a downward one.
/// * [`AstroError::NonConvergence`] when the split depth exceeds its cap, which means the
///   derivative bound is wrong.
pub fn find_ascent<F>(
    f: &mut F,
    max_deriv: f64,
    t1: Instant,
    t2: Instant,
    f1: f64,
    f2: f64,
) -> Result<Option<Ascent>, AstroError>
where
    F: FnMut(&Instant) -> Result<f64, AstroError>,
{
    find_ascent_at(0, f, max_deriv, t1, t2, f1, f2)
}

fn find_ascent_at<F>(
    depth: usize,
    f: &mut F,
    max_deriv: f64,
    t1: Instant,
    t2: Instant,
    f1: f64,
    f2: f64,
) -> Result<Option<Ascent>, AstroError>
where
    F: FnMut(&Instant) -> Result<f64, AstroError>,
{
    if f1 < 0.0 && f2 >= 0.0 {
        return Ok(Some(Ascent { t1, t2, f1, f2 }));
    }
    if f1 >= 0.0 && f2 < 0.0 {
        return Ok(None);
    }
    if depth > MAX_ASCENT_DEPTH {
        return Err(AstroError::NonConvergence(format!(
            "ascent search exceeded depth {MAX_ASCENT_DEPTH} near ut {}",
            t1.ut
        )));
    }

    let dt = t2.ut - t1.ut;
    if dt < 1.0 / SECONDS_PER_DAY {
        return Ok(None);
    }

    // Too far from zero at both ends to reach it within the interval.
    let da = f1.abs().min(f2.abs());
    if da > max_deriv * (dt / 2.0) {
        return Ok(None);
    }

    let tmid = t1.add_days(dt / 2.0);
    let fmid = f(&tmid)?;
    trace!(depth, ut = tmid.ut, fmid, "ascent split");

    if let Some(found) = find_ascent_at(depth + 1, f, max_deriv, t1, tmid, f1, fmid)? {
        return Ok(Some(found));
    }
    find_ascent_at(depth + 1, f, max_deriv, tmid, t2, fmid, f2)
}

/// Run [`find_ascent`] on `[t1, t2]` and refine the crossing with [`search`].
///
/// Return
/// ----------
/// * `Ok(None)` when the interval holds no upward crossing.
/// * [`AstroError::NonConvergence`] if an ascent was isolated but the refinement then
///   failed to find it.
pub fn search_with_ascent<F>(
    mut f: F,
    max_deriv: f64,
    t1: Instant,
    t2: Instant,
    dt_tolerance_seconds: f64,
) -> Result<Option<Instant>, AstroError>
where
    F: FnMut(&Instant) -> Result<f64, AstroError>,
{
    let f1 = f(&t1)?;
    let f2 = f(&t2)?;
    match find_ascent(&mut f, max_deriv, t1, t2, f1, f2)? {
        None => Ok(None),
        Some(ascent) => refine_ascent(f, &ascent, dt_tolerance_seconds).map(Some),
    }
}

/// Refine an isolated ascent to a single instant.
pub(crate) fn refine_ascent<F>(f: F, ascent: &Ascent, dt_tolerance_seconds: f64) -> Result<Instant, AstroError>
where
    F: FnMut(&Instant) -> Result<f64, AstroError>,
{
    let options = SearchOptions::with_tolerance(dt_tolerance_seconds).with_initial_values(ascent.f1, ascent.f2);
    search(f, ascent.t1, ascent.t2, options)?.ok_or_else(|| {
        AstroError::NonConvergence(format!(
            "refinement lost the ascending crossing between ut {} and {}",
            ascent.t1.ut, ascent.t2.ut
        ))
    })
}

#[cfg(test)]
mod ascent_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_hidden_ascent_is_found() {
        // Negative at both ends, with a brief positive bump in the middle.
        let mut f = |t: &Instant| Ok::<f64, AstroError>((2.0 * PI * t.ut).sin() - 0.9);
        let t1 = Instant::from_ut(-0.4);
        let t2 = Instant::from_ut(0.6);
        let f1 = f(&t1).unwrap();
        let f2 = f(&t2).unwrap();
        assert!(f1 < 0.0 && f2 < 0.0);

        let ascent = find_ascent(&mut f, 2.0 * PI, t1, t2, f1, f2).unwrap().unwrap();
        assert!(ascent.f1 < 0.0 && ascent.f2 >= 0.0);

        let t = search_with_ascent(f, 2.0 * PI, t1, t2, 0.1).unwrap().unwrap();
        let expected = (0.9f64).asin() / (2.0 * PI);
        assert_relative_eq!(t.ut, expected, epsilon = 1e-5);
    }

    #[test]
    fn test_far_from_zero_is_pruned() {
        let mut calls = 0;
        let mut f = |_: &Instant| {
            calls += 1;
            Ok::<f64, AstroError>(-10.0)
        };
        let t1 = Instant::from_ut(0.0);
        let t2 = Instant::from_ut(1.0);
        assert_eq!(find_ascent(&mut f, 1.0, t1, t2, -10.0, -10.0).unwrap(), None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_descent_only() {
        let t1 = Instant::from_ut(0.0);
        let t2 = Instant::from_ut(1.0);
        let found = search_with_ascent(|t| Ok(0.5 - t.ut), 1.0, t1, t2, 1.0).unwrap();
        assert_eq!(found, None);
    }

    #[test]
    fn test_bad_derivative_bound_is_detected() {
        // Claims a huge derivative, so nothing can be pruned, while the function never
        // crosses zero: the split depth runs out before the interval length does.
        let t1 = Instant::from_ut(0.0);
        let t2 = Instant::from_ut(1_000_000.0);
        let err = find_ascent(&mut |_: &Instant| Ok(-1.0), 1.0e12, t1, t2, -1.0, -1.0).unwrap_err();
        assert!(matches!(err, AstroError::NonConvergence(_)));
    }
}
