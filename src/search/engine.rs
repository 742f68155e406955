//! # Generic root finder
//!
//! [`search`] finds the time at which a scalar function of time crosses zero going upward,
//! given a bracket `[t1, t2]` with `f(t1) < 0 ≤ f(t2)`.
//!
//! Each pass halves the bracket and, in parallel, fits a parabola through the two ends and
//! the midpoint. When the parabola crosses zero inside the bracket, its root and slope are
//! used to propose a much narrower bracket around the crossing; if the function really
//! changes sign there, the search jumps to it. This usually converges in a handful of
//! evaluations, while bisection keeps the worst case bounded.
use tracing::trace;

use crate::{astro_errors::AstroError, constants::SECONDS_PER_DAY, time::Instant};

/// Tuning of a single [`search`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Width of the final bracket, seconds.
    pub dt_tolerance_seconds: f64,
    /// Function value at `t1`, when the caller already has it.
    pub init_f1: Option<f64>,
    /// Function value at `t2`, when the caller already has it.
    pub init_f2: Option<f64>,
    /// Maximum number of refinement passes before [`AstroError::NonConvergence`].
    pub iter_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            dt_tolerance_seconds: 1.0,
            init_f1: None,
            init_f2: None,
            iter_limit: 20,
        }
    }
}

impl SearchOptions {
    pub fn with_tolerance(dt_tolerance_seconds: f64) -> Self {
        SearchOptions {
            dt_tolerance_seconds,
            ..Self::default()
        }
    }

    /// Same options with known function values at both bracket ends.
    pub fn with_initial_values(self, f1: f64, f2: f64) -> Self {
        SearchOptions {
            init_f1: Some(f1),
            init_f2: Some(f2),
            ..self
        }
    }
}

/// Root of the parabola through three equally spaced samples.
#[derive(Debug, Clone, Copy)]
struct QuadRoot {
    /// UT of the root, days.
    ut: f64,
    /// Slope of the parabola at the root, per day.
    df_dt: f64,
}

/// Fit `f(x) = Q·x² + R·x + S` through `(−1, fa)`, `(0, fm)`, `(1, fb)` with
/// `x = (t − tm) / dt`, and return its unique root inside `[−1, 1]`.
fn quad_interp(tm: f64, dt: f64, fa: f64, fm: f64, fb: f64) -> Option<QuadRoot> {
    let q = (fb + fa) / 2.0 - fm;
    let r = (fb - fa) / 2.0;
    let s = fm;
    let in_range = |x: f64| (-1.0..=1.0).contains(&x);

    let x = if q == 0.0 {
        // Degenerate to a straight line.
        if r == 0.0 {
            return None;
        }
        let x = -s / r;
        if !in_range(x) {
            return None;
        }
        x
    } else {
        let u = r * r - 4.0 * q * s;
        if u <= 0.0 {
            return None;
        }
        let ru = u.sqrt();
        let x1 = (-r + ru) / (2.0 * q);
        let x2 = (-r - ru) / (2.0 * q);
        match (in_range(x1), in_range(x2)) {
            (true, false) => x1,
            (false, true) => x2,
            _ => return None,
        }
    };

    Some(QuadRoot {
        ut: tm + x * dt,
        df_dt: (2.0 * q * x + r) / dt,
    })
}

fn between(t: &Instant, t1: &Instant, t2: &Instant) -> bool {
    (t.ut - t1.ut) * (t.ut - t2.ut) < 0.0
}

/// Find the ascending zero crossing of `f` between `t1` and `t2`.
///
/// Arguments
/// -----------------
/// * `f`: the function to solve; any error it returns aborts the search.
/// * `t1`, `t2`: bracket, `t1` before `t2`.
/// * `options`: tolerance, iteration cap and optionally pre-computed end values.
///
/// Return
/// ----------
/// * `Ok(Some(t))` at the crossing, within `dt_tolerance_seconds`.
/// * `Ok(None)` when the bracket does not hold a negative-to-positive sign change.
/// * [`AstroError::NonConvergence`] after `iter_limit` passes.
pub fn search<F>(
    mut f: F,
    t1: Instant,
    t2: Instant,
    options: SearchOptions,
) -> Result<Option<Instant>, AstroError>
where
    F: FnMut(&Instant) -> Result<f64, AstroError>,
{
    let dt_days = (options.dt_tolerance_seconds / SECONDS_PER_DAY).abs();
    let (mut t1, mut t2) = (t1, t2);
    let mut f1 = match options.init_f1 {
        Some(v) => v,
        None => f(&t1)?,
    };
    let mut f2 = match options.init_f2 {
        Some(v) => v,
        None => f(&t2)?,
    };

    let mut fmid = f64::NAN;
    let mut calc_fmid = true;

    for iter in 0..options.iter_limit {
        let tmid = t1.add_days((t2.ut - t1.ut) / 2.0);
        let dt = tmid.ut - t1.ut;
        if dt.abs() < dt_days {
            trace!(iter, "bracket below tolerance");
            return Ok(Some(tmid));
        }

        if calc_fmid {
            fmid = f(&tmid)?;
        } else {
            calc_fmid = true;
        }
        trace!(iter, ut = tmid.ut, fmid, "search pass");

        if let Some(q) = quad_interp(tmid.ut, t2.ut - tmid.ut, f1, fmid, f2) {
            let tq = Instant::from_ut(q.ut);
            let fq = f(&tq)?;
            if q.df_dt != 0.0 {
                let dt_guess = (fq / q.df_dt).abs();
                if dt_guess < dt_days {
                    return Ok(Some(tq));
                }
                // Try a much narrower bracket around the parabola's root.
                let dt_guess = 1.2 * dt_guess;
                if dt_guess < dt / 10.0 {
                    let tleft = tq.add_days(-dt_guess);
                    let tright = tq.add_days(dt_guess);
                    if between(&tleft, &t1, &t2) && between(&tright, &t1, &t2) {
                        let fleft = f(&tleft)?;
                        let fright = f(&tright)?;
                        if fleft < 0.0 && fright >= 0.0 {
                            f1 = fleft;
                            f2 = fright;
                            t1 = tleft;
                            t2 = tright;
                            fmid = fq;
                            calc_fmid = false;
                            continue;
                        }
                    }
                }
            }
        }

        if f1 < 0.0 && fmid >= 0.0 {
            t2 = tmid;
            f2 = fmid;
        } else if fmid < 0.0 && f2 >= 0.0 {
            t1 = tmid;
            f1 = fmid;
        } else {
            return Ok(None);
        }
    }

    Err(AstroError::NonConvergence(format!(
        "search did not converge within {} iterations between ut {} and {}",
        options.iter_limit, t1.ut, t2.ut
    )))
}

#[cfg(test)]
mod engine_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_root() {
        let t1 = Instant::from_ut(0.0);
        let t2 = Instant::from_ut(10.0);
        let t = search(|t| Ok(t.ut - 3.25), t1, t2, SearchOptions::with_tolerance(0.1))
            .unwrap()
            .unwrap();
        assert_relative_eq!(t.ut, 3.25, epsilon = 0.1 / SECONDS_PER_DAY);
    }

    #[test]
    fn test_sine_root() {
        let t1 = Instant::from_ut(-1.0);
        let t2 = Instant::from_ut(1.0);
        let t = search(|t| Ok((t.ut - 0.3).sin()), t1, t2, SearchOptions::default())
            .unwrap()
            .unwrap();
        assert_relative_eq!(t.ut, 0.3, epsilon = 1.0 / SECONDS_PER_DAY);
    }

    #[test]
    fn test_no_sign_change_is_not_found() {
        let t1 = Instant::from_ut(0.0);
        let t2 = Instant::from_ut(1.0);
        assert_eq!(search(|_| Ok(1.0), t1, t2, SearchOptions::default()).unwrap(), None);
        assert_eq!(search(|_| Ok(-1.0), t1, t2, SearchOptions::default()).unwrap(), None);
    }

    #[test]
    fn test_iteration_cap() {
        let t1 = Instant::from_ut(0.0);
        let t2 = Instant::from_ut(1000.0);
        // A step function defeats interpolation; bisection alone needs ~30 passes.
        let options = SearchOptions {
            dt_tolerance_seconds: 0.001,
            iter_limit: 5,
            ..SearchOptions::default()
        };
        let err = search(|t| Ok(if t.ut < 123.456 { -1.0 } else { 1.0 }), t1, t2, options).unwrap_err();
        assert!(matches!(err, AstroError::NonConvergence(_)));
    }

    #[test]
    fn test_errors_propagate() {
        let t1 = Instant::from_ut(0.0);
        let t2 = Instant::from_ut(1.0);
        let err = search(
            |_| Err(AstroError::InvalidInput("boom".into())),
            t1,
            t2,
            SearchOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, AstroError::InvalidInput("boom".into()));
    }

    #[test]
    fn test_quad_interp_picks_inner_root() {
        // f(x) = x² − 0.25 has roots ±0.5; with fa = fb the fit is ambiguous.
        assert!(quad_interp(0.0, 1.0, 0.75, -0.25, 0.75).is_none());
        // f(x) = x − 0.2 on a straight line.
        let q = quad_interp(10.0, 2.0, -1.2, -0.2, 0.8).unwrap();
        assert_relative_eq!(q.ut, 10.4, epsilon = 1e-12);
        assert_relative_eq!(q.df_dt, 0.5, epsilon = 1e-12);
    }
}
