//! # Equinoxes and solstices
//!
//! The seasons begin when the apparent geocentric ecliptic longitude of the Sun, on the
//! true ecliptic and equinox of date, reaches 0°, 90°, 180° and 270°. Only the Earth and
//! the Sun are involved, so these searches need no [`Sky`](crate::sky::Sky) context.
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    constants::{longitude_offset, Degree},
    coords::sun_position,
    search::engine::{search, SearchOptions},
    time::Instant,
};

/// The four season starts of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeasonsInfo {
    pub mar_equinox: Instant,
    pub jun_solstice: Instant,
    pub sep_equinox: Instant,
    pub dec_solstice: Instant,
}

/// Time at which the Sun's apparent longitude reaches `target_lon` degrees.
///
/// Arguments
/// -----------------
/// * `target_lon`: longitude on the true ecliptic of date, `[0, 360)`.
/// * `start`: beginning of the window.
/// * `limit_days`: window length, positive.
///
/// Return
/// ----------
/// * `Ok(None)` when the Sun does not reach the longitude inside the window.
pub fn search_sun_longitude(
    target_lon: Degree,
    start: &Instant,
    limit_days: f64,
) -> Result<Option<Instant>, AstroError> {
    if !(limit_days > 0.0) {
        return Err(AstroError::InvalidInput(format!(
            "sun longitude search needs a positive window, got {limit_days}"
        )));
    }
    let sun_offset = |t: &Instant| Ok(longitude_offset(sun_position(t).elon - target_lon));
    let t2 = start.add_days(limit_days);
    search(sun_offset, *start, t2, SearchOptions::with_tolerance(0.01))
}

fn find_season_change(target_lon: Degree, year: i32, month: u8) -> Result<Instant, AstroError> {
    let start = Instant::from_calendar(year, month, 10, 0, 0, 0.0)?;
    let time = search_sun_longitude(target_lon, &start, 20.0)?.ok_or_else(|| {
        AstroError::NonConvergence(format!(
            "no solar longitude {target_lon} between {month}/10 and {month}/30 of {year}"
        ))
    })?;
    debug!(year, target_lon, %time, "season change");
    Ok(time)
}

/// Equinoxes and solstices of a Gregorian calendar year.
pub fn seasons(year: i32) -> Result<SeasonsInfo, AstroError> {
    Ok(SeasonsInfo {
        mar_equinox: find_season_change(0.0, year, 3)?,
        jun_solstice: find_season_change(90.0, year, 6)?,
        sep_equinox: find_season_change(180.0, year, 9)?,
        dec_solstice: find_season_change(270.0, year, 12)?,
    })
}

#[cfg(test)]
mod seasons_test {
    use super::*;

    fn minutes_between(a: &Instant, b: &Instant) -> f64 {
        (a.ut - b.ut).abs() * 1440.0
    }

    #[test]
    fn test_seasons_2024() {
        let s = seasons(2024).unwrap();
        // 2024: Mar 20 03:06, Jun 20 20:51, Sep 22 12:44, Dec 21 09:21 UTC.
        let cases = [
            (s.mar_equinox, Instant::from_calendar(2024, 3, 20, 3, 6, 0.0).unwrap()),
            (s.jun_solstice, Instant::from_calendar(2024, 6, 20, 20, 51, 0.0).unwrap()),
            (s.sep_equinox, Instant::from_calendar(2024, 9, 22, 12, 44, 0.0).unwrap()),
            (s.dec_solstice, Instant::from_calendar(2024, 12, 21, 9, 21, 0.0).unwrap()),
        ];
        for (found, expected) in cases {
            assert!(minutes_between(&found, &expected) < 20.0, "{found} vs {expected}");
        }
        assert!(s.mar_equinox.ut < s.jun_solstice.ut);
        assert!(s.jun_solstice.ut < s.sep_equinox.ut);
        assert!(s.sep_equinox.ut < s.dec_solstice.ut);
    }

    #[test]
    fn test_window_without_event() {
        let start = Instant::from_calendar(2024, 4, 1, 0, 0, 0.0).unwrap();
        assert_eq!(search_sun_longitude(0.0, &start, 30.0).unwrap(), None);
        assert!(search_sun_longitude(0.0, &start, -3.0).is_err());
    }
}
