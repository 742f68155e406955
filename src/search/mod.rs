//! # Event searches
//!
//! Everything in this module answers "when does X happen?" by reducing X to the upward
//! zero crossing of a scalar function of time. Unless noted, entry points are methods on
//! [`Sky`](crate::sky::Sky).
//!
//! | Module | Event | Entry points |
//! |---|---|---|
//! | [`engine`] | generic root finder | [`search`] |
//! | [`ascent`] | derivative-bounded bracketing | [`find_ascent`], [`search_with_ascent`] |
//! | [`rise_set`] | rise, set, altitude crossings | `search_rise_set`, `search_altitude` |
//! | [`hour_angle`] | culmination and hour angles | `search_hour_angle` |
//! | [`relative_longitude`] | conjunctions, oppositions, elongation | `search_relative_longitude`, `pair_longitude`, `angle_from_sun`, `elongation` |
//! | [`seasons`] | equinoxes and solstices | free functions `seasons`, `search_sun_longitude` |
//! | [`moon_phase`] | lunar phases | `moon_phase`, `search_moon_phase`, `search_moon_quarter`, `next_moon_quarter` |
//! | [`eclipse`] | lunar, global and local solar eclipses | `search_lunar_eclipse`, `search_global_solar_eclipse`, `search_local_solar_eclipse` and their `next_*` |
//! | [`extrema`] | declination / ecliptic latitude turning points | `search_declination_extremum`, `search_ecliptic_latitude_extremum` |
//!
//! A search that finds nothing inside its window returns `Ok(None)`; errors are reserved
//! for invalid requests and broken numerical invariants.
pub mod ascent;
pub mod eclipse;
pub mod engine;
pub mod extrema;
pub mod hour_angle;
pub mod moon_phase;
pub mod relative_longitude;
pub mod rise_set;
pub mod seasons;

pub use ascent::{find_ascent, search_with_ascent, Ascent};
pub use engine::{search, SearchOptions};

/// Which way a body crosses a circle of altitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Rise,
    Set,
}

impl Direction {
    /// `+1` for [`Direction::Rise`], `−1` for [`Direction::Set`].
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Rise => 1.0,
            Direction::Set => -1.0,
        }
    }
}

/// Which way in time a search proceeds from its start instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchDirection {
    #[default]
    Forward,
    Backward,
}
