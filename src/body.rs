//! # Celestial bodies
//!
//! [`Body`] is the closed set of objects the crate knows how to place in space. The
//! enumeration is fixed: the only user-extensible part are the eight [`StarSlot`]s whose
//! coordinates live in the [`StarTable`](crate::stars::StarTable) of a
//! [`Sky`](crate::sky::Sky) context.
use std::fmt;

use crate::constants::{
    Days, EARTH_GM, JUPITER_GM, MARS_GM, MERCURY_GM, MOON_GM, NEPTUNE_GM, PLUTO_GM, SATURN_GM,
    SUN_GM, URANUS_GM, VENUS_GM,
};

/// The eight major planets modelled by the analytic series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Planet {
    pub const ALL: [Planet; 8] = [
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];

    /// Gravitational parameter in AU³/day².
    pub fn gm(&self) -> f64 {
        match self {
            Planet::Mercury => MERCURY_GM,
            Planet::Venus => VENUS_GM,
            Planet::Earth => EARTH_GM,
            Planet::Mars => MARS_GM,
            Planet::Jupiter => JUPITER_GM,
            Planet::Saturn => SATURN_GM,
            Planet::Uranus => URANUS_GM,
            Planet::Neptune => NEPTUNE_GM,
        }
    }

    /// Sidereal orbital period in days.
    pub fn orbital_period(&self) -> Days {
        match self {
            Planet::Mercury => 87.969,
            Planet::Venus => 224.701,
            Planet::Earth => EARTH_ORBITAL_PERIOD,
            Planet::Mars => 686.980,
            Planet::Jupiter => 4332.589,
            Planet::Saturn => 10759.22,
            Planet::Uranus => 30685.4,
            Planet::Neptune => 60189.0,
        }
    }

    /// True for planets orbiting outside the Earth's orbit.
    pub fn is_superior(&self) -> bool {
        matches!(
            self,
            Planet::Mars | Planet::Jupiter | Planet::Saturn | Planet::Uranus | Planet::Neptune
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Uranus => "Uranus",
            Planet::Neptune => "Neptune",
        }
    }
}

/// Sidereal year in days.
pub const EARTH_ORBITAL_PERIOD: Days = 365.256;

/// Sidereal orbital period of Pluto in days.
pub const PLUTO_ORBITAL_PERIOD: Days = 90560.0;

/// Barycenters the crate can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarycenterKind {
    /// Earth/Moon barycenter.
    EarthMoon,
    /// Solar System barycenter (Sun + Jupiter, Saturn, Uranus, Neptune).
    SolarSystem,
}

/// One of the eight user-definable star slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StarSlot {
    Star1,
    Star2,
    Star3,
    Star4,
    Star5,
    Star6,
    Star7,
    Star8,
}

impl StarSlot {
    pub const ALL: [StarSlot; 8] = [
        StarSlot::Star1,
        StarSlot::Star2,
        StarSlot::Star3,
        StarSlot::Star4,
        StarSlot::Star5,
        StarSlot::Star6,
        StarSlot::Star7,
        StarSlot::Star8,
    ];

    /// Zero-based index of the slot in the star table.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A celestial body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Planet(Planet),
    Pluto,
    Barycenter(BarycenterKind),
    Star(StarSlot),
}

impl Body {
    pub const MERCURY: Body = Body::Planet(Planet::Mercury);
    pub const VENUS: Body = Body::Planet(Planet::Venus);
    pub const EARTH: Body = Body::Planet(Planet::Earth);
    pub const MARS: Body = Body::Planet(Planet::Mars);
    pub const JUPITER: Body = Body::Planet(Planet::Jupiter);
    pub const SATURN: Body = Body::Planet(Planet::Saturn);
    pub const URANUS: Body = Body::Planet(Planet::Uranus);
    pub const NEPTUNE: Body = Body::Planet(Planet::Neptune);
    pub const EMB: Body = Body::Barycenter(BarycenterKind::EarthMoon);
    pub const SSB: Body = Body::Barycenter(BarycenterKind::SolarSystem);

    /// Gravitational parameter in AU³/day², when the body has a meaningful one.
    pub fn gm(&self) -> Option<f64> {
        match self {
            Body::Sun => Some(SUN_GM),
            Body::Moon => Some(MOON_GM),
            Body::Planet(p) => Some(p.gm()),
            Body::Pluto => Some(PLUTO_GM),
            Body::Barycenter(_) | Body::Star(_) => None,
        }
    }

    /// Sidereal orbital period in days, for the bodies that orbit the Sun (or, for the
    /// Moon, its synodic month).
    pub fn orbital_period(&self) -> Option<Days> {
        match self {
            Body::Planet(p) => Some(p.orbital_period()),
            Body::Pluto => Some(PLUTO_ORBITAL_PERIOD),
            Body::Moon => Some(crate::constants::MEAN_SYNODIC_MONTH),
            _ => None,
        }
    }

    pub fn is_star(&self) -> bool {
        matches!(self, Body::Star(_))
    }

    pub fn is_earth(&self) -> bool {
        *self == Body::EARTH
    }
}

impl From<Planet> for Body {
    fn from(p: Planet) -> Self {
        Body::Planet(p)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Sun => write!(f, "Sun"),
            Body::Moon => write!(f, "Moon"),
            Body::Planet(p) => write!(f, "{}", p.name()),
            Body::Pluto => write!(f, "Pluto"),
            Body::Barycenter(BarycenterKind::EarthMoon) => write!(f, "EMB"),
            Body::Barycenter(BarycenterKind::SolarSystem) => write!(f, "SSB"),
            Body::Star(s) => write!(f, "Star{}", s.index() + 1),
        }
    }
}

#[cfg(test)]
mod body_test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Body::JUPITER.to_string(), "Jupiter");
        assert_eq!(Body::Star(StarSlot::Star3).to_string(), "Star3");
        assert_eq!(Body::SSB.to_string(), "SSB");
    }

    #[test]
    fn test_superior() {
        assert!(Planet::Mars.is_superior());
        assert!(!Planet::Venus.is_superior());
        assert!(!Planet::Earth.is_superior());
    }

    #[test]
    fn test_star_slot_index() {
        for (i, s) in StarSlot::ALL.iter().enumerate() {
            assert_eq!(s.index(), i);
        }
    }
}
