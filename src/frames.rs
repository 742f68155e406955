//! Zero-sized markers naming the reference frames a vector or rotation belongs to.
//!
//! Vectors ([`AstroVector`](crate::vector::AstroVector)) and rotations
//! ([`RotationMatrix`](crate::rotation::RotationMatrix)) carry one of these markers as a
//! phantom type parameter, so applying a rotation built for one frame pair to a vector
//! expressed in another frame fails to compile.
use std::fmt::Debug;

/// A reference frame marker.
pub trait Frame: Copy + Clone + Debug + Default + PartialEq + Send + Sync + 'static {
    /// Short frame code used in logs and `Debug` output.
    const NAME: &'static str;
}

macro_rules! frame_marker {
    ($(#[$doc:meta])* $name:ident, $code:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name;

        impl Frame for $name {
            const NAME: &'static str = $code;
        }
    };
}

frame_marker!(
    /// Mean equator and equinox of J2000.0.
    Eqj,
    "EQJ"
);
frame_marker!(
    /// Mean equator and equinox of date (precession only).
    Eqm,
    "EQM"
);
frame_marker!(
    /// True equator and equinox of date (precession + nutation applied).
    Eqd,
    "EQD"
);
frame_marker!(
    /// Mean ecliptic and equinox of J2000.0.
    Ecl,
    "ECL"
);
frame_marker!(
    /// Mean ecliptic and equinox of date, the native frame of the analytic series.
    Ecm,
    "ECM"
);
frame_marker!(
    /// True ecliptic and equinox of date.
    Ect,
    "ECT"
);
frame_marker!(
    /// Observer horizontal frame: x toward north, y toward west, z toward zenith.
    Hor,
    "HOR"
);
frame_marker!(
    /// IAU galactic frame.
    Gal,
    "GAL"
);
frame_marker!(
    /// Jupiter equatorial frame (node on the J2000 equator, pole along Jupiter's spin axis).
    Jup,
    "JUP"
);
