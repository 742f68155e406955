pub mod astro_errors;
pub mod body;
pub mod constants;
pub mod coords;
pub mod earth_orientation;
pub mod frames;
pub mod jupiter_moons;
pub mod light_time;
pub mod moon;
pub mod observer;
pub mod orbit;
pub mod planets;
pub mod pluto;
pub mod rotation;
pub mod search;
pub mod sidereal;
pub mod sky;
pub mod stars;
pub mod time;
pub mod vector;

#[cfg(test)]
pub(crate) mod unit_test_global {
    use std::sync::LazyLock;

    use crate::sky::Sky;

    /// Shared context so the Pluto cache and sidereal memo are filled once per test run.
    pub(crate) static SKY_TEST: LazyLock<Sky> = LazyLock::new(Sky::new);
}
