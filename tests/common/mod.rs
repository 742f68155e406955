#![allow(dead_code)]

use skyseek::{observer::Observer, time::Instant};

pub fn utc(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Instant {
    Instant::from_calendar(year, month, day, hour, minute, 0.0).unwrap()
}

pub fn minutes_between(a: &Instant, b: &Instant) -> f64 {
    (a.ut - b.ut).abs() * 1440.0
}

pub fn assert_within_minutes(actual: &Instant, expected: &Instant, minutes: f64) {
    let gap = minutes_between(actual, expected);
    assert!(
        gap < minutes,
        "{actual} is {gap:.2} min away from {expected} (allowed {minutes})"
    );
}

pub fn site(latitude: f64, longitude: f64, height: f64) -> Observer {
    Observer::new(latitude, longitude, height).unwrap()
}
