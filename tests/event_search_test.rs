mod common;

use approx::assert_relative_eq;
use common::{assert_within_minutes, site, utc};
use skyseek::{
    astro_errors::AstroError,
    body::{Body, StarSlot},
    constants::{normalize_degrees, AU_PER_LIGHT_YEAR, RADEG},
    coords::{refraction_angle, EquatorEpoch, Refraction},
    light_time::Aberration,
    rotation::rotation_eqd_hor,
    search::{
        eclipse::EclipseKind, relative_longitude::synodic_period, seasons::seasons, Direction, SearchDirection,
    },
    sky::Sky,
    time::Instant,
    vector::AstroVector,
};

#[test]
fn test_moon_culmination_matches_horizontal_pipeline() {
    let sky = Sky::new();
    let observer = site(6.56784, -1.5674, 0.0);
    let start: Instant = "2023-08-22T00:00:00 UTC".parse().unwrap();

    let event = sky
        .search_hour_angle(Body::Moon, &observer, 0.0, &start, SearchDirection::Forward)
        .unwrap();
    assert!(event.time.ut > start.ut && event.time.ut < start.ut + 25.0 / 24.0);

    let eq = sky
        .equator(Body::Moon, &event.time, &observer, EquatorEpoch::OfDate, Aberration::Corrected)
        .unwrap();
    let rot = rotation_eqd_hor(&event.time, &observer, sky.sidereal());
    let hor = rot.apply(&AstroVector::from_xyz(eq.vec, event.time));

    let azimuth = normalize_degrees(-hor.y().atan2(hor.x()) / RADEG);
    let geometric = (hor.z() / hor.length()).asin() / RADEG;
    let altitude = geometric + refraction_angle(Refraction::Normal, geometric);

    assert_relative_eq!(event.hor.azimuth, azimuth, epsilon = 1e-6);
    assert_relative_eq!(event.hor.altitude, altitude, epsilon = 1e-6);
}

#[test]
fn test_defined_star_is_fixed() {
    let mut sky = Sky::new();
    sky.define_star(StarSlot::Star1, 12.0, 45.0, 100.0).unwrap();
    let star = Body::Star(StarSlot::Star1);

    let a = sky.helio_vector(star, &utc(1900, 1, 1, 0, 0)).unwrap();
    let b = sky.helio_vector(star, &utc(2100, 6, 15, 12, 0)).unwrap();
    assert_relative_eq!(a.xyz, b.xyz, epsilon = 1e-9);
    assert_relative_eq!(a.length(), 100.0 * AU_PER_LIGHT_YEAR, max_relative = 1e-12);

    let eq = skyseek::coords::equator_from_vector(&a);
    assert_relative_eq!(eq.ra, 12.0, epsilon = 1e-9);
    assert_relative_eq!(eq.dec, 45.0, epsilon = 1e-9);

    assert!(matches!(
        sky.helio_vector(Body::Star(StarSlot::Star2), &utc(2000, 1, 1, 0, 0)),
        Err(AstroError::UnsupportedBody(_))
    ));
}

#[test]
fn test_sun_rises_before_it_sets() {
    let sky = Sky::new();
    let observer = site(-33.87, 151.21, 20.0);
    let mut t = utc(2024, 9, 1, 12, 0);
    for _ in 0..5 {
        let rise = sky
            .search_rise_set(Body::Sun, &observer, Direction::Rise, &t, 2.0)
            .unwrap()
            .unwrap();
        let set = sky
            .search_rise_set(Body::Sun, &observer, Direction::Set, &rise, 2.0)
            .unwrap()
            .unwrap();
        let day = (set.ut - rise.ut) * 24.0;
        assert!(day > 10.5 && day < 13.5, "{day}");
        t = set;
    }
}

#[test]
fn test_moon_rise_set_alternate() {
    let sky = Sky::new();
    let observer = site(48.85, 2.35, 35.0);
    let mut t = utc(2024, 3, 1, 0, 0);
    for _ in 0..4 {
        let rise = sky
            .search_rise_set(Body::Moon, &observer, Direction::Rise, &t, 3.0)
            .unwrap()
            .unwrap();
        let set = sky
            .search_rise_set(Body::Moon, &observer, Direction::Set, &rise, 3.0)
            .unwrap()
            .unwrap();
        let next_rise = sky
            .search_rise_set(Body::Moon, &observer, Direction::Rise, &set, 3.0)
            .unwrap()
            .unwrap();
        assert!(rise.ut < set.ut && set.ut < next_rise.ut);
        // A lunar day lasts about 24 h 50 min.
        let lunar_day = (next_rise.ut - rise.ut) * 24.0;
        assert!(lunar_day > 23.5 && lunar_day < 26.5, "{lunar_day}");
        t = set;
    }
}

#[test]
fn test_consecutive_lunar_eclipses() {
    let sky = Sky::new();
    let mut eclipse = sky.search_lunar_eclipse(&utc(2025, 1, 1, 0, 0)).unwrap();
    // 2025-03-14 06:58 UTC, total.
    assert_eq!(eclipse.kind, EclipseKind::Total);
    assert_within_minutes(&eclipse.peak, &utc(2025, 3, 14, 6, 58), 5.0);

    eclipse = sky.next_lunar_eclipse(&eclipse.peak).unwrap();
    // 2025-09-07 18:11 UTC, total.
    assert_eq!(eclipse.kind, EclipseKind::Total);
    assert_within_minutes(&eclipse.peak, &utc(2025, 9, 7, 18, 11), 5.0);
}

#[test]
fn test_annular_eclipse_2023() {
    let sky = Sky::new();
    let eclipse = sky.search_global_solar_eclipse(&utc(2023, 9, 1, 0, 0)).unwrap();
    // 2023-10-14 18:00 UTC, annular, greatest eclipse off Nicaragua.
    assert_eq!(eclipse.kind, EclipseKind::Annular);
    assert_within_minutes(&eclipse.peak, &utc(2023, 10, 14, 18, 0), 5.0);
    assert!(eclipse.latitude.unwrap() > 5.0 && eclipse.latitude.unwrap() < 15.0);
}

#[test]
fn test_partial_eclipse_seen_from_london() {
    let sky = Sky::new();
    let london = site(51.48, 0.0, 50.0);
    let eclipse = sky
        .search_local_solar_eclipse(&utc(2025, 1, 1, 0, 0), &london)
        .unwrap();
    // 2025-03-29, maximum around 11:03 UTC.
    assert_eq!(eclipse.kind, EclipseKind::Partial);
    assert_within_minutes(&eclipse.peak.time, &utc(2025, 3, 29, 11, 3), 10.0);
    assert!(eclipse.total_begin.is_none() && eclipse.total_end.is_none());
    assert!(eclipse.partial_begin.time.ut < eclipse.peak.time.ut);
    assert!(eclipse.peak.time.ut < eclipse.partial_end.time.ut);
}

#[test]
fn test_jupiter_conjunction_follows_opposition() {
    let sky = Sky::new();
    let opposition = sky
        .search_relative_longitude(Body::JUPITER, 0.0, &utc(2023, 1, 1, 0, 0))
        .unwrap();
    // 2023-11-03.
    assert_within_minutes(&opposition, &utc(2023, 11, 3, 5, 0), 12.0 * 60.0);

    let conjunction = sky
        .search_relative_longitude(Body::JUPITER, 180.0, &opposition)
        .unwrap();
    let half = synodic_period(Body::JUPITER).unwrap() / 2.0;
    assert!(((conjunction.ut - opposition.ut) / half - 1.0).abs() < 0.05);
    assert!(sky.angle_from_sun(Body::JUPITER, &conjunction).unwrap() < 2.0);
    assert!(sky.angle_from_sun(Body::JUPITER, &opposition).unwrap() > 178.0);
}

#[test]
fn test_seasons_are_ordered_across_years() {
    for year in [1950, 2000, 2031] {
        let s = seasons(year).unwrap();
        assert_eq!(s.mar_equinox.year(), year);
        assert!(s.mar_equinox.ut < s.jun_solstice.ut);
        assert!(s.sep_equinox.ut < s.dec_solstice.ut);
        let summer = s.sep_equinox.ut - s.jun_solstice.ut;
        assert!(summer > 92.0 && summer < 95.0, "{summer}");
    }
}
