//! # Eclipses
//!
//! All three searches step through full or new moons, discard those where the Moon is too
//! far from the ecliptic, and then study a *shadow*: the line through the centres of the
//! Sun and of a shadow-casting body, and how close a target passes to it.
//!
//! For a casting body of radius `R`, a target at signed distance `u` (in units of the
//! Sun–caster distance) beyond the caster along the shadow axis, the umbra and penumbra
//! radii at the target are
//!
//! ```text
//! k = +R☉ − (1 + u)·(R☉ − R)        umbra (negative beyond its tip: annular)
//! p = −R☉ + (1 + u)·(R☉ + R)        penumbra
//! ```
//!
//! and `r` is the target's distance from the axis, all in kilometres.
//!
//! * **Lunar**: the Earth casts, the Moon is the target. The Earth radius is enlarged to
//!   account for the atmosphere.
//! * **Global solar**: the Moon casts, the Earth's centre is the target; at peak the axis is
//!   intersected with the ellipsoid to locate the point of greatest eclipse.
//! * **Local solar**: the Moon casts onto an observer; contact times are zero crossings of
//!   `p − r` and `|k| − r`. Eclipses entirely below the observer's horizon are skipped.
use nalgebra::Vector3;
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    body::Body,
    constants::{
        longitude_offset, Degree, Kilometer, AU, EARTH_AXIS_RATIO, EARTH_ECLIPSE_RADIUS_KM,
        EARTH_EQUATORIAL_RADIUS_KM, EARTH_MEAN_RADIUS_KM, MOON_MEAN_RADIUS_KM, MOON_POLAR_RADIUS_KM,
        RADEG, SECONDS_PER_DAY, SUN_RADIUS_KM,
    },
    coords::{EquatorEpoch, Refraction},
    frames::{Eqd, Eqj},
    light_time::Aberration,
    moon::{geo_moon, moon_ecliptic},
    observer::Observer,
    rotation::rotation_eqj_eqd,
    search::engine::{search, SearchOptions},
    sidereal::sidereal_time,
    sky::Sky,
    time::Instant,
    vector::AstroVector,
};

/// Ecliptic latitude of the Moon above which no eclipse can occur at syzygy, degrees.
const PRUNE_LATITUDE: Degree = 1.8;

/// Half-width of the peak search around a syzygy, days.
const PEAK_WINDOW_DAYS: f64 = 0.03;

/// Half-width of the peak search for a local eclipse, days.
const LOCAL_PEAK_WINDOW_DAYS: f64 = 0.2;

const PARTIAL_WINDOW_DAYS: f64 = 0.2;
const TOTAL_WINDOW_DAYS: f64 = 0.01;

/// Lunations examined before a lunar or global solar search gives up.
const MAX_SYZYGIES: usize = 12;

/// Lunations examined before a local solar search gives up (about forty years).
const MAX_LOCAL_SYZYGIES: usize = 500;

/// Umbra radius below which the observer is considered outside the umbra cone, km.
const UMBRA_BIAS_KM: Kilometer = 0.014;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EclipseKind {
    Penumbral,
    Partial,
    Annular,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LunarEclipseInfo {
    pub kind: EclipseKind,
    pub peak: Instant,
    /// Semi-duration of the penumbral phase, minutes.
    pub sd_penum: f64,
    /// Semi-duration of the partial phase, minutes (0 when penumbral).
    pub sd_partial: f64,
    /// Semi-duration of totality, minutes (0 unless total).
    pub sd_total: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalSolarEclipseInfo {
    pub kind: EclipseKind,
    pub peak: Instant,
    /// Distance between the shadow axis and the Earth's centre at peak, km.
    pub distance: Kilometer,
    /// Geodetic latitude of the point of greatest eclipse; `None` when the axis misses
    /// the Earth.
    pub latitude: Option<Degree>,
    /// Longitude of the point of greatest eclipse, `(-180, 180]`.
    pub longitude: Option<Degree>,
}

/// A contact of a local eclipse and the Sun's altitude at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipseEvent {
    pub time: Instant,
    /// Refracted altitude of the Sun's centre, degrees.
    pub altitude: Degree,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalSolarEclipseInfo {
    pub kind: EclipseKind,
    pub partial_begin: EclipseEvent,
    pub total_begin: Option<EclipseEvent>,
    pub peak: EclipseEvent,
    pub total_end: Option<EclipseEvent>,
    pub partial_end: EclipseEvent,
}

#[derive(Debug, Clone, Copy)]
struct ShadowInfo {
    time: Instant,
    r: Kilometer,
    k: Kilometer,
    p: Kilometer,
    /// Target position relative to the casting body.
    target: AstroVector<Eqj>,
    /// Sun-to-caster vector.
    dir: AstroVector<Eqj>,
}

fn calc_shadow(body_radius_km: Kilometer, time: Instant, target: AstroVector<Eqj>, dir: AstroVector<Eqj>) -> ShadowInfo {
    let u = dir.dot(&target) / dir.dot(&dir);
    let r = AU * (dir.xyz * u - target.xyz).norm();
    let k = SUN_RADIUS_KM - (1.0 + u) * (SUN_RADIUS_KM - body_radius_km);
    let p = -SUN_RADIUS_KM + (1.0 + u) * (SUN_RADIUS_KM + body_radius_km);
    ShadowInfo { time, r, k, p, target, dir }
}

fn kind_from_umbra(k: Kilometer) -> EclipseKind {
    if k > UMBRA_BIAS_KM {
        EclipseKind::Total
    } else {
        EclipseKind::Annular
    }
}

fn not_found(what: &str, near: &Instant) -> AstroError {
    AstroError::NonConvergence(format!("{what} near {near}"))
}

/// Time at which the target passes closest to the shadow axis, searched within
/// `window` days of `center`.
fn peak_shadow<S>(shadow: S, center: &Instant, window: f64) -> Result<ShadowInfo, AstroError>
where
    S: Fn(&Instant) -> Result<ShadowInfo, AstroError>,
{
    let slope = |t: &Instant| -> Result<f64, AstroError> {
        let dt = 1.0 / SECONDS_PER_DAY;
        let before = shadow(&t.add_days(-dt))?;
        let after = shadow(&t.add_days(dt))?;
        Ok((after.r - before.r) / dt)
    };
    let t1 = center.add_days(-window);
    let t2 = center.add_days(window);
    let peak = search(slope, t1, t2, SearchOptions::default())?
        .ok_or_else(|| not_found("shadow peak", center))?;
    shadow(&peak)
}

impl Sky {
    fn earth_shadow(&self, time: &Instant) -> Result<ShadowInfo, AstroError> {
        let s = self.geo_vector(Body::Sun, time, Aberration::Corrected)?;
        let m = geo_moon(time);
        Ok(calc_shadow(EARTH_ECLIPSE_RADIUS_KM, *time, m, -s))
    }

    fn moon_shadow(&self, time: &Instant) -> Result<ShadowInfo, AstroError> {
        let s = self.geo_vector(Body::Sun, time, Aberration::Corrected)?;
        let m = geo_moon(time);
        Ok(calc_shadow(MOON_MEAN_RADIUS_KM, *time, -m, m - s))
    }

    fn local_moon_shadow(&self, time: &Instant, observer: &Observer) -> Result<ShadowInfo, AstroError> {
        let pos = observer.geo_position(time, self.sidereal());
        let s = self.geo_vector(Body::Sun, time, Aberration::Corrected)?;
        let m = geo_moon(time);
        Ok(calc_shadow(MOON_MEAN_RADIUS_KM, *time, pos - m, m - s))
    }

    /// Minutes from the peak to the time the Moon's centre is `radius_limit` km from the
    /// shadow axis, averaged over both sides.
    fn shadow_semi_duration(
        &self,
        center: &Instant,
        radius_limit: Kilometer,
        window_minutes: f64,
    ) -> Result<f64, AstroError> {
        let window = window_minutes / (24.0 * 60.0);
        let before = center.add_days(-window);
        let after = center.add_days(window);
        let t1 = search(
            |t| Ok(radius_limit - self.earth_shadow(t)?.r),
            before,
            *center,
            SearchOptions::default(),
        )?;
        let t2 = search(
            |t| Ok(self.earth_shadow(t)?.r - radius_limit),
            *center,
            after,
            SearchOptions::default(),
        )?;
        match (t1, t2) {
            (Some(t1), Some(t2)) => Ok((t2.ut - t1.ut) * (24.0 * 60.0) / 2.0),
            _ => Err(not_found("shadow contact", center)),
        }
    }

    /// First lunar eclipse after `start`.
    ///
    /// Return
    /// ----------
    /// * [`AstroError::NonConvergence`] if none is found within twelve full moons, which
    ///   cannot happen for a correct lunar model.
    pub fn search_lunar_eclipse(&self, start: &Instant) -> Result<LunarEclipseInfo, AstroError> {
        let mut fmtime = *start;
        for _ in 0..MAX_SYZYGIES {
            let fullmoon = self
                .search_moon_phase(180.0, &fmtime, 40.0)?
                .ok_or_else(|| not_found("full moon", &fmtime))?;

            if moon_ecliptic(&fullmoon).lat.abs() < PRUNE_LATITUDE {
                let shadow = peak_shadow(|t| self.earth_shadow(t), &fullmoon, PEAK_WINDOW_DAYS)?;
                if shadow.r < shadow.p + MOON_MEAN_RADIUS_KM {
                    let mut kind = EclipseKind::Penumbral;
                    let mut sd_partial = 0.0;
                    let mut sd_total = 0.0;
                    let sd_penum = self.shadow_semi_duration(&shadow.time, shadow.p + MOON_MEAN_RADIUS_KM, 200.0)?;

                    if shadow.r < shadow.k + MOON_MEAN_RADIUS_KM {
                        kind = EclipseKind::Partial;
                        sd_partial =
                            self.shadow_semi_duration(&shadow.time, shadow.k + MOON_MEAN_RADIUS_KM, sd_penum)?;
                        if shadow.r + MOON_MEAN_RADIUS_KM < shadow.k {
                            kind = EclipseKind::Total;
                            sd_total =
                                self.shadow_semi_duration(&shadow.time, shadow.k - MOON_MEAN_RADIUS_KM, sd_partial)?;
                        }
                    }
                    debug!(?kind, peak = %shadow.time, "lunar eclipse");
                    return Ok(LunarEclipseInfo {
                        kind,
                        peak: shadow.time,
                        sd_penum,
                        sd_partial,
                        sd_total,
                    });
                }
            }
            fmtime = fullmoon.add_days(10.0);
        }
        Err(not_found("lunar eclipse within twelve full moons", start))
    }

    /// The lunar eclipse following the one that peaked at `prev_peak`.
    pub fn next_lunar_eclipse(&self, prev_peak: &Instant) -> Result<LunarEclipseInfo, AstroError> {
        self.search_lunar_eclipse(&prev_peak.add_days(10.0))
    }

    /// First solar eclipse visible anywhere on Earth after `start`.
    pub fn search_global_solar_eclipse(&self, start: &Instant) -> Result<GlobalSolarEclipseInfo, AstroError> {
        let mut nmtime = *start;
        for _ in 0..MAX_SYZYGIES {
            let newmoon = self
                .search_moon_phase(0.0, &nmtime, 40.0)?
                .ok_or_else(|| not_found("new moon", &nmtime))?;

            if moon_ecliptic(&newmoon).lat.abs() < PRUNE_LATITUDE {
                let shadow = peak_shadow(|t| self.moon_shadow(t), &newmoon, PEAK_WINDOW_DAYS)?;
                if shadow.r < shadow.p + EARTH_MEAN_RADIUS_KM {
                    let info = geoid_intersect(&shadow)?;
                    debug!(kind = ?info.kind, peak = %info.peak, "global solar eclipse");
                    return Ok(info);
                }
            }
            nmtime = newmoon.add_days(10.0);
        }
        Err(not_found("solar eclipse within twelve new moons", start))
    }

    pub fn next_global_solar_eclipse(&self, prev_peak: &Instant) -> Result<GlobalSolarEclipseInfo, AstroError> {
        self.search_global_solar_eclipse(&prev_peak.add_days(10.0))
    }

    fn sun_altitude(&self, time: &Instant, observer: &Observer) -> Result<Degree, AstroError> {
        let eq = self.equator(Body::Sun, time, observer, EquatorEpoch::OfDate, Aberration::Corrected)?;
        Ok(self.horizon(time, observer, eq.ra, eq.dec, Refraction::Normal).altitude)
    }

    fn eclipse_event(&self, time: Instant, observer: &Observer) -> Result<EclipseEvent, AstroError> {
        Ok(EclipseEvent {
            time,
            altitude: self.sun_altitude(&time, observer)?,
        })
    }

    /// Contact time between `t1` and `t2`, where `sign · f(shadow)` crosses zero upward.
    fn local_transition<G>(
        &self,
        observer: &Observer,
        sign: f64,
        f: G,
        t1: Instant,
        t2: Instant,
    ) -> Result<EclipseEvent, AstroError>
    where
        G: Fn(&ShadowInfo) -> f64,
    {
        let time = search(
            |t| Ok(sign * f(&self.local_moon_shadow(t, observer)?)),
            t1,
            t2,
            SearchOptions::default(),
        )?
        .ok_or_else(|| not_found("local eclipse contact", &t1))?;
        self.eclipse_event(time, observer)
    }

    fn local_eclipse(&self, shadow: &ShadowInfo, observer: &Observer) -> Result<LocalSolarEclipseInfo, AstroError> {
        let peak = self.eclipse_event(shadow.time, observer)?;
        let penumbra = |s: &ShadowInfo| s.p - s.r;
        let t1 = shadow.time.add_days(-PARTIAL_WINDOW_DAYS);
        let t2 = shadow.time.add_days(PARTIAL_WINDOW_DAYS);
        let partial_begin = self.local_transition(observer, 1.0, penumbra, t1, shadow.time)?;
        let partial_end = self.local_transition(observer, -1.0, penumbra, shadow.time, t2)?;

        let (kind, total_begin, total_end) = if shadow.r < shadow.k.abs() {
            let umbra = |s: &ShadowInfo| s.k.abs() - s.r;
            let t1 = shadow.time.add_days(-TOTAL_WINDOW_DAYS);
            let t2 = shadow.time.add_days(TOTAL_WINDOW_DAYS);
            (
                kind_from_umbra(shadow.k),
                Some(self.local_transition(observer, 1.0, umbra, t1, shadow.time)?),
                Some(self.local_transition(observer, -1.0, umbra, shadow.time, t2)?),
            )
        } else {
            (EclipseKind::Partial, None, None)
        };

        Ok(LocalSolarEclipseInfo {
            kind,
            partial_begin,
            total_begin,
            peak,
            total_end,
            partial_end,
        })
    }

    /// First solar eclipse seen by `observer` after `start`.
    ///
    /// An eclipse is reported only if the Sun's centre is above the horizon at its
    /// beginning or at its end.
    pub fn search_local_solar_eclipse(
        &self,
        start: &Instant,
        observer: &Observer,
    ) -> Result<LocalSolarEclipseInfo, AstroError> {
        let mut nmtime = *start;
        for _ in 0..MAX_LOCAL_SYZYGIES {
            let newmoon = self
                .search_moon_phase(0.0, &nmtime, 40.0)?
                .ok_or_else(|| not_found("new moon", &nmtime))?;

            if moon_ecliptic(&newmoon).lat.abs() < PRUNE_LATITUDE {
                let shadow = peak_shadow(|t| self.local_moon_shadow(t, observer), &newmoon, LOCAL_PEAK_WINDOW_DAYS)?;
                if shadow.r < shadow.p {
                    let eclipse = self.local_eclipse(&shadow, observer)?;
                    if eclipse.partial_begin.altitude > 0.0 || eclipse.partial_end.altitude > 0.0 {
                        debug!(kind = ?eclipse.kind, peak = %eclipse.peak.time, "local solar eclipse");
                        return Ok(eclipse);
                    }
                }
            }
            nmtime = newmoon.add_days(10.0);
        }
        Err(not_found("local solar eclipse", start))
    }

    pub fn next_local_solar_eclipse(
        &self,
        prev_peak: &Instant,
        observer: &Observer,
    ) -> Result<LocalSolarEclipseInfo, AstroError> {
        self.search_local_solar_eclipse(&prev_peak.add_days(10.0), observer)
    }
}

/// Where the Moon's shadow axis meets the Earth ellipsoid, and the eclipse kind seen there.
fn geoid_intersect(shadow: &ShadowInfo) -> Result<GlobalSolarEclipseInfo, AstroError> {
    let peak = shadow.time;
    let rot = rotation_eqj_eqd(&peak);
    let v = rot.apply(&shadow.dir).xyz;
    let e = rot.apply(&shadow.target).xyz;

    // Work in kilometres, with z stretched so the ellipsoid becomes a sphere.
    let stretch = Vector3::new(AU, AU, AU / EARTH_AXIS_RATIO);
    let v = v.component_mul(&stretch);
    let e = e.component_mul(&stretch);

    let radius = EARTH_EQUATORIAL_RADIUS_KM;
    let a = v.dot(&v);
    let b = -2.0 * v.dot(&e);
    let c = e.dot(&e) - radius * radius;
    let radic = b * b - 4.0 * a * c;

    if radic <= 0.0 {
        return Ok(GlobalSolarEclipseInfo {
            kind: EclipseKind::Partial,
            peak,
            distance: shadow.r,
            latitude: None,
            longitude: None,
        });
    }

    // Nearer intersection, on the day side.
    let u = (-b - radic.sqrt()) / (2.0 * a);
    let px = u * v.x - e.x;
    let py = u * v.y - e.y;
    let pz = (u * v.z - e.z) * EARTH_AXIS_RATIO;

    let proj = px.hypot(py) * EARTH_AXIS_RATIO * EARTH_AXIS_RATIO;
    let latitude = if proj == 0.0 {
        if pz > 0.0 {
            90.0
        } else {
            -90.0
        }
    } else {
        (pz / proj).atan() / RADEG
    };
    let gast = sidereal_time(&peak);
    let longitude = longitude_offset(py.atan2(px) / RADEG - 15.0 * gast);

    // Observer on the axis, back to lunacentric J2000 coordinates.
    let o = AstroVector::<Eqd>::new(px / AU, py / AU, pz / AU, peak);
    let o = rot.inverse().apply(&o) + shadow.target;
    let surface = calc_shadow(MOON_POLAR_RADIUS_KM, peak, o, shadow.dir);
    if !(0.0..=1.0e-6).contains(&surface.r) {
        return Err(AstroError::NonConvergence(format!(
            "geoid intersection lies {} km off the shadow axis",
            surface.r
        )));
    }

    Ok(GlobalSolarEclipseInfo {
        kind: kind_from_umbra(surface.k),
        peak,
        distance: shadow.r,
        latitude: Some(latitude),
        longitude: Some(longitude),
    })
}

#[cfg(test)]
mod eclipse_test {
    use super::*;
    use crate::unit_test_global::SKY_TEST;

    fn minutes(a: &Instant, b: &Instant) -> f64 {
        (a.ut - b.ut).abs() * 1440.0
    }

    #[test]
    fn test_total_lunar_eclipse_2022() {
        let sky = &*SKY_TEST;
        let start = Instant::from_calendar(2022, 10, 1, 0, 0, 0.0).unwrap();
        let e = sky.search_lunar_eclipse(&start).unwrap();
        assert_eq!(e.kind, EclipseKind::Total);
        let expected = Instant::from_calendar(2022, 11, 8, 10, 59, 0.0).unwrap();
        assert!(minutes(&e.peak, &expected) < 5.0);
        // Totality lasted 85 minutes.
        assert!((e.sd_total - 42.5).abs() < 3.0, "{}", e.sd_total);
        assert!(e.sd_penum > e.sd_partial && e.sd_partial > e.sd_total);
    }

    #[test]
    fn test_lunar_eclipses_increase() {
        let sky = &*SKY_TEST;
        let mut e = sky
            .search_lunar_eclipse(&Instant::from_calendar(2020, 1, 1, 0, 0, 0.0).unwrap())
            .unwrap();
        for _ in 0..6 {
            let next = sky.next_lunar_eclipse(&e.peak).unwrap();
            assert!(next.peak.ut > e.peak.ut + 20.0);
            e = next;
        }
    }

    #[test]
    fn test_total_solar_eclipse_2024() {
        let sky = &*SKY_TEST;
        let start = Instant::from_calendar(2024, 3, 1, 0, 0, 0.0).unwrap();
        let e = sky.search_global_solar_eclipse(&start).unwrap();
        assert_eq!(e.kind, EclipseKind::Total);
        let expected = Instant::from_calendar(2024, 4, 8, 18, 17, 0.0).unwrap();
        assert!(minutes(&e.peak, &expected) < 5.0);
        assert!((e.latitude.unwrap() - 25.3).abs() < 1.5);
        assert!((e.longitude.unwrap() + 104.1).abs() < 1.5);
    }

    #[test]
    fn test_total_eclipse_from_dallas() {
        let sky = &*SKY_TEST;
        let dallas = Observer::new(32.78, -96.80, 140.0).unwrap();
        let start = Instant::from_calendar(2024, 3, 1, 0, 0, 0.0).unwrap();
        let e = sky.search_local_solar_eclipse(&start, &dallas).unwrap();
        assert_eq!(e.kind, EclipseKind::Total);
        let expected = Instant::from_calendar(2024, 4, 8, 18, 42, 0.0).unwrap();
        assert!(minutes(&e.peak.time, &expected) < 5.0);
        let (tb, te) = (e.total_begin.unwrap(), e.total_end.unwrap());
        assert!(e.partial_begin.time.ut < tb.time.ut);
        assert!(tb.time.ut < e.peak.time.ut && e.peak.time.ut < te.time.ut);
        assert!(te.time.ut < e.partial_end.time.ut);
        assert!(e.peak.altitude > 50.0);
    }
}
