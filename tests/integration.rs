use almanac::{
    compute_events, compute_moon_phase, moon_phase_fraction, render, Depression, EpochUnit,
    Instant, InvalidInput, NoCrossing, Observer, Occurrence, RenderMode, SYNODIC_MONTH,
};
use chrono::{TimeZone, Utc};
use qtty::Days;

fn utc(y: i32, m: u32, d: u32) -> Instant {
    Instant::from_utc(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
}

fn london() -> Observer {
    Observer::new(51.5074, -0.1278)
}

#[test]
fn london_solstice_has_every_daily_event() {
    let instant = utc(2024, 6, 21);
    let events = compute_events(london(), instant).unwrap();

    let sunrise = events.sunrise.occurs().unwrap();
    let sunset = events.sunset.occurs().unwrap();
    assert!(sunrise < events.solar_noon);
    assert!(events.solar_noon < sunset);
    assert!(events.solar_noon < events.solar_midnight);
    assert!(events.day.occurs().is_some());
    assert!(events.night.occurs().is_some());

    let a = compute_moon_phase(instant);
    let b = compute_moon_phase(instant);
    assert_eq!(a, b);
}

#[test]
fn twilight_ordering_across_a_year() {
    let observer = Observer::new(40.4168, -3.7038);
    for day in (0..365).step_by(7) {
        let instant = utc(2024, 1, 1) + Days::new(day as f64);
        let events = compute_events(observer, instant).unwrap();
        let chain = [
            events.dawn.get(Depression::Astronomical),
            events.dawn.get(Depression::Nautical),
            events.dawn.get(Depression::Civil),
            events.sunrise,
            Occurrence::Occurs(events.solar_noon),
            events.sunset,
            events.dusk.get(Depression::Civil),
            events.dusk.get(Depression::Nautical),
            events.dusk.get(Depression::Astronomical),
        ];
        let times: Vec<Instant> = chain.into_iter().filter_map(Occurrence::occurs).collect();
        assert_eq!(times.len(), chain.len(), "day {day}");
        assert!(times.windows(2).all(|w| w[0] <= w[1]), "day {day}");
    }
}

#[test]
fn blue_hour_ends_before_golden_hour_starts() {
    let observer = Observer::new(-33.8688, 151.2093);
    for day in (0..365).step_by(30) {
        let events = compute_events(observer, utc(2024, 1, 1) + Days::new(day as f64)).unwrap();
        let blue = events.blue_hour.rising.occurs().unwrap();
        let golden = events.golden_hour.rising.occurs().unwrap();
        let sunrise = events.sunrise.occurs().unwrap();
        assert!(blue.start < blue.end, "day {day}");
        assert!(blue.end <= golden.start, "day {day}");
        assert!(golden.start < golden.end, "day {day}");
        assert_eq!(golden.end, sunrise, "day {day}");
        assert_eq!(events.dawn.get(Depression::Nautical), Occurrence::Occurs(blue.start));
    }
}

#[test]
fn high_arctic_midsummer_has_no_civil_twilight() {
    let events = compute_events(Observer::new(75.0, 0.0), utc(2024, 6, 21)).unwrap();
    assert_eq!(
        events.dawn.civil,
        Occurrence::DoesNotOccur(NoCrossing::SunAlwaysAbove)
    );
    assert!(events.dusk.civil.is_absent());
    assert!(events.night.is_absent());

    let rendered = render(
        &events,
        &compute_moon_phase(utc(2024, 6, 21)),
        None,
        RenderMode::default(),
    );
    assert_eq!(rendered.dawn.civil, None);
    assert!(rendered.noon.is_some());
}

#[test]
fn out_of_range_latitude_is_rejected() {
    let result = compute_events(Observer::new(91.0, 0.0), utc(2024, 6, 21));
    assert_eq!(result, Err(InvalidInput::LatitudeOutOfRange(91.0)));
}

#[test]
fn moon_phase_repeats_every_synodic_month() {
    let t = utc(2024, 6, 21);
    let a = moon_phase_fraction(t);
    let b = moon_phase_fraction(t + SYNODIC_MONTH);
    let d = (a - b).rem_euclid(1.0);
    assert!(d.min(1.0 - d) < 1e-9);
}

#[test]
fn unknown_timezone_degrades_to_utc() {
    let instant = utc(2024, 6, 21);
    let events = compute_events(london(), instant).unwrap();
    let rendered = render(
        &events,
        &compute_moon_phase(instant),
        Some("Not/ARealZone"),
        RenderMode::Localized,
    );
    assert!(rendered.timezone_fallback);
    assert_eq!(rendered.timezone, "UTC");

    let epoch = render(
        &events,
        &compute_moon_phase(instant),
        Some("Europe/London"),
        RenderMode::Epoch(EpochUnit::Seconds),
    );
    assert!(!epoch.timezone_fallback);
    assert!(epoch.sunrise.unwrap().as_epoch().unwrap() > 1_718_928_000);
}

#[cfg(feature = "serde")]
#[test]
fn rendered_result_serializes_to_camel_case_json() {
    let instant = utc(2024, 6, 21);
    let events = compute_events(london(), instant).unwrap();
    let rendered = render(
        &events,
        &compute_moon_phase(instant),
        Some("Europe/London"),
        RenderMode::Localized,
    );
    let json = serde_json::to_string(&rendered).unwrap();
    assert!(json.contains("\"timezoneFallback\":false"));
    assert!(json.contains("\"sunriseNextDay\""));
    assert!(json.contains("+01:00"));
}
