//! Usage: `cargo run --example quickstart [-- LAT LON [YYYY-MM-DD] [TIMEZONE]]`
//!
//! Prints the solar events and moon phase of one date, localized to
//! `TIMEZONE`. JSON output needs `--features serde`.

use std::error::Error;
use std::process::ExitCode;

use almanac::{compute_events, compute_moon_phase, Instant, Observer, RenderMode, Renderer};
use chrono::{NaiveDate, Utc};

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let latitude: f64 = args.first().map_or(Ok(51.5074), |s| s.parse())?;
    let longitude: f64 = args.get(1).map_or(Ok(-0.1278), |s| s.parse())?;
    let instant = match args.get(2) {
        Some(date) => {
            let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|err| format!("invalid date {date:?}: {err}"))?;
            let midnight = date.and_hms_opt(0, 0, 0).ok_or("invalid date")?;
            Instant::from_utc(midnight.and_utc())
        }
        None => Instant::from_utc(Utc::now()),
    };

    let events = compute_events(Observer::new(latitude, longitude), instant)?;
    let moon = compute_moon_phase(instant);

    let mut renderer = Renderer::new(RenderMode::Localized);
    if let Some(tz) = args.get(3) {
        renderer = renderer.with_timezone(tz.as_str());
    }
    let rendered = renderer.render(&events, &moon);

    #[cfg(feature = "serde")]
    println!("{}", serde_json::to_string_pretty(&rendered)?);
    #[cfg(not(feature = "serde"))]
    println!("{rendered:#?}");

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}
