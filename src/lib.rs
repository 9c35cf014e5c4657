// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Almanac
//!
//! Daily solar events and lunar phase for a place on Earth, computed from
//! low-order analytical series.
//!
//! # Entry points
//!
//! - [`compute_events`] — twilight, golden and blue hours, sunrise, solar
//!   noon, sunset, solar midnight, day and night spans for the UTC date of an
//!   instant.
//! - [`compute_moon_phase`] — position in the synodic cycle with its
//!   qualitative name.
//! - [`render`] / [`Renderer`] — epoch or localized presentation of both.
//!
//! # Core types
//!
//! - [`Time<S>`] — generic instant parameterised by a [`TimeScale`] marker.
//! - [`Instant`] — type alias for `Time<UnixTime>`, the scale every event
//!   is reported on.
//! - [`JulianDate`] — type alias for `Time<JD>`, the scale every formula
//!   works on.
//! - [`Period<S>`] / [`Interval<T>`] — windows and spans.
//! - [`Occurrence<T>`] — an event, or the [`NoCrossing`] reason it does
//!   not happen.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`UnixTime`] | Unix / POSIX time |
//!
//! Both count days on the Universal Time axis and differ by a constant
//! offset. UTC is taken as UT: no leap seconds and no ΔT.
//!
//! # Example
//!
//! ```
//! use almanac::{compute_events, compute_moon_phase, render, Instant, Observer, RenderMode};
//!
//! let instant = Instant::from_unix_seconds(1_718_928_000.0); // 2024-06-21T00:00:00Z
//! let events = compute_events(Observer::new(51.5074, -0.1278), instant)?;
//! let moon = compute_moon_phase(instant);
//!
//! let rendered = render(&events, &moon, Some("Europe/London"), RenderMode::Localized);
//! assert_eq!(rendered.moon.description, "Full Moon");
//! # Ok::<(), almanac::InvalidInput>(())
//! ```

mod ephemeris;
mod error;
mod events;
pub(crate) mod instant;
mod julian_date_ext;
mod moon;
mod observer;
mod period;
mod render;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use ephemeris::{
    equation_of_time, hour_angle, solar_declination, solar_position, solar_right_ascension,
    Depression, NoCrossing, SolarPosition, SunDirection, SUNRISE_DEPRESSION,
};
pub use error::InvalidInput;
pub use events::{compute_events, EventSet, HourWindows, Occurrence, Twilight};
pub use instant::{Time, TimeInstant, TimeScale};
pub use julian_date_ext::CalendarDate;
pub use moon::{
    compute_moon_phase, moon_phase_fraction, MoonPhase, MoonPhaseName, REFERENCE_NEW_MOON,
    SYNODIC_MONTH,
};
pub use observer::Observer;
pub use period::{Interval, Period, UtcPeriod};
pub use render::{
    render, EpochUnit, Layout, RenderMode, RenderedInstant, RenderedMoon, RenderedResult,
    RenderedSpan, RenderedTwilight, RenderedWindows, Renderer,
};
pub use scales::{UnixTime, JD};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`]. Calendar conversions and the
/// J2000 epoch live on it (`JulianDate::from_calendar`, `JulianDate::J2000`,
/// `.julian_centuries()`, …).
pub type JulianDate = Time<JD>;

/// An absolute point in time with no attached zone.
///
/// This is a type alias for [`Time<UnixTime>`]: days since
/// 1970-01-01T00:00:00 UTC.
pub type Instant = Time<UnixTime>;
