// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Presentation
//!
//! Maps an [`EventSet`] and a [`MoonPhase`] to a serialisable
//! [`RenderedResult`]. Every response shape is one configuration of a
//! single mapping:
//!
//! - [`RenderMode::Epoch`]: integer seconds or milliseconds since the Unix
//!   epoch, rounded to the nearest unit.
//! - [`RenderMode::Localized`]: RFC 3339 strings with a numeric offset in the
//!   requested IANA zone, whole seconds.
//! - [`Layout::Compact`]: drops the blue hour and the day and night spans.
//!
//! Absent events become `None` and are left out of serialised output. They
//! are never rendered as zero or as an empty string.
//!
//! An unknown timezone identifier is not an error: the result falls back to
//! UTC and sets [`RenderedResult::timezone_fallback`].

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::events::{EventSet, HourWindows, Occurrence, Twilight};
use crate::moon::MoonPhase;
use crate::{Instant, Period, UnixTime};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unit of epoch timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpochUnit {
    #[default]
    Seconds,
    Milliseconds,
}

/// How instants are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RenderMode {
    Epoch(EpochUnit),
    Localized,
}

impl Default for RenderMode {
    fn default() -> Self {
        Self::Epoch(EpochUnit::Seconds)
    }
}

/// Which fields are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Layout {
    /// Every event, window and span.
    #[default]
    Full,
    /// Twilight, golden hour, sunrise, noon, sunset, midnight and the next
    /// sunrise. No blue hour, no day or night span.
    Compact,
}

/// One rendered instant.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum RenderedInstant {
    Epoch(i64),
    Text(String),
}

impl RenderedInstant {
    pub fn as_epoch(&self) -> Option<i64> {
        match self {
            Self::Epoch(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Epoch(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderedTwilight {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub civil: Option<RenderedInstant>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub nautical: Option<RenderedInstant>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub astronomical: Option<RenderedInstant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderedSpan {
    pub start: RenderedInstant,
    pub end: RenderedInstant,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderedWindows {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rising: Option<RenderedSpan>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub setting: Option<RenderedSpan>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderedMoon {
    /// Fraction of the synodic cycle, in `[0, 1)`.
    pub phase: f64,
    pub description: String,
    pub illumination: f64,
}

/// Presentation of one [`EventSet`] and [`MoonPhase`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RenderedResult {
    /// IANA name of the zone actually used.
    pub timezone: String,
    /// A zone was requested but not recognised; UTC was used instead.
    pub timezone_fallback: bool,
    pub dawn: RenderedTwilight,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub blue: Option<RenderedWindows>,
    pub golden: RenderedWindows,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sunrise: Option<RenderedInstant>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub noon: Option<RenderedInstant>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sunset: Option<RenderedInstant>,
    pub dusk: RenderedTwilight,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub midnight: Option<RenderedInstant>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub day: Option<RenderedSpan>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub night: Option<RenderedSpan>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub sunrise_next_day: Option<RenderedInstant>,
    pub moon: RenderedMoon,
}

/// Reusable rendering configuration.
///
/// ```
/// use almanac::{
///     compute_events, compute_moon_phase, Instant, Layout, Observer, RenderMode, Renderer,
/// };
///
/// let instant = Instant::from_unix_seconds(1_718_928_000.0); // 2024-06-21T00:00:00Z
/// let events = compute_events(Observer::new(51.5074, -0.1278), instant).unwrap();
/// let moon = compute_moon_phase(instant);
///
/// let rendered = Renderer::new(RenderMode::Localized)
///     .with_layout(Layout::Compact)
///     .with_timezone("Europe/London")
///     .render(&events, &moon);
///
/// assert!(!rendered.timezone_fallback);
/// assert!(rendered.sunrise.unwrap().as_text().unwrap().ends_with("+01:00"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Renderer {
    mode: RenderMode,
    layout: Layout,
    timezone: Option<String>,
}

impl Renderer {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// IANA zone identifier, e.g. `"Europe/London"`.
    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn render(&self, events: &EventSet, moon: &MoonPhase) -> RenderedResult {
        let (tz, timezone_fallback) = resolve_timezone(self.timezone.as_deref());
        let writer = Writer {
            mode: self.mode,
            tz,
        };
        let full = self.layout == Layout::Full;

        RenderedResult {
            timezone: tz.name().to_string(),
            timezone_fallback,
            dawn: writer.twilight(&events.dawn),
            blue: full.then(|| writer.windows(&events.blue_hour)),
            golden: writer.windows(&events.golden_hour),
            sunrise: writer.occurrence(events.sunrise),
            noon: writer.instant(events.solar_noon),
            sunset: writer.occurrence(events.sunset),
            dusk: writer.twilight(&events.dusk),
            midnight: writer.instant(events.solar_midnight),
            day: if full { writer.span(events.day) } else { None },
            night: if full { writer.span(events.night) } else { None },
            sunrise_next_day: writer.occurrence(events.sunrise_next_day),
            moon: RenderedMoon {
                phase: moon.fraction,
                description: moon.name.label().to_string(),
                illumination: moon.illumination(),
            },
        }
    }
}

/// Render with the [`Layout::Full`] field set.
///
/// A missing or empty `timezone` means UTC. An unrecognised one also means
/// UTC, with `timezone_fallback` set.
pub fn render(
    events: &EventSet,
    moon: &MoonPhase,
    timezone: Option<&str>,
    mode: RenderMode,
) -> RenderedResult {
    let renderer = Renderer::new(mode);
    match timezone {
        Some(id) => renderer.with_timezone(id),
        None => renderer,
    }
    .render(events, moon)
}

fn resolve_timezone(id: Option<&str>) -> (Tz, bool) {
    match id.map(str::trim).filter(|id| !id.is_empty()) {
        None => (Tz::UTC, false),
        Some(id) => match id.parse::<Tz>() {
            Ok(tz) => (tz, false),
            Err(err) => {
                warn!("unknown timezone {id:?} ({err}), rendering in UTC");
                (Tz::UTC, true)
            }
        },
    }
}

struct Writer {
    mode: RenderMode,
    tz: Tz,
}

impl Writer {
    fn instant(&self, instant: Instant) -> Option<RenderedInstant> {
        let Some(utc) = instant.to_utc() else {
            warn!("{instant} is outside the representable date range, omitting it");
            return None;
        };
        Some(self.datetime(utc))
    }

    fn datetime(&self, utc: DateTime<Utc>) -> RenderedInstant {
        match self.mode {
            RenderMode::Epoch(EpochUnit::Seconds) => {
                RenderedInstant::Epoch(utc.round_subsecs(0).timestamp())
            }
            RenderMode::Epoch(EpochUnit::Milliseconds) => {
                RenderedInstant::Epoch(utc.round_subsecs(3).timestamp_millis())
            }
            RenderMode::Localized => RenderedInstant::Text(
                utc.round_subsecs(0)
                    .with_timezone(&self.tz)
                    .to_rfc3339_opts(SecondsFormat::Secs, false),
            ),
        }
    }

    fn occurrence(&self, occurrence: Occurrence<Instant>) -> Option<RenderedInstant> {
        self.instant(occurrence.occurs()?)
    }

    fn span(&self, occurrence: Occurrence<Period<UnixTime>>) -> Option<RenderedSpan> {
        let period = occurrence.occurs()?;
        let Some(utc) = period.to_utc() else {
            warn!("{period} is outside the representable date range, omitting it");
            return None;
        };
        Some(RenderedSpan {
            start: self.datetime(utc.start),
            end: self.datetime(utc.end),
        })
    }

    fn twilight(&self, twilight: &Twilight) -> RenderedTwilight {
        RenderedTwilight {
            civil: self.occurrence(twilight.civil),
            nautical: self.occurrence(twilight.nautical),
            astronomical: self.occurrence(twilight.astronomical),
        }
    }

    fn windows(&self, windows: &HourWindows) -> RenderedWindows {
        RenderedWindows {
            rising: self.span(windows.rising),
            setting: self.span(windows.setting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_events, compute_moon_phase, Observer};

    const LONDON: Observer = Observer::new(51.5074, -0.1278);

    fn solstice() -> Instant {
        Instant::from_unix_seconds(1_718_928_000.0)
    }

    fn london() -> (EventSet, MoonPhase) {
        let events = compute_events(LONDON, solstice()).unwrap();
        (events, compute_moon_phase(solstice()))
    }

    #[test]
    fn unknown_zone_falls_back_to_utc() {
        let (events, moon) = london();
        let rendered = render(&events, &moon, Some("Not/ARealZone"), RenderMode::Localized);
        assert!(rendered.timezone_fallback);
        assert_eq!(rendered.timezone, "UTC");
        let sunrise = rendered.sunrise.unwrap();
        let text = sunrise.as_text().unwrap();
        assert!(text.starts_with("2024-06-21T03:4"), "{text}");
        assert!(text.ends_with("+00:00"), "{text}");
    }

    #[test]
    fn missing_zone_is_utc_without_fallback() {
        let (events, moon) = london();
        for zone in [None, Some(""), Some("  ")] {
            let rendered = render(&events, &moon, zone, RenderMode::Localized);
            assert!(!rendered.timezone_fallback);
            assert_eq!(rendered.timezone, "UTC");
        }
    }

    #[test]
    fn localized_london_uses_summer_offset() {
        let (events, moon) = london();
        let rendered = render(&events, &moon, Some("Europe/London"), RenderMode::Localized);
        assert_eq!(rendered.timezone, "Europe/London");
        let sunrise = rendered.sunrise.unwrap();
        let text = sunrise.as_text().unwrap();
        assert!(text.starts_with("2024-06-21T04:4"), "{text}");
        assert!(text.ends_with("+01:00"), "{text}");
        // Whole seconds, no fraction.
        assert_eq!(text.len(), "2024-06-21T04:43:09+01:00".len());

        let noon = rendered.noon.unwrap();
        assert!(noon.as_text().unwrap().starts_with("2024-06-21T13:0"));
    }

    #[test]
    fn epoch_seconds_and_milliseconds_agree() {
        let (events, moon) = london();
        let seconds = render(&events, &moon, None, RenderMode::Epoch(EpochUnit::Seconds));
        let millis = render(&events, &moon, None, RenderMode::Epoch(EpochUnit::Milliseconds));

        let s = seconds.sunrise.unwrap().as_epoch().unwrap();
        let ms = millis.sunrise.unwrap().as_epoch().unwrap();
        assert!((ms - s * 1000).abs() <= 500);

        let expected = events.sunrise.occurs().unwrap().unix_seconds().value().round() as i64;
        assert_eq!(s, expected);
    }

    #[test]
    fn absent_events_are_omitted() {
        let events = compute_events(Observer::new(75.0, 15.0), solstice()).unwrap();
        let rendered = render(
            &events,
            &compute_moon_phase(solstice()),
            None,
            RenderMode::default(),
        );
        assert_eq!(rendered.sunrise, None);
        assert_eq!(rendered.sunset, None);
        assert_eq!(rendered.dawn.civil, None);
        assert_eq!(rendered.day, None);
        assert_eq!(rendered.night, None);
        assert!(rendered.noon.is_some());
        assert!(rendered.midnight.is_some());
    }

    #[test]
    fn compact_layout_drops_blue_hour_and_spans() {
        let (events, moon) = london();
        let rendered = Renderer::new(RenderMode::default())
            .with_layout(Layout::Compact)
            .render(&events, &moon);
        assert_eq!(rendered.blue, None);
        assert_eq!(rendered.day, None);
        assert_eq!(rendered.night, None);
        assert!(rendered.golden.rising.is_some());
        assert!(rendered.sunrise_next_day.is_some());

        let full = Renderer::new(RenderMode::default()).render(&events, &moon);
        assert!(full.blue.unwrap().rising.is_some());
        assert!(full.day.is_some());
    }

    #[test]
    fn spans_match_their_endpoint_events() {
        let (events, moon) = london();
        let rendered = render(&events, &moon, Some("Europe/London"), RenderMode::Localized);
        let day = rendered.day.unwrap();
        assert_eq!(Some(day.start), rendered.sunrise);
        assert_eq!(Some(day.end), rendered.sunset);

        let blue = rendered.blue.unwrap().rising.unwrap();
        assert_eq!(Some(blue.start), rendered.dawn.nautical);
        assert_eq!(Some(blue.end), rendered.dawn.civil);
    }

    #[test]
    fn unrepresentable_instants_are_omitted() {
        let far_future = Instant::new(1.0e9);
        let events = compute_events(LONDON, far_future).unwrap();
        let rendered = render(
            &events,
            &compute_moon_phase(far_future),
            None,
            RenderMode::default(),
        );
        assert_eq!(rendered.noon, None);
        assert_eq!(rendered.midnight, None);
    }

    #[test]
    fn moon_is_rendered_with_label() {
        let (events, moon) = london();
        let rendered = render(&events, &moon, None, RenderMode::default());
        assert_eq!(rendered.moon.description, moon.name.label());
        assert_eq!(rendered.moon.phase, moon.fraction);
        assert!((0.0..=1.0).contains(&rendered.moon.illumination));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_skips_absent_fields() {
        let (events, moon) = london();
        let rendered = render(&events, &moon, Some("Europe/London"), RenderMode::default());
        let json = serde_json::to_value(&rendered).unwrap();

        assert_eq!(json["timezone"], "Europe/London");
        assert_eq!(json["timezoneFallback"], false);
        assert!(json["sunrise"].is_i64());
        assert!(json["sunriseNextDay"].is_i64());
        assert!(json["dawn"]["civil"].is_i64());
        // No astronomical twilight in London at midsummer.
        assert!(json["dawn"].get("astronomical").is_none());
        assert!(json["golden"]["rising"]["start"].is_i64());
        assert!(json["moon"]["description"].is_string());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_localized_uses_strings() {
        let (events, moon) = london();
        let rendered = render(&events, &moon, Some("Not/ARealZone"), RenderMode::Localized);
        let json = serde_json::to_value(&rendered).unwrap();
        assert_eq!(json["timezoneFallback"], true);
        assert!(json["night"]["start"].as_str().unwrap().ends_with("+00:00"));
    }
}
