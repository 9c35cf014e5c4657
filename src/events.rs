// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Daily solar events
//!
//! [`compute_events`] derives every solar event of one civil day for an
//! [`Observer`]: twilight boundaries, golden and blue hours, sunrise, solar
//! noon, sunset, solar midnight and the day and night spans.
//!
//! ## Which day
//! The day is the **UTC calendar date** containing the instant. All events
//! are solved around the solar transit of that date at the observer's
//! longitude, so far east of Greenwich the sunrise of a date can fall on the
//! previous UTC date, and far west the sunset can fall on the next one.
//!
//! ## Solving a crossing
//! Starting from solar noon, each pass evaluates the Sun's declination and
//! the equation of time at the current estimate and moves the estimate to
//! `transit ∓ H` (rising / setting), where `H` comes from
//! [`hour_angle`](crate::hour_angle). Two passes are enough for the
//! series' accuracy.
//!
//! ## Absence
//! Each field is an [`Occurrence`]. A crossing the Sun never makes on that
//! date is [`Occurrence::DoesNotOccur`] carrying the [`NoCrossing`] reason;
//! one absent event never suppresses the others. Windows and spans are
//! absent when either endpoint is.

use log::debug;
use qtty::{Day, Days, Degrees, Minutes};

use crate::ephemeris::{
    equation_of_time, hour_angle, solar_declination, Depression, NoCrossing, SunDirection,
    SUNRISE_DEPRESSION,
};
use crate::{Instant, InvalidInput, JulianDate, Observer, Period, UnixTime, JD};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Refinement passes per crossing.
const REFINEMENT_PASSES: usize = 2;

/// Either an event, or the reason it does not happen on the date.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Occurrence<T> {
    Occurs(T),
    DoesNotOccur(NoCrossing),
}

impl<T> Occurrence<T> {
    /// The event, if it happens.
    #[inline]
    pub fn occurs(self) -> Option<T> {
        match self {
            Self::Occurs(value) => Some(value),
            Self::DoesNotOccur(_) => None,
        }
    }

    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::DoesNotOccur(_))
    }

    /// Why the event is absent, if it is.
    #[inline]
    pub fn reason(&self) -> Option<NoCrossing> {
        match self {
            Self::Occurs(_) => None,
            Self::DoesNotOccur(reason) => Some(*reason),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Occurrence<U> {
        match self {
            Self::Occurs(value) => Occurrence::Occurs(f(value)),
            Self::DoesNotOccur(reason) => Occurrence::DoesNotOccur(reason),
        }
    }

    /// Pair two occurrences; the first absence wins.
    pub fn zip<U>(self, other: Occurrence<U>) -> Occurrence<(T, U)> {
        match (self, other) {
            (Self::Occurs(a), Occurrence::Occurs(b)) => Occurrence::Occurs((a, b)),
            (Self::DoesNotOccur(reason), _) | (_, Occurrence::DoesNotOccur(reason)) => {
                Occurrence::DoesNotOccur(reason)
            }
        }
    }
}

impl<T> From<Result<T, NoCrossing>> for Occurrence<T> {
    fn from(result: Result<T, NoCrossing>) -> Self {
        match result {
            Ok(value) => Self::Occurs(value),
            Err(reason) => Self::DoesNotOccur(reason),
        }
    }
}

/// Civil, nautical and astronomical crossings on one side of the day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Twilight {
    pub civil: Occurrence<Instant>,
    pub nautical: Occurrence<Instant>,
    pub astronomical: Occurrence<Instant>,
}

impl Twilight {
    pub fn get(&self, depression: Depression) -> Occurrence<Instant> {
        match depression {
            Depression::Civil => self.civil,
            Depression::Nautical => self.nautical,
            Depression::Astronomical => self.astronomical,
        }
    }
}

/// A morning and an evening window (golden or blue hour).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HourWindows {
    pub rising: Occurrence<Period<UnixTime>>,
    pub setting: Occurrence<Period<UnixTime>>,
}

/// All solar events of one UTC calendar date for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventSet {
    /// 00:00 UTC of the date the events belong to.
    pub date: Instant,
    pub dawn: Twilight,
    /// Nautical to civil twilight.
    pub blue_hour: HourWindows,
    /// Civil twilight to sunrise, and sunset to civil twilight.
    pub golden_hour: HourWindows,
    pub sunrise: Occurrence<Instant>,
    /// Upper transit. Always occurs.
    pub solar_noon: Instant,
    pub sunset: Occurrence<Instant>,
    pub dusk: Twilight,
    /// Lower transit following `solar_noon`. Always occurs.
    pub solar_midnight: Instant,
    /// Sunrise to sunset.
    pub day: Occurrence<Period<UnixTime>>,
    /// Civil dusk of this date to civil dawn of the next.
    pub night: Occurrence<Period<UnixTime>>,
    pub sunrise_next_day: Occurrence<Instant>,
}

/// Transit and crossing solver for one UTC date at one location.
#[derive(Debug, Clone, Copy)]
struct SolarDay {
    /// 00:00 UTC of the date.
    midnight_utc: JulianDate,
    latitude: Degrees,
    longitude: Degrees,
}

impl SolarDay {
    fn new(observer: &Observer, midnight_utc: JulianDate) -> Self {
        Self {
            midnight_utc,
            latitude: observer.latitude_deg(),
            longitude: observer.longitude_deg(),
        }
    }

    fn next(&self) -> Self {
        Self {
            midnight_utc: self.midnight_utc + Days::new(1.0),
            ..*self
        }
    }

    /// Instant `minutes` after 00:00 UTC.
    fn at(&self, minutes: Minutes) -> JulianDate {
        self.midnight_utc + minutes.to::<Day>()
    }

    /// Local mean noon, in minutes after 00:00 UTC. Four minutes of time per
    /// degree of longitude.
    fn mean_noon(&self) -> Minutes {
        Minutes::new(720.0 - 4.0 * self.longitude.value())
    }

    /// Apparent transit for a mean-time estimate: mean time minus the
    /// equation of time evaluated at that estimate.
    fn apparent(&self, mean: Minutes) -> Minutes {
        mean - equation_of_time(self.at(mean))
    }

    fn noon(&self) -> Minutes {
        self.apparent(self.mean_noon())
    }

    fn midnight(&self) -> Minutes {
        self.apparent(self.mean_noon() + Minutes::new(720.0))
    }

    fn crossing(
        &self,
        depression: Degrees,
        direction: SunDirection,
    ) -> Result<Minutes, NoCrossing> {
        let mut estimate = self.noon();
        for _ in 0..REFINEMENT_PASSES {
            let jd = self.at(estimate);
            let declination = solar_declination(jd);
            let h = hour_angle(self.latitude, declination, depression)?;
            let transit = self.mean_noon() - equation_of_time(jd);
            let offset = Minutes::new(4.0 * h.value());
            estimate = match direction {
                SunDirection::Rising => transit - offset,
                SunDirection::Setting => transit + offset,
            };
        }
        Ok(estimate)
    }

    fn event(
        &self,
        name: &str,
        depression: Degrees,
        direction: SunDirection,
    ) -> Occurrence<Instant> {
        let result = self
            .crossing(depression, direction)
            .map(|minutes| self.at(minutes).to::<UnixTime>());
        if let Err(reason) = result {
            debug!(
                "{name} does not occur on {} at latitude {}: {reason:?}",
                self.midnight_utc, self.latitude
            );
        }
        result.into()
    }

    fn twilight(&self, direction: SunDirection) -> Twilight {
        let label = match direction {
            SunDirection::Rising => "dawn",
            SunDirection::Setting => "dusk",
        };
        let at = |depression: Depression| {
            self.event(
                &format!("{depression:?} {label}").to_lowercase(),
                depression.degrees(),
                direction,
            )
        };
        Twilight {
            civil: at(Depression::Civil),
            nautical: at(Depression::Nautical),
            astronomical: at(Depression::Astronomical),
        }
    }
}

fn window(start: Occurrence<Instant>, end: Occurrence<Instant>) -> Occurrence<Period<UnixTime>> {
    start.zip(end).map(|(start, end)| Period::new(start, end))
}

/// Solar events of the UTC date containing `instant`, seen from `observer`.
///
/// Fails only on invalid input, before any trigonometry runs. Polar day and
/// polar night are not failures: the affected fields are
/// [`Occurrence::DoesNotOccur`].
///
/// ```
/// use almanac::{compute_events, Instant, Observer};
/// use chrono::{TimeZone, Utc};
///
/// let london = Observer::new(51.5074, -0.1278);
/// let solstice = Instant::from_utc(Utc.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap());
/// let events = compute_events(london, solstice).unwrap();
///
/// let sunrise = events.sunrise.occurs().unwrap();
/// let sunset = events.sunset.occurs().unwrap();
/// assert!(sunrise < events.solar_noon && events.solar_noon < sunset);
/// ```
pub fn compute_events(observer: Observer, instant: Instant) -> Result<EventSet, InvalidInput> {
    observer.validate()?;
    if !instant.is_finite() {
        return Err(InvalidInput::NonFiniteInstant);
    }

    let today = SolarDay::new(&observer, instant.to::<JD>().start_of_day());
    let tomorrow = today.next();

    let dawn = today.twilight(SunDirection::Rising);
    let dusk = today.twilight(SunDirection::Setting);
    let sunrise = today.event("sunrise", SUNRISE_DEPRESSION, SunDirection::Rising);
    let sunset = today.event("sunset", SUNRISE_DEPRESSION, SunDirection::Setting);

    let next_dawn = tomorrow.event(
        "civil dawn",
        Depression::Civil.degrees(),
        SunDirection::Rising,
    );
    let sunrise_next_day = tomorrow.event("sunrise", SUNRISE_DEPRESSION, SunDirection::Rising);

    Ok(EventSet {
        date: today.midnight_utc.to::<UnixTime>(),
        dawn,
        blue_hour: HourWindows {
            rising: window(dawn.nautical, dawn.civil),
            setting: window(dusk.civil, dusk.nautical),
        },
        golden_hour: HourWindows {
            rising: window(dawn.civil, sunrise),
            setting: window(sunset, dusk.civil),
        },
        sunrise,
        solar_noon: today.at(today.noon()).to::<UnixTime>(),
        sunset,
        dusk,
        solar_midnight: today.at(today.midnight()).to::<UnixTime>(),
        day: window(sunrise, sunset),
        night: window(dusk.civil, next_dawn),
        sunrise_next_day,
    })
}
