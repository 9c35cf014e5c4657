// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! Golden and blue hour windows, the day span and the night span are all
//! [`Period<UnixTime>`](Period): a start and an end on the same time scale.
//!
//! - [`Interval<T>`]: generic interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`
//! - [`UtcPeriod`]: the same interval bridged to `chrono`, used when
//!   rendering windows and spans

use super::{Time, TimeInstant, TimeScale};
use chrono::{DateTime, Utc};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents an interval between two instants.
///
/// # Examples
///
/// ```
/// use almanac::{Instant, Interval};
/// use qtty::Days;
///
/// let start = Instant::new(19_895.0);
/// let end = Instant::new(19_895.5);
/// let period = Interval::new(start, end);
///
/// assert_eq!(period.duration(), Days::new(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias: `Period<UnixTime>`, `Period<JD>`, ...
pub type Period<S> = Interval<Time<S>>;

/// UTC interval alias.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new period between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the period as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `instant` lies in the half-open range `[start, end)`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Both endpoints as UTC date-times, or `None` if either is not
    /// representable by chrono.
    pub fn to_utc(&self) -> Option<UtcPeriod> {
        Some(Interval::new(self.start.to_utc()?, self.end.to_utc()?))
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Convert both endpoints to another time scale.
    #[inline]
    pub fn to<T: TimeScale>(&self) -> Period<T> {
        Interval::new(self.start.to::<T>(), self.end.to::<T>())
    }
}

impl<T: TimeInstant<Duration = Days>> Interval<T> {
    /// Length of the period in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration().value() * 24.0
    }
}
