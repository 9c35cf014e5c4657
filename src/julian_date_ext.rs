// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.
//!
//! Calendar conversions follow Meeus, *Astronomical Algorithms* (2nd ed.),
//! chapter 7, restricted to the proleptic Gregorian calendar.

use qtty::*;

use super::instant::Time;
use super::scales::JD;

/// A proleptic Gregorian calendar date with a fractional day.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalendarDate {
    pub year: i32,
    /// Month number, `1..=12`.
    pub month: u32,
    /// Day of month including the fraction of the day elapsed since 00:00.
    pub day: f64,
}

impl CalendarDate {
    /// Whole day of the month.
    #[inline]
    pub fn day_of_month(&self) -> u32 {
        self.day.floor() as u32
    }
}

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0, the time argument of the solar series.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Julian Date of a Gregorian calendar date; `day` may carry a fraction.
    ///
    /// ```
    /// use almanac::JulianDate;
    ///
    /// let jd = JulianDate::from_calendar(2000, 1, 1.5);
    /// assert_eq!(jd, JulianDate::J2000);
    /// ```
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Self {
        let (y, m) = if month <= 2 {
            (year as f64 - 1.0, month as f64 + 12.0)
        } else {
            (year as f64, month as f64)
        };
        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();
        Self::new(
            (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5,
        )
    }

    /// Gregorian calendar date containing this Julian Date.
    ///
    /// Inverse of [`from_calendar`](Self::from_calendar) for any non-negative
    /// Julian Day.
    pub fn to_calendar(&self) -> CalendarDate {
        let shifted = self.value() + 0.5;
        let z = shifted.floor();
        let f = shifted - z;
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

        CalendarDate {
            year: year as i32,
            month: month as u32,
            day,
        }
    }

    /// Julian Date of 00:00 UT on the civil date containing this instant.
    #[inline]
    pub fn start_of_day(&self) -> Self {
        Self::new((self.value() + 0.5).floor() - 0.5)
    }
}
