// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies an epoch counter and encodes how values
//! on it relate to the canonical **Julian Day on the UT axis**.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Date | 0.0 |
//! | [`UnixTime`] | Days since 1970-01-01 | 2 440 587.5 |
//!
//! Civil time is taken as Universal Time: leap seconds are not modelled and
//! no ΔT correction is applied. At the accuracy of the low-order solar series
//! used by the ephemeris (tens of seconds) the difference is invisible.

use super::instant::TimeScale;
use qtty::Days;

/// Julian Date — the identity scale.
///
/// `to_jd(v) = v`, i.e. the quantity *is* a Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Unix Time — time since 1970-01-01T00:00:00 UTC, stored as **days**.
///
/// This is the scale of [`Instant`](crate::Instant): every event the engine
/// produces lives here.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UnixTime;

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
pub(crate) const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

impl TimeScale for UnixTime {
    const LABEL: &'static str = "Unix";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + UNIX_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - UNIX_EPOCH_JD
    }
}

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn jd_unix_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let unix: Time<UnixTime> = jd.to::<UnixTime>();
        assert!((unix.quantity() - Days::new(10_957.5)).abs() < Days::new(1e-10));
        let back: Time<JD> = unix.to::<JD>();
        assert!((back.quantity() - Days::new(2_451_545.0)).abs() < Days::new(1e-10));
    }

    #[test]
    fn unix_epoch_is_jd_2440587_5() {
        let unix_zero = Time::<UnixTime>::new(0.0);
        assert!((unix_zero.julian_day() - Days::new(2_440_587.5)).abs() < Days::new(1e-12));
        assert_eq!(Time::<UnixTime>::from_julian_day(UNIX_EPOCH_JD), unix_zero);
    }

    #[test]
    fn jd_is_the_identity_scale() {
        let jd = Time::<JD>::new(2_460_482.5);
        assert_eq!(jd.julian_day(), jd.quantity());
        assert_eq!(JD::LABEL, "Julian Day:");
    }
}
