// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lunar phase from a mean synodic-cycle model.
//!
//! The phase fraction is the time elapsed since a reference mean new moon,
//! modulo the mean synodic month. It ignores the periodic terms of the
//! lunar orbit, so actual new/full moons can differ from the model by up
//! to about 14 hours. It depends only on the instant, never on the observer.

use qtty::{Days, Simplify};
use std::f64::consts::TAU;
use std::fmt;

use crate::{Instant, JulianDate, Time, TimeScale};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mean new moon of 2000-01-06 (Meeus, eq. 49.1 with k = 0).
pub const REFERENCE_NEW_MOON: JulianDate = JulianDate::new(2_451_550.097_66);

/// Mean length of the lunation.
pub const SYNODIC_MONTH: Days = Days::new(29.530_588_853);

/// Qualitative phase names, one per eighth of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoonPhaseName {
    #[cfg_attr(feature = "serde", serde(rename = "New Moon"))]
    NewMoon,
    #[cfg_attr(feature = "serde", serde(rename = "Waxing Crescent"))]
    WaxingCrescent,
    #[cfg_attr(feature = "serde", serde(rename = "First Quarter"))]
    FirstQuarter,
    #[cfg_attr(feature = "serde", serde(rename = "Waxing Gibbous"))]
    WaxingGibbous,
    #[cfg_attr(feature = "serde", serde(rename = "Full Moon"))]
    FullMoon,
    #[cfg_attr(feature = "serde", serde(rename = "Waning Gibbous"))]
    WaningGibbous,
    #[cfg_attr(feature = "serde", serde(rename = "Last Quarter"))]
    LastQuarter,
    #[cfg_attr(feature = "serde", serde(rename = "Waning Crescent"))]
    WaningCrescent,
}

impl MoonPhaseName {
    const BANDS: [MoonPhaseName; 8] = [
        MoonPhaseName::NewMoon,
        MoonPhaseName::WaxingCrescent,
        MoonPhaseName::FirstQuarter,
        MoonPhaseName::WaxingGibbous,
        MoonPhaseName::FullMoon,
        MoonPhaseName::WaningGibbous,
        MoonPhaseName::LastQuarter,
        MoonPhaseName::WaningCrescent,
    ];

    /// Name of the 1/8-wide band containing `fraction`.
    ///
    /// Bands are centred on multiples of 1/8, so New Moon covers
    /// `[15/16, 1) ∪ [0, 1/16)` and Full Moon covers `[7/16, 9/16)`.
    pub fn from_fraction(fraction: f64) -> Self {
        let index = (fraction.rem_euclid(1.0) * 8.0 + 0.5).floor() as usize % 8;
        Self::BANDS[index]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position within the lunation at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoonPhase {
    /// Fraction of the cycle elapsed since new moon, in `[0, 1)`.
    pub fraction: f64,
    pub name: MoonPhaseName,
}

impl MoonPhase {
    pub fn from_fraction(fraction: f64) -> Self {
        Self {
            fraction,
            name: MoonPhaseName::from_fraction(fraction),
        }
    }

    /// Days since the last mean new moon.
    pub fn age(&self) -> Days {
        SYNODIC_MONTH * self.fraction
    }

    /// Illuminated fraction of the disc, assuming a circular orbit.
    pub fn illumination(&self) -> f64 {
        (1.0 - (TAU * self.fraction).cos()) / 2.0
    }
}

/// Fraction of the synodic cycle elapsed at `instant`, in `[0, 1)`.
pub fn moon_phase_fraction<S: TimeScale>(instant: Time<S>) -> f64 {
    let elapsed = Days::new(instant.julian_day().value() - REFERENCE_NEW_MOON.value());
    let fraction = (elapsed / SYNODIC_MONTH).simplify().value().rem_euclid(1.0);
    // rem_euclid rounds tiny negative remainders up to exactly 1.0.
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Lunar phase at `instant`. Any instant is accepted.
pub fn compute_moon_phase(instant: Instant) -> MoonPhase {
    MoonPhase::from_fraction(moon_phase_fraction(instant))
}
