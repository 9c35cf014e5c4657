// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Solar ephemeris
//!
//! Low-order analytical series for the Sun's apparent position, in the form
//! published by the NOAA Global Monitoring Laboratory solar calculator
//! (itself a reduction of Meeus, *Astronomical Algorithms*, ch. 25 and 28):
//! mean longitude and anomaly, equation of the centre, apparent longitude,
//! and obliquity corrected for the leading nutation term.
//!
//! ## Accuracy
//! About 0.01° in declination and a few seconds of time in the equation of
//! time for dates within a few centuries of J2000. Event times derived from
//! these quantities are good to well under one minute at mid latitudes;
//! near the polar circles a small declination error moves a grazing
//! crossing by several minutes. This is not a perturbation theory and makes
//! no arc-second claims.
//!
//! ## Depression angles
//! Every altitude threshold the engine uses is a named constant here, not an
//! ambient default:
//!
//! | Threshold | Depression below the horizon |
//! |-----------|------------------------------|
//! | [`SUNRISE_DEPRESSION`] | 50′ (34′ refraction + 16′ semidiameter) |
//! | [`Depression::Civil`] | 6° |
//! | [`Depression::Nautical`] | 12° |
//! | [`Depression::Astronomical`] | 18° |
//!
//! Golden hour spans sunrise/sunset to the civil crossing, blue hour the
//! civil to the nautical crossing.

use qtty::{Degrees, Minutes};

use crate::JulianDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sunrise/sunset depression: the upper limb touches a horizon lifted by
/// standard refraction, i.e. the centre sits 0.8333° below it.
pub const SUNRISE_DEPRESSION: Degrees = Degrees::new(50.0 / 60.0);

/// Twilight classes by the depression of the Sun's centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Depression {
    Civil,
    Nautical,
    Astronomical,
}

impl Depression {
    pub const ALL: [Depression; 3] = [
        Depression::Civil,
        Depression::Nautical,
        Depression::Astronomical,
    ];

    /// Depression angle below the geometric horizon.
    pub const fn degrees(self) -> Degrees {
        match self {
            Self::Civil => Degrees::new(6.0),
            Self::Nautical => Degrees::new(12.0),
            Self::Astronomical => Degrees::new(18.0),
        }
    }
}

/// Which horizon crossing of the day an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SunDirection {
    Rising,
    Setting,
}

/// The Sun never reaches the requested altitude on the given date.
///
/// This is the polar-day / polar-night outcome, not a computation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NoCrossing {
    /// The Sun stays above the threshold all day (midnight sun for that altitude).
    SunAlwaysAbove,
    /// The Sun stays below the threshold all day (polar night for that altitude).
    SunAlwaysBelow,
}

/// Apparent solar coordinates at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub declination: Degrees,
    /// Apparent right ascension in `[0, 360)`.
    pub right_ascension: Degrees,
    /// Apparent minus mean solar time.
    pub equation_of_time: Minutes,
}

// ── NOAA series (argument: Julian centuries since J2000) ──────────────────

fn mean_longitude(t: f64) -> f64 {
    (280.46646 + t * (36_000.76983 + t * 0.000_303_2)).rem_euclid(360.0)
}

fn mean_anomaly(t: f64) -> f64 {
    357.52911 + t * (35_999.05029 - t * 0.000_153_7)
}

fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7)
}

fn equation_of_center(t: f64) -> f64 {
    let m = mean_anomaly(t).to_radians();
    m.sin() * (1.914_602 - t * (0.004_817 + t * 0.000_014))
        + (2.0 * m).sin() * (0.019_993 - t * 0.000_101)
        + (3.0 * m).sin() * 0.000_289
}

/// Longitude of the Moon's ascending node, driving the leading nutation term.
fn node_longitude(t: f64) -> f64 {
    125.04 - 1_934.136 * t
}

fn apparent_longitude(t: f64) -> f64 {
    let true_longitude = mean_longitude(t) + equation_of_center(t);
    true_longitude - 0.005_69 - 0.004_78 * node_longitude(t).to_radians().sin()
}

fn obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813));
    let mean = 23.0 + (26.0 + seconds / 60.0) / 60.0;
    mean + 0.002_56 * node_longitude(t).to_radians().cos()
}

/// Apparent position of the Sun at `jd`.
pub fn solar_position(jd: JulianDate) -> SolarPosition {
    let t = jd.julian_centuries().value();

    let epsilon = obliquity(t).to_radians();
    let lambda = apparent_longitude(t).to_radians();

    let declination = (epsilon.sin() * lambda.sin()).asin().to_degrees();
    let right_ascension = (epsilon.cos() * lambda.sin())
        .atan2(lambda.cos())
        .to_degrees()
        .rem_euclid(360.0);

    let y = (epsilon / 2.0).tan().powi(2);
    let l0 = mean_longitude(t).to_radians();
    let m = mean_anomaly(t).to_radians();
    let e = eccentricity(t);
    let eot_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    SolarPosition {
        declination: Degrees::new(declination),
        right_ascension: Degrees::new(right_ascension),
        // One degree of hour angle is four minutes of time.
        equation_of_time: Minutes::new(4.0 * eot_rad.to_degrees()),
    }
}

/// Apparent declination of the Sun.
#[inline]
pub fn solar_declination(jd: JulianDate) -> Degrees {
    solar_position(jd).declination
}

/// Apparent right ascension of the Sun, in `[0, 360)` degrees.
#[inline]
pub fn solar_right_ascension(jd: JulianDate) -> Degrees {
    solar_position(jd).right_ascension
}

/// Equation of time (apparent − mean solar time).
///
/// Positive when a sundial runs ahead of the clock (early November peak of
/// about +16.4 min), negative in mid February (about −14.2 min).
#[inline]
pub fn equation_of_time(jd: JulianDate) -> Minutes {
    solar_position(jd).equation_of_time
}

/// Hour angle at which the Sun's centre sits `depression` below the horizon.
///
/// Solves `cos H = (sin(−d) − sin φ sin δ) / (cos φ cos δ)` and returns `H`
/// in `[0, 180]` degrees. When the right-hand side leaves `[-1, 1]` the
/// altitude is never reached on that date and the side it stays on is
/// reported as [`NoCrossing`].
///
/// ```
/// use almanac::{hour_angle, Depression, NoCrossing};
/// use qtty::Degrees;
///
/// // 75°N at the June solstice: civil twilight never ends.
/// let h = hour_angle(Degrees::new(75.0), Degrees::new(23.44), Depression::Civil.degrees());
/// assert_eq!(h, Err(NoCrossing::SunAlwaysAbove));
/// ```
pub fn hour_angle(
    latitude: Degrees,
    declination: Degrees,
    depression: Degrees,
) -> Result<Degrees, NoCrossing> {
    let phi = latitude.value().to_radians();
    let delta = declination.value().to_radians();
    let target_altitude = -depression.value();

    let denominator = phi.cos() * delta.cos();
    if denominator.abs() < 1e-12 {
        // At a pole the Sun circles at constant altitude for the whole day.
        let altitude = latitude.value().signum() * declination.value();
        return Err(if altitude > target_altitude {
            NoCrossing::SunAlwaysAbove
        } else {
            NoCrossing::SunAlwaysBelow
        });
    }

    let cos_h = (target_altitude.to_radians().sin() - phi.sin() * delta.sin()) / denominator;
    if cos_h > 1.0 {
        Err(NoCrossing::SunAlwaysBelow)
    } else if cos_h < -1.0 {
        Err(NoCrossing::SunAlwaysAbove)
    } else {
        Ok(Degrees::new(cos_h.acos().to_degrees()))
    }
}
