// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic observer.

use qtty::Degrees;

use crate::InvalidInput;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geographic location on Earth's surface.
///
/// Plain value; construction never fails. Range checks happen in
/// [`Observer::validate`], which [`compute_events`](crate::compute_events)
/// runs before touching any trigonometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude: f64,
}

impl Observer {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    #[inline]
    pub fn latitude_deg(&self) -> Degrees {
        Degrees::new(self.latitude)
    }

    #[inline]
    pub fn longitude_deg(&self) -> Degrees {
        Degrees::new(self.longitude)
    }

    /// Reject coordinates outside their geographic range (NaN included).
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(InvalidInput::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(InvalidInput::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_boundaries() {
        assert!(Observer::new(90.0, 180.0).validate().is_ok());
        assert!(Observer::new(-90.0, -180.0).validate().is_ok());
        assert!(Observer::new(51.5074, -0.1278).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        assert_eq!(
            Observer::new(91.0, 0.0).validate(),
            Err(InvalidInput::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Observer::new(-90.0001, 0.0).validate(),
            Err(InvalidInput::LatitudeOutOfRange(-90.0001))
        );
    }

    #[test]
    fn rejects_out_of_range_longitude() {
        assert_eq!(
            Observer::new(0.0, 180.5).validate(),
            Err(InvalidInput::LongitudeOutOfRange(180.5))
        );
    }

    #[test]
    fn rejects_nan_coordinates() {
        assert!(matches!(
            Observer::new(f64::NAN, 0.0).validate(),
            Err(InvalidInput::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            Observer::new(0.0, f64::INFINITY).validate(),
            Err(InvalidInput::LongitudeOutOfRange(_))
        ));
    }
}
