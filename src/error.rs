// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use thiserror::Error;

/// Inputs rejected before any ephemeris work is attempted.
///
/// Coordinates are never clamped: an out-of-range value fails the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    #[error("latitude {0} is outside [-90, 90] degrees")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} is outside [-180, 180] degrees")]
    LongitudeOutOfRange(f64),

    #[error("instant is not a finite time value")]
    NonFiniteInstant,
}
