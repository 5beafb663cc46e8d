// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised while building civil observation instants.
//!
//! The coordinate pipeline itself is total; only the construction of a
//! [`CivilDateTime`](crate::CivilDateTime) from loose calendar fields can fail.

use thiserror::Error;

pub type CivilTimeResult<T> = Result<T, CivilTimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CivilTimeError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("invalid time of day {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },

    /// The date is so close to the edge of the supported calendar that a
    /// zone correction could push it out of range.
    #[error("date {0} is too close to the limits of the supported calendar")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("UT time of day {hours} h is outside [0, 24)")]
    InvalidTimeOfDay { hours: f64 },

    #[error("zone correction of {hours} h is outside [-24, 24]")]
    ZoneCorrectionOutOfRange { hours: f64 },
}
