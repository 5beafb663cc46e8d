// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Right ascension ↔ hour angle at an observer's meridian.
//!
//! Both directions reduce the civil instant to Local Sidereal Time and then
//! subtract: `HA = LST − RA` and `RA = LST − HA`, wrapped into `[0, 24)` h.

use crate::angle::normalize;
use crate::civil::CivilDateTime;
use qtty::{Degrees, HourAngles};

/// LST at an east-positive `longitude` for a local civil instant.
#[inline]
pub fn local_sidereal_time_at(time: &CivilDateTime, longitude: Degrees) -> HourAngles {
    time.to_universal().local_sidereal_time(longitude)
}

/// Hour angle of a target with right ascension `ra`, in `[0, 24)` h.
pub fn right_ascension_to_hour_angle(
    ra: HourAngles,
    time: &CivilDateTime,
    longitude: Degrees,
) -> HourAngles {
    normalize(local_sidereal_time_at(time, longitude) - ra)
}

/// Right ascension of a target with hour angle `ha`, in `[0, 24)` h.
pub fn hour_angle_to_right_ascension(
    ha: HourAngles,
    time: &CivilDateTime,
    longitude: Degrees,
) -> HourAngles {
    normalize(local_sidereal_time_at(time, longitude) - ha)
}
