// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Alt-Az
//!
//! Positional-astronomy primitives for turning a star's right ascension and
//! declination into altitude and azimuth for an observer on Earth.
//!
//! # Pipeline
//!
//! ```text
//! CivilDateTime ─▶ UniversalTime ─▶ JulianDate ─▶ GST ─▶ LST
//!                                                         │
//!                         EquatorialCoordinate ─▶ hour angle ─▶ HorizonCoordinate
//! ```
//!
//! # Core types
//!
//! - [`Sexagesimal<U>`] — sign-carrying `±major minor second` angle in a
//!   [`SexagesimalUnit`]; see [`HmsAngle`] and [`DmsAngle`].
//! - [`CivilDateTime`] — local wall-clock instant with DST flag and zone
//!   correction.
//! - [`UniversalTime`] — Greenwich date plus UT time of day.
//! - [`JulianDate`] — continuous day count used by the sidereal formulas.
//! - [`EquatorialCoordinate`] / [`HorizonCoordinate`] — sky positions.
//! - [`Observer`] — a [`GeographicLocation`] at one instant; maps catalog
//!   rows to [`Sighting`]s.
//!
//! # Functions
//!
//! | Step | Function |
//! |------|----------|
//! | GST at 0h UT | [`greenwich_sidereal_time_at_midnight`] |
//! | GST | [`greenwich_sidereal_time`], [`UniversalTime::greenwich_sidereal_time`] |
//! | LST | [`local_sidereal_time`], [`local_sidereal_time_at`] |
//! | LST → GST → UT | [`greenwich_from_local`], [`universal_from_greenwich`] |
//! | RA ↔ HA | [`right_ascension_to_hour_angle`], [`hour_angle_to_right_ascension`] |
//! | HA, Dec ↔ Alt, Az | [`equatorial_to_horizon`], [`horizon_to_equatorial`] |
//!
//! Longitudes are east-positive, zone corrections are hours east of
//! Greenwich, and azimuth runs from north through east.  Hour angles and
//! sidereal times are normalised into `[0, 24)` h, azimuths into
//! `[0, 360)`°.
//!
//! # Quick Example
//!
//! ```rust
//! use altaz::{right_ascension_to_hour_angle, CivilDateTime, HmsAngle};
//! use qtty::{Degrees, Hours};
//!
//! let time = CivilDateTime::new(1980, 4, 22, 14, 36, 51.67)
//!     .unwrap()
//!     .with_zone_correction(Hours::new(-4.0))
//!     .unwrap();
//! let ra = HmsAngle::from_parts(18, 32, 21.0).to_quantity();
//! let ha = right_ascension_to_hour_angle(ra, &time, Degrees::new(-64.0));
//! assert_eq!(format!("{}", HmsAngle::from(ha)), "+9h52m23.66s");
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every public value type.
//!   [`JulianDate`] serialises as a bare `f64`.

mod angle;
mod civil;
mod error;
mod horizon;
mod hour_angle;
mod julian;
mod observer;
mod sidereal;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use angle::{normalize, DmsAngle, HmsAngle, Sexagesimal, SexagesimalUnit, Sign};
pub use civil::{CivilDateTime, UniversalTime};
pub use error::{CivilTimeError, CivilTimeResult};
pub use horizon::{equatorial_to_horizon, horizon_to_equatorial, EquatorialCoordinate, HorizonCoordinate};
pub use hour_angle::{hour_angle_to_right_ascension, local_sidereal_time_at, right_ascension_to_hour_angle};
pub use julian::JulianDate;
pub use observer::{GeographicLocation, Observer, Sighting};
pub use sidereal::{
    greenwich_from_local, greenwich_sidereal_time, greenwich_sidereal_time_at_midnight,
    local_sidereal_time, universal_from_greenwich, SIDEREAL_RATE, SOLAR_RATE,
};
