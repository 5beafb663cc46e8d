// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Equatorial ↔ horizon transform
//!
//! Converts an hour angle and declination into altitude and azimuth for an
//! observer at geographic latitude `φ`:
//!
//! ```text
//! sin a = sin δ sin φ + cos δ cos φ cos H
//! cos A = (sin δ − sin φ sin a) / (cos φ cos a)
//! ```
//!
//! `acos` only yields `A ∈ [0°, 180°]`, so the quadrant is fixed from the
//! hour angle: a target west of the meridian (`sin H > 0`) has azimuth
//! `360° − A`.  Azimuth is measured from north through east.
//!
//! ## Degenerate geometry
//!
//! At the poles and at the zenith or nadir the azimuth is undefined.  When
//! `|cos φ · cos a| < 1e-6` the azimuth is reported as `0°` (north).  The
//! threshold also catches the numerical zenith, where `asin` lands a few
//! ulps short of `90°`.  The same rule sets the hour angle to `0 h` in the
//! inverse transform.

use crate::angle::{normalize, DmsAngle, HmsAngle};
use qtty::{Degree, Degrees, HourAngle, HourAngles, Radians};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Below this value of `|cos φ · cos a|` the azimuth convention applies.
const DEGENERATE_COSINE: f64 = 1e-6;

/// Right ascension and declination of a catalog target.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoordinate {
    /// `[0, 24)` h.
    pub right_ascension: HourAngles,
    /// `[-90, 90]`°.
    pub declination: Degrees,
}

impl EquatorialCoordinate {
    #[inline]
    pub const fn new(right_ascension: HourAngles, declination: Degrees) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    /// Build from sexagesimal right ascension and declination.
    #[inline]
    pub fn from_sexagesimal(right_ascension: HmsAngle, declination: DmsAngle) -> Self {
        Self::new(right_ascension.to_quantity(), declination.to_quantity())
    }

    #[inline]
    pub fn right_ascension_hms(&self) -> HmsAngle {
        self.right_ascension.into()
    }

    #[inline]
    pub fn declination_dms(&self) -> DmsAngle {
        self.declination.into()
    }
}

/// Altitude above the horizon and azimuth east of north.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizonCoordinate {
    /// `[-90, 90]`°.
    pub altitude: Degrees,
    /// `[0, 360)`°.
    pub azimuth: Degrees,
}

impl HorizonCoordinate {
    #[inline]
    pub const fn new(altitude: Degrees, azimuth: Degrees) -> Self {
        Self { altitude, azimuth }
    }

    /// `true` for a geometric altitude above `0°`.
    #[inline]
    pub fn is_above_horizon(&self) -> bool {
        self.altitude > Degrees::new(0.0)
    }

    #[inline]
    pub fn altitude_dms(&self) -> DmsAngle {
        self.altitude.into()
    }

    #[inline]
    pub fn azimuth_dms(&self) -> DmsAngle {
        self.azimuth.into()
    }
}

/// Altitude and azimuth of a target at hour angle `ha` and declination
/// `dec`, seen from latitude `lat`.
pub fn equatorial_to_horizon(ha: HourAngles, dec: Degrees, lat: Degrees) -> HorizonCoordinate {
    let ha = ha.to::<Degree>();
    let (sin_dec, cos_dec) = dec.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * ha.cos()).clamp(-1.0, 1.0);
    let altitude = clamp_latitude(Radians::new(sin_alt.asin()).to::<Degree>());

    let denominator = cos_lat * altitude.cos();
    if denominator.abs() < DEGENERATE_COSINE {
        log::trace!("azimuth undefined at altitude {altitude} from latitude {lat}; using 0°");
        return HorizonCoordinate::new(altitude, Degrees::new(0.0));
    }

    let cos_az = ((sin_dec - sin_lat * sin_alt) / denominator).clamp(-1.0, 1.0);
    let a = Radians::new(cos_az.acos()).to::<Degree>();
    let azimuth = if ha.sin() > 0.0 {
        Degrees::new(360.0) - a
    } else {
        a
    };

    HorizonCoordinate::new(altitude, normalize(azimuth))
}

/// Hour angle and declination of a target at `horizon`, seen from
/// latitude `lat`.  Inverse of [`equatorial_to_horizon`].
pub fn horizon_to_equatorial(horizon: &HorizonCoordinate, lat: Degrees) -> (HourAngles, Degrees) {
    let (sin_alt, cos_alt) = horizon.altitude.sin_cos();
    let (sin_lat, cos_lat) = lat.sin_cos();

    let sin_dec = (sin_alt * sin_lat + cos_alt * cos_lat * horizon.azimuth.cos()).clamp(-1.0, 1.0);
    let declination = clamp_latitude(Radians::new(sin_dec.asin()).to::<Degree>());

    let denominator = cos_lat * declination.cos();
    if denominator.abs() < DEGENERATE_COSINE {
        log::trace!("hour angle undefined at declination {declination} from latitude {lat}; using 0h");
        return (HourAngles::new(0.0), declination);
    }

    let cos_ha = ((sin_alt - sin_lat * sin_dec) / denominator).clamp(-1.0, 1.0);
    let h = Radians::new(cos_ha.acos()).to::<Degree>();
    let ha = if horizon.azimuth.sin() > 0.0 {
        Degrees::new(360.0) - h
    } else {
        h
    };

    (normalize(ha.to::<HourAngle>()), declination)
}

#[inline]
fn clamp_latitude(angle: Degrees) -> Degrees {
    Degrees::new(angle.value().clamp(-90.0, 90.0))
}
