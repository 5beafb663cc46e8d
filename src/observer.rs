// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer context: one place on Earth at one civil instant.
//!
//! [`Observer`] reduces the instant to Local Sidereal Time once, then maps
//! any number of catalog targets to horizon coordinates.  It is a small
//! `Copy` value with no interior state, so a single observer can be shared
//! freely across threads.
//!
//! ```rust
//! use altaz::{CivilDateTime, EquatorialCoordinate, GeographicLocation, Observer};
//! use qtty::{Degrees, HourAngles, Hours};
//!
//! let dayton = GeographicLocation::new(Degrees::new(39.78), Degrees::new(-84.2));
//! let evening = CivilDateTime::new(2019, 12, 17, 20, 0, 0.0)
//!     .unwrap()
//!     .with_zone_correction(Hours::new(-5.0))
//!     .unwrap();
//! let observer = Observer::new(dayton, &evening);
//!
//! let rows = [("Capella", EquatorialCoordinate::new(HourAngles::new(5.278), Degrees::new(45.998)))];
//! for sighting in observer.observe(rows) {
//!     assert!(sighting.horizon.is_above_horizon());
//! }
//! ```

use crate::angle::normalize;
use crate::civil::{CivilDateTime, UniversalTime};
use crate::horizon::{equatorial_to_horizon, horizon_to_equatorial, EquatorialCoordinate, HorizonCoordinate};
use qtty::{Degrees, HourAngles};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic latitude and east-positive longitude.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeographicLocation {
    /// `[-90, 90]`°, north positive.
    pub latitude: Degrees,
    /// `(-180, 180]`°, east positive.
    pub longitude: Degrees,
}

impl GeographicLocation {
    #[inline]
    pub const fn new(latitude: Degrees, longitude: Degrees) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A catalog target paired with where it stands in the sky.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sighting<I> {
    pub id: I,
    pub equatorial: EquatorialCoordinate,
    pub horizon: HorizonCoordinate,
}

/// A location together with the Local Sidereal Time of an instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Observer {
    location: GeographicLocation,
    local_sidereal_time: HourAngles,
}

impl Observer {
    /// Observer at `location` at the local civil instant `time`.
    pub fn new(location: GeographicLocation, time: &CivilDateTime) -> Self {
        Self::at_universal(location, &time.to_universal())
    }

    /// Observer at `location` at a UT instant.
    pub fn at_universal(location: GeographicLocation, time: &UniversalTime) -> Self {
        Self {
            location,
            local_sidereal_time: time.local_sidereal_time(location.longitude),
        }
    }

    #[inline]
    pub const fn location(&self) -> GeographicLocation {
        self.location
    }

    #[inline]
    pub const fn local_sidereal_time(&self) -> HourAngles {
        self.local_sidereal_time
    }

    /// Hour angle of right ascension `ra`, in `[0, 24)` h.
    #[inline]
    pub fn hour_angle(&self, ra: HourAngles) -> HourAngles {
        normalize(self.local_sidereal_time - ra)
    }

    /// Right ascension at hour angle `ha`, in `[0, 24)` h.
    #[inline]
    pub fn right_ascension(&self, ha: HourAngles) -> HourAngles {
        normalize(self.local_sidereal_time - ha)
    }

    pub fn horizon(&self, target: &EquatorialCoordinate) -> HorizonCoordinate {
        equatorial_to_horizon(
            self.hour_angle(target.right_ascension),
            target.declination,
            self.location.latitude,
        )
    }

    /// Equatorial coordinates of a point on the sky seen at `horizon`.
    pub fn equatorial(&self, horizon: &HorizonCoordinate) -> EquatorialCoordinate {
        let (ha, dec) = horizon_to_equatorial(horizon, self.location.latitude);
        EquatorialCoordinate::new(self.right_ascension(ha), dec)
    }

    /// Map catalog rows to sightings, preserving their order.
    pub fn observe<I, R>(self, rows: R) -> impl Iterator<Item = Sighting<I>>
    where
        R: IntoIterator<Item = (I, EquatorialCoordinate)>,
    {
        rows.into_iter().map(move |(id, equatorial)| Sighting {
            horizon: self.horizon(&equatorial),
            id,
            equatorial,
        })
    }
}
