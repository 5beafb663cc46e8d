// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Sidereal time
//!
//! Greenwich Sidereal Time (GST) is the hour angle of the equinox at the
//! Greenwich meridian; Local Sidereal Time (LST) is the same quantity at the
//! observer's meridian.  Both are returned as [`HourAngles`] in `[0, 24)`.
//!
//! ## Reduction
//!
//! 1. `T = (JD₀ − 2 451 545.0) / 36 525` for the JD of 0h UT.
//! 2. `GST₀ = 6.697374558 + 2400.051336 T + 0.000025862 T²  (mod 24)`.
//! 3. `GST = GST₀ + 1.002737909 · UT  (mod 24)`.
//! 4. `LST = GST + λ / 15  (mod 24)`, east longitude positive.
//!
//! The inverse steps (LST → GST → UT) use the same constants.
//!
//! ## Quick Example
//! ```rust
//! use altaz::{greenwich_sidereal_time, local_sidereal_time, JulianDate};
//! use qtty::Degrees;
//!
//! let jd = JulianDate::from_calendar(1980, 4, 22.608_931_366);
//! let gst = greenwich_sidereal_time(jd);
//! let lst = local_sidereal_time(gst, Degrees::new(-64.0));
//! assert!(lst < gst);
//! ```

use crate::angle::normalize;
use crate::civil::UniversalTime;
use crate::julian::JulianDate;
use chrono::NaiveDate;
use qtty::{Degrees, HourAngle, HourAngles, Hours};

/// Sidereal hours elapsed per UT hour.
pub const SIDEREAL_RATE: f64 = 1.002_737_909;

/// UT hours elapsed per sidereal hour.
pub const SOLAR_RATE: f64 = 0.997_269_566_3;

/// Polynomial in `T` for GST at 0h UT, in hours.
const GST0_HOURS: [f64; 3] = [6.697_374_558, 2_400.051_336, 0.000_025_862];

/// GST at 0h UT of the calendar date containing `jd`.
pub fn greenwich_sidereal_time_at_midnight(jd: JulianDate) -> HourAngles {
    let t = jd.midnight().julian_centuries().value();
    let [a0, a1, a2] = GST0_HOURS;
    normalize(HourAngles::new(a0 + a1 * t + a2 * t * t))
}

/// GST of a Julian Date; the UT of day is split back out of `jd`.
pub fn greenwich_sidereal_time(jd: JulianDate) -> HourAngles {
    greenwich_sidereal_time_after(jd.midnight(), jd.time_of_day())
}

/// LST for an east-positive `longitude`.
#[inline]
pub fn local_sidereal_time(gst: HourAngles, longitude: Degrees) -> HourAngles {
    normalize(gst + longitude.to::<HourAngle>())
}

/// GST from LST for an east-positive `longitude`.
#[inline]
pub fn greenwich_from_local(lst: HourAngles, longitude: Degrees) -> HourAngles {
    normalize(lst - longitude.to::<HourAngle>())
}

/// UT of day at which GST equals `gst` on the Greenwich date `date`.
///
/// A sidereal day is ~4 min shorter than a solar day, so a handful of GST
/// values occur twice on one date; this returns the first.
pub fn universal_from_greenwich(gst: HourAngles, date: NaiveDate) -> Hours {
    let jd0 = JulianDate::from_universal(&UniversalTime::midnight(date));
    let elapsed = normalize(gst - greenwich_sidereal_time_at_midnight(jd0));
    Hours::new(elapsed.value() * SOLAR_RATE)
}

fn greenwich_sidereal_time_after(jd0: JulianDate, ut: Hours) -> HourAngles {
    let gst0 = greenwich_sidereal_time_at_midnight(jd0);
    normalize(gst0 + HourAngles::new(ut.value() * SIDEREAL_RATE))
}

impl UniversalTime {
    /// GST of this instant.
    ///
    /// Carries the UT of day separately instead of folding it into the
    /// Julian Date, which keeps the full `f64` resolution of the time.
    pub fn greenwich_sidereal_time(&self) -> HourAngles {
        let jd0 = JulianDate::from_universal(&Self::midnight(self.date()));
        greenwich_sidereal_time_after(jd0, self.time())
    }

    /// LST of this instant at an east-positive `longitude`.
    #[inline]
    pub fn local_sidereal_time(&self, longitude: Degrees) -> HourAngles {
        local_sidereal_time(self.greenwich_sidereal_time(), longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::HmsAngle;

    fn april_22_1980() -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 4, 22).unwrap()
    }

    fn hours(h: i32, m: i32, s: f64) -> f64 {
        HmsAngle::from_parts(h, m, s).to_decimal()
    }

    #[test]
    fn gst_of_universal_time() {
        let ut = UniversalTime::new(april_22_1980(), Hours::new(hours(14, 36, 51.67))).unwrap();
        let gst = HmsAngle::from(ut.greenwich_sidereal_time()).rounded(2);
        assert_eq!((gst.major(), gst.minor()), (4, 40));
        assert!((gst.second() - 5.23).abs() < 1e-9);
    }

    #[test]
    fn gst_of_julian_date_matches_carried_time() {
        let ut = UniversalTime::new(april_22_1980(), Hours::new(hours(14, 36, 51.67))).unwrap();
        let jd = JulianDate::from_universal(&ut);
        let from_jd = greenwich_sidereal_time(jd);
        let carried = ut.greenwich_sidereal_time();
        // JD resolution near 2.4e6 days is ~40 µs.
        assert!((from_jd - carried).abs() < HourAngles::new(1e-7));
    }

    #[test]
    fn gst_at_j2000_midnight() {
        let gst0 = greenwich_sidereal_time_at_midnight(JulianDate::J2000);
        assert!((gst0 - HourAngles::new(6.664_519_645_802_879)).abs() < HourAngles::new(1e-9));
    }

    #[test]
    fn local_from_greenwich_west_longitude() {
        let gst = HourAngles::new(hours(4, 40, 5.23));
        let lst = HmsAngle::from(local_sidereal_time(gst, Degrees::new(-64.0))).rounded(2);
        assert_eq!((lst.major(), lst.minor()), (0, 24));
        assert!((lst.second() - 5.23).abs() < 1e-9);
    }

    #[test]
    fn greenwich_from_local_inverts_local() {
        let lst = HourAngles::new(hours(0, 24, 5.23));
        let gst = greenwich_from_local(lst, Degrees::new(-64.0));
        assert!((gst - HourAngles::new(hours(4, 40, 5.23))).abs() < HourAngles::new(1e-12));
    }

    #[test]
    fn local_sidereal_time_wraps_past_midnight() {
        let lst = local_sidereal_time(HourAngles::new(23.0), Degrees::new(30.0));
        assert!((lst - HourAngles::new(1.0)).abs() < HourAngles::new(1e-12));
        let lst = local_sidereal_time(HourAngles::new(1.0), Degrees::new(-30.0));
        assert!((lst - HourAngles::new(23.0)).abs() < HourAngles::new(1e-12));
    }

    #[test]
    fn universal_from_greenwich_inverts_gst() {
        let ut = universal_from_greenwich(HourAngles::new(hours(4, 40, 5.23)), april_22_1980());
        let hms = HmsAngle::from_decimal(ut.value()).rounded(2);
        assert_eq!((hms.major(), hms.minor()), (14, 36));
        assert!((hms.second() - 51.67).abs() < 1e-9);
    }
}
