// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date on the Universal Time axis.
//!
//! [`JulianDate`] is a continuous day count whose integer part changes at
//! Greenwich noon.  It linearises calendar arithmetic for the sidereal-time
//! formulas: a civil instant is first reduced to [`UniversalTime`] and then
//! mapped here with the Gregorian-calendar algorithm of Meeus (1998) ch. 7.
//!
//! The Gregorian century correction is applied to every date, so dates
//! before the 1582 calendar reform are read as proleptic Gregorian.

use crate::civil::UniversalTime;
use chrono::{Datelike, Weekday};
use qtty::{Centuries, Day, Days, Hour, Hours, Simplify};
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// JD of the MJD epoch: `MJD = JD − 2 400 000.5`.
const MJD_EPOCH: Days = Days::new(2_400_000.5);

/// Weekdays indexed by `(JD₀ + 1.5) mod 7`.
const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Days since Greenwich noon, 1 January 4713 BC (proleptic Julian calendar).
///
/// Layout-identical to a single `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDate {
    quantity: Days,
}

impl JulianDate {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    // ── constructors ──────────────────────────────────────────────────

    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Date of a Gregorian calendar date.
    ///
    /// `day` may carry the time of day as a fraction (`19.75` is 18:00 on
    /// the 19th).  Months and days are not range-checked.
    pub fn from_calendar(year: i32, month: u32, day: f64) -> Self {
        let (y, m) = if month <= 2 {
            (f64::from(year) - 1.0, f64::from(month) + 12.0)
        } else {
            (f64::from(year), f64::from(month))
        };

        let a = (y / 100.0).floor();
        let b = 2.0 - a + (a / 4.0).floor();

        let c = (365.25 * (y + 4_716.0)).floor();
        let d = (30.6001 * (m + 1.0)).floor();
        Self::new(c + d + day + b - 1_524.5)
    }

    /// Julian Date of a UT instant.
    pub fn from_universal(ut: &UniversalTime) -> Self {
        let date = ut.date();
        Self::from_calendar(date.year(), date.month(), f64::from(date.day()))
            + ut.time().to::<Day>()
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    // ── calendar ──────────────────────────────────────────────────────

    /// Gregorian `(year, month, day)` with the time of day kept as a
    /// fraction of `day`.
    pub fn to_calendar(&self) -> (i32, u32, f64) {
        let z = (self.value() + 0.5).floor();
        let f = self.value() + 0.5 - z;

        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        let a = z + 1.0 + alpha - (alpha / 4.0).floor();
        let b = a + 1_524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();

        let day = b - d - (30.6001 * e).floor() + f;
        let month = if e < 13.5 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.5 { c - 4_716.0 } else { c - 4_715.0 };

        (year as i32, month as u32, day)
    }

    /// The preceding 0h UT.
    #[inline]
    pub fn midnight(&self) -> Self {
        Self::new((self.value() - 0.5).floor() + 0.5)
    }

    /// UT time of day, in `[0, 24)` h.
    #[inline]
    pub fn time_of_day(&self) -> Hours {
        (*self - self.midnight()).to::<Hour>()
    }

    /// Day of the week of the calendar date containing this instant.
    pub fn weekday(&self) -> Weekday {
        let index = (self.midnight().value() + 1.5).rem_euclid(7.0) as usize;
        WEEKDAYS[index % 7]
    }

    // ── epochs ────────────────────────────────────────────────────────

    /// Julian centuries since J2000.0 (the sidereal-time argument `T`).
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Self::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }

    /// Modified Julian Date, `JD − 2 400 000.5`.
    #[inline]
    pub fn to_modified(&self) -> f64 {
        (self.quantity - MJD_EPOCH).value()
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for JulianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(places) => write!(f, "JD {:.*}", places, self.value()),
            None => write!(f, "JD {}", self.value()),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDate {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDate {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDate {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDate {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

// ── From/Into ─────────────────────────────────────────────────────────────

impl From<Days> for JulianDate {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDate> for Days {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.quantity
    }
}

impl From<UniversalTime> for JulianDate {
    #[inline]
    fn from(ut: UniversalTime) -> Self {
        Self::from_universal(&ut)
    }
}

impl From<JulianDate> for Centuries {
    #[inline]
    fn from(jd: JulianDate) -> Self {
        jd.julian_centuries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn calendar_midnight() {
        let jd = JulianDate::from_calendar(1978, 11, 13.0);
        assert!((jd.value() - 2_443_825.5).abs() < 1e-9);
    }

    #[test]
    fn calendar_with_fractional_day() {
        let jd = JulianDate::from_calendar(2009, 6, 19.75);
        assert!((jd.value() - 2_455_002.25).abs() < 1e-9);
    }

    #[test]
    fn january_and_february_count_as_previous_year() {
        assert!((JulianDate::from_calendar(2000, 1, 1.5).value() - 2_451_545.0).abs() < 1e-9);
        let feb_29 = JulianDate::from_calendar(2000, 2, 29.0);
        let mar_01 = JulianDate::from_calendar(2000, 3, 1.0);
        assert_eq!(mar_01 - feb_29, Days::new(1.0));
    }

    #[test]
    fn calendar_roundtrip() {
        let (year, month, day) = JulianDate::new(2_455_002.25).to_calendar();
        assert_eq!((year, month), (2009, 6));
        assert!((day - 19.75).abs() < 1e-9);

        let (year, month, day) = JulianDate::new(2_443_825.5).to_calendar();
        assert_eq!((year, month), (1978, 11));
        assert!((day - 13.0).abs() < 1e-9);
    }

    #[test]
    fn from_universal_adds_time_of_day() {
        let date = NaiveDate::from_ymd_opt(1980, 4, 22).unwrap();
        let ut = UniversalTime::new(date, Hours::new(14.0 + 36.0 / 60.0 + 51.67 / 3_600.0)).unwrap();
        let jd = JulianDate::from_universal(&ut);
        assert!((jd.value() - 2_444_352.108_931_366).abs() < 1e-6);
        assert!((jd.midnight().value() - 2_444_351.5).abs() < 1e-9);
        assert!((jd.time_of_day() - ut.time()).abs() < Hours::new(1e-6));
    }

    #[test]
    fn midnight_before_and_after_noon() {
        assert_eq!(JulianDate::new(2_451_545.0).midnight(), JulianDate::new(2_451_544.5));
        assert_eq!(JulianDate::new(2_451_544.6).midnight(), JulianDate::new(2_451_544.5));
        assert_eq!(JulianDate::new(2_451_544.5).midnight(), JulianDate::new(2_451_544.5));
    }

    #[test]
    fn julian_centuries_since_j2000() {
        let jd = JulianDate::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jd.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(JulianDate::new(2_455_001.5).weekday(), Weekday::Fri);
        assert_eq!(JulianDate::J2000.weekday(), Weekday::Sat);
    }

    #[test]
    fn modified_julian_date() {
        assert!((JulianDate::J2000.to_modified() - 51_544.5).abs() < 1e-12);
    }

    #[test]
    fn display_with_precision() {
        assert_eq!(format!("{:.1}", JulianDate::new(2_443_825.5)), "JD 2443825.5");
    }

    #[test]
    fn add_and_sub_days() {
        let mut jd = JulianDate::new(2_451_545.0);
        jd += Days::new(1.0);
        assert_eq!(jd.quantity(), Days::new(2_451_546.0));
        jd -= Days::new(0.5);
        assert_eq!(jd.quantity(), Days::new(2_451_545.5));
        assert_eq!(jd - JulianDate::J2000, Days::new(0.5));
    }
}
