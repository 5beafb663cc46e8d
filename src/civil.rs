// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (wall-clock) time and its reduction to Universal Time.
//!
//! A [`CivilDateTime`] is what an observer reads off a local clock: a
//! calendar date, a time of day, a daylight-saving flag and the zone
//! correction of the local time zone (hours east of Greenwich).  Reducing it
//! to [`UniversalTime`] subtracts one hour for daylight saving and the zone
//! correction, then rolls the calendar date so the time of day lands back in
//! `[0, 24)` h.  Month and year boundaries (leap years included) are handled
//! by `chrono` date arithmetic.
//!
//! ```rust
//! use altaz::CivilDateTime;
//! use qtty::Hours;
//!
//! // 00:30 at UTC+2 on 1 March 2024 is 22:30 UT on 29 February.
//! let local = CivilDateTime::new(2024, 3, 1, 0, 30, 0.0)
//!     .unwrap()
//!     .with_zone_correction(Hours::new(2.0))
//!     .unwrap();
//! let ut = local.to_universal();
//! assert_eq!(ut.date().to_string(), "2024-02-29");
//! assert_eq!(ut.time(), Hours::new(22.5));
//! ```

use crate::angle::HmsAngle;
use crate::error::{CivilTimeError, CivilTimeResult};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeDelta, Timelike, Utc};
use qtty::Hours;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest accepted zone correction, in hours.
const MAX_ZONE_CORRECTION_H: f64 = 24.0;

/// Days kept free on both sides of a civil date so that DST and zone
/// corrections can never roll it out of chrono's calendar.
const ROLLOVER_MARGIN_D: i64 = 3;

// ═══════════════════════════════════════════════════════════════════════════
// CivilDateTime
// ═══════════════════════════════════════════════════════════════════════════

/// A local wall-clock instant at a given zone offset.
///
/// Deserialisation runs the same checks as the constructors.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "CivilDateTimeRepr"))]
pub struct CivilDateTime {
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: f64,
    daylight_saving: bool,
    zone_correction: Hours,
}

impl CivilDateTime {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from calendar and clock fields, with no daylight saving and a
    /// zero zone correction.
    ///
    /// Fails if the date does not exist in the Gregorian calendar or the
    /// time of day is outside `00:00:00 ..< 24:00:00`.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> CivilTimeResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CivilTimeError::InvalidDate { year, month, day })?;
        Self::from_date(date, hour, minute, second)
    }

    /// Build from a `chrono` date and clock fields.
    pub fn from_date(date: NaiveDate, hour: u32, minute: u32, second: f64) -> CivilTimeResult<Self> {
        if hour >= 24 || minute >= 60 || !(0.0..60.0).contains(&second) {
            return Err(CivilTimeError::InvalidTime {
                hour,
                minute,
                second,
            });
        }

        let margin = TimeDelta::days(ROLLOVER_MARGIN_D);
        date.checked_sub_signed(margin)
            .and(date.checked_add_signed(margin))
            .ok_or(CivilTimeError::DateOutOfRange(date))?;

        Ok(Self {
            date,
            hour,
            minute,
            second,
            daylight_saving: false,
            zone_correction: Hours::new(0.0),
        })
    }

    /// Build from a naive `chrono` timestamp read off a local clock.
    pub fn from_naive(datetime: NaiveDateTime) -> CivilTimeResult<Self> {
        let second = f64::from(datetime.second()) + f64::from(datetime.nanosecond()) / 1e9;
        Self::from_date(datetime.date(), datetime.hour(), datetime.minute(), second)
    }

    /// Build from a zoned `chrono` timestamp; the UTC offset becomes the
    /// zone correction.
    pub fn from_datetime(datetime: &DateTime<FixedOffset>) -> CivilTimeResult<Self> {
        let zone = Hours::new(f64::from(datetime.offset().local_minus_utc()) / 3_600.0);
        Self::from_naive(datetime.naive_local())?.with_zone_correction(zone)
    }

    /// Mark the clock as running on daylight-saving time (one hour ahead).
    #[inline]
    pub fn with_daylight_saving(mut self, daylight_saving: bool) -> Self {
        self.daylight_saving = daylight_saving;
        self
    }

    /// Set the zone correction (hours east of Greenwich, e.g. `-5` for EST).
    pub fn with_zone_correction(mut self, zone_correction: Hours) -> CivilTimeResult<Self> {
        // Negated comparison so NaN is rejected too.
        if !(zone_correction.value().abs() <= MAX_ZONE_CORRECTION_H) {
            return Err(CivilTimeError::ZoneCorrectionOutOfRange {
                hours: zone_correction.value(),
            });
        }
        self.zone_correction = zone_correction;
        Ok(self)
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> f64 {
        self.second
    }

    #[inline]
    pub const fn is_daylight_saving(&self) -> bool {
        self.daylight_saving
    }

    #[inline]
    pub const fn zone_correction(&self) -> Hours {
        self.zone_correction
    }

    /// Clock reading as decimal hours.
    #[inline]
    pub fn time_of_day(&self) -> Hours {
        Hours::new(f64::from(self.hour) + f64::from(self.minute) / 60.0 + self.second / 3_600.0)
    }

    /// Day number within the year (1 January is day 1).
    #[inline]
    pub fn day_number(&self) -> u32 {
        self.date.ordinal()
    }

    // ── conversions ───────────────────────────────────────────────────

    /// Reduce to Universal Time, rolling the date across day, month and
    /// year boundaries as needed.
    pub fn to_universal(&self) -> UniversalTime {
        let dst = if self.daylight_saving { 1.0 } else { 0.0 };
        let ut = self.time_of_day().value() - dst - self.zone_correction.value();
        let (date, time) = roll(self.date, ut)
            .expect("construction keeps a rollover margin and finite fields");
        UniversalTime { date, time }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// UniversalTime
// ═══════════════════════════════════════════════════════════════════════════

/// A Greenwich calendar date plus a UT time of day in `[0, 24)` h.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UniversalTimeRepr"))]
pub struct UniversalTime {
    date: NaiveDate,
    time: Hours,
}

impl UniversalTime {
    /// Build from a Greenwich date and a time of day in hours.
    ///
    /// Times outside `[0, 24)` roll the date.  Returns `None` for a
    /// non-finite time or if the rolled date leaves chrono's calendar.
    pub fn new(date: NaiveDate, time: Hours) -> Option<Self> {
        roll(date, time.value()).map(|(date, time)| Self { date, time })
    }

    /// Midnight (0h UT) of `date`.
    #[inline]
    pub fn midnight(date: NaiveDate) -> Self {
        Self {
            date,
            time: Hours::new(0.0),
        }
    }

    /// Build from a `chrono` UTC timestamp, taken as UT.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = f64::from(datetime.num_seconds_from_midnight())
            + f64::from(datetime.nanosecond()) / 1e9;
        Self {
            date: datetime.date_naive(),
            time: Hours::new(seconds / 3_600.0),
        }
    }

    /// Convert to a `chrono` UTC timestamp, to the nearest nanosecond.
    ///
    /// Returns `None` if the value falls outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let nanos = (self.time.value() * 3.6e12).round() as i64;
        let midnight = self.date.and_hms_opt(0, 0, 0)?;
        midnight
            .checked_add_signed(TimeDelta::nanoseconds(nanos))
            .map(|datetime| datetime.and_utc())
    }

    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// UT time of day, in `[0, 24)` h.
    #[inline]
    pub const fn time(&self) -> Hours {
        self.time
    }

    /// Convert back to local civil time for the given daylight-saving flag
    /// and zone correction.
    pub fn to_local(
        &self,
        daylight_saving: bool,
        zone_correction: Hours,
    ) -> CivilTimeResult<CivilDateTime> {
        let dst = if daylight_saving { 1.0 } else { 0.0 };
        let local = self.time.value() + zone_correction.value() + dst;
        let (date, time) = roll(self.date, local).ok_or(CivilTimeError::DateOutOfRange(self.date))?;

        // Rounding the seconds may carry a clock reading up to 24:00:00.
        let mut clock = HmsAngle::from_decimal(time.value());
        let mut date = date;
        if clock.major() >= 24 {
            date = date.succ_opt().ok_or(CivilTimeError::DateOutOfRange(date))?;
            clock = HmsAngle::from_decimal(clock.to_decimal() - 24.0);
        }

        // `clock.major()` is below 24 here.
        CivilDateTime::from_date(date, clock.major() as u32, clock.minor(), clock.second())?
            .with_daylight_saving(daylight_saving)
            .with_zone_correction(zone_correction)
    }
}

impl From<DateTime<Utc>> for UniversalTime {
    #[inline]
    fn from(datetime: DateTime<Utc>) -> Self {
        Self::from_utc(datetime)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct CivilDateTimeRepr {
    date: NaiveDate,
    hour: u32,
    minute: u32,
    second: f64,
    daylight_saving: bool,
    zone_correction: Hours,
}

#[cfg(feature = "serde")]
impl TryFrom<CivilDateTimeRepr> for CivilDateTime {
    type Error = CivilTimeError;

    fn try_from(raw: CivilDateTimeRepr) -> CivilTimeResult<Self> {
        Self::from_date(raw.date, raw.hour, raw.minute, raw.second)?
            .with_daylight_saving(raw.daylight_saving)
            .with_zone_correction(raw.zone_correction)
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UniversalTimeRepr {
    date: NaiveDate,
    time: Hours,
}

#[cfg(feature = "serde")]
impl TryFrom<UniversalTimeRepr> for UniversalTime {
    type Error = CivilTimeError;

    fn try_from(raw: UniversalTimeRepr) -> CivilTimeResult<Self> {
        if !(0.0..24.0).contains(&raw.time.value()) {
            return Err(CivilTimeError::InvalidTimeOfDay {
                hours: raw.time.value(),
            });
        }
        Ok(Self {
            date: raw.date,
            time: raw.time,
        })
    }
}

/// Fold `hours` into `[0, 24)`, shifting `date` by the whole days removed.
fn roll(date: NaiveDate, hours: f64) -> Option<(NaiveDate, Hours)> {
    if !hours.is_finite() {
        return None;
    }
    let days = (hours / 24.0).floor();
    let mut time = hours - days * 24.0;
    let mut shift = days as i64;
    if time >= 24.0 {
        time -= 24.0;
        shift += 1;
    }

    let rolled = date.checked_add_signed(TimeDelta::try_days(shift)?)?;
    if shift != 0 {
        log::trace!("calendar date {date} rolled by {shift} day(s) to {rolled}");
    }
    Some((rolled, Hours::new(time)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn rejects_impossible_dates_and_times() {
        assert_eq!(
            CivilDateTime::new(2023, 2, 29, 0, 0, 0.0),
            Err(CivilTimeError::InvalidDate {
                year: 2023,
                month: 2,
                day: 29
            })
        );
        assert!(CivilDateTime::new(2023, 1, 1, 24, 0, 0.0).is_err());
        assert!(CivilDateTime::new(2023, 1, 1, 0, 60, 0.0).is_err());
        assert!(CivilDateTime::new(2023, 1, 1, 0, 0, 60.0).is_err());
        assert!(CivilDateTime::new(2023, 1, 1, 0, 0, f64::NAN).is_err());
    }

    #[test]
    fn rejects_dates_at_the_calendar_edge() {
        let err = CivilDateTime::from_date(NaiveDate::MAX, 0, 0, 0.0).unwrap_err();
        assert_eq!(err, CivilTimeError::DateOutOfRange(NaiveDate::MAX));
    }

    #[test]
    fn rejects_out_of_range_zone_corrections() {
        let local = CivilDateTime::new(2020, 1, 1, 0, 0, 0.0).unwrap();
        assert!(local.with_zone_correction(Hours::new(25.0)).is_err());
        assert!(local.with_zone_correction(Hours::new(f64::NAN)).is_err());
        assert!(local.with_zone_correction(Hours::new(-12.0)).is_ok());
    }

    #[test]
    fn local_to_universal_with_daylight_saving() {
        // 03:37 at UTC+4 with DST on 1 July 2013 is 22:37 UT on 30 June.
        let local = CivilDateTime::new(2013, 7, 1, 3, 37, 0.0)
            .unwrap()
            .with_daylight_saving(true)
            .with_zone_correction(Hours::new(4.0))
            .unwrap();
        let ut = local.to_universal();
        assert_eq!(ut.date(), ymd(2013, 6, 30));
        assert!((ut.time() - Hours::new(22.0 + 37.0 / 60.0)).abs() < Hours::new(1e-12));
    }

    #[test]
    fn rollover_crosses_leap_and_common_february() {
        for (year, day) in [(2024, 29), (2023, 28), (1900, 28), (2000, 29)] {
            let local = CivilDateTime::new(year, 3, 1, 0, 30, 0.0)
                .unwrap()
                .with_zone_correction(Hours::new(2.0))
                .unwrap();
            let ut = local.to_universal();
            assert_eq!(ut.date(), ymd(year, 2, day), "year {year}");
            assert_eq!(ut.time(), Hours::new(22.5));
        }
    }

    #[test]
    fn rollover_crosses_year_forward() {
        // 20:00 EST on 31 December is 01:00 UT on 1 January.
        let local = CivilDateTime::new(2019, 12, 31, 20, 0, 0.0)
            .unwrap()
            .with_zone_correction(Hours::new(-5.0))
            .unwrap();
        let ut = local.to_universal();
        assert_eq!(ut.date(), ymd(2020, 1, 1));
        assert!((ut.time() - Hours::new(1.0)).abs() < Hours::new(1e-12));
    }

    #[test]
    fn universal_to_local_inverts_reduction() {
        let ut = UniversalTime::new(ymd(2013, 6, 30), Hours::new(22.0 + 37.0 / 60.0)).unwrap();
        let local = ut.to_local(true, Hours::new(4.0)).unwrap();
        assert_eq!(local.date(), ymd(2013, 7, 1));
        assert_eq!((local.hour(), local.minute()), (3, 37));
        assert!(local.second().abs() < 1e-6);
        assert!(local.is_daylight_saving());
        assert_eq!(local.to_universal().date(), ut.date());
    }

    #[test]
    fn universal_new_rolls_out_of_range_times() {
        let ut = UniversalTime::new(ymd(2021, 1, 1), Hours::new(-1.5)).unwrap();
        assert_eq!(ut.date(), ymd(2020, 12, 31));
        assert_eq!(ut.time(), Hours::new(22.5));
        assert!(UniversalTime::new(NaiveDate::MAX, Hours::new(48.0)).is_none());
    }

    #[test]
    fn utc_roundtrip() {
        let datetime = Utc.with_ymd_and_hms(1980, 4, 22, 14, 36, 51).unwrap();
        let ut = UniversalTime::from_utc(datetime);
        assert_eq!(ut.date(), ymd(1980, 4, 22));
        assert!((ut.time() - Hours::new(14.614_166_666)).abs() < Hours::new(1e-8));
        assert_eq!(ut.to_utc(), Some(datetime));
    }

    #[test]
    fn from_fixed_offset_datetime() {
        let zone = FixedOffset::west_opt(5 * 3_600).unwrap();
        let datetime = zone.with_ymd_and_hms(2019, 12, 17, 20, 0, 0).unwrap();
        let local = CivilDateTime::from_datetime(&datetime).unwrap();
        assert_eq!(local.zone_correction(), Hours::new(-5.0));
        let ut = local.to_universal();
        assert_eq!(ut.date(), ymd(2019, 12, 18));
        assert!((ut.time() - Hours::new(1.0)).abs() < Hours::new(1e-12));
    }

    #[test]
    fn day_number_counts_from_first_of_january() {
        let day = |y, m, d| CivilDateTime::new(y, m, d, 0, 0, 0.0).unwrap().day_number();
        assert_eq!(day(2000, 1, 1), 1);
        assert_eq!(day(2000, 3, 1), 61);
        assert_eq!(day(2003, 6, 1), 152);
        assert_eq!(day(2009, 11, 27), 331);
    }

    #[test]
    fn universal_new_rejects_non_finite_times() {
        assert!(UniversalTime::new(ymd(2021, 1, 1), Hours::new(f64::NAN)).is_none());
        assert!(UniversalTime::new(ymd(2021, 1, 1), Hours::new(f64::INFINITY)).is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialisation_applies_constructor_checks() {
        use serde_json::json;

        let fields = |date: NaiveDate, hour: u32, zone: f64| {
            json!({
                "date": date,
                "hour": hour,
                "minute": 0,
                "second": 0.0,
                "daylight_saving": false,
                "zone_correction": zone,
            })
        };

        let ok: CivilDateTime = serde_json::from_value(fields(ymd(2019, 12, 17), 20, -5.0)).unwrap();
        assert_eq!(ok.zone_correction(), Hours::new(-5.0));

        assert!(serde_json::from_value::<CivilDateTime>(fields(ymd(2019, 12, 17), 99, 0.0)).is_err());
        assert!(serde_json::from_value::<CivilDateTime>(fields(NaiveDate::MAX, 0, -24.0)).is_err());
        assert!(serde_json::from_value::<CivilDateTime>(fields(ymd(2019, 12, 17), 0, 30.0)).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn universal_time_deserialisation_keeps_time_in_one_day() {
        use serde_json::json;

        let ut: UniversalTime = serde_json::from_value(json!({"date": ymd(1980, 4, 22), "time": 14.5})).unwrap();
        assert_eq!(ut.time(), Hours::new(14.5));

        for time in [24.0, -0.5, 99.0] {
            let raw = json!({"date": ymd(1980, 4, 22), "time": time});
            assert!(serde_json::from_value::<UniversalTime>(raw).is_err(), "time {time}");
        }
    }
}
