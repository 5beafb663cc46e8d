// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sexagesimal angles parameterised by a qtty angular unit.
//!
//! [`Sexagesimal<U>`] splits an angle into an explicit [`Sign`] and three
//! non-negative components (`major`, `minor`, `second`).  The unit marker
//! `U` decides what `major` counts:
//!
//! | Alias | Marker | Components |
//! |-------|--------|------------|
//! | [`HmsAngle`] | [`HourAngle`] | hours, minutes, seconds (1 h = 15°) |
//! | [`DmsAngle`] | [`Degree`] | degrees, arcminutes, arcseconds |
//!
//! Keeping the sign outside the components means `-0°30′` stays distinct
//! from `+0°30′`:
//!
//! ```rust
//! use altaz::{DmsAngle, Sign};
//!
//! let a = DmsAngle::from_decimal(-0.5);
//! assert_eq!(a.sign(), Sign::Negative);
//! assert_eq!((a.major(), a.minor()), (0, 30));
//! assert_eq!(a.to_decimal(), -0.5);
//! ```

use qtty::{AngularUnit, Degree, HourAngle, Quantity};
use std::fmt;
use std::marker::PhantomData;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decimal places kept in the seconds field by [`Sexagesimal::from_decimal`].
///
/// Fine enough to be lossless at `f64` precision for any angle below a few
/// thousand turns, coarse enough to swallow `59.999999999…` artifacts.
const SECOND_PLACES: u32 = 9;

// ═══════════════════════════════════════════════════════════════════════════
// Units
// ═══════════════════════════════════════════════════════════════════════════

/// Angular units that have a sexagesimal breakdown.
pub trait SexagesimalUnit: AngularUnit + Copy + fmt::Debug + PartialEq + 'static {
    /// One full revolution in this unit (`24` hours, `360` degrees).
    const TURN: f64;

    /// Symbols printed after the major, minor and second components.
    const SYMBOLS: [&'static str; 3];
}

impl SexagesimalUnit for HourAngle {
    const TURN: f64 = 24.0;
    const SYMBOLS: [&'static str; 3] = ["h", "m", "s"];
}

impl SexagesimalUnit for Degree {
    const TURN: f64 = 360.0;
    const SYMBOLS: [&'static str; 3] = ["°", "′", "″"];
}

/// Wrap an angle into `[0, TURN)`.
///
/// `rem_euclid` can return exactly `TURN` for tiny negative inputs; that
/// case folds back to zero so the upper bound stays exclusive.
pub fn normalize<U: SexagesimalUnit>(angle: Quantity<U>) -> Quantity<U> {
    let wrapped = angle.value().rem_euclid(U::TURN);
    if wrapped >= U::TURN {
        Quantity::new(0.0)
    } else {
        Quantity::new(wrapped)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sign
// ═══════════════════════════════════════════════════════════════════════════

/// Sign of a sexagesimal angle, applied to the whole magnitude.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// `+1.0` or `-1.0`.
    #[inline]
    pub const fn factor(self) -> f64 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Sign::Negative)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sexagesimal<U>
// ═══════════════════════════════════════════════════════════════════════════

/// An angle written as `±major minor second` in unit `U`.
///
/// Invariants: `minor < 60`, `0 <= second < 60`, and a zero magnitude is
/// always [`Sign::Positive`].
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "", from = "SexagesimalRepr"))]
pub struct Sexagesimal<U: SexagesimalUnit> {
    sign: Sign,
    major: u64,
    minor: u32,
    second: f64,
    #[cfg_attr(feature = "serde", serde(skip))]
    _unit: PhantomData<U>,
}

/// Hours, minutes and seconds of time.
pub type HmsAngle = Sexagesimal<HourAngle>;

/// Degrees, arcminutes and arcseconds.
pub type DmsAngle = Sexagesimal<Degree>;

impl<U: SexagesimalUnit> Sexagesimal<U> {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from a sign and magnitude components.
    ///
    /// Overflowing seconds and minutes are carried into the next component;
    /// the magnitude of `second` is used.
    pub fn new(sign: Sign, major: u64, minor: u32, second: f64) -> Self {
        let second = second.abs();
        let extra_minutes = (second / 60.0).floor();
        let second = second - extra_minutes * 60.0;
        let minutes = u64::from(minor) + extra_minutes as u64;
        let major = major.saturating_add(minutes / 60);
        let minor = (minutes % 60) as u32;

        let sign = if major == 0 && minor == 0 && second == 0.0 {
            Sign::Positive
        } else {
            sign
        };

        Self {
            sign,
            major,
            minor,
            second,
            _unit: PhantomData,
        }
    }

    /// Build from signed components, as found in almanac tables.
    ///
    /// A negative value in *any* component makes the whole angle negative,
    /// so `from_parts(0, -30, 0.0)` is `-0°30′00″`.
    pub fn from_parts(major: i32, minor: i32, second: f64) -> Self {
        let sign = if major < 0 || minor < 0 || second < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(
            sign,
            u64::from(major.unsigned_abs()),
            minor.unsigned_abs(),
            second,
        )
    }

    /// Decompose a decimal value expressed in unit `U`.
    ///
    /// The round trip through [`to_decimal`](Self::to_decimal) is exact up
    /// to `f64` resolution for any finite `value`; `major` saturates at
    /// `u64::MAX` (about 1.8e19 units).
    pub fn from_decimal(value: f64) -> Self {
        let sign = if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = value.abs();
        let major = magnitude.floor();
        let minutes = (magnitude - major) * 60.0;
        let minor = minutes.floor();
        let second = round_half_away((minutes - minor) * 60.0, SECOND_PLACES);
        Self::new(sign, major as u64, minor as u32, second)
    }

    /// Decompose a typed quantity.
    #[inline]
    pub fn from_quantity(angle: Quantity<U>) -> Self {
        Self::from_decimal(angle.value())
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn sign(&self) -> Sign {
        self.sign
    }

    /// Whole hours or whole degrees.
    #[inline]
    pub const fn major(&self) -> u64 {
        self.major
    }

    /// Minutes of time or arcminutes, `0..60`.
    #[inline]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Seconds of time or arcseconds, `[0, 60)`.
    #[inline]
    pub const fn second(&self) -> f64 {
        self.second
    }

    // ── conversions ───────────────────────────────────────────────────

    /// `sign * (major + minor/60 + second/3600)`.
    #[inline]
    pub fn to_decimal(&self) -> f64 {
        self.sign.factor()
            * (self.major as f64 + f64::from(self.minor) / 60.0 + self.second / 3600.0)
    }

    #[inline]
    pub fn to_quantity(&self) -> Quantity<U> {
        Quantity::new(self.to_decimal())
    }

    /// Round the seconds field to `places` decimals (at most 9), carrying
    /// a rounded `60` into the minor and major components.
    pub fn rounded(&self, places: u32) -> Self {
        Self::new(
            self.sign,
            self.major,
            self.minor,
            round_half_away(self.second, places),
        )
    }
}

#[inline]
fn round_half_away(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places.min(SECOND_PLACES) as i32);
    (value * scale).round() / scale
}

// ── From/Into Quantity ────────────────────────────────────────────────────

impl<U: SexagesimalUnit> From<Quantity<U>> for Sexagesimal<U> {
    #[inline]
    fn from(angle: Quantity<U>) -> Self {
        Self::from_quantity(angle)
    }
}

impl<U: SexagesimalUnit> From<Sexagesimal<U>> for Quantity<U> {
    #[inline]
    fn from(angle: Sexagesimal<U>) -> Self {
        angle.to_quantity()
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

/// Wire form of [`Sexagesimal`]; deserialisation re-runs the carries of
/// [`Sexagesimal::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SexagesimalRepr {
    sign: Sign,
    major: u64,
    minor: u32,
    second: f64,
}

#[cfg(feature = "serde")]
impl<U: SexagesimalUnit> From<SexagesimalRepr> for Sexagesimal<U> {
    fn from(raw: SexagesimalRepr) -> Self {
        Self::new(raw.sign, raw.major, raw.minor, raw.second)
    }
}

// ── Display ───────────────────────────────────────────────────────────────

/// Prints `-9h52m23.66s` / `+182°31′27.00″`.  The formatter precision sets
/// the seconds decimals (default 2, at most 9).
///
/// A positive angle under one turn that rounds up to a full turn prints as
/// zero, so a normalised `23h59m59.999s` shows as `+0h00m00.00s`.
impl<U: SexagesimalUnit> fmt::Display for Sexagesimal<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f.precision().unwrap_or(2).min(SECOND_PLACES as usize);
        let turn = U::TURN as u64;
        let mut shown = self.rounded(places as u32);
        if !self.sign.is_negative() && self.major < turn && shown.major >= turn {
            shown = Self::new(Sign::Positive, shown.major - turn, shown.minor, shown.second);
        }
        let width = if places == 0 { 2 } else { places + 3 };
        let [major, minor, second] = U::SYMBOLS;
        let sign = if shown.sign.is_negative() { '-' } else { '+' };
        write!(
            f,
            "{sign}{}{major}{:02}{minor}{:0width$.places$}{second}",
            shown.major, shown.minor, shown.second,
        )
    }
}
