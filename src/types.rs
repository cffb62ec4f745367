use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAY_REPAIR_OFFSET, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
};
use crate::parse::DateParts;
use crate::prelude::*;
use crate::ErrorReason;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A birth year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR`
/// (1858..=2057), the span the control-code table can resolve.
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's within `MIN_YEAR..=MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ErrorReason::InvalidYear` if the value is outside the range.
    pub fn new(value: u16) -> Result<Self, ErrorReason> {
        let non_zero = NonZeroU16::new(value).ok_or(ErrorReason::InvalidYear)?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ErrorReason::InvalidYear);
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ErrorReason;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ErrorReason::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ErrorReason> {
        let non_zero = NonZeroU8::new(value).ok_or(ErrorReason::InvalidMonth)?;
        if value > MAX_MONTH {
            return Err(ErrorReason::InvalidMonth);
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ErrorReason;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the
    /// given year and month
    ///
    /// # Errors
    /// Returns `ErrorReason::InvalidDayInMonth` if the value is 0 or invalid
    /// for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ErrorReason> {
        let non_zero = NonZeroU8::new(value).ok_or(ErrorReason::InvalidDayInMonth)?;

        let max_day = days_in_month(year, month);
        if value > max_day {
            return Err(ErrorReason::InvalidDayInMonth);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ErrorReason;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so check the widest
        // bound any month allows
        if !(MIN_DAY..=DAYS_IN_MONTH[1]).contains(&value) {
            return Err(ErrorReason::InvalidDayInMonth);
        }
        let non_zero = NonZeroU8::new(value).ok_or(ErrorReason::InvalidDayInMonth)?;
        Ok(Self(non_zero))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender encoded in the final digit of a CPR number: even is female,
/// odd is male.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// A fully resolved date of birth. Always a real Gregorian date: the month
/// is 1..=12 and the day is valid for the month and (leap-year-aware) year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct BirthDate {
    pub year: Year,
    pub month: Month,
    pub day: Day,
}

impl BirthDate {
    /// Creates a new date from already validated components
    pub const fn new(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Resolves the raw date digits of a canonical number into a full date.
    ///
    /// When `repair` is set, a day above `DAY_REPAIR_OFFSET` has the offset
    /// subtracted before validation (the administrative-correction
    /// convention). The century is not known until the year/control table
    /// has been consulted, so February 29 is accepted tentatively and
    /// re-checked against the resolved year.
    pub(crate) fn resolve(parts: DateParts, repair: bool) -> Result<Self, ErrorReason> {
        let month = Month::new(parts.month)?;

        let mut day = parts.day;
        if repair && day > DAY_REPAIR_OFFSET {
            day -= DAY_REPAIR_OFFSET;
        }

        let max_day = if month.get() == FEBRUARY {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month.get() as usize]
        };
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(ErrorReason::InvalidDayInMonth);
        }

        let year = Year::new(birth_year(parts.year, parts.control)?)?;

        // Catches February 29 in a non-leap year now that the century is
        // known
        let day = Day::new(day, year.get(), month.get())?;

        Ok(Self { year, month, day })
    }
}

impl FromStr for BirthDate {
    type Err = ErrorReason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ErrorReason::InvalidLength);
        }
        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| ErrorReason::NonDigitCharacters)?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| ErrorReason::NonDigitCharacters)?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| ErrorReason::NonDigitCharacters)?;

        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year.get(), month.get())?;

        Ok(Self { year, month, day })
    }
}

impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for BirthDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Resolves a two-digit year and a control code into a four-digit birth
/// year. First matching row wins; the rows cover every pair a canonical
/// number can produce, so the fallthrough only guards against values
/// outside the parsed domain.
pub(crate) const fn birth_year(yy: u8, control: u16) -> Result<u16, ErrorReason> {
    let year = yy as u16;
    match (yy, control) {
        (0..=99, 0..=3999) => Ok(1900 + year),
        (0..=36, 4000..=4999) => Ok(2000 + year),
        (37..=99, 4000..=4999) => Ok(1900 + year),
        (0..=57, 5000..=8999) => Ok(2000 + year),
        (58..=99, 5000..=8999) => Ok(1800 + year),
        (0..=36, 9000..=9999) => Ok(1900 + year),
        (37..=99, 9000..=9999) => Ok(1900 + year),
        _ => Err(ErrorReason::InvalidYearAndControlCombination),
    }
}
