use crate::consts::{
    BRANCH_CYCLE, BRANCHES_CHINESE, BRANCHES_PINYIN, CENTURY_CYCLE, CYCLE_EPOCH_YEAR,
    DATE_SEPARATOR, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH,
    LEAP_YEAR_CYCLE, MAX_MONTH, STEM_CYCLE, STEMS_CHINESE, STEMS_PINYIN, WEEKDAYS_CHINESE,
    WEEKDAYS_ENGLISH, ZODIAC_CHINESE, ZODIAC_ENGLISH,
};
use crate::prelude::*;
use crate::{ConversionError, ParseError};
use std::fmt;
use std::str::FromStr;

/// Output language for names and messages.
///
/// The original converter offered an English/Chinese toggle; every derived
/// descriptor takes the language at the point of formatting instead of
/// carrying ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

/// A proleptic Gregorian calendar date, always calendrically valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year", "month", "day")]
pub struct SolarDate {
    year: u16,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Creates a new date, validating it against the Gregorian calendar.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` or `ConversionError::InvalidDay`
    /// if the components do not form a real date.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ConversionError> {
        if month == 0 || month > MAX_MONTH {
            return Err(ConversionError::InvalidMonth(month));
        }
        if day == 0 || day > gregorian_days_in_month(year, month) {
            return Err(ConversionError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds a date from a day count since 1970-01-01.
    ///
    /// Only called with day counts inside the supported lunar table span,
    /// so the resulting year always fits in `u16`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub(crate) fn from_rata_die(rata: i32) -> Self {
        let (year, month, day) = gregorian_from_rata_die(rata);
        Self {
            year: year as u16,
            month,
            day,
        }
    }

    /// Day count since 1970-01-01.
    pub(crate) const fn rata_die(self) -> i32 {
        rata_die_from_gregorian(self.year as i32, self.month, self.day)
    }

    /// Returns the year (proleptic Gregorian)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of month
    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Returns the weekday of this date
    pub const fn weekday(self) -> Weekday {
        Weekday::from_rata_die(self.rata_die())
    }
}

impl FromStr for SolarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(parts[0].to_owned()))?;
        let month = parts[1]
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(parts[1].to_owned()))?;
        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(parts[2].to_owned()))?;
        Ok(Self::new(year, month, day)?)
    }
}

impl serde::Serialize for SolarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for SolarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Day of the week, derived from the day count modulo 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Weekday of a day count since 1970-01-01 (a Thursday).
    pub(crate) const fn from_rata_die(rata: i32) -> Self {
        Self::ALL[(rata + 4).rem_euclid(7) as usize]
    }

    /// Returns the weekday name in the requested language
    pub const fn name(self, language: Language) -> &'static str {
        match language {
            Language::English => WEEKDAYS_ENGLISH[self as usize],
            Language::Chinese => WEEKDAYS_CHINESE[self as usize],
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

impl serde::Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name(Language::English))
    }
}

/// Zodiac animal of a lunar year, following the 12-year branch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

impl Zodiac {
    const ALL: [Self; 12] = [
        Self::Rat,
        Self::Ox,
        Self::Tiger,
        Self::Rabbit,
        Self::Dragon,
        Self::Snake,
        Self::Horse,
        Self::Goat,
        Self::Monkey,
        Self::Rooster,
        Self::Dog,
        Self::Pig,
    ];

    /// Zodiac animal of the given lunar year.
    pub const fn from_year(year: u16) -> Self {
        Self::ALL[((year as i32 - CYCLE_EPOCH_YEAR as i32).rem_euclid(BRANCH_CYCLE as i32)) as usize]
    }

    /// Returns the animal name in the requested language
    pub const fn name(self, language: Language) -> &'static str {
        match language {
            Language::English => ZODIAC_ENGLISH[self as usize],
            Language::Chinese => ZODIAC_CHINESE[self as usize],
        }
    }
}

impl fmt::Display for Zodiac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

impl serde::Serialize for Zodiac {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name(Language::English))
    }
}

/// Sexagenary (stem-branch) name of a lunar year.
///
/// The 10 heavenly stems and 12 earthly branches advance together each
/// year, so the combined name repeats every 60 years (1984 is 甲子, the
/// start of a cycle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearName {
    stem: u8,
    branch: u8,
}

impl YearName {
    /// Stem-branch name of the given lunar year.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_year(year: u16) -> Self {
        let position = year as i32 - CYCLE_EPOCH_YEAR as i32;
        Self {
            stem: position.rem_euclid(STEM_CYCLE as i32) as u8,
            branch: position.rem_euclid(BRANCH_CYCLE as i32) as u8,
        }
    }

    /// Returns the heavenly stem name in the requested language
    pub const fn stem(self, language: Language) -> &'static str {
        match language {
            Language::English => STEMS_PINYIN[self.stem as usize],
            Language::Chinese => STEMS_CHINESE[self.stem as usize],
        }
    }

    /// Returns the earthly branch name in the requested language
    pub const fn branch(self, language: Language) -> &'static str {
        match language {
            Language::English => BRANCHES_PINYIN[self.branch as usize],
            Language::Chinese => BRANCHES_CHINESE[self.branch as usize],
        }
    }

    /// Returns the combined name, e.g. "Guimao" or "癸卯"
    pub fn name(self, language: Language) -> String {
        match language {
            Language::English => {
                format!(
                    "{}{}",
                    self.stem(language),
                    self.branch(language).to_lowercase()
                )
            }
            Language::Chinese => format!("{}{}", self.stem(language), self.branch(language)),
        }
    }
}

impl fmt::Display for YearName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name(Language::English))
    }
}

impl serde::Serialize for YearName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.name(Language::English))
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn gregorian_days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Day count since 1970-01-01 of a proleptic Gregorian date.
pub(crate) const fn rata_die_from_gregorian(year: i32, month: u8, day: u8) -> i32 {
    let m = month as i32;
    let d = day as i32;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`rata_die_from_gregorian`].
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn gregorian_from_rata_die(rata: i32) -> (i32, u8, u8) {
    let z = rata + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let mut year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    if month <= 2 {
        year += 1;
    }
    (year, month as u8, day as u8)
}
