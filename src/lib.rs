//! Convert Chinese lunar (lunisolar) calendar dates to Gregorian dates.
//!
//! The engine validates a candidate lunar date against the calendar's real
//! month-length and leap-month table for 1900–2100 and, if valid, computes
//! the corresponding proleptic Gregorian date together with the zodiac
//! animal, the sexagenary (stem-branch) year name, and the weekday.
//! Conversion is a pure function over compiled-in reference data: no I/O,
//! no shared mutable state.
//!
//! ```
//! use nongli::{LunarDate, Zodiac};
//!
//! let result = nongli::convert(LunarDate::new(2023, 1, 1, false)).unwrap();
//!
//! assert_eq!(result.solar().to_string(), "2023-01-22"); // 2023 Lunar New Year
//! assert_eq!(result.zodiac(), Zodiac::Rabbit);
//! assert_eq!(result.year_name().to_string(), "Guimao");
//! ```
//!
//! Leap months are requested explicitly. 2023 has a leap second month, so
//! both the ordinary and the leap second month exist:
//!
//! ```
//! use nongli::LunarDate;
//!
//! let common = nongli::convert(LunarDate::new(2023, 2, 1, false)).unwrap();
//! let leap = nongli::convert(LunarDate::new(2023, 2, 1, true)).unwrap();
//!
//! assert_eq!(common.solar().to_string(), "2023-02-20");
//! assert_eq!(leap.solar().to_string(), "2023-03-22");
//! ```

mod consts;
mod prelude;
mod result;
mod table;
mod types;

pub use consts::*;
pub use result::ConversionResult;
pub use types::{Language, SolarDate, Weekday, YearName, Zodiac};

use crate::prelude::*;
use crate::table::YearRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Day count since 1970-01-01 of the table epoch (1900-01-31, lunar
/// 1900-01-01).
const EPOCH_RATA: i32 = types::rata_die_from_gregorian(
    EPOCH_GREGORIAN.0 as i32,
    EPOCH_GREGORIAN.1,
    EPOCH_GREGORIAN.2,
);

/// A candidate Chinese lunar calendar date.
///
/// Construction does not validate: the calendar's month lengths and leap
/// months vary by year, so validation happens against the reference table
/// when the date is converted (or parsed from text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Lunar year (1900..=2100 supported)
    pub year: u16,
    /// Lunar month number (1..=12); the same number for an ordinary month
    /// and its leap counterpart
    pub month: u8,
    /// Day of the lunar month (1..=29 or 1..=30, per the table)
    pub day: u8,
    /// Whether the date names the leap occurrence of `month`
    pub is_leap_month: bool,
}

/// Validation failure for a candidate lunar date.
///
/// Checks run in the order year → month → day → leap flag and stop at the
/// first violation. These are expected outcomes for user input, never
/// panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConversionError {
    #[display(fmt = "Unsupported year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    UnsupportedYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Month {month} of {year} is not a leap month")]
    InvalidLeapMonth { year: u16, month: u8 },
}

impl std::error::Error for ConversionError {}

impl ConversionError {
    /// Human-readable message in the requested language, matching the
    /// strings the presentation layer shows to the user.
    pub fn localized(&self, language: Language) -> String {
        match language {
            Language::English => self.to_string(),
            Language::Chinese => match *self {
                Self::UnsupportedYear(year) => {
                    format!("年份 {year} 超出支持范围（{MIN_YEAR}-{MAX_YEAR}）")
                }
                Self::InvalidMonth(month) => format!("月份 {month} 无效（应为 1-{MAX_MONTH}）"),
                Self::InvalidDay { year, month, day } => {
                    format!("农历{year}年{month}月没有第{day}天")
                }
                Self::InvalidLeapMonth { year, month } => {
                    format!("农历{year}年{month}月不是闰月")
                }
            },
        }
    }
}

/// Error type for parsing lunar dates from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not match the `YYYY-MM-DD` / `YYYY-LMM-DD` shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty date string.
    #[error("Empty date string")]
    EmptyInput,

    /// The components parsed but do not name a real lunar date.
    #[error(transparent)]
    Date(#[from] ConversionError),
}

/// Converts a lunar date to its Gregorian equivalent plus derived
/// descriptors. Equivalent to [`LunarDate::to_solar`].
///
/// # Errors
/// Returns a [`ConversionError`] naming the first validation failure.
pub fn convert(date: LunarDate) -> Result<ConversionResult, ConversionError> {
    date.to_solar()
}

impl LunarDate {
    /// Creates a candidate lunar date. No validation happens here; see
    /// [`Self::to_solar`].
    pub const fn new(year: u16, month: u8, day: u8, is_leap_month: bool) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month,
        }
    }

    /// Converts this date to its Gregorian equivalent, with weekday,
    /// zodiac animal, and stem-branch year name.
    ///
    /// # Errors
    /// - `UnsupportedYear` if `year` is outside 1900..=2100
    /// - `InvalidMonth` if `month` is outside 1..=12
    /// - `InvalidDay` if `day` exceeds the resolved month's length
    /// - `InvalidLeapMonth` if `is_leap_month` is set but `month` is not
    ///   the leap month of `year`
    pub fn to_solar(self) -> Result<ConversionResult, ConversionError> {
        let (record, selects_leap) = self.checked_record()?;
        let rata = EPOCH_RATA + record.new_year_offset() + self.days_into_year(record, selects_leap);
        Ok(ConversionResult::new(
            SolarDate::from_rata_die(rata),
            Weekday::from_rata_die(rata),
            Zodiac::from_year(self.year),
            YearName::from_year(self.year),
        ))
    }

    /// Finds the lunar date of a Gregorian date (the inverse of
    /// [`Self::to_solar`]). Every day inside the table's span maps to
    /// exactly one lunar date.
    ///
    /// # Errors
    /// Returns `UnsupportedYear` if the date falls outside the span
    /// covered by the reference table (1900-01-31 through the end of
    /// lunar year 2100). Gregorian days of early 1900 before the epoch
    /// belong to lunar year 1899 and report that year.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_solar(solar: SolarDate) -> Result<Self, ConversionError> {
        let offset = solar.rata_die() - EPOCH_RATA;
        let year = table::year_containing_offset(offset).ok_or_else(|| {
            // Days before the epoch fall in the previous lunar year even
            // when the Gregorian year is already 1900.
            let year = if offset < 0 {
                solar.year().min(MIN_YEAR - 1)
            } else {
                solar.year()
            };
            ConversionError::UnsupportedYear(year)
        })?;
        let record = YearRecord::for_year(year)?;
        let leap_month = record.leap_month();
        let mut remaining = offset - record.new_year_offset();

        for month in 1..=MAX_MONTH {
            let days = i32::from(record.month_days(month));
            if remaining < days {
                return Ok(Self::new(year, month, (remaining + 1) as u8, false));
            }
            remaining -= days;

            if month == leap_month {
                let days = i32::from(record.leap_month_days());
                if remaining < days {
                    return Ok(Self::new(year, month, (remaining + 1) as u8, true));
                }
                remaining -= days;
            }
        }
        unreachable!("offset {offset} exceeds the span of lunar year {year}")
    }

    /// Validates this date and returns the year's record plus whether the
    /// date selects the leap occurrence of its month.
    ///
    /// Order: year → month → day → leap flag. The day is range-checked
    /// against the resolved month length; a leap request for a month that
    /// is not the year's leap month resolves to the ordinary length, so an
    /// out-of-range day is still reported as `InvalidDay` first.
    fn checked_record(self) -> Result<(YearRecord, bool), ConversionError> {
        let record = YearRecord::for_year(self.year)?;

        if self.month == 0 || self.month > MAX_MONTH {
            return Err(ConversionError::InvalidMonth(self.month));
        }

        let selects_leap = self.is_leap_month && record.leap_month() == self.month;
        let month_days = if selects_leap {
            record.leap_month_days()
        } else {
            record.month_days(self.month)
        };
        if self.day < MIN_DAY || self.day > month_days {
            return Err(ConversionError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }

        if self.is_leap_month && !selects_leap {
            return Err(ConversionError::InvalidLeapMonth {
                year: self.year,
                month: self.month,
            });
        }

        Ok((record, selects_leap))
    }

    /// Zero-based day offset of this date from day 1 of lunar month 1 of
    /// its year: the lengths of all months ordinally before the target
    /// (the leap month slots in right after its ordinary counterpart),
    /// plus `day - 1`.
    fn days_into_year(self, record: YearRecord, selects_leap: bool) -> i32 {
        let leap_month = record.leap_month();
        let mut days: i32 = (1..self.month)
            .map(|m| i32::from(record.month_days(m)))
            .sum();
        if leap_month != 0 && leap_month < self.month {
            days += i32::from(record.leap_month_days());
        }
        if selects_leap {
            // The ordinary occurrence of the month precedes the leap one.
            days += i32::from(record.month_days(self.month));
        }
        days + i32::from(self.day) - 1
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{}", self.year, DATE_SEPARATOR)?;
        if self.is_leap_month {
            write!(f, "{LEAP_MARKER}")?;
        }
        write!(
            f,
            "{:02}{}{:02}",
            self.month, DATE_SEPARATOR, self.day
        )
    }
}

impl FromStr for LunarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parts[0]
            .parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(parts[0].to_owned()))?;

        let (month_str, is_leap_month) = match parts[1]
            .strip_prefix(LEAP_MARKER)
            .or_else(|| parts[1].strip_prefix(LEAP_MARKER_CHINESE))
        {
            Some(rest) => (rest, true),
            None => (parts[1], false),
        };
        let month = month_str
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(parts[1].to_owned()))?;

        let day = parts[2]
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(parts[2].to_owned()))?;

        let date = Self::new(year, month, day, is_leap_month);
        date.checked_record()?;
        Ok(date)
    }
}

impl PartialOrd for LunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        // The leap month follows its ordinary counterpart, so the leap
        // flag orders between month and day.
        (self.year, self.month, self.is_leap_month, self.day).cmp(&(
            other.year,
            other.month,
            other.is_leap_month,
            other.day,
        ))
    }
}

impl serde::Serialize for LunarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LunarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solar(year: u16, month: u8, day: u8) -> SolarDate {
        SolarDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_lunar_new_year_2023() {
        let result = convert(LunarDate::new(2023, 1, 1, false)).unwrap();
        assert_eq!(result.solar(), solar(2023, 1, 22));
        assert_eq!(result.weekday(), Weekday::Sunday);
        assert_eq!(result.zodiac(), Zodiac::Rabbit);
        assert_eq!(result.year_name().name(Language::English), "Guimao");
        assert_eq!(result.year_name().name(Language::Chinese), "癸卯");
    }

    #[test]
    fn test_known_conversions() {
        struct TestCase {
            lunar: LunarDate,
            solar: (u16, u8, u8),
            weekday: Weekday,
        }

        let cases = [
            // Epoch: first supported lunar day
            TestCase {
                lunar: LunarDate::new(1900, 1, 1, false),
                solar: (1900, 1, 31),
                weekday: Weekday::Wednesday,
            },
            TestCase {
                lunar: LunarDate::new(2000, 1, 1, false),
                solar: (2000, 2, 5),
                weekday: Weekday::Saturday,
            },
            // Mid-autumn festival 2024
            TestCase {
                lunar: LunarDate::new(2024, 8, 15, false),
                solar: (2024, 9, 17),
                weekday: Weekday::Tuesday,
            },
            // Leap month 8 of 1900
            TestCase {
                lunar: LunarDate::new(1900, 8, 1, true),
                solar: (1900, 9, 24),
                weekday: Weekday::Monday,
            },
            // Leap month 11 of 2033
            TestCase {
                lunar: LunarDate::new(2033, 11, 1, true),
                solar: (2033, 12, 22),
                weekday: Weekday::Thursday,
            },
            // Last supported lunar day spills into Gregorian 2101
            TestCase {
                lunar: LunarDate::new(2100, 12, 29, false),
                solar: (2101, 1, 28),
                weekday: Weekday::Friday,
            },
        ];

        for case in &cases {
            let result = convert(case.lunar).unwrap();
            let (y, m, d) = case.solar;
            assert_eq!(result.solar(), solar(y, m, d), "{}", case.lunar);
            assert_eq!(result.weekday(), case.weekday, "{}", case.lunar);
        }
    }

    #[test]
    fn test_leap_month_distinct_from_ordinary() {
        let common = convert(LunarDate::new(2023, 2, 1, false)).unwrap();
        let leap = convert(LunarDate::new(2023, 2, 1, true)).unwrap();

        assert_eq!(common.solar(), solar(2023, 2, 20));
        assert_eq!(leap.solar(), solar(2023, 3, 22));
        // Separated by exactly the length of the ordinary second month (30 days)
        assert_eq!(leap.solar().rata_die() - common.solar().rata_die(), 30);
    }

    #[test]
    fn test_ordinary_request_valid_when_leap_counterpart_exists() {
        // 2023 has a leap month 2; asking for the non-leap month 2 is
        // valid and resolves to the ordinary occurrence.
        let result = convert(LunarDate::new(2023, 2, 15, false)).unwrap();
        assert_eq!(result.solar(), solar(2023, 3, 6));
    }

    #[test]
    fn test_unsupported_year() {
        assert_eq!(
            convert(LunarDate::new(1899, 1, 1, false)),
            Err(ConversionError::UnsupportedYear(1899))
        );
        assert_eq!(
            convert(LunarDate::new(2101, 1, 1, false)),
            Err(ConversionError::UnsupportedYear(2101))
        );
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            convert(LunarDate::new(2024, 13, 1, false)),
            Err(ConversionError::InvalidMonth(13))
        );
        assert_eq!(
            convert(LunarDate::new(2024, 0, 1, false)),
            Err(ConversionError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_invalid_day() {
        // Month 1 of 2023 has 29 days
        assert!(convert(LunarDate::new(2023, 1, 29, false)).is_ok());
        assert_eq!(
            convert(LunarDate::new(2023, 1, 30, false)),
            Err(ConversionError::InvalidDay {
                year: 2023,
                month: 1,
                day: 30
            })
        );
        assert!(matches!(
            convert(LunarDate::new(2023, 1, 0, false)),
            Err(ConversionError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_month_boundaries_for_every_supported_month() {
        // Day 1 and the last valid day of every month succeed; one past
        // the last day fails with InvalidDay.
        for year in [1900, 1984, 2023, 2096, 2100] {
            for month in 1..=MAX_MONTH {
                let first = convert(LunarDate::new(year, month, 1, false));
                assert!(first.is_ok(), "{year}-{month:02}-01");

                let mut last = 30;
                if convert(LunarDate::new(year, month, 30, false)).is_err() {
                    last = 29;
                    assert!(
                        convert(LunarDate::new(year, month, 29, false)).is_ok(),
                        "{year}-{month:02}-29"
                    );
                }
                assert!(matches!(
                    convert(LunarDate::new(year, month, last + 1, false)),
                    Err(ConversionError::InvalidDay { .. })
                ));
            }
        }
    }

    #[test]
    fn test_invalid_leap_month() {
        // 2024 has no leap month at all
        for month in 1..=MAX_MONTH {
            assert_eq!(
                convert(LunarDate::new(2024, month, 1, true)),
                Err(ConversionError::InvalidLeapMonth { year: 2024, month })
            );
        }
        // 2023's leap month is month 2, not month 3
        assert_eq!(
            convert(LunarDate::new(2023, 3, 1, true)),
            Err(ConversionError::InvalidLeapMonth {
                year: 2023,
                month: 3
            })
        );
    }

    #[test]
    fn test_day_checked_before_leap_flag() {
        // Month → Day → LeapMonth: an out-of-range day on a bogus leap
        // request reports InvalidDay, not InvalidLeapMonth.
        assert!(matches!(
            convert(LunarDate::new(2024, 1, 31, true)),
            Err(ConversionError::InvalidDay { .. })
        ));
        // A valid day on a bogus leap request reports InvalidLeapMonth.
        assert!(matches!(
            convert(LunarDate::new(2024, 1, 1, true)),
            Err(ConversionError::InvalidLeapMonth { .. })
        ));
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let date = LunarDate::new(2023, 2, 1, true);
        assert_eq!(convert(date).unwrap(), convert(date).unwrap());
    }

    #[test]
    fn test_round_trip_all_days_of_sample_years() {
        // Every valid lunar day converts and inverts back to itself.
        for year in [1900, 1951, 2023, 2033, 2100] {
            let record = crate::table::YearRecord::for_year(year).unwrap();
            for month in 1..=MAX_MONTH {
                let leap_variants: &[bool] = if record.leap_month() == month {
                    &[false, true]
                } else {
                    &[false]
                };
                for &is_leap in leap_variants {
                    let month_days = if is_leap {
                        record.leap_month_days()
                    } else {
                        record.month_days(month)
                    };
                    for day in 1..=month_days {
                        let lunar = LunarDate::new(year, month, day, is_leap);
                        let result = convert(lunar).unwrap();
                        assert_eq!(
                            LunarDate::from_solar(result.solar()).unwrap(),
                            lunar,
                            "round trip of {lunar}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_from_solar_known_dates() {
        assert_eq!(
            LunarDate::from_solar(solar(2023, 1, 22)).unwrap(),
            LunarDate::new(2023, 1, 1, false)
        );
        assert_eq!(
            LunarDate::from_solar(solar(2023, 3, 22)).unwrap(),
            LunarDate::new(2023, 2, 1, true)
        );
        assert_eq!(
            LunarDate::from_solar(solar(2023, 4, 1)).unwrap(),
            LunarDate::new(2023, 2, 11, true)
        );
        assert_eq!(
            LunarDate::from_solar(solar(1900, 1, 31)).unwrap(),
            LunarDate::new(1900, 1, 1, false)
        );
    }

    #[test]
    fn test_from_solar_outside_span() {
        // 1900-01-30 precedes the epoch, so its lunar year is 1899; the
        // reported year must not contradict the supported range.
        assert_eq!(
            LunarDate::from_solar(solar(1900, 1, 30)),
            Err(ConversionError::UnsupportedYear(1899))
        );
        assert_eq!(
            LunarDate::from_solar(solar(1899, 6, 1)),
            Err(ConversionError::UnsupportedYear(1899))
        );
        assert_eq!(
            LunarDate::from_solar(solar(2101, 1, 29)),
            Err(ConversionError::UnsupportedYear(2101))
        );
        // Last covered day is fine
        assert_eq!(
            LunarDate::from_solar(solar(2101, 1, 28)).unwrap(),
            LunarDate::new(2100, 12, 29, false)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(LunarDate::new(2023, 1, 1, false).to_string(), "2023-01-01");
        assert_eq!(LunarDate::new(2023, 2, 1, true).to_string(), "2023-L02-01");
    }

    #[test]
    fn test_parse_round_trip() {
        for text in ["2023-01-01", "2023-L02-01", "1900-12-30"] {
            let date = text.parse::<LunarDate>().unwrap();
            assert_eq!(date.to_string(), text);
        }
    }

    #[test]
    fn test_parse_chinese_leap_marker() {
        assert_eq!(
            "2023-闰02-01".parse::<LunarDate>().unwrap(),
            LunarDate::new(2023, 2, 1, true)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<LunarDate>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<LunarDate>(), Err(ParseError::EmptyInput));
        assert!(matches!(
            "2023-01".parse::<LunarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-01-01-05".parse::<LunarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2023-XX-01".parse::<LunarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        // Calendrically invalid dates are rejected at parse time
        assert_eq!(
            "2023-01-30".parse::<LunarDate>(),
            Err(ParseError::Date(ConversionError::InvalidDay {
                year: 2023,
                month: 1,
                day: 30
            }))
        );
        assert_eq!(
            "2024-L01-01".parse::<LunarDate>(),
            Err(ParseError::Date(ConversionError::InvalidLeapMonth {
                year: 2024,
                month: 1
            }))
        );
    }

    #[test]
    fn test_ordering_leap_month_after_ordinary() {
        let last_common = LunarDate::new(2023, 2, 30, false);
        let first_leap = LunarDate::new(2023, 2, 1, true);
        let next_month = LunarDate::new(2023, 3, 1, false);

        assert!(last_common < first_leap);
        assert!(first_leap < next_month);

        // Ordering agrees with the converted Gregorian dates
        let a = convert(last_common).unwrap().solar();
        let b = convert(first_leap).unwrap().solar();
        assert!(a < b);
    }

    #[test]
    fn test_serde_string_format() {
        let date = LunarDate::new(2023, 2, 1, true);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2023-L02-01""#);
        let parsed: LunarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        // Invalid dates are rejected on deserialization
        let result: Result<LunarDate, _> = serde_json::from_str(r#""2024-L01-01""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ConversionError::UnsupportedYear(1899);
        assert_eq!(
            err.to_string(),
            "Unsupported year: 1899 (must be 1900-2100)"
        );
        assert_eq!(
            err.localized(Language::English),
            "Unsupported year: 1899 (must be 1900-2100)"
        );
        assert_eq!(
            err.localized(Language::Chinese),
            "年份 1899 超出支持范围（1900-2100）"
        );

        let err = ConversionError::InvalidDay {
            year: 2023,
            month: 1,
            day: 30,
        };
        assert_eq!(err.to_string(), "Invalid day 30 for month 2023-01");
        assert_eq!(err.localized(Language::Chinese), "农历2023年1月没有第30天");

        let err = ConversionError::InvalidLeapMonth {
            year: 2024,
            month: 3,
        };
        assert_eq!(err.to_string(), "Month 3 of 2024 is not a leap month");
        assert_eq!(err.localized(Language::Chinese), "农历2024年3月不是闰月");
    }

    #[test]
    fn test_every_supported_new_year_converts() {
        // Exhaustive over the whole table: month 1, day 1 of every
        // supported year converts, and the solar dates strictly increase.
        let mut previous = None;
        for year in MIN_YEAR..=MAX_YEAR {
            let result = convert(LunarDate::new(year, 1, 1, false)).unwrap();
            let solar = result.solar();
            // Lunar new year always falls in late January or February
            assert!(
                (solar.month() == 1 && solar.day() >= 21) || solar.month() == 2,
                "new year of {year} fell on {solar}"
            );
            if let Some(prev) = previous {
                assert!(solar > prev, "new year of {year} not after {prev}");
            }
            previous = Some(solar);
        }
    }
}
