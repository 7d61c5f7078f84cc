use serde::Serialize;

use crate::prelude::*;
use crate::types::{Language, SolarDate, Weekday, YearName, Zodiac};

/// The outcome of a successful lunar-to-solar conversion: the Gregorian
/// date plus the descriptors the original form displays alongside it.
///
/// Produced fresh for every conversion call and owned by the caller;
/// nothing is cached or shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{solar} ({weekday}), Year of the {zodiac}, {year_name}")]
pub struct ConversionResult {
    solar: SolarDate,
    weekday: Weekday,
    zodiac: Zodiac,
    year_name: YearName,
}

impl ConversionResult {
    pub(crate) const fn new(
        solar: SolarDate,
        weekday: Weekday,
        zodiac: Zodiac,
        year_name: YearName,
    ) -> Self {
        Self {
            solar,
            weekday,
            zodiac,
            year_name,
        }
    }

    /// Returns the Gregorian date
    pub const fn solar(&self) -> SolarDate {
        self.solar
    }

    /// Returns the Gregorian weekday of the converted date
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the zodiac animal of the lunar year
    pub const fn zodiac(&self) -> Zodiac {
        self.zodiac
    }

    /// Returns the sexagenary (stem-branch) name of the lunar year
    pub const fn year_name(&self) -> YearName {
        self.year_name
    }

    /// Formats the whole result in the requested language.
    pub fn describe(&self, language: Language) -> String {
        match language {
            Language::English => self.to_string(),
            Language::Chinese => format!(
                "{}（{}），{}年（{}）",
                self.solar,
                self.weekday.name(language),
                self.zodiac.name(language),
                self.year_name.name(language),
            ),
        }
    }
}
