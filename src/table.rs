//! Lunar reference table for 1900–2100.
//!
//! Each year is packed into a `u32`: bits 4..=15 hold the twelve month
//! lengths (bit set = 30 days, clear = 29, month 1 at bit 15), bits 0..=3
//! hold the leap month number (0 = no leap month), and bit 16 holds the
//! length of the leap month (set = 30 days). The table is anchored at
//! 1900-01-31, the Gregorian date of day 1 of lunar month 1 of 1900.

use crate::ConversionError;
use crate::consts::{
    LONG_MONTH_DAYS, MAX_MONTH, MAX_YEAR, MIN_YEAR, SHORT_MONTH_DAYS, YEAR_COUNT,
};

/// Packed month-length and leap-month data, one entry per year from
/// [`MIN_YEAR`] to [`MAX_YEAR`]. Validated against known new-year dates
/// (1900-01-31, 2000-02-05, 2023-01-22, 2025-01-29) and leap months
/// (1900/8, 2023/2, 2033/11).
const LUNAR_INFO: [u32; YEAR_COUNT] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520, // 2100
];

const LEAP_MONTH_MASK: u32 = 0xf;
const LEAP_LENGTH_BIT: u32 = 0x1_0000;
const MONTH_BITS_MASK: u32 = 0xfff0;

const fn code_leap_month(code: u32) -> u8 {
    (code & LEAP_MONTH_MASK) as u8
}

const fn code_month_days(code: u32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if code & (LEAP_LENGTH_BIT >> month) != 0 {
        LONG_MONTH_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}

const fn code_leap_month_days(code: u32) -> u8 {
    if code_leap_month(code) == 0 {
        0
    } else if code & LEAP_LENGTH_BIT != 0 {
        LONG_MONTH_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}

const fn code_year_days(code: u32) -> u16 {
    // 12 months of at least 29 days, plus one day per long-month bit,
    // plus the leap month if the year has one.
    12 * SHORT_MONTH_DAYS as u16
        + (code & MONTH_BITS_MASK).count_ones() as u16
        + code_leap_month_days(code) as u16
}

/// Cumulative day offset of each year's new year from the 1900-01-31
/// epoch. Entry `i` is the offset of lunar `MIN_YEAR + i`, month 1,
/// day 1; the final entry is the total span of the table.
const NEW_YEAR_OFFSETS: [i32; YEAR_COUNT + 1] = {
    let mut offsets = [0i32; YEAR_COUNT + 1];
    let mut i = 0;
    while i < YEAR_COUNT {
        offsets[i + 1] = offsets[i] + code_year_days(LUNAR_INFO[i]) as i32;
        i += 1;
    }
    offsets
};

/// Total number of days covered by the table, starting at the epoch.
pub(crate) const TOTAL_DAYS: i32 = NEW_YEAR_OFFSETS[YEAR_COUNT];

/// Month-length and leap-month data for a single lunar year.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YearRecord {
    code: u32,
    new_year_offset: i32,
}

impl YearRecord {
    /// Looks up the record for `year`.
    ///
    /// # Errors
    /// Returns `ConversionError::UnsupportedYear` if the year is outside
    /// the table's range.
    pub(crate) fn for_year(year: u16) -> Result<Self, ConversionError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(ConversionError::UnsupportedYear(year));
        }
        let index = (year - MIN_YEAR) as usize;
        Ok(Self {
            code: LUNAR_INFO[index],
            new_year_offset: NEW_YEAR_OFFSETS[index],
        })
    }

    /// The leap month number for this year, or 0 if the year has none.
    pub(crate) const fn leap_month(self) -> u8 {
        code_leap_month(self.code)
    }

    /// Days in the ordinary month `month` (1..=12): 29 or 30.
    pub(crate) const fn month_days(self, month: u8) -> u8 {
        code_month_days(self.code, month)
    }

    /// Days in this year's leap month, or 0 if the year has none.
    pub(crate) const fn leap_month_days(self) -> u8 {
        code_leap_month_days(self.code)
    }

    /// Total days in this lunar year (353..=385).
    pub(crate) const fn year_days(self) -> u16 {
        code_year_days(self.code)
    }

    /// Day offset of this year's month 1, day 1 from the epoch.
    pub(crate) const fn new_year_offset(self) -> i32 {
        self.new_year_offset
    }
}

/// Finds the lunar year whose span contains the given epoch day offset.
/// Returns `None` if the offset falls outside the table.
pub(crate) fn year_containing_offset(offset: i32) -> Option<u16> {
    if offset < 0 || offset >= TOTAL_DAYS {
        return None;
    }
    // First new-year offset strictly greater than `offset` belongs to the
    // following year.
    let next = NEW_YEAR_OFFSETS.partition_point(|&o| o <= offset);
    Some(MIN_YEAR + (next - 1) as u16)
}
