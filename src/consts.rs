/// First year covered by the lunar reference table (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Last year covered by the lunar reference table (inclusive)
pub const MAX_YEAR: u16 = 2100;

/// Number of years in the reference table
pub const YEAR_COUNT: usize = (MAX_YEAR - MIN_YEAR + 1) as usize;

/// Maximum valid month (twelfth month)
pub const MAX_MONTH: u8 = 12;

/// First day of a lunar month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in a short lunar month
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Days in a long lunar month
pub const LONG_MONTH_DAYS: u8 = 30;

/// Sexagenary cycle anchor: `(year - CYCLE_EPOCH_YEAR) % 60` gives the
/// position in the stem-branch cycle (1984 is 甲子, cycle position 0).
/// The same anchor drives the zodiac and the stems.
pub const CYCLE_EPOCH_YEAR: u16 = 4;
/// Heavenly stems repeat every 10 years
pub const STEM_CYCLE: u16 = 10;
/// Earthly branches (and zodiac animals) repeat every 12 years
pub const BRANCH_CYCLE: u16 = 12;

/// Day 1 of lunar month 1 of 1900 in the Gregorian calendar: 1900-01-31.
/// All lunar day offsets are counted from this date.
pub const EPOCH_GREGORIAN: (u16, u8, u8) = (1900, 1, 31);

/// Component separator for the textual date forms (ISO 8601 style)
pub const DATE_SEPARATOR: char = '-';
/// ASCII marker prefixed to the month of a leap lunar month ("2023-L02-01")
pub const LEAP_MARKER: char = 'L';
/// Chinese marker for a leap month, accepted as an alternative to [`LEAP_MARKER`]
pub const LEAP_MARKER_CHINESE: char = '闰';

/// Heavenly stem names in pinyin, cycle order (甲 through 癸)
pub const STEMS_PINYIN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];
/// Heavenly stem names in Chinese
pub const STEMS_CHINESE: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Earthly branch names in pinyin, cycle order (子 through 亥)
pub const BRANCHES_PINYIN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];
/// Earthly branch names in Chinese
pub const BRANCHES_CHINESE: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animal names in English, aligned with the earthly branches
pub const ZODIAC_ENGLISH: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];
/// Zodiac animal names in Chinese
pub const ZODIAC_CHINESE: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Weekday names in English, Sunday first
pub const WEEKDAYS_ENGLISH: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];
/// Weekday names in Chinese, Sunday first
pub const WEEKDAYS_CHINESE: [&str; 7] = [
    "星期日", "星期一", "星期二", "星期三", "星期四", "星期五", "星期六",
];

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days in February for Gregorian leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;
