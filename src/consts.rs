/// Maximum valid Jalali year (inclusive)
pub const MAX_YEAR: u16 = 3000;

/// Maximum valid month (Esfand)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Farvardin, the first month of the year
pub const FARVARDIN: u8 = 1;
/// Month number for Mehr, the first 30-day month
pub const MEHR: u8 = 7;
/// Month number for Esfand, the last month of the year
pub const ESFAND: u8 = 12;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Length of the arithmetic leap cycle in years
pub(crate) const LEAP_CYCLE_YEARS: i64 = 33;
/// Leap years within each cycle
pub(crate) const LEAP_YEARS_PER_CYCLE: i64 = 8;
/// Slope of the leap-year selector `(25y + 11) mod 33`
pub(crate) const LEAP_SELECTOR_SLOPE: i64 = 25;
/// Offset of the leap-year selector `(25y + 11) mod 33`
pub(crate) const LEAP_SELECTOR_OFFSET: i64 = 11;
/// Offset of the new-year day count `floor((8y + 21) / 33)`
pub(crate) const NEW_YEAR_LEAP_OFFSET: i64 = 21;
/// Days in one 33-year cycle
pub(crate) const DAYS_PER_LEAP_CYCLE: i64 = 12053;

/// Years the 33-year rule makes leap but the astronomical calendar does not.
/// Each one moves its leap day to the following year. Sorted ascending.
pub(crate) const NON_LEAP_CORRECTION: [u16; 78] = [
    1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030, 2059,
    2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323, 2327, 2356,
    2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558, 2587, 2591, 2620,
    2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789, 2818, 2822, 2847,
    2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

/// Day number (0001-01-01 is day 1) of 1 Farvardin 1 under the arithmetic
/// cycle, proleptic Gregorian 622-03-21
pub(crate) const JALALI_EPOCH_DAYS_FROM_CE: i64 = 226_895;

/// Days in the first six (31-day) months
pub(crate) const FIRST_HALF_DAYS: i64 = 186;

/// Display separator (`YYYY/MM/DD`)
pub const DATE_SEPARATOR: char = '/';
/// Alternate separator accepted on input (`YYYY-MM-DD`)
pub const ALT_DATE_SEPARATOR: char = '-';
/// Separator between the bounds of a year range (`1300/1420`)
pub const RANGE_SEPARATOR: char = '/';

/// Digits in a complete `YYYYMMDD` input
pub const DATE_DIGITS: usize = 8;
/// Digits in the year part of a `YYYYMMDD` input
pub const YEAR_DIGITS: usize = 4;
/// Digits in the month (and day) part of a `YYYYMMDD` input
pub const MONTH_DIGITS: usize = 2;

/// Earliest plausible birth year accepted by default
pub const DEFAULT_MIN_BIRTH_YEAR: u16 = 1300;
/// Latest plausible birth year accepted by default
pub const DEFAULT_MAX_BIRTH_YEAR: u16 = 1420;

/// Persian-script digits U+06F0..=U+06F9
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
/// Arabic-Indic digits U+0660..=U+0669
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Persian month names, Farvardin first (index 0 unused)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

/// Minimum password length that earns a strength point
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Symbols that earn the special-character strength point
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";
