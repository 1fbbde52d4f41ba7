/// Jalali years at which the 33-year leap cycle is re-anchored.
/// The supported Jalali range is `BREAKS[0]..BREAKS[BREAKS.len() - 1]`.
pub const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324, 2394,
    2456, 3178,
];

/// Smallest supported Jalali year (inclusive)
pub const MIN_JALALI_YEAR: i32 = BREAKS[0];
/// Largest supported Jalali year (exclusive)
pub const MAX_JALALI_YEAR: i32 = BREAKS[BREAKS.len() - 1];

/// Julian Day Number of 1 Farvardin of `MIN_JALALI_YEAR` (560-03-20)
pub const MIN_JULIAN_DAY: i64 = 1_925_675;
/// Julian Day Number of Gregorian 3799-01-01, the first day whose Gregorian year
/// maps past the table (exclusive)
pub const MAX_JULIAN_DAY: i64 = 3_108_617;

/// Offset between a Jalali year and the Gregorian year in which it begins
pub const GREGORIAN_YEAR_OFFSET: i32 = 621;

/// Length of the intercalation cycle in years
pub(crate) const CYCLE_YEARS: i64 = 33;
/// Leap years in one full intercalation cycle
pub(crate) const CYCLE_LEAPS: i64 = 8;
/// Accumulated leap count at the first break point
pub(crate) const INITIAL_LEAP_COUNT: i64 = -14;

/// Number of months in a Jalali year
pub const MONTHS_PER_YEAR: i32 = 12;
/// First month of the year (Farvardin)
pub const FARVARDIN: i32 = 1;
/// Last month of the year (Esfand)
pub const ESFAND: i32 = 12;
/// First day of any month
pub const MIN_DAY: i32 = 1;

/// Days in each of the first six months
pub const LONG_MONTH_DAYS: i32 = 31;
/// Days in months seven through eleven, and Esfand in a leap year
pub const SHORT_MONTH_DAYS: i32 = 30;
/// Days in Esfand in a common year
pub const ESFAND_COMMON_DAYS: i32 = 29;

/// Day of the year, counted from zero, on which Mehr (month 7) begins
pub(crate) const MEHR_DAY_OFFSET: i64 = 186;
/// Days from 1 Mehr to the end of a common year, minus one
pub(crate) const PREVIOUS_YEAR_TAIL: i64 = 179;

/// Saturday, the first day of the Persian week (0 = Sunday)
pub const SATURDAY: u8 = 6;
/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Separator used by the plain `YYYY/MM/DD` layout
pub const DATE_SEPARATOR: char = '/';
/// Separator used by the ISO-like `YYYY-MM-DD` layout
pub const ISO_SEPARATOR: char = '-';

/// Format token for the year
pub const TOKEN_YEAR: &str = "YYYY";
/// Format token for the long month name
pub const TOKEN_MONTH_NAME: &str = "MMMM";
/// Format token for the numeric month
pub const TOKEN_MONTH: &str = "MM";
/// Format token for the numeric day
pub const TOKEN_DAY: &str = "DD";

/// Default parse and display layout
pub const DEFAULT_DATE_FORMAT: &str = "YYYY/MM/DD";
/// Default month and year label layout
pub const DEFAULT_MONTH_YEAR_FORMAT: &str = "YYYY MMMM";
/// ISO-like layout
pub const ISO_DATE_FORMAT: &str = "YYYY-MM-DD";
