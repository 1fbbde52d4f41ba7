mod arith;
mod calendar;
mod consts;
mod convert;
mod format;
mod jalali;
mod julian;
mod locale;
mod prelude;
mod provider;
#[cfg(test)]
mod test_utils;

pub use arith::{div_trunc, mod_floor};
pub use calendar::{CalendarError, CalendarRule, is_leap_year, jal_cal};
pub use consts::*;
pub use convert::{days_in_month, from_gregorian, to_gregorian, today};
pub use jalali::{jalali_to_julian_day, julian_day_to_jalali};
pub use julian::{JulianDay, gregorian_to_julian_day, julian_day_to_gregorian};
pub use locale::{DateFormats, DisplayFormats, Locale, LocaleError, NameStyle};
pub use provider::JalaliDateProvider;

use crate::prelude::*;
use chrono::Datelike;
use std::str::FromStr;

/// A date in the Jalali (Persian solar Hijri) calendar.
///
/// This is a plain value holder: any triple can be stored, and validity is
/// checked explicitly with [`JalaliDate::is_valid`]. Fields are ordered
/// year, month, day so the derived ordering is chronological for valid dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}/{:02}/{:02}", year, month, day)]
pub struct JalaliDate {
    year:  i32,
    month: i32,
    day:   i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid date field: {_0:?}")]
    InvalidField(String),
    #[display(fmt = "Invalid date template: {_0:?}")]
    InvalidTemplate(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl JalaliDate {
    /// The `(-1, -1, -1)` sentinel handed out for "no valid date"
    pub const INVALID: Self = Self::new(-1, -1, -1);

    /// Creates a date from raw components without validating them
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Creates a date, checking the month and the day against the month length
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the month is outside `1..=12`,
    /// `CalendarError::InvalidDay` if the day does not exist in that month, and
    /// `CalendarError::InvalidCalendarYear` if the year has to be looked up
    /// (Esfand) and is unsupported.
    pub fn try_new(year: i32, month: i32, day: i32) -> Result<Self, CalendarError> {
        if !(FARVARDIN..=ESFAND).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        let max_day = days_in_month(month, year)?;
        if !(MIN_DAY..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Converts a Julian Day Number to a Jalali date
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidCalendarYear` outside the supported range.
    pub fn from_julian_day(jdn: JulianDay) -> Result<Self, CalendarError> {
        julian_day_to_jalali(jdn)
    }

    /// Returns the year component
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month component (1 = Farvardin)
    #[inline]
    pub const fn month(&self) -> i32 {
        self.month
    }

    /// Returns the day component
    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Replaces the year without touching month or day
    pub const fn set_year(&mut self, year: i32) -> &mut Self {
        self.year = year;
        self
    }

    /// Sets the month, carrying whole years into or out of the year so that
    /// any integer lands on a month in `1..=12`.
    ///
    /// Month 13 of 1400 becomes month 1 of 1401, month 0 becomes month 12 of
    /// the previous year. The year saturates at the `i32` bounds.
    pub const fn set_month(&mut self, month: i32) -> &mut Self {
        self.roll_months(month as i64 - 1)
    }

    /// Moves to the month `months` months after Farvardin of the current year.
    #[allow(clippy::cast_possible_truncation)]
    const fn roll_months(&mut self, months: i64) -> &mut Self {
        // months comes from at most two i32 values, so the carry fits in an i32
        let carry = months.div_euclid(MONTHS_PER_YEAR as i64) as i32;
        self.year = self.year.saturating_add(carry);
        self.month = months.rem_euclid(MONTHS_PER_YEAR as i64) as i32 + 1;
        self
    }

    const fn previous_month(&mut self) {
        self.roll_months(self.month as i64 - 2);
    }

    const fn next_month(&mut self) {
        self.roll_months(self.month as i64);
    }

    /// Sets the day, rolling over whole months until it fits.
    ///
    /// Zero and negative days borrow from the preceding months; days past the
    /// end of the month carry into the following ones. The date is left
    /// untouched if an error occurs.
    ///
    /// # Errors
    /// Returns an error if a month along the way is invalid or an Esfand
    /// lookup falls outside the supported years.
    pub fn set_day(&mut self, day: i32) -> Result<&mut Self, CalendarError> {
        self.roll_days(i64::from(day))
    }

    #[allow(clippy::cast_possible_truncation)]
    fn roll_days(&mut self, day: i64) -> Result<&mut Self, CalendarError> {
        let mut next = *self;
        let mut day = day;
        if day <= 0 {
            while day <= 0 {
                next.previous_month();
                day += i64::from(days_in_month(next.month, next.year)?);
            }
        } else {
            let mut max_day = i64::from(days_in_month(next.month, next.year)?);
            while day > max_day {
                day -= max_day;
                next.next_month();
                max_day = i64::from(days_in_month(next.month, next.year)?);
            }
        }
        // day is now within its month
        next.day = day as i32;
        *self = next;
        Ok(self)
    }

    /// Returns this date moved by `years`. Month and day are kept as they are,
    /// so 30 Esfand of a leap year can land on an invalid date. The year
    /// saturates at the `i32` bounds.
    #[must_use]
    pub const fn add_years(mut self, years: i32) -> Self {
        self.year = self.year.saturating_add(years);
        self
    }

    /// Returns this date moved by `months`, carrying into the year. The day is
    /// kept as it is and the year saturates at the `i32` bounds.
    #[must_use]
    pub const fn add_months(mut self, months: i32) -> Self {
        self.roll_months(self.month as i64 - 1 + months as i64);
        self
    }

    /// Returns this date moved by `days`
    ///
    /// # Errors
    /// See [`JalaliDate::set_day`]. Moving past either end of the supported
    /// years fails with `CalendarError::InvalidCalendarYear`.
    pub fn add_days(mut self, days: i32) -> Result<Self, CalendarError> {
        self.roll_days(i64::from(self.day) + i64::from(days))?;
        Ok(self)
    }

    /// Whether the month is in `1..=12` and the day exists in that month
    pub fn is_valid(&self) -> bool {
        (FARVARDIN..=ESFAND).contains(&self.month)
            && days_in_month(self.month, self.year)
                .is_ok_and(|max_day| (MIN_DAY..=max_day).contains(&self.day))
    }

    /// Number of days in this date's month
    ///
    /// # Errors
    /// See [`days_in_month`].
    pub fn days_in_month(&self) -> Result<i32, CalendarError> {
        days_in_month(self.month, self.year)
    }

    /// Whether this date's year has 366 days
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidCalendarYear` for unsupported years.
    pub fn is_leap_year(&self) -> Result<bool, CalendarError> {
        is_leap_year(self.year)
    }

    /// Julian Day Number of this date
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidCalendarYear` for unsupported years.
    pub fn to_julian_day(&self) -> Result<JulianDay, CalendarError> {
        jalali_to_julian_day(self.year, self.month, self.day)
    }

    /// Day of the week, 0 = Sunday through 6 = Saturday
    ///
    /// # Errors
    /// Returns an error if the date cannot be converted to a Gregorian date.
    pub fn day_of_week(&self) -> Result<u8, CalendarError> {
        let gregorian = to_gregorian(self)?;
        // num_days_from_sunday is always below 7
        Ok(gregorian.weekday().num_days_from_sunday() as u8)
    }

    /// Renders the date with the built-in Persian month names.
    ///
    /// `YYYY`, `MMMM`, `MM` and `DD` are replaced; everything else is copied.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the date is not valid.
    pub fn format(&self, template: &str) -> Result<String, CalendarError> {
        self.format_with(template, locale::persian())
    }

    /// Renders the date using the month names of `locale`.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the date is not valid.
    pub fn format_with(&self, template: &str, locale: &Locale) -> Result<String, CalendarError> {
        if !self.is_valid() {
            return Err(CalendarError::InvalidDate(*self));
        }
        Ok(format::render(self, template, locale))
    }

    /// Parses `text` laid out like `template`, e.g. `"DD MMMM YYYY"`.
    ///
    /// # Errors
    /// Returns `ParseError` if the template has no year, month or day, or if
    /// the text does not follow it.
    pub fn parse_with_format(text: &str, template: &str, locale: &Locale) -> Result<Self, ParseError> {
        format::parse(text, template, locale)
    }

    /// ISO-like `YYYY-MM-DD` rendering
    pub fn to_iso8601(&self) -> String {
        format!(
            "{:04}{ISO_SEPARATOR}{:02}{ISO_SEPARATOR}{:02}",
            self.year, self.month, self.day
        )
    }
}

impl FromStr for JalaliDate {
    type Err = ParseError;

    /// Splits `YYYY/MM/DD` into its three integer fields. The fields are not
    /// checked against the calendar; use [`JalaliDate::is_valid`] for that.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => Ok(Self::new(
                parse_field(year)?,
                parse_field(month)?,
                parse_field(day)?,
            )),
            _ => Err(ParseError::InvalidFormat(format!(
                "expected 2 {DATE_SEPARATOR} separators, found {}: {s}",
                parts.len() - 1
            ))),
        }
    }
}

fn parse_field(s: &str) -> Result<i32, ParseError> {
    s.parse::<i32>()
        .map_err(|_| ParseError::InvalidField(s.to_owned()))
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let date: Self = s.parse().map_err(serde::de::Error::custom)?;
        if !date.is_valid() {
            return Err(serde::de::Error::custom(CalendarError::InvalidDate(date)));
        }
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{jalali, valid_jalali};

    #[test]
    fn test_try_new_valid() {
        assert!(JalaliDate::try_new(1403, 1, 1).is_ok());
        assert!(JalaliDate::try_new(1403, 6, 31).is_ok());
        assert!(JalaliDate::try_new(1403, 12, 30).is_ok());
        assert!(JalaliDate::try_new(1402, 12, 29).is_ok());
    }

    #[test]
    fn test_try_new_invalid() {
        assert_eq!(
            JalaliDate::try_new(1403, 13, 1),
            Err(CalendarError::InvalidMonth(13))
        );
        assert_eq!(
            JalaliDate::try_new(1403, 0, 1),
            Err(CalendarError::InvalidMonth(0))
        );
        assert_eq!(
            JalaliDate::try_new(1402, 12, 30),
            Err(CalendarError::InvalidDay {
                year:  1402,
                month: 12,
                day:   30,
            })
        );
        assert!(matches!(
            JalaliDate::try_new(1403, 7, 31),
            Err(CalendarError::InvalidDay { .. })
        ));
        assert!(matches!(
            JalaliDate::try_new(1403, 1, 0),
            Err(CalendarError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_is_valid_cases() {
        struct TestCase {
            date:     JalaliDate,
            is_valid: bool,
        }

        let cases = [
            TestCase {
                date:     jalali(1403, 1, 1),
                is_valid: true,
            },
            TestCase {
                date:     jalali(1403, 6, 31),
                is_valid: true,
            },
            TestCase {
                date:     jalali(1403, 7, 31),
                is_valid: false,
            },
            TestCase {
                date:     jalali(1399, 12, 30),
                is_valid: true,
            },
            TestCase {
                date:     jalali(1400, 12, 30),
                is_valid: false,
            },
            TestCase {
                date:     jalali(1400, 0, 1),
                is_valid: false,
            },
            TestCase {
                date:     jalali(1400, 1, 0),
                is_valid: false,
            },
            TestCase {
                date:     JalaliDate::INVALID,
                is_valid: false,
            },
            TestCase {
                date:     jalali(MAX_JALALI_YEAR, 12, 1),
                is_valid: false,
            },
        ];

        for case in &cases {
            assert_eq!(case.date.is_valid(), case.is_valid, "{}", case.date);
        }
    }

    #[test]
    fn test_set_month_normalizes() {
        let mut date = jalali(1400, 1, 1);
        date.set_month(13);
        assert_eq!(date, jalali(1401, 1, 1));

        let mut date = jalali(1400, 5, 1);
        date.set_month(0);
        assert_eq!(date, jalali(1399, 12, 1));

        let mut date = jalali(1400, 5, 1);
        date.set_month(-12);
        assert_eq!(date, jalali(1398, 12, 1));

        let mut date = jalali(1400, 5, 1);
        date.set_month(25);
        assert_eq!(date, jalali(1402, 1, 1));
    }

    #[test]
    fn test_set_day_borrows_from_previous_month() {
        let mut date = jalali(1400, 1, 1);
        date.set_day(0).unwrap();
        assert_eq!(date, jalali(1399, 12, 30));

        let mut date = jalali(1401, 1, 1);
        date.set_day(0).unwrap();
        assert_eq!(date, jalali(1400, 12, 29));

        let mut date = jalali(1403, 8, 1);
        date.set_day(-30).unwrap();
        assert_eq!(date, jalali(1403, 6, 31));
    }

    #[test]
    fn test_set_day_carries_into_next_month() {
        let mut date = jalali(1403, 1, 1);
        date.set_day(62).unwrap();
        assert_eq!(date, jalali(1403, 2, 31));

        let mut date = jalali(1403, 12, 1);
        date.set_day(31).unwrap();
        assert_eq!(date, jalali(1404, 1, 1));
    }

    #[test]
    fn test_set_day_error_leaves_date_untouched() {
        // Carrying out of Bahman needs the length of an unsupported Esfand
        let mut date = jalali(MAX_JALALI_YEAR, 11, 1);
        assert!(date.set_day(31).is_err());
        assert_eq!(date, jalali(MAX_JALALI_YEAR, 11, 1));
    }

    #[test]
    fn test_add_years() {
        let date = valid_jalali(1400, 5, 10);
        assert_eq!(date.add_years(3), jalali(1403, 5, 10));
        assert_eq!(date.add_years(-400), jalali(1000, 5, 10));
        // Receiver keeps its value
        assert_eq!(date, jalali(1400, 5, 10));
    }

    #[test]
    fn test_add_months() {
        assert_eq!(jalali(1402, 11, 15).add_months(3), jalali(1403, 2, 15));
        assert_eq!(jalali(1402, 1, 15).add_months(-1), jalali(1401, 12, 15));
        assert_eq!(jalali(1402, 5, 10).add_months(-25), jalali(1400, 4, 10));
        assert_eq!(jalali(1402, 5, 10).add_months(24), jalali(1404, 5, 10));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(jalali(1403, 12, 30).add_days(1).unwrap(), jalali(1404, 1, 1));
        assert_eq!(jalali(1402, 12, 29).add_days(1).unwrap(), jalali(1403, 1, 1));
        assert_eq!(jalali(1403, 1, 1).add_days(-1).unwrap(), jalali(1402, 12, 29));
        assert_eq!(jalali(1403, 1, 1).add_days(366).unwrap(), jalali(1404, 1, 1));
        assert_eq!(jalali(1400, 1, 1).add_days(10_000).unwrap(), jalali(1427, 5, 16));
        assert_eq!(jalali(1400, 1, 1).add_days(-10_000).unwrap(), jalali(1372, 8, 12));
    }

    #[test]
    fn test_add_days_matches_julian_day_offset() {
        let start = valid_jalali(1380, 3, 17);
        let start_jdn = start.to_julian_day().unwrap();
        for delta in [-5000, -366, -31, -1, 0, 1, 29, 30, 31, 365, 4321] {
            let moved = start.add_days(delta).unwrap();
            assert!(moved.is_valid(), "{moved}");
            assert_eq!(
                moved.to_julian_day().unwrap(),
                start_jdn.offset(i64::from(delta)),
                "delta {delta}"
            );
        }
    }

    #[test]
    fn test_chaining() {
        let date = jalali(1402, 12, 29)
            .add_years(1)
            .add_months(1)
            .add_days(3)
            .unwrap();
        assert_eq!(date, jalali(1404, 2, 1));
    }

    #[test]
    fn test_month_arithmetic_at_integer_limits() {
        struct TestCase {
            start:    JalaliDate,
            months:   i32,
            expected: JalaliDate,
        }

        let cases = [
            TestCase {
                start:    jalali(1403, 1, 1),
                months:   i32::MAX,
                expected: jalali(178_958_373, 8, 1),
            },
            TestCase {
                start:    jalali(1403, 1, 1),
                months:   i32::MIN,
                expected: jalali(-178_955_568, 5, 1),
            },
            TestCase {
                start:    jalali(i32::MAX, 12, 1),
                months:   1,
                expected: jalali(i32::MAX, 1, 1),
            },
            TestCase {
                start:    jalali(i32::MIN, 1, 1),
                months:   -1,
                expected: jalali(i32::MIN, 12, 1),
            },
        ];

        for case in &cases {
            assert_eq!(
                case.start.add_months(case.months),
                case.expected,
                "{} + {} months",
                case.start,
                case.months
            );
        }

        let mut date = jalali(1403, 1, 1);
        date.set_month(i32::MIN);
        assert_eq!(date, jalali(-178_955_568, 4, 1));
        let mut date = jalali(1403, 1, 1);
        date.set_month(i32::MAX);
        assert_eq!(date, jalali(178_958_373, 7, 1));
    }

    #[test]
    fn test_add_years_saturates() {
        assert_eq!(jalali(1403, 1, 1).add_years(i32::MAX), jalali(i32::MAX, 1, 1));
        assert_eq!(jalali(-1, 1, 1).add_years(i32::MIN), jalali(i32::MIN, 1, 1));
        assert_eq!(jalali(1403, 1, 1).add_years(i32::MIN), jalali(i32::MIN + 1403, 1, 1));
    }

    #[test]
    fn test_add_days_at_integer_limits() {
        let date = jalali(1403, 1, 31);
        assert_eq!(
            date.add_days(i32::MAX),
            Err(CalendarError::InvalidCalendarYear(MAX_JALALI_YEAR))
        );
        assert_eq!(
            date.add_days(i32::MIN),
            Err(CalendarError::InvalidCalendarYear(MIN_JALALI_YEAR - 1))
        );

        let mut date = jalali(1403, 1, 31);
        assert!(date.set_day(i32::MIN).is_err());
        assert!(date.set_day(i32::MAX).is_err());
        assert_eq!(date, jalali(1403, 1, 31));
    }

    #[test]
    fn test_day_of_week() {
        // 2024-03-20 was a Wednesday
        assert_eq!(jalali(1403, 1, 1).day_of_week().unwrap(), 3);
        // 1970-01-01 was a Thursday
        assert_eq!(jalali(1348, 10, 11).day_of_week().unwrap(), 4);
        assert_eq!(jalali(1403, 1, 4).day_of_week().unwrap(), 6);
        assert_eq!(jalali(1403, 1, 5).day_of_week().unwrap(), 0);
    }

    #[test]
    fn test_format() {
        let date = jalali(1403, 1, 1);
        assert_eq!(date.format("YYYY/MM/DD").unwrap(), "1403/01/01");
        assert_eq!(date.format("YYYY MMMM").unwrap(), "1403 فروردین");
        assert_eq!(date.format("DD-MM-YYYY").unwrap(), "01-01-1403");
        assert_eq!(date.format("").unwrap(), "");
        assert_eq!(date.format("Q YYYY").unwrap(), "Q 1403");
    }

    #[test]
    fn test_format_invalid_date() {
        let result = JalaliDate::INVALID.format("YYYY/MM/DD");
        assert_eq!(result, Err(CalendarError::InvalidDate(JalaliDate::INVALID)));
        assert!(jalali(1402, 12, 30).format("YYYY").is_err());
    }

    #[test]
    fn test_display_and_iso() {
        let date = jalali(1403, 2, 9);
        assert_eq!(date.to_string(), "1403/02/09");
        assert_eq!(date.to_iso8601(), "1403-02-09");
        assert_eq!(jalali(-61, 1, 1).to_string(), "-061/01/01");
    }

    #[test]
    fn test_parse() {
        let date = "1403/01/01".parse::<JalaliDate>().unwrap();
        assert_eq!(date, jalali(1403, 1, 1));

        let date = " 1403 / 2 / 9 ".parse::<JalaliDate>().unwrap();
        assert_eq!(date, jalali(1403, 2, 9));

        // Fields are split, not validated
        let date = "1403/13/40".parse::<JalaliDate>().unwrap();
        assert_eq!(date, jalali(1403, 13, 40));
        assert!(!date.is_valid());

        let date = "-061/01/01".parse::<JalaliDate>().unwrap();
        assert_eq!(date, jalali(-61, 1, 1));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<JalaliDate>(), Err(ParseError::EmptyInput));
        assert_eq!("   ".parse::<JalaliDate>(), Err(ParseError::EmptyInput));
        assert!(matches!(
            "1403/01".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1403/01/01/01".parse::<JalaliDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert_eq!(
            "1403/XX/01".parse::<JalaliDate>(),
            Err(ParseError::InvalidField("XX".to_owned()))
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = "1403/01".parse::<JalaliDate>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid date format: expected 2 / separators, found 1: 1403/01"
        );
        let err = "1403/a/01".parse::<JalaliDate>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid date field: \"a\"");
    }

    #[test]
    fn test_ordering() {
        assert!(jalali(1402, 12, 29) < jalali(1403, 1, 1));
        assert!(jalali(1403, 1, 31) < jalali(1403, 2, 1));
        assert!(jalali(1403, 2, 1) < jalali(1403, 2, 2));
    }

    #[test]
    fn test_serde() {
        let date = jalali(1403, 1, 1);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""1403/01/01""#);
        let parsed: JalaliDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1402/12/30""#);
        assert!(result.is_err());

        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1403/13/01""#);
        assert!(result.is_err());

        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1403-01-01""#);
        assert!(result.is_err());

        let result: Result<JalaliDate, _> = serde_json::from_str(r#""1403/12/30""#);
        assert!(result.is_ok());
    }
}
