use chrono::NaiveDate;

use crate::{
    ISO_DATE_FORMAT, JalaliDate, Locale, MONTHS_PER_YEAR, NameStyle, ParseError, calendar::CalendarError,
    convert::{days_in_month, from_gregorian, today},
};

/// Date operations a calendar widget needs, bound to one [`Locale`].
///
/// Months are 0-based here (0 = Farvardin), as date pickers usually expect;
/// [`JalaliDate`] itself is 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JalaliDateProvider {
    locale: Locale,
}

impl JalaliDateProvider {
    /// Creates a provider bound to `locale`
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the locale in use
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Jalali year of `date`
    pub const fn year(&self, date: &JalaliDate) -> i32 {
        date.year()
    }

    /// 0-based month index
    pub const fn month(&self, date: &JalaliDate) -> i32 {
        date.month() - 1
    }

    /// Day of the month
    pub const fn date(&self, date: &JalaliDate) -> i32 {
        date.day()
    }

    /// 0 = Sunday through 6 = Saturday
    ///
    /// # Errors
    /// See [`JalaliDate::day_of_week`].
    pub fn day_of_week(&self, date: &JalaliDate) -> Result<u8, CalendarError> {
        date.day_of_week()
    }

    /// Month names in the given style, Farvardin first
    pub const fn month_names(&self, style: NameStyle) -> &[String; 12] {
        self.locale.month_names(style)
    }

    /// Labels for the days of the month, "1" through "31"
    pub fn date_names(&self) -> Vec<String> {
        (1..=31).map(|day: i32| day.to_string()).collect()
    }

    /// Weekday names in the given style, Sunday first
    pub const fn day_of_week_names(&self, style: NameStyle) -> &[String; 7] {
        self.locale.weekday_names(style)
    }

    /// Label for the year of `date`
    pub fn year_name(&self, date: &JalaliDate) -> String {
        date.year().to_string()
    }

    /// First day of the week, 0 = Sunday
    pub const fn first_day_of_week(&self) -> u8 {
        self.locale.first_day_of_week
    }

    /// Number of days in the month of `date`
    ///
    /// # Errors
    /// See [`days_in_month`].
    pub fn num_days_in_month(&self, date: &JalaliDate) -> Result<i32, CalendarError> {
        days_in_month(date.month(), date.year())
    }

    /// Creates a valid date from a 0-based month index.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` (reported 1-based) if the index is
    /// outside `0..=11` and `CalendarError::InvalidDay` if the day does not
    /// exist in that month.
    pub fn create_date(&self, year: i32, month_index: i32, day: i32) -> Result<JalaliDate, CalendarError> {
        if !(0..MONTHS_PER_YEAR).contains(&month_index) {
            return Err(CalendarError::InvalidMonth(month_index.saturating_add(1)));
        }
        JalaliDate::try_new(year, month_index + 1, day)
    }

    /// Today's date by the local clock
    ///
    /// # Errors
    /// See [`today`].
    pub fn today(&self) -> Result<JalaliDate, CalendarError> {
        today()
    }

    /// Parses `text` with the locale's parse layout. The result may still be
    /// invalid; check it with [`JalaliDateProvider::is_valid`].
    ///
    /// # Errors
    /// Returns `ParseError` if the text does not follow the layout.
    pub fn parse(&self, text: &str) -> Result<JalaliDate, ParseError> {
        JalaliDate::parse_with_format(text, &self.locale.formats.parse, &self.locale)
    }

    /// Renders `date` with `template` and this locale's month names
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the date is not valid.
    pub fn format(&self, date: &JalaliDate, template: &str) -> Result<String, CalendarError> {
        date.format_with(template, &self.locale)
    }

    /// Renders with the locale's `date_input` display layout
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the date is not valid.
    pub fn format_date_input(&self, date: &JalaliDate) -> Result<String, CalendarError> {
        self.format(date, &self.locale.formats.display.date_input)
    }

    /// Renders with the locale's `month_year_label` display layout
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the date is not valid.
    pub fn format_month_year_label(&self, date: &JalaliDate) -> Result<String, CalendarError> {
        self.format(date, &self.locale.formats.display.month_year_label)
    }

    /// Renders with the locale's `date_a11y_label` display layout
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the date is not valid.
    pub fn format_date_a11y_label(&self, date: &JalaliDate) -> Result<String, CalendarError> {
        self.format(date, &self.locale.formats.display.date_a11y_label)
    }

    /// Renders with the locale's `month_year_a11y_label` display layout
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the date is not valid.
    pub fn format_month_year_a11y_label(&self, date: &JalaliDate) -> Result<String, CalendarError> {
        self.format(date, &self.locale.formats.display.month_year_a11y_label)
    }

    /// See [`JalaliDate::add_years`]
    pub const fn add_calendar_years(&self, date: &JalaliDate, years: i32) -> JalaliDate {
        date.add_years(years)
    }

    /// See [`JalaliDate::add_months`]
    pub const fn add_calendar_months(&self, date: &JalaliDate, months: i32) -> JalaliDate {
        date.add_months(months)
    }

    /// See [`JalaliDate::add_days`]
    ///
    /// # Errors
    /// See [`JalaliDate::add_days`].
    pub fn add_calendar_days(&self, date: &JalaliDate, days: i32) -> Result<JalaliDate, CalendarError> {
        date.add_days(days)
    }

    /// ISO-like `YYYY-MM-DD` rendering
    pub fn to_iso8601(&self, date: &JalaliDate) -> String {
        date.to_iso8601()
    }

    /// Whether `date` exists in the calendar
    pub fn is_valid(&self, date: &JalaliDate) -> bool {
        date.is_valid()
    }

    /// The invalid-date sentinel
    pub const fn invalid(&self) -> JalaliDate {
        JalaliDate::INVALID
    }

    /// Converts a Gregorian date, keeping only valid results
    pub fn deserialize(&self, value: &NaiveDate) -> Option<JalaliDate> {
        from_gregorian(value).ok().filter(JalaliDate::is_valid)
    }

    /// Reads an ISO-like `YYYY-MM-DD` Jalali string, keeping only valid
    /// results. Empty input gives `None`.
    pub fn deserialize_str(&self, value: &str) -> Option<JalaliDate> {
        JalaliDate::parse_with_format(value, ISO_DATE_FORMAT, &self.locale)
            .ok()
            .filter(JalaliDate::is_valid)
    }
}
