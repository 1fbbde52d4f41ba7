//! Name tables and format strings, loadable from JSON.
//!
//! Every field falls back to the Persian defaults when missing, so a config
//! file only has to list what it overrides.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, DEFAULT_DATE_FORMAT, DEFAULT_MONTH_YEAR_FORMAT, ESFAND, FARVARDIN, SATURDAY};

const PERSIAN_LONG_MONTHS: [&str; 12] = [
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

const PERSIAN_SHORT_MONTHS: [&str; 12] = [
    "فرو", "اردی", "خرد", "تیر", "مرد", "شهر", "مهر", "آبان", "آذر", "دی", "بهمن", "اسف",
];

const PERSIAN_NARROW_MONTHS: [&str; 12] = [
    "فر", "ار", "خر", "تی", "مر", "شه", "مه", "آ", "آذ", "دی", "به", "اس",
];

// Weekdays start at Sunday
const PERSIAN_LONG_WEEKDAYS: [&str; 7] = [
    "یکشنبه",
    "دوشنبه",
    "سه\u{200C}شنبه",
    "چهارشنبه",
    "پنجشنبه",
    "جمعه",
    "شنبه",
];

const PERSIAN_SHORT_WEEKDAYS: [&str; 7] = ["یک", "دو", "سه", "چهار", "پنج", "جمعه", "شنبه"];

const PERSIAN_NARROW_WEEKDAYS: [&str; 7] = ["ی", "د", "س", "چ", "پ", "ج", "ش"];

static PERSIAN: Lazy<Locale> = Lazy::new(Locale::persian);

/// The built-in Persian locale
pub(crate) fn persian() -> &'static Locale {
    &PERSIAN
}

/// Error type for loading a locale.
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// Malformed JSON, or a name table of the wrong length.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// First day of the week outside `0..=6`.
    #[error("Invalid first day of week: {0} (must be 0-6, 0 = Sunday)")]
    InvalidFirstDayOfWeek(u8),
}

/// Width of a month or weekday name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    #[default]
    Long,
    Short,
    Narrow,
}

/// Layouts for rendering dates in different places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormats {
    pub date_input:            String,
    pub month_year_label:      String,
    pub date_a11y_label:       String,
    pub month_year_a11y_label: String,
}

impl Default for DisplayFormats {
    fn default() -> Self {
        Self {
            date_input:            DEFAULT_DATE_FORMAT.to_owned(),
            month_year_label:      DEFAULT_MONTH_YEAR_FORMAT.to_owned(),
            date_a11y_label:       DEFAULT_DATE_FORMAT.to_owned(),
            month_year_a11y_label: DEFAULT_MONTH_YEAR_FORMAT.to_owned(),
        }
    }
}

/// Parse layout plus display layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormats {
    pub parse:   String,
    pub display: DisplayFormats,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            parse:   DEFAULT_DATE_FORMAT.to_owned(),
            display: DisplayFormats::default(),
        }
    }
}

/// Month and weekday names, first day of the week and date layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub long_months:       [String; 12],
    pub short_months:      [String; 12],
    pub narrow_months:     [String; 12],
    /// Index 0 is Sunday
    pub long_weekdays:     [String; 7],
    pub short_weekdays:    [String; 7],
    pub narrow_weekdays:   [String; 7],
    /// 0 = Sunday through 6 = Saturday
    pub first_day_of_week: u8,
    pub formats:           DateFormats,
}

impl Default for Locale {
    fn default() -> Self {
        Self::persian()
    }
}

impl Locale {
    /// Persian (fa-IR) names, weeks starting on Saturday
    pub fn persian() -> Self {
        Self {
            long_months:       PERSIAN_LONG_MONTHS.map(str::to_owned),
            short_months:      PERSIAN_SHORT_MONTHS.map(str::to_owned),
            narrow_months:     PERSIAN_NARROW_MONTHS.map(str::to_owned),
            long_weekdays:     PERSIAN_LONG_WEEKDAYS.map(str::to_owned),
            short_weekdays:    PERSIAN_SHORT_WEEKDAYS.map(str::to_owned),
            narrow_weekdays:   PERSIAN_NARROW_WEEKDAYS.map(str::to_owned),
            first_day_of_week: SATURDAY,
            formats:           DateFormats::default(),
        }
    }

    /// Loads a locale from JSON, filling missing fields from the Persian one.
    ///
    /// # Errors
    /// Returns `LocaleError::Json` for malformed input or tables of the wrong
    /// length, and `LocaleError::InvalidFirstDayOfWeek` if the first day is not
    /// a weekday index.
    pub fn from_json(json: &str) -> Result<Self, LocaleError> {
        let locale: Self = serde_json::from_str(json)?;
        if locale.first_day_of_week >= DAYS_PER_WEEK {
            return Err(LocaleError::InvalidFirstDayOfWeek(locale.first_day_of_week));
        }
        log::debug!(
            "loaded locale: first_day_of_week={} parse format {:?}",
            locale.first_day_of_week,
            locale.formats.parse
        );
        Ok(locale)
    }

    /// Month names in the given style, Farvardin first
    pub const fn month_names(&self, style: NameStyle) -> &[String; 12] {
        match style {
            NameStyle::Long => &self.long_months,
            NameStyle::Short => &self.short_months,
            NameStyle::Narrow => &self.narrow_months,
        }
    }

    /// Weekday names in the given style, Sunday first
    pub const fn weekday_names(&self, style: NameStyle) -> &[String; 7] {
        match style {
            NameStyle::Long => &self.long_weekdays,
            NameStyle::Short => &self.short_weekdays,
            NameStyle::Narrow => &self.narrow_weekdays,
        }
    }

    /// Name of a 1-based month, `None` outside `1..=12`
    pub fn month_name(&self, month: i32, style: NameStyle) -> Option<&str> {
        if !(FARVARDIN..=ESFAND).contains(&month) {
            return None;
        }
        let index = usize::try_from(month - 1).ok()?;
        self.month_names(style).get(index).map(String::as_str)
    }

    /// 1-based month whose long name is `name`
    pub fn month_from_name(&self, name: &str) -> Option<i32> {
        self.long_months
            .iter()
            .position(|candidate| candidate == name)
            .and_then(|index| i32::try_from(index + 1).ok())
    }
}
