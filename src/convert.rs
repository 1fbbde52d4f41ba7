//! Conversion between Jalali dates and chrono's Gregorian dates.

use chrono::{Datelike, Local, NaiveDate};

use crate::{
    JalaliDate,
    calendar::CalendarError,
    jalali::{jalali_to_julian_day, julian_day_to_jalali},
    julian::{gregorian_to_julian_day, julian_day_to_gregorian},
};

pub use crate::jalali::days_in_month;

/// Converts any chrono date (or date-time, by its calendar date) to Jalali.
///
/// # Errors
/// Returns `CalendarError::InvalidCalendarYear` outside the supported range.
pub fn from_gregorian<D: Datelike>(date: &D) -> Result<JalaliDate, CalendarError> {
    // month and day are at most 31
    let jdn = gregorian_to_julian_day(date.year(), date.month() as i32, date.day() as i32);
    julian_day_to_jalali(jdn)
}

/// Converts a Jalali date to a Gregorian calendar date. No time of day is
/// attached.
///
/// Month and day are used arithmetically as they are; validate first if the
/// input may be out of range.
///
/// # Errors
/// Returns `CalendarError::InvalidCalendarYear` for unsupported years and
/// `CalendarError::OutOfRange` if chrono cannot hold the result.
pub fn to_gregorian(date: &JalaliDate) -> Result<NaiveDate, CalendarError> {
    let jdn = jalali_to_julian_day(date.year(), date.month(), date.day())?;
    let (year, month, day) = julian_day_to_gregorian(jdn)?;
    log::trace!("{date} -> jdn {jdn} -> {year}-{month:02}-{day:02}");

    let month = u32::try_from(month).map_err(|_| CalendarError::OutOfRange(jdn.get()))?;
    let day = u32::try_from(day).map_err(|_| CalendarError::OutOfRange(jdn.get()))?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(CalendarError::OutOfRange(jdn.get()))
}

/// Today's Jalali date by the local clock
///
/// # Errors
/// Returns an error only if the local date is outside the supported range.
pub fn today() -> Result<JalaliDate, CalendarError> {
    from_gregorian(&Local::now().date_naive())
}

impl TryFrom<NaiveDate> for JalaliDate {
    type Error = CalendarError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        from_gregorian(&value)
    }
}

impl TryFrom<JalaliDate> for NaiveDate {
    type Error = CalendarError;

    fn try_from(value: JalaliDate) -> Result<Self, Self::Error> {
        to_gregorian(&value)
    }
}
