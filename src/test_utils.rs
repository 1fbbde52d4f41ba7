//! Shared constructors for unit tests.

use chrono::NaiveDate;

use crate::JalaliDate;

/// Jalali date from raw components, no validation
pub const fn jalali(year: i32, month: i32, day: i32) -> JalaliDate {
    JalaliDate::new(year, month, day)
}

/// Jalali date that must be valid
pub fn valid_jalali(year: i32, month: i32, day: i32) -> JalaliDate {
    JalaliDate::try_new(year, month, day).expect("test date must be valid")
}

/// Proleptic Gregorian date that must exist
pub fn gregorian(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must exist")
}
