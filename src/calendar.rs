use serde::{Deserialize, Serialize};

use crate::{
    BREAKS, GREGORIAN_YEAR_OFFSET, JalaliDate, MAX_JALALI_YEAR, MIN_JALALI_YEAR,
    arith::{div_trunc, mod_floor},
    consts::{CYCLE_LEAPS, CYCLE_YEARS, INITIAL_LEAP_COUNT},
};

/// Error type for calendar conversions and date validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Jalali year outside the break-point table.
    #[error("Invalid Jalali year {0} (must be {min}..{max})", min = MIN_JALALI_YEAR, max = MAX_JALALI_YEAR)]
    InvalidCalendarYear(i32),

    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(i32),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {year}/{month:02}")]
    InvalidDay { year: i32, month: i32, day: i32 },

    /// An operation that needs a valid date was handed an invalid one.
    #[error("Invalid date: {0}")]
    InvalidDate(JalaliDate),

    /// Julian Day Number the host date type or the day arithmetic cannot
    /// represent.
    #[error("Julian day {0} is out of range")]
    OutOfRange(i64),
}

/// Per-year result of the 33-year intercalation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarRule {
    /// Years since the last leap year, `0..=4`. Zero marks a 366-day year.
    pub leap_index:     u8,
    /// Gregorian year in which the Jalali year begins
    pub gregorian_year: i32,
    /// Day of Gregorian March on which 1 Farvardin falls
    pub march_day:      i32,
}

impl CalendarRule {
    /// Whether this Jalali year has 366 days
    #[inline]
    pub const fn is_leap(&self) -> bool {
        self.leap_index == 0
    }
}

/// Applies the break-point table to a Jalali year.
///
/// Finds how many leap years have passed since the start of the table, where
/// the year falls in its local leap cycle, and the day of March on which it
/// begins.
///
/// # Errors
/// Returns `CalendarError::InvalidCalendarYear` unless
/// `MIN_JALALI_YEAR <= jalali_year < MAX_JALALI_YEAR`.
pub fn jal_cal(jalali_year: i32) -> Result<CalendarRule, CalendarError> {
    if !(MIN_JALALI_YEAR..MAX_JALALI_YEAR).contains(&jalali_year) {
        log::debug!("jal_cal: year {jalali_year} outside the break-point table");
        return Err(CalendarError::InvalidCalendarYear(jalali_year));
    }

    let jy = i64::from(jalali_year);
    let mut leap_j = INITIAL_LEAP_COUNT;
    let mut jp = i64::from(BREAKS[0]);
    let mut jump = 0;

    // Find the pair of break points enclosing the year.
    for &jm in &BREAKS[1..] {
        let jm = i64::from(jm);
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += div_trunc(jump, CYCLE_YEARS) * CYCLE_LEAPS + div_trunc(mod_floor(jump, CYCLE_YEARS), 4);
        jp = jm;
    }

    let mut n = jy - jp;
    leap_j += div_trunc(n, CYCLE_YEARS) * CYCLE_LEAPS + div_trunc(mod_floor(n, CYCLE_YEARS) + 3, 4);
    if mod_floor(jump, CYCLE_YEARS) == 4 && jump - n == 4 {
        leap_j += 1;
    }

    let gregorian_year = jalali_year + GREGORIAN_YEAR_OFFSET;
    let gy = i64::from(gregorian_year);
    let leap_g = div_trunc(gy, 4) - div_trunc((div_trunc(gy, 100) + 1) * 3, 4) - 150;
    let march_day = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + div_trunc(jump + 4, CYCLE_YEARS) * CYCLE_YEARS;
    }
    let raw = mod_floor(n + 1, CYCLE_YEARS) - 1;
    let leap_index = if raw == -1 { 4 } else { mod_floor(raw, 4) };

    log::trace!(
        "jal_cal({jalali_year}): leap_index={leap_index} gregorian_year={gregorian_year} march_day={march_day}"
    );

    // leap_index is in 0..=4 and march_day within a few days of the equinox
    Ok(CalendarRule {
        leap_index: leap_index as u8,
        gregorian_year,
        march_day: march_day as i32,
    })
}

/// Returns whether the Jalali year has 366 days.
///
/// # Errors
/// Returns `CalendarError::InvalidCalendarYear` for years outside the table.
pub fn is_leap_year(jalali_year: i32) -> Result<bool, CalendarError> {
    jal_cal(jalali_year).map(|rule| rule.is_leap())
}
