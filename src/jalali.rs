use crate::{
    ESFAND, ESFAND_COMMON_DAYS, FARVARDIN, GREGORIAN_YEAR_OFFSET, JalaliDate, LONG_MONTH_DAYS,
    MAX_JALALI_YEAR, MAX_JULIAN_DAY, MIN_JALALI_YEAR, MIN_JULIAN_DAY, SHORT_MONTH_DAYS,
    arith::{div_trunc, mod_floor},
    calendar::{CalendarError, jal_cal},
    consts::{MEHR_DAY_OFFSET, PREVIOUS_YEAR_TAIL},
    julian::{JulianDay, gregorian_to_julian_day, julian_day_to_gregorian},
};

/// Converts a Jalali date to its Julian Day Number.
///
/// Month and day are not validated; only the year must be inside the
/// break-point table.
///
/// # Errors
/// Returns `CalendarError::InvalidCalendarYear` if the year is unsupported.
pub fn jalali_to_julian_day(year: i32, month: i32, day: i32) -> Result<JulianDay, CalendarError> {
    let rule = jal_cal(year)?;
    let (jm, jd) = (i64::from(month), i64::from(day));
    let new_year = gregorian_to_julian_day(rule.gregorian_year, 3, rule.march_day);
    Ok(new_year.offset((jm - 1) * 31 - div_trunc(jm, 7) * (jm - 7) + jd - 1))
}

/// Converts a Julian Day Number to a Jalali date.
///
/// Day numbers from [`MIN_JULIAN_DAY`] up to, not including,
/// [`MAX_JULIAN_DAY`] are supported.
///
/// # Errors
/// Returns `CalendarError::InvalidCalendarYear` if the day falls outside the
/// supported range.
pub fn julian_day_to_jalali(jdn: JulianDay) -> Result<JalaliDate, CalendarError> {
    if jdn.get() < MIN_JULIAN_DAY {
        log::debug!("julian day {jdn} before 1 Farvardin {MIN_JALALI_YEAR}");
        return Err(CalendarError::InvalidCalendarYear(MIN_JALALI_YEAR - 1));
    }
    if jdn.get() >= MAX_JULIAN_DAY {
        log::debug!("julian day {jdn} past the supported range");
        return Err(CalendarError::InvalidCalendarYear(MAX_JALALI_YEAR));
    }

    let (gy, _, _) = julian_day_to_gregorian(jdn)?;
    let mut year = gy - GREGORIAN_YEAR_OFFSET;
    let rule = jal_cal(year)?;

    // Days since 1 Farvardin of `year`
    let mut k = jdn.get() - gregorian_to_julian_day(gy, 3, rule.march_day).get();
    if k >= 0 {
        if k < MEHR_DAY_OFFSET {
            return Ok(JalaliDate::new(year, 1 + div_trunc(k, 31) as i32, mod_floor(k, 31) as i32 + 1));
        }
        k -= MEHR_DAY_OFFSET;
    } else {
        // Still in the previous Jalali year, which was leap iff this one has
        // leap index 1.
        year -= 1;
        k += PREVIOUS_YEAR_TAIL;
        if rule.leap_index == 1 {
            k += 1;
        }
    }

    Ok(JalaliDate::new(year, 7 + div_trunc(k, 30) as i32, mod_floor(k, 30) as i32 + 1))
}

/// Number of days in a Jalali month.
///
/// Only Esfand consults the rule table, so months 1 through 11 succeed for any
/// year.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` for months outside `1..=12` and
/// `CalendarError::InvalidCalendarYear` for Esfand of an unsupported year.
pub fn days_in_month(month: i32, year: i32) -> Result<i32, CalendarError> {
    match month {
        FARVARDIN..=6 => Ok(LONG_MONTH_DAYS),
        7..=11 => Ok(SHORT_MONTH_DAYS),
        ESFAND => {
            if jal_cal(year)?.is_leap() {
                Ok(SHORT_MONTH_DAYS)
            } else {
                Ok(ESFAND_COMMON_DAYS)
            }
        }
        _ => Err(CalendarError::InvalidMonth(month)),
    }
}
