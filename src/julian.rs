use serde::{Deserialize, Serialize};

use crate::{
    arith::{div_trunc, mod_floor},
    calendar::CalendarError,
    prelude::*,
};

/// Continuous day count since the Julian epoch, the pivot between calendars.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct JulianDay(i64);

impl JulianDay {
    /// Wraps a raw day number
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw day number
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Returns the day `days` after this one (before, if negative)
    #[inline]
    pub const fn offset(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

/// Converts a proleptic Gregorian date to its Julian Day Number.
///
/// The input is not validated: out-of-range months or days still produce a
/// definite number, and it is up to the caller to pass a real date.
pub fn gregorian_to_julian_day(year: i32, month: i32, day: i32) -> JulianDay {
    let (gy, gm, gd) = (i64::from(year), i64::from(month), i64::from(day));
    let shift = div_trunc(gm - 8, 6);

    let mut jdn = div_trunc((gy + shift + 100_100) * 1461, 4)
        + div_trunc(153 * mod_floor(gm + 9, 12) + 2, 5)
        + gd
        - 34_840_408;
    jdn = jdn - div_trunc(div_trunc(gy + 100_100 + shift, 100) * 3, 4) + 752;
    JulianDay(jdn)
}

/// Converts a Julian Day Number back to a proleptic Gregorian `(year, month, day)`.
///
/// Years are astronomical: 0 is 1 BC, -1 is 2 BC and so on.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the day number is too large for the
/// intermediate arithmetic or the year does not fit in an `i32`.
pub fn julian_day_to_gregorian(jdn: JulianDay) -> Result<(i32, i32, i32), CalendarError> {
    let out_of_range = || CalendarError::OutOfRange(jdn.get());
    let quad = jdn.get().checked_mul(4).ok_or_else(out_of_range)?;

    let mut j = quad.checked_add(139_361_631).ok_or_else(out_of_range)?;
    let century = div_trunc(quad.checked_add(183_187_720).ok_or_else(out_of_range)?, 146_097);
    j = j
        .checked_add(div_trunc(century * 3, 4) * 4 - 3908)
        .ok_or_else(out_of_range)?;
    let i = div_trunc(mod_floor(j, 1461), 4) * 5 + 308;

    let day = div_trunc(mod_floor(i, 153), 5) + 1;
    let month = mod_floor(div_trunc(i, 153), 12) + 1;
    let year = div_trunc(j, 1461) - 100_100 + div_trunc(8 - month, 6);

    let year = i32::try_from(year).map_err(|_| out_of_range())?;
    // month is in 1..=12 and day in 1..=31
    Ok((year, month as i32, day as i32))
}
