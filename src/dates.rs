//! Calendar-month date arithmetic
//!
//! Every date the engine produces comes from one of the two functions here,
//! so the month-overflow rule is applied uniformly: adding a month to a date
//! whose day does not exist in the target month clamps to the last day of
//! that month (Jan 31 + 1 month = Feb 28, or Feb 29 in a leap year).

use chrono::{Datelike, Months, NaiveDate};

/// Add `months` calendar months to a date, clamping the day-of-month.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    // Out of range only near NaiveDate::MAX (year ~262143); saturate there
    // rather than panic so the engine stays total over all inputs.
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Count how many monthly boundaries lie between two dates, clamped to >= 0.
///
/// `(current.year - start.year) * 12 + (current.month - start.month)`.
/// Day-of-month is ignored: Jan 15 -> Feb 10 counts as 1. This is a coarse
/// boundary count, not a payment-ledger count.
pub fn months_between(start: NaiveDate, current: NaiveDate) -> u32 {
    let elapsed = (current.year() - start.year()) * 12
        + (current.month() as i32 - start.month() as i32);
    elapsed.max(0) as u32
}
