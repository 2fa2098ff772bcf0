//! Payoff-date projection under a given payment stream

use chrono::NaiveDate;

use crate::dates::add_months;

/// Safety cap on simulated months (100 years).
///
/// A payment that does not exceed accrued interest never amortizes; the cap
/// bounds the simulation so such inputs yield a date a century out instead
/// of looping forever.
pub const MAX_PAYOFF_MONTHS: u32 = 1200;

/// Project the date a balance reaches zero under a fixed monthly payment.
///
/// Simulates forward month by month with the same interest/principal split
/// as schedule generation. Returns `as_of` unchanged when there is nothing
/// left to pay, and `as_of + MAX_PAYOFF_MONTHS` months when the payment
/// never amortizes the balance.
pub fn payoff_date(
    remaining_balance: f64,
    monthly_payment: f64,
    annual_rate: f64,
    as_of: NaiveDate,
) -> NaiveDate {
    if remaining_balance <= 0.0 {
        return as_of;
    }

    let monthly_rate = annual_rate / 12.0;
    let mut balance = remaining_balance;
    let mut months = 0;

    while balance > 0.0 && months < MAX_PAYOFF_MONTHS {
        let interest = balance * monthly_rate;
        let principal_portion = monthly_payment - interest;
        balance -= principal_portion;
        months += 1;
    }

    add_months(as_of, months)
}
