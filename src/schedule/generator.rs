//! Iterative schedule generation

use chrono::NaiveDate;

use super::entry::{AmortizationEntry, AmortizationSchedule};
use super::payment::payment_unrounded;
use crate::dates::add_months;
use crate::loan::LoanTerms;
use crate::money::round_cents;

/// Generate the full amortization schedule for a set of loan terms.
///
/// Emits exactly `term_months` entries. For each month: interest accrues on
/// the outstanding balance at `annual_rate / 12`, the remainder of the
/// payment retires principal, and the balance is floored at 0. The same
/// payment amount is used for every entry; there is no re-amortization
/// mid-schedule.
///
/// The balance carried between iterations keeps full precision and each
/// emitted field is rounded to cents. With the derived payment the final
/// entry lands at a balance of 0.00. A caller-supplied `payment_override`
/// (e.g. a stored, already-rounded payment) is used as given; any terminal
/// residue it leaves is clamped at 0, never negative.
pub fn generate_schedule(
    terms: &LoanTerms,
    payment_override: Option<f64>,
) -> AmortizationSchedule {
    let monthly_rate = terms.monthly_rate();
    let payment = payment_override
        .unwrap_or_else(|| payment_unrounded(terms.principal, terms.annual_rate, terms.term_months));

    let mut entries = Vec::with_capacity(terms.term_months as usize);
    let mut balance = terms.principal;

    for number in 1..=terms.term_months {
        let interest = balance * monthly_rate;
        let principal_portion = payment - interest;
        balance = (balance - principal_portion).max(0.0);

        entries.push(AmortizationEntry {
            payment_number: number,
            payment_date: add_months(terms.start_date, number),
            payment_amount: round_cents(payment),
            principal_paid: round_cents(principal_portion),
            interest_paid: round_cents(interest),
            remaining_balance_after: round_cents(balance),
        });
    }

    AmortizationSchedule {
        principal: terms.principal,
        annual_rate: terms.annual_rate,
        term_months: terms.term_months,
        start_date: terms.start_date,
        monthly_payment: round_cents(payment),
        entries,
    }
}

/// Balance outstanding after `payments_made` scheduled payments.
///
/// `principal` when nothing has been paid; 0 once the full term has elapsed;
/// otherwise the balance-after of the corresponding entry from a fresh
/// schedule. Only the amounts matter here, so the schedule is anchored at an
/// arbitrary date.
pub fn remaining_balance(
    principal: f64,
    annual_rate: f64,
    term_months: u32,
    payments_made: u32,
) -> f64 {
    if payments_made == 0 {
        return principal;
    }
    if payments_made >= term_months {
        return 0.0;
    }

    let anchor = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN);
    let terms = LoanTerms::new(principal, annual_rate, term_months, anchor);
    let schedule = generate_schedule(&terms, None);
    schedule
        .entry(payments_made)
        .map(|e| e.remaining_balance_after)
        .unwrap_or(0.0)
}
