//! Mutable loan state and payment recording

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LoanStatus, LoanTerms};
use crate::dates::add_months;
use crate::money::round_cents;
use crate::schedule::monthly_payment;

/// State of a loan at a point in time.
///
/// Created alongside the terms when a loan is opened and evolved exclusively
/// through [`record_payment`](Self::record_payment) or an explicit terms
/// edit. Every transition returns a fresh value; the caller owns persistence
/// and must apply at most one `record_payment` per real-world payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanState {
    /// Balance outstanding, >= 0
    pub remaining_balance: f64,

    /// Cumulative sum of all payment amounts recorded
    pub total_paid: f64,

    /// Cumulative sum of interest portions recorded
    pub interest_paid: f64,

    /// Scheduled payment derived from the terms
    pub monthly_payment: f64,

    /// Lifecycle status
    pub status: LoanStatus,

    /// Due date of the next payment; advances one month per recorded
    /// payment while the loan is active
    pub next_payment_date: NaiveDate,
}

impl LoanState {
    /// Initial state for newly opened terms: full balance, nothing paid,
    /// first payment due one month after the start date.
    pub fn open(terms: &LoanTerms) -> Self {
        Self {
            remaining_balance: round_cents(terms.principal),
            total_paid: 0.0,
            interest_paid: 0.0,
            monthly_payment: monthly_payment(terms.principal, terms.annual_rate, terms.term_months),
            status: LoanStatus::Active,
            next_payment_date: add_months(terms.start_date, 1),
        }
    }

    /// Apply one payment and return the updated state.
    ///
    /// One month of interest accrues on the outstanding balance; the
    /// remainder of the payment retires principal. A payment smaller than
    /// the accrued interest makes the principal portion negative and the
    /// balance grow — accepted, not rejected. The balance reaching exactly
    /// 0 flips the status to `PaidOff` irreversibly and leaves the next
    /// payment date untouched; otherwise an active loan's next payment date
    /// advances to one month after `payment_date`.
    ///
    /// Never fails: there are no invalid inputs, only unusual outputs.
    /// Validating `payment_amount > 0` is the caller's concern.
    pub fn record_payment(
        &self,
        terms: &LoanTerms,
        payment_amount: f64,
        payment_date: NaiveDate,
    ) -> Self {
        let interest_charge = self.remaining_balance * terms.monthly_rate();
        let principal_portion = payment_amount - interest_charge;
        let new_balance = round_cents((self.remaining_balance - principal_portion).max(0.0));

        let paid_off = new_balance == 0.0;
        let status = if paid_off { LoanStatus::PaidOff } else { self.status };

        let next_payment_date = if !paid_off && self.status == LoanStatus::Active {
            add_months(payment_date, 1)
        } else {
            self.next_payment_date
        };

        Self {
            remaining_balance: new_balance,
            total_paid: round_cents(self.total_paid + payment_amount),
            interest_paid: round_cents(self.interest_paid + interest_charge),
            monthly_payment: self.monthly_payment,
            status,
            next_payment_date,
        }
    }

    /// Recompute the derived payment after a terms edit; everything else is
    /// carried over unchanged.
    pub fn with_edited_terms(&self, terms: &LoanTerms) -> Self {
        Self {
            monthly_payment: monthly_payment(terms.principal, terms.annual_rate, terms.term_months),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn car_loan() -> LoanTerms {
        LoanTerms::new(10_000.0, 0.06, 12, date(2025, 1, 1))
    }

    #[test]
    fn test_record_payment_splits_interest_and_principal() {
        let terms = car_loan();
        let state = LoanState::open(&terms);

        let after = state.record_payment(&terms, 860.66, date(2025, 2, 1));

        // First month: 10000 * 0.005 = 50.00 interest, 810.66 principal
        assert_eq!(after.interest_paid, 50.00);
        assert_eq!(after.total_paid, 860.66);
        assert_eq!(after.remaining_balance, 9_189.34);
        assert_eq!(after.status, LoanStatus::Active);
        assert_eq!(after.next_payment_date, date(2025, 3, 1));
    }

    #[test]
    fn test_record_payment_final_pays_off() {
        let terms = car_loan();
        let state = LoanState {
            remaining_balance: 50.0,
            total_paid: 9_950.0,
            interest_paid: 300.0,
            monthly_payment: 860.66,
            status: LoanStatus::Active,
            next_payment_date: date(2025, 12, 1),
        };

        let after = state.record_payment(&terms, 860.66, date(2025, 12, 1));

        assert_eq!(after.remaining_balance, 0.0);
        assert_eq!(after.status, LoanStatus::PaidOff);
        // One month's interest on the $50 stub accrues before payoff
        assert_eq!(after.interest_paid, 300.25);
        assert_eq!(after.total_paid, 10_810.66);
        // Loan is closed: next payment date left where it was
        assert_eq!(after.next_payment_date, date(2025, 12, 1));
    }

    #[test]
    fn test_record_payment_full_term_reaches_zero() {
        let terms = car_loan();
        let mut state = LoanState::open(&terms);
        let mut due = state.next_payment_date;

        let mut payments = 0;
        while state.status == LoanStatus::Active && payments < terms.term_months + 1 {
            state = state.record_payment(&terms, state.monthly_payment, due);
            due = state.next_payment_date;
            payments += 1;
        }

        // Paying the scheduled amount clears the loan within the term (the
        // rounded payment can leave a residue that takes one extra payment)
        assert!(payments <= terms.term_months + 1);
        assert_eq!(state.remaining_balance, 0.0);
        assert_eq!(state.status, LoanStatus::PaidOff);
    }

    #[test]
    fn test_record_payment_below_interest_grows_balance() {
        let terms = LoanTerms::new(10_000.0, 0.12, 60, date(2025, 1, 1));
        let state = LoanState::open(&terms);

        // Accrued interest is 100.00; a 40.00 payment falls short
        let after = state.record_payment(&terms, 40.0, date(2025, 2, 1));

        assert_eq!(after.remaining_balance, 10_060.0);
        assert_eq!(after.interest_paid, 100.0);
        assert_eq!(after.total_paid, 40.0);
        assert_eq!(after.status, LoanStatus::Active);
    }

    #[test]
    fn test_record_payment_deferred_keeps_next_date() {
        let terms = car_loan();
        let state = LoanState {
            status: LoanStatus::Deferred,
            ..LoanState::open(&terms)
        };
        let before_date = state.next_payment_date;

        let after = state.record_payment(&terms, 500.0, date(2025, 6, 20));

        // Only active loans advance the due date
        assert_eq!(after.next_payment_date, before_date);
        assert_eq!(after.status, LoanStatus::Deferred);
        assert_eq!(after.remaining_balance, 9_550.0);
    }

    #[test]
    fn test_record_payment_rounds_on_write() {
        let terms = LoanTerms::new(9_999.99, 0.0575, 48, date(2025, 3, 10));
        let state = LoanState::open(&terms);

        let after = state.record_payment(&terms, 234.56, date(2025, 4, 10));

        for amount in [
            after.remaining_balance,
            after.total_paid,
            after.interest_paid,
        ] {
            assert_eq!(round_cents(amount), amount);
        }
    }
}
