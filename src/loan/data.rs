//! Loan data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{add_months, months_between};

/// Lifecycle status of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    /// Payments being made on schedule
    Active,
    /// Balance reached zero; terminal
    PaidOff,
    /// Payments temporarily suspended
    Deferred,
    /// Borrower in default
    Default,
}

impl LoanStatus {
    /// Wire/storage form of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::PaidOff => "paid_off",
            LoanStatus::Deferred => "deferred",
            LoanStatus::Default => "default",
        }
    }
}

/// Contractual terms of a loan.
///
/// Immutable once the loan is opened, except through an explicit edit
/// (which recomputes the derived payment, see [`LoanState::with_edited_terms`]).
///
/// [`LoanState::with_edited_terms`]: crate::loan::LoanState::with_edited_terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Original borrowed amount, dollars
    pub principal: f64,

    /// Nominal yearly rate as a decimal fraction (0.05 = 5%, never a
    /// percentage)
    pub annual_rate: f64,

    /// Total number of scheduled payments
    pub term_months: u32,

    /// Origination date; payment 1 falls exactly one month after
    pub start_date: NaiveDate,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate: f64, term_months: u32, start_date: NaiveDate) -> Self {
        Self {
            principal,
            annual_rate,
            term_months,
            start_date,
        }
    }

    /// Per-period rate used in all calculations
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 12.0
    }

    /// Due date of payment `n` (1-indexed): start date + n months
    pub fn payment_date(&self, n: u32) -> NaiveDate {
        add_months(self.start_date, n)
    }

    /// Due date of the payment after `payments_made` have been recorded
    pub fn next_payment_date(&self, payments_made: u32) -> NaiveDate {
        add_months(self.start_date, payments_made + 1)
    }

    /// Coarse count of monthly boundaries crossed since the start date.
    ///
    /// Ignores day-of-month entirely; this estimates schedule position from
    /// the calendar, it does not count payments actually recorded.
    pub fn payments_made_as_of(&self, current_date: NaiveDate) -> u32 {
        months_between(self.start_date, current_date)
    }
}

/// A loan record: identity, contractual terms, and current state.
///
/// The shape the loan-book loader produces and the portfolio runner
/// consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique loan identifier
    pub loan_id: u32,

    /// Display name ("Car loan", "Mortgage", ...)
    pub name: String,

    /// Contractual terms
    pub terms: LoanTerms,

    /// Current mutable state
    pub state: super::LoanState,
}

impl Loan {
    /// Open a new loan: derives the initial state from the terms
    pub fn open(loan_id: u32, name: impl Into<String>, terms: LoanTerms) -> Self {
        let state = super::LoanState::open(&terms);
        Self {
            loan_id,
            name: name.into(),
            terms,
            state,
        }
    }

    /// Record a payment against this loan, returning the updated record
    pub fn record_payment(&self, payment_amount: f64, payment_date: NaiveDate) -> Self {
        Self {
            state: self
                .state
                .record_payment(&self.terms, payment_amount, payment_date),
            ..self.clone()
        }
    }

    /// Replace the terms (user edit), recomputing the derived payment
    pub fn edit_terms(&self, terms: LoanTerms) -> Self {
        let state = self.state.with_edited_terms(&terms);
        Self {
            terms,
            state,
            ..self.clone()
        }
    }
}
