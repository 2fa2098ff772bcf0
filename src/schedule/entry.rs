//! Schedule output structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single scheduled payment in an amortization schedule.
///
/// All monetary fields are rounded to whole cents on emission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// Payment number (1-indexed)
    pub payment_number: u32,

    /// Date the payment falls due (start date + payment_number months)
    pub payment_date: NaiveDate,

    /// Total amount due for this payment
    pub payment_amount: f64,

    /// Portion applied to principal
    pub principal_paid: f64,

    /// Portion applied to interest
    pub interest_paid: f64,

    /// Balance outstanding after this payment (floored at 0)
    pub remaining_balance_after: f64,
}

/// Complete amortization schedule for one set of loan terms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    /// Original borrowed amount
    pub principal: f64,

    /// Nominal annual rate as a decimal fraction (0.05 = 5%)
    pub annual_rate: f64,

    /// Number of scheduled payments
    pub term_months: u32,

    /// Loan start date; payment 1 falls one month later
    pub start_date: NaiveDate,

    /// Scheduled payment amount, rounded to cents
    pub monthly_payment: f64,

    /// One entry per scheduled payment
    pub entries: Vec<AmortizationEntry>,
}

impl AmortizationSchedule {
    /// Get the entry for a specific payment number
    pub fn entry(&self, payment_number: u32) -> Option<&AmortizationEntry> {
        self.entries.get(payment_number.saturating_sub(1) as usize)
    }

    /// Summary totals across the schedule
    pub fn summary(&self) -> ScheduleSummary {
        let total_paid: f64 = self.entries.iter().map(|e| e.payment_amount).sum();
        let total_principal: f64 = self.entries.iter().map(|e| e.principal_paid).sum();
        let total_interest: f64 = self.entries.iter().map(|e| e.interest_paid).sum();
        let final_balance = self
            .entries
            .last()
            .map(|e| e.remaining_balance_after)
            .unwrap_or(self.principal);

        ScheduleSummary {
            total_months: self.entries.len() as u32,
            total_paid: crate::money::round_cents(total_paid),
            total_principal: crate::money::round_cents(total_principal),
            total_interest: crate::money::round_cents(total_interest),
            final_balance,
        }
    }
}

/// Summary statistics for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_paid: f64,
    pub total_principal: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}
