//! Batch analysis across a book of loans
//!
//! Wraps the per-loan engine functions for callers holding many loans at
//! once (a household's full book, a synced account import). Analyses are
//! independent per loan, so the book fans out across threads.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dates::months_between;
use crate::loan::{Loan, LoanStatus};
use crate::money::round_cents;
use crate::projection::payoff_date;
use crate::schedule::total_interest;

/// Derived figures for one loan as of a given date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanAnalysis {
    pub loan_id: u32,
    pub name: String,
    pub status: LoanStatus,

    /// Scheduled payment from the terms
    pub monthly_payment: f64,

    /// Balance outstanding
    pub remaining_balance: f64,

    /// Theoretical lifetime interest over the original schedule
    pub lifetime_interest: f64,

    /// Date the balance reaches zero at the scheduled payment
    pub projected_payoff: NaiveDate,

    /// Monthly boundaries between the as-of date and projected payoff
    pub months_remaining: u32,
}

/// Aggregate figures across a book
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSummary {
    pub loan_count: u32,
    pub active_count: u32,

    /// Sum of balances across all loans
    pub total_balance: f64,

    /// Sum of scheduled payments across active loans
    pub monthly_obligation: f64,

    /// Latest projected payoff among active loans (None if none active)
    pub final_payoff: Option<NaiveDate>,
}

/// A set of loans analyzed together
#[derive(Debug, Clone)]
pub struct LoanBook {
    loans: Vec<Loan>,
}

impl LoanBook {
    pub fn new(loans: Vec<Loan>) -> Self {
        Self { loans }
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Analyze every loan in the book as of the given date.
    ///
    /// Each loan's analysis is independent; the work is spread across
    /// threads and results come back in book order.
    pub fn analyze(&self, as_of: NaiveDate) -> Vec<LoanAnalysis> {
        self.loans
            .par_iter()
            .map(|loan| analyze_loan(loan, as_of))
            .collect()
    }

    /// Aggregate the per-loan analyses into book totals
    pub fn summarize(&self, as_of: NaiveDate) -> BookSummary {
        let analyses = self.analyze(as_of);

        let active: Vec<&LoanAnalysis> = analyses
            .iter()
            .filter(|a| a.status == LoanStatus::Active)
            .collect();

        BookSummary {
            loan_count: analyses.len() as u32,
            active_count: active.len() as u32,
            total_balance: round_cents(analyses.iter().map(|a| a.remaining_balance).sum()),
            monthly_obligation: round_cents(active.iter().map(|a| a.monthly_payment).sum()),
            final_payoff: active.iter().map(|a| a.projected_payoff).max(),
        }
    }
}

fn analyze_loan(loan: &Loan, as_of: NaiveDate) -> LoanAnalysis {
    let projected_payoff = payoff_date(
        loan.state.remaining_balance,
        loan.state.monthly_payment,
        loan.terms.annual_rate,
        as_of,
    );

    LoanAnalysis {
        loan_id: loan.loan_id,
        name: loan.name.clone(),
        status: loan.state.status,
        monthly_payment: loan.state.monthly_payment,
        remaining_balance: loan.state.remaining_balance,
        lifetime_interest: total_interest(
            loan.terms.principal,
            loan.terms.annual_rate,
            loan.terms.term_months,
        ),
        projected_payoff,
        months_remaining: months_between(as_of, projected_payoff),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::LoanTerms;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_book() -> LoanBook {
        let car = Loan::open(1, "Car loan", LoanTerms::new(10_000.0, 0.06, 12, date(2025, 1, 1)));
        let mortgage = Loan::open(
            2,
            "Mortgage",
            LoanTerms::new(200_000.0, 0.05, 360, date(2025, 1, 1)),
        );
        let mut paid = Loan::open(3, "Old phone", LoanTerms::new(600.0, 0.0, 12, date(2023, 1, 1)));
        paid.state.remaining_balance = 0.0;
        paid.state.status = LoanStatus::PaidOff;

        LoanBook::new(vec![car, mortgage, paid])
    }

    #[test]
    fn test_analyze_per_loan() {
        let book = sample_book();
        let analyses = book.analyze(date(2025, 1, 1));

        assert_eq!(analyses.len(), 3);
        // Results come back in book order regardless of scheduling
        assert_eq!(analyses[0].loan_id, 1);
        assert_eq!(analyses[1].loan_id, 2);

        let car = &analyses[0];
        assert_eq!(car.monthly_payment, 860.66);
        assert!(car.projected_payoff >= date(2026, 1, 1));
        assert!(car.months_remaining >= 12);

        let paid = &analyses[2];
        assert_eq!(paid.projected_payoff, date(2025, 1, 1));
        assert_eq!(paid.months_remaining, 0);
    }

    #[test]
    fn test_summarize_totals_match_loans() {
        let book = sample_book();
        let summary = book.summarize(date(2025, 1, 1));

        assert_eq!(summary.loan_count, 3);
        assert_eq!(summary.active_count, 2);
        assert_eq!(summary.total_balance, 210_000.0);
        assert_eq!(summary.monthly_obligation, round_cents(860.66 + 1073.64));
        // The mortgage dominates the horizon
        assert!(summary.final_payoff.unwrap() >= date(2055, 1, 1));
    }

    #[test]
    fn test_summarize_empty_book() {
        let book = LoanBook::new(Vec::new());
        let summary = book.summarize(date(2025, 1, 1));

        assert_eq!(summary.loan_count, 0);
        assert_eq!(summary.total_balance, 0.0);
        assert!(summary.final_payoff.is_none());
    }
}
