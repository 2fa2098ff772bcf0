//! Loan Engine - amortization and payment projection for personal finance tracking
//!
//! This library provides:
//! - Fixed-payment amortization: monthly payment, full schedules, totals
//! - Payment recording with principal/interest splits and status transitions
//! - Payoff-date projection and extra-payment what-if analysis
//! - Loan-book loading and batch portfolio analysis
//!
//! The engine is pure and synchronous: every function is deterministic in
//! its numeric/date inputs, performs no I/O (the CSV loan-book loader
//! aside), and can be called from any number of threads without
//! coordination. Persistence, transport, and auditing belong to the caller.

pub mod dates;
pub mod loan;
pub mod money;
pub mod portfolio;
pub mod projection;
pub mod schedule;

// Re-export commonly used types
pub use loan::{Loan, LoanState, LoanStatus, LoanTerms};
pub use portfolio::{BookSummary, LoanAnalysis, LoanBook};
pub use projection::{extra_payment_impact, payoff_date, ExtraPaymentImpact};
pub use schedule::{
    generate_schedule, monthly_payment, remaining_balance, total_interest, AmortizationEntry,
    AmortizationSchedule, ScheduleSummary,
};
