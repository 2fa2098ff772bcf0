//! Amortization schedule computation: payment formula, schedule generation,
//! and derived totals

mod entry;
mod generator;
mod payment;

pub use entry::{AmortizationEntry, AmortizationSchedule, ScheduleSummary};
pub use generator::{generate_schedule, remaining_balance};
pub use payment::{monthly_payment, total_interest};

pub(crate) use payment::payment_unrounded;
