//! Loan data structures, state transitions, and loan-book loading

mod data;
pub mod loader;
mod state;

pub use data::{Loan, LoanStatus, LoanTerms};
pub use loader::{load_loans, load_loans_from_reader, LoanBookError};
pub use state::LoanState;
