//! Load a loan book from CSV

use chrono::NaiveDate;
use log::debug;
use std::path::Path;
use thiserror::Error;

use super::{Loan, LoanState, LoanStatus, LoanTerms};
use crate::schedule::monthly_payment;

/// Errors raised while reading a loan book
#[derive(Debug, Error)]
pub enum LoanBookError {
    #[error("failed to read loan book: {0}")]
    Csv(#[from] csv::Error),

    #[error("loan {loan_id}: unknown status {status:?}")]
    UnknownStatus { loan_id: u32, status: String },
}

/// Raw CSV row matching the loan book columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "LoanID")]
    loan_id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "TermMonths")]
    term_months: u32,
    #[serde(rename = "StartDate")]
    start_date: NaiveDate,
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "RemainingBalance")]
    remaining_balance: f64,
    #[serde(rename = "TotalPaid")]
    total_paid: f64,
    #[serde(rename = "InterestPaid")]
    interest_paid: f64,
    #[serde(rename = "NextPaymentDate")]
    next_payment_date: NaiveDate,
}

impl CsvRow {
    fn into_loan(self) -> Result<Loan, LoanBookError> {
        let status = match self.status.as_str() {
            "active" => LoanStatus::Active,
            "paid_off" => LoanStatus::PaidOff,
            "deferred" => LoanStatus::Deferred,
            "default" => LoanStatus::Default,
            other => {
                return Err(LoanBookError::UnknownStatus {
                    loan_id: self.loan_id,
                    status: other.to_string(),
                })
            }
        };

        let terms = LoanTerms::new(
            self.principal,
            self.annual_rate,
            self.term_months,
            self.start_date,
        );
        let state = LoanState {
            remaining_balance: self.remaining_balance,
            total_paid: self.total_paid,
            interest_paid: self.interest_paid,
            // The derived payment is not stored; recompute it from the terms
            monthly_payment: monthly_payment(self.principal, self.annual_rate, self.term_months),
            status,
            next_payment_date: self.next_payment_date,
        };

        Ok(Loan {
            loan_id: self.loan_id,
            name: self.name,
            terms,
            state,
        })
    }
}

/// Load all loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<Loan>, LoanBookError> {
    let mut reader = csv::Reader::from_path(path)?;
    collect_loans(&mut reader)
}

/// Load loans from any reader (e.g., string buffer, network stream)
pub fn load_loans_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Loan>, LoanBookError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    collect_loans(&mut csv_reader)
}

fn collect_loans<R: std::io::Read>(reader: &mut csv::Reader<R>) -> Result<Vec<Loan>, LoanBookError> {
    let mut loans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        loans.push(row.into_loan()?);
    }

    debug!("loaded {} loans", loans.len());
    Ok(loans)
}
