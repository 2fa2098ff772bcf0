//! Loan Engine CLI
//!
//! Command-line interface for amortization schedules, payoff estimates,
//! extra-payment what-ifs, and loan-book reports

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use loan_engine::{
    extra_payment_impact, generate_schedule, payoff_date, total_interest, AmortizationSchedule,
    LoanBook, LoanTerms,
};

#[derive(Parser)]
#[command(name = "loan_engine", version, about = "Loan amortization and payoff projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the full amortization schedule for a loan
    Schedule {
        /// Amount borrowed, dollars
        #[arg(long)]
        principal: f64,

        /// Annual rate as a decimal fraction (0.05 = 5%)
        #[arg(long)]
        rate: f64,

        /// Term in months
        #[arg(long)]
        term: u32,

        /// Loan start date (YYYY-MM-DD); payment 1 falls one month later
        #[arg(long)]
        start: NaiveDate,

        /// Write the schedule to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the schedule as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Estimate when an outstanding balance reaches zero
    Payoff {
        /// Balance outstanding, dollars
        #[arg(long)]
        balance: f64,

        /// Monthly payment, dollars
        #[arg(long)]
        payment: f64,

        /// Annual rate as a decimal fraction
        #[arg(long)]
        rate: f64,

        /// Projection start date (YYYY-MM-DD)
        #[arg(long)]
        as_of: NaiveDate,
    },

    /// Model a constant extra monthly payment from the start of the loan
    WhatIf {
        #[arg(long)]
        principal: f64,

        #[arg(long)]
        rate: f64,

        #[arg(long)]
        term: u32,

        /// Extra amount added to every scheduled payment
        #[arg(long)]
        extra: f64,
    },

    /// Report on a loan book CSV
    Book {
        /// Loan book CSV path
        path: PathBuf,

        /// Analysis date (YYYY-MM-DD)
        #[arg(long)]
        as_of: NaiveDate,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Schedule {
            principal,
            rate,
            term,
            start,
            csv,
            json,
        } => {
            let terms = LoanTerms::new(principal, rate, term, start);
            let schedule = generate_schedule(&terms, None);

            if json {
                println!("{}", serde_json::to_string_pretty(&schedule)?);
            } else {
                print_schedule(&schedule);
            }

            if let Some(path) = csv {
                write_schedule_csv(&path, &schedule)
                    .with_context(|| format!("writing schedule to {}", path.display()))?;
                info!("schedule written to {}", path.display());
            }
        }

        Command::Payoff {
            balance,
            payment,
            rate,
            as_of,
        } => {
            let date = payoff_date(balance, payment, rate, as_of);
            println!("Projected payoff date: {date}");
        }

        Command::WhatIf {
            principal,
            rate,
            term,
            extra,
        } => {
            let impact = extra_payment_impact(principal, rate, term, extra);
            println!(
                "Extra ${extra:.2}/month on ${principal:.2} at {:.2}% over {term} months:",
                rate * 100.0
            );
            println!("  Payoff in {} months ({} saved)", impact.new_payoff_months, impact.months_saved);
            println!("  Interest saved: ${:.2}", impact.interest_saved);
        }

        Command::Book { path, as_of } => {
            let loans = loan_engine::loan::load_loans(&path)
                .with_context(|| format!("loading loan book from {}", path.display()))?;
            let book = LoanBook::new(loans);
            print_book_report(&book, as_of);
        }
    }

    Ok(())
}

fn print_schedule(schedule: &AmortizationSchedule) {
    println!(
        "${:.2} at {:.2}% over {} months: {:.2}/month",
        schedule.principal,
        schedule.annual_rate * 100.0,
        schedule.term_months,
        schedule.monthly_payment,
    );
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "#", "Date", "Payment", "Principal", "Interest", "Balance"
    );
    println!("{}", "-".repeat(72));

    for entry in &schedule.entries {
        println!(
            "{:>5} {:>12} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            entry.payment_number,
            entry.payment_date.to_string(),
            entry.payment_amount,
            entry.principal_paid,
            entry.interest_paid,
            entry.remaining_balance_after,
        );
    }

    let summary = schedule.summary();
    println!("\nSummary:");
    println!("  Total paid: ${:.2}", summary.total_paid);
    println!("  Total principal: ${:.2}", summary.total_principal);
    println!("  Total interest: ${:.2}", summary.total_interest);
    println!(
        "  Theoretical lifetime interest: ${:.2}",
        total_interest(schedule.principal, schedule.annual_rate, schedule.term_months)
    );
}

fn write_schedule_csv(path: &Path, schedule: &AmortizationSchedule) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(
        file,
        "PaymentNumber,PaymentDate,PaymentAmount,PrincipalPaid,InterestPaid,RemainingBalance"
    )?;
    for entry in &schedule.entries {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2}",
            entry.payment_number,
            entry.payment_date,
            entry.payment_amount,
            entry.principal_paid,
            entry.interest_paid,
            entry.remaining_balance_after,
        )?;
    }
    Ok(())
}

fn print_book_report(book: &LoanBook, as_of: NaiveDate) {
    println!(
        "{:>5} {:<20} {:>10} {:>12} {:>12} {:>12} {:>8}",
        "ID", "Name", "Status", "Balance", "Payment", "Payoff", "Months"
    );
    println!("{}", "-".repeat(86));

    for analysis in book.analyze(as_of) {
        println!(
            "{:>5} {:<20} {:>10} {:>12.2} {:>12.2} {:>12} {:>8}",
            analysis.loan_id,
            analysis.name,
            analysis.status.as_str(),
            analysis.remaining_balance,
            analysis.monthly_payment,
            analysis.projected_payoff.to_string(),
            analysis.months_remaining,
        );
    }

    let summary = book.summarize(as_of);
    println!("\nSummary as of {as_of}:");
    println!("  Loans: {} ({} active)", summary.loan_count, summary.active_count);
    println!("  Total balance: ${:.2}", summary.total_balance);
    println!("  Monthly obligation: ${:.2}", summary.monthly_obligation);
    if let Some(final_payoff) = summary.final_payoff {
        println!("  Final payoff: {final_payoff}");
    }
}
