//! Fixed-payment amortization formula and derived totals

use crate::money::round_cents;

/// Monthly payment for a fully amortizing fixed-rate loan, rounded to
/// whole cents.
///
/// Standard formula with `r = annual_rate / 12`:
/// `principal * r * (1+r)^n / ((1+r)^n - 1)`. A zero rate degenerates to
/// straight-line `principal / n`.
///
/// Preconditions (`principal > 0`, `term_months >= 1`, `0 <= annual_rate
/// <= 1`) are the caller's to enforce; out-of-range inputs produce
/// out-of-range outputs rather than errors.
pub fn monthly_payment(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    round_cents(payment_unrounded(principal, annual_rate, term_months))
}

/// Full-precision payment amount.
///
/// Schedule generation and total-interest math carry this value unrounded:
/// the public rounded payment underpays by a fraction of a cent per month,
/// which compounds to a multi-cent residue over a long term.
pub(crate) fn payment_unrounded(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / term_months as f64;
    }
    let growth = (1.0 + monthly_rate).powi(term_months as i32);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Theoretical total interest over the full original schedule.
///
/// `payment * term - principal`, one rounding at the end. Unaffected by any
/// extra or missed payments actually made against the loan.
pub fn total_interest(principal: f64, annual_rate: f64, term_months: u32) -> f64 {
    let payment = payment_unrounded(principal, annual_rate, term_months);
    round_cents(payment * term_months as f64 - principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_monthly_payment_standard_mortgage() {
        // 30-year $200k at 5%
        assert_abs_diff_eq!(monthly_payment(200_000.0, 0.05, 360), 1073.64);
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        // Straight-line: no interest
        assert_eq!(monthly_payment(12_000.0, 0.0, 12), 1000.00);
        assert_eq!(monthly_payment(9_000.0, 0.0, 36), 250.00);
    }

    #[test]
    fn test_monthly_payment_positive() {
        for &(p, r, n) in &[
            (1_000.0, 0.0, 1),
            (50_000.0, 0.035, 60),
            (250_000.0, 0.0675, 360),
            (500.0, 1.0, 6),
        ] {
            assert!(monthly_payment(p, r, n) > 0.0, "payment for ({p}, {r}, {n})");
        }
    }

    #[test]
    fn test_monthly_payment_single_installment() {
        // One payment covers principal plus one month of interest
        assert_abs_diff_eq!(monthly_payment(1_200.0, 0.12, 1), 1212.00);
    }

    #[test]
    fn test_total_interest_standard_mortgage() {
        // Unrounded payment x 360 - 200000; the rounded payment would give
        // 186510.40 instead
        assert_abs_diff_eq!(total_interest(200_000.0, 0.05, 360), 186_511.57);
    }

    #[test]
    fn test_total_interest_zero_rate() {
        assert_eq!(total_interest(12_000.0, 0.0, 12), 0.0);
    }
}
