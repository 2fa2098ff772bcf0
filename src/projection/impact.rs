//! Extra-payment what-if analysis

use serde::{Deserialize, Serialize};

use crate::money::round_cents;
use crate::schedule::{payment_unrounded, total_interest};

/// Effect of a constant extra payment applied from the first month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraPaymentImpact {
    /// Months shaved off the original term
    pub months_saved: u32,

    /// Interest avoided versus the original schedule, rounded to cents
    pub interest_saved: f64,

    /// Months to payoff under the augmented payment
    pub new_payoff_months: u32,
}

/// Model a loan that had carried `extra_payment` on top of its scheduled
/// payment from day one.
///
/// Simulates the original schedule's payment plus the constant extra every
/// month, accumulating interest until the balance reaches zero or the
/// original term elapses. This is a what-if over the whole life of the
/// loan, not a projection from today.
pub fn extra_payment_impact(
    principal: f64,
    annual_rate: f64,
    term_months: u32,
    extra_payment: f64,
) -> ExtraPaymentImpact {
    let monthly_rate = annual_rate / 12.0;
    let payment = payment_unrounded(principal, annual_rate, term_months) + extra_payment;

    let mut balance = principal;
    let mut interest_accumulated = 0.0;
    let mut months = 0;

    for _ in 1..=term_months {
        let interest = balance * monthly_rate;
        let principal_portion = payment - interest;
        balance = (balance - principal_portion).max(0.0);
        interest_accumulated += interest;
        months += 1;

        if balance <= 0.0 {
            break;
        }
    }

    ExtraPaymentImpact {
        months_saved: term_months - months,
        interest_saved: round_cents(
            total_interest(principal, annual_rate, term_months) - interest_accumulated,
        ),
        new_payoff_months: months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_no_extra_payment_changes_nothing() {
        let impact = extra_payment_impact(200_000.0, 0.05, 360, 0.0);

        assert_eq!(impact.months_saved, 0);
        assert_eq!(impact.new_payoff_months, 360);
        assert_abs_diff_eq!(impact.interest_saved, 0.0, epsilon = 0.01);
    }

    #[test]
    fn test_extra_payment_saves_time_and_interest() {
        // $200/month extra against a 30-year $200k mortgage at 5%
        let impact = extra_payment_impact(200_000.0, 0.05, 360, 200.0);

        assert!(impact.months_saved > 0);
        assert!(impact.interest_saved > 0.0);
        assert_eq!(impact.new_payoff_months + impact.months_saved, 360);
        // Well-known ballpark: payoff in ~256 months, saving ~$61k
        assert!(impact.months_saved >= 100 && impact.months_saved <= 108);
        assert!(impact.interest_saved > 55_000.0 && impact.interest_saved < 67_000.0);
    }

    #[test]
    fn test_huge_extra_payment_pays_off_immediately() {
        let impact = extra_payment_impact(10_000.0, 0.06, 12, 20_000.0);

        assert_eq!(impact.new_payoff_months, 1);
        assert_eq!(impact.months_saved, 11);
    }

    #[test]
    fn test_extra_payment_bounds() {
        for &extra in &[0.0, 10.0, 100.0, 1_000.0] {
            let impact = extra_payment_impact(50_000.0, 0.07, 120, extra);
            assert!(impact.new_payoff_months <= 120);
            assert_eq!(impact.new_payoff_months + impact.months_saved, 120);
        }
    }

    #[test]
    fn test_extra_payment_zero_rate() {
        // 12000 over 12 months at 0%: +1000/month halves the payoff time
        let impact = extra_payment_impact(12_000.0, 0.0, 12, 1_000.0);

        assert_eq!(impact.new_payoff_months, 6);
        assert_eq!(impact.months_saved, 6);
        assert_eq!(impact.interest_saved, 0.0);
    }
}
