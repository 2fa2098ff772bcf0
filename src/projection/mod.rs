//! Read-only projections: payoff dates and extra-payment what-ifs
//!
//! These never mutate loan state; the presentation layer re-fetches current
//! state and passes it in on every call.

mod impact;
mod payoff;

pub use impact::{extra_payment_impact, ExtraPaymentImpact};
pub use payoff::{payoff_date, MAX_PAYOFF_MONTHS};
