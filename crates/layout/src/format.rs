//! Number formatting used on the printed page.

use rust_decimal::{Decimal, RoundingStrategy};

/// `currency` followed by `value` with exactly two decimals, e.g. `$2000.00`.
///
/// Rounds the exact binary value half away from zero, so `0.125` prints as
/// `0.13`. Values too large for `Decimal` fall back to float formatting.
pub fn money(currency: &str, value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => {
            let cents = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            format!("{currency}{cents:.2}")
        }
        None => format!("{currency}{value:.2}"),
    }
}

/// Shortest decimal form: `10`, `2.5`, `0.25`.
pub fn quantity(value: f64) -> String {
    value.to_string()
}
