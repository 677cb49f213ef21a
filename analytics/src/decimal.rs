//! Exact decimal conversion of stored weights

use rust_decimal::Decimal;
use std::str::FromStr;

/// Convert a stored float into the decimal it prints as.
///
/// Uses the shortest round-trip text of the float, so `80.1` becomes exactly
/// `80.1` rather than its binary approximation. Values outside the decimal
/// range saturate.
pub fn exact(value: f64) -> Decimal {
    Decimal::from_str(&value.to_string())
        .or_else(|_| Decimal::from_scientific(&format!("{value:e}")))
        .unwrap_or(if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}
