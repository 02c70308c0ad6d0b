//! Money

use rust_decimal::Decimal;

/// Format an amount for display, e.g. `300` as `$300` and `-5` as `-$5`.
///
/// Trailing fractional zeros are dropped, so `299.50` renders as `$299.5`.
pub fn format_price(amount: Decimal) -> String {
    let normalized = amount.normalize();

    if normalized < Decimal::ZERO {
        format!("-${}", normalized.abs())
    } else {
        format!("${normalized}")
    }
}
