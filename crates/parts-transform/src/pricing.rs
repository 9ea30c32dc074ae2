//! Price derivation.

/// Rounds to whole cents.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// List price derived from the standard price, rounded to two decimals.
pub fn list_price(standard_price: f64, markup: f64) -> f64 {
    round_to_cents(standard_price * markup)
}
