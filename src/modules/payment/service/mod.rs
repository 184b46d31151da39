pub mod online;

use bigdecimal::{BigDecimal, ToPrimitive};

pub const CURRENCY: &str = "usd";

/// Provider amounts are integer cents.
pub fn to_minor_units(price: &BigDecimal) -> Option<i64> {
    (price.clone() * BigDecimal::from(100)).round(0).to_i64()
}
