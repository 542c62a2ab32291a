//! Decimal rounding helpers
//!
//! Currency amounts round half-up (midpoint away from zero) to two decimal
//! places; index values to four. All money arithmetic stays in
//! [`Decimal`] so totals are reproducible.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{CURRENCY_DECIMAL_PLACES, INDEX_DECIMAL_PLACES};

/// Round a currency amount to cents.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use wagearc_domain::utils::money::round_currency;
///
/// assert_eq!(round_currency(Decimal::new(10_005, 3)), Decimal::new(1_001, 2));
/// ```
#[must_use]
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an index value to four decimal places.
#[must_use]
pub fn round_index(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(INDEX_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Zero with currency scale (`0.00`).
#[must_use]
pub fn zero_currency() -> Decimal {
    Decimal::new(0, CURRENCY_DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn currency_rounds_half_up() {
        assert_eq!(round_currency(dec("2.345")), dec("2.35"));
        assert_eq!(round_currency(dec("2.344")), dec("2.34"));
        assert_eq!(round_currency(dec("-2.345")), dec("-2.35"));
    }

    #[test]
    fn index_keeps_four_places() {
        assert_eq!(round_index(dec("101.23456")), dec("101.2346"));
    }

    #[test]
    fn zero_has_currency_scale() {
        assert_eq!(zero_currency().to_string(), "0.00");
    }
}
