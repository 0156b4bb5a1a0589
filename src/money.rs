//! Money rounding.
//!
//! Calculators work in `f64` millimetres and metres. Every amount that leaves
//! a calculator as money passes through [`to_money`], which converts it to a
//! [`Decimal`] and rounds it half away from zero.

use rust_decimal::prelude::*;

use crate::error::{QuoteError, Result};

/// Convert an `f64` amount to money rounded to `places` decimal places.
pub fn to_money(value: f64, places: u32, field: &'static str) -> Result<Decimal> {
    let amount = Decimal::from_f64(value).ok_or(QuoteError::NonFiniteAmount { field })?;
    Ok(round_money(amount, places))
}

/// Round a decimal amount half away from zero.
#[inline]
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(round_money(dec!(2.345), 2), dec!(2.35));
        assert_eq!(round_money(dec!(-2.345), 2), dec!(-2.35));
        assert_eq!(round_money(dec!(1.8946305), 4), dec!(1.8946));
    }

    #[test]
    fn test_to_money() {
        assert_eq!(to_money(238.5831, 2, "total").unwrap(), dec!(238.58));
        assert_eq!(to_money(0.0, 2, "total").unwrap(), dec!(0));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = to_money(f64::NAN, 2, "cost_price").unwrap_err();
        assert!(matches!(
            err,
            QuoteError::NonFiniteAmount {
                field: "cost_price"
            }
        ));
        assert!(to_money(f64::INFINITY, 2, "cost_price").is_err());
    }
}
