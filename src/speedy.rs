//! Speedy shipping premium

use crate::amount::checked_add;
use crate::delivery::PricedDelivery;
use crate::error::Result;
use rust_decimal::Decimal;

/// Premium for expedited shipping: equal to the discounted total
pub fn speedy_premium(total_cost: Decimal) -> Decimal {
    total_cost
}

/// Apply the premium to a delivery whose base cost and discounts are final
///
/// Returns the delivery unchanged when speedy shipping was not requested.
pub fn apply_speedy(delivery: PricedDelivery) -> Result<PricedDelivery> {
    if !delivery.speedy_shipping {
        return Ok(delivery);
    }
    let premium = speedy_premium(delivery.total_cost);
    Ok(PricedDelivery {
        speedy_shipping_cost: premium,
        total_cost: checked_add(delivery.total_cost, premium, "speedy shipping total")?,
        ..delivery
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discount::DiscountBreakdown;
    use rust_decimal_macros::dec;

    fn delivery(total_cost: Decimal, speedy_shipping: bool) -> PricedDelivery {
        PricedDelivery {
            parcels: vec![],
            total_cost,
            speedy_shipping,
            speedy_shipping_cost: Decimal::ZERO,
            shipping_discounts: Decimal::ZERO,
            discounted_shipping: false,
            discounts: DiscountBreakdown::default(),
            fingerprint: String::new(),
        }
    }

    #[test]
    fn test_speedy_doubles_total() {
        let priced = apply_speedy(delivery(dec!(22.50), true)).unwrap();
        assert_eq!(priced.speedy_shipping_cost, dec!(22.50));
        assert_eq!(priced.total_cost, dec!(45));
    }

    #[test]
    fn test_not_requested() {
        let priced = apply_speedy(delivery(dec!(22.50), false)).unwrap();
        assert_eq!(priced.speedy_shipping_cost, Decimal::ZERO);
        assert_eq!(priced.total_cost, dec!(22.50));
    }

    #[test]
    fn test_zero_total() {
        let priced = apply_speedy(delivery(Decimal::ZERO, true)).unwrap();
        assert_eq!(priced.total_cost, Decimal::ZERO);
    }

    #[test]
    fn test_doubling_past_decimal_range_is_an_error() {
        assert!(matches!(
            apply_speedy(delivery(Decimal::MAX, true)),
            Err(crate::error::Error::Arithmetic(_))
        ));
    }
}
