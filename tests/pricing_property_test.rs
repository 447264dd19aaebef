//! Property-based tests for delivery pricing
//!
//! Uses proptest to generate random deliveries and verify pricing invariants

use courier_pricing::{
    classify, overweight_cost, price_delivery, Delivery, Parcel, ParcelType, RateTable,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

proptest! {
    #[test]
    fn test_cost_at_least_base(parcel in any_parcel()) {
        let rates = RateTable::default();
        let priced = price_delivery(&Delivery::new(vec![parcel], false)).unwrap();
        let p = &priced.parcels[0];
        let base = rates.base_cost(p.parcel_type).unwrap();
        prop_assert!(p.cost >= base);
        prop_assert_eq!(p.cost == base, !p.is_overweight);
    }

    #[test]
    fn test_overweight_formula(parcel in any_parcel()) {
        let priced = price_delivery(&Delivery::new(vec![parcel], false)).unwrap();
        let p = &priced.parcels[0];
        let expected = (parcel.weight - p.weight_limit).max(Decimal::ZERO) * Decimal::from(2);
        prop_assert_eq!(p.overweight_cost, expected);
        prop_assert_eq!(p.overweight_cost, overweight_cost(parcel.weight, p.weight_limit, Decimal::from(2)).unwrap());
    }

    #[test]
    fn test_classification_is_deterministic(parcel in any_parcel()) {
        let first = classify(&parcel).unwrap();
        prop_assert_eq!(first, classify(&parcel).unwrap());
        if parcel.weight >= Decimal::from(50) {
            prop_assert_eq!(first, ParcelType::Heavy);
        }
    }

    #[test]
    fn test_discount_iff_more_than_three(delivery in any_delivery()) {
        let priced = price_delivery(&delivery).unwrap();
        prop_assert_eq!(priced.discounted_shipping, delivery.parcels.len() > 3);
        prop_assert!(priced.shipping_discounts <= Decimal::ZERO);
        if !priced.discounted_shipping {
            prop_assert_eq!(priced.shipping_discounts, Decimal::ZERO);
        }
    }

    #[test]
    fn test_total_is_never_negative(delivery in any_delivery()) {
        let priced = price_delivery(&delivery).unwrap();
        prop_assert!(priced.total_cost >= Decimal::ZERO);
    }

    #[test]
    fn test_speedy_doubles_total(delivery in any_delivery()) {
        let normal = price_delivery(&Delivery { speedy_shipping: false, ..delivery.clone() }).unwrap();
        let speedy = price_delivery(&Delivery { speedy_shipping: true, ..delivery }).unwrap();
        prop_assert_eq!(speedy.total_cost, normal.total_cost * Decimal::from(2));
        prop_assert_eq!(speedy.speedy_shipping_cost, normal.total_cost);
    }

    #[test]
    fn test_repricing_is_idempotent(delivery in any_delivery()) {
        let first = price_delivery(&delivery).unwrap();
        let second = price_delivery(&delivery).unwrap();
        prop_assert_eq!(first, second);
    }
}

/// Positive decimal with two fractional digits, up to `max`
fn positive_decimal(max: i64) -> impl Strategy<Value = Decimal> {
    (1..=max * 100).prop_map(|n| Decimal::new(n, 2))
}

fn any_parcel() -> impl Strategy<Value = Parcel> {
    (
        positive_decimal(150),
        positive_decimal(150),
        positive_decimal(150),
        positive_decimal(80),
    )
        .prop_map(|(h, w, d, weight)| Parcel::new(h, w, d, weight))
}

fn any_delivery() -> impl Strategy<Value = Delivery> {
    (prop::collection::vec(any_parcel(), 0..12), any::<bool>())
        .prop_map(|(parcels, speedy)| Delivery::new(parcels, speedy))
}
