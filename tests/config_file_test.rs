//! Tests for loading pricing configuration from disk

use courier_pricing::{
    Delivery, DeliveryPricer, Error, Parcel, ParcelType, PricingConfig, SelectionPolicy,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("pricing.yaml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
version: 1
classification:
  heavy_tier: true
  heavy_weight_threshold: 40
rates:
  overweight_rate: 3
  entries:
    small:  { base_cost: 3,  weight_limit: 1 }
    medium: { base_cost: 8,  weight_limit: 3 }
    large:  { base_cost: 15, weight_limit: 6 }
    xl:     { base_cost: 25, weight_limit: 10 }
    heavy:  { base_cost: 45, weight_limit: 40 }
discounts:
  selection: exclusive
"#,
    );

    let config = PricingConfig::load_from_file(&path).unwrap();
    assert_eq!(config.classification.heavy_weight_threshold, dec!(40));
    assert_eq!(config.discounts.selection, SelectionPolicy::Exclusive);

    let pricer = DeliveryPricer::from_config(&config);
    let delivery = Delivery::new(
        vec![
            Parcel::new(dec!(5), dec!(5), dec!(5), dec!(42)),
            Parcel::new(dec!(5), dec!(5), dec!(5), dec!(2)),
        ],
        false,
    );
    let priced = pricer.price(&delivery).unwrap();

    assert_eq!(priced.parcels[0].parcel_type, ParcelType::Heavy);
    // 45 + (42 - 40) * 3
    assert_eq!(priced.parcels[0].cost, dec!(51));
    // 3 + (2 - 1) * 3
    assert_eq!(priced.parcels[1].cost, dec!(6));
    assert_eq!(priced.total_cost, dec!(57));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = PricingConfig::load_from_file(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "rates: [not, a, table]");
    let err = PricingConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_heavy_entry_required_when_tier_enabled() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
rates:
  entries:
    small:  { base_cost: 3,  weight_limit: 1 }
    medium: { base_cost: 8,  weight_limit: 3 }
    large:  { base_cost: 15, weight_limit: 6 }
    xl:     { base_cost: 25, weight_limit: 10 }
"#,
    );
    let err = PricingConfig::load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("Heavy"));
}
