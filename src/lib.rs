// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # Courier Pricing
//!
//! Prices a delivery of parcels: size classes, overweight surcharges,
//! volume discounts and an optional speedy-shipping premium.
//!
//! ## Quick Start
//!
//! ```rust
//! use courier_pricing::{price_delivery, Delivery, Parcel};
//! use rust_decimal::Decimal;
//!
//! let small = Parcel::new(5.into(), 5.into(), 5.into(), Decimal::new(5, 1));
//! let delivery = Delivery::new(vec![small; 4], false);
//!
//! let priced = price_delivery(&delivery)?;
//! assert!(priced.discounted_shipping);
//! assert_eq!(priced.total_cost, Decimal::from(9));
//! # Ok::<(), courier_pricing::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  Delivery (parcels + speedy flag)                           │
//! │       │                                                     │
//! │       ├──► classify(parcel) ──► ParcelType                  │
//! │       │                                                     │
//! │       ├──► CostEngine::price ──► PricedParcel               │
//! │       │                                                     │
//! │       ├──► DiscountEngine::apply ──► DiscountBreakdown      │
//! │       │                                                     │
//! │       └──► apply_speedy ──► PricedDelivery                  │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rate Card
//!
//! | Type | Base cost | Weight limit |
//! |------|-----------|--------------|
//! | Small | 3 | 1 |
//! | Medium | 8 | 3 |
//! | Large | 15 | 6 |
//! | XL | 25 | 10 |
//! | Heavy | 50 | 50 |
//!
//! Weight above the limit costs 2 per unit. Rates, the Heavy tier and the
//! discount selection policy can be overridden with a [`PricingConfig`].

// Data model
pub mod delivery;
pub mod error;
pub mod parcel;

// Pricing stages
pub mod classify;
pub mod discount;
pub mod rates;
pub mod speedy;

// Orchestration
pub mod pricer;

// Support
pub mod amount;
pub mod config;
pub mod fingerprint;

// Re-exports
pub use classify::{classify, ClassificationRules, ParcelClassifier};
pub use config::PricingConfig;
pub use delivery::{Delivery, PricedDelivery};
pub use discount::{
    is_discounted, DiscountBreakdown, DiscountConfig, DiscountEngine, SelectionPolicy,
    TierDiscount,
};
pub use error::{Error, Result};
pub use fingerprint::fingerprint;
pub use parcel::{Parcel, ParcelType, PricedParcel};
pub use pricer::{price_delivery, DeliveryPricer};
pub use rates::{overweight_cost, CostEngine, Rate, RateTable};
pub use speedy::{apply_speedy, speedy_premium};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
