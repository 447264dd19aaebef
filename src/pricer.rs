//! Delivery pricing — the end-to-end pipeline
//!
//! ```text
//! Delivery ──► classify + cost each parcel ──► sum ──► discounts ──► speedy ──► PricedDelivery
//! ```
//!
//! Per-parcel work is independent; discounts need the complete priced list.

use crate::amount::{checked_add, checked_sum};
use crate::classify::ParcelClassifier;
use crate::config::PricingConfig;
use crate::delivery::{Delivery, PricedDelivery};
use crate::discount::{is_discounted, DiscountEngine};
use crate::error::Result;
use crate::fingerprint::fingerprint;
use crate::parcel::{Parcel, PricedParcel};
use crate::rates::CostEngine;
use crate::speedy::apply_speedy;
use rust_decimal::Decimal;

/// Price a delivery with the standard rate card
pub fn price_delivery(delivery: &Delivery) -> Result<PricedDelivery> {
    DeliveryPricer::default().price(delivery)
}

/// Delivery pricer
#[derive(Debug, Clone, Default)]
pub struct DeliveryPricer {
    classifier: ParcelClassifier,
    cost_engine: CostEngine,
    discount_engine: DiscountEngine,
}

impl DeliveryPricer {
    pub fn new(
        classifier: ParcelClassifier,
        cost_engine: CostEngine,
        discount_engine: DiscountEngine,
    ) -> Self {
        Self {
            classifier,
            cost_engine,
            discount_engine,
        }
    }

    pub fn from_config(config: &PricingConfig) -> Self {
        Self::new(
            ParcelClassifier::new(config.classification.clone()),
            CostEngine::new(config.rates.clone()),
            DiscountEngine::new(config.discounts.selection),
        )
    }

    /// Classify and cost a single parcel
    pub fn price_parcel(&self, parcel: &Parcel) -> Result<PricedParcel> {
        let parcel_type = self.classifier.classify(parcel)?;
        let priced = self.cost_engine.price(parcel, parcel_type)?;
        tracing::debug!(
            parcel_type = %priced.parcel_type,
            cost = %priced.cost,
            overweight = priced.is_overweight,
            "priced parcel"
        );
        Ok(priced)
    }

    /// Price a whole delivery
    ///
    /// Any invalid parcel fails the delivery; no partial result is returned.
    #[tracing::instrument(level = "debug", skip_all, fields(parcels = delivery.parcels.len()))]
    pub fn price(&self, delivery: &Delivery) -> Result<PricedDelivery> {
        let parcels = delivery
            .parcels
            .iter()
            .map(|p| self.price_parcel(p))
            .collect::<Result<Vec<_>>>()?;

        let parcels_cost = checked_sum(parcels.iter().map(|p| p.cost), "parcels cost")?;

        let discounted_shipping = is_discounted(parcels.len());
        let discounts = if discounted_shipping {
            self.discount_engine.apply(&parcels)?
        } else {
            Default::default()
        };
        let shipping_discounts = discounts.total()?;
        let total_cost = checked_add(parcels_cost, shipping_discounts, "discounted total")?;

        let priced = apply_speedy(PricedDelivery {
            parcels,
            total_cost,
            speedy_shipping: delivery.speedy_shipping,
            speedy_shipping_cost: Decimal::ZERO,
            shipping_discounts,
            discounted_shipping,
            discounts,
            fingerprint: fingerprint(delivery)?,
        })?;

        tracing::info!(
            total_cost = %priced.total_cost,
            discounts = %priced.shipping_discounts,
            speedy = priced.speedy_shipping,
            "priced delivery"
        );
        Ok(priced)
    }
}
