//! Delivery types — one shipment of parcels, before and after pricing

use crate::amount::checked_sum;
use crate::discount::DiscountBreakdown;
use crate::error::Result;
use crate::parcel::{Parcel, PricedParcel};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A pricing request: the parcels and the shipping options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Delivery {
    /// Parcels in input order (order only matters for discount tie-breaks)
    #[serde(default)]
    pub parcels: Vec<Parcel>,

    /// Request expedited shipping
    #[serde(default)]
    pub speedy_shipping: bool,
}

impl Delivery {
    pub fn new(parcels: Vec<Parcel>, speedy_shipping: bool) -> Self {
        Self {
            parcels,
            speedy_shipping,
        }
    }

    /// Parse a delivery from YAML (JSON is valid YAML)
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_norway::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// A fully priced delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PricedDelivery {
    pub parcels: Vec<PricedParcel>,

    /// Parcel costs plus discounts, doubled when speedy shipping applies
    #[schemars(with = "String")]
    pub total_cost: Decimal,

    pub speedy_shipping: bool,

    /// Premium added for speedy shipping, zero otherwise
    #[schemars(with = "String")]
    pub speedy_shipping_cost: Decimal,

    /// Cumulative discount, always `<= 0`
    #[schemars(with = "String")]
    pub shipping_discounts: Decimal,

    /// True iff the delivery has more than 3 parcels
    pub discounted_shipping: bool,

    /// Per-tier breakdown of `shipping_discounts`
    pub discounts: DiscountBreakdown,

    /// Fingerprint of the input this result was priced from
    pub fingerprint: String,
}

impl PricedDelivery {
    /// Sum of parcel costs before discounts and the speedy premium
    pub fn parcels_cost(&self) -> Result<Decimal> {
        checked_sum(self.parcels.iter().map(|p| p.cost), "parcels cost")
    }
}
