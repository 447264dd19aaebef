//! Rate table and per-parcel costing
//!
//! Each category maps to a base cost and a weight limit. Weight above the
//! limit is charged at `overweight_rate` per unit, with no cap for any tier.

use crate::amount::checked_add;
use crate::error::{Error, Result};
use crate::parcel::{Parcel, ParcelType, PricedParcel};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base cost and weight limit for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Rate {
    #[schemars(with = "String")]
    pub base_cost: Decimal,
    #[schemars(with = "String")]
    pub weight_limit: Decimal,
}

impl Rate {
    pub fn new(base_cost: Decimal, weight_limit: Decimal) -> Self {
        Self {
            base_cost,
            weight_limit,
        }
    }
}

/// Immutable lookup table keyed by parcel category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RateTable {
    /// Surcharge per unit of weight above the limit
    #[serde(default = "default_overweight_rate")]
    #[schemars(with = "String")]
    pub overweight_rate: Decimal,

    #[serde(default = "default_entries")]
    pub entries: BTreeMap<ParcelType, Rate>,
}

fn default_overweight_rate() -> Decimal {
    Decimal::from(2)
}

fn default_entries() -> BTreeMap<ParcelType, Rate> {
    [
        (ParcelType::Small, 3, 1),
        (ParcelType::Medium, 8, 3),
        (ParcelType::Large, 15, 6),
        (ParcelType::Xl, 25, 10),
        (ParcelType::Heavy, 50, 50),
    ]
    .into_iter()
    .map(|(t, cost, limit)| (t, Rate::new(Decimal::from(cost), Decimal::from(limit))))
    .collect()
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            overweight_rate: default_overweight_rate(),
            entries: default_entries(),
        }
    }
}

impl RateTable {
    pub fn from_entries(
        overweight_rate: Decimal,
        entries: impl IntoIterator<Item = (ParcelType, Rate)>,
    ) -> Self {
        Self {
            overweight_rate,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn rate(&self, parcel_type: ParcelType) -> Result<&Rate> {
        self.entries
            .get(&parcel_type)
            .ok_or(Error::InvalidParcelType(parcel_type))
    }

    pub fn base_cost(&self, parcel_type: ParcelType) -> Result<Decimal> {
        self.rate(parcel_type).map(|r| r.base_cost)
    }

    pub fn weight_limit(&self, parcel_type: ParcelType) -> Result<Decimal> {
        self.rate(parcel_type).map(|r| r.weight_limit)
    }
}

/// `max(0, weight - limit) * rate`
pub fn overweight_cost(weight: Decimal, weight_limit: Decimal, rate: Decimal) -> Result<Decimal> {
    if weight <= weight_limit {
        return Ok(Decimal::ZERO);
    }
    weight
        .checked_sub(weight_limit)
        .and_then(|excess| excess.checked_mul(rate))
        .ok_or(Error::Arithmetic("overweight cost"))
}

/// Per-parcel cost engine
#[derive(Debug, Clone, Default)]
pub struct CostEngine {
    rates: RateTable,
}

impl CostEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Cost a classified parcel
    pub fn price(&self, parcel: &Parcel, parcel_type: ParcelType) -> Result<PricedParcel> {
        let base_cost = self.rates.base_cost(parcel_type)?;
        let weight_limit = self.rates.weight_limit(parcel_type)?;
        let is_overweight = parcel.weight > weight_limit;
        let overweight_cost =
            overweight_cost(parcel.weight, weight_limit, self.rates.overweight_rate)?;

        Ok(PricedParcel {
            parcel: *parcel,
            parcel_type,
            weight_limit,
            is_overweight,
            overweight_cost,
            cost: checked_add(base_cost, overweight_cost, "parcel cost")?,
        })
    }
}
