//! Parcel types — the per-package data model
//!
//! A [`Parcel`] carries only caller-supplied measurements. Everything the
//! pricing pipeline derives from it lives on [`PricedParcel`], which is
//! built fresh on every pricing run.

use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One package within a delivery, as supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Parcel {
    /// Height in length units
    #[schemars(with = "String")]
    pub height: Decimal,

    /// Width in length units
    #[schemars(with = "String")]
    pub width: Decimal,

    /// Depth in length units
    #[schemars(with = "String")]
    pub depth: Decimal,

    /// Mass in weight units
    #[schemars(with = "String")]
    pub weight: Decimal,
}

impl Parcel {
    pub fn new(height: Decimal, width: Decimal, depth: Decimal, weight: Decimal) -> Self {
        Self {
            height,
            width,
            depth,
            weight,
        }
    }

    /// Dimensions as `[height, width, depth]`
    pub fn dimensions(&self) -> [Decimal; 3] {
        [self.height, self.width, self.depth]
    }
}

/// Size category of a parcel
///
/// Variant order follows the classification tiers, so `Ord` sorts from
/// cheapest to most expensive class.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ParcelType {
    Small,
    Medium,
    Large,
    Xl,
    Heavy,
}

impl ParcelType {
    /// Every category, in tier order
    pub const ALL: [ParcelType; 5] = [
        ParcelType::Small,
        ParcelType::Medium,
        ParcelType::Large,
        ParcelType::Xl,
        ParcelType::Heavy,
    ];
}

impl std::fmt::Display for ParcelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParcelType::Small => write!(f, "Small"),
            ParcelType::Medium => write!(f, "Medium"),
            ParcelType::Large => write!(f, "Large"),
            ParcelType::Xl => write!(f, "XL"),
            ParcelType::Heavy => write!(f, "Heavy"),
        }
    }
}

/// A parcel after classification and costing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PricedParcel {
    /// The raw input this result was derived from
    pub parcel: Parcel,

    pub parcel_type: ParcelType,

    #[schemars(with = "String")]
    pub weight_limit: Decimal,

    pub is_overweight: bool,

    /// Zero unless `weight > weight_limit`
    #[schemars(with = "String")]
    pub overweight_cost: Decimal,

    /// Base cost for the type plus `overweight_cost`
    #[schemars(with = "String")]
    pub cost: Decimal,
}
