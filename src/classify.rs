//! Parcel classification — derive a size category from measurements
//!
//! Rules are evaluated in precedence order, first match wins:
//!
//! | Rule | Condition | Type |
//! |------|-----------|------|
//! | heavy | `weight >= 50` (Heavy tier only) | Heavy |
//! | small | every dimension `< 10` | Small |
//! | medium | every dimension `< 50` | Medium |
//! | large | every dimension `< 100` | Large |
//! | xl | any dimension `>= 100` | XL |

use crate::error::{Error, Result};
use crate::parcel::{Parcel, ParcelType};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Classify a parcel with the default rules (Heavy tier enabled)
pub fn classify(parcel: &Parcel) -> Result<ParcelType> {
    ParcelClassifier::default().classify(parcel)
}

/// Which classification rule set is in force
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ClassificationRules {
    /// Classify parcels at or above `heavy_weight_threshold` as Heavy
    #[serde(default = "default_true")]
    pub heavy_tier: bool,

    /// Weight at which a parcel becomes Heavy
    #[serde(default = "default_heavy_threshold")]
    #[schemars(with = "String")]
    pub heavy_weight_threshold: Decimal,
}

fn default_true() -> bool {
    true
}

fn default_heavy_threshold() -> Decimal {
    Decimal::from(50)
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            heavy_tier: true,
            heavy_weight_threshold: default_heavy_threshold(),
        }
    }
}

impl ClassificationRules {
    /// Purely dimensional rules with no Heavy tier
    pub fn without_heavy_tier() -> Self {
        Self {
            heavy_tier: false,
            ..Self::default()
        }
    }

    /// Categories this rule set can produce
    pub fn reachable_types(&self) -> Vec<ParcelType> {
        ParcelType::ALL
            .into_iter()
            .filter(|t| self.heavy_tier || *t != ParcelType::Heavy)
            .collect()
    }
}

/// Size thresholds, each an exclusive upper bound on every dimension
const SMALL_MAX: i64 = 10;
const MEDIUM_MAX: i64 = 50;
const LARGE_MAX: i64 = 100;

/// Parcel classifier
#[derive(Debug, Clone, Default)]
pub struct ParcelClassifier {
    rules: ClassificationRules,
}

impl ParcelClassifier {
    pub fn new(rules: ClassificationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ClassificationRules {
        &self.rules
    }

    /// Derive the size category of a parcel
    pub fn classify(&self, parcel: &Parcel) -> Result<ParcelType> {
        let dims = parcel.dimensions();
        if dims.iter().any(|d| *d <= Decimal::ZERO) {
            return Err(Error::InvalidParcelDimension {
                height: parcel.height,
                width: parcel.width,
                depth: parcel.depth,
            });
        }
        if parcel.weight < Decimal::ZERO {
            return Err(Error::InvalidParcelWeight(parcel.weight));
        }

        if self.rules.heavy_tier && parcel.weight >= self.rules.heavy_weight_threshold {
            return Ok(ParcelType::Heavy);
        }

        let all_below = |limit: i64| dims.iter().all(|d| *d < Decimal::from(limit));

        if all_below(SMALL_MAX) {
            Ok(ParcelType::Small)
        } else if all_below(MEDIUM_MAX) {
            Ok(ParcelType::Medium)
        } else if all_below(LARGE_MAX) {
            Ok(ParcelType::Large)
        } else {
            Ok(ParcelType::Xl)
        }
    }
}
