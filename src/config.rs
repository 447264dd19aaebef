//! Pricing configuration
//!
//! Handles loading and validating a `pricing.yaml` file. Every section is
//! optional; omitted values fall back to the standard rate card.

use crate::classify::ClassificationRules;
use crate::discount::DiscountConfig;
use crate::error::{Error, Result};
use crate::rates::RateTable;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current configuration schema version
pub const CONFIG_VERSION: u32 = 1;

/// Root pricing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PricingConfig {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Classification rule variant
    #[serde(default)]
    pub classification: ClassificationRules,

    /// Base costs, weight limits and overweight rate
    #[serde(default)]
    pub rates: RateTable,

    /// Volume discount settings
    #[serde(default)]
    pub discounts: DiscountConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            classification: ClassificationRules::default(),
            rates: RateTable::default(),
            discounts: DiscountConfig::default(),
        }
    }
}

impl PricingConfig {
    /// Parse and validate a configuration from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: PricingConfig = serde_norway::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse pricing config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded pricing config");
        Ok(config)
    }

    /// Check the configuration is internally consistent
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported pricing config version: {}",
                self.version
            )));
        }

        if self.classification.heavy_tier
            && self.classification.heavy_weight_threshold <= Decimal::ZERO
        {
            return Err(Error::Config(
                "heavy_weight_threshold must be greater than 0".into(),
            ));
        }

        if self.rates.overweight_rate < Decimal::ZERO {
            return Err(Error::Config("overweight_rate must not be negative".into()));
        }

        for parcel_type in self.classification.reachable_types() {
            let rate = self.rates.entries.get(&parcel_type).ok_or_else(|| {
                Error::Config(format!("Missing rate entry for {} parcels", parcel_type))
            })?;
            if rate.base_cost < Decimal::ZERO {
                return Err(Error::Config(format!(
                    "base_cost for {} must not be negative",
                    parcel_type
                )));
            }
            if rate.weight_limit <= Decimal::ZERO {
                return Err(Error::Config(format!(
                    "weight_limit for {} must be greater than 0",
                    parcel_type
                )));
            }
        }

        Ok(())
    }
}
