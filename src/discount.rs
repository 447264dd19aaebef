//! Volume discounts — tiered reductions for deliveries of 4+ parcels
//!
//! Three tiers are evaluated in order against the full, already-priced
//! parcel list:
//!
//! | Tier | Trigger | Parcels discounted (N) |
//! |------|---------|------------------------|
//! | small | more than 3 Small parcels | `total / 4` |
//! | medium | more than 2 Medium parcels | `total / 3` |
//! | mixed | more than 4 parcels | `(total - (N_small * 4 + N_medium * 3)) / 5` |
//!
//! Each tier discounts its N cheapest parcels from the whole delivery, not
//! just from the parcels of the triggering type. Under
//! [`SelectionPolicy::Overlapping`] the tiers select independently and may
//! discount the same parcel more than once; under
//! [`SelectionPolicy::Exclusive`] a parcel is discounted by at most one tier.

use crate::amount::checked_sum;
use crate::error::Result;
use crate::parcel::{ParcelType, PricedParcel};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Deliveries with more parcels than this get volume discounts
pub const DISCOUNT_MIN_PARCELS: usize = 3;

const SMALL_TIER_MIN: usize = 3;
const SMALL_TIER_GROUP: usize = 4;
const MEDIUM_TIER_MIN: usize = 2;
const MEDIUM_TIER_GROUP: usize = 3;
const MIXED_TIER_MIN: usize = 4;
const MIXED_TIER_GROUP: usize = 5;

/// Whether a delivery of `parcel_count` parcels is eligible for discounts
pub fn is_discounted(parcel_count: usize) -> bool {
    parcel_count > DISCOUNT_MIN_PARCELS
}

/// How tiers share the cheapest-first parcel view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Every tier draws from all parcels
    #[default]
    Overlapping,
    /// Later tiers skip parcels taken by earlier ones
    Exclusive,
}

/// Discount configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DiscountConfig {
    #[serde(default)]
    pub selection: SelectionPolicy,
}

/// Outcome of a single tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TierDiscount {
    /// Number of parcels actually discounted
    pub parcels: usize,
    /// Negative sum of the discounted parcels' costs
    #[schemars(with = "String")]
    pub amount: Decimal,
}

/// Per-tier discount amounts for one delivery
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DiscountBreakdown {
    pub small: TierDiscount,
    pub medium: TierDiscount,
    pub mixed: TierDiscount,
}

impl DiscountBreakdown {
    /// Cumulative discount, always `<= 0`
    pub fn total(&self) -> Result<Decimal> {
        checked_sum(
            [self.small.amount, self.medium.amount, self.mixed.amount],
            "shipping discounts",
        )
    }

    pub fn is_empty(&self) -> bool {
        self.small.parcels == 0 && self.medium.parcels == 0 && self.mixed.parcels == 0
    }
}

/// Parcels in ascending cost order, ties kept in input order
struct CheapestFirst<'a> {
    parcels: &'a [PricedParcel],
    order: Vec<usize>,
    taken: Vec<bool>,
    policy: SelectionPolicy,
}

impl<'a> CheapestFirst<'a> {
    fn new(parcels: &'a [PricedParcel], policy: SelectionPolicy) -> Self {
        let mut order: Vec<usize> = (0..parcels.len()).collect();
        // stable: equal costs keep input order
        order.sort_by(|a, b| parcels[*a].cost.cmp(&parcels[*b].cost));
        Self {
            parcels,
            order,
            taken: vec![false; parcels.len()],
            policy,
        }
    }

    fn take(&mut self, n: usize) -> Result<TierDiscount> {
        let selected: Vec<usize> = match self.policy {
            SelectionPolicy::Overlapping => self.order.iter().copied().take(n).collect(),
            SelectionPolicy::Exclusive => self
                .order
                .iter()
                .copied()
                .filter(|i| !self.taken[*i])
                .take(n)
                .collect(),
        };
        for i in &selected {
            self.taken[*i] = true;
        }
        let sum = checked_sum(
            selected.iter().map(|i| self.parcels[*i].cost),
            "tier discount",
        )?;
        Ok(TierDiscount {
            parcels: selected.len(),
            amount: -sum,
        })
    }
}

/// Tiered volume discount engine
#[derive(Debug, Clone, Default)]
pub struct DiscountEngine {
    policy: SelectionPolicy,
}

impl DiscountEngine {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Compute every tier's discount over a fully priced parcel list
    pub fn apply(&self, parcels: &[PricedParcel]) -> Result<DiscountBreakdown> {
        let total = parcels.len();
        if !is_discounted(total) {
            return Ok(DiscountBreakdown::default());
        }

        let count_of = |t: ParcelType| parcels.iter().filter(|p| p.parcel_type == t).count();
        let mut view = CheapestFirst::new(parcels, self.policy);
        let mut breakdown = DiscountBreakdown::default();

        let mut n_small = 0;
        if count_of(ParcelType::Small) > SMALL_TIER_MIN {
            n_small = total / SMALL_TIER_GROUP;
            breakdown.small = view.take(n_small)?;
            tracing::debug!(n = n_small, amount = %breakdown.small.amount, "small-parcel discount");
        }

        let mut n_medium = 0;
        if count_of(ParcelType::Medium) > MEDIUM_TIER_MIN {
            n_medium = total / MEDIUM_TIER_GROUP;
            breakdown.medium = view.take(n_medium)?;
            tracing::debug!(n = n_medium, amount = %breakdown.medium.amount, "medium-parcel discount");
        }

        if total > MIXED_TIER_MIN {
            let grouped = n_small * SMALL_TIER_GROUP + n_medium * MEDIUM_TIER_GROUP;
            let n_mixed = total.saturating_sub(grouped) / MIXED_TIER_GROUP;
            if n_mixed > 0 {
                breakdown.mixed = view.take(n_mixed)?;
                tracing::debug!(n = n_mixed, amount = %breakdown.mixed.amount, "mixed-parcel discount");
            }
        }

        Ok(breakdown)
    }
}
