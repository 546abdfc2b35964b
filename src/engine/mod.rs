//! Pricing/ROI calculation engine.
//!
//! The pipeline is a pure function of its inputs:
//!
//! 1. [`selector`] picks the active tier from clinic size or an override
//! 2. [`commission`] resolves the store commission rate for the clinic's tenure
//! 3. [`benefits`] and [`costs`] estimate what the tier earns and costs
//! 4. [`summary`] combines both into ROI, payback, and annual pricing figures
//!
//! Nothing here reads the clock, the environment, or global state. Calling
//! [`PricingEngine::calculate`] twice with equal inputs yields equal results,
//! so callers may memoize on input equality.

pub mod benefits;
pub mod commission;
pub mod costs;
pub mod inputs;
pub mod pricing;
pub mod selector;
pub mod summary;

#[cfg(test)]
mod tests;

use serde::Serialize;

pub use benefits::{estimate_benefits, Availability, BenefitEstimate, BenefitKind, BenefitLine};
pub use commission::{resolve_commission_rate, resolve_tier_commission_rate};
pub use costs::{estimate_costs, CostEstimate, CostKind, CostLine};
pub use inputs::ClinicInputs;
pub use pricing::{
    discount_fraction, discounted_price, minimum_tier_for_feature, paid_tiers, popular_tier,
    roi_guarantee_threshold, total_price_for_users, trial_days, DiscountKind,
};
pub use selector::{fallback_index, matching_tier, OverrideStatus, TierSelection};
pub use summary::{aggregate, RoiGuarantee, RoiSummary, UNBOUNDED_ROI_SENTINEL};

use crate::config::{validate_config, PricingConfig, TierDefinition};
use crate::errors::{PricingError, Result};

/// The parts of the active tier presentation needs alongside the numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierSnapshot {
    pub id: String,
    pub name: String,
    pub monthly_price: f64,
    pub custom_pricing: bool,
    pub shows_ads: bool,
}

impl From<&TierDefinition> for TierSnapshot {
    fn from(tier: &TierDefinition) -> Self {
        Self {
            id: tier.id.clone(),
            name: tier.name.clone(),
            monthly_price: tier.monthly_price,
            custom_pricing: tier.custom_pricing,
            shows_ads: tier.features.shows_ads,
        }
    }
}

/// Everything derived for one set of clinic inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Inputs after boundary clamping
    pub inputs: ClinicInputs,
    pub suggested_tier: String,
    pub active_tier: TierSnapshot,
    pub override_status: OverrideStatus,
    pub commission_rate: f64,
    pub benefits: BenefitEstimate,
    pub costs: CostEstimate,
    pub summary: RoiSummary,
}

/// Calculation engine bound to a validated pricing configuration.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    config: PricingConfig,
    fallback: usize,
}

impl Default for PricingEngine {
    fn default() -> Self {
        let config = PricingConfig::default();
        let fallback = fallback_index(&config).unwrap_or_default();
        Self { config, fallback }
    }
}

impl PricingEngine {
    /// Validate `config` and build an engine over it.
    pub fn new(config: PricingConfig) -> Result<Self> {
        validate_config(&config)?;
        let fallback = fallback_index(&config).ok_or_else(|| {
            PricingError::invalid("tiers", "catalog must contain at least one tier")
        })?;
        Ok(Self { config, fallback })
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn fallback_tier(&self) -> &TierDefinition {
        &self.config.tiers[self.fallback]
    }

    /// Suggested tier for a clinic size. Never fails: sizes outside every
    /// band get the fallback tier.
    pub fn suggest_tier(&self, monthly_consultations: u32) -> &TierDefinition {
        selector::suggest_tier(monthly_consultations, &self.config.tiers, self.fallback_tier())
    }

    pub fn select_tier(
        &self,
        monthly_consultations: u32,
        override_id: Option<&str>,
    ) -> TierSelection<'_> {
        selector::select_tier(
            monthly_consultations,
            override_id,
            &self.config.tiers,
            self.fallback_tier(),
        )
    }

    /// Run the full pipeline for one set of inputs.
    pub fn calculate(&self, inputs: &ClinicInputs, override_id: Option<&str>) -> CalculationResult {
        let _span =
            tracing::debug_span!("calculate", override_id = override_id.unwrap_or("none")).entered();

        let inputs = inputs.sanitized();
        let selection = self.select_tier(inputs.monthly_consultations, override_id);
        let tier = selection.active;

        let commission_rate =
            resolve_tier_commission_rate(inputs.months_on_platform, &self.config.commission, tier);

        let benefits = estimate_benefits(&inputs, tier, &self.config);
        let costs = estimate_costs(&inputs, tier, commission_rate, &self.config);
        let summary = aggregate(&inputs, &benefits, &costs, tier, &self.config);

        tracing::debug!(
            tier = %tier.id,
            commission_rate,
            gross_benefit = benefits.total_gross_benefit,
            total_cost = costs.total_cost,
            "Calculation complete"
        );

        CalculationResult {
            inputs,
            suggested_tier: selection.suggested.id.clone(),
            active_tier: TierSnapshot::from(tier),
            override_status: selection.override_status,
            commission_rate,
            benefits,
            costs,
            summary,
        }
    }
}
