use serde::{Deserialize, Serialize};

use super::commission::CommissionSchedule;
use super::programs::{GuaranteeConfig, TrialConfig};
use super::tiers::{default_tiers, TierDefinition};

/// Root pricing configuration.
///
/// Everything the engine treats as business rules lives here so prices can
/// change without touching engine code. Every engine entry point takes it
/// explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Tier used when no size band matches the clinic
    #[serde(default = "default_fallback_tier")]
    pub fallback_tier: String,

    #[serde(default)]
    pub commission: CommissionSchedule,

    #[serde(default)]
    pub discounts: DiscountConfig,

    #[serde(default)]
    pub bulk_ordering: BulkOrderingConfig,

    #[serde(default)]
    pub estimation: EstimationConfig,

    #[serde(default)]
    pub guarantee: GuaranteeConfig,

    #[serde(default)]
    pub trial: TrialConfig,

    /// Catalog in display order, smallest clinics first
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierDefinition>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            fallback_tier: default_fallback_tier(),
            commission: CommissionSchedule::default(),
            discounts: DiscountConfig::default(),
            bulk_ordering: BulkOrderingConfig::default(),
            estimation: EstimationConfig::default(),
            guarantee: GuaranteeConfig::default(),
            trial: TrialConfig::default(),
            tiers: default_tiers(),
        }
    }
}

impl PricingConfig {
    pub fn tier_by_id(&self, id: &str) -> Option<&TierDefinition> {
        self.tiers.iter().find(|tier| tier.id == id)
    }
}

/// Prepayment and referral discounts, as fractions of the list price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountConfig {
    #[serde(default = "default_annual_discount")]
    pub annual: f64,

    #[serde(default = "default_semi_annual_discount")]
    pub semi_annual: f64,

    /// Per referral; stacks up to `max_referral`
    #[serde(default = "default_referral_discount")]
    pub referral: f64,

    #[serde(default = "default_max_referral_discount")]
    pub max_referral: f64,

    /// Number of first clinics that keep their signup price
    #[serde(default = "default_early_adopter_limit")]
    pub early_adopter_limit: u32,
}

impl Default for DiscountConfig {
    fn default() -> Self {
        Self {
            annual: default_annual_discount(),
            semi_annual: default_semi_annual_discount(),
            referral: default_referral_discount(),
            max_referral: default_max_referral_discount(),
            early_adopter_limit: default_early_adopter_limit(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkOrderingConfig {
    /// Markup applied to supply spend routed through bulk ordering
    #[serde(default = "default_delivery_markup")]
    pub delivery_markup: f64,
}

impl Default for BulkOrderingConfig {
    fn default() -> Self {
        Self {
            delivery_markup: default_delivery_markup(),
        }
    }
}

/// Constants behind the benefit estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationConfig {
    /// Value of one hour of staff admin time
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: f64,

    /// Flat weeks-per-month approximation, not calendar exact
    #[serde(default = "default_weeks_per_month")]
    pub weeks_per_month: f64,
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
            weeks_per_month: default_weeks_per_month(),
        }
    }
}

pub fn default_fallback_tier() -> String {
    "crecimiento".to_string()
}

pub fn default_annual_discount() -> f64 {
    0.20
}

pub fn default_semi_annual_discount() -> f64 {
    0.10
}

pub fn default_referral_discount() -> f64 {
    0.30
}

pub fn default_max_referral_discount() -> f64 {
    1.0
}

pub fn default_early_adopter_limit() -> u32 {
    300
}

pub fn default_delivery_markup() -> f64 {
    0.10
}

pub fn default_hourly_rate() -> f64 {
    25_000.0
}

pub fn default_weeks_per_month() -> f64 {
    4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_default_config() {
        let config: PricingConfig = toml::from_str("").unwrap();
        assert_eq!(config, PricingConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config: PricingConfig = toml::from_str(
            r#"
            [commission]
            standard_rate = 0.06

            [estimation]
            hourly_rate = 30000.0
            "#,
        )
        .unwrap();

        assert_eq!(config.commission.initial_rate, 0.03);
        assert_eq!(config.commission.standard_rate, 0.06);
        assert_eq!(config.commission.months_until_increase, 6);
        assert_eq!(config.estimation.hourly_rate, 30_000.0);
        assert_eq!(config.estimation.weeks_per_month, 4.0);
        assert_eq!(config.tiers.len(), 5);
    }

    #[test]
    fn tier_lookup_by_id() {
        let config = PricingConfig::default();
        assert_eq!(
            config.tier_by_id("profesional").map(|t| t.name.as_str()),
            Some("Profesional")
        );
        assert!(config.tier_by_id("platinum").is_none());
    }
}
