//! Pricing configuration: tier catalog, commission schedule, discounts, and
//! estimation constants.
//!
//! Configuration is plain data injected into the engine. It is loaded from a
//! `.vetroi.toml` file when one is found, otherwise built-in defaults are used.

mod commission;
mod core;
mod loader;
mod programs;
mod tiers;
pub mod validation;

pub use commission::{
    default_initial_rate, default_months_until_increase, default_standard_rate,
    CommissionSchedule,
};

pub use core::{
    default_annual_discount, default_delivery_markup, default_early_adopter_limit,
    default_fallback_tier, default_hourly_rate, default_max_referral_discount,
    default_referral_discount, default_semi_annual_discount, default_weeks_per_month,
    BulkOrderingConfig, DiscountConfig, EstimationConfig, PricingConfig,
};

pub use programs::{
    default_average_client_value, default_evaluation_months, default_free_months_if_failed,
    default_min_client_spend, default_referral_bonus_days, default_trial_days,
    default_trial_tier, GuaranteeConfig, TrialConfig,
};

pub use tiers::{default_tiers, Feature, SizeBand, TierDefinition, TierEffects, TierFeatures};

pub use loader::{
    default_config_toml, directory_ancestors, load_config, load_config_from,
    load_config_from_path, parse_and_validate_config, user_config_path, CONFIG_FILE_NAME,
};

pub use validation::{collect_issues, validate_config, validate_pricing, PricingValidation};
