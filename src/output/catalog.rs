//! Plan catalog as shown by `vetroi tiers`.

use serde::Serialize;

use crate::config::{Feature, PricingConfig, SizeBand, TierDefinition};
use crate::engine::{
    discounted_price, roi_guarantee_threshold, total_price_for_users, trial_days, DiscountKind,
};

const ALL_FEATURES: [Feature; 4] = [
    Feature::Ecommerce,
    Feature::BulkOrdering,
    Feature::AutomatedReminders,
    Feature::AdFree,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    pub description: String,
    /// `None` for custom-priced tiers
    pub monthly_price: Option<f64>,
    pub annual_monthly_price: Option<f64>,
    pub semi_annual_monthly_price: Option<f64>,
    /// Monthly price after stacked referral discounts, when referrals were given
    pub referral_monthly_price: Option<f64>,
    /// Monthly price for the requested seat count, when one was given
    pub price_for_users: Option<f64>,
    pub included_users: Option<u32>,
    pub size_band: SizeBand,
    pub popular: bool,
    pub features: Vec<Feature>,
    /// New clients promised within the guarantee window; `None` for free and
    /// custom-priced tiers
    pub guarantee_clients: Option<u64>,
}

/// Signup programs shown under the plan list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgramTerms {
    pub trial_tier: String,
    pub trial_days: u32,
    pub referral_trial_days: u32,
    pub guarantee_months: u32,
    pub guarantee_free_months: u32,
    pub early_adopter_limit: u32,
}

impl ProgramTerms {
    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            trial_tier: config.trial.trial_tier.clone(),
            trial_days: trial_days(false, &config.trial),
            referral_trial_days: trial_days(true, &config.trial),
            guarantee_months: config.guarantee.evaluation_months,
            guarantee_free_months: config.guarantee.free_months_if_failed,
            early_adopter_limit: config.discounts.early_adopter_limit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogReport {
    pub users: Option<u32>,
    pub referrals: u32,
    pub rows: Vec<CatalogRow>,
    pub programs: ProgramTerms,
}

impl CatalogReport {
    pub fn build(config: &PricingConfig, users: Option<u32>, referrals: u32) -> Self {
        let rows = config
            .tiers
            .iter()
            .map(|tier| catalog_row(tier, config, users, referrals))
            .collect();
        Self {
            users,
            referrals,
            rows,
            programs: ProgramTerms::from_config(config),
        }
    }
}

fn catalog_row(
    tier: &TierDefinition,
    config: &PricingConfig,
    users: Option<u32>,
    referrals: u32,
) -> CatalogRow {
    let price = tier.billable_price();
    let discounted =
        |kind, count| price.map(|p| discounted_price(p, kind, count, &config.discounts));

    CatalogRow {
        id: tier.id.clone(),
        name: tier.name.clone(),
        description: tier.description.clone(),
        monthly_price: price,
        annual_monthly_price: discounted(DiscountKind::Annual, 0),
        semi_annual_monthly_price: discounted(DiscountKind::SemiAnnual, 0),
        referral_monthly_price: if referrals > 0 {
            discounted(DiscountKind::Referral, referrals)
        } else {
            None
        },
        price_for_users: users.and_then(|count| total_price_for_users(tier, count)),
        included_users: tier.included_users,
        size_band: tier.size_band,
        popular: tier.popular,
        features: ALL_FEATURES
            .into_iter()
            .filter(|feature| tier.has(*feature))
            .collect(),
        guarantee_clients: price
            .filter(|_| !tier.is_free())
            .map(|p| roi_guarantee_threshold(p, &config.guarantee)),
    }
}

pub fn format_band(band: &SizeBand) -> String {
    match band.max {
        Some(max) => format!("{}-{}", band.min, max),
        None => format!("{}+", band.min),
    }
}
