//! Price-list helpers: discounts, extra-user fees, promotional programs, and
//! tier lookups.

use serde::{Deserialize, Serialize};

use crate::config::{
    DiscountConfig, Feature, GuaranteeConfig, PricingConfig, TierDefinition, TrialConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    Annual,
    SemiAnnual,
    /// Stacks per referral, capped at `DiscountConfig::max_referral`
    Referral,
}

/// Discount fraction for a kind; `referrals` only matters for referral discounts.
pub fn discount_fraction(kind: DiscountKind, referrals: u32, discounts: &DiscountConfig) -> f64 {
    match kind {
        DiscountKind::Annual => discounts.annual,
        DiscountKind::SemiAnnual => discounts.semi_annual,
        DiscountKind::Referral => {
            (discounts.referral * f64::from(referrals)).min(discounts.max_referral)
        }
    }
}

/// Monthly price after a discount, rounded to whole currency units.
pub fn discounted_price(
    monthly_price: f64,
    kind: DiscountKind,
    referrals: u32,
    discounts: &DiscountConfig,
) -> f64 {
    let discount = discount_fraction(kind, referrals, discounts);
    (monthly_price * (1.0 - discount)).round()
}

/// New clients a plan must bring within the guarantee window, rounded up.
///
/// Free plans have nothing to guarantee and need zero.
pub fn roi_guarantee_threshold(monthly_price: f64, guarantee: &GuaranteeConfig) -> u64 {
    if monthly_price <= 0.0 || guarantee.average_client_value <= 0.0 {
        return 0;
    }
    (monthly_price / guarantee.average_client_value).ceil() as u64
}

pub fn trial_days(referred: bool, trial: &TrialConfig) -> u32 {
    if referred {
        trial.standard_days.saturating_add(trial.referral_bonus_days)
    } else {
        trial.standard_days
    }
}

/// Monthly price for `users` seats, or `None` for custom-priced tiers.
pub fn total_price_for_users(tier: &TierDefinition, users: u32) -> Option<f64> {
    let base = tier.billable_price()?;
    let extra_users = match tier.included_users {
        None => 0,
        Some(included) => users.saturating_sub(included),
    };
    Some(base + f64::from(extra_users) * tier.extra_user_price)
}

/// Cheapest tier in catalog order that includes `feature`.
pub fn minimum_tier_for_feature(feature: Feature, config: &PricingConfig) -> Option<&TierDefinition> {
    config.tiers.iter().find(|tier| tier.has(feature))
}

pub fn paid_tiers(config: &PricingConfig) -> impl Iterator<Item = &TierDefinition> {
    config.tiers.iter().filter(|tier| tier.is_paid())
}

pub fn popular_tier(config: &PricingConfig) -> Option<&TierDefinition> {
    config.tiers.iter().find(|tier| tier.popular)
}
