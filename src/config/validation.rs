//! Catalog validation with error accumulation.
//!
//! Every check runs and every problem is reported, so a broken pricing file
//! can be fixed in one pass. Checks return stillwater's `Validation` and are
//! combined so no issue is dropped; conversion to [`PricingError`]
//! happens only at the `Result` boundary in [`validate_config`].
//!
//! The engine relies on these invariants:
//!
//! - tier ids are unique and non-empty
//! - size bands are sorted, contiguous, and non-overlapping, so each
//!   consultation count inside the catalog maps to exactly one tier
//! - rates, discounts, and effect coefficients are fractions in `[0, 1]`
//! - money amounts are finite and non-negative
//! - the fallback and trial tiers exist

use std::collections::HashSet;

use stillwater::{NonEmptyVec, Validation};

use super::core::PricingConfig;
use super::tiers::TierDefinition;
use crate::errors::{PricingError, Result, ValidationIssue};

/// Validation result carrying every issue found.
pub type PricingValidation<T> = Validation<T, NonEmptyVec<ValidationIssue>>;

fn validation_success() -> PricingValidation<()> {
    Validation::Success(())
}

fn validation_failure(issue: ValidationIssue) -> PricingValidation<()> {
    Validation::Failure(NonEmptyVec::new(issue, Vec::new()))
}

/// Fails with `issue` unless `ok` holds.
fn ensure(ok: bool, issue: impl FnOnce() -> ValidationIssue) -> PricingValidation<()> {
    if ok {
        validation_success()
    } else {
        validation_failure(issue())
    }
}

/// Combine validations, accumulating all issues.
fn combine_validations(
    validations: impl IntoIterator<Item = PricingValidation<()>>,
) -> PricingValidation<()> {
    let issues: Vec<ValidationIssue> = validations
        .into_iter()
        .flat_map(|validation| match validation {
            Validation::Success(()) => Vec::new(),
            Validation::Failure(issues) => issues.into_vec(),
        })
        .collect();

    match NonEmptyVec::from_vec(issues) {
        Some(issues) => Validation::Failure(issues),
        None => validation_success(),
    }
}

/// Validate the whole config, accumulating every issue.
pub fn validate_pricing(config: &PricingConfig) -> PricingValidation<()> {
    let tiers = config.tiers.iter().enumerate().map(|(i, tier)| validate_tier(i, tier));

    let fractions = [
        ("commission.initial_rate", config.commission.initial_rate),
        ("commission.standard_rate", config.commission.standard_rate),
        ("discounts.annual", config.discounts.annual),
        ("discounts.semi_annual", config.discounts.semi_annual),
        ("discounts.referral", config.discounts.referral),
        ("discounts.max_referral", config.discounts.max_referral),
        ("bulk_ordering.delivery_markup", config.bulk_ordering.delivery_markup),
    ]
    .map(|(field, value)| check_fraction(field, value));

    let catalog = [
        ensure(!config.tiers.is_empty(), || {
            ValidationIssue::new("tiers", "catalog must contain at least one tier")
        }),
        validate_unique_ids(&config.tiers),
        validate_band_continuity(&config.tiers),
        ensure(config.tier_by_id(&config.fallback_tier).is_some(), || {
            ValidationIssue::new(
                "fallback_tier",
                format!("unknown tier '{}'", config.fallback_tier),
            )
        }),
        ensure(config.tier_by_id(&config.trial.trial_tier).is_some(), || {
            ValidationIssue::new(
                "trial.trial_tier",
                format!("unknown tier '{}'", config.trial.trial_tier),
            )
        }),
    ];

    let estimation = [
        check_amount("estimation.hourly_rate", config.estimation.hourly_rate),
        check_positive("estimation.weeks_per_month", config.estimation.weeks_per_month),
        check_positive(
            "guarantee.average_client_value",
            config.guarantee.average_client_value,
        ),
        check_amount("guarantee.min_client_spend", config.guarantee.min_client_spend),
    ];

    combine_validations(
        tiers
            .chain(fractions)
            .chain(catalog)
            .chain(estimation),
    )
}

/// Issues found in `config`; empty when it is valid.
pub fn collect_issues(config: &PricingConfig) -> Vec<ValidationIssue> {
    match validate_pricing(config) {
        Validation::Success(()) => Vec::new(),
        Validation::Failure(issues) => issues.into_vec(),
    }
}

/// Validate the config, failing with all accumulated issues.
pub fn validate_config(config: &PricingConfig) -> Result<()> {
    match validate_pricing(config) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(issues) => Err(PricingError::Validation(issues.into_vec())),
    }
}

fn validate_tier(index: usize, tier: &TierDefinition) -> PricingValidation<()> {
    let field = |name: &str| format!("tiers[{index}].{name}");

    let band = match tier.size_band.max {
        Some(max) => ensure(max > tier.size_band.min, || {
            ValidationIssue::new(
                field("size_band"),
                format!("max ({max}) must be greater than min ({})", tier.size_band.min),
            )
        }),
        None => validation_success(),
    };

    let negotiated = match tier.negotiated_commission_rate {
        Some(rate) => check_fraction(&field("negotiated_commission_rate"), rate),
        None => validation_success(),
    };

    combine_validations([
        ensure(!tier.id.trim().is_empty(), || {
            ValidationIssue::new(field("id"), "must not be empty")
        }),
        ensure(!tier.name.trim().is_empty(), || {
            ValidationIssue::new(field("name"), "must not be empty")
        }),
        check_amount(&field("monthly_price"), tier.monthly_price),
        check_amount(&field("extra_user_price"), tier.extra_user_price),
        band,
        negotiated,
        check_fraction(&field("effects.expected_growth"), tier.effects.expected_growth),
        check_fraction(&field("effects.no_show_reduction"), tier.effects.no_show_reduction),
        check_fraction(&field("effects.time_savings"), tier.effects.time_savings),
    ])
}

fn validate_unique_ids(tiers: &[TierDefinition]) -> PricingValidation<()> {
    let mut seen = HashSet::new();
    combine_validations(tiers.iter().enumerate().map(|(index, tier)| {
        ensure(seen.insert(tier.id.as_str()), || {
            ValidationIssue::new(
                format!("tiers[{index}].id"),
                format!("duplicate tier id '{}'", tier.id),
            )
        })
    }))
}

// Bands are checked in catalog order: each one must start where the
// previous one ended, and only the last may be open-ended.
fn validate_band_continuity(tiers: &[TierDefinition]) -> PricingValidation<()> {
    combine_validations(tiers.windows(2).enumerate().map(|(index, pair)| {
        let (prev, next) = (&pair[0], &pair[1]);
        let field = format!("tiers[{}].size_band.min", index + 1);
        match prev.size_band.max {
            None => validation_failure(ValidationIssue::new(
                format!("tiers[{index}].size_band.max"),
                format!(
                    "only the last tier may be open-ended ('{}' is followed by '{}')",
                    prev.id, next.id
                ),
            )),
            Some(max) if next.size_band.min < max => validation_failure(ValidationIssue::new(
                field,
                format!(
                    "band overlaps '{}' (starts at {}, previous ends at {max})",
                    prev.id, next.size_band.min
                ),
            )),
            Some(max) if next.size_band.min > max => validation_failure(ValidationIssue::new(
                field,
                format!(
                    "gap after '{}' (starts at {}, previous ends at {max})",
                    prev.id, next.size_band.min
                ),
            )),
            Some(_) => validation_success(),
        }
    }))
}

fn check_fraction(field: &str, value: f64) -> PricingValidation<()> {
    ensure((0.0..=1.0).contains(&value), || {
        ValidationIssue::new(field, format!("must be between 0.0 and 1.0 (got {value})"))
    })
}

fn check_amount(field: &str, value: f64) -> PricingValidation<()> {
    ensure(value.is_finite() && value >= 0.0, || {
        ValidationIssue::new(
            field,
            format!("must be a non-negative amount (got {value})"),
        )
    })
}

fn check_positive(field: &str, value: f64) -> PricingValidation<()> {
    ensure(value.is_finite() && value > 0.0, || {
        ValidationIssue::new(field, format!("must be a positive number (got {value})"))
    })
}
