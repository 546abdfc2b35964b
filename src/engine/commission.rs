use crate::config::{CommissionSchedule, Feature, TierDefinition};

/// Commission rate on store sales for a clinic `months_on_platform` months in.
///
/// Tiers without e-commerce never pay commission. The increase month itself
/// already bills at the standard rate.
pub fn resolve_commission_rate(
    months_on_platform: u32,
    schedule: &CommissionSchedule,
    tier_has_ecommerce: bool,
) -> f64 {
    if !tier_has_ecommerce {
        return 0.0;
    }

    let rate = if months_on_platform < schedule.months_until_increase {
        schedule.initial_rate
    } else {
        schedule.standard_rate
    };
    rate.clamp(0.0, 1.0)
}

/// Like [`resolve_commission_rate`], honouring a tier's negotiated rate.
pub fn resolve_tier_commission_rate(
    months_on_platform: u32,
    schedule: &CommissionSchedule,
    tier: &TierDefinition,
) -> f64 {
    let has_ecommerce = tier.has(Feature::Ecommerce);
    match tier.negotiated_commission_rate {
        Some(rate) if has_ecommerce => rate.clamp(0.0, 1.0),
        _ => resolve_commission_rate(months_on_platform, schedule, has_ecommerce),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;

    fn schedule() -> CommissionSchedule {
        CommissionSchedule {
            initial_rate: 0.03,
            standard_rate: 0.06,
            months_until_increase: 6,
        }
    }

    #[test]
    fn no_ecommerce_means_no_commission() {
        for months in [0, 5, 6, 7, 120] {
            assert_eq!(resolve_commission_rate(months, &schedule(), false), 0.0);
        }
    }

    #[test]
    fn boundary_month_uses_standard_rate() {
        assert_eq!(resolve_commission_rate(0, &schedule(), true), 0.03);
        assert_eq!(resolve_commission_rate(5, &schedule(), true), 0.03);
        assert_eq!(resolve_commission_rate(6, &schedule(), true), 0.06);
        assert_eq!(resolve_commission_rate(36, &schedule(), true), 0.06);
    }

    #[test]
    fn zero_threshold_starts_at_standard_rate() {
        let schedule = CommissionSchedule {
            months_until_increase: 0,
            ..schedule()
        };
        assert_eq!(resolve_commission_rate(0, &schedule, true), 0.06);
    }

    #[test]
    fn negotiated_rate_overrides_schedule() {
        let config = PricingConfig::default();
        let enterprise = config.tier_by_id("empresarial").unwrap();
        assert_eq!(resolve_tier_commission_rate(0, &schedule(), enterprise), 0.02);
        assert_eq!(resolve_tier_commission_rate(24, &schedule(), enterprise), 0.02);
    }

    #[test]
    fn negotiated_rate_ignored_without_ecommerce() {
        let mut tier = PricingConfig::default().tiers[1].clone();
        tier.negotiated_commission_rate = Some(0.02);
        assert_eq!(resolve_tier_commission_rate(0, &schedule(), &tier), 0.0);
    }

    #[test]
    fn tier_without_override_follows_schedule() {
        let config = PricingConfig::default();
        let growth = config.tier_by_id("crecimiento").unwrap();
        assert_eq!(resolve_tier_commission_rate(5, &schedule(), growth), 0.03);
        assert_eq!(resolve_tier_commission_rate(6, &schedule(), growth), 0.06);
    }
}
