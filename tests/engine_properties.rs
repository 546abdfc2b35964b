use proptest::prelude::*;
use vetroi::engine::{
    resolve_commission_rate, ClinicInputs, PricingEngine, UNBOUNDED_ROI_SENTINEL,
};
use vetroi::config::CommissionSchedule;

/// Mostly realistic amounts, with the occasional value near `f64::MAX`.
fn amount(realistic: std::ops::Range<f64>) -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => realistic,
        1 => 1e300f64..f64::MAX,
        1 => Just(f64::MAX),
    ]
}

fn clinic_inputs() -> impl Strategy<Value = ClinicInputs> {
    (
        prop_oneof![0u32..5_000, Just(u32::MAX)],
        amount(-1_000_000.0..5_000_000.0),
        prop_oneof![0u32..500, Just(u32::MAX)],
        amount(-10.0..200.0),
        amount(-1_000_000.0..100_000_000.0),
        amount(-1_000_000.0..100_000_000.0),
        0u32..120,
    )
        .prop_map(
            |(consultations, price, no_shows, hours, sales, spend, months)| ClinicInputs {
                monthly_consultations: consultations,
                avg_consultation_price: price,
                monthly_no_shows: no_shows,
                weekly_admin_hours: hours,
                monthly_store_sales: sales,
                monthly_supply_spend: spend,
                months_on_platform: months,
            },
        )
}

fn tier_override() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("gratis".to_string())),
        Just(Some("profesional".to_string())),
        Just(Some("empresarial".to_string())),
        "[a-z]{1,8}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn prop_results_are_finite(inputs in clinic_inputs(), tier in tier_override()) {
        let result = PricingEngine::default().calculate(&inputs, tier.as_deref());
        let summary = &result.summary;

        prop_assert!(summary.yearly_roi.is_finite());
        prop_assert!(summary.net_monthly_benefit.is_finite());
        prop_assert!(summary.yearly_net_benefit.is_finite());
        prop_assert!(result.benefits.total_gross_benefit.is_finite());
        prop_assert!(result.costs.total_cost.is_finite());
        prop_assert!(result.benefits.total_gross_benefit >= 0.0);
        prop_assert!(result.costs.total_cost >= 0.0);
        if let Some(months) = summary.payback_months {
            prop_assert!(months.is_finite() && months > 0.0);
        }
    }

    #[test]
    fn prop_no_payback_without_benefit(inputs in clinic_inputs()) {
        let result = PricingEngine::default().calculate(&inputs, None);
        if result.benefits.total_gross_benefit == 0.0 {
            prop_assert_eq!(result.summary.payback_months, None);
        }
    }

    #[test]
    fn prop_unbounded_roi_uses_sentinel(inputs in clinic_inputs(), tier in tier_override()) {
        let result = PricingEngine::default().calculate(&inputs, tier.as_deref());
        if result.costs.total_cost == 0.0 {
            prop_assert!(result.summary.roi_unbounded);
        }
        if result.summary.roi_unbounded {
            prop_assert_eq!(result.summary.yearly_roi, UNBOUNDED_ROI_SENTINEL);
        }
    }

    #[test]
    fn prop_calculation_is_idempotent(inputs in clinic_inputs(), tier in tier_override()) {
        let engine = PricingEngine::default();
        let first = engine.calculate(&inputs, tier.as_deref());
        let second = engine.calculate(&inputs, tier.as_deref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_suggestion_always_exists(consultations in any::<u32>()) {
        let engine = PricingEngine::default();
        let tier = engine.suggest_tier(consultations);
        prop_assert!(engine.config().tier_by_id(&tier.id).is_some());
    }

    #[test]
    fn prop_no_commission_without_store(months in any::<u32>()) {
        let schedule = CommissionSchedule::default();
        prop_assert_eq!(resolve_commission_rate(months, &schedule, false), 0.0);

        let rate = resolve_commission_rate(months, &schedule, true);
        prop_assert!(rate == schedule.initial_rate || rate == schedule.standard_rate);
    }

    #[test]
    fn prop_clamped_inputs_are_echoed(inputs in clinic_inputs()) {
        let result = PricingEngine::default().calculate(&inputs, None);
        prop_assert!(result.inputs.is_sanitized());
        prop_assert!(result.inputs.monthly_store_sales >= 0.0);
    }
}
