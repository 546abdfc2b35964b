use super::*;
use crate::config::{CommissionSchedule, SizeBand, TierEffects, TierFeatures};
use pretty_assertions::assert_eq;

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

fn scenario_inputs(months_on_platform: u32) -> ClinicInputs {
    ClinicInputs {
        monthly_consultations: 100,
        avg_consultation_price: 150_000.0,
        monthly_no_shows: 10,
        weekly_admin_hours: 15.0,
        monthly_store_sales: 3_000_000.0,
        monthly_supply_spend: 2_000_000.0,
        months_on_platform,
    }
}

fn professional_tier() -> TierDefinition {
    TierDefinition {
        id: "profesional".into(),
        name: "Profesional".into(),
        description: String::new(),
        monthly_price: 250_000.0,
        custom_pricing: false,
        popular: false,
        included_users: Some(10),
        extra_user_price: 50_000.0,
        negotiated_commission_rate: None,
        size_band: SizeBand::new(50, 500),
        features: TierFeatures {
            ecommerce: true,
            bulk_ordering: false,
            automated_reminders: true,
            shows_ads: false,
        },
        effects: TierEffects {
            expected_growth: 0.0,
            no_show_reduction: 0.20,
            time_savings: 0.30,
        },
    }
}

fn free_tier() -> TierDefinition {
    TierDefinition {
        id: "gratis".into(),
        name: "Gratis".into(),
        description: String::new(),
        monthly_price: 0.0,
        custom_pricing: false,
        popular: false,
        included_users: None,
        extra_user_price: 0.0,
        negotiated_commission_rate: None,
        size_band: SizeBand::new(0, 50),
        features: TierFeatures {
            shows_ads: true,
            ..TierFeatures::default()
        },
        effects: TierEffects::default(),
    }
}

fn scenario_engine() -> PricingEngine {
    let config = PricingConfig {
        fallback_tier: "profesional".into(),
        commission: CommissionSchedule {
            initial_rate: 0.03,
            standard_rate: 0.06,
            months_until_increase: 6,
        },
        tiers: vec![free_tier(), professional_tier()],
        ..PricingConfig::default()
    };
    PricingEngine::new(config).unwrap()
}

#[test]
fn professional_scenario_before_increase() {
    let result = scenario_engine().calculate(&scenario_inputs(0), None);

    assert_eq!(result.active_tier.id, "profesional");
    approx(result.commission_rate, 0.03);
    assert_eq!(result.benefits.recovered_no_shows, 2);
    approx(result.benefits.revenue_from_recovered_no_shows, 300_000.0);
    approx(result.benefits.hours_saved_per_month, 18.0);
    approx(result.costs.ecommerce_commission, 90_000.0);
    approx(result.costs.subscription_cost, 250_000.0);
    approx(result.costs.total_cost, 340_000.0);
}

#[test]
fn professional_scenario_at_increase_month() {
    let result = scenario_engine().calculate(&scenario_inputs(6), None);

    approx(result.commission_rate, 0.06);
    approx(result.costs.ecommerce_commission, 180_000.0);
    approx(result.costs.total_cost, 430_000.0);
}

#[test]
fn professional_scenario_summary() {
    let engine = scenario_engine();
    let result = engine.calculate(&scenario_inputs(0), None);
    let hourly_rate = engine.config().estimation.hourly_rate;

    let gross = 300_000.0 + 18.0 * hourly_rate;
    approx(result.benefits.total_gross_benefit, gross);
    approx(result.summary.net_monthly_benefit, gross - 340_000.0);
    approx(result.summary.yearly_cost, 340_000.0 * 12.0);
    assert!(!result.summary.roi_unbounded);
    assert_eq!(result.summary.break_even_clients, Some(2));
    approx(result.summary.annual_price, 250_000.0 * 12.0 * 0.8);
    approx(result.summary.annual_savings, 250_000.0 * 12.0 * 0.2);
    approx(result.summary.payback_months.unwrap(), 340_000.0 / gross);
}

#[test]
fn free_tier_has_no_cost_metrics() {
    let engine = scenario_engine();
    let inputs = ClinicInputs {
        monthly_consultations: 10,
        ..scenario_inputs(12)
    };
    let result = engine.calculate(&inputs, None);

    assert_eq!(result.active_tier.id, "gratis");
    assert_eq!(result.commission_rate, 0.0);
    assert_eq!(result.costs.total_cost, 0.0);
    assert!(result.costs.lines.is_empty());
    assert_eq!(result.summary.break_even_clients, Some(0));
    assert_eq!(result.summary.payback_months, None);
    assert_eq!(result.summary.yearly_roi, UNBOUNDED_ROI_SENTINEL);
    assert!(result.summary.roi_unbounded);
    assert_eq!(result.summary.annual_price, 0.0);
    assert_eq!(result.summary.annual_savings, 0.0);
}

#[test]
fn free_tier_without_benefit_still_has_no_payback() {
    let engine = scenario_engine();
    let inputs = ClinicInputs {
        monthly_consultations: 0,
        monthly_no_shows: 0,
        weekly_admin_hours: 0.0,
        ..scenario_inputs(0)
    };
    let result = engine.calculate(&inputs, None);

    assert_eq!(result.benefits.total_gross_benefit, 0.0);
    assert_eq!(result.summary.payback_months, None);
}

#[test]
fn negative_net_benefit_is_reported_as_is() {
    let engine = scenario_engine();
    let inputs = ClinicInputs {
        monthly_no_shows: 0,
        weekly_admin_hours: 0.0,
        ..scenario_inputs(0)
    };
    let result = engine.calculate(&inputs, None);

    approx(result.summary.net_monthly_benefit, -340_000.0);
    assert_eq!(result.summary.yearly_roi, -100.0);
    assert_eq!(result.summary.payback_months, None);
}

#[test]
fn calculation_is_idempotent() {
    let engine = PricingEngine::default();
    let inputs = scenario_inputs(3);

    let first = engine.calculate(&inputs, Some("crecimiento"));
    let second = engine.calculate(&inputs, Some("crecimiento"));
    assert_eq!(first, second);
}

#[test]
fn override_and_fallback_flow_through_result() {
    let engine = PricingEngine::default();

    let applied = engine.calculate(&scenario_inputs(0), Some("basico"));
    assert_eq!(applied.suggested_tier, "crecimiento");
    assert_eq!(applied.active_tier.id, "basico");
    assert_eq!(applied.override_status, OverrideStatus::Applied);

    let ignored = engine.calculate(&scenario_inputs(0), Some("nope"));
    assert_eq!(ignored.active_tier.id, "crecimiento");
    assert!(matches!(ignored.override_status, OverrideStatus::Ignored { .. }));
}

#[test]
fn enterprise_uses_negotiated_commission_and_custom_pricing() {
    let engine = PricingEngine::default();
    let inputs = ClinicInputs {
        monthly_consultations: 800,
        ..scenario_inputs(0)
    };
    let result = engine.calculate(&inputs, None);

    assert_eq!(result.active_tier.id, "empresarial");
    assert!(result.active_tier.custom_pricing);
    approx(result.commission_rate, 0.02);
    assert!(result.costs.custom_pricing);
    assert_eq!(result.summary.break_even_clients, Some(0));
    assert_eq!(result.summary.annual_price, 0.0);
}

#[test]
fn zero_price_keeps_break_even_undefined() {
    let engine = PricingEngine::default();
    let inputs = ClinicInputs {
        avg_consultation_price: 0.0,
        ..ClinicInputs::default()
    };
    let result = engine.calculate(&inputs, None);

    assert_eq!(result.active_tier.id, "crecimiento");
    assert_eq!(result.summary.break_even_clients, None);
    assert!(result.summary.yearly_roi.is_finite());
}

#[test]
fn negative_inputs_are_clamped_at_the_boundary() {
    let engine = PricingEngine::default();
    let inputs = ClinicInputs {
        monthly_store_sales: -1_000_000.0,
        weekly_admin_hours: -5.0,
        ..ClinicInputs::default()
    };
    let result = engine.calculate(&inputs, None);

    assert_eq!(result.inputs.monthly_store_sales, 0.0);
    assert_eq!(result.costs.ecommerce_commission, 0.0);
    assert_eq!(result.benefits.hours_saved_per_month, 0.0);
}

#[test]
fn engine_rejects_invalid_catalog() {
    let config = PricingConfig {
        fallback_tier: "missing".into(),
        ..PricingConfig::default()
    };
    assert!(PricingEngine::new(config).is_err());
}

#[test]
fn suggestion_is_defined_for_extreme_sizes() {
    let engine = scenario_engine();
    assert_eq!(engine.suggest_tier(0).id, "gratis");
    assert_eq!(engine.suggest_tier(u32::MAX).id, "profesional");
}

#[test]
fn extreme_amounts_keep_the_summary_finite() {
    let inputs = ClinicInputs {
        avg_consultation_price: f64::MAX,
        weekly_admin_hours: f64::MAX,
        monthly_store_sales: f64::MAX,
        monthly_supply_spend: f64::MAX,
        ..scenario_inputs(12)
    };
    let result = PricingEngine::default().calculate(&inputs, Some("profesional"));
    let summary = &result.summary;

    assert_eq!(result.benefits.total_gross_benefit, f64::MAX);
    assert!(result.costs.total_cost.is_finite());
    assert!(summary.net_monthly_benefit.is_finite());
    assert!(summary.yearly_benefit.is_finite());
    assert!(summary.yearly_net_benefit.is_finite());
    assert!(summary.yearly_roi.is_finite());
    assert!(summary.payback_months.map_or(true, |months| months > 0.0));
}
