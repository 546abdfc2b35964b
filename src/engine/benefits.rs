//! Estimated revenue and savings a tier brings to a clinic.
//!
//! Three streams are counted: new clients, missed appointments recovered by
//! reminders, and admin time saved. Store sales are reported but never
//! counted as benefit. The clinic earns that revenue with or without the
//! platform, so only the commission on it shows up (as a cost).

use serde::Serialize;

use super::inputs::{saturating, ClinicInputs};
use super::pricing::minimum_tier_for_feature;
use crate::config::{Feature, PricingConfig, TierDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitKind {
    NewClients,
    RecoveredNoShows,
    AdminTimeSavings,
}

impl BenefitKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NewClients => "New clients",
            Self::RecoveredNoShows => "Recovered no-shows",
            Self::AdminTimeSavings => "Admin time saved",
        }
    }
}

/// Whether the active tier can deliver a benefit line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Availability {
    Available,
    /// Shown with a zero amount so presentation can offer the upgrade
    Unavailable {
        feature: Feature,
        /// Cheapest catalog tier with the feature, if any
        required_tier: Option<String>,
        note: String,
    },
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitLine {
    pub kind: BenefitKind,
    pub label: String,
    /// Clients, no-shows, or hours, depending on `kind`
    pub quantity: f64,
    pub amount: f64,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenefitEstimate {
    pub new_clients_per_month: u32,
    pub revenue_from_new_clients: f64,
    pub recovered_no_shows: u32,
    pub revenue_from_recovered_no_shows: f64,
    pub hours_saved_per_month: f64,
    pub value_saved_from_time: f64,
    pub total_gross_benefit: f64,
    /// Informational only; excluded from `total_gross_benefit`
    pub store_sales_volume: f64,
    pub lines: Vec<BenefitLine>,
}

impl BenefitEstimate {
    pub fn line(&self, kind: BenefitKind) -> Option<&BenefitLine> {
        self.lines.iter().find(|line| line.kind == kind)
    }
}

pub fn estimate_benefits(
    inputs: &ClinicInputs,
    tier: &TierDefinition,
    config: &PricingConfig,
) -> BenefitEstimate {
    let price = inputs.avg_consultation_price;

    let new_clients_per_month =
        round_count(f64::from(inputs.monthly_consultations) * tier.effects.expected_growth);
    let revenue_from_new_clients = saturating(f64::from(new_clients_per_month) * price);

    let has_reminders = tier.has(Feature::AutomatedReminders);
    let no_show_reduction = if has_reminders {
        tier.effects.no_show_reduction
    } else {
        0.0
    };
    let recovered_no_shows =
        round_count(f64::from(inputs.monthly_no_shows) * no_show_reduction);
    let revenue_from_recovered_no_shows = saturating(f64::from(recovered_no_shows) * price);

    let hours_saved_per_month = saturating(
        inputs.weekly_admin_hours * config.estimation.weeks_per_month * tier.effects.time_savings,
    );
    let value_saved_from_time = saturating(hours_saved_per_month * config.estimation.hourly_rate);

    let total_gross_benefit = saturating(
        revenue_from_new_clients + revenue_from_recovered_no_shows + value_saved_from_time,
    );

    let reminders_availability = if has_reminders {
        Availability::Available
    } else {
        unavailable(Feature::AutomatedReminders, config)
    };

    let lines = vec![
        BenefitLine {
            kind: BenefitKind::NewClients,
            label: BenefitKind::NewClients.label().to_string(),
            quantity: f64::from(new_clients_per_month),
            amount: revenue_from_new_clients,
            availability: Availability::Available,
        },
        BenefitLine {
            kind: BenefitKind::RecoveredNoShows,
            label: BenefitKind::RecoveredNoShows.label().to_string(),
            quantity: f64::from(recovered_no_shows),
            amount: revenue_from_recovered_no_shows,
            availability: reminders_availability,
        },
        BenefitLine {
            kind: BenefitKind::AdminTimeSavings,
            label: BenefitKind::AdminTimeSavings.label().to_string(),
            quantity: hours_saved_per_month,
            amount: value_saved_from_time,
            availability: Availability::Available,
        },
    ];

    BenefitEstimate {
        new_clients_per_month,
        revenue_from_new_clients,
        recovered_no_shows,
        revenue_from_recovered_no_shows,
        hours_saved_per_month,
        value_saved_from_time,
        total_gross_benefit,
        store_sales_volume: inputs.monthly_store_sales,
        lines,
    }
}

fn unavailable(feature: Feature, config: &PricingConfig) -> Availability {
    let required = minimum_tier_for_feature(feature, config);
    let note = match required {
        Some(tier) => format!("Requires {} (plan {} or higher)", feature.label(), tier.name),
        None => format!("Requires {}, not offered by any plan", feature.label()),
    };
    Availability::Unavailable {
        feature,
        required_tier: required.map(|tier| tier.name.clone()),
        note,
    }
}

// Half-up rounding of a non-negative estimate to a whole count
fn round_count(value: f64) -> u32 {
    let rounded = value.round();
    if rounded.is_finite() && rounded > 0.0 {
        rounded.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TierEffects;

    fn inputs() -> ClinicInputs {
        ClinicInputs {
            monthly_consultations: 100,
            avg_consultation_price: 150_000.0,
            monthly_no_shows: 10,
            weekly_admin_hours: 15.0,
            monthly_store_sales: 3_000_000.0,
            monthly_supply_spend: 2_000_000.0,
            months_on_platform: 0,
        }
    }

    #[test]
    fn reminders_tier_recovers_no_shows() {
        let config = PricingConfig::default();
        let tier = config.tier_by_id("profesional").unwrap();
        let benefits = estimate_benefits(&inputs(), tier, &config);

        assert_eq!(benefits.recovered_no_shows, 2);
        assert_eq!(benefits.revenue_from_recovered_no_shows, 300_000.0);
        assert!((benefits.hours_saved_per_month - 18.0).abs() < 1e-9);
        assert!(benefits
            .line(BenefitKind::RecoveredNoShows)
            .unwrap()
            .availability
            .is_available());
    }

    #[test]
    fn missing_reminders_reports_unavailable_line() {
        let config = PricingConfig::default();
        let mut tier = config.tier_by_id("crecimiento").unwrap().clone();
        tier.effects.no_show_reduction = 0.5;

        let benefits = estimate_benefits(&inputs(), &tier, &config);

        assert_eq!(benefits.recovered_no_shows, 0);
        assert_eq!(benefits.revenue_from_recovered_no_shows, 0.0);
        let line = benefits.line(BenefitKind::RecoveredNoShows).unwrap();
        assert_eq!(line.amount, 0.0);
        match &line.availability {
            Availability::Unavailable {
                feature,
                required_tier,
                note,
            } => {
                assert_eq!(*feature, Feature::AutomatedReminders);
                assert_eq!(required_tier.as_deref(), Some("Profesional"));
                assert!(note.contains("Profesional"));
            }
            other => panic!("expected unavailable line, got {other:?}"),
        }
    }

    #[test]
    fn store_sales_are_not_gross_benefit() {
        let config = PricingConfig::default();
        let tier = config.tier_by_id("profesional").unwrap();
        let benefits = estimate_benefits(&inputs(), tier, &config);

        assert_eq!(benefits.store_sales_volume, 3_000_000.0);
        let expected = benefits.revenue_from_new_clients
            + benefits.revenue_from_recovered_no_shows
            + benefits.value_saved_from_time;
        assert_eq!(benefits.total_gross_benefit, expected);
    }

    #[test]
    fn growth_rounds_half_up() {
        let config = PricingConfig::default();
        let mut tier = config.tiers[0].clone();
        tier.effects = TierEffects {
            expected_growth: 0.05,
            no_show_reduction: 0.0,
            time_savings: 0.0,
        };
        let inputs = ClinicInputs {
            monthly_consultations: 50,
            avg_consultation_price: 100_000.0,
            ..ClinicInputs::default()
        };

        let benefits = estimate_benefits(&inputs, &tier, &config);
        assert_eq!(benefits.new_clients_per_month, 3);
        assert_eq!(benefits.revenue_from_new_clients, 300_000.0);
    }

    #[test]
    fn always_reports_three_lines() {
        let config = PricingConfig::default();
        for tier in &config.tiers {
            let benefits = estimate_benefits(&inputs(), tier, &config);
            let kinds: Vec<BenefitKind> = benefits.lines.iter().map(|l| l.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    BenefitKind::NewClients,
                    BenefitKind::RecoveredNoShows,
                    BenefitKind::AdminTimeSavings
                ]
            );
        }
    }
}
