use serde::Serialize;

use super::benefits::BenefitEstimate;
use super::costs::CostEstimate;
use super::inputs::{saturating, ClinicInputs};
use super::pricing::roi_guarantee_threshold;
use crate::config::{PricingConfig, TierDefinition};

/// ROI reported when the clinic pays nothing, or when the ratio is too
/// large to represent.
///
/// Presentation needs a bounded number, so the ratio is capped rather than
/// reported as infinite.
pub const UNBOUNDED_ROI_SENTINEL: f64 = 999.0;

const MONTHS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoiSummary {
    /// May be negative
    pub net_monthly_benefit: f64,
    pub yearly_benefit: f64,
    pub yearly_cost: f64,
    pub yearly_net_benefit: f64,
    /// Whole percent; [`UNBOUNDED_ROI_SENTINEL`] when `roi_unbounded`
    pub yearly_roi: f64,
    /// Set when there is no cost or the ratio overflows
    pub roi_unbounded: bool,
    /// `Some(0)` for free tiers; `None` when the consultation price is zero
    pub break_even_clients: Option<u64>,
    pub annual_price: f64,
    pub annual_savings: f64,
    /// `None` when there is nothing to pay back or nothing gained
    pub payback_months: Option<f64>,
    /// Only for plans with a fixed, non-zero price
    pub guarantee: Option<RoiGuarantee>,
}

/// What the ROI guarantee asks of the clinic's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoiGuarantee {
    pub evaluation_months: u32,
    pub required_new_clients: u64,
    pub free_months_if_failed: u32,
    /// Whether the estimated new clients reach the requirement in time
    pub on_track: bool,
}

pub fn aggregate(
    inputs: &ClinicInputs,
    benefits: &BenefitEstimate,
    costs: &CostEstimate,
    tier: &TierDefinition,
    config: &PricingConfig,
) -> RoiSummary {
    let gross = benefits.total_gross_benefit;
    let cost = costs.total_cost;

    let net_monthly_benefit = gross - cost;
    let yearly_benefit = saturating(gross * MONTHS_PER_YEAR);
    let yearly_cost = saturating(cost * MONTHS_PER_YEAR);
    let yearly_net_benefit = yearly_benefit - yearly_cost;

    let (yearly_roi, roi_unbounded) = yearly_roi(yearly_benefit, yearly_cost);

    // Custom-priced tiers never reach price arithmetic
    let subscription = tier.billable_price().map_or(0.0, |_| costs.subscription_cost);

    let break_even_clients = break_even_clients(subscription, inputs.avg_consultation_price);
    let (annual_price, annual_savings) = annual_pricing(subscription, config.discounts.annual);

    let payback_months = payback_months(gross, cost);
    let guarantee = guarantee(subscription, benefits.new_clients_per_month, config);

    RoiSummary {
        net_monthly_benefit,
        yearly_benefit,
        yearly_cost,
        yearly_net_benefit,
        yearly_roi,
        roi_unbounded,
        break_even_clients,
        annual_price,
        annual_savings,
        payback_months,
        guarantee,
    }
}

fn guarantee(
    subscription: f64,
    new_clients_per_month: u32,
    config: &PricingConfig,
) -> Option<RoiGuarantee> {
    if subscription <= 0.0 {
        return None;
    }
    let terms = &config.guarantee;
    let required_new_clients = roi_guarantee_threshold(subscription, terms);
    let expected = u64::from(new_clients_per_month) * u64::from(terms.evaluation_months);
    Some(RoiGuarantee {
        evaluation_months: terms.evaluation_months,
        required_new_clients,
        free_months_if_failed: terms.free_months_if_failed,
        on_track: expected >= required_new_clients,
    })
}

fn yearly_roi(yearly_benefit: f64, yearly_cost: f64) -> (f64, bool) {
    if yearly_cost > 0.0 {
        let roi = ((yearly_benefit - yearly_cost) / yearly_cost * 100.0).round();
        if roi.is_finite() {
            return (roi, false);
        }
    }
    (UNBOUNDED_ROI_SENTINEL, true)
}

// A quotient that underflows to zero would read as instant payback.
fn payback_months(gross: f64, cost: f64) -> Option<f64> {
    if !(gross.is_finite() && cost.is_finite()) || gross <= 0.0 || cost <= 0.0 {
        return None;
    }
    Some(cost / gross).filter(|months| *months > 0.0 && months.is_finite())
}

fn break_even_clients(subscription: f64, avg_consultation_price: f64) -> Option<u64> {
    if subscription <= 0.0 {
        Some(0)
    } else if avg_consultation_price > 0.0 {
        Some((subscription / avg_consultation_price).ceil() as u64)
    } else {
        None
    }
}

fn annual_pricing(subscription: f64, annual_discount: f64) -> (f64, f64) {
    if subscription <= 0.0 {
        return (0.0, 0.0);
    }
    let list_price = saturating(subscription * MONTHS_PER_YEAR);
    let annual_price = list_price * (1.0 - annual_discount);
    (annual_price, list_price - annual_price)
}
