use serde::Serialize;

use super::inputs::{saturating, ClinicInputs};
use crate::config::{Feature, PricingConfig, TierDefinition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostKind {
    Subscription,
    EcommerceCommission,
    BulkDeliveryMarkup,
}

impl CostKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subscription => "Subscription",
            Self::EcommerceCommission => "Store commission",
            Self::BulkDeliveryMarkup => "Bulk delivery markup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostLine {
    pub kind: CostKind,
    pub label: String,
    pub amount: f64,
    /// Amount is negotiated; render "contact us" instead of a number
    pub custom_pricing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    /// Zero for custom-priced tiers, whose price is not a usable number
    pub subscription_cost: f64,
    pub custom_pricing: bool,
    pub commission_rate: f64,
    pub ecommerce_commission: f64,
    pub bulk_delivery_markup: f64,
    pub total_cost: f64,
    /// Only applicable, non-zero items
    pub lines: Vec<CostLine>,
}

impl CostEstimate {
    pub fn line(&self, kind: CostKind) -> Option<&CostLine> {
        self.lines.iter().find(|line| line.kind == kind)
    }
}

pub fn estimate_costs(
    inputs: &ClinicInputs,
    tier: &TierDefinition,
    commission_rate: f64,
    config: &PricingConfig,
) -> CostEstimate {
    let subscription_cost = tier.billable_price().unwrap_or(0.0);

    let ecommerce_commission = if tier.has(Feature::Ecommerce) {
        inputs.monthly_store_sales * commission_rate
    } else {
        0.0
    };

    let bulk_delivery_markup = if tier.has(Feature::BulkOrdering) {
        inputs.monthly_supply_spend * config.bulk_ordering.delivery_markup
    } else {
        0.0
    };

    let total_cost = saturating(subscription_cost + ecommerce_commission + bulk_delivery_markup);

    let mut lines = Vec::new();
    if tier.custom_pricing {
        lines.push(line(CostKind::Subscription, 0.0, true));
    } else if subscription_cost > 0.0 {
        lines.push(line(CostKind::Subscription, subscription_cost, false));
    }
    if ecommerce_commission > 0.0 {
        lines.push(line(CostKind::EcommerceCommission, ecommerce_commission, false));
    }
    if bulk_delivery_markup > 0.0 {
        lines.push(line(CostKind::BulkDeliveryMarkup, bulk_delivery_markup, false));
    }

    CostEstimate {
        subscription_cost,
        custom_pricing: tier.custom_pricing,
        commission_rate,
        ecommerce_commission,
        bulk_delivery_markup,
        total_cost,
        lines,
    }
}

fn line(kind: CostKind, amount: f64, custom_pricing: bool) -> CostLine {
    CostLine {
        kind,
        label: kind.label().to_string(),
        amount,
        custom_pricing,
    }
}
