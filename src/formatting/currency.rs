//! Display formatting for money and rates.
//!
//! Presentation only: these functions never feed back into calculations.
//! Amounts are truncated to whole units and grouped with `.` (es-PY), and
//! anything from one million up is abbreviated with an `M` suffix.

use crate::config::TierDefinition;

const CURRENCY_SYMBOL: &str = "Gs";
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;

/// `Gs 150.000`, `Gs 2.5M`, `Gs -2.000.000`
pub fn format_currency(value: f64) -> String {
    // Losses keep full grouping; only gains are abbreviated
    if value >= MILLION {
        return format!("{CURRENCY_SYMBOL} {:.1}M", value / MILLION);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{CURRENCY_SYMBOL} {sign}{}", group_thousands(value.abs().trunc() as u64))
}

/// Compact form for tight columns: `2.5M`, `150K`, `950`
pub fn format_currency_short(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    if magnitude >= MILLION {
        format!("{sign}{:.1}M", magnitude / MILLION)
    } else if magnitude >= THOUSAND {
        format!("{sign}{:.0}K", magnitude / THOUSAND)
    } else {
        format!("{sign}{}", magnitude.trunc() as u64)
    }
}

/// Full amount without abbreviation, e.g. for invoices: `Gs 2.500.000`
pub fn format_currency_exact(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    format!(
        "{CURRENCY_SYMBOL} {sign}{}",
        group_thousands(value.abs().trunc() as u64)
    )
}

/// Fraction as a percentage: `0.03` -> `3%`, `0.025` -> `2.5%`
pub fn format_rate(fraction: f64) -> String {
    let percent = fraction * 100.0;
    if (percent - percent.round()).abs() < 1e-9 {
        format!("{:.0}%", percent)
    } else {
        format!("{:.1}%", percent)
    }
}

/// List price label used in the plan picker
pub fn format_tier_price(tier: &TierDefinition) -> String {
    match tier.billable_price() {
        None => "Personalizado".to_string(),
        Some(price) if price <= 0.0 => "Gratis".to_string(),
        Some(price) => format_currency_exact(price),
    }
}

pub fn format_payback(months: Option<f64>) -> String {
    match months {
        Some(months) => format!("{months:.1} months"),
        None => "n/a".to_string(),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
