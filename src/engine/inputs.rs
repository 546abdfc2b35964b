use serde::{Deserialize, Serialize};

/// Operating figures a clinic enters into the calculator.
///
/// Counts are per month unless noted. Money is in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicInputs {
    pub monthly_consultations: u32,
    pub avg_consultation_price: f64,
    /// Logically at most `monthly_consultations`; not enforced
    pub monthly_no_shows: u32,
    pub weekly_admin_hours: f64,
    pub monthly_store_sales: f64,
    pub monthly_supply_spend: f64,
    /// Elapsed months since signup; drives the commission schedule
    pub months_on_platform: u32,
}

impl Default for ClinicInputs {
    fn default() -> Self {
        Self {
            monthly_consultations: 80,
            avg_consultation_price: 150_000.0,
            monthly_no_shows: 8,
            weekly_admin_hours: 10.0,
            monthly_store_sales: 0.0,
            monthly_supply_spend: 0.0,
            months_on_platform: 0,
        }
    }
}

impl ClinicInputs {
    /// Clamp negative or non-finite amounts to zero.
    ///
    /// Counts are unsigned and need no clamping.
    pub fn sanitized(&self) -> Self {
        Self {
            avg_consultation_price: non_negative(self.avg_consultation_price),
            weekly_admin_hours: non_negative(self.weekly_admin_hours),
            monthly_store_sales: non_negative(self.monthly_store_sales),
            monthly_supply_spend: non_negative(self.monthly_supply_spend),
            ..*self
        }
    }

    pub fn is_sanitized(&self) -> bool {
        self == &self.sanitized()
    }
}

/// Cap an amount that overflowed to infinity at `f64::MAX`.
pub(crate) fn saturating(value: f64) -> f64 {
    value.min(f64::MAX)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
