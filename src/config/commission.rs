use serde::{Deserialize, Serialize};

/// Time-based e-commerce commission schedule.
///
/// Clinics pay `initial_rate` on store sales until they have been on the
/// platform for `months_until_increase` months, then `standard_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CommissionSchedule {
    #[serde(default = "default_initial_rate")]
    pub initial_rate: f64,

    #[serde(default = "default_standard_rate")]
    pub standard_rate: f64,

    #[serde(default = "default_months_until_increase")]
    pub months_until_increase: u32,
}

impl Default for CommissionSchedule {
    fn default() -> Self {
        Self {
            initial_rate: default_initial_rate(),
            standard_rate: default_standard_rate(),
            months_until_increase: default_months_until_increase(),
        }
    }
}

pub fn default_initial_rate() -> f64 {
    0.03
}

pub fn default_standard_rate() -> f64 {
    0.05
}

pub fn default_months_until_increase() -> u32 {
    6
}
