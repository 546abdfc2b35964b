//! Promotional programs attached to paid plans: the ROI guarantee and the
//! free trial.

use serde::{Deserialize, Serialize};

/// Clinics that do not reach the guaranteed number of new clients within the
/// evaluation window get free months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeConfig {
    #[serde(default = "default_evaluation_months")]
    pub evaluation_months: u32,

    #[serde(default = "default_free_months_if_failed")]
    pub free_months_if_failed: u32,

    /// Revenue one new client is assumed to bring per month
    #[serde(default = "default_average_client_value")]
    pub average_client_value: f64,

    /// Spend below which a client does not count as new
    #[serde(default = "default_min_client_spend")]
    pub min_client_spend: f64,
}

impl Default for GuaranteeConfig {
    fn default() -> Self {
        Self {
            evaluation_months: default_evaluation_months(),
            free_months_if_failed: default_free_months_if_failed(),
            average_client_value: default_average_client_value(),
            min_client_spend: default_min_client_spend(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    #[serde(default = "default_trial_days")]
    pub standard_days: u32,

    /// Extra days for clinics that signed up through a referral
    #[serde(default = "default_referral_bonus_days")]
    pub referral_bonus_days: u32,

    /// Plan unlocked during the trial
    #[serde(default = "default_trial_tier")]
    pub trial_tier: String,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            standard_days: default_trial_days(),
            referral_bonus_days: default_referral_bonus_days(),
            trial_tier: default_trial_tier(),
        }
    }
}

pub fn default_evaluation_months() -> u32 {
    6
}

pub fn default_free_months_if_failed() -> u32 {
    6
}

pub fn default_average_client_value() -> f64 {
    50_000.0
}

pub fn default_min_client_spend() -> f64 {
    100_000.0
}

pub fn default_trial_days() -> u32 {
    90
}

pub fn default_referral_bonus_days() -> u32 {
    60
}

pub fn default_trial_tier() -> String {
    "profesional".to_string()
}
