use serde::Serialize;

use crate::config::{PricingConfig, TierDefinition};

/// What happened to a user-chosen tier id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OverrideStatus {
    /// No override; the suggestion is active
    NotSet,
    Applied,
    /// Unknown id; the suggestion is active instead
    Ignored { requested: String },
}

/// Outcome of plan selection.
#[derive(Debug, Clone, PartialEq)]
pub struct TierSelection<'a> {
    pub suggested: &'a TierDefinition,
    pub active: &'a TierDefinition,
    pub override_status: OverrideStatus,
}

/// Index of the tier used when no size band matches.
///
/// The catalog's `fallback_tier` is preferred. A catalog naming an unknown
/// fallback degrades to the second entry, then the first.
pub fn fallback_index(config: &PricingConfig) -> Option<usize> {
    config
        .tiers
        .iter()
        .position(|tier| tier.id == config.fallback_tier)
        .or_else(|| (config.tiers.len() > 1).then_some(1))
        .or_else(|| (!config.tiers.is_empty()).then_some(0))
}

/// First tier whose size band contains `consultations`, if any.
pub fn matching_tier(consultations: u32, tiers: &[TierDefinition]) -> Option<&TierDefinition> {
    tiers.iter().find(|tier| tier.size_band.contains(consultations))
}

/// Suggested tier for a clinic size; `fallback` covers counts outside every band.
pub fn suggest_tier<'a>(
    consultations: u32,
    tiers: &'a [TierDefinition],
    fallback: &'a TierDefinition,
) -> &'a TierDefinition {
    matching_tier(consultations, tiers).unwrap_or(fallback)
}

/// Resolve the active tier: a known override wins over the suggestion.
pub fn select_tier<'a>(
    consultations: u32,
    override_id: Option<&str>,
    tiers: &'a [TierDefinition],
    fallback: &'a TierDefinition,
) -> TierSelection<'a> {
    let suggested = suggest_tier(consultations, tiers, fallback);

    let (active, override_status) = match override_id {
        None => (suggested, OverrideStatus::NotSet),
        Some(id) => match tiers.iter().find(|tier| tier.id == id) {
            Some(tier) => (tier, OverrideStatus::Applied),
            None => {
                tracing::debug!(requested = id, "Unknown tier override, using suggestion");
                (
                    suggested,
                    OverrideStatus::Ignored {
                        requested: id.to_string(),
                    },
                )
            }
        },
    };

    TierSelection {
        suggested,
        active,
        override_status,
    }
}
