//! Subscription tier catalog.
//!
//! Each tier carries its price, the features it unlocks, the clinic-size band
//! it is suggested for, and the effect coefficients the benefit estimator
//! applies. The default catalog mirrors the production price list (PYG).

use serde::{Deserialize, Serialize};

/// Features that change what the calculator counts for a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Ecommerce,
    BulkOrdering,
    AutomatedReminders,
    AdFree,
}

impl Feature {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ecommerce => "online store",
            Self::BulkOrdering => "bulk supply ordering",
            Self::AutomatedReminders => "automated reminders",
            Self::AdFree => "ad-free site",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TierFeatures {
    #[serde(default)]
    pub ecommerce: bool,

    #[serde(default)]
    pub bulk_ordering: bool,

    #[serde(default)]
    pub automated_reminders: bool,

    /// Free tiers fund themselves with third-party ads on the clinic site
    #[serde(default)]
    pub shows_ads: bool,
}

impl TierFeatures {
    pub fn has(&self, feature: Feature) -> bool {
        match feature {
            Feature::Ecommerce => self.ecommerce,
            Feature::BulkOrdering => self.bulk_ordering,
            Feature::AutomatedReminders => self.automated_reminders,
            Feature::AdFree => !self.shows_ads,
        }
    }
}

/// Monthly consultation band a tier is suggested for: `[min, max)`.
///
/// `max = None` means the band is open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBand {
    pub min: u32,
    #[serde(default)]
    pub max: Option<u32>,
}

impl SizeBand {
    pub const fn new(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn open(min: u32) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, consultations: u32) -> bool {
        consultations >= self.min && self.max.is_none_or(|max| consultations < max)
    }
}

/// Effect coefficients used only by the benefit estimator.
///
/// All values are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierEffects {
    /// Expected new clients as a fraction of current monthly consultations
    #[serde(default)]
    pub expected_growth: f64,

    /// Fraction of missed appointments recovered by reminders
    #[serde(default)]
    pub no_show_reduction: f64,

    /// Fraction of weekly admin time saved
    #[serde(default)]
    pub time_savings: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDefinition {
    pub id: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Monthly price in whole currency units; 0 for the free tier
    #[serde(default)]
    pub monthly_price: f64,

    /// Negotiated per clinic; `monthly_price` is not meaningful when set
    #[serde(default)]
    pub custom_pricing: bool,

    /// Highlighted as the recommended plan
    #[serde(default)]
    pub popular: bool,

    /// `None` means unlimited users
    #[serde(default)]
    pub included_users: Option<u32>,

    #[serde(default)]
    pub extra_user_price: f64,

    /// Overrides the commission schedule for e-commerce sales
    #[serde(default)]
    pub negotiated_commission_rate: Option<f64>,

    pub size_band: SizeBand,

    #[serde(default)]
    pub features: TierFeatures,

    #[serde(default)]
    pub effects: TierEffects,
}

impl TierDefinition {
    pub fn has(&self, feature: Feature) -> bool {
        self.features.has(feature)
    }

    /// Price usable in arithmetic, or `None` for custom-priced tiers.
    pub fn billable_price(&self) -> Option<f64> {
        if self.custom_pricing {
            None
        } else {
            Some(self.monthly_price)
        }
    }

    pub fn is_free(&self) -> bool {
        !self.custom_pricing && self.monthly_price <= 0.0
    }

    pub fn is_paid(&self) -> bool {
        self.custom_pricing || self.monthly_price > 0.0
    }
}

/// Production tier catalog, ordered from smallest to largest clinic.
pub fn default_tiers() -> Vec<TierDefinition> {
    vec![
        TierDefinition {
            id: "gratis".into(),
            name: "Gratis".into(),
            description: "Para clínicas que quieren presencia digital básica".into(),
            monthly_price: 0.0,
            custom_pricing: false,
            popular: false,
            size_band: SizeBand::new(0, 30),
            included_users: None,
            extra_user_price: 0.0,
            features: TierFeatures {
                ecommerce: false,
                bulk_ordering: false,
                automated_reminders: false,
                shows_ads: true,
            },
            negotiated_commission_rate: None,
            effects: TierEffects {
                expected_growth: 0.0,
                no_show_reduction: 0.0,
                time_savings: 0.10,
            },
        },
        TierDefinition {
            id: "basico".into(),
            name: "Básico".into(),
            description: "Para clínicas pequeñas que quieren una experiencia sin anuncios".into(),
            monthly_price: 100_000.0,
            custom_pricing: false,
            popular: false,
            size_band: SizeBand::new(30, 80),
            included_users: Some(3),
            extra_user_price: 30_000.0,
            features: TierFeatures::default(),
            negotiated_commission_rate: None,
            effects: TierEffects {
                expected_growth: 0.0,
                no_show_reduction: 0.0,
                time_savings: 0.15,
            },
        },
        TierDefinition {
            id: "crecimiento".into(),
            name: "Crecimiento".into(),
            description: "Para clínicas en crecimiento que quieren vender productos".into(),
            monthly_price: 200_000.0,
            custom_pricing: false,
            popular: true,
            size_band: SizeBand::new(80, 200),
            included_users: Some(5),
            extra_user_price: 40_000.0,
            features: TierFeatures {
                ecommerce: true,
                bulk_ordering: true,
                automated_reminders: false,
                shows_ads: false,
            },
            negotiated_commission_rate: None,
            effects: TierEffects {
                expected_growth: 0.0,
                no_show_reduction: 0.0,
                time_savings: 0.20,
            },
        },
        TierDefinition {
            id: "profesional".into(),
            name: "Profesional".into(),
            description: "Para clínicas establecidas con hospitalización y laboratorio".into(),
            monthly_price: 400_000.0,
            custom_pricing: false,
            popular: false,
            size_band: SizeBand::new(200, 500),
            included_users: Some(10),
            extra_user_price: 50_000.0,
            features: TierFeatures {
                ecommerce: true,
                bulk_ordering: true,
                automated_reminders: true,
                shows_ads: false,
            },
            negotiated_commission_rate: None,
            effects: TierEffects {
                expected_growth: 0.0,
                no_show_reduction: 0.20,
                time_savings: 0.30,
            },
        },
        TierDefinition {
            id: "empresarial".into(),
            name: "Empresarial".into(),
            description: "Para cadenas y clínicas con múltiples sucursales".into(),
            monthly_price: 0.0,
            custom_pricing: true,
            popular: false,
            size_band: SizeBand::open(500),
            included_users: Some(20),
            extra_user_price: 60_000.0,
            features: TierFeatures {
                ecommerce: true,
                bulk_ordering: true,
                automated_reminders: true,
                shows_ads: false,
            },
            negotiated_commission_rate: Some(0.02),
            effects: TierEffects {
                expected_growth: 0.0,
                no_show_reduction: 0.25,
                time_savings: 0.35,
            },
        },
    ]
}
