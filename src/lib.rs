// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod output;

// Re-export commonly used types
pub use crate::config::{load_config, PricingConfig, TierDefinition};

pub use crate::engine::{
    BenefitEstimate, CalculationResult, ClinicInputs, CostEstimate, OverrideStatus,
    PricingEngine, RoiSummary, UNBOUNDED_ROI_SENTINEL,
};

pub use crate::errors::{PricingError, ValidationIssue};

pub use crate::output::{create_writer, OutputFormat, OutputWriter};
