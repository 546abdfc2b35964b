//! CLI command implementations.
//!
//! Available commands:
//! - **calculate**: Run the pricing/ROI engine for one clinic
//! - **tiers**: List the plan catalog with discounted and per-seat prices
//! - **init**: Write a default `.vetroi.toml`

pub mod calculate;
pub mod init;
pub mod tiers;

pub use calculate::{handle_calculate, CalculateConfig};
pub use init::init_config;
pub use tiers::{handle_tiers, TiersConfig};

use crate::config::{load_config, load_config_from_path, PricingConfig};
use anyhow::{Context, Result};
use std::path::Path;

/// An explicit `--config` must load; otherwise fall back to discovery.
pub fn resolve_config(path: Option<&Path>) -> Result<PricingConfig> {
    match path {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load pricing config from {}", path.display())),
        None => Ok(load_config()),
    }
}
