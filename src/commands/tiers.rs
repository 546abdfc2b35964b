use super::resolve_config;
use crate::config::validate_config;
use crate::formatting::FormattingConfig;
use crate::output::{self, CatalogReport, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct TiersConfig {
    pub users: Option<u32>,
    pub referrals: u32,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub plain: bool,
}

pub fn handle_tiers(config: TiersConfig) -> Result<()> {
    let pricing = resolve_config(config.config.as_deref())?;
    validate_config(&pricing).context("Pricing config is not usable")?;

    let report = CatalogReport::build(&pricing, config.users, config.referrals);
    tracing::debug!(tiers = report.rows.len(), "Built plan catalog");

    let formatting = if config.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };
    let stdout = std::io::stdout();
    output::create_writer(config.format, stdout.lock(), formatting).write_catalog(&report)?;

    Ok(())
}
