use super::resolve_config;
use crate::engine::{ClinicInputs, OverrideStatus, PricingEngine};
use crate::formatting::FormattingConfig;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct CalculateConfig {
    pub inputs: ClinicInputs,
    pub tier: Option<String>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    let pricing = resolve_config(config.config.as_deref())?;
    let engine = PricingEngine::new(pricing).context("Pricing config is not usable")?;

    let result = engine.calculate(&config.inputs, config.tier.as_deref());
    if let OverrideStatus::Ignored { requested } = &result.override_status {
        tracing::warn!(
            requested = %requested,
            suggested = %result.suggested_tier,
            "Unknown plan requested, using the suggested plan"
        );
    }

    let formatting = if config.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    match config.output {
        Some(path) => {
            let content = output::render_calculation(&result, config.format, formatting)?;
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            output::create_writer(config.format, stdout.lock(), formatting)
                .write_calculation(&result)?;
        }
    }

    Ok(())
}
