pub mod catalog;
pub mod json;
pub mod terminal;

use crate::engine::CalculationResult;
use crate::formatting::FormattingConfig;
use std::io::Write;

pub use catalog::{CatalogReport, CatalogRow, ProgramTerms};
pub use json::JsonWriter;
pub use terminal::TerminalWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

pub trait OutputWriter {
    fn write_calculation(&mut self, result: &CalculationResult) -> anyhow::Result<()>;
    fn write_catalog(&mut self, report: &CatalogReport) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::with_formatting(writer, formatting)),
    }
}

/// Render a calculation to a string, e.g. for `--output` files or tests.
pub fn render_calculation(
    result: &CalculationResult,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    create_writer(format, &mut buffer, formatting).write_calculation(result)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
