use super::{CatalogReport, OutputWriter};
use crate::engine::CalculationResult;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: serde::Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_calculation(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        self.write_json(result)
    }

    fn write_catalog(&mut self, report: &CatalogReport) -> anyhow::Result<()> {
        self.write_json(report)
    }
}
