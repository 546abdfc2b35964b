use super::catalog::format_band;
use super::{CatalogReport, OutputWriter};
use crate::engine::{
    Availability, BenefitKind, BenefitLine, CalculationResult, CostKind, CostLine, OverrideStatus,
    UNBOUNDED_ROI_SENTINEL,
};
use crate::formatting::{
    format_currency, format_currency_exact, format_payback, format_rate, FormattingConfig,
    OutputFormatter,
};
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL_CONDENSED};
use comfy_table::{ContentArrangement, Table};
use std::io::Write;

const CUSTOM_PRICE_LABEL: &str = "Personalizado";
const FREE_PRICE_LABEL: &str = "Gratis";

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    unicode: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn with_formatting(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatting.formatter(),
            unicode: formatting.color.should_use_color(),
        }
    }

    fn table(&self, header: Vec<&str>) -> Table {
        let mut table = Table::new();
        table
            .load_preset(if self.unicode {
                UTF8_FULL_CONDENSED
            } else {
                ASCII_MARKDOWN
            })
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(header);
        table
    }

    fn write_plan(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let tier = &result.active_tier;
        let price = if tier.custom_pricing {
            CUSTOM_PRICE_LABEL.to_string()
        } else if tier.monthly_price <= 0.0 {
            FREE_PRICE_LABEL.to_string()
        } else {
            format!("{}/month", format_currency_exact(tier.monthly_price))
        };
        writeln!(self.writer, "Plan: {} ({})", tier.name, price)?;

        match &result.override_status {
            OverrideStatus::NotSet => {}
            OverrideStatus::Applied => {
                if result.suggested_tier != tier.id {
                    let note = format!("Suggested for your clinic size: {}", result.suggested_tier);
                    writeln!(self.writer, "{}", self.formatter.dim(&note))?;
                }
            }
            OverrideStatus::Ignored { requested } => {
                let note = format!(
                    "Unknown plan '{}', showing the suggested plan instead",
                    requested
                );
                writeln!(self.writer, "{}", self.formatter.notice(&note))?;
            }
        }

        if tier.shows_ads {
            writeln!(
                self.writer,
                "{}",
                self.formatter.dim("Your public site shows ads on this plan")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_benefits(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Estimated monthly benefits"))?;

        let mut table = self.table(vec!["Benefit", "Quantity", "Monthly value"]);
        for line in &result.benefits.lines {
            table.add_row(vec![
                line.label.clone(),
                benefit_quantity(line),
                format_currency(line.amount),
            ]);
        }
        table.add_row(vec![
            "Total".to_string(),
            String::new(),
            format_currency(result.benefits.total_gross_benefit),
        ]);
        writeln!(self.writer, "{table}")?;

        let notes: Vec<String> = result
            .benefits
            .lines
            .iter()
            .filter_map(|line| match &line.availability {
                Availability::Available => None,
                Availability::Unavailable { note, .. } => Some(format!("{}: {}", line.label, note)),
            })
            .collect();
        for note in notes {
            writeln!(self.writer, "{}", self.formatter.notice(&note))?;
        }

        if result.benefits.store_sales_volume > 0.0 {
            let note = format!(
                "Store sales of {} are not counted as benefit",
                format_currency(result.benefits.store_sales_volume)
            );
            writeln!(self.writer, "{}", self.formatter.dim(&note))?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_costs(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header("Monthly platform costs"))?;

        if result.costs.lines.is_empty() {
            writeln!(self.writer, "No platform costs on this plan")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let mut table = self.table(vec!["Cost", "Monthly amount"]);
        for line in &result.costs.lines {
            table.add_row(vec![cost_label(line, result.costs.commission_rate), cost_amount(line)]);
        }
        table.add_row(vec![
            "Total".to_string(),
            format_currency(result.costs.total_cost),
        ]);
        writeln!(self.writer, "{table}")?;

        if result.costs.custom_pricing {
            writeln!(
                self.writer,
                "{}",
                self.formatter
                    .notice("Subscription is negotiated and not included in the total")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        let summary = &result.summary;
        writeln!(self.writer, "{}", self.formatter.header("Summary"))?;

        let net = format_currency(summary.net_monthly_benefit);
        writeln!(
            self.writer,
            "  Net monthly benefit: {}",
            self.formatter.signed(summary.net_monthly_benefit, &net)
        )?;
        let yearly_net = format_currency(summary.yearly_net_benefit);
        writeln!(
            self.writer,
            "  Net yearly benefit:  {}",
            self.formatter.signed(summary.yearly_net_benefit, &yearly_net)
        )?;

        let roi = if summary.roi_unbounded && summary.yearly_cost <= 0.0 {
            "no platform cost".to_string()
        } else if summary.roi_unbounded {
            format!("over {UNBOUNDED_ROI_SENTINEL:.0}%")
        } else {
            format!("{:.0}%", summary.yearly_roi)
        };
        writeln!(
            self.writer,
            "  Yearly ROI:          {}",
            self.formatter.signed(summary.yearly_roi, &roi)
        )?;
        writeln!(
            self.writer,
            "  Payback period:      {}",
            format_payback(summary.payback_months)
        )?;

        let break_even = match summary.break_even_clients {
            Some(clients) => format!("{clients} new clients/month"),
            None => "n/a".to_string(),
        };
        writeln!(self.writer, "  Break-even:          {}", break_even)?;

        if summary.annual_price > 0.0 {
            writeln!(
                self.writer,
                "  Annual billing:      {} (save {})",
                format_currency(summary.annual_price),
                self.formatter.gain(&format_currency(summary.annual_savings))
            )?;
        }

        if let Some(guarantee) = &summary.guarantee {
            let terms = format!(
                "{} new clients in {} months, or {} months free",
                guarantee.required_new_clients,
                guarantee.evaluation_months,
                guarantee.free_months_if_failed
            );
            let status = if guarantee.on_track {
                self.formatter.gain("on track")
            } else {
                self.formatter.loss("below target")
            };
            writeln!(self.writer, "  ROI guarantee:       {terms} ({status})")?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_calculation(&mut self, result: &CalculationResult) -> anyhow::Result<()> {
        self.write_plan(result)?;
        self.write_benefits(result)?;
        self.write_costs(result)?;
        self.write_summary(result)?;
        Ok(())
    }

    fn write_catalog(&mut self, report: &CatalogReport) -> anyhow::Result<()> {
        let mut header = vec![
            "Plan",
            "Clinic size",
            "Monthly",
            "Annual (per month)",
            "Semi-annual (per month)",
        ];
        if report.referrals > 0 {
            header.push("With referrals");
        }
        let users_header = report.users.map(|users| format!("For {users} users"));
        if let Some(label) = &users_header {
            header.push(label);
        }
        header.push("Users included");
        header.push("Guarantee");
        header.push("Features");

        let mut table = self.table(header);
        for row in &report.rows {
            let name = if row.popular {
                format!("{} (popular)", row.name)
            } else {
                row.name.clone()
            };
            let mut cells = vec![
                name,
                format_band(&row.size_band),
                price_cell(row.monthly_price),
                price_cell(row.annual_monthly_price),
                price_cell(row.semi_annual_monthly_price),
            ];
            if report.referrals > 0 {
                cells.push(price_cell(row.referral_monthly_price));
            }
            if report.users.is_some() {
                cells.push(price_cell(row.price_for_users));
            }
            cells.push(match row.included_users {
                Some(users) => users.to_string(),
                None => "unlimited".to_string(),
            });
            cells.push(match row.guarantee_clients {
                Some(clients) => format!("{clients} clients"),
                None => "-".to_string(),
            });
            cells.push(
                row.features
                    .iter()
                    .map(|feature| feature.label())
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            table.add_row(cells);
        }

        writeln!(self.writer, "{}", self.formatter.header("Plans"))?;
        writeln!(self.writer, "{table}")?;

        let programs = &report.programs;
        let trial = format!(
            "Free trial of {}: {} days ({} with a referral)",
            programs.trial_tier, programs.trial_days, programs.referral_trial_days
        );
        writeln!(self.writer, "{}", self.formatter.notice(&trial))?;
        let guarantee = format!(
            "ROI guarantee: reach the listed new clients within {} months or get {} months free",
            programs.guarantee_months, programs.guarantee_free_months
        );
        writeln!(self.writer, "{}", self.formatter.dim(&guarantee))?;
        let early = format!(
            "The first {} clinics keep their signup price",
            programs.early_adopter_limit
        );
        writeln!(self.writer, "{}", self.formatter.dim(&early))?;
        Ok(())
    }
}

fn benefit_quantity(line: &BenefitLine) -> String {
    match line.kind {
        BenefitKind::AdminTimeSavings => format!("{:.1} h", line.quantity),
        BenefitKind::NewClients | BenefitKind::RecoveredNoShows => {
            format!("{:.0}", line.quantity)
        }
    }
}

fn cost_label(line: &CostLine, commission_rate: f64) -> String {
    match line.kind {
        CostKind::EcommerceCommission => {
            format!("{} ({})", line.label, format_rate(commission_rate))
        }
        CostKind::Subscription | CostKind::BulkDeliveryMarkup => line.label.clone(),
    }
}

fn cost_amount(line: &CostLine) -> String {
    if line.custom_pricing {
        CUSTOM_PRICE_LABEL.to_string()
    } else {
        format_currency(line.amount)
    }
}

fn price_cell(price: Option<f64>) -> String {
    match price {
        None => CUSTOM_PRICE_LABEL.to_string(),
        Some(price) if price <= 0.0 => FREE_PRICE_LABEL.to_string(),
        Some(price) => format_currency_exact(price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;
    use crate::engine::{ClinicInputs, PricingEngine};

    fn render(result: &CalculationResult) -> String {
        let mut buffer = Vec::new();
        TerminalWriter::with_formatting(&mut buffer, FormattingConfig::plain())
            .write_calculation(result)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn calculation_shows_plan_and_upsell() {
        let result = PricingEngine::default().calculate(&ClinicInputs::default(), None);
        let output = render(&result);

        assert!(output.contains("Plan: Crecimiento (Gs 200.000/month)"));
        assert!(output.contains("Requires automated reminders"));
        assert!(output.contains("Payback period:"));
        assert!(output.contains("ROI guarantee:       4 new clients in 6 months, or 6 months free"));
    }

    #[test]
    fn ignored_override_is_reported() {
        let result = PricingEngine::default().calculate(&ClinicInputs::default(), Some("vip"));
        let output = render(&result);

        assert!(output.contains("Unknown plan 'vip'"));
    }

    #[test]
    fn free_plan_has_no_cost_table() {
        let inputs = ClinicInputs {
            monthly_consultations: 10,
            ..ClinicInputs::default()
        };
        let result = PricingEngine::default().calculate(&inputs, None);
        let output = render(&result);

        assert!(output.contains("Plan: Gratis (Gratis)"));
        assert!(output.contains("No platform costs on this plan"));
        assert!(output.contains("no platform cost"));
        assert!(!output.contains("ROI guarantee"));
    }

    #[test]
    fn catalog_lists_every_tier() {
        let report = CatalogReport::build(&PricingConfig::default(), Some(12), 0);
        let mut buffer = Vec::new();
        TerminalWriter::with_formatting(&mut buffer, FormattingConfig::plain())
            .write_catalog(&report)
            .unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Crecimiento (popular)"));
        assert!(output.contains("For 12 users"));
        assert!(output.contains(CUSTOM_PRICE_LABEL));
        assert!(output.contains("500+"));
        assert!(output.contains("4 clients"));
        assert!(output.contains("Free trial of profesional: 90 days (150 with a referral)"));
        assert!(output.contains("first 300 clinics"));
    }
}
