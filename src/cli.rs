use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::engine::ClinicInputs;

#[derive(Parser, Debug)]
#[command(name = "vetroi")]
#[command(about = "Pricing and ROI calculator for veterinary clinic plans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Clinic figures shared by commands that run the engine.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ClinicArgs {
    /// Consultations per month
    #[arg(long = "consultations", default_value_t = 80)]
    pub monthly_consultations: u32,

    /// Average consultation price (Gs)
    #[arg(long = "avg-price", default_value_t = 150_000.0)]
    pub avg_consultation_price: f64,

    /// Missed appointments per month
    #[arg(long = "no-shows", default_value_t = 8)]
    pub monthly_no_shows: u32,

    /// Hours per week spent on administrative work
    #[arg(long = "admin-hours", default_value_t = 10.0)]
    pub weekly_admin_hours: f64,

    /// Monthly sales through the online store (Gs)
    #[arg(long = "store-sales", default_value_t = 0.0)]
    pub monthly_store_sales: f64,

    /// Monthly spend on supplies ordered in bulk (Gs)
    #[arg(long = "supply-spend", default_value_t = 0.0)]
    pub monthly_supply_spend: f64,

    /// Months the clinic has been on the platform
    #[arg(long = "months", default_value_t = 0)]
    pub months_on_platform: u32,
}

impl From<ClinicArgs> for ClinicInputs {
    fn from(args: ClinicArgs) -> Self {
        Self {
            monthly_consultations: args.monthly_consultations,
            avg_consultation_price: args.avg_consultation_price,
            monthly_no_shows: args.monthly_no_shows,
            weekly_admin_hours: args.weekly_admin_hours,
            monthly_store_sales: args.monthly_store_sales,
            monthly_supply_spend: args.monthly_supply_spend,
            months_on_platform: args.months_on_platform,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate benefits, costs and ROI for a clinic
    Calculate {
        #[command(flatten)]
        clinic: ClinicArgs,

        /// Plan id to use instead of the suggested one
        #[arg(long = "tier")]
        tier: Option<String>,

        /// Pricing configuration file (defaults to .vetroi.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colors and unicode table borders
        #[arg(long = "plain")]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// List plans with their prices
    Tiers {
        /// Price each plan for this many users
        #[arg(long = "users")]
        users: Option<u32>,

        /// Number of referrals to apply as a stacked discount
        #[arg(long = "referrals", default_value_t = 0)]
        referrals: u32,

        /// Pricing configuration file (defaults to .vetroi.toml discovery)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Disable colors and unicode table borders
        #[arg(long = "plain")]
        plain: bool,

        /// Increase verbosity level (can be repeated: -v, -vv)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Initialize a .vetroi.toml with the default pricing configuration
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    pub fn verbosity(&self) -> u8 {
        match self {
            Self::Calculate { verbosity, .. } | Self::Tiers { verbosity, .. } => *verbosity,
            Self::Init { .. } => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
