use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vetroi::cli::{Cli, Commands};
use vetroi::commands::{self, CalculateConfig, TiersConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.verbosity());

    match cli.command {
        Commands::Calculate {
            clinic,
            tier,
            config,
            format,
            output,
            plain,
            verbosity: _,
        } => commands::handle_calculate(CalculateConfig {
            inputs: clinic.into(),
            tier,
            config,
            format: format.into(),
            output,
            plain,
        }),
        Commands::Tiers {
            users,
            referrals,
            config,
            format,
            plain,
            verbosity: _,
        } => commands::handle_tiers(TiersConfig {
            users,
            referrals,
            config,
            format: format.into(),
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

// RUST_LOG wins over -v
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vetroi={default_level}")));

    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
