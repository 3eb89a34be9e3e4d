use anyhow::Result;
use clap::Parser;
use model::PeriodDataStore;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod report;

use cli::Cli;
use config::KpiConfig;

/// Installs the log subscriber. `RUST_LOG` wins over the configured level.
/// Logs go to stderr so report output stays pipeable.
fn init_tracing(fallback: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = KpiConfig::load(cli.config.as_deref())?;
    init_tracing(cli.log_level.as_deref().unwrap_or(&config.log_level));

    info!("kpidash starting up");
    let store = PeriodDataStore::builtin();
    let output = cli.run(&store, &config)?;
    println!("{output}");

    Ok(())
}
