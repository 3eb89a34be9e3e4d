use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use common::TimelineView;
use compute::BreakdownKind;
use model::PeriodDataStore;
use serde::Serialize;
use tracing::debug;

use crate::config::KpiConfig;

pub mod commands;

use commands::{breakdown, companies, statements, summary, validate};

#[derive(Parser, Debug)]
#[command(name = "kpidash")]
#[command(about = "Financial KPI dashboard reports for the terminal")]
#[command(version)]
pub struct Cli {
    /// Configuration file, `kpidash.toml` in the working directory by default
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, e.g. `info` or `compute=debug`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Summary totals and the financial performance table
    Summary {
        /// Timeline view: monthly, quarterly or yearly
        #[arg(short, long)]
        view: Option<TimelineView>,

        /// Report a single company instead of the consolidated figures
        #[arg(long)]
        company: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Percent-of-total structure of income, expenses, assets or liabilities
    Breakdown {
        #[arg(short, long, value_enum)]
        kind: BreakdownArg,

        #[arg(short, long)]
        view: Option<TimelineView>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Profit and loss, balance sheet and financial ratios
    Statements {
        #[arg(short, long)]
        view: Option<TimelineView>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the known companies
    Companies,
    /// Check the built-in data set for consistency
    Validate,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Serializes `value` for the machine readable formats; `None` for text.
    pub fn serialize<T: Serialize>(self, value: &T) -> Result<Option<String>> {
        Ok(match self {
            OutputFormat::Text => None,
            OutputFormat::Json => Some(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Some(serde_yaml::to_string(value)?),
        })
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreakdownArg {
    Income,
    Expenses,
    Assets,
    Liabilities,
}

impl From<BreakdownArg> for BreakdownKind {
    fn from(arg: BreakdownArg) -> Self {
        match arg {
            BreakdownArg::Income => BreakdownKind::Income,
            BreakdownArg::Expenses => BreakdownKind::Expenses,
            BreakdownArg::Assets => BreakdownKind::Assets,
            BreakdownArg::Liabilities => BreakdownKind::Liabilities,
        }
    }
}

impl Cli {
    /// Runs the selected command against `store` and returns its output.
    pub fn run(self, store: &PeriodDataStore, config: &KpiConfig) -> Result<String> {
        debug!(command = ?self.command, "Running command");
        let pick = |view: Option<TimelineView>| view.unwrap_or(config.default_view);

        match self.command {
            Commands::Summary {
                view,
                company,
                format,
            } => summary(store, config, pick(view), company.as_deref(), format),
            Commands::Breakdown { kind, view, format } => {
                breakdown(store, kind.into(), pick(view), format)
            }
            Commands::Statements { view, format } => statements(store, config, pick(view), format),
            Commands::Companies => companies(store),
            Commands::Validate => validate(store),
        }
    }
}
