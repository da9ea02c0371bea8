#![allow(clippy::print_stdout, clippy::print_stderr)]

mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::{AppConfig, CliOverrides};
use hwinfo_node_info::{Component, HardwareInfoCollector, SysfsDmiSource};
use std::path::PathBuf;
use std::sync::Arc;

/// hwinfo - hardware inventory reporter
#[derive(Parser)]
#[command(name = "hwinfo")]
#[command(about = "Report CPU and installed memory modules as JSON")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of DMI entries (overrides config)
    #[arg(long, value_name = "DIR")]
    dmi_entries: Option<PathBuf>,

    /// Component to collect; repeat to select several (overrides config)
    #[arg(long = "component", value_enum)]
    components: Vec<ComponentArg>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Print the JSON report on a single line
    #[arg(long)]
    compact: bool,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum ComponentArg {
    Cpu,
    Memory,
}

impl From<ComponentArg> for Component {
    fn from(arg: ComponentArg) -> Self {
        match arg {
            ComponentArg::Cpu => Self::Cpu,
            ComponentArg::Memory => Self::Memory,
        }
    }
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let pretty = match (self.pretty, self.compact) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        CliOverrides {
            dmi_entries: self.dmi_entries.clone(),
            components: (!self.components.is_empty())
                .then(|| self.components.iter().copied().map(Component::from).collect()),
            pretty,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_cli_overrides(cli.overrides());

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    logging::init_logging(&config.logging, cli.verbose)?;
    tracing::debug!(?config, "Configuration loaded");
    tracing::info!(
        entries_dir = %config.dmi.entries_dir.display(),
        components = ?config.components,
        "hwinfo starting"
    );

    let source = Arc::new(SysfsDmiSource::new(config.dmi.entries_dir.clone()));
    let report = HardwareInfoCollector::new(source).collect(&config.components);
    let json = report.to_json(config.output.pretty)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, format!("{json}\n"))
                .with_context(|| format!("failed to write report to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
