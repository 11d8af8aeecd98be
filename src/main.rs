// SPDX-License-Identifier: PMPL-1.0-or-later

//! bcp47: look up IANA language subtags and name BCP47 tags
//!
//! Reads the Language Subtag Registry from a file or the IANA URL, then
//! answers lookups and tag-naming queries against it.

use anyhow::{bail, Result};
use bcp47_registry::registry;
use bcp47_registry::report::{NameResolution, OutputFormat, RegistrySummary, ReportFormatter};
use bcp47_registry::source::SourceConfig;
use bcp47_registry::Registry;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bcp47")]
#[command(version)]
#[command(about = "IANA Language Subtag Registry lookup and BCP47 tag naming")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Registry file to read instead of downloading
    #[arg(long, global = true, value_name = "FILE")]
    registry: Option<PathBuf>,

    /// Registry URL (needs the `fetch` feature)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log registry loading to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the bureaucratic name of each tag (e.g. en-US)
    Name {
        #[arg(value_name = "TAG", required = true)]
        tags: Vec<String>,
    },

    /// Show the registry record(s) for a subtag, matched exactly
    Lookup {
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Summarise the registry: file date, codes, records
    Info,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_registry(cli: &Cli) -> Result<&'static Registry> {
    let source = SourceConfig {
        file: cli.registry.clone(),
        url: cli.url.clone(),
    }
    .resolve();
    registry::global().get_or_load(|| source.load())
}

fn emit<T: serde::Serialize>(format: OutputFormat, value: &T, text: impl FnOnce()) -> Result<()> {
    match format.serialize(value)? {
        Some(encoded) => println!("{}", encoded),
        None => text(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let registry = load_registry(&cli)?;
    let formatter = ReportFormatter::new();

    match &cli.command {
        Commands::Name { tags } => {
            let resolutions: Vec<NameResolution> = tags
                .iter()
                .map(|tag| NameResolution::resolve(registry, tag))
                .collect();
            emit(cli.format, &resolutions, || formatter.print_names(&resolutions))?;

            let failed = resolutions.iter().filter(|r| !r.is_resolved()).count();
            if failed > 0 {
                bail!("{} of {} tag(s) could not be resolved", failed, resolutions.len());
            }
        }

        Commands::Lookup { code } => match registry.lookup(code) {
            Some(entry) => emit(cli.format, entry, || formatter.print_entry(code, entry))?,
            None => bail!("no registry entry for {:?}", code),
        },

        Commands::Info => {
            let summary = RegistrySummary::from_registry(registry);
            emit(cli.format, &summary, || formatter.print_summary(&summary))?;
        }
    }

    Ok(())
}
