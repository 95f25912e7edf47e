//! Identifier formatting CLI.
//!
//! This binary provides a command-line interface for the idfmt library,
//! formatting or normalizing a single value per invocation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use idfmt::{normalize, Catalog, Formatter};

/// Identifier Display Formatter
///
/// Renders digit identifiers (phone numbers, cards, document numbers)
/// into their region- and type-specific display form.
#[derive(Parser)]
#[command(name = "idfmt")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Value to format
    value: Option<String>,

    /// Identifier type (e.g. phone, credit-card, cpf)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    kind: Option<String>,

    /// Region narrowing which templates apply (e.g. brazil)
    #[arg(short, long, value_name = "REGION")]
    region: Option<String>,

    /// Custom catalog file (JSON descriptors) instead of the built-in one
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a value to its canonical digit sequence (no formatting)
    Normalize {
        /// Value to normalize
        value: String,

        /// Identifier type; "phone" keeps + characters
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<String>,
    },
}

/// Format command handler holding the resolved catalog.
struct FormatHandler {
    catalog: Option<Catalog>,
    verbose: bool,
}

impl FormatHandler {
    /// Creates a handler, loading a custom catalog when one was given.
    fn new(catalog_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let catalog = catalog_path
            .map(Catalog::from_path)
            .transpose()
            .with_context(|| "Failed to load catalog")?;

        Ok(Self { catalog, verbose })
    }

    fn formatter(&self) -> Formatter<'_> {
        match &self.catalog {
            Some(catalog) => Formatter::new(catalog),
            None => Formatter::with_builtin_catalog(),
        }
    }

    /// Formats a value and prints the result.
    fn format(&self, value: &str, kind: Option<&str>, region: Option<&str>) {
        let formatter = self.formatter();

        if self.verbose {
            let normalized = normalize(value, kind);
            println!("Normalized: {}", normalized);
            match formatter.find_format(&normalized, kind.unwrap_or(""), region) {
                Some(descriptor) => println!("Template:   {}", descriptor.template()),
                None => println!("Template:   <none, echoing input>"),
            }
        }

        println!("{}", formatter.format(value, kind, region));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Normalize { value, kind }) => {
            println!("{}", normalize(value, kind.as_deref()));
        }
        None => {
            let value = cli
                .value
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("VALUE is required"))?;

            let handler = FormatHandler::new(cli.catalog.as_deref(), cli.verbose)?;
            handler.format(value, cli.kind.as_deref(), cli.region.as_deref());
        }
    }

    Ok(())
}
