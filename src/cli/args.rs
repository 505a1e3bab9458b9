//! Top-level CLI definition and global options

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{export, log, product, source, validate};

#[derive(Parser, Debug)]
#[command(
    name = "sst",
    version,
    about = "SKU Sourcing Toolkit - manage a product catalog, supplier quotes, and activity log as plain JSON files"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Args, Debug)]
pub struct GlobalOpts {
    /// Data directory holding the JSON documents
    #[arg(long, short = 'd', global = true, env = "SST_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create any missing data documents in the data directory
    Init,

    /// Manage the product catalog
    #[command(subcommand)]
    Product(product::ProductCommands),

    /// Manage per-product supplier quotes
    #[command(subcommand)]
    Source(source::SourceCommands),

    /// Query the activity log
    #[command(subcommand)]
    Log(log::LogCommands),

    /// Export data to CSV files
    #[command(subcommand)]
    Export(export::ExportCommands),

    /// Check the stored documents for problems
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table for lists, pretty details otherwise
    #[default]
    Auto,
    Table,
    Json,
    Yaml,
    Csv,
}
