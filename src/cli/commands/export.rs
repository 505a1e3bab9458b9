//! `sst export` command - Flatten documents to CSV files

use std::path::PathBuf;

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::filters::DateFilter;
use crate::cli::helpers::warn_load;
use crate::cli::GlobalOpts;
use crate::core::{
    export, LogQuery, Workspace, LOG_EXPORT_FILE, SOURCING_EXPORT_FILE,
};

#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export supplier quotes joined with product details
    Sourcing(SourcingArgs),

    /// Export the activity log
    Logs(LogsArgs),
}

#[derive(clap::Args, Debug)]
pub struct SourcingArgs {
    /// Output file (defaults to sourcing_export.csv in the data directory)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct LogsArgs {
    /// Output file (defaults to application_logs.csv in the data directory)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Filter by exact action label
    #[arg(long, short = 'a')]
    pub action: Option<String>,

    /// Filter by date window
    #[arg(long, default_value = "all")]
    pub date: DateFilter,

    /// Search in details and name references (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

/// Run an export subcommand
pub fn run(cmd: ExportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ExportCommands::Sourcing(args) => run_sourcing(args, global),
        ExportCommands::Logs(args) => run_logs(args, global),
    }
}

fn run_sourcing(args: SourcingArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();
    let catalog = super::utils::open_catalog(&workspace, log.clone());
    let ledger = super::utils::open_ledger(&workspace, log);

    if ledger.is_empty() {
        println!("No sourcing data available");
        return Ok(());
    }

    let rows = export::sourcing_rows(&catalog, &ledger);
    if rows.is_empty() {
        println!("No data to export");
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| workspace.root().join(SOURCING_EXPORT_FILE));
    export::write_sourcing_csv(&path, &rows).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Exported {} rows to '{}'",
        style("✓").green(),
        style(rows.len()).cyan(),
        style(path.display()).yellow()
    );

    Ok(())
}

fn run_logs(args: LogsArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();

    let query = LogQuery {
        action: args.action,
        date: args.date.window(),
        text: args.search,
    };

    let entries = match log.query(&query) {
        Ok(entries) => entries,
        Err(e) => {
            warn_load(&e);
            Vec::new()
        }
    };

    if entries.is_empty() {
        println!("No logs to export");
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| workspace.root().join(LOG_EXPORT_FILE));
    export::write_log_csv(&path, &entries).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Exported {} entries to '{}'",
        style("✓").green(),
        style(entries.len()).cyan(),
        style(path.display()).yellow()
    );

    Ok(())
}
