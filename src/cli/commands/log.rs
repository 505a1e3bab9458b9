//! `sst log` command - View the activity log
//!
//! Shows the bounded append-only log of catalog and sourcing changes,
//! newest first.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::filters::DateFilter;
use crate::cli::helpers::{escape_csv, truncate_str, warn_load};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{LogQuery, Workspace};

#[derive(Subcommand, Debug)]
pub enum LogCommands {
    /// List log entries with filtering
    List(ListArgs),

    /// List distinct action labels in use
    Actions,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by exact action label
    #[arg(long, short = 'a')]
    pub action: Option<String>,

    /// Filter by date window
    #[arg(long, default_value = "all")]
    pub date: DateFilter,

    /// Search in details and name references (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Limit number of entries
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

/// Run a log subcommand
pub fn run(cmd: LogCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        LogCommands::List(args) => run_list(args, global),
        LogCommands::Actions => run_actions(global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();

    let query = LogQuery {
        action: args.action,
        date: args.date.window(),
        text: args.search,
    };

    // A corrupt log document is reported but never blocks reading
    let mut entries = match log.query(&query) {
        Ok(entries) => entries,
        Err(e) => {
            warn_load(&e);
            Vec::new()
        }
    };

    // Newest first
    entries.reverse();

    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    // Count only
    if args.count {
        println!("{}", entries.len());
        return Ok(());
    }

    // No results
    if entries.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    // Output based on format
    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Table,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&entries).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&entries).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("timestamp,action,details,product_name,supplier_name");
            for entry in &entries {
                println!(
                    "{},{},{},{},{}",
                    entry.timestamp.to_rfc3339(),
                    escape_csv(&entry.action),
                    escape_csv(&entry.details),
                    escape_csv(entry.product_name.as_deref().unwrap_or_default()),
                    escape_csv(entry.supplier_name.as_deref().unwrap_or_default())
                );
            }
        }
        OutputFormat::Auto | OutputFormat::Table => {
            println!("\n{}\n", style("Activity Log").bold().underlined());
            println!(
                "{:<20} {:<16} {:<18} {:<18} DETAILS",
                "TIME", "ACTION", "PRODUCT", "SUPPLIER"
            );
            println!("{}", "-".repeat(100));

            for entry in &entries {
                let time = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
                let action_styled = match entry.action.as_str() {
                    "Product Added" => style(&entry.action).green(),
                    "Supplier Added" => style(&entry.action).blue(),
                    _ => style(&entry.action).white(),
                };

                println!(
                    "{:<20} {:<16} {:<18} {:<18} {}",
                    style(time).dim(),
                    action_styled,
                    truncate_str(entry.product_name.as_deref().unwrap_or("-"), 16),
                    truncate_str(entry.supplier_name.as_deref().unwrap_or("-"), 16),
                    style(truncate_str(&entry.details, 45)).dim()
                );
            }

            println!("\n{} log entries.", entries.len());
        }
    }

    Ok(())
}

fn run_actions(global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();

    let actions = match log.actions() {
        Ok(actions) => actions,
        Err(e) => {
            warn_load(&e);
            Default::default()
        }
    };

    if actions.is_empty() {
        println!("No log entries found.");
        return Ok(());
    }

    for action in &actions {
        println!("{}", action);
    }

    Ok(())
}
