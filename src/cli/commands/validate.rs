//! `sst validate` command - Check the data documents for problems

use console::style;
use miette::Result;
use std::collections::BTreeSet;
use std::path::Path;

use crate::cli::GlobalOpts;
use crate::core::{SourcingDocument, Workspace, LOG_CAPACITY};
use crate::entities::{LogEntry, ProductDocument};

#[derive(clap::Args, Debug)]
pub struct ValidateArgs {
    /// Strict mode - warnings become errors
    #[arg(long)]
    pub strict: bool,
}

/// Validation statistics
#[derive(Default)]
struct ValidationStats {
    documents_checked: usize,
    documents_passed: usize,
    errors: usize,
    warnings: usize,
}

/// One finding against a document
struct Problem {
    warning: bool,
    message: String,
}

impl Problem {
    fn error(message: String) -> Self {
        Self {
            warning: false,
            message,
        }
    }

    fn warning(message: String) -> Self {
        Self {
            warning: true,
            message,
        }
    }
}

pub fn run(args: ValidateArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let mut stats = ValidationStats::default();

    println!(
        "{} Validating {}\n",
        style("→").blue(),
        style(workspace.root().display()).yellow()
    );

    let (document, mut problems) = match workspace.product_store().load() {
        Ok(document) => (document, Vec::new()),
        Err(e) => (
            ProductDocument::default(),
            vec![Problem::error(e.to_string())],
        ),
    };
    problems.extend(check_products(&document));
    report_document(&workspace.products_path(), &problems, args.strict, &mut stats);

    let known_indexes: BTreeSet<u32> = document
        .products
        .iter()
        .map(|p| p.product_index)
        .collect();

    let (quotes, mut problems) = match workspace.sourcing_store().load() {
        Ok(quotes) => (quotes, Vec::new()),
        Err(e) => (
            SourcingDocument::default(),
            vec![Problem::error(e.to_string())],
        ),
    };
    problems.extend(check_sourcing(&quotes, &known_indexes));
    report_document(&workspace.sourcing_path(), &problems, args.strict, &mut stats);

    let (entries, mut problems) = match workspace.log_store().load() {
        Ok(entries) => (entries, Vec::new()),
        Err(e) => (Vec::new(), vec![Problem::error(e.to_string())]),
    };
    problems.extend(check_log(&entries));
    report_document(&workspace.logs_path(), &problems, args.strict, &mut stats);

    // Summary
    println!();
    println!("{}", style("─".repeat(60)).dim());
    println!("{}", style("Validation Summary").bold());
    println!("{}", style("─".repeat(60)).dim());
    println!(
        "  Documents checked: {}",
        style(stats.documents_checked).cyan()
    );
    println!(
        "  Documents passed:  {}",
        style(stats.documents_passed).green()
    );
    println!("  Errors:            {}", style(stats.errors).red());
    println!("  Warnings:          {}", style(stats.warnings).yellow());
    println!();

    if stats.errors > 0 {
        Err(miette::miette!(
            "Validation failed: {} problem(s) found",
            stats.errors
        ))
    } else {
        println!(
            "{} All documents passed validation!",
            style("✓").green().bold()
        );
        Ok(())
    }
}

/// Print one document's verdict and roll its findings into the stats
fn report_document(path: &Path, problems: &[Problem], strict: bool, stats: &mut ValidationStats) {
    stats.documents_checked += 1;

    let errors = problems.iter().filter(|p| !p.warning || strict).count();
    let warnings = problems.len() - errors;
    stats.errors += errors;
    stats.warnings += warnings;

    if problems.is_empty() {
        stats.documents_passed += 1;
        println!("{} {}", style("✓").green(), path.display());
        return;
    }

    if errors == 0 {
        stats.documents_passed += 1;
        println!(
            "{} {} - {} warning(s)",
            style("!").yellow(),
            path.display(),
            warnings
        );
    } else {
        println!(
            "{} {} - {} problem(s)",
            style("✗").red(),
            path.display(),
            problems.len()
        );
    }

    for problem in problems {
        if problem.warning && !strict {
            println!("    {} {}", style("!").yellow(), problem.message);
        } else {
            println!("    {} {}", style("✗").red(), problem.message);
        }
    }
}

fn check_products(document: &ProductDocument) -> Vec<Problem> {
    let mut problems = Vec::new();
    let mut seen = BTreeSet::new();

    for product in &document.products {
        if !seen.insert(product.product_index) {
            problems.push(Problem::error(format!(
                "duplicate product index {}",
                product.product_index
            )));
        }

        if product.product_name.trim().is_empty() {
            problems.push(Problem::error(format!(
                "product {} has an empty name",
                product.product_index
            )));
        }

        if let Some(price) = product.price_numeric {
            if price < 0.0 {
                problems.push(Problem::warning(format!(
                    "product {} has a negative price ({})",
                    product.product_index, price
                )));
            }
        }
    }

    problems
}

fn check_sourcing(quotes: &SourcingDocument, known_indexes: &BTreeSet<u32>) -> Vec<Problem> {
    let mut problems = Vec::new();

    for (product_index, product_quotes) in quotes {
        if !known_indexes.contains(product_index) {
            problems.push(Problem::warning(format!(
                "quotes reference unknown product index {}",
                product_index
            )));
        }

        for quote in product_quotes {
            if quote.supplier_name.trim().is_empty() {
                problems.push(Problem::error(format!(
                    "product {} has a quote with a blank supplier name",
                    product_index
                )));
            }

            let ascending = quote
                .quantity_pricing
                .windows(2)
                .all(|pair| pair[0].min_quantity < pair[1].min_quantity);
            if !ascending {
                problems.push(Problem::error(format!(
                    "quote from '{}' for product {} has out-of-order slabs",
                    quote.supplier_name, product_index
                )));
            }

            if quote.quantity_pricing.len() != 3 {
                problems.push(Problem::warning(format!(
                    "quote from '{}' for product {} has {} pricing slab(s)",
                    quote.supplier_name,
                    product_index,
                    quote.quantity_pricing.len()
                )));
            }
        }
    }

    problems
}

fn check_log(entries: &[LogEntry]) -> Vec<Problem> {
    let mut problems = Vec::new();

    if entries.len() > LOG_CAPACITY {
        problems.push(Problem::warning(format!(
            "log holds {} entries, over the {} cap",
            entries.len(),
            LOG_CAPACITY
        )));
    }

    let blank_actions = entries
        .iter()
        .filter(|e| e.action.trim().is_empty())
        .count();
    if blank_actions > 0 {
        problems.push(Problem::error(format!(
            "{} log entries have an empty action",
            blank_actions
        )));
    }

    problems
}
