//! `sst source` command - Supplier quote management

use clap::Subcommand;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::parse_tier;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{ProductCatalog, Workspace};
use crate::entities::{Product, QuoteDraft};

#[derive(Subcommand, Debug)]
pub enum SourceCommands {
    /// List supplier quotes for a product
    List(ListArgs),

    /// Add a supplier quote for a product
    Add(AddArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Product index
    pub index: u32,

    /// Show the unit price applicable at this order quantity
    #[arg(long, short = 'q')]
    pub qty: Option<u32>,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Product index (required unless interactive)
    pub index: Option<u32>,

    /// Supplier name
    #[arg(long, short = 's')]
    pub supplier: Option<String>,

    /// Contact info (phone, email)
    #[arg(long, short = 'c')]
    pub contact: Option<String>,

    /// Delivery time in days
    #[arg(long, default_value_t = 7)]
    pub delivery_days: u32,

    /// Minimum order quantity
    #[arg(long, default_value_t = 10)]
    pub moq: u32,

    /// Pricing slab as MIN:PRICE, given exactly three times low to high
    #[arg(long, value_parser = parse_tier)]
    pub tier: Vec<(u32, f64)>,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

/// Run a source subcommand
pub fn run(cmd: SourceCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SourceCommands::List(args) => run_list(args, global),
        SourceCommands::Add(args) => run_add(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();
    let catalog = super::utils::open_catalog(&workspace, log.clone());
    let ledger = super::utils::open_ledger(&workspace, log);

    let product = catalog
        .get(args.index)
        .ok_or_else(|| miette::miette!("No product found with index {}", args.index))?;

    let quotes = ledger.quotes_for(product.product_index);

    if quotes.is_empty() {
        println!(
            "No suppliers added yet for {}.",
            style(product.label()).yellow()
        );
        return Ok(());
    }

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(quotes).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&quotes).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            println!(
                "{} supplier(s) for {}:",
                style(quotes.len()).cyan(),
                style(product.label()).yellow()
            );

            for quote in quotes {
                println!();
                println!("{}", style(&quote.supplier_name).bold());
                if !quote.contact_info.is_empty() {
                    println!("  Contact: {}", quote.contact_info);
                }
                println!("  Delivery: {} days", quote.delivery_time);
                println!("  MOQ: {}", quote.moq);
                for tier in &quote.quantity_pricing {
                    println!("  • {} units: {:.2}", tier.label(), tier.price);
                }
                if let Some(qty) = args.qty {
                    match quote.price_for_qty(qty) {
                        Some(price) => {
                            println!("  {} {} units: {:.2} each", style("→").blue(), qty, price)
                        }
                        None => {
                            println!("  {} no slab covers {} units", style("→").blue(), qty)
                        }
                    }
                }
                println!(
                    "  {}",
                    style(format!("Added {}", quote.added_date.format("%Y-%m-%d"))).dim()
                );
            }
        }
    }

    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();
    let catalog = super::utils::open_catalog(&workspace, log.clone());
    let mut ledger = super::utils::open_ledger(&workspace, log);

    if catalog.is_empty() {
        return Err(miette::miette!(
            "No products in the catalog. Add one first with 'sst product add'"
        ));
    }

    let (product, draft) = if args.interactive {
        (prompt_product(&catalog)?, prompt_draft()?)
    } else {
        let index = args
            .index
            .ok_or_else(|| miette::miette!("Product index is required (or use --interactive)"))?;
        let product = catalog
            .get(index)
            .ok_or_else(|| miette::miette!("No product found with index {}", index))?;

        let mut draft = QuoteDraft::new(
            args.supplier.unwrap_or_default(),
            args.contact.unwrap_or_default(),
        );
        draft.delivery_time = args.delivery_days;
        draft.moq = args.moq;

        match args.tier.len() {
            0 => {}
            3 => {
                for (slot, (min, price)) in args.tier.iter().enumerate() {
                    draft.tier_minimums[slot] = *min;
                    draft.tier_prices[slot] = *price;
                }
            }
            n => {
                return Err(miette::miette!(
                    "Expected exactly 3 --tier slabs, got {}. Example: --tier 1:5 --tier 10:4 --tier 50:3",
                    n
                ));
            }
        }

        (product, draft)
    };

    let quote = ledger
        .add_quote(product, draft)
        .map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added supplier {} for {}",
        style("✓").green(),
        style(&quote.supplier_name).yellow(),
        style(product.label()).cyan()
    );
    println!("  {}", style(workspace.sourcing_path().display()).dim());

    Ok(())
}

/// Pick a product interactively, category first then item
fn prompt_product(catalog: &ProductCatalog) -> Result<&Product> {
    let theme = ColorfulTheme::default();

    let grouped = catalog.group_by_category();
    let categories: Vec<&str> = grouped.keys().copied().collect();

    let picked = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()
        .into_diagnostic()?;

    let products = &grouped[categories[picked]];
    let labels: Vec<String> = products.iter().map(|p| p.label()).collect();

    let picked = Select::with_theme(&theme)
        .with_prompt("Product")
        .items(&labels)
        .default(0)
        .interact()
        .into_diagnostic()?;

    Ok(products[picked])
}

/// Prompt for the fields of a new quote
fn prompt_draft() -> Result<QuoteDraft> {
    let theme = ColorfulTheme::default();

    let supplier: String = Input::with_theme(&theme)
        .with_prompt("Supplier name")
        .interact_text()
        .into_diagnostic()?;

    let contact: String = Input::with_theme(&theme)
        .with_prompt("Contact info")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;

    let mut draft = QuoteDraft::new(supplier, contact);

    draft.delivery_time = Input::with_theme(&theme)
        .with_prompt("Delivery time (days)")
        .default(draft.delivery_time)
        .validate_with(|days: &u32| {
            if *days == 0 {
                Err("must be at least 1 day")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .into_diagnostic()?;

    draft.moq = Input::with_theme(&theme)
        .with_prompt("Minimum order quantity")
        .default(draft.moq)
        .validate_with(|moq: &u32| {
            if *moq == 0 {
                Err("must be at least 1")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .into_diagnostic()?;

    for slot in 0..draft.tier_minimums.len() {
        draft.tier_minimums[slot] = Input::with_theme(&theme)
            .with_prompt(format!("Slab {} minimum quantity", slot + 1))
            .default(draft.tier_minimums[slot])
            .interact_text()
            .into_diagnostic()?;

        draft.tier_prices[slot] = Input::with_theme(&theme)
            .with_prompt(format!("Slab {} unit price", slot + 1))
            .default(draft.tier_prices[slot])
            .interact_text()
            .into_diagnostic()?;
    }

    Ok(draft)
}
