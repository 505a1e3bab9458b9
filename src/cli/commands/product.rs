//! `sst product` command - Product catalog management

use clap::Subcommand;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{escape_csv, truncate_str};
use crate::cli::{filters, GlobalOpts, OutputFormat};
use crate::core::{ProductCatalog, Workspace};
use crate::entities::ProductDraft;

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// List products with filtering
    List(ListArgs),

    /// Show a product's details
    Show(ShowArgs),

    /// Add a product to the catalog
    Add(AddArgs),

    /// List categories with product counts
    Categories(CategoriesArgs),
}

#[derive(clap::Args, Debug)]
pub struct CategoriesArgs {
    /// Count within one category only (exact match)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Count only products matching a name search (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Filter by category (exact match)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Search in product names (case-insensitive)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Product index
    pub index: u32,
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Product name (required unless interactive)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Category name (required unless interactive)
    #[arg(long, short = 'c')]
    pub category: Option<String>,

    /// Unit price
    #[arg(long, short = 'p')]
    pub price: Option<f64>,

    /// Weight or pack size (free text, e.g. "500g")
    #[arg(long, short = 'w')]
    pub weight: Option<String>,

    /// Description
    #[arg(long)]
    pub description: Option<String>,

    /// Interactive mode (prompt for fields)
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

/// Run a product subcommand
pub fn run(cmd: ProductCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ProductCommands::List(args) => run_list(args, global),
        ProductCommands::Show(args) => run_show(args, global),
        ProductCommands::Add(args) => run_add(args, global),
        ProductCommands::Categories(args) => run_categories(args, global),
    }
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();
    let catalog = super::utils::open_catalog(&workspace, log.clone());
    let ledger = super::utils::open_ledger(&workspace, log);

    let filter = filters::category_filter(args.category.as_deref());
    let mut products = catalog.filter(&filter, args.search.as_deref());

    if let Some(limit) = args.limit {
        products.truncate(limit);
    }

    // Count only
    if args.count {
        println!("{}", products.len());
        return Ok(());
    }

    // No results
    if products.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    // Output based on format
    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Table,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&products).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&products).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Csv => {
            println!("index,name,category,price,suppliers");
            for product in &products {
                let price = product
                    .price_numeric
                    .map(|p| format!("{:.2}", p))
                    .unwrap_or_default();
                println!(
                    "{},{},{},{},{}",
                    product.product_index,
                    escape_csv(&product.product_name),
                    escape_csv(&product.category_name),
                    price,
                    ledger.quote_count(product.product_index)
                );
            }
        }
        OutputFormat::Auto | OutputFormat::Table => {
            println!(
                "{:<7} {:<30} {:<18} {:>10} {:>10}",
                style("INDEX").bold(),
                style("NAME").bold(),
                style("CATEGORY").bold(),
                style("PRICE").bold(),
                style("SUPPLIERS").bold()
            );
            println!("{}", "-".repeat(80));

            for product in &products {
                let price = product
                    .price_numeric
                    .map(|p| format!("{:.2}", p))
                    .unwrap_or_else(|| "-".to_string());

                println!(
                    "{:<7} {:<30} {:<18} {:>10} {:>10}",
                    style(product.product_index).cyan(),
                    truncate_str(&product.product_name, 28),
                    truncate_str(&product.category_name, 16),
                    price,
                    ledger.quote_count(product.product_index)
                );
            }

            println!("\n{} product(s).", products.len());
        }
    }

    Ok(())
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();
    let catalog = super::utils::open_catalog(&workspace, log.clone());
    let ledger = super::utils::open_ledger(&workspace, log);

    let product = catalog
        .get(args.index)
        .ok_or_else(|| miette::miette!("No product found with index {}", args.index))?;

    match global.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(product).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(product).into_diagnostic()?;
            print!("{}", yaml);
        }
        _ => {
            println!("{}", style("─".repeat(60)).dim());
            println!(
                "{}: {}",
                style("Index").bold(),
                style(product.product_index).cyan()
            );
            println!(
                "{}: {}",
                style("Name").bold(),
                style(&product.product_name).yellow()
            );
            println!("{}: {}", style("Category").bold(), product.category_name);
            if let Some(price) = product.price_numeric {
                println!("{}: {:.2}", style("Price").bold(), price);
            }
            if let Some(ref weight) = product.weight_quantity {
                println!("{}: {}", style("Weight/Qty").bold(), weight);
            }
            println!("{}", style("─".repeat(60)).dim());

            if let Some(ref description) = product.description {
                if !description.is_empty() {
                    println!();
                    println!("{}", style("Description:").bold());
                    println!("{}", description);
                }
            }

            let quotes = ledger.quotes_for(product.product_index);
            println!();
            if quotes.is_empty() {
                println!("No suppliers added yet.");
            } else {
                println!("{} ({}):", style("Suppliers").bold(), quotes.len());
                for quote in quotes {
                    println!(
                        "  • {} ({} days, MOQ {})",
                        style(&quote.supplier_name).yellow(),
                        quote.delivery_time,
                        quote.moq
                    );
                    for tier in &quote.quantity_pricing {
                        println!("      {} units: {:.2}", tier.label(), tier.price);
                    }
                }
            }
        }
    }

    Ok(())
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();
    let mut catalog = super::utils::open_catalog(&workspace, log);

    let draft = if args.interactive {
        prompt_draft(&catalog)?
    } else {
        let mut draft = ProductDraft::new(
            args.name.unwrap_or_default(),
            args.category.unwrap_or_default(),
        );
        draft.price_numeric = args.price;
        draft.weight_quantity = args.weight;
        draft.description = args.description;
        draft
    };

    if draft.price_numeric.is_some_and(|price| price < 0.0) {
        return Err(miette::miette!("Price must be non-negative"));
    }

    let product = catalog.add(draft).map_err(|e| miette::miette!("{}", e))?;

    println!(
        "{} Added product {} (index {})",
        style("✓").green(),
        style(&product.product_name).yellow(),
        style(product.product_index).cyan()
    );
    println!("  {}", style(workspace.products_path().display()).dim());

    Ok(())
}

/// Prompt for the fields of a new product
fn prompt_draft(catalog: &ProductCatalog) -> Result<ProductDraft> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("Product name")
        .interact_text()
        .into_diagnostic()?;

    let mut categories: Vec<String> = catalog.categories().into_iter().collect();
    categories.push("New category".to_string());

    let picked = Select::with_theme(&theme)
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()
        .into_diagnostic()?;

    let category = if picked == categories.len() - 1 {
        Input::with_theme(&theme)
            .with_prompt("New category name")
            .interact_text()
            .into_diagnostic()?
    } else {
        categories[picked].clone()
    };

    let mut draft = ProductDraft::new(name, category);

    let price: f64 = Input::with_theme(&theme)
        .with_prompt("Unit price")
        .default(0.0)
        .validate_with(|price: &f64| {
            if *price < 0.0 {
                Err("price must be non-negative")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .into_diagnostic()?;
    draft.price_numeric = Some(price);

    let weight: String = Input::with_theme(&theme)
        .with_prompt("Weight or pack size")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;
    if !weight.is_empty() {
        draft.weight_quantity = Some(weight);
    }

    let description: String = Input::with_theme(&theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()
        .into_diagnostic()?;
    if !description.is_empty() {
        draft.description = Some(description);
    }

    Ok(draft)
}

fn run_categories(args: CategoriesArgs, global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);
    let log = workspace.activity_log();
    let catalog = super::utils::open_catalog(&workspace, log);

    let filter = filters::category_filter(args.category.as_deref());
    let products = catalog.filter(&filter, args.search.as_deref());
    let counts = ProductCatalog::category_counts(&products);

    if counts.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    let format = match global.format {
        OutputFormat::Auto => OutputFormat::Table,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = counts
                .iter()
                .map(|(category, count)| {
                    serde_json::json!({
                        "category": category,
                        "products": count,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            let rows: Vec<serde_json::Value> = counts
                .iter()
                .map(|(category, count)| {
                    serde_json::json!({
                        "category": category,
                        "products": count,
                    })
                })
                .collect();
            print!("{}", serde_yml::to_string(&rows).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("category,products");
            for (category, count) in &counts {
                println!("{},{}", escape_csv(category), count);
            }
        }
        OutputFormat::Auto | OutputFormat::Table => {
            println!(
                "{:<30} {:<10}",
                style("CATEGORY").bold(),
                style("PRODUCTS").bold()
            );
            println!("{}", "-".repeat(42));

            for (category, count) in &counts {
                println!("{:<30} {:<10}", style(category).yellow(), count);
            }

            println!("\n{} categories.", counts.len());
        }
    }

    Ok(())
}
