//! `sst init` command - Create the data documents

use console::style;
use miette::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cli::GlobalOpts;
use crate::core::store::JsonStore;
use crate::core::{SourcingDocument, Workspace, LOGS_FILE, PRODUCTS_FILE, SOURCING_FILE};
use crate::entities::{LogEntry, ProductDocument};

pub fn run(global: &GlobalOpts) -> Result<()> {
    let workspace = Workspace::open(&global.dir);

    let results = [
        (
            PRODUCTS_FILE,
            ensure(&workspace.product_store(), &ProductDocument::default())?,
        ),
        (
            SOURCING_FILE,
            ensure(&workspace.sourcing_store(), &SourcingDocument::default())?,
        ),
        (
            LOGS_FILE,
            ensure(&workspace.log_store(), &Vec::<LogEntry>::new())?,
        ),
    ];

    let mut created = 0;
    for (name, was_created) in results {
        if was_created {
            println!("{} Created {}", style("✓").green(), name);
            created += 1;
        } else {
            println!("{} Skipped {} (already exists)", style("→").blue(), name);
        }
    }

    println!();
    if created == 0 {
        println!("All documents already present.");
    } else {
        println!(
            "Initialized data directory {}",
            style(workspace.root().display()).yellow()
        );
    }

    Ok(())
}

/// Write the empty default unless the document already exists
fn ensure<T>(store: &JsonStore<T>, value: &T) -> Result<bool>
where
    T: Serialize + DeserializeOwned + Default,
{
    if store.exists() {
        return Ok(false);
    }
    store.save(value).map_err(|e| miette::miette!("{}", e))?;
    Ok(true)
}
