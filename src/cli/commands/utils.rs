//! Shared utilities for CLI commands

use std::sync::Arc;

use crate::cli::helpers::warn_load;
use crate::core::{ActivityLog, ProductCatalog, SourcingLedger, Workspace};

/// Open the catalog, surfacing a tolerated load failure as a warning
pub fn open_catalog(workspace: &Workspace, log: Arc<ActivityLog>) -> ProductCatalog {
    let catalog = ProductCatalog::open(workspace.product_store(), log);
    if let Some(err) = catalog.load_warning() {
        warn_load(err);
    }
    catalog
}

/// Open the sourcing ledger, surfacing a tolerated load failure as a warning
pub fn open_ledger(workspace: &Workspace, log: Arc<ActivityLog>) -> SourcingLedger {
    let ledger = SourcingLedger::open(workspace.sourcing_store(), log);
    if let Some(err) = ledger.load_warning() {
        warn_load(err);
    }
    ledger
}
