//! Workspace - data directory resolution and store construction
//!
//! All state lives in three JSON documents inside one directory. The
//! workspace hands out typed store handles so every component receives
//! its dependencies explicitly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::activity::ActivityLog;
use crate::core::sourcing::SourcingDocument;
use crate::core::store::JsonStore;
use crate::entities::{LogEntry, ProductDocument};

/// Product document file name
pub const PRODUCTS_FILE: &str = "final_sku.json";

/// Sourcing document file name
pub const SOURCING_FILE: &str = "sourcing_data.json";

/// Activity log file name
pub const LOGS_FILE: &str = "app_logs.json";

/// Resolved data directory with typed store constructors
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn products_path(&self) -> PathBuf {
        self.root.join(PRODUCTS_FILE)
    }

    pub fn sourcing_path(&self) -> PathBuf {
        self.root.join(SOURCING_FILE)
    }

    pub fn logs_path(&self) -> PathBuf {
        self.root.join(LOGS_FILE)
    }

    pub fn product_store(&self) -> JsonStore<ProductDocument> {
        JsonStore::new(self.products_path())
    }

    pub fn sourcing_store(&self) -> JsonStore<SourcingDocument> {
        JsonStore::new(self.sourcing_path())
    }

    pub fn log_store(&self) -> JsonStore<Vec<LogEntry>> {
        JsonStore::new(self.logs_path())
    }

    /// Shared activity log handle for injection into the other components
    pub fn activity_log(&self) -> Arc<ActivityLog> {
        Arc::new(ActivityLog::new(self.log_store()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_paths_join_document_names() {
        let workspace = Workspace::open("/data");

        assert_eq!(workspace.products_path(), Path::new("/data/final_sku.json"));
        assert_eq!(workspace.sourcing_path(), Path::new("/data/sourcing_data.json"));
        assert_eq!(workspace.logs_path(), Path::new("/data/app_logs.json"));
    }

    #[test]
    fn test_stores_share_one_directory() {
        let dir = tempdir().unwrap();
        let workspace = Workspace::open(dir.path());

        let log = workspace.activity_log();
        log.append("Product Added", "probe", None, None).unwrap();

        assert!(workspace.logs_path().exists());
        assert!(!workspace.products_path().exists());
    }
}
