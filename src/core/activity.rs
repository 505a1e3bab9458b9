//! Bounded activity history with multi-criteria queries
//!
//! The log is an append-only JSON array, chronological with the newest
//! entry last. Every write runs one load-append-truncate-save cycle
//! behind a mutex, so a shared handle stays race-free in-process.

use chrono::{Duration, NaiveDate, Utc};
use std::collections::BTreeSet;
use std::sync::Mutex;

use crate::core::store::{JsonStore, StoreError};
use crate::entities::LogEntry;

/// Most recent entries kept after any write
pub const LOG_CAPACITY: usize = 1000;

/// Date window for log queries, relative to the current UTC date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    AllTime,
    Today,
    Last7Days,
    Last30Days,
}

impl DateWindow {
    /// Earliest UTC date admitted by the window, if bounded
    pub fn cutoff(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            DateWindow::AllTime => None,
            DateWindow::Today => Some(today),
            DateWindow::Last7Days => Some(today - Duration::days(7)),
            DateWindow::Last30Days => Some(today - Duration::days(30)),
        }
    }
}

/// Multi-criteria log query; criteria combine with AND
#[derive(Debug, Clone, Default)]
pub struct LogQuery {
    /// Exact action label
    pub action: Option<String>,

    /// Date window on the entry's UTC calendar date
    pub date: DateWindow,

    /// Case-insensitive substring on details and name references
    pub text: Option<String>,
}

impl LogQuery {
    fn matches(&self, entry: &LogEntry, cutoff: Option<NaiveDate>) -> bool {
        if let Some(action) = &self.action {
            if &entry.action != action {
                return false;
            }
        }
        if let Some(cutoff) = cutoff {
            if entry.timestamp.date_naive() < cutoff {
                return false;
            }
        }
        if let Some(text) = &self.text {
            if !entry.matches_text(text) {
                return false;
            }
        }
        true
    }
}

/// Shared append-only activity history
pub struct ActivityLog {
    store: Mutex<JsonStore<Vec<LogEntry>>>,
}

impl ActivityLog {
    pub fn new(store: JsonStore<Vec<LogEntry>>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Record an action, dropping the oldest entries beyond capacity
    ///
    /// A corrupt log document fails the append before anything is
    /// written, so the file is left for inspection.
    pub fn append(
        &self,
        action: impl Into<String>,
        details: impl Into<String>,
        product_name: Option<String>,
        supplier_name: Option<String>,
    ) -> Result<(), StoreError> {
        let store = self.store.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = store.load()?;
        entries.push(LogEntry::new(action, details, product_name, supplier_name));
        if entries.len() > LOG_CAPACITY {
            let excess = entries.len() - LOG_CAPACITY;
            entries.drain(..excess);
        }
        store.save(&entries)
    }

    /// All entries in stored (chronological) order
    pub fn entries(&self) -> Result<Vec<LogEntry>, StoreError> {
        let store = self.store.lock().unwrap_or_else(|e| e.into_inner());
        store.load()
    }

    /// Entries matching every criterion, in stored order
    pub fn query(&self, query: &LogQuery) -> Result<Vec<LogEntry>, StoreError> {
        let cutoff = query.date.cutoff(Utc::now().date_naive());
        let entries = self.entries()?;
        Ok(entries
            .into_iter()
            .filter(|entry| query.matches(entry, cutoff))
            .collect())
    }

    /// Distinct action labels present in the log, sorted
    pub fn actions(&self) -> Result<BTreeSet<String>, StoreError> {
        Ok(self.entries()?.into_iter().map(|entry| entry.action).collect())
    }
}
