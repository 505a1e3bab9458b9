//! Filter enums for CLI commands
//!
//! Shared between the log and export commands so both accept the same
//! filter flags with the same behavior.

use clap::ValueEnum;

use crate::core::activity::DateWindow;
use crate::core::catalog::CategoryFilter;

/// Date filter for log queries
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum DateFilter {
    /// No date restriction - default
    #[default]
    All,
    /// Entries from today (UTC)
    Today,
    /// Entries from the last 7 days
    Last7,
    /// Entries from the last 30 days
    Last30,
}

impl DateFilter {
    /// Convert to the query-side date window
    pub fn window(&self) -> DateWindow {
        match self {
            DateFilter::All => DateWindow::AllTime,
            DateFilter::Today => DateWindow::Today,
            DateFilter::Last7 => DateWindow::Last7Days,
            DateFilter::Last30 => DateWindow::Last30Days,
        }
    }
}

impl std::fmt::Display for DateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateFilter::All => write!(f, "all"),
            DateFilter::Today => write!(f, "today"),
            DateFilter::Last7 => write!(f, "last7"),
            DateFilter::Last30 => write!(f, "last30"),
        }
    }
}

/// Build a category filter from an optional flag value
pub fn category_filter(flag: Option<&str>) -> CategoryFilter {
    match flag {
        Some(name) => CategoryFilter::Named(name.to_string()),
        None => CategoryFilter::All,
    }
}
