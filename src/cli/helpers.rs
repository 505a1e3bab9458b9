//! Shared helper functions for CLI commands

use console::style;

use crate::core::store::StoreError;

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Escape a string for CSV output
///
/// Handles commas, quotes, and newlines according to RFC 4180.
pub fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Report a tolerated document load failure on stderr
///
/// The command proceeds on the empty default afterwards.
pub fn warn_load(err: &StoreError) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), err);
}

/// Parse a "MIN:PRICE" pricing slab argument
pub fn parse_tier(s: &str) -> Result<(u32, f64), String> {
    let (min, price) = s
        .split_once(':')
        .ok_or_else(|| format!("Invalid slab '{}'. Use MIN:PRICE, e.g. 10:4.50", s))?;
    let min = min
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid slab quantity '{}'", min.trim()))?;
    let price = price
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid slab price '{}'", price.trim()))?;
    Ok((min, price))
}
