//! SST: SKU Sourcing Toolkit
//!
//! A small toolkit for managing a product catalog, per-product supplier
//! quotes, and a bounded activity log as plain JSON files.

pub mod cli;
pub mod core;
pub mod entities;
