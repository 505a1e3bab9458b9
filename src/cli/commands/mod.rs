//! CLI command implementations

pub mod completions;
pub mod export;
pub mod init;
pub mod log;
pub mod product;
pub mod source;
pub mod utils;
pub mod validate;
