//! CLI module - argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod filters;
pub mod helpers;

pub use args::{Cli, Commands, CompletionsArgs, GlobalOpts, OutputFormat};
pub use filters::DateFilter;
