//! `sst completions` command - Shell completion scripts

use clap::CommandFactory;
use miette::Result;

use crate::cli::{Cli, CompletionsArgs};

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "sst", &mut std::io::stdout());
    Ok(())
}
