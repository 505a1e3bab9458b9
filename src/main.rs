use clap::Parser;
use miette::Result;
use sst::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => sst::cli::commands::init::run(&cli.global),
        Commands::Product(cmd) => sst::cli::commands::product::run(cmd, &cli.global),
        Commands::Source(cmd) => sst::cli::commands::source::run(cmd, &cli.global),
        Commands::Log(cmd) => sst::cli::commands::log::run(cmd, &cli.global),
        Commands::Export(cmd) => sst::cli::commands::export::run(cmd, &cli.global),
        Commands::Validate(args) => sst::cli::commands::validate::run(args, &cli.global),
        Commands::Completions(args) => sst::cli::commands::completions::run(args),
    }
}
