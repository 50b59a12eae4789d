use clap::Parser;
use coral::cli::{Cli, Commands};
use coral::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CORAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let printer = Printer::new();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Build(args) => coral::cli::build::run(args, config, &printer)?,
        Commands::Explain(args) => coral::cli::explain::run(args, config, &printer)?,
        Commands::Check(args) => coral::cli::check::run(args, config, &printer)?,
        Commands::Plugins(args) => coral::cli::plugins::run(args, config, &printer)?,
        Commands::Completions(args) => coral::cli::completions::run(args)?,
    }

    Ok(())
}
