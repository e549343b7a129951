use blast_linkout::cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("blast_linkout=debug,info")
    } else {
        EnvFilter::new("blast_linkout=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Types(args) => {
            cli::types::run(&args, cli.format, cli.verbose)?;
        }
        cli::Commands::Link(args) => {
            cli::link::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Render(args) => {
            cli::render::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::CheckConfig(args) => {
            cli::check::run(&args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
