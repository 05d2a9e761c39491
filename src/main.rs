use clap::Parser;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod parsing;
mod profile;
mod scoring;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Diagnostics are part of the contract, so info level is on by default;
    // verbosity adds per-record scoring detail
    let filter = if cli.verbose {
        EnvFilter::new("hexascan=debug,info")
    } else {
        EnvFilter::new("info")
    };

    // Timestamped plain-text diagnostic lines on the error stream,
    // classification lines alone on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(false)
        .with_ansi(false)
        .with_timer(ChronoLocal::new("%Y/%m/%d %H:%M:%S".to_string()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Classify(args) => {
            cli::classify::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Profile(args) => {
            cli::profile::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
