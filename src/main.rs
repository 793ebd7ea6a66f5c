//! Capslock Behaviors - ZMK devicetree generator
//!
//! Prints the devicetree include declaring the capslock behaviors and their
//! macOS variants. Run without arguments to write the default document to
//! stdout.

use capslock_behaviors::cli::{ConfigArgs, GenerateArgs};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Capslock Behaviors - generates the ZMK capslock behaviors devicetree
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    generate: GenerateArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the devicetree include (default)
    Generate(GenerateArgs),
    /// Inspect configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the generated document
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Some(Command::Generate(args)) => args.execute(),
        Some(Command::Config(args)) => args.execute(),
        None => cli.generate.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code.code());
    }
}
