// crates/reflow-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "reflow")]
#[command(about = "Insert a line break after every N characters (code points)", long_about = None)]
pub struct Cli {
    /// Log completed operations to stderr (RUST_LOG overrides)
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize line endings and break every line after each N code points
    Format(cmd::format::FormatArgs),

    /// Count code points, line breaks excluded
    Count(cmd::count::CountArgs),

    /// Report line/chunk statistics and a content digest for a width
    Stats(cmd::stats::StatsArgs),

    /// Check a formatted file against its original (content + line widths)
    Verify(cmd::verify::VerifyArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Format(args) => cmd::format::run(args),
        Commands::Count(args) => cmd::count::run(args),
        Commands::Stats(args) => cmd::stats::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
    }
}
