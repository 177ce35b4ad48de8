//! Command-line interface for the Shelfwise book recommender.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod error;
mod prompt;
mod recommend;
mod report;

pub use error::CliError;
pub use prompt::ConsolePrompt;
pub use report::OutputFormat;

use recommend::{RecommendArgs, run_recommend};

const ARG_BOOKS: &str = "books";
const ARG_RATINGS: &str = "ratings";
const ARG_USER: &str = "user";
const ARG_AMOUNT: &str = "amount";
const ARG_OUTPUT: &str = "output";
const ARG_SEED: &str = "seed";
const ARG_FORMAT: &str = "format";
const ARG_NON_INTERACTIVE: &str = "non-interactive";
const ENV_USER: &str = "SHELFWISE_CMDS_RECOMMEND_USER";
const ENV_AMOUNT: &str = "SHELFWISE_CMDS_RECOMMEND_AMOUNT";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the Shelfwise CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration, data files, prompting
/// or recommendation fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
    }
}

/// Install a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded to the same subscriber.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("shelfwise: logging disabled: {err}");
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "shelfwise",
    about = "Recommend books from the ratings of similar readers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend unread books to a reader.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
