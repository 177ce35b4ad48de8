//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use shelfwise_cli::CliError;

fn main() {
    shelfwise_cli::init_logging();
    match shelfwise_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("shelfwise: {err}");
            std::process::exit(1);
        }
    }
}
