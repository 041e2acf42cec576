//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use env_logger::{Env, Target};
use giftmatch_cli::CliError;

fn main() -> eyre::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();
    match giftmatch_cli::run() {
        Ok(()) => Ok(()),
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => Err(eyre::Report::new(err)),
    }
}
