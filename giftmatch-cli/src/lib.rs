//! Command-line interface for ranking gift catalogs.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod interests;
mod io;
mod rank;

pub use error::CliError;

use interests::{InterestsArgs, run_interests};
use rank::{RankArgs, run_rank};

pub(crate) const ARG_CRITERIA: &str = "criteria";
pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_MIN_SCORE: &str = "min-score";
pub(crate) const ARG_PROFILE: &str = "profile";
pub(crate) const ARG_ALLOW_PARTIAL: &str = "allow-partial";
pub(crate) const ENV_CRITERIA: &str = "GIFTMATCH_CMDS_RANK_CRITERIA_PATH";
pub(crate) const ENV_CATALOG: &str = "GIFTMATCH_CMDS_RANK_CATALOG";

/// Run the giftmatch CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Interests(args) => run_interests(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "giftmatch",
    about = "Score and rank gift catalogs against recipient criteria",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a catalog against one set of recipient criteria.
    Rank(RankArgs),
    /// List the interest vocabulary.
    Interests(InterestsArgs),
}

#[cfg(test)]
mod tests;
