//! Interests command implementation for the giftmatch CLI.

use std::collections::BTreeSet;
use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use giftmatch_core::{Tag, catalog_interests, known_interests};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::io::{load_catalog, write_json};
use crate::{ARG_CATALOG, CliError};

/// CLI arguments for the `interests` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Print the interest vocabulary offered to shoppers, or the \
                 distinct interests found in a catalog when one is given.",
    about = "List interest tags"
)]
#[ortho_config(prefix = "GIFTMATCH")]
pub(crate) struct InterestsArgs {
    /// Path to a JSON array of catalog items.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
}

pub(crate) fn run_interests(args: InterestsArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_interests_with(args, &mut stdout)
}

pub(crate) fn run_interests_with(
    args: InterestsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    let interests = collect_interests(&merged)?;
    write_json(writer, &interests)
}

/// The vocabulary, or a catalog's interests when a catalog path is set.
pub(crate) fn collect_interests(args: &InterestsArgs) -> Result<BTreeSet<Tag>, CliError> {
    match &args.catalog {
        Some(path) => {
            let catalog = load_catalog(path)?;
            Ok(catalog_interests(&catalog))
        }
        None => Ok(known_interests()),
    }
}
