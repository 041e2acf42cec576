//! File loading and JSON output shared by the subcommands.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use giftmatch_core::{CatalogItem, Criteria, ingest_catalog};
use serde::Serialize;
use serde_json::Value;

use crate::{ARG_CATALOG, ARG_CRITERIA, CliError};

/// Open a UTF-8 file path using ambient authority.
pub(crate) fn open_utf8_file(path: &Utf8Path) -> std::io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Decode the JSON document at `path`.
pub(crate) fn load_json(path: &Utf8Path, field: &'static str) -> Result<Value, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load a catalog, logging and dropping entries that cannot be ingested.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<CatalogItem>, CliError> {
    let Value::Array(entries) = load_json(path, ARG_CATALOG)? else {
        return Err(CliError::CatalogNotArray {
            path: path.to_path_buf(),
        });
    };
    let mut items = Vec::with_capacity(entries.len());
    for outcome in ingest_catalog(&entries) {
        match outcome {
            Ok(item) => items.push(item),
            Err(err) => log::warn!("skipping entry in {path}: {err}"),
        }
    }
    log::debug!("loaded {} of {} catalog entries from {path}", items.len(), entries.len());
    Ok(items)
}

/// Load recipient criteria; unusable fields are treated as absent.
pub(crate) fn load_criteria(path: &Utf8Path) -> Result<Criteria, CliError> {
    load_json(path, ARG_CRITERIA).map(|value| Criteria::from_json(&value))
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
