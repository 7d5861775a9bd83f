//! Dataset loading from CSV.

use super::{GameCatalog, GameField, RawGameRecord};
use crate::preprocess::FillDefaults;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// The dataset could not be read. Always fatal.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("Could not open dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// A column may be absent only if missing cells have something to fall back on.
fn is_required(field: GameField, defaults: &FillDefaults) -> bool {
    if field.is_structural() {
        return true;
    }
    field != GameField::YearOfRelease && !defaults.covers(field)
}

fn check_columns(
    headers: &csv::StringRecord,
    defaults: &FillDefaults,
) -> Result<(), DatasetLoadError> {
    let missing: Vec<String> = GameField::ALL
        .iter()
        .filter(|field| is_required(**field, defaults))
        .filter(|field| !headers.iter().any(|h| h == field.column_name()))
        .map(|field| field.column_name().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(DatasetLoadError::MissingColumns(missing))
    }
}

/// Reads the raw rows of a CSV dataset with a header row.
pub fn read_raw_records<R: Read>(
    reader: R,
    defaults: &FillDefaults,
) -> Result<Vec<RawGameRecord>, DatasetLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    check_columns(csv_reader.headers()?, defaults)?;

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<RawGameRecord>() {
        records.push(row?);
    }
    Ok(records)
}

/// Loads and normalizes the dataset at `path`.
pub fn load_catalog<P: AsRef<Path>>(
    path: P,
    defaults: &FillDefaults,
) -> Result<GameCatalog, DatasetLoadError> {
    let path = path.as_ref();
    info!("Loading game dataset from {:?}...", path);

    let file = File::open(path).map_err(|source| DatasetLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw_records = read_raw_records(file, defaults)?;
    let catalog = GameCatalog::build(&raw_records, defaults);

    info!(
        "Catalog has:\n{} games\n{} genres\n{} platforms\n{} ratings",
        catalog.get_games_count(),
        catalog.distinct_genres().len(),
        catalog.distinct_platforms().len(),
        catalog.distinct_ratings().len()
    );
    Ok(catalog)
}
