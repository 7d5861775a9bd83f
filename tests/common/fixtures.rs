//! Test fixture creation for datasets and config files

use super::constants::*;
use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `contents` as `games.csv` in a fresh temporary directory.
/// Returns (temp_dir, dataset_path); the file lives as long as `temp_dir`.
pub fn write_dataset(contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let dataset_path = dir.path().join("games.csv");
    fs::write(&dataset_path, contents)?;
    Ok((dir, dataset_path))
}

/// Builds CSV text from the full header and the given rows.
pub fn dataset_csv(rows: &[&str]) -> String {
    let mut csv = String::from(FULL_HEADER);
    for row in rows {
        csv.push('\n');
        csv.push_str(row);
    }
    csv.push('\n');
    csv
}

/// Creates the shared six-game test dataset.
pub fn create_test_dataset() -> Result<(TempDir, PathBuf)> {
    write_dataset(&dataset_csv(CATALOG_ROWS))
}

/// Writes a TOML config pointing at `dataset_path` next to it, with `extra`
/// appended verbatim.
pub fn create_test_config(dir: &TempDir, dataset_path: &PathBuf, extra: &str) -> Result<PathBuf> {
    let config_path = dir.path().join("recommender.toml");
    let contents = format!(
        "dataset_path = {:?}\n{}",
        dataset_path.to_string_lossy(),
        extra
    );
    fs::write(&config_path, contents)?;
    Ok(config_path)
}
