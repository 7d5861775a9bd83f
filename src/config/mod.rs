mod file_config;

pub use file_config::FileConfig;

use crate::catalog::{FieldKind, GameField};
use crate::preprocess::{FillDefaults, FillValue};
use crate::recommend::DEFAULT_THRESHOLD;
use anyhow::{anyhow, bail, Result};
use std::collections::HashMap;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub dataset_path: Option<PathBuf>,
    pub threshold: f64,
    pub show_sales: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            dataset_path: None,
            threshold: DEFAULT_THRESHOLD,
            show_sales: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dataset_path: PathBuf,
    pub threshold: f64,
    pub show_sales: bool,
    pub fill_defaults: FillDefaults,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let dataset_path = file
            .dataset_path
            .map(PathBuf::from)
            .or_else(|| cli.dataset_path.clone())
            .ok_or_else(|| {
                anyhow!("dataset_path must be specified on the command line or in config file")
            })?;

        if !dataset_path.exists() {
            bail!("Dataset file does not exist: {:?}", dataset_path);
        }
        if !dataset_path.is_file() {
            bail!("dataset_path is not a file: {:?}", dataset_path);
        }

        let threshold = file.threshold.unwrap_or(cli.threshold);
        if !threshold.is_finite() {
            bail!("threshold must be a finite number, got {}", threshold);
        }

        let show_sales = file.show_sales.unwrap_or(cli.show_sales);

        let fill_defaults = match file.fill_defaults {
            Some(overrides) => resolve_fill_defaults(overrides)?,
            None => FillDefaults::default(),
        };

        Ok(Self {
            dataset_path,
            threshold,
            show_sales,
            fill_defaults,
        })
    }
}

/// Applies `[fill_defaults]` entries on top of the built-in table.
fn resolve_fill_defaults(overrides: HashMap<String, FillValue>) -> Result<FillDefaults> {
    let mut defaults = FillDefaults::default();
    for (column, value) in overrides {
        let field: GameField = column.parse().map_err(|err: String| anyhow!(err))?;
        if !value.fits(field.kind()) {
            let expected = match field.kind() {
                FieldKind::Text => "a string",
                FieldKind::Numeric | FieldKind::Year => "a number",
            };
            bail!(
                "Fill default for {} must be {}, got {:?}",
                field,
                expected,
                value
            );
        }
        if let FillValue::Number(n) = value {
            if !n.is_finite() {
                bail!("Fill default for {} must be a finite number, got {}", field, n);
            }
        }
        defaults = defaults.with(field, value);
    }
    Ok(defaults)
}
