use crate::preprocess::FillValue;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub dataset_path: Option<String>,
    pub threshold: Option<f64>,
    pub show_sales: Option<bool>,

    /// Per-column fill defaults, keyed by dataset column name.
    pub fill_defaults: Option<HashMap<String, FillValue>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: FileConfig = toml::from_str(
            r#"
            dataset_path = "data/games.csv"
            threshold = 7.5
            show_sales = false

            [fill_defaults]
            Critic_Score = 0
            User_Score = 0.0
            Rating = "RP"
            "#,
        )
        .unwrap();

        assert_eq!(config.dataset_path.as_deref(), Some("data/games.csv"));
        assert_eq!(config.threshold, Some(7.5));
        assert_eq!(config.show_sales, Some(false));

        let fill_defaults = config.fill_defaults.unwrap();
        assert_eq!(fill_defaults["Critic_Score"], FillValue::Number(0.0));
        assert_eq!(fill_defaults["User_Score"], FillValue::Number(0.0));
        assert_eq!(fill_defaults["Rating"], FillValue::Text("RP".to_string()));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.dataset_path.is_none());
        assert!(config.threshold.is_none());
        assert!(config.fill_defaults.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = FileConfig::load(Path::new("/nonexistent/recommender.toml"));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }
}
