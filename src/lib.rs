//! Game Recommender Library
//!
//! Scores video game catalog records against a requested genre through a small
//! fuzzy inference engine and filters them into a recommendation list.

pub mod catalog;
pub mod cli_style;
pub mod config;
pub mod fuzzy;
pub mod preprocess;
pub mod recommend;

// Re-export commonly used types for convenience
pub use catalog::{load_catalog, DatasetLoadError, GameCatalog, GameRecord, RawGameRecord};
pub use fuzzy::{FuzzyComputeError, FuzzyEngine, RecommendationScorer};
pub use preprocess::{normalize, renormalize, FillDefaults, FillValue};
pub use recommend::{
    RecommendFilters, RecommendationQuery, Recommender, ResultRow, DEFAULT_THRESHOLD,
};
