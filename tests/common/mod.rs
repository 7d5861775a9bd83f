//! Common test infrastructure
//!
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{create_test_dataset, GAMES_COUNT};
//! use game_recommender::{load_catalog, FillDefaults};
//!
//! #[test]
//! fn test_load() {
//!     let (_dir, path) = create_test_dataset().unwrap();
//!     let catalog = load_catalog(&path, &FillDefaults::default()).unwrap();
//!     assert_eq!(catalog.get_games_count(), GAMES_COUNT);
//! }
//! ```

mod constants;
mod fixtures;

// Public API - this is what tests import
pub use constants::*;
#[allow(unused_imports)]
pub use fixtures::{create_test_config, create_test_dataset, dataset_csv, write_dataset};

use game_recommender::ResultRow;

#[allow(dead_code)]
pub fn names(rows: &[ResultRow]) -> Vec<&str> {
    rows.iter().map(|r| r.name.as_str()).collect()
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} but got {}",
        expected,
        actual
    );
}
