//! End-to-end tests for dataset loading, normalization and configuration

mod common;

use common::*;
use game_recommender::catalog::GameField;
use game_recommender::config::{AppConfig, CliConfig, FileConfig};
use game_recommender::{load_catalog, renormalize, DatasetLoadError, FillDefaults, GameRecord};

fn find<'a>(records: &'a [GameRecord], name: &str) -> &'a GameRecord {
    records
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("{} not in catalog", name))
}

#[test]
fn test_load_test_dataset() {
    let (_dir, path) = create_test_dataset().unwrap();
    let catalog = load_catalog(&path, &FillDefaults::default()).unwrap();

    assert_eq!(catalog.get_games_count(), GAMES_COUNT);
    assert_eq!(
        catalog.distinct_genres(),
        vec!["Action", "Puzzle", "RPG", "Shooter", "rpg"]
    );
    assert_eq!(catalog.distinct_platforms(), vec!["", "DS", "PS2", "X360"]);
    assert_eq!(catalog.distinct_ratings(), vec!["", "E", "M", "T"]);

    let names: Vec<&str> = catalog.records().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        vec![GAME_FFX, GAME_HALO, GAME_DQ, GAME_GOW, GAME_KH, GAME_MYSTERY]
    );
}

#[test]
fn test_loaded_records_are_normalized() {
    let (_dir, path) = create_test_dataset().unwrap();
    let catalog = load_catalog(&path, &FillDefaults::default()).unwrap();
    let records = catalog.records();

    let ffx = find(records, GAME_FFX);
    assert_eq!(ffx.year_of_release, Some(2001));
    assert_eq!(ffx.critic_score, 92.0);
    assert_eq!(ffx.user_score, 90.0);
    assert_close(ffx.sales.global, 8.05);

    // Missing critic score and "tbd" user score both fall back to the column mean,
    // with "tbd" counted as 0 toward the user mean
    let dq = find(records, GAME_DQ);
    assert_close(dq.critic_score, CRITIC_MEAN);
    assert_close(dq.user_score, USER_MEAN);

    let mystery = find(records, GAME_MYSTERY);
    assert_eq!(mystery.platform, "");
    assert_eq!(mystery.publisher, "");
    assert_eq!(mystery.rating, "");
    assert_eq!(mystery.year_of_release, None);
    assert_eq!(mystery.sales.global, 0.0);
    assert_close(mystery.critic_score, CRITIC_MEAN);
    assert_close(mystery.user_score, USER_MEAN);

    // Every score is positive once zeros are replaced
    assert!(records
        .iter()
        .all(|r| r.critic_score > 0.0 && r.user_score > 0.0));
}

#[test]
fn test_missing_critic_score_becomes_mean_of_others() {
    let csv = dataset_csv(&[
        "Unscored,PC,2010,Strategy,Pub,Dev,,7,T,0,0,0,0,0",
        "Fifty,PC,2010,Strategy,Pub,Dev,50,7,T,0,0,0,0,0",
        "Seventy,PC,2010,Strategy,Pub,Dev,70,7,T,0,0,0,0,0",
    ]);
    let (_dir, path) = write_dataset(&csv).unwrap();
    let catalog = load_catalog(&path, &FillDefaults::default()).unwrap();

    assert_eq!(catalog.records()[0].critic_score, 60.0);
    assert_eq!(catalog.records()[1].critic_score, 50.0);
    assert_eq!(catalog.records()[2].critic_score, 70.0);
}

#[test]
fn test_renormalizing_loaded_records_is_identity() {
    let (_dir, path) = create_test_dataset().unwrap();
    let catalog = load_catalog(&path, &FillDefaults::default()).unwrap();

    let again = renormalize(catalog.records());
    assert_eq!(again.as_slice(), catalog.records());
}

#[test]
fn test_minimal_columns_dataset() {
    let (_dir, path) = write_dataset("Name,Genre\nTetris,Puzzle\nDoom,Shooter\n").unwrap();
    let catalog = load_catalog(&path, &FillDefaults::default()).unwrap();

    assert_eq!(catalog.get_games_count(), 2);
    assert_eq!(catalog.records()[0].platform, "");
    assert_eq!(catalog.records()[1].critic_score, 0.0);
}

#[test]
fn test_header_only_dataset_is_empty() {
    let (_dir, path) = write_dataset(&dataset_csv(&[])).unwrap();
    let catalog = load_catalog(&path, &FillDefaults::default()).unwrap();

    assert_eq!(catalog.get_games_count(), 0);
    assert!(catalog.recommend_by_genre("RPG", 0.0).is_empty());
}

#[test]
fn test_missing_required_columns_is_fatal() {
    let (_dir, path) = write_dataset("Title,Platform\nTetris,GB\n").unwrap();
    let err = load_catalog(&path, &FillDefaults::default()).unwrap_err();

    match err {
        DatasetLoadError::MissingColumns(columns) => {
            assert_eq!(columns, vec!["Name".to_string(), "Genre".to_string()]);
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_ragged_row_is_fatal() {
    let (_dir, path) = write_dataset("Name,Genre\nTetris,Puzzle,extra\n").unwrap();
    let err = load_catalog(&path, &FillDefaults::default()).unwrap_err();
    assert!(matches!(err, DatasetLoadError::Csv(_)));
}

#[test]
fn test_missing_dataset_file_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_catalog(dir.path().join("nope.csv"), &FillDefaults::default()).unwrap_err();
    assert!(matches!(err, DatasetLoadError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn test_config_file_drives_loading() {
    let (dir, path) = create_test_dataset().unwrap();
    let config_path = create_test_config(
        &dir,
        &path,
        "threshold = 2.5\nshow_sales = false\n\n[fill_defaults]\nRating = \"RP\"\nPublisher = \"Unknown\"\n",
    )
    .unwrap();

    let file_config = FileConfig::load(&config_path).unwrap();
    let app_config = AppConfig::resolve(&CliConfig::default(), Some(file_config)).unwrap();

    assert_eq!(app_config.dataset_path, path);
    assert_eq!(app_config.threshold, 2.5);
    assert!(!app_config.show_sales);
    assert!(app_config.fill_defaults.covers(GameField::CriticScore));

    let catalog = load_catalog(&app_config.dataset_path, &app_config.fill_defaults).unwrap();
    let mystery = find(catalog.records(), GAME_MYSTERY);
    assert_eq!(mystery.rating, "RP");
    assert_eq!(mystery.publisher, "Unknown");
    // Present cells are untouched by fill defaults
    assert_eq!(find(catalog.records(), GAME_FFX).rating, "T");
}

#[test]
fn test_config_with_unknown_column_is_rejected() {
    let (dir, path) = create_test_dataset().unwrap();
    let config_path =
        create_test_config(&dir, &path, "[fill_defaults]\nMetascore = 0\n").unwrap();

    let file_config = FileConfig::load(&config_path).unwrap();
    let result = AppConfig::resolve(&CliConfig::default(), Some(file_config));
    assert!(result.unwrap_err().to_string().contains("Metascore"));
}
