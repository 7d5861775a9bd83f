use super::{GameRecord, RawGameRecord};
use crate::preprocess::{normalize, FillDefaults};
use crate::recommend::{
    Projection, RecommendFilters, RecommendationQuery, Recommender, ResultRow,
};
use std::collections::BTreeSet;

/// The normalized dataset together with the recommender that queries it.
///
/// Queries never write back into the records, every call returns a fresh list.
#[derive(Debug, Clone)]
pub struct GameCatalog {
    records: Vec<GameRecord>,
    recommender: Recommender,
}

impl GameCatalog {
    pub fn build(raw_records: &[RawGameRecord], defaults: &FillDefaults) -> GameCatalog {
        GameCatalog::from_records(normalize(raw_records, defaults))
    }

    /// Wraps records that are already normalized.
    pub fn from_records(records: Vec<GameRecord>) -> GameCatalog {
        GameCatalog {
            records,
            recommender: Recommender::default(),
        }
    }

    pub fn with_recommender(mut self, recommender: Recommender) -> GameCatalog {
        self.recommender = recommender;
        self
    }

    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn get_games_count(&self) -> usize {
        self.records.len()
    }

    pub fn distinct_genres(&self) -> Vec<String> {
        self.distinct(|r| &r.genre)
    }

    pub fn distinct_platforms(&self) -> Vec<String> {
        self.distinct(|r| &r.platform)
    }

    pub fn distinct_ratings(&self) -> Vec<String> {
        self.distinct(|r| &r.rating)
    }

    fn distinct<F>(&self, column: F) -> Vec<String>
    where
        F: Fn(&GameRecord) -> &String,
    {
        self.records
            .iter()
            .map(column)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn query(&self, query: &RecommendationQuery) -> Vec<ResultRow> {
        self.recommender.recommend(&self.records, query)
    }

    /// Genre-only recommendation, rows include global sales.
    pub fn recommend_by_genre(&self, genre: &str, threshold: f64) -> Vec<ResultRow> {
        self.query(&RecommendationQuery::genre(genre).with_threshold(threshold))
    }

    /// Genre recommendation narrowed by platform, minimum user score and rating.
    pub fn recommend(
        &self,
        genre: &str,
        platform: &str,
        min_user_score: f64,
        rating: &str,
        threshold: f64,
    ) -> Vec<ResultRow> {
        let filters = RecommendFilters::none()
            .with_platform(platform)
            .with_min_user_score(min_user_score)
            .with_rating(rating);
        self.query(
            &RecommendationQuery::genre(genre)
                .with_threshold(threshold)
                .with_filters(filters)
                .with_projection(Projection::Basic),
        )
    }
}
