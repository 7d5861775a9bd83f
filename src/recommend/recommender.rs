//! Genre-driven recommendation over a normalized game list.

use super::{genre_match, GenreMatch, RecommendFilters};
use crate::catalog::GameRecord;
use crate::fuzzy::{FuzzyEngine, RecommendationScorer};
use serde::Serialize;
use tracing::{debug, warn};

pub const DEFAULT_THRESHOLD: f64 = 5.0;

/// Score given to a genre-match value the engine could not defuzzify.
pub const FAILED_SCORE: f64 = 0.0;

/// The recommendation score depends only on the genre match, so both
/// possible values are computed once per scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreTable {
    matched: f64,
    not_matched: f64,
}

impl ScoreTable {
    pub fn from_scorer(scorer: &dyn RecommendationScorer) -> Self {
        ScoreTable {
            matched: score_or_fallback(scorer, GenreMatch::Match),
            not_matched: score_or_fallback(scorer, GenreMatch::NotMatch),
        }
    }

    pub fn score(&self, genre_match: GenreMatch) -> f64 {
        match genre_match {
            GenreMatch::Match => self.matched,
            GenreMatch::NotMatch => self.not_matched,
        }
    }
}

fn score_or_fallback(scorer: &dyn RecommendationScorer, genre_match: GenreMatch) -> f64 {
    match scorer.score(genre_match.crisp()) {
        Ok(score) => score,
        Err(err) => {
            warn!(
                "Fuzzy inference failed for {:?}, scoring {} instead: {}",
                genre_match, FAILED_SCORE, err
            );
            FAILED_SCORE
        }
    }
}

/// Which fields a result row carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Includes global sales.
    WithSales,
    Basic,
}

/// A recommended game, projected to the displayed fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub name: String,
    pub platform: String,
    pub year_of_release: Option<i32>,
    pub genre: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_sales: Option<f64>,
    pub recommendation: f64,
}

impl ResultRow {
    fn project(record: &GameRecord, recommendation: f64, projection: Projection) -> Self {
        ResultRow {
            name: record.name.clone(),
            platform: record.platform.clone(),
            year_of_release: record.year_of_release,
            genre: record.genre.clone(),
            publisher: record.publisher.clone(),
            global_sales: match projection {
                Projection::WithSales => Some(record.sales.global),
                Projection::Basic => None,
            },
            recommendation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub genre: String,
    pub threshold: f64,
    pub filters: RecommendFilters,
    pub projection: Projection,
}

impl RecommendationQuery {
    /// Genre-only query with the default threshold, projecting sales.
    pub fn genre(genre: &str) -> Self {
        RecommendationQuery {
            genre: genre.to_string(),
            threshold: DEFAULT_THRESHOLD,
            filters: RecommendFilters::none(),
            projection: Projection::WithSales,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_filters(mut self, filters: RecommendFilters) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Recommender {
    scores: ScoreTable,
}

impl Default for Recommender {
    fn default() -> Self {
        Recommender::new(&FuzzyEngine::game_recommendation())
    }
}

impl Recommender {
    pub fn new(scorer: &dyn RecommendationScorer) -> Self {
        let scores = ScoreTable::from_scorer(scorer);
        debug!("Recommender score table: {:?}", scores);
        Recommender { scores }
    }

    pub fn score_table(&self) -> ScoreTable {
        self.scores
    }

    pub fn score(&self, record: &GameRecord, input_genre: &str) -> f64 {
        self.scores
            .score(genre_match(Some(record.genre.as_str()), Some(input_genre)))
    }

    /// Records clearing the threshold (inclusive) and every filter, in input order.
    /// The input is left untouched.
    pub fn recommend(&self, records: &[GameRecord], query: &RecommendationQuery) -> Vec<ResultRow> {
        let rows: Vec<ResultRow> = records
            .iter()
            .filter_map(|record| {
                let recommendation = self.score(record, &query.genre);
                if recommendation >= query.threshold && query.filters.matches(record) {
                    Some(ResultRow::project(record, recommendation, query.projection))
                } else {
                    None
                }
            })
            .collect();
        debug!(
            "Query {:?} kept {} of {} records",
            query,
            rows.len(),
            records.len()
        );
        rows
    }
}
