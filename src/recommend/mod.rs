mod filters;
mod genre_match;
mod recommender;

pub use filters::RecommendFilters;
pub use genre_match::{genre_match, GenreMatch};
pub use recommender::{
    Projection, RecommendationQuery, Recommender, ResultRow, ScoreTable, DEFAULT_THRESHOLD,
    FAILED_SCORE,
};
