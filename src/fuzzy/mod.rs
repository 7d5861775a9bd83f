//! Mamdani fuzzy inference with centroid defuzzification.

mod engine;
mod membership;
mod rule;
mod variable;

pub use engine::{
    EngineBuildError, FuzzyComputeError, FuzzyEngine, RecommendationScorer, GENRE_VARIABLE,
    HIGH_TERM, LOW_TERM, MATCH_TERM, MEDIUM_TERM, NOT_MATCH_TERM, RECOMMENDATION_VARIABLE,
};
pub use membership::TriangularMembership;
pub use rule::FuzzyRule;
pub use variable::FuzzyVariable;
