//! Secondary predicates applied on top of the score threshold.

use crate::catalog::GameRecord;
use serde::{Deserialize, Serialize};

/// Optional conjunctive filters. An unset filter accepts every record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendFilters {
    /// Case-insensitive substring of the platform.
    pub platform: Option<String>,
    /// Minimum user score, on the normalized 0-100 scale.
    pub min_user_score: Option<f64>,
    /// Case-insensitive substring of the content rating.
    pub rating: Option<String>,
}

impl RecommendFilters {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: &str) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    pub fn with_min_user_score(mut self, min_user_score: f64) -> Self {
        self.min_user_score = Some(min_user_score);
        self
    }

    pub fn with_rating(mut self, rating: &str) -> Self {
        self.rating = Some(rating.to_string());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.min_user_score.is_none() && self.rating.is_none()
    }

    pub fn matches(&self, record: &GameRecord) -> bool {
        if let Some(platform) = &self.platform {
            if !contains_ignore_case(&record.platform, platform) {
                return false;
            }
        }
        if let Some(min_user_score) = self.min_user_score {
            if record.user_score < min_user_score {
                return false;
            }
        }
        if let Some(rating) = &self.rating {
            if !contains_ignore_case(&record.rating, rating) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
