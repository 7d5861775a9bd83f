use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Columns of the game dataset, named after their CSV headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameField {
    Name,
    Platform,
    YearOfRelease,
    Genre,
    Publisher,
    Developer,
    CriticScore,
    UserScore,
    Rating,
    NaSales,
    EuSales,
    JpSales,
    OtherSales,
    GlobalSales,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
    /// Numeric, but allowed to stay empty after normalization.
    Year,
}

impl GameField {
    pub const ALL: [GameField; 14] = [
        GameField::Name,
        GameField::Platform,
        GameField::YearOfRelease,
        GameField::Genre,
        GameField::Publisher,
        GameField::Developer,
        GameField::CriticScore,
        GameField::UserScore,
        GameField::Rating,
        GameField::NaSales,
        GameField::EuSales,
        GameField::JpSales,
        GameField::OtherSales,
        GameField::GlobalSales,
    ];

    pub fn column_name(&self) -> &'static str {
        match self {
            GameField::Name => "Name",
            GameField::Platform => "Platform",
            GameField::YearOfRelease => "Year_of_Release",
            GameField::Genre => "Genre",
            GameField::Publisher => "Publisher",
            GameField::Developer => "Developer",
            GameField::CriticScore => "Critic_Score",
            GameField::UserScore => "User_Score",
            GameField::Rating => "Rating",
            GameField::NaSales => "NA_Sales",
            GameField::EuSales => "EU_Sales",
            GameField::JpSales => "JP_Sales",
            GameField::OtherSales => "Other_Sales",
            GameField::GlobalSales => "Global_Sales",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            GameField::Name
            | GameField::Platform
            | GameField::Genre
            | GameField::Publisher
            | GameField::Developer
            | GameField::Rating => FieldKind::Text,
            GameField::YearOfRelease => FieldKind::Year,
            GameField::CriticScore
            | GameField::UserScore
            | GameField::NaSales
            | GameField::EuSales
            | GameField::JpSales
            | GameField::OtherSales
            | GameField::GlobalSales => FieldKind::Numeric,
        }
    }

    /// Columns a dataset can never be loaded without, whatever the fill defaults say.
    pub fn is_structural(&self) -> bool {
        matches!(self, GameField::Name | GameField::Genre)
    }
}

impl fmt::Display for GameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for GameField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameField::ALL
            .iter()
            .find(|field| field.column_name() == s)
            .copied()
            .ok_or_else(|| format!("Unknown dataset column '{}'", s))
    }
}

/// A dataset row exactly as read, every cell possibly missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawGameRecord {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Platform", default)]
    pub platform: Option<String>,
    #[serde(rename = "Year_of_Release", default)]
    pub year_of_release: Option<String>,
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    #[serde(rename = "Publisher", default)]
    pub publisher: Option<String>,
    #[serde(rename = "Developer", default)]
    pub developer: Option<String>,
    #[serde(rename = "Critic_Score", default)]
    pub critic_score: Option<String>,
    #[serde(rename = "User_Score", default)]
    pub user_score: Option<String>,
    #[serde(rename = "Rating", default)]
    pub rating: Option<String>,
    #[serde(rename = "NA_Sales", default)]
    pub na_sales: Option<String>,
    #[serde(rename = "EU_Sales", default)]
    pub eu_sales: Option<String>,
    #[serde(rename = "JP_Sales", default)]
    pub jp_sales: Option<String>,
    #[serde(rename = "Other_Sales", default)]
    pub other_sales: Option<String>,
    #[serde(rename = "Global_Sales", default)]
    pub global_sales: Option<String>,
}

impl RawGameRecord {
    pub fn get(&self, field: GameField) -> Option<&str> {
        let cell = match field {
            GameField::Name => &self.name,
            GameField::Platform => &self.platform,
            GameField::YearOfRelease => &self.year_of_release,
            GameField::Genre => &self.genre,
            GameField::Publisher => &self.publisher,
            GameField::Developer => &self.developer,
            GameField::CriticScore => &self.critic_score,
            GameField::UserScore => &self.user_score,
            GameField::Rating => &self.rating,
            GameField::NaSales => &self.na_sales,
            GameField::EuSales => &self.eu_sales,
            GameField::JpSales => &self.jp_sales,
            GameField::OtherSales => &self.other_sales,
            GameField::GlobalSales => &self.global_sales,
        };
        cell.as_deref()
    }

    /// Sets a cell, used to build records in memory.
    pub fn with(mut self, field: GameField, value: &str) -> Self {
        let value = Some(value.to_string());
        match field {
            GameField::Name => self.name = value,
            GameField::Platform => self.platform = value,
            GameField::YearOfRelease => self.year_of_release = value,
            GameField::Genre => self.genre = value,
            GameField::Publisher => self.publisher = value,
            GameField::Developer => self.developer = value,
            GameField::CriticScore => self.critic_score = value,
            GameField::UserScore => self.user_score = value,
            GameField::Rating => self.rating = value,
            GameField::NaSales => self.na_sales = value,
            GameField::EuSales => self.eu_sales = value,
            GameField::JpSales => self.jp_sales = value,
            GameField::OtherSales => self.other_sales = value,
            GameField::GlobalSales => self.global_sales = value,
        }
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Sales {
    pub na: f64,
    pub eu: f64,
    pub jp: f64,
    pub other: f64,
    pub global: f64,
}

/// A normalized catalog entry: every score and sales figure is defined,
/// every text field is a (possibly empty) string, `user_score` is on a 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub name: String,
    pub platform: String,
    pub year_of_release: Option<i32>,
    pub genre: String,
    pub publisher: String,
    pub developer: String,
    pub critic_score: f64,
    pub user_score: f64,
    pub rating: String,
    pub sales: Sales,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names_round_trip_through_from_str() {
        for field in GameField::ALL {
            assert_eq!(field.column_name().parse::<GameField>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let err = "Metascore".parse::<GameField>().unwrap_err();
        assert!(err.contains("Metascore"));
        // Header names are case-sensitive
        assert!("genre".parse::<GameField>().is_err());
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(GameField::Genre.kind(), FieldKind::Text);
        assert_eq!(GameField::UserScore.kind(), FieldKind::Numeric);
        assert_eq!(GameField::YearOfRelease.kind(), FieldKind::Year);
        assert!(GameField::Name.is_structural());
        assert!(!GameField::Rating.is_structural());
    }

    #[test]
    fn test_raw_record_builder_and_getter() {
        let raw = RawGameRecord::default()
            .with(GameField::Name, "Okami")
            .with(GameField::UserScore, "tbd");
        assert_eq!(raw.get(GameField::Name), Some("Okami"));
        assert_eq!(raw.get(GameField::UserScore), Some("tbd"));
        assert_eq!(raw.get(GameField::Genre), None);
    }
}
