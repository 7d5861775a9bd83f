//! Dataset normalization.
//!
//! Turns raw rows into [`GameRecord`]s: missing cells are filled from a
//! [`FillDefaults`] table, the user score is rescaled from 0-10 to 0-100,
//! and zero critic/user scores are replaced with their column mean.

use crate::catalog::{FieldKind, GameField, GameRecord, RawGameRecord, Sales};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Factor applied to every user score, taking it from 0-10 to 0-100.
pub const USER_SCORE_SCALE: f64 = 10.0;

/// Value used for a missing cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FillValue {
    Number(f64),
    Text(String),
}

impl FillValue {
    pub fn fits(&self, kind: FieldKind) -> bool {
        match self {
            FillValue::Number(_) => kind != FieldKind::Text,
            FillValue::Text(_) => kind == FieldKind::Text,
        }
    }
}

/// Per-column fill defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct FillDefaults {
    values: HashMap<GameField, FillValue>,
}

impl Default for FillDefaults {
    fn default() -> Self {
        let mut values = HashMap::new();
        for field in [
            GameField::CriticScore,
            GameField::UserScore,
            GameField::NaSales,
            GameField::EuSales,
            GameField::JpSales,
            GameField::OtherSales,
            GameField::GlobalSales,
        ] {
            values.insert(field, FillValue::Number(0.0));
        }
        for field in [
            GameField::Platform,
            GameField::Genre,
            GameField::Publisher,
            GameField::Developer,
            GameField::Rating,
        ] {
            values.insert(field, FillValue::Text(String::new()));
        }
        FillDefaults { values }
    }
}

impl FillDefaults {
    pub fn with(mut self, field: GameField, value: FillValue) -> Self {
        self.values.insert(field, value);
        self
    }

    pub fn without(mut self, field: GameField) -> Self {
        self.values.remove(&field);
        self
    }

    pub fn get(&self, field: GameField) -> Option<&FillValue> {
        self.values.get(&field)
    }

    pub fn covers(&self, field: GameField) -> bool {
        self.values.contains_key(&field)
    }

    fn text(&self, field: GameField) -> String {
        match self.values.get(&field) {
            Some(FillValue::Text(text)) => text.clone(),
            _ => String::new(),
        }
    }

    fn number(&self, field: GameField) -> Option<f64> {
        match self.values.get(&field) {
            Some(FillValue::Number(n)) => Some(*n),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct NormalizeStats {
    filled_cells: usize,
    unparseable_cells: usize,
}

impl NormalizeStats {
    fn text(&mut self, raw: &RawGameRecord, field: GameField, defaults: &FillDefaults) -> String {
        match raw.get(field) {
            Some(value) => value.to_string(),
            None => {
                self.filled_cells += 1;
                defaults.text(field)
            }
        }
    }

    /// Missing cells take the fill default, unparseable ones degrade to 0.
    fn number(&mut self, raw: &RawGameRecord, field: GameField, defaults: &FillDefaults) -> f64 {
        match raw.get(field) {
            Some(value) => parse_number(value).unwrap_or_else(|| {
                self.unparseable_cells += 1;
                0.0
            }),
            None => {
                self.filled_cells += 1;
                defaults.number(field).unwrap_or(0.0)
            }
        }
    }

    fn year(&mut self, raw: &RawGameRecord, defaults: &FillDefaults) -> Option<i32> {
        let year = match raw.get(GameField::YearOfRelease) {
            Some(value) => {
                let parsed = parse_number(value);
                if parsed.is_none() {
                    self.unparseable_cells += 1;
                }
                parsed
            }
            None => defaults.number(GameField::YearOfRelease),
        };
        year.map(|y| y.round() as i32)
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Which score cells count toward their column mean. A cell is left out
/// only when it was missing and filled with zero; unparseable cells count as 0.
#[derive(Debug, Clone, Copy)]
struct ScoreSources {
    critic: bool,
    user: bool,
}

impl ScoreSources {
    const ALL_COUNTED: ScoreSources = ScoreSources {
        critic: true,
        user: true,
    };

    fn of(raw: &RawGameRecord, defaults: &FillDefaults) -> Self {
        let counted = |field| {
            raw.get(field).is_some() || defaults.number(field).map_or(false, |n| n != 0.0)
        };
        ScoreSources {
            critic: counted(GameField::CriticScore),
            user: counted(GameField::UserScore),
        }
    }
}

fn normalize_record(
    raw: &RawGameRecord,
    defaults: &FillDefaults,
    stats: &mut NormalizeStats,
) -> GameRecord {
    GameRecord {
        name: stats.text(raw, GameField::Name, defaults),
        platform: stats.text(raw, GameField::Platform, defaults),
        year_of_release: stats.year(raw, defaults),
        genre: stats.text(raw, GameField::Genre, defaults),
        publisher: stats.text(raw, GameField::Publisher, defaults),
        developer: stats.text(raw, GameField::Developer, defaults),
        critic_score: stats.number(raw, GameField::CriticScore, defaults),
        user_score: stats.number(raw, GameField::UserScore, defaults) * USER_SCORE_SCALE,
        rating: stats.text(raw, GameField::Rating, defaults),
        sales: Sales {
            na: stats.number(raw, GameField::NaSales, defaults),
            eu: stats.number(raw, GameField::EuSales, defaults),
            jp: stats.number(raw, GameField::JpSales, defaults),
            other: stats.number(raw, GameField::OtherSales, defaults),
            global: stats.number(raw, GameField::GlobalSales, defaults),
        },
    }
}

/// Replaces every exact zero in a column with the mean of its counted
/// cells. Genuine zeros count toward that mean. Returns how many cells
/// were replaced.
fn replace_zeros_with_mean<F, P>(
    records: &mut [GameRecord],
    sources: &[ScoreSources],
    counted: P,
    column: F,
) -> usize
where
    F: Fn(&mut GameRecord) -> &mut f64,
    P: Fn(&ScoreSources) -> bool,
{
    let (sum, count) = records
        .iter_mut()
        .zip(sources)
        .filter(|(_, source)| counted(*source))
        .fold((0.0_f64, 0usize), |(sum, count), (record, _)| {
            (sum + *column(record), count + 1)
        });
    if count == 0 {
        return 0;
    }
    let mean = sum / count as f64;

    let mut replaced = 0;
    for record in records.iter_mut() {
        let value = column(record);
        if *value == 0.0 {
            *value = mean;
            replaced += 1;
        }
    }
    replaced
}

fn replace_zero_scores(records: &mut [GameRecord], sources: &[ScoreSources]) {
    let critic = replace_zeros_with_mean(records, sources, |s| s.critic, |r| &mut r.critic_score);
    let user = replace_zeros_with_mean(records, sources, |s| s.user, |r| &mut r.user_score);
    debug!(
        "Replaced zero scores with column mean: {} critic, {} user",
        critic, user
    );
}

/// Normalizes raw dataset rows. Never fails: bad cells degrade to defaults.
pub fn normalize(raw_records: &[RawGameRecord], defaults: &FillDefaults) -> Vec<GameRecord> {
    let mut stats = NormalizeStats::default();
    let mut records: Vec<GameRecord> = raw_records
        .iter()
        .map(|raw| normalize_record(raw, defaults, &mut stats))
        .collect();
    debug!(
        "Normalized {} records: {} cells filled, {} unparseable cells set to 0",
        records.len(),
        stats.filled_cells,
        stats.unparseable_cells
    );

    let sources: Vec<ScoreSources> = raw_records
        .iter()
        .map(|raw| ScoreSources::of(raw, defaults))
        .collect();
    replace_zero_scores(&mut records, &sources);
    records
}

/// Re-runs the zero-score replacement over already normalized records,
/// counting every cell.
///
/// Scores are not rescaled a second time, so this is idempotent and
/// `renormalize(normalize(x)) == normalize(x)`.
pub fn renormalize(records: &[GameRecord]) -> Vec<GameRecord> {
    let mut records = records.to_vec();
    let sources = vec![ScoreSources::ALL_COUNTED; records.len()];
    replace_zero_scores(&mut records, &sources);
    records
}
