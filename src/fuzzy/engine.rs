use super::{FuzzyRule, FuzzyVariable, TriangularMembership};
use thiserror::Error;

pub const GENRE_VARIABLE: &str = "genre";
pub const MATCH_TERM: &str = "match";
pub const NOT_MATCH_TERM: &str = "not_match";

pub const RECOMMENDATION_VARIABLE: &str = "recommendation";
pub const LOW_TERM: &str = "low";
pub const MEDIUM_TERM: &str = "medium";
pub const HIGH_TERM: &str = "high";

/// Inference could not produce a crisp value for an input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyComputeError {
    #[error("No rule fired for input {input}, the aggregated membership is empty")]
    NoRuleFired { input: f64 },

    #[error("Input {0} is not a finite number")]
    NonFiniteInput(f64),
}

/// An engine definition that can't be evaluated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineBuildError {
    #[error("Invalid triangle breakpoints ({a}, {b}, {c}), expected finite a <= b <= c")]
    InvalidBreakpoints { a: f64, b: f64, c: f64 },

    #[error("Variable '{variable}' has an empty universe")]
    EmptyUniverse { variable: String },

    #[error("Universe of variable '{variable}' must be finite and strictly increasing")]
    UnorderedUniverse { variable: String },

    #[error("Variable '{variable}' already has a term named '{term}'")]
    DuplicateTerm { variable: String, term: String },

    #[error("Variable '{variable}' has no term named '{term}'")]
    UnknownTerm { variable: String, term: String },

    #[error("The rule base is empty")]
    NoRules,
}

/// Turns a crisp genre-match signal into a recommendation score.
pub trait RecommendationScorer {
    fn score(&self, genre_match: f64) -> Result<f64, FuzzyComputeError>;
}

/// A rule with its terms resolved, the consequent sampled over its universe.
#[derive(Debug, Clone)]
struct CompiledRule {
    antecedent: TriangularMembership,
    consequent_curve: Vec<f64>,
}

/// Single-input Mamdani engine.
///
/// Firing strength is the antecedent degree, implication clips the consequent
/// at that strength, aggregation takes the pointwise maximum and the output
/// is the discrete centroid over the consequent universe. The engine holds no
/// per-call state, so one instance can serve any number of calls.
#[derive(Debug, Clone)]
pub struct FuzzyEngine {
    antecedent: FuzzyVariable,
    consequent: FuzzyVariable,
    rules: Vec<FuzzyRule>,
    compiled: Vec<CompiledRule>,
}

impl FuzzyEngine {
    pub fn new(
        antecedent: FuzzyVariable,
        consequent: FuzzyVariable,
        rules: Vec<FuzzyRule>,
    ) -> Result<Self, EngineBuildError> {
        if rules.is_empty() {
            return Err(EngineBuildError::NoRules);
        }

        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules.iter() {
            let antecedent_mf = *antecedent.term(rule.antecedent_term()).ok_or_else(|| {
                EngineBuildError::UnknownTerm {
                    variable: antecedent.name().to_string(),
                    term: rule.antecedent_term().to_string(),
                }
            })?;
            let consequent_mf = consequent.term(rule.consequent_term()).ok_or_else(|| {
                EngineBuildError::UnknownTerm {
                    variable: consequent.name().to_string(),
                    term: rule.consequent_term().to_string(),
                }
            })?;
            compiled.push(CompiledRule {
                antecedent: antecedent_mf,
                consequent_curve: consequent
                    .universe()
                    .iter()
                    .map(|x| consequent_mf.degree(*x))
                    .collect(),
            });
        }

        Ok(FuzzyEngine {
            antecedent,
            consequent,
            rules,
            compiled,
        })
    }

    /// The fixed genre -> recommendation engine:
    /// `match => high` and `not_match => low`.
    pub fn game_recommendation() -> Self {
        Self::build_game_recommendation()
            .expect("Invalid recommendation rule base, this should be fixed in code.")
    }

    fn build_game_recommendation() -> Result<Self, EngineBuildError> {
        let genre = FuzzyVariable::with_integer_universe(GENRE_VARIABLE, 0, 2)?
            .with_term(MATCH_TERM, TriangularMembership::new(1.0, 1.0, 1.0)?)?
            .with_term(NOT_MATCH_TERM, TriangularMembership::new(0.0, 0.0, 0.0)?)?;

        let recommendation = FuzzyVariable::with_integer_universe(RECOMMENDATION_VARIABLE, 0, 11)?
            .with_term(LOW_TERM, TriangularMembership::new(0.0, 0.0, 5.0)?)?
            .with_term(MEDIUM_TERM, TriangularMembership::new(0.0, 5.0, 10.0)?)?
            .with_term(HIGH_TERM, TriangularMembership::new(5.0, 10.0, 10.0)?)?;

        let rules = vec![
            FuzzyRule::new(MATCH_TERM, HIGH_TERM),
            FuzzyRule::new(NOT_MATCH_TERM, LOW_TERM),
        ];

        Self::new(genre, recommendation, rules)
    }

    pub fn antecedent(&self) -> &FuzzyVariable {
        &self.antecedent
    }

    pub fn consequent(&self) -> &FuzzyVariable {
        &self.consequent
    }

    pub fn rules(&self) -> &[FuzzyRule] {
        &self.rules
    }

    /// Firing strength of each rule for `input`, in rule order.
    pub fn firing_strengths(&self, input: f64) -> Vec<f64> {
        self.compiled
            .iter()
            .map(|rule| rule.antecedent.degree(input))
            .collect()
    }

    /// Aggregated output membership, one value per consequent universe point.
    pub fn aggregate(&self, input: f64) -> Vec<f64> {
        let strengths = self.firing_strengths(input);
        let mut aggregated = vec![0.0_f64; self.consequent.universe().len()];
        for (rule, strength) in self.compiled.iter().zip(strengths) {
            for (out, degree) in aggregated.iter_mut().zip(rule.consequent_curve.iter()) {
                *out = out.max(degree.min(strength));
            }
        }
        aggregated
    }

    pub fn score(&self, input: f64) -> Result<f64, FuzzyComputeError> {
        if !input.is_finite() {
            return Err(FuzzyComputeError::NonFiniteInput(input));
        }

        let aggregated = self.aggregate(input);
        let total: f64 = aggregated.iter().sum();
        if total <= 0.0 {
            return Err(FuzzyComputeError::NoRuleFired { input });
        }

        let weighted: f64 = self
            .consequent
            .universe()
            .iter()
            .zip(aggregated.iter())
            .map(|(x, mu)| x * mu)
            .sum();
        Ok(weighted / total)
    }
}

impl RecommendationScorer for FuzzyEngine {
    fn score(&self, genre_match: f64) -> Result<f64, FuzzyComputeError> {
        FuzzyEngine::score(self, genre_match)
    }
}
