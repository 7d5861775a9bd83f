use std::fmt;

/// Single-antecedent rule: `IF antecedent IS <term> THEN consequent IS <term>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyRule {
    antecedent_term: String,
    consequent_term: String,
}

impl FuzzyRule {
    pub fn new(antecedent_term: &str, consequent_term: &str) -> Self {
        FuzzyRule {
            antecedent_term: antecedent_term.to_string(),
            consequent_term: consequent_term.to_string(),
        }
    }

    pub fn antecedent_term(&self) -> &str {
        &self.antecedent_term
    }

    pub fn consequent_term(&self) -> &str {
        &self.consequent_term
    }
}

impl fmt::Display for FuzzyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.antecedent_term, self.consequent_term)
    }
}
