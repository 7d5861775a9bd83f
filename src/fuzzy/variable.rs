use super::{EngineBuildError, TriangularMembership};

/// A fuzzy antecedent or consequent: a discretized universe and its named terms.
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyVariable {
    name: String,
    universe: Vec<f64>,
    terms: Vec<(String, TriangularMembership)>,
}

impl FuzzyVariable {
    /// Creates a variable over the given sample points, which must be
    /// finite and strictly increasing.
    pub fn new(name: &str, universe: Vec<f64>) -> Result<Self, EngineBuildError> {
        if universe.is_empty() {
            return Err(EngineBuildError::EmptyUniverse {
                variable: name.to_string(),
            });
        }
        let ordered = universe.iter().all(|x| x.is_finite())
            && universe.windows(2).all(|pair| pair[0] < pair[1]);
        if !ordered {
            return Err(EngineBuildError::UnorderedUniverse {
                variable: name.to_string(),
            });
        }
        Ok(FuzzyVariable {
            name: name.to_string(),
            universe,
            terms: Vec::new(),
        })
    }

    /// Universe made of every integer in `start..end`.
    pub fn with_integer_universe(name: &str, start: i32, end: i32) -> Result<Self, EngineBuildError> {
        Self::new(name, (start..end).map(f64::from).collect())
    }

    pub fn with_term(
        mut self,
        term: &str,
        membership: TriangularMembership,
    ) -> Result<Self, EngineBuildError> {
        if self.term(term).is_some() {
            return Err(EngineBuildError::DuplicateTerm {
                variable: self.name,
                term: term.to_string(),
            });
        }
        self.terms.push((term.to_string(), membership));
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn universe(&self) -> &[f64] {
        &self.universe
    }

    pub fn term(&self, term: &str) -> Option<&TriangularMembership> {
        self.terms
            .iter()
            .find(|(name, _)| name == term)
            .map(|(_, membership)| membership)
    }

    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(name, _)| name.as_str())
    }
}
