use serde::Serialize;

/// Crisp genre-match signal fed to the fuzzy engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GenreMatch {
    Match,
    NotMatch,
}

impl GenreMatch {
    pub fn crisp(self) -> f64 {
        match self {
            GenreMatch::Match => 1.0,
            GenreMatch::NotMatch => 0.0,
        }
    }
}

/// Case-insensitive equality of two genres. A missing genre on either side never matches.
///
/// Loaded records never carry `None`: a missing `Genre` cell arrives as `""`
/// through the fill default, so it only matches an empty input genre.
pub fn genre_match(game_genre: Option<&str>, input_genre: Option<&str>) -> GenreMatch {
    match (game_genre, input_genre) {
        (Some(game), Some(input)) if game.to_lowercase() == input.to_lowercase() => {
            GenreMatch::Match
        }
        _ => GenreMatch::NotMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(genre_match(Some("RPG"), Some("rpg")), GenreMatch::Match);
        assert_eq!(genre_match(Some("Role-Playing"), Some("ROLE-PLAYING")), GenreMatch::Match);
        assert_eq!(genre_match(Some("Sports"), Some("Sports")), GenreMatch::Match);
    }

    #[test]
    fn test_different_genres_do_not_match() {
        assert_eq!(genre_match(Some("Action"), Some("RPG")), GenreMatch::NotMatch);
        // No substring or trimming semantics
        assert_eq!(genre_match(Some("Action"), Some("Act")), GenreMatch::NotMatch);
        assert_eq!(genre_match(Some("Action "), Some("Action")), GenreMatch::NotMatch);
    }

    #[test]
    fn test_missing_genre_never_matches() {
        assert_eq!(genre_match(None, Some("RPG")), GenreMatch::NotMatch);
        assert_eq!(genre_match(Some("RPG"), None), GenreMatch::NotMatch);
        assert_eq!(genre_match(None, None), GenreMatch::NotMatch);
    }

    #[test]
    fn test_filled_empty_genre_only_matches_empty_input() {
        assert_eq!(genre_match(Some(""), Some("RPG")), GenreMatch::NotMatch);
        assert_eq!(genre_match(Some("RPG"), Some("")), GenreMatch::NotMatch);
        assert_eq!(genre_match(Some(""), Some("")), GenreMatch::Match);
    }

    #[test]
    fn test_crisp_values() {
        assert_eq!(GenreMatch::Match.crisp(), 1.0);
        assert_eq!(GenreMatch::NotMatch.crisp(), 0.0);
    }
}
