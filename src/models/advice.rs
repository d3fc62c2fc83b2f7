//! Season advice derived for a destination

use serde::{Deserialize, Serialize};

/// Season used when a resolved season list is empty
pub const DEFAULT_SEASON: &str = "Spring (March-May)";

/// Best time to visit plus ranked alternatives and a justification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonAdvice {
    /// Season label with its month range, e.g. "Summer (June-August)"
    pub best_season: String,
    /// Remaining seasons, most recommended first
    pub alternative_seasons: Vec<String>,
    pub reason: String,
}

impl SeasonAdvice {
    /// Build advice from a ranked season list; the first entry is the best season
    #[must_use]
    pub fn from_ranked(seasons: &[&str], reason: String) -> Self {
        match seasons.split_first() {
            Some((best, rest)) => Self {
                best_season: (*best).to_string(),
                alternative_seasons: rest.iter().map(|s| (*s).to_string()).collect(),
                reason,
            },
            None => Self {
                best_season: DEFAULT_SEASON.to_string(),
                alternative_seasons: Vec::new(),
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ranked_splits_best_and_alternatives() {
        let advice = SeasonAdvice::from_ranked(
            &["Summer (June-August)", "Late Spring (May)", "Early Autumn (September)"],
            "why".to_string(),
        );
        assert_eq!(advice.best_season, "Summer (June-August)");
        assert_eq!(
            advice.alternative_seasons,
            vec!["Late Spring (May)", "Early Autumn (September)"]
        );
    }

    #[test]
    fn test_single_season_has_no_alternatives() {
        let advice = SeasonAdvice::from_ranked(&["Winter (December-February)"], String::new());
        assert_eq!(advice.best_season, "Winter (December-February)");
        assert!(advice.alternative_seasons.is_empty());
    }

    #[test]
    fn test_empty_list_falls_back_to_spring() {
        let advice = SeasonAdvice::from_ranked(&[], "reason".to_string());
        assert_eq!(advice.best_season, DEFAULT_SEASON);
        assert!(advice.alternative_seasons.is_empty());
        assert_eq!(advice.reason, "reason");
    }
}
