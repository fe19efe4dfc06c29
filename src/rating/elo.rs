//! Team Elo rating model
//!
//! Each team's pair of ratings is pooled into one virtual rating by averaging
//! in log-odds space, then ordinary two-party Elo runs on the pooled ratings.
//! The resulting delta applies identically to both members of a team.

use crate::config::RatingConfig;
use crate::error::Result;
use crate::rating::calculator::RatingCalculator;
use crate::types::MatchScore;

/// Pool two individual ratings into one team rating.
///
/// Computed as `scale * log10((10^(a/scale) + 10^(b/scale)) / 2)`, which is
/// never below the arithmetic mean and equals `a` when `a == b`.
pub fn average_team_rating(rating_a: f64, rating_b: f64, scale: f64) -> f64 {
    // Factor out the larger exponent so 10^x cannot overflow for large ratings.
    let high = rating_a.max(rating_b);
    let low = rating_a.min(rating_b);
    let pooled = (1.0 + 10f64.powf((low - high) / scale)) / 2.0;
    high + scale * pooled.log10()
}

/// Probability that a side rated `rating_a` beats a side rated `rating_b`.
pub fn expected_win_probability(rating_a: f64, rating_b: f64, scale: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / scale))
}

/// Elo delta for side A. A match with no points scored yields no change.
pub fn rating_delta(
    rating_a: f64,
    rating_b: f64,
    score_a: u32,
    score_b: u32,
    scale: f64,
    k_factor: f64,
) -> f64 {
    let total = u64::from(score_a) + u64::from(score_b);
    if total == 0 {
        return 0.0;
    }

    let actual = f64::from(score_a) / total as f64;
    let expected = expected_win_probability(rating_a, rating_b, scale);
    k_factor * (actual - expected)
}

/// Delta for a whole two-on-two match, computed from pooled team ratings.
#[allow(clippy::too_many_arguments)]
pub fn team_rating_delta(
    team1_rating1: f64,
    team1_rating2: f64,
    team2_rating1: f64,
    team2_rating2: f64,
    score1: u32,
    score2: u32,
    scale: f64,
    k_factor: f64,
) -> f64 {
    let team1 = average_team_rating(team1_rating1, team1_rating2, scale);
    let team2 = average_team_rating(team2_rating1, team2_rating2, scale);
    rating_delta(team1, team2, score1, score2, scale, k_factor)
}

/// Elo rating calculator implementation
#[derive(Debug, Clone, Default)]
pub struct TeamEloCalculator {
    config: RatingConfig,
}

impl TeamEloCalculator {
    /// Create a new calculator, rejecting invalid parameters
    pub fn new(config: RatingConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Pooled rating of a team under this calculator's scale
    pub fn team_rating(&self, ratings: [f64; 2]) -> f64 {
        average_team_rating(ratings[0], ratings[1], self.config.scale)
    }

    /// Probability that team 1 beats team 2
    pub fn win_probability(&self, team1: [f64; 2], team2: [f64; 2]) -> f64 {
        expected_win_probability(
            self.team_rating(team1),
            self.team_rating(team2),
            self.config.scale,
        )
    }
}

impl RatingCalculator for TeamEloCalculator {
    fn match_delta(&self, team1: [f64; 2], team2: [f64; 2], score: MatchScore) -> f64 {
        team_rating_delta(
            team1[0],
            team1[1],
            team2[0],
            team2[1],
            score.team1,
            score.team2,
            self.config.scale,
            self.config.k_factor,
        )
    }

    fn initial_rating(&self) -> f64 {
        self.config.initial_rating
    }

    fn config(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "team_elo",
            "scale": self.config.scale,
            "k_factor": self.config.k_factor,
            "initial_rating": self.config.initial_rating
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_average_of_equal_ratings() {
        assert!((average_team_rating(1500.0, 1500.0, 400.0) - 1500.0).abs() < EPS);
        assert!((average_team_rating(-200.0, -200.0, 50.0) + 200.0).abs() < EPS);
    }

    #[test]
    fn test_average_is_not_arithmetic_mean() {
        let pooled = average_team_rating(1600.0, 1400.0, 400.0);
        assert!((pooled - 1527.320_420_960_845).abs() < 1e-6);
        assert!(pooled > 1500.0);
        assert!(pooled < 1600.0);
    }

    #[test]
    fn test_average_is_symmetric() {
        let ab = average_team_rating(1720.0, 1310.0, 400.0);
        let ba = average_team_rating(1310.0, 1720.0, 400.0);
        assert!((ab - ba).abs() < EPS);
    }

    #[test]
    fn test_average_handles_huge_ratings() {
        let pooled = average_team_rating(1.0e6, 1.0e6, 400.0);
        assert!(pooled.is_finite());
        assert!((pooled - 1.0e6).abs() < 1e-6);
    }

    #[test]
    fn test_expected_win_probability() {
        assert_eq!(expected_win_probability(1500.0, 1500.0, 400.0), 0.5);
        let p = expected_win_probability(1900.0, 1500.0, 400.0);
        assert!((p - 10.0 / 11.0).abs() < EPS);
        let q = expected_win_probability(1500.0, 1900.0, 400.0);
        assert!((p + q - 1.0).abs() < EPS);
    }

    #[test]
    fn test_rating_delta_zero_score_guard() {
        assert_eq!(rating_delta(1800.0, 1200.0, 0, 0, 400.0, 128.0), 0.0);
    }

    #[test]
    fn test_rating_delta_uses_score_fraction() {
        // Equal ratings, 3-1 win: 128 * (0.75 - 0.5)
        let delta = rating_delta(1500.0, 1500.0, 3, 1, 400.0, 128.0);
        assert!((delta - 32.0).abs() < EPS);

        // Equal ratings, shared points: no change
        let delta = rating_delta(1500.0, 1500.0, 2, 2, 400.0, 128.0);
        assert!(delta.abs() < EPS);

        // Favourite underperforms its expectation
        let delta = rating_delta(1600.0, 1400.0, 3, 1, 400.0, 128.0);
        assert!(delta < 0.0);
    }

    #[test]
    fn test_team_rating_delta_single_win() {
        let delta = team_rating_delta(1500.0, 1500.0, 1500.0, 1500.0, 1, 0, 400.0, 128.0);
        assert!((delta - 64.0).abs() < EPS);
    }

    #[test]
    fn test_team_rating_delta_pools_before_comparing() {
        let delta = team_rating_delta(1600.0, 1400.0, 1500.0, 1500.0, 1, 0, 400.0, 128.0);
        let pooled = average_team_rating(1600.0, 1400.0, 400.0);
        let expected = rating_delta(pooled, 1500.0, 1, 0, 400.0, 128.0);
        assert!((delta - expected).abs() < EPS);
        // The stronger pooled side gains less than 64 for the win.
        assert!(delta < 64.0);
    }

    #[test]
    fn test_calculator_matches_free_functions() {
        let calculator = TeamEloCalculator::new(RatingConfig::new(200.0, 32.0, 1000.0)).unwrap();
        let delta = calculator.match_delta([1100.0, 900.0], [1000.0, 1050.0], MatchScore::new(2, 5));
        let expected = team_rating_delta(1100.0, 900.0, 1000.0, 1050.0, 2, 5, 200.0, 32.0);
        assert!((delta - expected).abs() < EPS);
        assert_eq!(calculator.initial_rating(), 1000.0);
    }

    #[test]
    fn test_calculator_win_probability() {
        let calculator = TeamEloCalculator::default();
        let p = calculator.win_probability([1500.0, 1500.0], [1500.0, 1500.0]);
        assert_eq!(p, 0.5);
    }

    #[test]
    fn test_calculator_config_json() {
        let calculator = TeamEloCalculator::default();
        let config = calculator.config();
        assert_eq!(config["type"], "team_elo");
        assert_eq!(config["scale"], 400.0);
        assert_eq!(config["k_factor"], 128.0);
        assert_eq!(config["initial_rating"], 1500.0);
    }

    #[test]
    fn test_calculator_rejects_invalid_config() {
        assert!(TeamEloCalculator::new(RatingConfig::new(0.0, 128.0, 1500.0)).is_err());
    }
}
