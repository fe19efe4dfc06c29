//! Common types used throughout the rating tool

use serde::{Deserialize, Serialize};

/// Unique identifier for players
pub type PlayerId = String;

/// Two players competing together on one side of a match
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub first: PlayerId,
    pub second: PlayerId,
}

impl Team {
    pub fn new(first: impl Into<PlayerId>, second: impl Into<PlayerId>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Both members, in the order they were listed
    pub fn members(&self) -> [&PlayerId; 2] {
        [&self.first, &self.second]
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} & {}", self.first, self.second)
    }
}

/// Points scored by each team in a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchScore {
    pub team1: u32,
    pub team2: u32,
}

impl MatchScore {
    pub fn new(team1: u32, team2: u32) -> Self {
        Self { team1, team2 }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.team1) + u64::from(self.team2)
    }
}

/// One finished two-on-two match, as read from the match source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team1: Team,
    pub team2: Team,
    pub score: MatchScore,
}

impl MatchRecord {
    pub fn new(team1: Team, team2: Team, score: MatchScore) -> Self {
        Self {
            team1,
            team2,
            score,
        }
    }

    /// All four participants: team 1 first, then team 2
    pub fn participants(&self) -> [&PlayerId; 4] {
        let [a, b] = self.team1.members();
        let [c, d] = self.team2.members();
        [a, b, c, d]
    }
}

/// Rating change applied to one player by one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingChange {
    pub player_id: PlayerId,
    pub old_rating: f64,
    pub new_rating: f64,
}

impl RatingChange {
    pub fn delta(&self) -> f64 {
        self.new_rating - self.old_rating
    }
}
