// src/data/records.rs
use serde::{ Deserialize, Serialize };

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Field,
}

/// One row per game.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Match {
    #[serde(default)]
    pub match_id: Option<u64>,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub toss_winner: String,
    pub toss_decision: TossDecision,
    /// `None` for a no-result.
    pub winner: Option<String>,
}

impl Match {
    pub fn toss_winner_won(&self) -> bool {
        self.winner.as_deref() == Some(self.toss_winner.as_str())
    }

    pub fn won_by(&self, team: &str) -> bool {
        self.winner.as_deref() == Some(team)
    }
}

/// One row per ball bowled.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Delivery {
    pub match_id: u64,
    pub batting_team: String,
    pub striker: String,
    pub non_striker: String,
    pub bowler: String,
    /// `over.ball`, e.g. `14.3`. Kept as the raw decimal; phase bands compare on it.
    pub ball: f64,
    pub runs_off_bat: u32,
    pub extras: u32,
    pub wicket_type: Option<String>,
}

impl Delivery {
    pub fn is_wicket(&self) -> bool {
        self.wicket_type.is_some()
    }

    pub fn is_boundary(&self) -> bool {
        matches!(self.runs_off_bat, 4 | 6)
    }
}
