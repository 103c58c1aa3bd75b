// tests/common/mod.rs
//
// Row builders and scratch dirs shared by the integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use t20_insights::data::{ Delivery, Match, TossDecision };

pub fn game(team1: &str, team2: &str, venue: &str, toss_winner: &str, bat: bool, winner: Option<&str>) -> Match {
    Match {
        match_id: None,
        team1: team1.into(),
        team2: team2.into(),
        venue: venue.into(),
        toss_winner: toss_winner.into(),
        toss_decision: if bat { TossDecision::Bat } else { TossDecision::Field },
        winner: winner.map(String::from),
    }
}

pub fn ball(match_id: u64, team: &str, striker: &str, non_striker: &str, bowler: &str, over_ball: f64, runs: u32) -> Delivery {
    Delivery {
        match_id,
        batting_team: team.into(),
        striker: striker.into(),
        non_striker: non_striker.into(),
        bowler: bowler.into(),
        ball: over_ball,
        runs_off_bat: runs,
        extras: 0,
        wicket_type: None,
    }
}

pub fn wicket(mut d: Delivery, kind: &str) -> Delivery {
    d.wicket_type = Some(kind.into());
    d
}

pub fn extras(mut d: Delivery, extras: u32) -> Delivery {
    d.extras = extras;
    d
}

/// `n` balls from one striker to one bowler, each worth `runs`.
pub fn spell(match_id: u64, team: &str, striker: &str, bowler: &str, n: u32, runs: u32) -> Vec<Delivery> {
    (0..n)
        .map(|i| {
            let over = i / 6;
            let b = i % 6 + 1;
            let over_ball = over as f64 + b as f64 / 10.0;
            ball(match_id, team, striker, "partner", bowler, over_ball, runs)
        })
        .collect()
}

/// Scenario: A beats B after choosing to bat, then loses after choosing to field.
pub fn two_match_table() -> Vec<Match> {
    vec![
        game("A", "B", "Ground 1", "A", true, Some("A")),
        game("A", "B", "Ground 2", "A", false, Some("B")),
    ]
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("t20_insights_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}
