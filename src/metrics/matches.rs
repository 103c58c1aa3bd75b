// src/metrics/matches.rs
//! Match outcome metrics. Input: the match table only.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{ Match, TossDecision };

use super::{ Order, Ranking, Stat, count_values };

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MostWins {
    /// Every team tied at the top, in name order.
    pub teams: Vec<String>,
    pub wins: u32,
}

impl MostWins {
    pub fn summary(&self) -> String {
        format!("Teams with the most wins: {} ({} wins)", self.teams.join(", "), self.wins)
    }
}

/// All teams sharing the highest win count. `None` when no match has a winner.
pub fn most_wins(matches: &[Match]) -> Option<MostWins> {
    let wins = count_values(matches.iter().filter_map(|m| m.winner.as_deref()));
    let max = *wins.values().max()?;
    let teams = wins
        .into_iter()
        .filter(|&(_, n)| n == max)
        .map(|(team, _)| team.to_string())
        .collect();
    Some(MostWins { teams, wins: max })
}

/// Wins over appearances (as `team1` or `team2`) × 100, highest first.
/// Teams without a win are left out.
pub fn win_percentage(matches: &[Match]) -> Ranking<f64> {
    let appearances = count_values(
        matches.iter().flat_map(|m| [m.team1.as_str(), m.team2.as_str()]),
    );
    let wins = count_values(matches.iter().filter_map(|m| m.winner.as_deref()));

    let pairs = wins.into_iter().filter_map(|(team, won)| {
        let played = *appearances.get(team)?;
        Stat::percent(won as f64, played as f64)
            .value()
            .filter(|pct| *pct > 0.0)
            .map(|pct| (team, pct))
    });
    Ranking::from_pairs(pairs, Order::Descending, None)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TossImpact {
    pub toss_and_match: usize,
    pub total: usize,
}

impl TossImpact {
    pub fn share(&self) -> Stat {
        Stat::percent(self.toss_and_match as f64, self.total as f64)
    }

    pub fn summary(&self) -> String {
        format!(
            "Toss winner also won the match {} times out of {} matches.",
            self.toss_and_match, self.total
        )
    }
}

pub fn toss_impact(matches: &[Match]) -> TossImpact {
    TossImpact {
        toss_and_match: matches.iter().filter(|m| m.toss_winner_won()).count(),
        total: matches.len(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VenueTeam {
    pub venue: String,
    pub team: String,
}

/// Highest `(venue, winner)` count. Every tied pair is kept, in venue then team
/// order; the first one is the headline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VenueLeaders {
    pub wins: u32,
    pub leaders: Vec<VenueTeam>,
}

impl VenueLeaders {
    pub fn headline(&self) -> &VenueTeam {
        &self.leaders[0]
    }

    pub fn summary(&self) -> Vec<String> {
        let top = self.headline();
        let mut lines = vec![
            format!("The most common venue for winning: {}", top.venue),
            format!("{} won {} match(es) there.", top.team, self.wins),
        ];
        if self.leaders.len() > 1 {
            let others: Vec<String> = self.leaders[1..]
                .iter()
                .map(|vt| format!("{} at {}", vt.team, vt.venue))
                .collect();
            lines.push(format!("Tied with: {}", others.join("; ")));
        }
        lines
    }
}

pub fn winningest_venue(matches: &[Match]) -> Option<VenueLeaders> {
    let mut counts: BTreeMap<(&str, &str), u32> = BTreeMap::new();
    for m in matches {
        if let Some(winner) = m.winner.as_deref() {
            *counts.entry((m.venue.as_str(), winner)).or_insert(0) += 1;
        }
    }

    let wins = *counts.values().max()?;
    let leaders = counts
        .into_iter()
        .filter(|&(_, n)| n == wins)
        .map(|((venue, team), _)| VenueTeam { venue: venue.to_string(), team: team.to_string() })
        .collect();
    Some(VenueLeaders { wins, leaders })
}

/// Share of ALL matches in which the toss winner chose to bat (resp. field) and
/// went on to win.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ChoiceWinRate {
    pub bat: Stat,
    pub field: Stat,
}

impl ChoiceWinRate {
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Percentage of wins after choosing to bat: {}", pct(self.bat)),
            format!("Percentage of wins after choosing to field: {}", pct(self.field)),
        ]
    }
}

pub fn toss_choice_win_rate(matches: &[Match]) -> ChoiceWinRate {
    let total = matches.len() as f64;
    let won_after = |choice: TossDecision| {
        matches
            .iter()
            .filter(|m| m.toss_decision == choice && m.toss_winner_won())
            .count() as f64
    };
    ChoiceWinRate {
        bat: Stat::percent(won_after(TossDecision::Bat), total),
        field: Stat::percent(won_after(TossDecision::Field), total),
    }
}

/// Batting-first vs chasing win rates. Reads `team1` as the side batting first
/// after a "bat" decision and `team2` as the chasing side after "field".
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct InningsWinRate {
    pub batting_first: Stat,
    pub chasing: Stat,
}

impl InningsWinRate {
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Win percentage batting first: {}", pct(self.batting_first)),
            format!("Win percentage chasing target: {}", pct(self.chasing)),
        ]
    }
}

pub fn innings_win_rate(matches: &[Match]) -> InningsWinRate {
    let rate = |choice: TossDecision, side: fn(&Match) -> &str| {
        let (n, won) = matches
            .iter()
            .filter(|m| m.toss_decision == choice)
            .fold((0usize, 0usize), |(n, won), m| {
                (n + 1, won + usize::from(m.won_by(side(m))))
            });
        Stat::percent(won as f64, n as f64)
    };
    InningsWinRate {
        batting_first: rate(TossDecision::Bat, |m| m.team1.as_str()),
        chasing: rate(TossDecision::Field, |m| m.team2.as_str()),
    }
}

fn pct(stat: Stat) -> String {
    match stat {
        Stat::Value(v) => format!("{v:.2}%"),
        Stat::NotApplicable => s!("n/a"),
    }
}
