// src/metrics/players.rs
//! Per-player rankings over the deliveries table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::{
    BALLS_PER_OVER, DEATH_BAND, ECONOMY_MIN_BALLS, MIDDLE_BAND, POWERPLAY_BAND,
    STRIKE_RATE_MIN_RUNS, TOP_N,
};
use crate::data::Delivery;

use super::{ Order, Ranking, Stat, striker_tallies };

/// Total runs off the bat per striker, top 10.
pub fn top_run_scorers(deliveries: &[Delivery]) -> Ranking<u32> {
    let pairs = striker_tallies(deliveries).into_iter().map(|(p, t)| (p, t.runs));
    Ranking::from_pairs(pairs, Order::Descending, Some(TOP_N))
}

/// Deliveries with any wicket, credited to the bowler, top 10.
/// Run outs and other non-bowler dismissals count too.
pub fn top_wicket_takers(deliveries: &[Delivery]) -> Ranking<u32> {
    let wickets = super::count_values(
        deliveries.iter().filter(|d| d.is_wicket()).map(|d| d.bowler.as_str()),
    );
    Ranking::from_pairs(wickets, Order::Descending, Some(TOP_N))
}

/// Runs per 100 balls for strikers with more than 150 runs, top 10.
pub fn best_strike_rates(deliveries: &[Delivery]) -> Ranking<f64> {
    let pairs = striker_tallies(deliveries)
        .into_iter()
        .filter(|(_, t)| t.runs > STRIKE_RATE_MIN_RUNS)
        .filter_map(|(p, t)| t.strike_rate().value().map(|sr| (p, sr)));
    Ranking::from_pairs(pairs, Order::Descending, Some(TOP_N))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct BowlerTally {
    conceded: u32,
    balls: u32,
}

/// (runs off the bat + extras) per six-ball over, bowlers with at least 150
/// balls, the 10 lowest.
pub fn best_economy_rates(deliveries: &[Delivery]) -> Ranking<f64> {
    let mut bowlers: BTreeMap<&str, BowlerTally> = BTreeMap::new();
    for d in deliveries {
        let t = bowlers.entry(d.bowler.as_str()).or_default();
        t.conceded += d.runs_off_bat + d.extras;
        t.balls += 1;
    }

    let pairs = bowlers
        .into_iter()
        .filter(|(_, t)| t.balls >= ECONOMY_MIN_BALLS)
        .filter_map(|(b, t)| {
            Stat::ratio(t.conceded as f64, t.balls as f64 / BALLS_PER_OVER)
                .value()
                .map(|econ| (b, econ))
        });
    Ranking::from_pairs(pairs, Order::Ascending, Some(TOP_N))
}

/// Mean runs per innings: runs summed per (match, striker), averaged per striker.
pub fn consistent_batters(deliveries: &[Delivery]) -> Ranking<f64> {
    let mut per_innings: BTreeMap<(u64, &str), u32> = BTreeMap::new();
    for d in deliveries {
        *per_innings.entry((d.match_id, d.striker.as_str())).or_insert(0) += d.runs_off_bat;
    }
    Ranking::from_pairs(mean_per_player(per_innings), Order::Descending, Some(TOP_N))
}

/// Mean wickets per match, over the matches in which the bowler took one.
pub fn consistent_bowlers(deliveries: &[Delivery]) -> Ranking<f64> {
    let mut per_match: BTreeMap<(u64, &str), u32> = BTreeMap::new();
    for d in deliveries.iter().filter(|d| d.is_wicket()) {
        *per_match.entry((d.match_id, d.bowler.as_str())).or_insert(0) += 1;
    }
    Ranking::from_pairs(mean_per_player(per_match), Order::Descending, Some(TOP_N))
}

fn mean_per_player<'a>(per_match: BTreeMap<(u64, &'a str), u32>) -> Vec<(&'a str, f64)> {
    let mut sums: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for ((_, player), value) in per_match {
        let (total, n) = sums.entry(player).or_insert((0, 0));
        *total += value;
        *n += 1;
    }
    sums.into_iter()
        .filter_map(|(p, (total, n))| Stat::ratio(total as f64, n as f64).value().map(|m| (p, m)))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    Powerplay,
    Middle,
    Death,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Powerplay, Phase::Middle, Phase::Death];

    /// Inclusive bounds on the raw `over.ball` value. Deliveries outside every
    /// band (e.g. `6.7` after a wide in the seventh over) belong to no phase.
    pub fn band(self) -> (f64, f64) {
        match self {
            Phase::Powerplay => POWERPLAY_BAND,
            Phase::Middle => MIDDLE_BAND,
            Phase::Death => DEATH_BAND,
        }
    }

    pub fn contains(self, ball: f64) -> bool {
        let (lo, hi) = self.band();
        ball >= lo && ball <= hi
    }

    pub fn label(self) -> &'static str {
        match self {
            Phase::Powerplay => "Powerplay",
            Phase::Middle => "Middle Overs",
            Phase::Death => "Death Overs",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PhaseSplits {
    pub powerplay: Ranking<u32>,
    pub middle: Ranking<u32>,
    pub death: Ranking<u32>,
}

impl PhaseSplits {
    pub fn get(&self, phase: Phase) -> &Ranking<u32> {
        match phase {
            Phase::Powerplay => &self.powerplay,
            Phase::Middle => &self.middle,
            Phase::Death => &self.death,
        }
    }
}

/// Runs per striker within one phase band.
pub fn phase_runs(deliveries: &[Delivery], phase: Phase) -> BTreeMap<&str, u32> {
    let mut out: BTreeMap<&str, u32> = BTreeMap::new();
    for d in deliveries.iter().filter(|d| phase.contains(d.ball)) {
        *out.entry(d.striker.as_str()).or_insert(0) += d.runs_off_bat;
    }
    out
}

/// Top 10 run scorers in each phase, ranked independently.
pub fn phase_splits(deliveries: &[Delivery]) -> PhaseSplits {
    let top = |phase| Ranking::from_pairs(phase_runs(deliveries, phase), Order::Descending, Some(TOP_N));
    PhaseSplits {
        powerplay: top(Phase::Powerplay),
        middle: top(Phase::Middle),
        death: top(Phase::Death),
    }
}
