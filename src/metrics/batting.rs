// src/metrics/batting.rs
//! Team and position based batting views.
//!
//! `runs_by_ball_number` and `batting_order_split` both read the shared
//! `BallNumbers` column, so the two always agree on what "position" means.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::{ OPENING_MAX_BALL, TOP_N };
use crate::data::{ BallNumbers, Delivery, DotFlags };

use super::{ Order, Ranking, Stat, striker_tallies, team_tallies };

/// Team runs per six-ball over, highest first.
pub fn runs_per_over_by_team(deliveries: &[Delivery]) -> Ranking<f64> {
    let pairs = team_tallies(deliveries)
        .into_iter()
        .filter_map(|(team, t)| t.runs_per_over().value().map(|rpo| (team, rpo)));
    Ranking::from_pairs(pairs, Order::Descending, None)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SlotRate {
    pub ball_number: u32,
    pub runs_per_ball: f64,
}

/// Average runs per ball at each per-innings ball number, in ball order.
pub fn runs_by_ball_number(deliveries: &[Delivery], ball_numbers: &BallNumbers) -> Vec<SlotRate> {
    let mut slots: BTreeMap<u32, (u32, u32)> = BTreeMap::new();
    debug_assert_eq!(deliveries.len(), ball_numbers.len());
    for (d, &n) in deliveries.iter().zip(ball_numbers.as_slice()) {
        let (runs, balls) = slots.entry(n).or_insert((0, 0));
        *runs += d.runs_off_bat;
        *balls += 1;
    }
    slots
        .into_iter()
        .filter_map(|(ball_number, (runs, balls))| {
            Stat::ratio(runs as f64, balls as f64)
                .value()
                .map(|runs_per_ball| SlotRate { ball_number, runs_per_ball })
        })
        .collect()
}

/// Runs per ordered (striker, non-striker) pair, top 10, labelled
/// `"striker & non_striker"`. (A, B) and (B, A) are separate entries.
pub fn best_partnerships(deliveries: &[Delivery]) -> Ranking<u32> {
    let mut per_match: BTreeMap<(u64, &str, &str), u32> = BTreeMap::new();
    for d in deliveries {
        *per_match
            .entry((d.match_id, d.striker.as_str(), d.non_striker.as_str()))
            .or_insert(0) += d.runs_off_bat;
    }

    let mut pairs: BTreeMap<(&str, &str), u32> = BTreeMap::new();
    for ((_, striker, non_striker), runs) in per_match {
        *pairs.entry((striker, non_striker)).or_insert(0) += runs;
    }

    let labelled = pairs
        .into_iter()
        .map(|((s, ns), runs)| (format!("{s} & {ns}"), runs));
    Ranking::from_pairs(labelled, Order::Descending, Some(TOP_N))
}

/// Boundary deliveries (4 or 6) per team divided by the team's total RUNS, × 100.
/// A team with no runs at all is not applicable.
pub fn boundary_contribution(deliveries: &[Delivery]) -> Ranking<Stat> {
    let boundaries = super::count_values(
        deliveries.iter().filter(|d| d.is_boundary()).map(|d| d.batting_team.as_str()),
    );
    let pairs = team_tallies(deliveries).into_iter().map(|(team, t)| {
        let hits = boundaries.get(team).copied().unwrap_or(0);
        (team, Stat::percent(hits as f64, t.runs as f64))
    });
    Ranking::from_pairs(pairs, Order::Descending, None)
}

/// Dot balls faced per team over balls faced, × 100, highest first.
pub fn dot_ball_percentage(deliveries: &[Delivery], dots: &DotFlags) -> Ranking<f64> {
    let mut teams: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    debug_assert_eq!(deliveries.len(), dots.len());
    for (d, &is_dot) in deliveries.iter().zip(dots.as_slice()) {
        let (dot, balls) = teams.entry(d.batting_team.as_str()).or_insert((0, 0));
        *dot += u32::from(is_dot);
        *balls += 1;
    }
    let pairs = teams.into_iter().filter_map(|(team, (dot, balls))| {
        Stat::percent(dot as f64, balls as f64).value().map(|pct| (team, pct))
    });
    Ranking::from_pairs(pairs, Order::Descending, None)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub label: String,
    pub strike_rate: f64,
    pub runs_per_over: f64,
}

/// Strike rate against runs per over for every striker, in name order.
pub fn strike_rate_vs_run_rate(deliveries: &[Delivery]) -> Vec<ScatterPoint> {
    striker_tallies(deliveries)
        .into_iter()
        .filter_map(|(striker, t)| {
            let strike_rate = t.strike_rate().value()?;
            let runs_per_over = t.runs_per_over().value()?;
            Some(ScatterPoint { label: striker.to_string(), strike_rate, runs_per_over })
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OrderSplit {
    pub opening: u32,
    pub middle_order: u32,
}

impl OrderSplit {
    pub const OPENING: &'static str = "Opening";
    pub const MIDDLE_ORDER: &'static str = "Middle Order";

    pub fn buckets(&self) -> [(&'static str, u32); 2] {
        [(Self::OPENING, self.opening), (Self::MIDDLE_ORDER, self.middle_order)]
    }
}

/// Total runs scored up to ball 24 of an innings ("Opening") and after it.
pub fn batting_order_split(deliveries: &[Delivery], ball_numbers: &BallNumbers) -> OrderSplit {
    let mut split = OrderSplit::default();
    debug_assert_eq!(deliveries.len(), ball_numbers.len());
    for (d, &n) in deliveries.iter().zip(ball_numbers.as_slice()) {
        if n <= OPENING_MAX_BALL {
            split.opening += d.runs_off_bat;
        } else {
            split.middle_order += d.runs_off_bat;
        }
    }
    split
}
