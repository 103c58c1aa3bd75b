// src/metrics/bowling.rs
//! Per-match bowling pressure over the deliveries table.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::{ Delivery, DotFlags };

use super::Stat;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MatchDotRate {
    pub match_id: u64,
    pub dot_percentage: f64,
}

/// Share of dot balls in each match (both innings), by match id.
pub fn dot_ball_impact(deliveries: &[Delivery], dots: &DotFlags) -> Vec<MatchDotRate> {
    let mut per_match: BTreeMap<u64, (u32, u32)> = BTreeMap::new();
    debug_assert_eq!(deliveries.len(), dots.len());
    for (d, &is_dot) in deliveries.iter().zip(dots.as_slice()) {
        let (dot, balls) = per_match.entry(d.match_id).or_insert((0, 0));
        *dot += u32::from(is_dot);
        *balls += 1;
    }
    per_match
        .into_iter()
        .filter_map(|(match_id, (dot, balls))| {
            Stat::percent(dot as f64, balls as f64)
                .value()
                .map(|dot_percentage| MatchDotRate { match_id, dot_percentage })
        })
        .collect()
}
