// src/data/tournament.rs
use std::collections::HashMap;

use super::records::{ Delivery, Match };

/// Read-only context shared by every metric: both source tables plus the
/// derived columns. Built once after loading; nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct Tournament {
    matches: Vec<Match>,
    deliveries: Vec<Delivery>,
    ball_numbers: BallNumbers,
    dot_flags: DotFlags,
}

impl Tournament {
    pub fn new(matches: Vec<Match>, deliveries: Vec<Delivery>) -> Self {
        let ball_numbers = derive_ball_numbers(&deliveries);
        let dot_flags = derive_dot_flags(&deliveries);
        Self { matches, deliveries, ball_numbers, dot_flags }
    }

    pub fn matches(&self) -> &[Match] { &self.matches }
    pub fn deliveries(&self) -> &[Delivery] { &self.deliveries }
    pub fn ball_numbers(&self) -> &BallNumbers { &self.ball_numbers }
    pub fn dot_flags(&self) -> &DotFlags { &self.dot_flags }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.deliveries.is_empty()
    }
}

/// Per-innings sequential ball counter, parallel to the deliveries table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BallNumbers(Vec<u32>);

impl BallNumbers {
    pub fn as_slice(&self) -> &[u32] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// `runs_off_bat == 0`, parallel to the deliveries table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DotFlags(Vec<bool>);

impl DotFlags {
    pub fn as_slice(&self) -> &[bool] { &self.0 }
    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

/// 1-indexed counter per `(match_id, batting_team)`, in table order. Groups need
/// not be contiguous; each keeps its own count.
pub fn derive_ball_numbers(deliveries: &[Delivery]) -> BallNumbers {
    let mut counters: HashMap<(u64, &str), u32> = HashMap::new();
    let numbers = deliveries
        .iter()
        .map(|d| {
            let n = counters.entry((d.match_id, d.batting_team.as_str())).or_insert(0);
            *n += 1;
            *n
        })
        .collect();
    BallNumbers(numbers)
}

pub fn derive_dot_flags(deliveries: &[Delivery]) -> DotFlags {
    DotFlags(deliveries.iter().map(|d| d.runs_off_bat == 0).collect())
}
