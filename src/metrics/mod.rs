// src/metrics/mod.rs
//! # Metrics engine
//!
//! Every metric is a pure function of the source tables (and, where noted, one
//! of the derived columns on `Tournament`). Nothing here mutates its input, so
//! metrics can run in any order and recomputing one yields the same value.
//!
//! ## Result shapes
//! - scalars / summaries: small typed structs (`matches::MostWins`, …)
//! - ranked `(label, value)` sequences: [`Ranking`]
//! - point series for line/scatter plots: plain `Vec`s of small structs
//!
//! ## Undefined and empty results
//! - A zero denominator yields [`Stat::NotApplicable`], never NaN/inf.
//! - A threshold nobody meets yields an empty [`Ranking`]; display layers render
//!   that as "No qualifying players".
//!
//! ## Groups
//! - `matches`: outcome metrics over the match table
//! - `players`: per-striker / per-bowler rankings
//! - `batting`: team and position based batting views
//! - `bowling`: dot-ball pressure per match

pub mod batting;
pub mod bowling;
pub mod matches;
pub mod players;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

use serde::{ Serialize, Serializer };

use crate::config::consts::BALLS_PER_OVER;
use crate::data::Delivery;

/// A ratio that may be undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Stat {
    Value(f64),
    NotApplicable,
}

impl Stat {
    pub fn ratio(num: f64, den: f64) -> Self {
        if den == 0.0 { Stat::NotApplicable } else { Stat::Value(num / den) }
    }

    pub fn percent(num: f64, den: f64) -> Self {
        match Self::ratio(num, den) {
            Stat::Value(v) => Stat::Value(v * 100.0),
            na => na,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Stat::Value(v) => Some(v),
            Stat::NotApplicable => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, Stat::Value(_))
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Value(v) => write!(f, "{v:.2}"),
            Stat::NotApplicable => f.write_str("n/a"),
        }
    }
}

/// `NotApplicable` sorts below every value, so it trails a descending ranking.
impl PartialOrd for Stat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Stat::Value(a), Stat::Value(b)) => a.partial_cmp(b),
            (Stat::NotApplicable, Stat::NotApplicable) => Some(Ordering::Equal),
            (Stat::NotApplicable, Stat::Value(_)) => Some(Ordering::Less),
            (Stat::Value(_), Stat::NotApplicable) => Some(Ordering::Greater),
        }
    }
}

impl Serialize for Stat {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self {
            Stat::Value(v) => s.serialize_f64(*v),
            Stat::NotApplicable => s.serialize_none(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Descending,
    Ascending,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ranked<V> {
    pub label: String,
    pub value: V,
}

/// Ordered `(label, value)` pairs. Ties on value fall back to label order so the
/// output is deterministic.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking<V> {
    entries: Vec<Ranked<V>>,
}

impl<V> Ranking<V> {
    pub fn entries(&self) -> &[Ranked<V>] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Ranked<V>> { self.entries.iter() }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&V> {
        self.entries.iter().find(|e| e.label == label).map(|e| &e.value)
    }
}

impl<V: PartialOrd> Ranking<V> {
    pub fn from_pairs<I, L>(pairs: I, order: Order, limit: Option<usize>) -> Self
    where
        I: IntoIterator<Item = (L, V)>,
        L: Into<String>,
    {
        let mut entries: Vec<Ranked<V>> = pairs
            .into_iter()
            .map(|(label, value)| Ranked { label: label.into(), value })
            .collect();

        entries.sort_by(|a, b| {
            let by_value = a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal);
            let by_value = match order {
                Order::Descending => by_value.reverse(),
                Order::Ascending => by_value,
            };
            by_value.then_with(|| a.label.cmp(&b.label))
        });

        if let Some(n) = limit {
            entries.truncate(n);
        }
        Self { entries }
    }
}

impl<'a, V> IntoIterator for &'a Ranking<V> {
    type Item = &'a Ranked<V>;
    type IntoIter = std::slice::Iter<'a, Ranked<V>>;
    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

/// Runs and balls for one key (striker, bowler, team).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub runs: u32,
    pub balls: u32,
}

impl Tally {
    fn add(&mut self, runs: u32) {
        self.runs += runs;
        self.balls += 1;
    }

    /// Runs per 100 balls.
    pub fn strike_rate(&self) -> Stat {
        Stat::percent(self.runs as f64, self.balls as f64)
    }

    /// Runs per six-ball over.
    pub fn runs_per_over(&self) -> Stat {
        Stat::ratio(self.runs as f64, self.balls as f64 / BALLS_PER_OVER)
    }
}

/// Runs off the bat and balls faced, per striker.
pub fn striker_tallies(deliveries: &[Delivery]) -> BTreeMap<&str, Tally> {
    tally_by(deliveries, |d| d.striker.as_str())
}

/// Runs off the bat and balls faced, per batting team.
pub fn team_tallies(deliveries: &[Delivery]) -> BTreeMap<&str, Tally> {
    tally_by(deliveries, |d| d.batting_team.as_str())
}

fn tally_by<'a, F>(deliveries: &'a [Delivery], key: F) -> BTreeMap<&'a str, Tally>
where
    F: Fn(&'a Delivery) -> &'a str,
{
    let mut out: BTreeMap<&str, Tally> = BTreeMap::new();
    for d in deliveries {
        out.entry(key(d)).or_default().add(d.runs_off_bat);
    }
    out
}

/// Occurrence count per value.
pub(crate) fn count_values<'a, I>(values: I) -> BTreeMap<&'a str, u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: BTreeMap<&str, u32> = BTreeMap::new();
    for v in values {
        *out.entry(v).or_insert(0) += 1;
    }
    out
}
