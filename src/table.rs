// src/table.rs
//! Table: the uniform string-cell shape every metric is reduced to for
//! display, clipboard and export.
//!
//! Metrics keep their typed results; a `Table` is only built at the edge, so
//! number formatting (2 decimals for rates, integers for counts, `n/a` for
//! undefined ratios) lives in one place: [`Cell`].

use serde::Serialize;

use crate::metrics::{ Ranking, Stat };

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        if self.headers.is_empty() {
            self.rows.first().map(|r| r.len()).unwrap_or(0)
        } else {
            self.headers.len()
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// `[label, value]` rows from a ranking, in ranking order.
    pub fn from_ranking<V: Cell>(headers: &[&str], ranking: &Ranking<V>) -> Self {
        let mut table = Self::new(headers);
        for e in ranking {
            table.push_row(vec![e.label.clone(), e.value.cell()]);
        }
        table
    }

    /// Columns that look numeric in every row (used for right alignment).
    pub fn numeric_columns(&self) -> Vec<bool> {
        (0..self.ncols())
            .map(|ci| {
                !self.rows.is_empty()
                    && self.rows.iter().all(|r| {
                        r.get(ci)
                            .map(|c| c == "n/a" || c.parse::<f64>().is_ok())
                            .unwrap_or(false)
                    })
            })
            .collect()
    }

    /// Plain fixed-width rendering for terminals.
    pub fn to_text(&self) -> String {
        let ncols = self.ncols();
        let numeric = self.numeric_columns();
        let mut widths = vec![0usize; ncols];
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (ci, cell) in row.iter().enumerate().take(ncols) {
                widths[ci] = widths[ci].max(cell.chars().count());
            }
        }

        let fmt_row = |row: &[String]| -> String {
            let cells: Vec<String> = (0..ncols)
                .map(|ci| {
                    let cell = row.get(ci).map(String::as_str).unwrap_or("");
                    if numeric.get(ci).copied().unwrap_or(false) {
                        format!("{cell:>w$}", w = widths[ci])
                    } else {
                        format!("{cell:<w$}", w = widths[ci])
                    }
                })
                .collect();
            cells.join("  ").trim_end().to_string()
        };

        let mut out = String::new();
        if !self.headers.is_empty() {
            out.push_str(&fmt_row(&self.headers));
            out.push('\n');
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
        for row in &self.rows {
            out.push_str(&fmt_row(row));
            out.push('\n');
        }
        out
    }
}

/// How one value prints in a table cell, and its plotted magnitude.
pub trait Cell {
    fn cell(&self) -> String;
    fn magnitude(&self) -> Option<f64>;
}

impl Cell for u32 {
    fn cell(&self) -> String { self.to_string() }
    fn magnitude(&self) -> Option<f64> { Some(*self as f64) }
}

impl Cell for u64 {
    fn cell(&self) -> String { self.to_string() }
    fn magnitude(&self) -> Option<f64> { Some(*self as f64) }
}

impl Cell for f64 {
    fn cell(&self) -> String { format!("{self:.2}") }
    fn magnitude(&self) -> Option<f64> { Some(*self) }
}

impl Cell for Stat {
    fn cell(&self) -> String { self.to_string() }
    fn magnitude(&self) -> Option<f64> { self.value() }
}
