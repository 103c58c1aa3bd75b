// src/data/load.rs
//! CSV → typed tables.
//!
//! The header row is checked against the required column list before any row
//! is read, so a wrong file fails as one `SchemaMismatch` instead of a type
//! error on row 1. Extra columns are ignored. Empty `winner` / `wicket_type`
//! cells become `None`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::options::DataOptions;
use crate::error::LoadError;

use super::records::{ Delivery, Match };
use super::tournament::Tournament;

pub const MATCH_COLUMNS: &[&str] = &[
    "team1", "team2", "venue", "toss_winner", "toss_decision", "winner",
];

pub const DELIVERY_COLUMNS: &[&str] = &[
    "match_id", "batting_team", "striker", "non_striker", "bowler",
    "ball", "runs_off_bat", "extras", "wicket_type",
];

/// Load both files and build the shared context.
pub fn load_tournament(opts: &DataOptions) -> Result<Tournament, LoadError> {
    let matches = read_matches(open(&opts.matches_path)?, &opts.matches_path.display().to_string())?;
    let deliveries = read_deliveries(open(&opts.deliveries_path)?, &opts.deliveries_path.display().to_string())?;

    logf!(
        "Load: matches={} ({}), deliveries={} ({})",
        matches.len(),
        opts.matches_path.display(),
        deliveries.len(),
        opts.deliveries_path.display()
    );

    Ok(Tournament::new(matches, deliveries))
}

/// Same as [`load_tournament`] over in-memory sources.
pub fn from_readers<M: Read, D: Read>(matches: M, deliveries: D) -> Result<Tournament, LoadError> {
    let matches = read_matches(matches, "matches")?;
    let deliveries = read_deliveries(deliveries, "deliveries")?;
    Ok(Tournament::new(matches, deliveries))
}

pub fn read_matches<R: Read>(rdr: R, origin: &str) -> Result<Vec<Match>, LoadError> {
    read_table(rdr, "matches", MATCH_COLUMNS, origin)
}

pub fn read_deliveries<R: Read>(rdr: R, origin: &str) -> Result<Vec<Delivery>, LoadError> {
    read_table(rdr, "deliveries", DELIVERY_COLUMNS, origin)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}

fn read_table<T, R>(
    rdr: R,
    table: &'static str,
    required: &[&str],
    origin: &str,
) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
    R: Read,
{
    let csv_err = |source| LoadError::Csv { origin: origin.to_string(), source };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let missing: Vec<String> = required
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();

    if !missing.is_empty() {
        loge!("Load: {} ({}) missing columns: {:?}", table, origin, missing);
        return Err(LoadError::SchemaMismatch { table, missing });
    }

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        rows.push(record.map_err(csv_err)?);
    }
    logd!("Load: {} rows={} from {}", table, rows.len(), origin);
    Ok(rows)
}
