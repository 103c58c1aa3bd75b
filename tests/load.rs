// tests/load.rs
//
// CSV loading: column check, optional cells, derived columns.
mod common;

use t20_insights::config::options::DataOptions;
use t20_insights::data::load::{ from_readers, load_tournament, read_deliveries, read_matches };
use t20_insights::data::TossDecision;
use t20_insights::error::LoadError;

#[test]
fn fixture_tables_load_with_extra_columns_ignored() {
    let t = load_tournament(&DataOptions::in_dir(common::fixtures_dir())).unwrap();
    assert_eq!(t.matches().len(), 4);
    assert_eq!(t.deliveries().len(), 13);

    let first = &t.matches()[0];
    assert_eq!(first.match_id, Some(1));
    assert_eq!(first.venue, "Nassau County International Cricket Stadium, New York");
    assert_eq!(first.toss_decision, TossDecision::Field);
}

#[test]
fn empty_cells_become_none() {
    let t = load_tournament(&DataOptions::in_dir(common::fixtures_dir())).unwrap();
    assert_eq!(t.matches()[3].winner, None);
    assert_eq!(t.deliveries()[0].wicket_type, None);
    assert_eq!(t.deliveries()[4].wicket_type.as_deref(), Some("caught"));
}

#[test]
fn derived_columns_follow_each_innings() {
    let t = load_tournament(&DataOptions::in_dir(common::fixtures_dir())).unwrap();
    assert_eq!(
        t.ball_numbers().as_slice(),
        &[1, 2, 3, 4, 5, 6, 7, 1, 2, 3, 1, 2, 3]
    );
    let dots: Vec<bool> = t.deliveries().iter().map(|d| d.runs_off_bat == 0).collect();
    assert_eq!(t.dot_flags().as_slice(), dots.as_slice());
}

#[test]
fn missing_columns_are_a_schema_mismatch() {
    let csv = "team1,team2,winner\nA,B,A\n";
    let err = read_matches(csv.as_bytes(), "inline").unwrap_err();
    match err {
        LoadError::SchemaMismatch { table, missing } => {
            assert_eq!(table, "matches");
            assert_eq!(missing, vec!["venue", "toss_winner", "toss_decision"]);
        }
        other => panic!("expected SchemaMismatch, got {other:?}"),
    }
}

#[test]
fn header_only_file_loads_as_empty_table() {
    let csv = "match_id,batting_team,striker,non_striker,bowler,ball,runs_off_bat,extras,wicket_type\n";
    let rows = read_deliveries(csv.as_bytes(), "inline").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn bad_cell_reports_origin() {
    let csv = "match_id,batting_team,striker,non_striker,bowler,ball,runs_off_bat,extras,wicket_type\n\
               1,A,x,y,z,0.1,four,0,\n";
    let err = read_deliveries(csv.as_bytes(), "inline.csv").unwrap_err();
    assert!(matches!(err, LoadError::Csv { .. }));
    assert!(err.to_string().contains("inline.csv"));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = common::tmp_dir("load_missing");
    let err = load_tournament(&DataOptions::in_dir(&dir)).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("matches.csv"));
}

#[test]
fn in_memory_sources_build_the_same_context() {
    let dir = common::fixtures_dir();
    let m = std::fs::read(dir.join("matches.csv")).unwrap();
    let d = std::fs::read(dir.join("deliveries.csv")).unwrap();

    let from_mem = from_readers(m.as_slice(), d.as_slice()).unwrap();
    let from_disk = load_tournament(&DataOptions::in_dir(&dir)).unwrap();
    assert_eq!(from_mem.deliveries(), from_disk.deliveries());
    assert_eq!(from_mem.ball_numbers(), from_disk.ball_numbers());
}
