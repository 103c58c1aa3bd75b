// tests/player_metrics.rs
mod common;

use common::{ ball, extras, spell, wicket };
use t20_insights::metrics::players::*;
use t20_insights::metrics::striker_tallies;

#[test]
fn strike_rate_of_short_innings_is_computed_but_not_ranked() {
    let d: Vec<_> = [0, 4, 1, 0, 6]
        .iter()
        .enumerate()
        .map(|(i, &r)| ball(1, "A", "X", "Y", "B1", 0.1 + i as f64 / 10.0, r))
        .collect();

    let tallies = striker_tallies(&d);
    let sr = tallies["X"].strike_rate().value().unwrap();
    assert!((sr - 220.0).abs() < 1e-9);
    assert!(best_strike_rates(&d).is_empty());
}

#[test]
fn strike_rate_threshold_is_strictly_above_150_runs() {
    let mut d = spell(1, "A", "Exactly", "B1", 75, 2); // 150 runs
    d.extend(spell(1, "A", "Over", "B1", 151, 1)); // 151 runs
    let sr = best_strike_rates(&d);
    assert_eq!(sr.labels(), vec!["Over"]);
    assert_eq!(sr.get("Over"), Some(&100.0));
}

#[test]
fn economy_needs_at_least_150_balls() {
    let mut d = spell(1, "A", "S", "Short", 149, 1);
    d.extend(spell(1, "A", "S", "Enough", 150, 1));
    let econ = best_economy_rates(&d);
    assert_eq!(econ.labels(), vec!["Enough"]);
    assert_eq!(econ.get("Enough"), Some(&6.0));
}

#[test]
fn economy_counts_extras_and_ranks_lowest_first() {
    let mut d = spell(1, "A", "S", "Tight", 150, 0);
    d.extend(spell(1, "A", "S", "Loose", 150, 0));
    let last = d.len() - 1;
    d[last] = extras(d[last].clone(), 25);

    let econ = best_economy_rates(&d);
    assert_eq!(econ.labels(), vec!["Tight", "Loose"]);
    assert_eq!(econ.get("Tight"), Some(&0.0));
    assert_eq!(econ.get("Loose"), Some(&1.0));
}

#[test]
fn top_scorers_truncate_to_ten_with_name_tiebreak() {
    let d: Vec<_> = (0..12)
        .map(|i| ball(1, "A", &format!("P{i:02}"), "N", "B", 0.1, 4))
        .collect();
    let top = top_run_scorers(&d);
    assert_eq!(top.len(), 10);
    assert_eq!(top.entries()[0].label, "P00");
    assert_eq!(top.entries()[9].label, "P09");
}

#[test]
fn every_wicket_is_credited_to_the_bowler() {
    let d = vec![
        wicket(ball(1, "A", "X", "Y", "Bowler", 0.1, 0), "caught"),
        wicket(ball(1, "A", "Y", "Z", "Bowler", 0.2, 0), "run out"),
        wicket(ball(2, "A", "Z", "W", "Other", 0.1, 0), "bowled"),
        ball(2, "A", "W", "V", "Other", 0.2, 1),
    ];
    let w = top_wicket_takers(&d);
    assert_eq!(w.get("Bowler"), Some(&2));
    assert_eq!(w.get("Other"), Some(&1));
    assert_eq!(w.labels(), vec!["Bowler", "Other"]);
}

#[test]
fn consistency_averages_per_match() {
    let d = vec![
        ball(1, "A", "X", "Y", "B", 0.1, 10),
        ball(1, "A", "X", "Y", "B", 0.2, 20),
        ball(2, "A", "X", "Y", "B", 0.1, 6),
        wicket(ball(1, "A", "X", "Y", "B", 0.3, 0), "caught"),
        wicket(ball(1, "A", "Y", "X", "B", 0.4, 0), "caught"),
        wicket(ball(2, "A", "Y", "X", "B", 0.2, 0), "bowled"),
    ];
    assert_eq!(consistent_batters(&d).get("X"), Some(&18.0));
    assert_eq!(consistent_bowlers(&d).get("B"), Some(&1.5));
}

#[test]
fn phase_bands_are_inclusive_on_raw_ball() {
    assert!(Phase::Powerplay.contains(0.1));
    assert!(Phase::Powerplay.contains(6.6));
    assert!(!Phase::Powerplay.contains(6.7));
    assert!(!Phase::Middle.contains(6.9));
    assert!(Phase::Middle.contains(15.6));
    assert!(Phase::Death.contains(20.6));
    assert!(!Phase::Death.contains(16.0));
}

#[test]
fn empty_death_band_is_an_empty_ranking() {
    let d = vec![
        ball(1, "A", "X", "Y", "B", 0.1, 4),
        ball(1, "A", "Y", "X", "B", 8.2, 6),
    ];
    let splits = phase_splits(&d);
    assert!(splits.get(Phase::Death).is_empty());
    assert_eq!(splits.get(Phase::Powerplay).get("X"), Some(&4));
    assert_eq!(splits.get(Phase::Middle).get("Y"), Some(&6));
}

#[test]
fn phase_runs_never_exceed_total_runs() {
    let d = vec![
        ball(1, "A", "X", "Y", "B", 0.1, 4),
        ball(1, "A", "X", "Y", "B", 6.7, 6), // wide-shifted ball, no phase
        ball(1, "A", "X", "Y", "B", 12.3, 1),
        ball(1, "A", "X", "Y", "B", 19.6, 2),
    ];
    let total = striker_tallies(&d)["X"].runs;
    let in_phases: u32 = Phase::ALL.iter().map(|&p| phase_runs(&d, p).get("X").copied().unwrap_or(0)).sum();
    assert_eq!(total, 13);
    assert_eq!(in_phases, 7);
}
