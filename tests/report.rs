// tests/report.rs
mod common;

use t20_insights::config::options::DataOptions;
use t20_insights::data::Tournament;
use t20_insights::data::load::load_tournament;
use t20_insights::gui::progress::GuiProgress;
use t20_insights::gui::pages::Page;
use t20_insights::gui::router;
use t20_insights::progress::Progress;
use t20_insights::report::{ EMPTY_DATASET, Group, Plot, Report };

const IDS: [&str; 21] = [
    "1.1", "1.2", "1.3", "1.4", "1.5", "1.6",
    "2.1", "2.2", "2.3", "2.4", "2.5", "2.6", "2.7",
    "3.1", "3.2", "3.3", "3.4", "3.5", "3.6", "3.7",
    "4.1",
];

fn fixture() -> Tournament {
    load_tournament(&DataOptions::in_dir(common::fixtures_dir())).unwrap()
}

#[test]
fn sections_come_in_dashboard_order() {
    let report = Report::build(&fixture());
    let ids: Vec<&str> = report.sections.iter().map(|s| s.id).collect();
    assert_eq!(ids, IDS);
    assert_eq!(report.group(Group::Matches).count(), 6);
    assert_eq!(report.group(Group::Bowling).count(), 1);
}

#[test]
fn building_twice_gives_the_same_report() {
    let t = fixture();
    assert_eq!(Report::build(&t), Report::build(&t));
}

#[test]
fn fixture_headlines() {
    let report = Report::build(&fixture());

    let most = report.section("1.1").unwrap();
    assert_eq!(most.summary, vec!["Teams with the most wins: India (2 wins)"]);

    let toss = report.section("1.3").unwrap();
    assert_eq!(toss.summary, vec!["Toss winner also won the match 0 times out of 4 matches."]);

    let venue = report.section("1.4").unwrap();
    assert_eq!(venue.table.nrows(), 3);

    let scorers = report.section("2.1").unwrap();
    assert_eq!(scorers.table.rows[0], vec!["Rishabh Pant", "8"]);
}

#[test]
fn thresholds_nobody_meets_say_so() {
    let report = Report::build(&fixture());
    for id in ["2.3", "2.4"] {
        let s = report.section(id).unwrap();
        assert!(s.table.is_empty(), "{id} should have no rows");
        assert_eq!(s.summary, vec!["No qualifying players"]);
    }
}

#[test]
fn empty_tournament_still_builds_every_section() {
    let report = Report::build(&Tournament::new(Vec::new(), Vec::new()));
    assert_eq!(report.sections.len(), IDS.len());

    let choice = report.section("1.5").unwrap();
    assert!(choice.table.rows.iter().all(|r| r[1] == "n/a"));

    let phases = report.section("2.7").unwrap();
    assert_eq!(phases.summary.len(), 3);
    match &phases.plot {
        Plot::Bars { panels, .. } => assert!(panels.iter().all(|p| p.bars.is_empty())),
        other => panic!("expected bars, got {other:?}"),
    }
}

#[derive(Default)]
struct Counting {
    total: usize,
    done: Vec<String>,
    finished: bool,
    notes: Vec<String>,
}

impl Progress for Counting {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { self.notes.push(msg.to_string()); }
    fn item_done(&mut self, id: &str) { self.done.push(id.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_every_section() {
    let mut prog = Counting::default();
    Report::build_with(&fixture(), &mut prog);
    assert_eq!(prog.total, IDS.len());
    assert_eq!(prog.done, IDS);
    assert!(prog.finished);
    assert!(prog.notes.is_empty());
}

#[test]
fn empty_dataset_is_reported_through_progress() {
    let mut prog = Counting::default();
    Report::build_with(&Tournament::new(Vec::new(), Vec::new()), &mut prog);
    assert_eq!(prog.notes, vec![EMPTY_DATASET]);
    assert_eq!(prog.done.len(), IDS.len());

    let mut status = String::new();
    Report::build_with(&Tournament::new(Vec::new(), Vec::new()), &mut GuiProgress::new(&mut status));
    assert_eq!(status, format!("Report ready (21/21 sections): {EMPTY_DATASET}"));

    Report::build_with(&fixture(), &mut GuiProgress::new(&mut status));
    assert_eq!(status, "Report ready (21/21 sections)");
}

#[test]
fn unplotted_bar_sections_carry_their_own_note() {
    let report = Report::build(&Tournament::new(Vec::new(), Vec::new()));
    let mut unplotted = Vec::new();
    for section in &report.sections {
        let Plot::Bars { panels, .. } = &section.plot else { continue };
        if section.id == "2.7" || !panels.iter().all(|p| p.bars.is_empty()) {
            continue;
        }
        let note = if section.group == Group::Players { "No qualifying players" } else { "No data" };
        assert_eq!(section.summary, vec![note], "{}", section.id);
        unplotted.push(section.id);
    }
    assert_eq!(unplotted, ["1.2", "2.1", "2.2", "2.3", "2.4", "3.1", "3.3", "3.4", "3.5"]);
}

#[test]
fn one_tab_per_group_in_report_order() {
    let groups: Vec<Group> = router::all_pages().iter().map(|p| p.group()).collect();
    assert_eq!(groups, Group::ALL);
}
