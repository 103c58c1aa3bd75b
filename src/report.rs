// src/report.rs
//! Report: every metric computed once, in dashboard order, each wrapped as a
//! [`Section`] that display layers (GUI, CLI, export) consume without knowing
//! which metric produced it.
//!
//! ```text
//! data::load → Tournament → Report::build → Section { summary, table, plot }
//!                                              ↘ gui / cli / file
//! ```
//!
//! Section ids and question titles follow the dashboard's numbering
//! (1.1 … 4.1). A section never fails: undefined ratios show as `n/a`, empty
//! rankings carry a "No qualifying players" / "No data" note.

use serde::Serialize;

use crate::data::Tournament;
use crate::metrics::{ Ranking, batting, bowling, matches, players };
use crate::metrics::players::Phase;
use crate::progress::{ NullProgress, Progress };
use crate::table::{ Cell, Table };

pub const REPORT_TITLE: &str = "ICC Men's T20 World Cup 2024 Analysis";

const NO_PLAYERS: &str = "No qualifying players";
const NO_DATA: &str = "No data";
pub const EMPTY_DATASET: &str = "No matches or deliveries loaded";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Group {
    Matches,
    Players,
    Batting,
    Bowling,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Matches, Group::Players, Group::Batting, Group::Bowling];

    pub fn heading(self) -> &'static str {
        match self {
            Group::Matches => "1. Matches Analysis",
            Group::Players => "2. Player Performance Analysis",
            Group::Batting => "3. Batting Performance Analysis",
            Group::Bowling => "4. Bowling Performance Analysis",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Group::Matches => "Matches",
            Group::Players => "Players",
            Group::Batting => "Batting",
            Group::Bowling => "Bowling",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Axes {
    pub x: &'static str,
    pub y: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BarPanel {
    pub title: Option<String>,
    pub bars: Vec<(String, f64)>,
    /// Fixed upper bound for the value axis (e.g. 100 for percentages).
    pub max: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Plot {
    /// Text / table only.
    None,
    Bars { axes: Axes, panels: Vec<BarPanel> },
    Line { axes: Axes, points: Vec<Point> },
    Scatter { axes: Axes, points: Vec<Point> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub group: Group,
    pub title: &'static str,
    pub summary: Vec<String>,
    pub table: Table,
    pub plot: Plot,
}

impl Section {
    pub fn heading(&self) -> String {
        format!("{}. {}", self.id, self.title)
    }

    pub fn to_text(&self) -> String {
        let mut out = self.heading();
        out.push('\n');
        for line in &self.summary {
            out.push_str(line);
            out.push('\n');
        }
        if !self.table.is_empty() {
            out.push_str(&self.table.to_text());
        }
        out
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub title: &'static str,
    pub sections: Vec<Section>,
}

type Builder = fn(&Tournament) -> Section;

const BUILDERS: &[Builder] = &[
    most_wins,
    win_percentage,
    toss_impact,
    winningest_venue,
    toss_choice,
    innings_win_rate,
    top_run_scorers,
    top_wicket_takers,
    best_strike_rates,
    best_economy_rates,
    consistent_batters,
    consistent_bowlers,
    phase_splits,
    runs_per_over_by_team,
    runs_by_ball_number,
    best_partnerships,
    boundary_contribution,
    dot_ball_percentage,
    strike_rate_vs_run_rate,
    batting_order_split,
    dot_ball_impact,
];

impl Report {
    pub fn build(t: &Tournament) -> Self {
        Self::build_with(t, &mut NullProgress)
    }

    pub fn build_with(t: &Tournament, progress: &mut dyn Progress) -> Self {
        progress.begin(BUILDERS.len());
        if t.is_empty() {
            logf!("Report: empty dataset, building placeholders");
            progress.log(EMPTY_DATASET);
        }
        let mut sections = Vec::with_capacity(BUILDERS.len());
        for build in BUILDERS {
            let section = build(t);
            logd!("Report: {} rows={}", section.id, section.table.nrows());
            progress.item_done(section.id);
            sections.push(section);
        }
        progress.finish();
        logf!("Report: built {} sections", sections.len());
        Self { title: REPORT_TITLE, sections }
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn group(&self, group: Group) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.group == group)
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, "=".repeat(self.title.len()));
        for group in Group::ALL {
            out.push('\n');
            out.push_str(group.heading());
            out.push('\n');
            for section in self.group(group) {
                out.push('\n');
                out.push_str(&section.to_text());
            }
        }
        out
    }
}

/* ---------------- section builders ---------------- */

fn text_section(id: &'static str, group: Group, title: &'static str, summary: Vec<String>, table: Table) -> Section {
    Section { id, group, title, summary, table, plot: Plot::None }
}

fn bars<V: Cell>(ranking: &Ranking<V>) -> Vec<(String, f64)> {
    ranking
        .iter()
        .filter_map(|e| e.value.magnitude().map(|v| (e.label.clone(), v)))
        .collect()
}

struct BarSpec {
    id: &'static str,
    group: Group,
    title: &'static str,
    headers: [&'static str; 2],
    axes: Axes,
    max: Option<f64>,
    empty_note: &'static str,
}

/// The note goes in the summary whenever nothing is plotted; charts draw no
/// text of their own.
fn bar_section<V: Cell>(bar: BarSpec, ranking: &Ranking<V>) -> Section {
    let plotted = bars(ranking);
    let summary = if plotted.is_empty() { vec![bar.empty_note.to_string()] } else { Vec::new() };
    Section {
        id: bar.id,
        group: bar.group,
        title: bar.title,
        summary,
        table: Table::from_ranking(&bar.headers, ranking),
        plot: Plot::Bars {
            axes: bar.axes,
            panels: vec![BarPanel { title: None, bars: plotted, max: bar.max }],
        },
    }
}

fn table_section<V: Cell>(
    id: &'static str,
    title: &'static str,
    headers: [&'static str; 2],
    ranking: &Ranking<V>,
) -> Section {
    let summary = if ranking.is_empty() { vec![NO_PLAYERS.to_string()] } else { Vec::new() };
    text_section(id, Group::Players, title, summary, Table::from_ranking(&headers, ranking))
}

fn most_wins(t: &Tournament) -> Section {
    let mut table = Table::new(&["Team", "Wins"]);
    let summary = match matches::most_wins(t.matches()) {
        Some(top) => {
            for team in &top.teams {
                table.push_row(vec![team.clone(), top.wins.cell()]);
            }
            vec![top.summary()]
        }
        None => vec![s!("Teams with the most wins: n/a (no match has a winner)")],
    };
    text_section("1.1", Group::Matches, "Which team won the most matches?", summary, table)
}

fn win_percentage(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "1.2",
            group: Group::Matches,
            title: "What is the win percentage of each team?",
            headers: ["Team", "Win %"],
            axes: Axes { x: "Win Percentage", y: "Teams" },
            max: Some(100.0),
            empty_note: NO_DATA,
        },
        &matches::win_percentage(t.matches()),
    )
}

fn toss_impact(t: &Tournament) -> Section {
    let impact = matches::toss_impact(t.matches());
    let mut table = Table::new(&["Toss winner also won", "Matches", "Share %"]);
    table.push_row(vec![
        impact.toss_and_match.to_string(),
        impact.total.to_string(),
        impact.share().cell(),
    ]);
    text_section(
        "1.3",
        Group::Matches,
        "How does the toss outcome affect the match result?",
        vec![impact.summary()],
        table,
    )
}

fn winningest_venue(t: &Tournament) -> Section {
    let mut table = Table::new(&["Venue", "Team", "Wins"]);
    let summary = match matches::winningest_venue(t.matches()) {
        Some(leaders) => {
            for vt in &leaders.leaders {
                table.push_row(vec![vt.venue.clone(), vt.team.clone(), leaders.wins.cell()]);
            }
            leaders.summary()
        }
        None => vec![s!("The most common venue for winning: n/a (no match has a winner)")],
    };
    text_section("1.4", Group::Matches, "What are the most common venues for winning?", summary, table)
}

fn toss_choice(t: &Tournament) -> Section {
    let rate = matches::toss_choice_win_rate(t.matches());
    let mut table = Table::new(&["Toss decision", "Win % (of all matches)"]);
    table.push_row(vec![s!("bat"), rate.bat.cell()]);
    table.push_row(vec![s!("field"), rate.field.cell()]);
    text_section(
        "1.5",
        Group::Matches,
        "How often do teams win after choosing to bat or bowl?",
        rate.summary(),
        table,
    )
}

fn innings_win_rate(t: &Tournament) -> Section {
    let rate = matches::innings_win_rate(t.matches());
    let mut table = Table::new(&["Innings", "Win %"]);
    table.push_row(vec![s!("Batting first"), rate.batting_first.cell()]);
    table.push_row(vec![s!("Chasing"), rate.chasing.cell()]);
    text_section(
        "1.6",
        Group::Matches,
        "How does team performance vary between batting first and chasing targets?",
        rate.summary(),
        table,
    )
}

fn top_run_scorers(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "2.1",
            group: Group::Players,
            title: "Top Run Scorers of the Tournament",
            headers: ["Player", "Runs"],
            axes: Axes { x: "Runs Scored", y: "Players" },
            max: None,
            empty_note: NO_PLAYERS,
        },
        &players::top_run_scorers(t.deliveries()),
    )
}

fn top_wicket_takers(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "2.2",
            group: Group::Players,
            title: "Top Wicket-Takers of the Tournament",
            headers: ["Bowler", "Wickets"],
            axes: Axes { x: "Wickets Taken", y: "Bowlers" },
            max: None,
            empty_note: NO_PLAYERS,
        },
        &players::top_wicket_takers(t.deliveries()),
    )
}

fn best_strike_rates(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "2.3",
            group: Group::Players,
            title: "Players with the Highest Strike Rates (Runs > 150)",
            headers: ["Player", "Strike Rate"],
            axes: Axes { x: "Strike Rate", y: "Players" },
            max: None,
            empty_note: NO_PLAYERS,
        },
        &players::best_strike_rates(t.deliveries()),
    )
}

fn best_economy_rates(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "2.4",
            group: Group::Players,
            title: "Players with the Best Economy Rates (Minimum 150 Balls)",
            headers: ["Bowler", "Economy Rate"],
            axes: Axes { x: "Economy Rate", y: "Bowlers" },
            max: None,
            empty_note: NO_PLAYERS,
        },
        &players::best_economy_rates(t.deliveries()),
    )
}

fn consistent_batters(t: &Tournament) -> Section {
    table_section(
        "2.5",
        "Consistent Batters",
        ["Batsman", "Average Runs per Innings"],
        &players::consistent_batters(t.deliveries()),
    )
}

fn consistent_bowlers(t: &Tournament) -> Section {
    table_section(
        "2.6",
        "Consistent Bowlers",
        ["Bowler", "Average Wickets per Match"],
        &players::consistent_bowlers(t.deliveries()),
    )
}

fn phase_splits(t: &Tournament) -> Section {
    let splits = players::phase_splits(t.deliveries());
    let mut table = Table::new(&["Phase", "Player", "Runs"]);
    let mut panels = Vec::with_capacity(Phase::ALL.len());
    let mut summary = Vec::new();

    for phase in Phase::ALL {
        let ranking = splits.get(phase);
        for e in ranking {
            table.push_row(vec![phase.label().to_string(), e.label.clone(), e.value.cell()]);
        }
        if ranking.is_empty() {
            summary.push(format!("{}: {}", phase.label(), NO_PLAYERS));
        }
        panels.push(BarPanel {
            title: Some(format!("Top 10 Players in {}", phase.label())),
            bars: bars(ranking),
            max: None,
        });
    }

    Section {
        id: "2.7",
        group: Group::Players,
        title: "Player Performances in Powerplay, Middle Overs, and Death Overs",
        summary,
        table,
        plot: Plot::Bars { axes: Axes { x: "Runs Scored", y: "Player" }, panels },
    }
}

fn runs_per_over_by_team(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "3.1",
            group: Group::Batting,
            title: "Teams score the most runs per over",
            headers: ["Team", "Runs Per Over"],
            axes: Axes { x: "Runs Per Over", y: "Teams" },
            max: None,
            empty_note: NO_DATA,
        },
        &batting::runs_per_over_by_team(t.deliveries()),
    )
}

fn runs_by_ball_number(t: &Tournament) -> Section {
    let slots = batting::runs_by_ball_number(t.deliveries(), t.ball_numbers());
    let mut table = Table::new(&["Batting Position", "Runs Per Ball"]);
    for s in &slots {
        table.push_row(vec![s.ball_number.to_string(), s.runs_per_ball.cell()]);
    }
    let summary = if slots.is_empty() { vec![s!(NO_DATA)] } else { Vec::new() };
    Section {
        id: "3.2",
        group: Group::Batting,
        title: "Batting Performance vary by batting position",
        summary,
        table,
        plot: Plot::Line {
            axes: Axes { x: "Batting Position (Cumulative Balls Faced)", y: "Average Runs Per Ball" },
            points: slots.iter().map(|s| Point { x: s.ball_number as f64, y: s.runs_per_ball }).collect(),
        },
    }
}

fn best_partnerships(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "3.3",
            group: Group::Batting,
            title: "Most Successful Batting Partnerships",
            headers: ["Partnership", "Total Runs"],
            axes: Axes { x: "Total Runs Scored", y: "Partnership" },
            max: None,
            empty_note: NO_DATA,
        },
        &batting::best_partnerships(t.deliveries()),
    )
}

fn boundary_contribution(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "3.4",
            group: Group::Batting,
            title: "Frequency of Boundaries Affect the Overall Score",
            headers: ["Team", "Boundary %"],
            axes: Axes { x: "Boundary Percentage", y: "Team" },
            max: None,
            empty_note: NO_DATA,
        },
        &batting::boundary_contribution(t.deliveries()),
    )
}

fn dot_ball_percentage(t: &Tournament) -> Section {
    bar_section(
        BarSpec {
            id: "3.5",
            group: Group::Batting,
            title: "Percentage of Balls are Dot Balls",
            headers: ["Team", "Dot Ball %"],
            axes: Axes { x: "Dot Ball Percentage", y: "Team" },
            max: Some(100.0),
            empty_note: NO_DATA,
        },
        &batting::dot_ball_percentage(t.deliveries(), t.dot_flags()),
    )
}

fn strike_rate_vs_run_rate(t: &Tournament) -> Section {
    let points = batting::strike_rate_vs_run_rate(t.deliveries());
    let mut table = Table::new(&["Batsman", "Strike Rate", "Runs per Over"]);
    for p in &points {
        table.push_row(vec![p.label.clone(), p.strike_rate.cell(), p.runs_per_over.cell()]);
    }
    let summary = if points.is_empty() { vec![s!(NO_DATA)] } else { Vec::new() };
    Section {
        id: "3.6",
        group: Group::Batting,
        title: "Relationship between Strike Rate and Average Runs per Over for Different Batsmen",
        summary,
        table,
        plot: Plot::Scatter {
            axes: Axes { x: "Strike Rate", y: "Runs per Over" },
            points: points.iter().map(|p| Point { x: p.strike_rate, y: p.runs_per_over }).collect(),
        },
    }
}

fn batting_order_split(t: &Tournament) -> Section {
    let split = batting::batting_order_split(t.deliveries(), t.ball_numbers());
    let mut table = Table::new(&["Batting Order", "Total Runs"]);
    let mut bars = Vec::with_capacity(2);
    for (label, runs) in split.buckets() {
        table.push_row(vec![label.to_string(), runs.cell()]);
        bars.push((label.to_string(), runs as f64));
    }
    Section {
        id: "3.7",
        group: Group::Batting,
        title: "How do different batting orders (opening vs. middle order) affect total scores?",
        summary: Vec::new(),
        table,
        plot: Plot::Bars {
            axes: Axes { x: "Total Runs", y: "Batting Order" },
            panels: vec![BarPanel { title: None, bars, max: None }],
        },
    }
}

fn dot_ball_impact(t: &Tournament) -> Section {
    let rates = bowling::dot_ball_impact(t.deliveries(), t.dot_flags());
    let mut table = Table::new(&["Match ID", "Dot Ball %"]);
    for r in &rates {
        table.push_row(vec![r.match_id.cell(), r.dot_percentage.cell()]);
    }
    let summary = if rates.is_empty() { vec![s!(NO_DATA)] } else { Vec::new() };
    Section {
        id: "4.1",
        group: Group::Bowling,
        title: "The Impact of Dot Balls on the Opposition's Scoring Rate",
        summary,
        table,
        plot: Plot::Scatter {
            axes: Axes { x: "Match ID", y: "Dot Ball Percentage (%)" },
            points: rates.iter().map(|r| Point { x: r.match_id as f64, y: r.dot_percentage }).collect(),
        },
    }
}
