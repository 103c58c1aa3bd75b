// tests/export.rs
//
// File export and clipboard text for report sections.
mod common;

use std::fs;

use t20_insights::config::options::{ ExportFormat, ExportOptions, ExportType };
use t20_insights::error::ExportError;
use t20_insights::file::{ self, export_sections, resolve_unique_filename, sanitize_file_stem };
use t20_insights::report::{ Group, Plot, Report, Section };
use t20_insights::table::Table;

fn section(id: &'static str, title: &'static str) -> Section {
    let mut table = Table::new(&["Team", "Wins"]);
    table.push_row(vec!["India, Asia".into(), "2".into()]);
    table.push_row(vec!["Australia".into(), "1".into()]);
    Section {
        id,
        group: Group::Matches,
        title,
        summary: vec!["line".into()],
        table,
        plot: Plot::None,
    }
}

fn opts(dir: &std::path::Path, format: ExportFormat, export_type: ExportType, file: &str) -> ExportOptions {
    let mut export = ExportOptions::default();
    export.format = format;
    export.export_type = export_type;
    export.set_path(dir.join(file).to_str().unwrap());
    export
}

#[test]
fn default_path_tracks_format() {
    let mut export = ExportOptions::default();
    assert!(export.out_path().to_string_lossy().ends_with("report.csv"));
    export.format = ExportFormat::Json;
    assert!(export.out_path().to_string_lossy().ends_with("report.json"));
    export.export_type = ExportType::PerMetric;
    assert!(export.out_path().to_string_lossy().ends_with("out"));
}

#[test]
fn typed_extension_is_replaced_by_format() {
    let mut export = ExportOptions::default();
    export.set_path("results/wins.txt");
    export.format = ExportFormat::Tsv;
    assert!(export.out_path().ends_with("wins.tsv"));
}

#[test]
fn single_csv_quotes_and_separates_sections() {
    let dir = common::tmp_dir("single_csv");
    let a = section("1.1", "First");
    let b = section("1.2", "Second");
    let export = opts(&dir, ExportFormat::Csv, ExportType::SingleFile, "all.csv");

    let written = export_sections(&export, &[&a, &b]).unwrap();
    assert_eq!(written, vec![dir.join("all.csv")]);

    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(
        text,
        "1.1. First\nTeam,Wins\n\"India, Asia\",2\nAustralia,1\n\n1.2. Second\nTeam,Wins\n\"India, Asia\",2\nAustralia,1\n"
    );
}

#[test]
fn tsv_without_headers() {
    let a = section("1.1", "First");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.include_headers = false;
    let text = file::to_export_string(&export, &[&a]).unwrap();
    assert_eq!(text, "1.1. First\nIndia, Asia\t2\nAustralia\t1\n");
}

#[test]
fn json_keeps_summary_and_rows() {
    let a = section("1.1", "First");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Json;
    let text = file::to_export_string(&export, &[&a]).unwrap();

    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v[0]["id"], "1.1");
    assert_eq!(v[0]["summary"][0], "line");
    assert_eq!(v[0]["headers"][1], "Wins");
    assert_eq!(v[0]["rows"][0][0], "India, Asia");

    export.include_headers = false;
    let text = file::to_export_string(&export, &[&a]).unwrap();
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(v[0].get("headers").is_none());
}

#[test]
fn per_metric_writes_one_file_each_and_dedups_names() {
    let dir = common::tmp_dir("per_metric");
    let a = section("1.1", "Same title");
    let b = section("1.1", "Same title");
    let c = section("1.2", "Other?");
    let mut export = ExportOptions::default();
    export.export_type = ExportType::PerMetric;
    export.set_path(dir.to_str().unwrap());

    let written = export_sections(&export, &[&a, &b, &c]).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["1.1_Same_title.csv", "1.1_Same_title (2).csv", "1.2_Other.csv"]);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn nothing_selected_is_an_error() {
    let export = ExportOptions::default();
    assert!(matches!(export_sections(&export, &[]), Err(ExportError::Empty)));
}

#[test]
fn file_in_place_of_directory_is_rejected() {
    let dir = common::tmp_dir("not_a_dir");
    let blocker = dir.join("taken");
    fs::write(&blocker, "x").unwrap();

    let a = section("1.1", "First");
    let mut export = ExportOptions::default();
    export.export_type = ExportType::PerMetric;
    export.set_path(blocker.to_str().unwrap());
    assert!(matches!(export_sections(&export, &[&a]), Err(ExportError::NotADirectory(_))));
}

#[test]
fn file_stems_are_filesystem_friendly() {
    assert_eq!(sanitize_file_stem("3.7 How do (opening vs. middle)?", 0), "3.7_How_do_opening_vs._middle");
    assert_eq!(sanitize_file_stem("???", 4), "section_4");

    let mut seen = Default::default();
    let dir = std::path::Path::new("x");
    assert_eq!(resolve_unique_filename(dir, "a", &mut seen, "csv"), dir.join("a.csv"));
    assert_eq!(resolve_unique_filename(dir, "a", &mut seen, "csv"), dir.join("a (2).csv"));
}

#[test]
fn whole_report_exports_as_one_json_array() {
    let dir = common::tmp_dir("report_json");
    let t = t20_insights::data::load::load_tournament(
        &t20_insights::config::options::DataOptions::in_dir(common::fixtures_dir()),
    )
    .unwrap();
    let report = Report::build(&t);
    let all: Vec<&Section> = report.sections.iter().collect();
    let export = opts(&dir, ExportFormat::Json, ExportType::SingleFile, "report");

    let written = export_sections(&export, &all).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&written[0]).unwrap()).unwrap();
    assert_eq!(v.as_array().map(|a| a.len()), Some(21));
}
