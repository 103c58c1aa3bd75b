// tests/table.rs
use t20_insights::metrics::{ Order, Ranking, Stat };
use t20_insights::table::Table;

#[test]
fn stat_formats_two_decimals_or_na() {
    assert_eq!(Stat::ratio(1.0, 3.0).to_string(), "0.33");
    assert_eq!(Stat::percent(1.0, 0.0).to_string(), "n/a");
    assert!(Stat::NotApplicable < Stat::Value(-1.0));
}

#[test]
fn ranking_breaks_ties_by_label() {
    let r = Ranking::from_pairs(vec![("b", 2u32), ("a", 2), ("c", 5)], Order::Descending, Some(2));
    assert_eq!(r.labels(), vec!["c", "a"]);

    let r = Ranking::from_pairs(vec![("b", 1.5), ("a", 0.5)], Order::Ascending, None);
    assert_eq!(r.labels(), vec!["a", "b"]);
}

#[test]
fn ranking_table_and_text_alignment() {
    let r = Ranking::from_pairs(vec![("Long Name", 12.5), ("X", 3.0)], Order::Descending, None);
    let t = Table::from_ranking(&["Player", "Rate"], &r);
    assert_eq!(t.rows[1], vec!["X", "3.00"]);
    assert_eq!(t.numeric_columns(), vec![false, true]);
    assert_eq!(
        t.to_text(),
        "Player      Rate\n---------  -----\nLong Name  12.50\nX           3.00\n"
    );
}
