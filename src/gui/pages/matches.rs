// src/gui/pages/matches.rs
use crate::report::Group;
use super::Page;

pub struct MatchesPage;
pub static PAGE: MatchesPage = MatchesPage;

impl Page for MatchesPage {
    fn group(&self) -> Group { Group::Matches }

    fn blurb(&self) -> Option<&'static str> {
        Some("Results, tosses and venues across all matches.")
    }
}
