// src/gui/pages/players.rs
use crate::report::Group;
use super::Page;

pub struct PlayersPage;
pub static PAGE: PlayersPage = PlayersPage;

impl Page for PlayersPage {
    fn group(&self) -> Group { Group::Players }

    fn blurb(&self) -> Option<&'static str> {
        Some("Strike rates need more than 150 runs; economy rates need at least 150 balls bowled.")
    }
}
