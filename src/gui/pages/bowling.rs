// src/gui/pages/bowling.rs
use crate::report::Group;
use super::Page;

pub struct BowlingPage;
pub static PAGE: BowlingPage = BowlingPage;

impl Page for BowlingPage {
    fn group(&self) -> Group { Group::Bowling }
}
