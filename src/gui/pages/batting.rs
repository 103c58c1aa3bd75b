// src/gui/pages/batting.rs
use crate::report::Group;
use super::Page;

pub struct BattingPage;
pub static PAGE: BattingPage = BattingPage;

impl Page for BattingPage {
    fn group(&self) -> Group { Group::Batting }
}
