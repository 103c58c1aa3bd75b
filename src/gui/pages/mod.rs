// src/gui/pages/mod.rs
use crate::report::Group;

pub mod batting;
pub mod bowling;
pub mod matches;
pub mod players;

/// One dashboard tab: a report group plus its framing text.
pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str {
        self.group().label()
    }

    fn group(&self) -> Group;

    /// Optional line shown above the tab's sections.
    fn blurb(&self) -> Option<&'static str> {
        None
    }
}
