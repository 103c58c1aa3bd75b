// src/gui/router.rs
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::matches::PAGE,
    &pages::players::PAGE,
    &pages::batting::PAGE,
    &pages::bowling::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}
