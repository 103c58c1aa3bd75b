// src/gui/actions/mod.rs
//
// Folder module facade: consumers only see actions::{copy,export}.

mod copy;
mod export;

pub use copy::copy;
pub use export::export;
