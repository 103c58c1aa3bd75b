// src/lib.rs
//! ICC Men's T20 World Cup 2024 metrics: load the match and delivery tables,
//! compute every dashboard metric, show them (GUI / CLI) or export them.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod progress;
pub mod report;
pub mod table;

pub mod file;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use data::Tournament;
pub use error::{ ExportError, LoadError };
pub use report::{ Report, Section };
