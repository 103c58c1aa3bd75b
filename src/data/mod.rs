// src/data/mod.rs
//! Source tables and the shared, read-only tournament context.
//!
//! - `records`: one typed row per match / per delivery.
//! - `load`: CSV → typed rows, with an up-front column check.
//! - `tournament`: the context every metric reads from, plus the two derived
//!   columns (per-innings ball number, dot-ball flag) computed once.

pub mod load;
pub mod records;
pub mod tournament;

pub use records::{ Delivery, Match, TossDecision };
pub use tournament::{ BallNumbers, DotFlags, Tournament, derive_ball_numbers, derive_dot_flags };
