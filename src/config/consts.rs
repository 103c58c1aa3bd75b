// src/config/consts.rs

// Source data
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_MATCHES_FILE: &str = "matches.csv";
pub const DEFAULT_DELIVERIES_FILE: &str = "deliveries.csv";

// Local logs
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "report";

// Rankings
pub const TOP_N: usize = 10;
pub const BALLS_PER_OVER: f64 = 6.0;

/// Strike-rate table only lists strikers with strictly more career runs than this.
pub const STRIKE_RATE_MIN_RUNS: u32 = 150;

/// Economy table only lists bowlers with at least this many balls bowled.
pub const ECONOMY_MIN_BALLS: u32 = 150;

/// Per-innings ball numbers up to and including this count as "Opening".
pub const OPENING_MAX_BALL: u32 = 24;

// Phase bands on the raw `over.ball` value, both ends inclusive.
pub const POWERPLAY_BAND: (f64, f64) = (0.1, 6.6);
pub const MIDDLE_BAND: (f64, f64) = (7.1, 15.6);
pub const DEATH_BAND: (f64, f64) = (16.1, 20.6);
