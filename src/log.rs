// src/log.rs
//! Logging setup. All call sites use the short `logf!` / `logd!` / `loge!`
//! macros, which forward to `tracing`.
use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::Uptime;

/// GUI logging: append to a file (created on demand), uptime stamps, no colors.
/// A second call keeps the first subscriber and says so on stderr.
pub fn init_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let res = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .try_init();
    if let Err(e) = res {
        eprintln!("Logging: {e}");
    }
    Ok(())
}

/// CLI logging: stderr, `RUST_LOG` wins; otherwise `warn`, or `debug` when verbose.
pub fn init_stderr(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let res = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
    if let Err(e) = res {
        eprintln!("Logging: {e}");
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
