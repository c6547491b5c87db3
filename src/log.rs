// src/log.rs
use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::consts::LOG_FILE;
use crate::error::Result;

pub fn default_log_path(store_dir: &Path) -> PathBuf {
    store_dir.join(LOG_FILE)
}

/// Route `tracing` output to an append-mode log file. `RUST_LOG` overrides the
/// default `info` filter. A second call is a no-op.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_ansi(false).with_target(false).with_writer(Mutex::new(file)))
        .try_init();
    Ok(())
}
