//! Tracing subscriber setup
//!
//! The level filter sits behind a reload layer so the level can be changed
//! at runtime; the console layer is optional.

use crate::error::{Result, ViewError};
use mfconfig::Config;
use tracing::Level;
use tracing_subscriber::{
    filter::LevelFilter, layer::SubscriberExt, reload, util::SubscriberInitExt, Registry,
};

/// Changes the global level after [`init_logging`]
#[derive(Clone)]
pub struct LogHandle {
    reload_handle: reload::Handle<LevelFilter, Registry>,
}

impl LogHandle {
    pub fn set_level(&self, level: &str) -> Result<()> {
        let level = string_to_level(level)
            .ok_or_else(|| ViewError::Logging(format!("unknown level: {}", level)))?;
        self.reload_handle
            .modify(|filter| *filter = LevelFilter::from_level(level))
            .map_err(|e| ViewError::Logging(e.to_string()))
    }

    pub fn level(&self) -> Option<LevelFilter> {
        self.reload_handle.clone_current()
    }
}

/// Install the global subscriber from the `host.logger` configuration
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &Config) -> Result<LogHandle> {
    let level = config
        .get_log_min_level()
        .ok()
        .and_then(|l| string_to_level(&l))
        .map_or(LevelFilter::INFO, LevelFilter::from_level);
    let enable_console = config.get_log_enable_console().unwrap_or(true);

    let (filter, reload_handle) = reload::Layer::new(level);
    let console = enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
    });

    Registry::default()
        .with(filter)
        .with(console)
        .try_init()
        .map_err(|e| ViewError::Logging(e.to_string()))?;

    Ok(LogHandle { reload_handle })
}

fn string_to_level(level: &str) -> Option<Level> {
    match level.trim().to_ascii_uppercase().as_str() {
        "ERROR" => Some(Level::ERROR),
        "WARN" | "WARNING" => Some(Level::WARN),
        "INFO" => Some(Level::INFO),
        "DEBUG" => Some(Level::DEBUG),
        "TRACE" => Some(Level::TRACE),
        _ => None,
    }
}
