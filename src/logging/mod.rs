// src/logging/mod.rs
use log::LevelFilter;

/// Install the global logger. Output goes to stderr so `--json` stdout stays clean.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        // actix access logs are noisy below info
        .filter_module("actix_server", level.min(LevelFilter::Info))
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .parse_default_env()
        .try_init();

    if let Err(e) = result {
        log::debug!("Logger already initialised: {}", e);
    }
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
