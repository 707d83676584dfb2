// src/core/config.rs
use std::env;
use std::time::Duration;
use log::LevelFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Testing,
}

impl Environment {
    fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            "testing" | "test" => Some(Environment::Testing),
            _ => None,
        }
    }
}

// Runtime configuration for the API server and the CLI
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,

    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Rate Limiting
    pub rate_limit_enabled: bool,
    pub rate_limit_requests: u32,
    pub rate_limit_window: Duration,

    // Password Generation (CLI surface)
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,

            // 5000 collides with AirPlay on macOS
            web_address: "0.0.0.0".to_string(),
            web_port: 5001,

            rate_limit_enabled: true,
            rate_limit_requests: 100,
            rate_limit_window: Duration::from_secs(60),

            default_password_length: 16,

            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = lookup("APP_ENV") {
            match Environment::parse(&value) {
                Some(environment) => config.environment = environment,
                None => log::warn!("Unknown environment '{}', using development", value),
            }
        }

        // Tests drive the API in bursts
        if config.environment == Environment::Testing {
            config.rate_limit_enabled = false;
        }

        // Web Interface
        if let Some(address) = lookup("HOST") {
            config.web_address = address;
        }

        if let Some(val) = lookup("PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Invalid PORT '{}', using {}", val, config.web_port),
            }
        }

        // Rate Limiting
        if let Some(val) = lookup("RATELIMIT_ENABLED") {
            if let Ok(enabled) = val.to_lowercase().parse() {
                config.rate_limit_enabled = enabled;
            }
        }

        if let Some(val) = lookup("RATELIMIT_REQUESTS") {
            match val.parse::<u32>() {
                Ok(requests) if requests > 0 => config.rate_limit_requests = requests,
                _ => log::warn!("Invalid RATELIMIT_REQUESTS '{}', using {}", val, config.rate_limit_requests),
            }
        }

        if let Some(val) = lookup("RATELIMIT_WINDOW_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.rate_limit_window = Duration::from_secs(secs),
                _ => log::warn!("Invalid RATELIMIT_WINDOW_SECS '{}', keeping default", val),
            }
        }

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            if let Some(level) = crate::logging::parse_level(&level) {
                config.log_level = level;
            }
        }

        config
    }
}
