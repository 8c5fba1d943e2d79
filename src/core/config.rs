// src/core/config.rs
use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::generators::{DEFAULT_MAX_LENGTH, MAX_LENGTH_CEILING};

// Configuration for the generator service and its client
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub workers: usize,

    // Password Generation
    pub max_password_length: usize,

    // Client
    pub server_url: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,
            workers: 0, // actix default: one per core

            // Password Generation
            max_password_length: DEFAULT_MAX_LENGTH,

            // Client
            server_url: "http://127.0.0.1:5000".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

// Reads one variable at a time and records why a value was ignored
struct EnvReader<F> {
    lookup: F,
    warnings: Vec<String>,
}

impl<F> EnvReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get<T>(&mut self, key: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = (self.lookup)(key)?;
        match raw.trim().parse() {
            Ok(value) => Some(value),
            Err(e) => {
                self.warnings.push(format!("Ignoring invalid {} '{}': {}", key, raw, e));
                None
            }
        }
    }

    fn reject(&mut self, key: &str, raw: impl Display, reason: &str) {
        self.warnings.push(format!("Ignoring invalid {} '{}': {}", key, raw, reason));
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let (config, warnings) = Self::load_from(|key| env::var(key).ok());
        for warning in &warnings {
            log::warn!("⚠️ {}", warning);
        }
        config
    }

    /// Build a config from `lookup`, returning it with one message per
    /// value that was ignored or adjusted.
    pub fn load_from<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut env = EnvReader { lookup, warnings: Vec::new() };

        // Web Interface
        if let Some(address) = (env.lookup)("PASSGEN_ADDRESS") {
            config.web_address = address;
        }

        if let Some(port) = env.get("PASSGEN_PORT") {
            config.web_port = port;
        }

        if let Some(workers) = env.get("PASSGEN_WORKERS") {
            config.workers = workers;
        }

        // Password Generation
        if let Some(max) = env.get::<usize>("PASSGEN_MAX_LENGTH") {
            if max == 0 {
                env.reject("PASSGEN_MAX_LENGTH", max, "must be at least 1");
            } else if max > MAX_LENGTH_CEILING {
                env.warnings.push(format!(
                    "PASSGEN_MAX_LENGTH {} exceeds {}, clamping",
                    max, MAX_LENGTH_CEILING
                ));
                config.max_password_length = MAX_LENGTH_CEILING;
            } else {
                config.max_password_length = max;
            }
        }

        // Client
        if let Some(url) = (env.lookup)("PASSGEN_SERVER_URL") {
            config.server_url = url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = env.get::<u64>("PASSGEN_TIMEOUT_SECS") {
            if secs == 0 {
                env.reject("PASSGEN_TIMEOUT_SECS", secs, "must be at least 1");
            } else {
                config.request_timeout = Duration::from_secs(secs);
            }
        }

        (config, env.warnings)
    }
}
