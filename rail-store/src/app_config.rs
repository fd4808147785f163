use serde::Deserialize;
use std::env;

use crate::reference::ReferenceStrategy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub seat_plans: SeatPlanConfig,
    #[serde(default)]
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatPlanConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default = "default_max_seats")]
    pub max_seats_per_request: u32,
    #[serde(default)]
    pub reference_strategy: ReferenceStrategy,
    /// First value handed out by the sequential strategy
    #[serde(default)]
    pub reference_start: u64,
}

fn default_max_seats() -> u32 { 8 }

impl Default for BusinessRules {
    fn default() -> Self {
        Self {
            max_seats_per_request: default_max_seats(),
            reference_strategy: ReferenceStrategy::default(),
            reference_start: 0,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `RAIL_SERVER__PORT=9000` sets `server.port`
            .add_source(config::Environment::with_prefix("RAIL").prefix_separator("_").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Build from an inline TOML document, without files or environment
    pub fn from_toml(contents: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
