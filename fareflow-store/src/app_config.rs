use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub business_rules: BusinessRules,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    /// Validity window of a price session.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_seconds: i64,
    /// Cadence of the expired-session purge task.
    #[serde(default = "default_purge_interval")]
    pub purge_interval_seconds: u64,
}

fn default_session_ttl() -> i64 {
    900
}

fn default_purge_interval() -> u64 {
    300
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Layer the environment-specific file on top (optional)
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in to git
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `FAREFLOW__SERVER__PORT=9000` overrides server.port
            .add_source(config::Environment::with_prefix("FAREFLOW").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
