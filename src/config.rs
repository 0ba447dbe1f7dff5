use config::{Config, ConfigError, Environment, Source};
use serde::Deserialize;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// SQLite database file, created on first start.
    pub db_path: String,
    pub bind_addr: String,
}

impl Settings {
    /// Reads `DB_PATH` and `BIND_ADDR` from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(Environment::default())
    }

    pub fn from_source<S>(source: S) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .add_source(source)
            .build()?
            .try_deserialize()
    }
}
