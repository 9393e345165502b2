//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::domain::evaluation::FitnessWeights;

#[derive(Clone, Debug, Deserialize)]
/// Settings of the evaluator HTTP server.
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pins the number of worker threads; the server default is used when unset.
    #[serde(default)]
    pub workers: Option<usize>,
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
    /// Upper bound on `max(individual) + 1`.
    #[serde(default = "default_max_cores")]
    pub max_cores: usize,
    #[serde(default)]
    pub fitness: FitnessWeights,
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_max_payload_bytes() -> usize {
    1024 * 1024
}

fn default_max_cores() -> usize {
    1024
}

impl ServerConfig {
    /// Layers `config/default.yaml`, `config/{app_env}.yaml` and `APP_*`
    /// environment variables, later sources overriding earlier ones.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            // `APP_FITNESS__MAKESPAN` maps to `fitness.makespan`.
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()
            .and_then(|config| config.validate().map(|()| config))
    }

    /// Rejects values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == Some(0) {
            return Err(ConfigError::Message(
                "workers must be greater than zero".to_string(),
            ));
        }
        if self.max_cores == 0 {
            return Err(ConfigError::Message(
                "max_cores must be greater than zero".to_string(),
            ));
        }
        if self.max_payload_bytes == 0 {
            return Err(ConfigError::Message(
                "max_payload_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
