use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use subject::SubjectSettings;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub latency_ms: u64,
    pub state_upper_bound: i32,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }

    pub fn subject_settings(&self) -> SubjectSettings {
        SubjectSettings {
            latency_ms: self.latency_ms,
            state_upper_bound: self.state_upper_bound,
        }
    }
}
