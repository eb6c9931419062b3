use crate::error::ConfigError;
use serde_derive::Deserialize;
use std::str::FromStr;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl AppConfig {
    pub fn log_level(&self) -> tracing::Level {
        tracing::Level::from_str(self.log_level.as_str()).unwrap_or(tracing::Level::INFO)
    }
}

pub(crate) fn load_app_config() -> Result<AppConfig, ConfigError> {
    envy::from_env::<AppConfig>().map_err(ConfigError::env_parse)
}

fn default_api_url() -> String {
    "https://monitoringapi.solaredge.com".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct SolarEdgeConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    pub api_key: String,
}

pub(crate) fn load_solaredge_config() -> Result<SolarEdgeConfig, ConfigError> {
    envy::prefixed("SOLAREDGE_")
        .from_env::<SolarEdgeConfig>()
        .map_err(ConfigError::env_parse)
}

fn default_collection() -> String {
    "dailyEnergy".to_string()
}

#[derive(Deserialize, Debug)]
pub struct MongoConfig {
    pub url: String,
    pub database: String,
    #[serde(default = "default_collection")]
    pub collection: String,
}

pub(crate) fn load_mongo_config() -> Result<MongoConfig, ConfigError> {
    envy::prefixed("MONGODB_")
        .from_env::<MongoConfig>()
        .map_err(ConfigError::env_parse)
}

fn default_backfill_days() -> u64 {
    1
}

#[derive(Deserialize, Debug)]
pub struct AggregatorConfig {
    // how many past days to aggregate per invocation (1 = yesterday only)
    #[serde(default = "default_backfill_days")]
    pub backfill_days: u64,
}

pub(crate) fn load_aggregator_config() -> Result<AggregatorConfig, ConfigError> {
    envy::prefixed("AGGREGATOR_")
        .from_env::<AggregatorConfig>()
        .map_err(ConfigError::env_parse)
}
