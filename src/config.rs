use serde::Deserialize;
use std::path::Path;

use crate::recommend::{RecommendOptions, DEFAULT_LIMIT, DEFAULT_MIN_RATINGS};

pub const DEFAULT_CONFIG_FILE: &str = "genre-recommender.yaml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub recommend: RecommendConfig,
    #[serde(default)]
    pub appdir: Option<String>,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: None,
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_movies")]
    pub movies: String,
    #[serde(default = "default_ratings")]
    pub ratings: String,
    /// Seconds between reloads of the data files. 0 disables.
    #[serde(default, alias = "reloadinterval")]
    pub reload_interval: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            movies: default_movies(),
            ratings: default_ratings(),
            reload_interval: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendConfig {
    #[serde(default = "default_min_ratings", alias = "minratings")]
    pub min_ratings: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            min_ratings: default_min_ratings(),
            limit: default_limit(),
        }
    }
}

impl RecommendConfig {
    pub fn options(&self) -> RecommendOptions {
        RecommendOptions {
            min_ratings: self.min_ratings,
            limit: self.limit,
        }
    }
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_movies() -> String {
    "movies.csv".to_string()
}

fn default_ratings() -> String {
    "ratings.csv".to_string()
}

fn default_min_ratings() -> usize {
    DEFAULT_MIN_RATINGS
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, source: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::ParseError(source.to_string(), e))?;

        if config.recommend.limit == 0 {
            return Err(ConfigError::Invalid("recommend.limit must be at least 1".to_string()));
        }

        Ok(config)
    }

    /// An explicit path must exist. Without one, the default file is used
    /// if present, else built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Config::default()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
