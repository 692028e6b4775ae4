//! Runtime configuration from the environment
//!
//! Values come from process env vars, optionally seeded from a `.env` file.

use std::env;
use std::path::PathBuf;

use crate::history::DEFAULT_HISTORY_CAPACITY;

const DEFAULT_DB_PATH: &str = "combine-rating.db";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("Invalid value for {key}: {value}")]
  InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  /// SQLite file holding saved history
  pub db_path: PathBuf,
  /// JSON norm tables to use instead of the built-in ones
  pub norms_path: Option<PathBuf>,
  pub history_capacity: usize,
  pub log_level: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      db_path: PathBuf::from(DEFAULT_DB_PATH),
      norms_path: None,
      history_capacity: DEFAULT_HISTORY_CAPACITY,
      log_level: DEFAULT_LOG_LEVEL.to_string(),
    }
  }
}

impl AppConfig {
  /// Load `.env` if present, then read config from the environment
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }

  pub fn from_env() -> Result<Self, ConfigError> {
    let defaults = Self::default();

    let history_capacity = match env::var("HISTORY_CAPACITY") {
      Ok(raw) => raw
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(ConfigError::InvalidValue {
          key: "HISTORY_CAPACITY".into(),
          value: raw,
        })?,
      Err(_) => defaults.history_capacity,
    };

    Ok(Self {
      db_path: env::var("COMBINE_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or(defaults.db_path),
      norms_path: env::var("COMBINE_NORMS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from),
      history_capacity,
      log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
    })
  }
}
