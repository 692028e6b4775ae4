pub mod calculation;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod history;
pub mod imbalance;
pub mod logging;
pub mod models;
pub mod norms;
pub mod scorer;
pub mod scoring;

#[cfg(test)]
mod test_utils;

use clap::Parser;
use config::AppConfig;
use db::AppState;
use norms::NormTables;
use std::process::ExitCode;
use std::sync::Arc;

/// Built-in tables, or the JSON file named by the config
fn load_tables(config: &AppConfig) -> Result<NormTables, String> {
  let tables = match &config.norms_path {
    Some(path) => NormTables::load(path).map_err(|e| format!("Failed to load norm tables: {}", e))?,
    None => NormTables::standard(),
  };
  tables
    .validate()
    .map_err(|e| format!("Invalid norm tables: {}", e))?;
  Ok(tables)
}

async fn run_command(command: cli::Commands, config: AppConfig) -> Result<String, String> {
  // The preset needs neither tables nor a database
  if matches!(command, cli::Commands::Preset) {
    return serde_json::to_string_pretty(&commands::get_preset())
      .map_err(|e| format!("Failed to serialize output: {}", e));
  }

  let tables = load_tables(&config)?;
  let pool = db::initialize_db(&config.db_path)
    .await
    .map_err(|e| format!("Failed to initialize database: {}", e))?;

  let state = AppState {
    db: pool,
    tables: Arc::new(tables),
    history_capacity: config.history_capacity,
  };

  let output = cli::execute(command, &state).await;
  state.db.close().await;
  output
}

pub fn run() -> ExitCode {
  let cli = cli::Cli::parse();

  let config = match AppConfig::load() {
    Ok(config) => config,
    Err(e) => {
      eprintln!("{}", e);
      return ExitCode::FAILURE;
    }
  };
  logging::init(&config.log_level);

  let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
    Ok(runtime) => runtime,
    Err(e) => {
      tracing::error!(error = %e, "Failed to start async runtime");
      return ExitCode::FAILURE;
    }
  };

  match runtime.block_on(run_command(cli.command, config)) {
    Ok(output) => {
      print!("{}", output);
      if !output.is_empty() && !output.ends_with('\n') {
        println!();
      }
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("{}", e);
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_builtin_tables_load() {
    let tables = load_tables(&AppConfig::default()).unwrap();
    assert_eq!(tables, NormTables::standard());
  }

  #[test]
  fn test_missing_norms_file_is_reported() {
    let config = AppConfig {
      norms_path: Some("/nonexistent/norms.json".into()),
      ..AppConfig::default()
    };
    let err = load_tables(&config).unwrap_err();
    assert!(err.starts_with("Failed to load norm tables"));
  }

  #[tokio::test]
  async fn test_preset_skips_database() {
    let config = AppConfig {
      db_path: "/nonexistent/dir/that/cannot/exist/history.db".into(),
      ..AppConfig::default()
    };
    let out = run_command(cli::Commands::Preset, config).await.unwrap();
    assert!(out.contains("Hybrid Athlete"));
  }
}
