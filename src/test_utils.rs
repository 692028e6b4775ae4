//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Athlete input factories
//! - Synthetic norm tables

use crate::calculation::{calculate, Calculation};
use crate::db::AppState;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::models::{AthleteInput, MetricKey, Sex};
use crate::norms::{AgeBand, NormTables};
use sqlx::SqlitePool;
use std::sync::Arc;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// App state over a fresh in-memory database and the built-in tables
pub async fn test_state() -> AppState {
  AppState {
    db: setup_test_db().await,
    tables: Arc::new(NormTables::standard()),
    history_capacity: DEFAULT_HISTORY_CAPACITY,
  }
}

/// Save `count` calculations named "Athlete 0", "Athlete 1", ... with
/// VO2 max rising 5 points per save
pub async fn seed_history(pool: &SqlitePool, count: usize) -> Vec<i64> {
  let tables = NormTables::standard();
  let mut ids = Vec::new();

  for i in 0..count {
    let input = AthleteInput {
      name: Some(format!("Athlete {}", i)),
      vo2max: Some(20.0 + 5.0 * i as f64),
      ..Default::default()
    };
    let calc = calculate(&input, &tables).expect("Failed to calculate seed result");
    let entry = crate::history::save_result(pool, &calc, usize::MAX)
      .await
      .expect("Failed to save seed result");
    ids.push(entry.id);
  }

  ids
}

/// ---------------------------------------------------------------------------
/// Input Factories
/// ---------------------------------------------------------------------------

/// Every metric filled in, bodyweight present
pub fn sample_input() -> AthleteInput {
  AthleteInput::preset()
}

/// Calculation for the sample input against the built-in tables
pub fn sample_calculation() -> Calculation {
  calculate(&sample_input(), &NormTables::standard()).expect("sample input should score")
}

/// Input with only the given plain metrics, everything else missing
pub fn input_with(values: &[(MetricKey, f64)]) -> AthleteInput {
  let mut input = AthleteInput::default();
  for (key, value) in values {
    let v = Some(*value);
    match key {
      MetricKey::Squat => input.squat = v,
      MetricKey::Bench => input.bench = v,
      MetricKey::Deadlift => input.deadlift = v,
      MetricKey::Ohp => input.ohp = v,
      MetricKey::Vo2max => input.vo2max = v,
      MetricKey::Rhr => input.rhr = v,
      MetricKey::Pushups => input.pushups = v,
      MetricKey::Lsit => input.lsit = v,
      MetricKey::R400 => input.r400 = v,
      MetricKey::Pullups => input.pullups = v,
      MetricKey::BwBenchReps => input.bw_bench_reps = v,
      MetricKey::DeadHang => input.dead_hang = v,
      MetricKey::VertJump => input.vert_jump = v,
      MetricKey::BroadJump => input.broad_jump = v,
      MetricKey::R1600 | MetricKey::R5k | MetricKey::Row500 | MetricKey::Row5k => {
        panic!("{} is a time entry; set it directly", key)
      }
    }
  }
  input
}

/// ---------------------------------------------------------------------------
/// Synthetic Tables
/// ---------------------------------------------------------------------------

/// Small hand-built tables for the young male band only
pub fn synthetic_tables() -> NormTables {
  NormTables::empty()
    .with_row(
      MetricKey::Squat,
      Sex::Male,
      AgeBand::Under25,
      &[0.5, 0.95, 1.4, 1.8, 2.1, 2.8],
    )
    .with_row(
      MetricKey::R400,
      Sex::Male,
      AgeBand::Under25,
      &[100.0, 82.0, 66.0, 56.0, 50.0],
    )
    .with_row(
      MetricKey::Vo2max,
      Sex::Male,
      AgeBand::Under25,
      &[20.0, 30.0, 40.0, 50.0, 60.0],
    )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_test_db() {
    let pool = setup_test_db().await;

    let result: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM rating_history")
      .fetch_one(&pool)
      .await
      .unwrap();
    assert_eq!(result.0, 0);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_history() {
    let pool = setup_test_db().await;
    let ids = seed_history(&pool, 3).await;
    assert_eq!(ids.len(), 3);
    teardown_test_db(pool).await;
  }

  #[test]
  fn test_input_with() {
    let input = input_with(&[(MetricKey::Vo2max, 44.0), (MetricKey::BroadJump, 90.0)]);
    assert_eq!(input.vo2max, Some(44.0));
    assert_eq!(input.broad_jump, Some(90.0));
    assert_eq!(input.squat, None);
  }

  #[test]
  fn test_synthetic_tables_only_cover_young_males() {
    let tables = synthetic_tables();
    assert!(tables.row(MetricKey::Vo2max, Sex::Male, AgeBand::Under25).is_some());
    assert!(tables.row(MetricKey::Vo2max, Sex::Female, AgeBand::Under25).is_none());
  }
}
