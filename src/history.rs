//! Saved rating history and comparison
//!
//! History is a short, capped list of immutable snapshots, newest first.
//! Which result was calculated last and which saved entry is selected for
//! comparison live in a caller-owned `Session`, never in globals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Row, SqliteConnection, SqlitePool};

use crate::calculation::Calculation;
use crate::models::{AthleteProfile, Category, OverallResult};

/// Default number of snapshots kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Failed to (de)serialize result: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Generate ratings first.")]
  NothingToSave,

  #[error("No history entry at index {index} ({len} saved)")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("History entry {id} has an invalid {column}: {value}")]
  CorruptRow { id: i64, column: &'static str, value: String },
}

/// ---------------------------------------------------------------------------
/// History Entries
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
  pub id: i64,
  pub created_at: DateTime<Utc>,
  pub athlete: AthleteProfile,
  pub result: OverallResult,
}

/// Save a calculation and prune so at most `capacity` entries remain.
/// The oldest entries are dropped first. Insert and prune commit together.
pub async fn save_result(
  pool: &SqlitePool,
  calc: &Calculation,
  capacity: usize,
) -> Result<HistoryEntry, HistoryError> {
  let created_at = Utc::now();
  let result_json = serde_json::to_string(&calc.result)?;
  let athlete = &calc.athlete;

  let mut tx = pool.begin().await?;
  let inserted = sqlx::query(
    r#"
    INSERT INTO rating_history (
      created_at, name, age, sex, bodyweight, overall, tier, result_json
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
    "#,
  )
  .bind(created_at.to_rfc3339())
  .bind(&athlete.name)
  .bind(athlete.age as i64)
  .bind(athlete.sex.to_string())
  .bind(athlete.bodyweight)
  .bind(calc.result.overall as i64)
  .bind(calc.result.tier.as_str())
  .bind(&result_json)
  .execute(&mut *tx)
  .await?;

  let id = inserted.last_insert_rowid();
  let pruned = prune(&mut tx, capacity).await?;
  tx.commit().await?;
  tracing::info!(id, overall = calc.result.overall, pruned, "Saved rating snapshot");

  Ok(HistoryEntry {
    id,
    created_at,
    athlete: athlete.clone(),
    result: calc.result.clone(),
  })
}

async fn prune(conn: &mut SqliteConnection, capacity: usize) -> Result<u64, HistoryError> {
  let keep = i64::try_from(capacity).unwrap_or(i64::MAX);
  let deleted = sqlx::query(
    r#"
    DELETE FROM rating_history
    WHERE id NOT IN (
      SELECT id FROM rating_history ORDER BY id DESC LIMIT ?1
    )
    "#,
  )
  .bind(keep)
  .execute(conn)
  .await?;
  Ok(deleted.rows_affected())
}

/// All saved entries, newest first
pub async fn list_history(pool: &SqlitePool) -> Result<Vec<HistoryEntry>, HistoryError> {
  let rows = sqlx::query(
    r#"
    SELECT id, created_at, name, age, sex, bodyweight, result_json
    FROM rating_history
    ORDER BY id DESC
    "#,
  )
  .fetch_all(pool)
  .await?;

  let mut entries = Vec::with_capacity(rows.len());
  for row in rows {
    let id: i64 = row.get("id");
    let corrupt = |column: &'static str, value: String| HistoryError::CorruptRow { id, column, value };

    let result_json: String = row.get("result_json");
    let result: OverallResult = serde_json::from_str(&result_json)?;
    let created_at: String = row.get("created_at");
    let sex: String = row.get("sex");
    let age: i64 = row.get("age");

    entries.push(HistoryEntry {
      id,
      created_at: DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| corrupt("created_at", created_at.clone()))?,
      athlete: AthleteProfile {
        name: row.get("name"),
        age: u32::try_from(age).map_err(|_| corrupt("age", age.to_string()))?,
        sex: sex.parse().map_err(|_| corrupt("sex", sex.clone()))?,
        bodyweight: row.get("bodyweight"),
      },
      result,
    });
  }

  Ok(entries)
}

/// Entry at a newest-first index
pub async fn get_entry(pool: &SqlitePool, index: usize) -> Result<HistoryEntry, HistoryError> {
  let entries = list_history(pool).await?;
  let len = entries.len();
  entries
    .into_iter()
    .nth(index)
    .ok_or(HistoryError::IndexOutOfRange { index, len })
}

/// Delete the entry at a newest-first index
pub async fn delete_entry(pool: &SqlitePool, index: usize) -> Result<(), HistoryError> {
  let entry = get_entry(pool, index).await?;
  sqlx::query("DELETE FROM rating_history WHERE id = ?1")
    .bind(entry.id)
    .execute(pool)
    .await?;
  tracing::info!(id = entry.id, index, "Deleted history entry");
  Ok(())
}

/// Remove every saved entry. Returns how many were removed.
pub async fn clear_history(pool: &SqlitePool) -> Result<u64, HistoryError> {
  let deleted = sqlx::query("DELETE FROM rating_history").execute(pool).await?;
  tracing::info!(removed = deleted.rows_affected(), "Cleared history");
  Ok(deleted.rows_affected())
}

/// ---------------------------------------------------------------------------
/// Comparison
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryDelta {
  pub category: Category,
  pub current: Option<u8>,
  pub previous: Option<u8>,
  /// current - previous, when both sides have a score
  pub delta: Option<i16>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comparison {
  pub overall_current: u8,
  pub overall_previous: u8,
  pub overall_delta: i16,
  pub categories: Vec<CategoryDelta>,
}

/// Compare a fresh result against a saved one, category by category
pub fn compare(current: &OverallResult, previous: &OverallResult) -> Comparison {
  let categories = Category::ALL
    .iter()
    .map(|&category| {
      let now = current.category_scores.get(category);
      let then = previous.category_scores.get(category);
      CategoryDelta {
        category,
        current: now,
        previous: then,
        delta: now.zip(then).map(|(a, b)| a as i16 - b as i16),
      }
    })
    .collect();

  Comparison {
    overall_current: current.overall,
    overall_previous: previous.overall,
    overall_delta: current.overall as i16 - previous.overall as i16,
    categories,
  }
}

/// ---------------------------------------------------------------------------
/// Session State
/// ---------------------------------------------------------------------------

/// Per-caller state for the save and compare workflow
#[derive(Debug, Clone, Default)]
pub struct Session {
  last: Option<Calculation>,
  compare_index: Option<usize>,
}

impl Session {
  pub fn new() -> Self {
    Self::default()
  }

  /// Remember the most recent calculation
  pub fn record(&mut self, calc: Calculation) {
    self.last = Some(calc);
  }

  pub fn last(&self) -> Option<&Calculation> {
    self.last.as_ref()
  }

  pub fn last_or_err(&self) -> Result<&Calculation, HistoryError> {
    self.last.as_ref().ok_or(HistoryError::NothingToSave)
  }

  pub fn compare_index(&self) -> Option<usize> {
    self.compare_index
  }

  /// Select an entry for comparison; selecting the current one deselects it.
  /// Returns the new selection.
  pub fn toggle_compare(&mut self, index: usize) -> Option<usize> {
    self.compare_index = if self.compare_index == Some(index) {
      None
    } else {
      Some(index)
    };
    self.compare_index
  }

  pub fn reset_compare(&mut self) {
    self.compare_index = None;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::*;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_save_and_list_newest_first() {
    let pool = setup_test_db().await;
    let ids = seed_history(&pool, 3).await;

    let entries = list_history(&pool).await.unwrap();
    assert_eq!(entries.len(), 3);
    let listed: Vec<i64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(listed, ids.iter().rev().copied().collect::<Vec<_>>());
    assert_eq!(entries[0].athlete.name, "Athlete 2");

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_saved_snapshot_round_trips() {
    let pool = setup_test_db().await;
    let calc = sample_calculation();

    let saved = save_result(&pool, &calc, DEFAULT_HISTORY_CAPACITY).await.unwrap();
    let entries = list_history(&pool).await.unwrap();
    assert_eq!(entries[0].id, saved.id);
    assert_eq!(entries[0].result, calc.result);
    assert_eq!(entries[0].athlete, calc.athlete);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_interpolated_percentiles_reload_exactly() {
    let pool = setup_test_db().await;
    let tables = crate::norms::NormTables::standard();

    let mut saved = Vec::new();
    for i in 0..60 {
      let input = crate::models::AthleteInput {
        age: Some(20 + (i % 45) as u32),
        vo2max: Some(28.37 + i as f64 * 0.713),
        r400: Some(58.1 + i as f64 * 0.917),
        ..Default::default()
      };
      let calc = crate::calculation::calculate(&input, &tables).unwrap();
      save_result(&pool, &calc, usize::MAX).await.unwrap();
      saved.push(calc.result);
    }

    let mut reloaded: Vec<OverallResult> =
      list_history(&pool).await.unwrap().into_iter().map(|e| e.result).collect();
    reloaded.reverse();
    assert_eq!(reloaded, saved);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_corrupt_columns_are_reported() {
    let pool = setup_test_db().await;
    let result_json = serde_json::to_string(&sample_calculation().result).unwrap();

    sqlx::query(
      r#"
      INSERT INTO rating_history (created_at, name, age, sex, bodyweight, overall, tier, result_json)
      VALUES ('2026-01-01T00:00:00Z', 'Ghost', 30, 'unknown', NULL, 70, 'SOLID', ?1)
      "#,
    )
    .bind(&result_json)
    .execute(&pool)
    .await
    .unwrap();

    match list_history(&pool).await {
      Err(HistoryError::CorruptRow { column, value, .. }) => {
        assert_eq!(column, "sex");
        assert_eq!(value, "unknown");
      }
      other => panic!("expected corrupt row error, got {:?}", other),
    }

    sqlx::query("UPDATE rating_history SET sex = 'male', created_at = 'yesterday'")
      .execute(&pool)
      .await
      .unwrap();
    assert!(matches!(
      list_history(&pool).await,
      Err(HistoryError::CorruptRow { column: "created_at", .. })
    ));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_history_is_capped() {
    let pool = setup_test_db().await;
    let calc = sample_calculation();

    let mut last_id = 0;
    for _ in 0..25 {
      last_id = save_result(&pool, &calc, DEFAULT_HISTORY_CAPACITY).await.unwrap().id;
    }

    let entries = list_history(&pool).await.unwrap();
    assert_eq!(entries.len(), DEFAULT_HISTORY_CAPACITY);
    assert_eq!(entries[0].id, last_id);
    // The five oldest were pruned
    assert_eq!(entries.last().unwrap().id, last_id - 19);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_delete_by_index() {
    let pool = setup_test_db().await;
    let ids = seed_history(&pool, 3).await;

    // Index 1 is the middle entry in newest-first order
    delete_entry(&pool, 1).await.unwrap();
    let remaining: Vec<i64> = list_history(&pool).await.unwrap().iter().map(|e| e.id).collect();
    assert_eq!(remaining, vec![ids[2], ids[0]]);

    assert!(matches!(
      delete_entry(&pool, 5).await,
      Err(HistoryError::IndexOutOfRange { index: 5, len: 2 })
    ));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_clear_history() {
    let pool = setup_test_db().await;
    seed_history(&pool, 4).await;

    assert_eq!(clear_history(&pool).await.unwrap(), 4);
    assert!(list_history(&pool).await.unwrap().is_empty());

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_compare_deltas() {
    let current = sample_calculation().result;
    let mut previous = current.clone();
    previous.overall = current.overall - 3;
    previous.category_scores.set(Category::Strength, None);
    previous
      .category_scores
      .set(Category::Conditioning, current.category_scores.get(Category::Conditioning).map(|s| s - 5));

    let cmp = compare(&current, &previous);
    assert_eq!(cmp.overall_delta, 3);
    assert_eq!(cmp.categories.len(), 5);

    let strength = &cmp.categories[0];
    assert_eq!(strength.category, Category::Strength);
    assert_eq!(strength.previous, None);
    assert_eq!(strength.delta, None);

    let conditioning = &cmp.categories[1];
    assert_eq!(conditioning.delta, Some(5));
  }

  #[test]
  fn test_session_toggle_compare() {
    let mut session = Session::new();
    assert_eq!(session.toggle_compare(2), Some(2));
    assert_eq!(session.toggle_compare(0), Some(0));
    assert_eq!(session.toggle_compare(0), None);
    session.toggle_compare(1);
    session.reset_compare();
    assert_eq!(session.compare_index(), None);
  }

  #[test]
  fn test_session_requires_a_calculation() {
    let mut session = Session::new();
    assert!(matches!(session.last_or_err(), Err(HistoryError::NothingToSave)));
    session.record(sample_calculation());
    assert!(session.last().is_some());
  }
}
