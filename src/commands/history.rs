use crate::db::AppState;
use crate::history::{self, Comparison, HistoryEntry, Session};

/// ---------------------------------------------------------------------------
/// Saving & Listing
/// ---------------------------------------------------------------------------

/// Save the session's most recent calculation
pub async fn save_last_result(state: &AppState, session: &Session) -> Result<HistoryEntry, String> {
  let calc = session.last_or_err().map_err(|e| e.to_string())?;
  history::save_result(&state.db, calc, state.history_capacity)
    .await
    .map_err(|e| format!("Failed to save result: {}", e))
}

pub async fn get_history(state: &AppState) -> Result<Vec<HistoryEntry>, String> {
  history::list_history(&state.db)
    .await
    .map_err(|e| format!("Failed to load history: {}", e))
}

/// ---------------------------------------------------------------------------
/// Comparison
/// ---------------------------------------------------------------------------

/// Toggle comparison against a saved entry.
///
/// Returns `None` when the toggle cleared the selection.
pub async fn compare_with_history(
  state: &AppState,
  session: &mut Session,
  index: usize,
) -> Result<Option<Comparison>, String> {
  let current = session.last_or_err().map_err(|e| e.to_string())?.result.clone();

  let Some(selected) = session.toggle_compare(index) else {
    return Ok(None);
  };

  match history::get_entry(&state.db, selected).await {
    Ok(entry) => Ok(Some(history::compare(&current, &entry.result))),
    Err(e) => {
      session.reset_compare();
      Err(format!("Failed to compare: {}", e))
    }
  }
}

/// ---------------------------------------------------------------------------
/// Deleting
/// ---------------------------------------------------------------------------

/// Delete one entry and return what remains
pub async fn delete_history_entry(
  state: &AppState,
  session: &mut Session,
  index: usize,
) -> Result<Vec<HistoryEntry>, String> {
  history::delete_entry(&state.db, index)
    .await
    .map_err(|e| format!("Failed to delete entry: {}", e))?;
  session.reset_compare();
  get_history(state).await
}

pub async fn clear_history(state: &AppState, session: &mut Session) -> Result<u64, String> {
  let removed = history::clear_history(&state.db)
    .await
    .map_err(|e| format!("Failed to clear history: {}", e))?;
  session.reset_compare();
  Ok(removed)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::commands::calculate_ratings;
  use crate::test_utils::*;
  use serial_test::serial;

  #[tokio::test]
  #[serial]
  async fn test_save_requires_calculation() {
    let state = test_state().await;
    let session = Session::new();

    let err = save_last_result(&state, &session).await.unwrap_err();
    assert_eq!(err, "Generate ratings first.");

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_save_then_list() {
    let state = test_state().await;
    let mut session = Session::new();
    let calc = calculate_ratings(&state, &mut session, sample_input()).await.unwrap();

    let saved = save_last_result(&state, &session).await.unwrap();
    let history = get_history(&state).await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, saved.id);
    assert_eq!(history[0].result.overall, calc.result.overall);

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_compare_toggles() {
    let state = test_state().await;
    let mut session = Session::new();
    calculate_ratings(&state, &mut session, sample_input()).await.unwrap();
    save_last_result(&state, &session).await.unwrap();

    let cmp = compare_with_history(&state, &mut session, 0).await.unwrap().unwrap();
    assert_eq!(cmp.overall_delta, 0);
    assert_eq!(session.compare_index(), Some(0));

    // Same index again deselects
    assert!(compare_with_history(&state, &mut session, 0).await.unwrap().is_none());
    assert_eq!(session.compare_index(), None);

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_compare_out_of_range_clears_selection() {
    let state = test_state().await;
    let mut session = Session::new();
    calculate_ratings(&state, &mut session, sample_input()).await.unwrap();

    let err = compare_with_history(&state, &mut session, 3).await.unwrap_err();
    assert!(err.contains("No history entry at index 3"));
    assert_eq!(session.compare_index(), None);

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  #[serial]
  async fn test_delete_and_clear_reset_compare() {
    let state = test_state().await;
    let mut session = Session::new();
    seed_history(&state.db, 3).await;
    calculate_ratings(&state, &mut session, sample_input()).await.unwrap();

    compare_with_history(&state, &mut session, 2).await.unwrap();
    let remaining = delete_history_entry(&state, &mut session, 0).await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert_eq!(session.compare_index(), None);

    compare_with_history(&state, &mut session, 1).await.unwrap();
    assert_eq!(clear_history(&state, &mut session).await.unwrap(), 2);
    assert_eq!(session.compare_index(), None);
    assert!(get_history(&state).await.unwrap().is_empty());

    teardown_test_db(state.db).await;
  }
}
