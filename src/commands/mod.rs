pub mod history;

use crate::calculation::{calculate, Calculation};
use crate::db::AppState;
use crate::history::Session;
use crate::models::AthleteInput;

/// Score an athlete and remember the result in the session
pub async fn calculate_ratings(
  state: &AppState,
  session: &mut Session,
  input: AthleteInput,
) -> Result<Calculation, String> {
  let calc = calculate(&input, &state.tables).map_err(|e| e.to_string())?;
  session.record(calc.clone());
  Ok(calc)
}

/// The built-in example athlete
pub fn get_preset() -> AthleteInput {
  AthleteInput::preset()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::MetricKey;
  use crate::test_utils::*;

  #[tokio::test]
  async fn test_calculate_records_session() {
    let state = test_state().await;
    let mut session = Session::new();

    let calc = calculate_ratings(&state, &mut session, get_preset()).await.unwrap();
    assert_eq!(calc.athlete.name, "Hybrid Athlete");
    assert_eq!(session.last(), Some(&calc));

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_calculate_with_no_data() {
    let state = test_state().await;
    let mut session = Session::new();

    let err = calculate_ratings(&state, &mut session, AthleteInput::default())
      .await
      .unwrap_err();
    assert_eq!(err, "Please enter at least one metric to generate ratings.");
    assert!(session.last().is_none());

    teardown_test_db(state.db).await;
  }

  #[tokio::test]
  async fn test_failed_calculation_keeps_previous_result() {
    let state = test_state().await;
    let mut session = Session::new();

    let first = calculate_ratings(&state, &mut session, input_with(&[(MetricKey::Vo2max, 44.0)]))
      .await
      .unwrap();
    assert!(calculate_ratings(&state, &mut session, AthleteInput::default()).await.is_err());
    assert_eq!(session.last(), Some(&first));

    teardown_test_db(state.db).await;
  }
}
