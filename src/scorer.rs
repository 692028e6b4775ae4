//! Per-metric scoring
//!
//! Looks up the athlete's norm row, turns the raw value into a percentile and
//! rating, and formats the value for display. Strength lifts are scored
//! relative to bodyweight.

use crate::models::{MetricKey, ScoredMetric, Sex};
use crate::norms::{AgeBand, NormTables};
use crate::scoring::{interpolate_percentile, percentile_to_rating};

/// Outcome of scoring one relative-strength lift
#[derive(Debug, Clone, PartialEq)]
pub enum StrengthOutcome {
  Scored(ScoredMetric),
  /// No lift entered
  Missing,
  /// Lift entered but there is no valid bodyweight to divide by
  NeedsBodyweight,
}

/// Score a raw value against one norm row.
///
/// Returns `None` when the value is missing or not a finite number.
pub fn score_metric(
  key: MetricKey,
  raw_value: Option<f64>,
  anchors: &[f64],
  higher_is_better: bool,
  display: impl Fn(f64) -> String,
) -> Option<ScoredMetric> {
  let value = raw_value.filter(|v| v.is_finite())?;
  let percentile = interpolate_percentile(value, anchors, higher_is_better);
  Some(ScoredMetric {
    key,
    label: key.label().to_string(),
    display_value: display(value),
    unit: String::new(),
    percentile,
    rating: percentile_to_rating(percentile),
  })
}

/// Score a lift as lift ÷ bodyweight. Always higher-is-better.
pub fn score_strength(
  key: MetricKey,
  lifted: Option<f64>,
  bodyweight: Option<f64>,
  anchors: &[f64],
) -> StrengthOutcome {
  let Some(lifted) = lifted.filter(|v| v.is_finite()) else {
    return StrengthOutcome::Missing;
  };
  let Some(bodyweight) = bodyweight.filter(|bw| bw.is_finite() && *bw > 0.0) else {
    return StrengthOutcome::NeedsBodyweight;
  };

  let ratio = lifted / bodyweight;
  let percentile = interpolate_percentile(ratio, anchors, true);
  StrengthOutcome::Scored(ScoredMetric {
    key,
    label: key.label().to_string(),
    display_value: format!("{:.0} lbs", lifted),
    unit: format!("{:.2}× BW", ratio),
    percentile,
    rating: percentile_to_rating(percentile),
  })
}

/// ---------------------------------------------------------------------------
/// Display Formatting
/// ---------------------------------------------------------------------------

/// Run and row times: "52.3s" under a minute, otherwise "m:ss"
pub fn format_time(seconds: f64) -> String {
  if seconds < 60.0 {
    return format!("{:.1}s", seconds);
  }
  let mut minutes = (seconds / 60.0).floor() as i64;
  let mut secs = (seconds % 60.0).round() as i64;
  // 119.6s rounds to 2:00, not 1:60
  if secs == 60 {
    minutes += 1;
    secs = 0;
  }
  format!("{}:{:02}", minutes, secs)
}

/// Human-readable value for a non-strength metric
pub fn display_value(key: MetricKey, value: f64) -> String {
  match key {
    MetricKey::Vo2max => format!("{:.1} ml/kg/min", value),
    MetricKey::Rhr => format!("{:.0} bpm", value),
    MetricKey::Pushups | MetricKey::Pullups | MetricKey::BwBenchReps => {
      format!("{:.0} reps", value)
    }
    MetricKey::Lsit | MetricKey::DeadHang => format!("{:.0} sec", value),
    MetricKey::R400
    | MetricKey::R1600
    | MetricKey::R5k
    | MetricKey::Row500
    | MetricKey::Row5k => format_time(value),
    MetricKey::VertJump => format!("{:.1} in", value),
    MetricKey::BroadJump => format!("{:.0} in", value),
    MetricKey::Squat | MetricKey::Bench | MetricKey::Deadlift | MetricKey::Ohp => {
      format!("{:.0} lbs", value)
    }
  }
}

/// ---------------------------------------------------------------------------
/// Metric Scorer: one athlete's demographic slice of the tables
/// ---------------------------------------------------------------------------

pub struct MetricScorer<'a> {
  tables: &'a NormTables,
  sex: Sex,
  band: AgeBand,
}

impl<'a> MetricScorer<'a> {
  pub fn new(tables: &'a NormTables, sex: Sex, age: u32) -> Self {
    Self {
      tables,
      sex,
      band: AgeBand::from_age(age),
    }
  }

  pub fn band(&self) -> AgeBand {
    self.band
  }

  fn anchors(&self, key: MetricKey) -> Option<&'a [f64]> {
    let row = self.tables.row(key, self.sex, self.band);
    if row.is_none() {
      tracing::warn!(metric = %key, sex = %self.sex, band = ?self.band, "No norm row; skipping metric");
    }
    row
  }

  /// Score a non-strength metric in its natural direction
  pub fn score(&self, key: MetricKey, raw_value: Option<f64>) -> Option<ScoredMetric> {
    raw_value.filter(|v| v.is_finite())?;
    let anchors = self.anchors(key)?;
    score_metric(key, raw_value, anchors, key.higher_is_better(), |v| display_value(key, v))
  }

  /// Score a strength lift relative to bodyweight
  pub fn score_strength(
    &self,
    key: MetricKey,
    lifted: Option<f64>,
    bodyweight: Option<f64>,
  ) -> StrengthOutcome {
    if lifted.filter(|v| v.is_finite()).is_none() {
      return StrengthOutcome::Missing;
    }
    match self.anchors(key) {
      Some(anchors) => score_strength(key, lifted, bodyweight, anchors),
      None => StrengthOutcome::Missing,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SQUAT_ROW: [f64; 6] = [0.5, 0.95, 1.4, 1.8, 2.1, 2.8];

  #[test]
  fn test_missing_value_is_absent() {
    assert!(score_metric(MetricKey::Vo2max, None, &[1.0, 2.0, 3.0, 4.0, 5.0], true, |v| {
      v.to_string()
    })
    .is_none());
    assert!(score_metric(MetricKey::Vo2max, Some(f64::NAN), &[1.0, 2.0, 3.0, 4.0, 5.0], true, |v| {
      v.to_string()
    })
    .is_none());
  }

  #[test]
  fn test_strength_uses_bodyweight_ratio() {
    // 280 / 200 = 1.4 -> p50 -> 70
    match score_strength(MetricKey::Squat, Some(280.0), Some(200.0), &SQUAT_ROW) {
      StrengthOutcome::Scored(m) => {
        assert_eq!(m.percentile, 50.0);
        assert_eq!(m.rating, 70);
        assert_eq!(m.display_value, "280 lbs");
        assert_eq!(m.unit, "1.40× BW");
        assert_eq!(m.label, "Back Squat");
      }
      other => panic!("expected scored squat, got {:?}", other),
    }
  }

  #[test]
  fn test_strength_without_bodyweight() {
    assert_eq!(
      score_strength(MetricKey::Squat, Some(275.0), None, &SQUAT_ROW),
      StrengthOutcome::NeedsBodyweight
    );
    assert_eq!(
      score_strength(MetricKey::Squat, Some(275.0), Some(0.0), &SQUAT_ROW),
      StrengthOutcome::NeedsBodyweight
    );
    assert_eq!(
      score_strength(MetricKey::Squat, None, None, &SQUAT_ROW),
      StrengthOutcome::Missing
    );
  }

  #[test]
  fn test_format_time() {
    assert_eq!(format_time(52.34), "52.3s");
    assert_eq!(format_time(74.0), "1:14");
    assert_eq!(format_time(375.0), "6:15");
    assert_eq!(format_time(1470.0), "24:30");
    assert_eq!(format_time(119.6), "2:00");
  }

  #[test]
  fn test_display_values() {
    assert_eq!(display_value(MetricKey::Vo2max, 46.0), "46.0 ml/kg/min");
    assert_eq!(display_value(MetricKey::Rhr, 58.0), "58 bpm");
    assert_eq!(display_value(MetricKey::Pullups, 10.0), "10 reps");
    assert_eq!(display_value(MetricKey::DeadHang, 60.0), "60 sec");
    assert_eq!(display_value(MetricKey::VertJump, 22.0), "22.0 in");
    assert_eq!(display_value(MetricKey::BroadJump, 86.0), "86 in");
    assert_eq!(display_value(MetricKey::R1600, 375.0), "6:15");
  }

  #[test]
  fn test_scorer_picks_demographic_row() {
    let tables = NormTables::standard();
    let scorer = MetricScorer::new(&tables, Sex::Male, 27);
    assert_eq!(scorer.band(), AgeBand::From25To29);

    // Male 25-29 400m row: [100, 82, 66, 56, 50]
    let m = scorer.score(MetricKey::R400, Some(66.0)).unwrap();
    assert_eq!(m.percentile, 50.0);
    assert_eq!(m.rating, 70);
    assert_eq!(m.display_value, "1:06");
  }

  #[test]
  fn test_scorer_skips_metric_without_row() {
    let tables = NormTables::empty();
    let scorer = MetricScorer::new(&tables, Sex::Female, 30);
    assert!(scorer.score(MetricKey::Vo2max, Some(40.0)).is_none());
    assert_eq!(
      scorer.score_strength(MetricKey::Bench, Some(100.0), Some(150.0)),
      StrengthOutcome::Missing
    );
  }
}
