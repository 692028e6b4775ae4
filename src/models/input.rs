use serde::{Deserialize, Serialize};

const DEFAULT_AGE: u32 = 30;
const DEFAULT_NAME: &str = "ATHLETE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
  #[default]
  Male,
  Female,
}

impl std::fmt::Display for Sex {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Male => write!(f, "male"),
      Self::Female => write!(f, "female"),
    }
  }
}

impl std::str::FromStr for Sex {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "male" => Ok(Self::Male),
      "female" => Ok(Self::Female),
      _ => Err(format!("Unknown sex: {}", s)),
    }
  }
}

/// A min:sec entry for runs and rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
  pub minutes: Option<i64>,
  pub seconds: Option<i64>,
}

impl TimeEntry {
  pub fn new(minutes: i64, seconds: i64) -> Self {
    Self {
      minutes: Some(minutes),
      seconds: Some(seconds),
    }
  }

  /// Total seconds, or None when neither component was entered or the
  /// minutes are too large to convert. Seconds are clamped to 0..=59.
  pub fn total_seconds(&self) -> Option<f64> {
    if self.minutes.is_none() && self.seconds.is_none() {
      return None;
    }
    let mins = self.minutes.unwrap_or(0);
    let secs = self.seconds.unwrap_or(0).clamp(0, 59);
    mins
      .checked_mul(60)
      .and_then(|m| m.checked_add(secs))
      .map(|total| total as f64)
  }
}

/// ---------------------------------------------------------------------------
/// Athlete Input: everything one calculation consumes
/// ---------------------------------------------------------------------------

/// Flat record of raw test results. `None` means "not entered".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteInput {
  pub name: Option<String>,
  pub age: Option<u32>,
  pub sex: Sex,
  /// Pounds
  pub bodyweight: Option<f64>,

  // Strength (pounds lifted)
  pub squat: Option<f64>,
  pub bench: Option<f64>,
  pub deadlift: Option<f64>,
  pub ohp: Option<f64>,

  // Conditioning
  pub vo2max: Option<f64>,
  pub rhr: Option<f64>,
  pub pushups: Option<f64>,
  pub lsit: Option<f64>,

  // Running
  pub r400: Option<f64>, // seconds
  pub r1600: TimeEntry,
  pub r5k: TimeEntry,

  // Strength endurance
  pub pullups: Option<f64>,
  pub bw_bench_reps: Option<f64>,
  pub dead_hang: Option<f64>,
  pub row500: TimeEntry,
  pub row5k: TimeEntry,

  // Explosiveness (inches)
  pub vert_jump: Option<f64>,
  pub broad_jump: Option<f64>,
}

impl AthleteInput {
  /// Age used for band selection; missing or zero falls back to 30
  pub fn effective_age(&self) -> u32 {
    self.age.filter(|a| *a > 0).unwrap_or(DEFAULT_AGE)
  }

  pub fn display_name(&self) -> String {
    self
      .name
      .as_deref()
      .map(str::trim)
      .filter(|n| !n.is_empty())
      .unwrap_or(DEFAULT_NAME)
      .to_string()
  }

  /// Bodyweight if it can anchor relative strength
  pub fn valid_bodyweight(&self) -> Option<f64> {
    self.bodyweight.filter(|bw| bw.is_finite() && *bw > 0.0)
  }

  pub fn profile(&self) -> AthleteProfile {
    AthleteProfile {
      name: self.display_name(),
      age: self.effective_age(),
      sex: self.sex,
      bodyweight: self.valid_bodyweight(),
    }
  }

  /// The raw value for one metric, with time entries converted to seconds
  /// and non-finite numbers treated as missing.
  pub fn raw_value(&self, key: crate::models::MetricKey) -> Option<f64> {
    use crate::models::MetricKey::*;
    let value = match key {
      Squat => self.squat,
      Bench => self.bench,
      Deadlift => self.deadlift,
      Ohp => self.ohp,
      Vo2max => self.vo2max,
      Rhr => self.rhr,
      Pushups => self.pushups,
      Lsit => self.lsit,
      R400 => self.r400,
      R1600 => self.r1600.total_seconds(),
      R5k => self.r5k.total_seconds(),
      Pullups => self.pullups,
      BwBenchReps => self.bw_bench_reps,
      DeadHang => self.dead_hang,
      Row500 => self.row500.total_seconds(),
      Row5k => self.row5k.total_seconds(),
      VertJump => self.vert_jump,
      BroadJump => self.broad_jump,
    };
    value.filter(|v| v.is_finite())
  }

  /// The "most common hybrid athlete" preset
  pub fn preset() -> Self {
    Self {
      name: Some("Hybrid Athlete".to_string()),
      age: Some(34),
      sex: Sex::Male,
      bodyweight: Some(185.0),
      squat: Some(275.0),
      bench: Some(205.0),
      deadlift: Some(335.0),
      ohp: Some(135.0),
      vo2max: Some(46.0),
      rhr: Some(58.0),
      pushups: Some(40.0),
      lsit: Some(20.0),
      r400: Some(74.0),
      r1600: TimeEntry::new(6, 15),
      r5k: TimeEntry::new(24, 30),
      pullups: Some(10.0),
      bw_bench_reps: Some(12.0),
      dead_hang: Some(60.0),
      row500: TimeEntry::new(1, 45),
      row5k: TimeEntry::new(21, 0),
      vert_jump: Some(22.0),
      broad_jump: Some(86.0),
    }
  }
}

/// Demographics carried alongside a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
  pub name: String,
  pub age: u32,
  pub sex: Sex,
  pub bodyweight: Option<f64>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::MetricKey;

  #[test]
  fn test_time_entry_both_missing_is_missing() {
    assert_eq!(TimeEntry::default().total_seconds(), None);
  }

  #[test]
  fn test_time_entry_overflow_is_missing() {
    let huge = TimeEntry { minutes: Some(i64::MAX), seconds: Some(0) };
    assert_eq!(huge.total_seconds(), None);
    let huge_negative = TimeEntry { minutes: Some(i64::MIN), seconds: Some(30) };
    assert_eq!(huge_negative.total_seconds(), None);

    let input: AthleteInput =
      serde_json::from_str(r#"{"r5k":{"minutes":9223372036854775807,"seconds":0}}"#).unwrap();
    assert_eq!(input.raw_value(MetricKey::R5k), None);
  }

  #[test]
  fn test_time_entry_partial_components() {
    let mins_only = TimeEntry { minutes: Some(6), seconds: None };
    assert_eq!(mins_only.total_seconds(), Some(360.0));

    let secs_only = TimeEntry { minutes: None, seconds: Some(45) };
    assert_eq!(secs_only.total_seconds(), Some(45.0));
  }

  #[test]
  fn test_time_entry_clamps_seconds() {
    assert_eq!(TimeEntry::new(6, 75).total_seconds(), Some(419.0));
    assert_eq!(TimeEntry::new(6, -5).total_seconds(), Some(360.0));
  }

  #[test]
  fn test_defaults_for_name_and_age() {
    let input = AthleteInput {
      name: Some("   ".to_string()),
      age: Some(0),
      ..Default::default()
    };
    assert_eq!(input.display_name(), "ATHLETE");
    assert_eq!(input.effective_age(), 30);
  }

  #[test]
  fn test_invalid_bodyweight() {
    let mut input = AthleteInput { bodyweight: Some(0.0), ..Default::default() };
    assert_eq!(input.valid_bodyweight(), None);
    input.bodyweight = Some(f64::NAN);
    assert_eq!(input.valid_bodyweight(), None);
    input.bodyweight = Some(180.0);
    assert_eq!(input.valid_bodyweight(), Some(180.0));
  }

  #[test]
  fn test_raw_value_converts_times_and_drops_nan() {
    let input = AthleteInput {
      r5k: TimeEntry::new(24, 30),
      vo2max: Some(f64::NAN),
      ..Default::default()
    };
    assert_eq!(input.raw_value(MetricKey::R5k), Some(1470.0));
    assert_eq!(input.raw_value(MetricKey::Vo2max), None);
    assert_eq!(input.raw_value(MetricKey::Squat), None);
  }

  #[test]
  fn test_input_deserializes_sparse_json() {
    let input: AthleteInput = serde_json::from_str(
      r#"{"age": 41, "sex": "female", "squat": 155, "r1600": {"minutes": 8}}"#,
    )
    .unwrap();
    assert_eq!(input.sex, Sex::Female);
    assert_eq!(input.age, Some(41));
    assert_eq!(input.squat, Some(155.0));
    assert_eq!(input.r1600.total_seconds(), Some(480.0));
    assert_eq!(input.bodyweight, None);
  }
}
