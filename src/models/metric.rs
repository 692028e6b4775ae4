use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Rating Categories
/// ---------------------------------------------------------------------------

/// Declaration order is the category iteration order used everywhere
/// (aggregation output, weakest-link tie breaking, rendering).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
  Strength,
  Conditioning,
  SpeedEndurance,
  StrengthEndurance,
  Explosiveness,
}

impl Category {
  pub const ALL: [Category; 5] = [
    Category::Strength,
    Category::Conditioning,
    Category::SpeedEndurance,
    Category::StrengthEndurance,
    Category::Explosiveness,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Strength => "STRENGTH",
      Category::Conditioning => "CONDITIONING",
      Category::SpeedEndurance => "SPEED / ENDURANCE",
      Category::StrengthEndurance => "STRENGTH ENDURANCE",
      Category::Explosiveness => "EXPLOSIVENESS",
    }
  }
}

impl std::fmt::Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Metric Keys
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKey {
  // Strength (relative to bodyweight)
  Squat,
  Bench,
  Deadlift,
  Ohp,
  // Conditioning
  Vo2max,
  Rhr,
  Pushups,
  Lsit,
  // Running (seconds)
  R400,
  R1600,
  R5k,
  // Strength endurance / rowing
  Pullups,
  BwBenchReps,
  DeadHang,
  Row500,
  Row5k,
  // Explosiveness (inches)
  VertJump,
  BroadJump,
}

impl MetricKey {
  /// Scoring order. Results are emitted in this order.
  pub const ALL: [MetricKey; 18] = [
    MetricKey::Squat,
    MetricKey::Bench,
    MetricKey::Deadlift,
    MetricKey::Ohp,
    MetricKey::Vo2max,
    MetricKey::Rhr,
    MetricKey::Pushups,
    MetricKey::Lsit,
    MetricKey::R400,
    MetricKey::R1600,
    MetricKey::R5k,
    MetricKey::Pullups,
    MetricKey::BwBenchReps,
    MetricKey::DeadHang,
    MetricKey::Row500,
    MetricKey::Row5k,
    MetricKey::VertJump,
    MetricKey::BroadJump,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      MetricKey::Squat => "squat",
      MetricKey::Bench => "bench",
      MetricKey::Deadlift => "deadlift",
      MetricKey::Ohp => "ohp",
      MetricKey::Vo2max => "vo2max",
      MetricKey::Rhr => "rhr",
      MetricKey::Pushups => "pushups",
      MetricKey::Lsit => "lsit",
      MetricKey::R400 => "r400",
      MetricKey::R1600 => "r1600",
      MetricKey::R5k => "r5k",
      MetricKey::Pullups => "pullups",
      MetricKey::BwBenchReps => "bw_bench_reps",
      MetricKey::DeadHang => "dead_hang",
      MetricKey::Row500 => "row500",
      MetricKey::Row5k => "row5k",
      MetricKey::VertJump => "vert_jump",
      MetricKey::BroadJump => "broad_jump",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      MetricKey::Squat => "Back Squat",
      MetricKey::Bench => "Bench Press",
      MetricKey::Deadlift => "Deadlift",
      MetricKey::Ohp => "Overhead Press",
      MetricKey::Vo2max => "VO₂ Max",
      MetricKey::Rhr => "Resting Heart Rate",
      MetricKey::Pushups => "Max Push-Ups",
      MetricKey::Lsit => "L-Sit Hold",
      MetricKey::R400 => "400m",
      MetricKey::R1600 => "1 Mile / 1600m",
      MetricKey::R5k => "5K",
      MetricKey::Pullups => "Pull-Ups (max)",
      MetricKey::BwBenchReps => "BW Bench Reps",
      MetricKey::DeadHang => "Dead Hang",
      MetricKey::Row500 => "Row 500m",
      MetricKey::Row5k => "Row 5000m",
      MetricKey::VertJump => "Vertical Jump",
      MetricKey::BroadJump => "Broad Jump",
    }
  }

  /// Static home category of each metric
  pub fn category(&self) -> Category {
    match self {
      MetricKey::Squat | MetricKey::Bench | MetricKey::Deadlift | MetricKey::Ohp => {
        Category::Strength
      }
      MetricKey::Vo2max | MetricKey::Rhr | MetricKey::Pushups | MetricKey::Lsit => {
        Category::Conditioning
      }
      MetricKey::R400 | MetricKey::R1600 | MetricKey::R5k => Category::SpeedEndurance,
      MetricKey::Pullups
      | MetricKey::BwBenchReps
      | MetricKey::DeadHang
      | MetricKey::Row500
      | MetricKey::Row5k => Category::StrengthEndurance,
      MetricKey::VertJump | MetricKey::BroadJump => Category::Explosiveness,
    }
  }

  /// Lower raw values are better for heart rate and timed efforts.
  /// Norm rows for these metrics are stored descending.
  pub fn higher_is_better(&self) -> bool {
    !matches!(
      self,
      MetricKey::Rhr
        | MetricKey::R400
        | MetricKey::R1600
        | MetricKey::R5k
        | MetricKey::Row500
        | MetricKey::Row5k
    )
  }

  /// Strength lifts are scored as lift ÷ bodyweight
  pub fn is_relative_strength(&self) -> bool {
    self.category() == Category::Strength
  }
}

impl std::fmt::Display for MetricKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for MetricKey {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    MetricKey::ALL
      .iter()
      .copied()
      .find(|k| k.as_str() == s)
      .ok_or_else(|| format!("Unknown metric: {}", s))
  }
}
