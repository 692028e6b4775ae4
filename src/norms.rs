//! Population norm tables
//!
//! Read-only store keyed by (metric, sex, age band). Each row holds 5 or 6
//! anchors for p10, p25, p50, p75, p90 and optionally p99. Rows are ascending
//! for higher-is-better metrics and descending for lower-is-better metrics.
//!
//! Built-in tables are hand-authored approximations drawn from NSCA, ACSM,
//! World Athletics, Concept2 and training-community data. A JSON file with
//! the same shape can replace them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::{MetricKey, Sex};

/// ---------------------------------------------------------------------------
/// Age Bands
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
  Under25,
  From25To29,
  From30To34,
  From35To39,
  From40To49,
  From50To59,
  Over60,
}

impl AgeBand {
  pub const COUNT: usize = 7;

  pub fn from_age(age: u32) -> Self {
    match age {
      a if a < 25 => AgeBand::Under25,
      a if a < 30 => AgeBand::From25To29,
      a if a < 35 => AgeBand::From30To34,
      a if a < 40 => AgeBand::From35To39,
      a if a < 50 => AgeBand::From40To49,
      a if a < 60 => AgeBand::From50To59,
      _ => AgeBand::Over60,
    }
  }

  /// Row index into a sex's table
  pub fn index(&self) -> usize {
    *self as usize
  }
}

/// ---------------------------------------------------------------------------
/// Errors
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum NormTableError {
  #[error("Failed to read norm tables: {0}")]
  Io(#[from] std::io::Error),

  #[error("Failed to parse norm tables: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("Missing norm row: {metric} {sex} band {band}")]
  MissingRow { metric: MetricKey, sex: Sex, band: usize },

  #[error("Norm row {metric} {sex} band {band} has {len} anchors, expected 5 or 6")]
  BadLength { metric: MetricKey, sex: Sex, band: usize, len: usize },

  #[error("Norm row {metric} {sex} band {band} is not monotonic: {anchors:?}")]
  NotMonotonic { metric: MetricKey, sex: Sex, band: usize, anchors: Vec<f64> },
}

/// ---------------------------------------------------------------------------
/// Norm Tables
/// ---------------------------------------------------------------------------

/// Seven rows (one per age band) for each sex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SexRows {
  pub male: Vec<Vec<f64>>,
  pub female: Vec<Vec<f64>>,
}

impl SexRows {
  fn for_sex(&self, sex: Sex) -> &[Vec<f64>] {
    match sex {
      Sex::Male => &self.male,
      Sex::Female => &self.female,
    }
  }

  fn for_sex_mut(&mut self, sex: Sex) -> &mut Vec<Vec<f64>> {
    match sex {
      Sex::Male => &mut self.male,
      Sex::Female => &mut self.female,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormTables {
  rows: BTreeMap<MetricKey, SexRows>,
}

impl NormTables {
  /// Empty store, for assembling synthetic tables
  pub fn empty() -> Self {
    Self::default()
  }

  /// The built-in population norms
  pub fn standard() -> Self {
    let mut rows = BTreeMap::new();
    rows.insert(MetricKey::Squat, sex_rows(&SQUAT_MALE, &SQUAT_FEMALE));
    rows.insert(MetricKey::Bench, sex_rows(&BENCH_MALE, &BENCH_FEMALE));
    rows.insert(MetricKey::Deadlift, sex_rows(&DEADLIFT_MALE, &DEADLIFT_FEMALE));
    rows.insert(MetricKey::Ohp, sex_rows(&OHP_MALE, &OHP_FEMALE));
    rows.insert(MetricKey::Vo2max, sex_rows(&VO2_MALE, &VO2_FEMALE));
    rows.insert(MetricKey::Rhr, sex_rows(&RHR_MALE, &RHR_FEMALE));
    rows.insert(MetricKey::Pushups, sex_rows(&PUSHUP_MALE, &PUSHUP_FEMALE));
    rows.insert(MetricKey::Lsit, sex_rows(&LSIT_MALE, &LSIT_FEMALE));
    rows.insert(MetricKey::R400, sex_rows(&R400_MALE, &R400_FEMALE));
    rows.insert(MetricKey::R1600, sex_rows(&R1600_MALE, &R1600_FEMALE));
    rows.insert(MetricKey::R5k, sex_rows(&R5K_MALE, &R5K_FEMALE));
    rows.insert(MetricKey::Pullups, sex_rows(&PULLUP_MALE, &PULLUP_FEMALE));
    rows.insert(MetricKey::BwBenchReps, sex_rows(&BW_BENCH_MALE, &BW_BENCH_FEMALE));
    rows.insert(MetricKey::DeadHang, sex_rows(&DEAD_HANG_MALE, &DEAD_HANG_FEMALE));
    rows.insert(MetricKey::Row500, sex_rows(&ROW500_MALE, &ROW500_FEMALE));
    rows.insert(MetricKey::Row5k, sex_rows(&ROW5K_MALE, &ROW5K_FEMALE));
    rows.insert(MetricKey::VertJump, sex_rows(&VERT_JUMP_MALE, &VERT_JUMP_FEMALE));
    rows.insert(MetricKey::BroadJump, sex_rows(&BROAD_JUMP_MALE, &BROAD_JUMP_FEMALE));
    Self { rows }
  }

  /// Parse and validate tables from JSON
  pub fn from_json(json: &str) -> Result<Self, NormTableError> {
    let tables: NormTables = serde_json::from_str(json)?;
    tables.validate()?;
    Ok(tables)
  }

  /// Load and validate tables from a JSON file
  pub fn load(path: &Path) -> Result<Self, NormTableError> {
    let json = std::fs::read_to_string(path)?;
    let tables = Self::from_json(&json)?;
    tracing::info!(path = %path.display(), metrics = tables.rows.len(), "Loaded norm tables");
    Ok(tables)
  }

  /// Set one row, filling missing bands with empty rows. Used to build
  /// synthetic tables.
  pub fn with_row(mut self, metric: MetricKey, sex: Sex, band: AgeBand, anchors: &[f64]) -> Self {
    let entry = self.rows.entry(metric).or_insert_with(|| SexRows {
      male: vec![Vec::new(); AgeBand::COUNT],
      female: vec![Vec::new(); AgeBand::COUNT],
    });
    let bands = entry.for_sex_mut(sex);
    if bands.len() < AgeBand::COUNT {
      bands.resize(AgeBand::COUNT, Vec::new());
    }
    bands[band.index()] = anchors.to_vec();
    self
  }

  /// Anchors for one (metric, sex, band). `None` if the table lacks the row.
  pub fn row(&self, metric: MetricKey, sex: Sex, band: AgeBand) -> Option<&[f64]> {
    self
      .rows
      .get(&metric)
      .and_then(|r| r.for_sex(sex).get(band.index()))
      .map(Vec::as_slice)
      .filter(|anchors| !anchors.is_empty())
  }

  /// Check every metric has 7 rows per sex, each 5 or 6 anchors long and
  /// monotonic in the metric's direction.
  ///
  /// Equal neighbours are accepted: several rep-count rows start at zero
  /// for more than one percentile.
  pub fn validate(&self) -> Result<(), NormTableError> {
    for metric in MetricKey::ALL {
      for sex in [Sex::Male, Sex::Female] {
        for band in 0..AgeBand::COUNT {
          let anchors = self
            .rows
            .get(&metric)
            .and_then(|r| r.for_sex(sex).get(band))
            .filter(|a| !a.is_empty())
            .ok_or(NormTableError::MissingRow { metric, sex, band })?;

          if !(5..=6).contains(&anchors.len()) {
            return Err(NormTableError::BadLength { metric, sex, band, len: anchors.len() });
          }

          let ordered = anchors.windows(2).all(|w| {
            if metric.higher_is_better() {
              w[0] <= w[1]
            } else {
              w[0] >= w[1]
            }
          });
          let strictly_spread = anchors.first() != anchors.last();
          if !ordered || !strictly_spread || anchors.iter().any(|a| !a.is_finite()) {
            return Err(NormTableError::NotMonotonic {
              metric,
              sex,
              band,
              anchors: anchors.clone(),
            });
          }
        }
      }
    }
    Ok(())
  }
}

fn sex_rows<const N: usize>(male: &[[f64; N]; 7], female: &[[f64; N]; 7]) -> SexRows {
  SexRows {
    male: male.iter().map(|r| r.to_vec()).collect(),
    female: female.iter().map(|r| r.to_vec()).collect(),
  }
}

/// ---------------------------------------------------------------------------
/// Built-in Data
/// ---------------------------------------------------------------------------

// Strength: lift ÷ bodyweight. [p10, p25, p50, p75, p90, p99]

const SQUAT_MALE: [[f64; 6]; 7] = [
  [0.75, 1.0, 1.4, 1.8, 2.1, 2.8],
  [0.7, 0.95, 1.35, 1.75, 2.05, 2.7],
  [0.65, 0.9, 1.3, 1.7, 2.0, 2.6],
  [0.6, 0.85, 1.2, 1.6, 1.9, 2.5],
  [0.55, 0.8, 1.1, 1.5, 1.75, 2.3],
  [0.5, 0.7, 1.0, 1.3, 1.6, 2.0],
  [0.4, 0.6, 0.85, 1.1, 1.4, 1.8],
];
const SQUAT_FEMALE: [[f64; 6]; 7] = [
  [0.5, 0.7, 0.95, 1.3, 1.6, 2.1],
  [0.45, 0.65, 0.9, 1.25, 1.55, 2.0],
  [0.4, 0.6, 0.85, 1.2, 1.5, 1.9],
  [0.35, 0.55, 0.8, 1.1, 1.4, 1.8],
  [0.3, 0.5, 0.7, 1.0, 1.25, 1.6],
  [0.25, 0.4, 0.6, 0.85, 1.1, 1.4],
  [0.2, 0.35, 0.5, 0.7, 0.9, 1.2],
];

const BENCH_MALE: [[f64; 6]; 7] = [
  [0.5, 0.75, 1.05, 1.35, 1.6, 2.1],
  [0.5, 0.7, 1.0, 1.3, 1.55, 2.0],
  [0.45, 0.65, 0.95, 1.25, 1.5, 1.9],
  [0.4, 0.6, 0.9, 1.2, 1.4, 1.8],
  [0.35, 0.55, 0.8, 1.1, 1.3, 1.65],
  [0.3, 0.5, 0.7, 0.95, 1.15, 1.5],
  [0.25, 0.4, 0.6, 0.8, 1.0, 1.3],
];
const BENCH_FEMALE: [[f64; 6]; 7] = [
  [0.3, 0.45, 0.65, 0.85, 1.0, 1.35],
  [0.28, 0.42, 0.6, 0.8, 0.95, 1.25],
  [0.25, 0.38, 0.55, 0.75, 0.9, 1.15],
  [0.22, 0.35, 0.5, 0.7, 0.85, 1.1],
  [0.2, 0.3, 0.45, 0.6, 0.75, 0.95],
  [0.18, 0.25, 0.38, 0.52, 0.65, 0.85],
  [0.15, 0.22, 0.32, 0.44, 0.55, 0.72],
];

const DEADLIFT_MALE: [[f64; 6]; 7] = [
  [0.9, 1.2, 1.6, 2.0, 2.4, 3.0],
  [0.85, 1.15, 1.55, 1.95, 2.3, 2.9],
  [0.8, 1.1, 1.5, 1.9, 2.2, 2.8],
  [0.75, 1.0, 1.4, 1.8, 2.1, 2.65],
  [0.7, 0.95, 1.3, 1.65, 1.95, 2.5],
  [0.6, 0.85, 1.15, 1.5, 1.75, 2.2],
  [0.5, 0.7, 1.0, 1.3, 1.55, 1.9],
];
const DEADLIFT_FEMALE: [[f64; 6]; 7] = [
  [0.6, 0.8, 1.1, 1.4, 1.7, 2.2],
  [0.55, 0.75, 1.0, 1.35, 1.6, 2.1],
  [0.5, 0.7, 0.95, 1.3, 1.5, 1.95],
  [0.45, 0.65, 0.9, 1.2, 1.4, 1.8],
  [0.4, 0.6, 0.8, 1.1, 1.3, 1.65],
  [0.35, 0.5, 0.7, 0.95, 1.15, 1.5],
  [0.3, 0.42, 0.6, 0.8, 1.0, 1.3],
];

const OHP_MALE: [[f64; 6]; 7] = [
  [0.3, 0.45, 0.65, 0.85, 1.0, 1.35],
  [0.28, 0.42, 0.6, 0.8, 0.95, 1.25],
  [0.26, 0.4, 0.57, 0.76, 0.9, 1.2],
  [0.24, 0.37, 0.53, 0.72, 0.85, 1.1],
  [0.22, 0.34, 0.48, 0.65, 0.78, 1.0],
  [0.18, 0.28, 0.42, 0.56, 0.68, 0.9],
  [0.15, 0.24, 0.36, 0.48, 0.58, 0.78],
];
const OHP_FEMALE: [[f64; 6]; 7] = [
  [0.18, 0.26, 0.38, 0.52, 0.62, 0.8],
  [0.17, 0.24, 0.35, 0.48, 0.58, 0.75],
  [0.16, 0.22, 0.32, 0.45, 0.54, 0.70],
  [0.15, 0.2, 0.30, 0.42, 0.5, 0.65],
  [0.13, 0.18, 0.26, 0.37, 0.45, 0.58],
  [0.11, 0.15, 0.22, 0.31, 0.38, 0.50],
  [0.09, 0.13, 0.18, 0.26, 0.32, 0.42],
];

// VO2 max, ml/kg/min (ACSM)

const VO2_MALE: [[f64; 6]; 7] = [
  [22.0, 31.0, 40.0, 48.0, 54.0, 65.0],
  [20.0, 30.0, 39.0, 47.0, 53.0, 63.0],
  [18.0, 27.0, 37.0, 45.0, 51.0, 60.0],
  [16.0, 25.0, 35.0, 43.0, 49.0, 58.0],
  [14.0, 22.0, 32.0, 40.0, 46.0, 55.0],
  [12.0, 20.0, 28.0, 36.0, 42.0, 50.0],
  [10.0, 17.0, 24.0, 32.0, 37.0, 45.0],
];
const VO2_FEMALE: [[f64; 6]; 7] = [
  [18.0, 26.0, 35.0, 42.0, 48.0, 57.0],
  [16.0, 24.0, 33.0, 40.0, 46.0, 55.0],
  [14.0, 22.0, 31.0, 38.0, 44.0, 52.0],
  [13.0, 20.0, 28.0, 36.0, 42.0, 50.0],
  [12.0, 18.0, 26.0, 33.0, 39.0, 47.0],
  [10.0, 16.0, 23.0, 30.0, 35.0, 43.0],
  [8.0, 14.0, 20.0, 27.0, 32.0, 40.0],
];

// Resting heart rate, bpm. Descending: p10 is the highest (least fit) reading.

const RHR_MALE: [[f64; 5]; 7] = [
  [80.0, 70.0, 60.0, 50.0, 44.0],
  [82.0, 72.0, 62.0, 52.0, 45.0],
  [83.0, 73.0, 63.0, 53.0, 46.0],
  [84.0, 74.0, 64.0, 54.0, 47.0],
  [86.0, 76.0, 65.0, 56.0, 48.0],
  [88.0, 78.0, 68.0, 58.0, 50.0],
  [90.0, 80.0, 70.0, 60.0, 52.0],
];
const RHR_FEMALE: [[f64; 5]; 7] = [
  [82.0, 73.0, 64.0, 54.0, 46.0],
  [84.0, 74.0, 65.0, 55.0, 47.0],
  [85.0, 75.0, 66.0, 56.0, 48.0],
  [86.0, 76.0, 67.0, 57.0, 49.0],
  [88.0, 78.0, 68.0, 58.0, 50.0],
  [90.0, 80.0, 70.0, 60.0, 52.0],
  [92.0, 82.0, 72.0, 62.0, 54.0],
];

// Push-ups to failure (ACSM / Canadian Fitness Survey)

const PUSHUP_MALE: [[f64; 5]; 7] = [
  [14.0, 22.0, 33.0, 45.0, 57.0],
  [12.0, 20.0, 30.0, 42.0, 53.0],
  [10.0, 18.0, 27.0, 38.0, 49.0],
  [8.0, 15.0, 24.0, 34.0, 45.0],
  [6.0, 12.0, 20.0, 30.0, 40.0],
  [4.0, 9.0, 15.0, 24.0, 33.0],
  [3.0, 6.0, 11.0, 18.0, 26.0],
];
const PUSHUP_FEMALE: [[f64; 5]; 7] = [
  [10.0, 16.0, 24.0, 33.0, 43.0],
  [9.0, 14.0, 21.0, 30.0, 39.0],
  [7.0, 12.0, 19.0, 27.0, 36.0],
  [5.0, 10.0, 16.0, 24.0, 32.0],
  [4.0, 8.0, 13.0, 20.0, 27.0],
  [3.0, 6.0, 10.0, 16.0, 22.0],
  [2.0, 4.0, 7.0, 12.0, 17.0],
];

// L-sit hold, seconds

const LSIT_MALE: [[f64; 5]; 7] = [
  [5.0, 12.0, 22.0, 35.0, 50.0],
  [5.0, 11.0, 20.0, 33.0, 48.0],
  [4.0, 10.0, 18.0, 30.0, 44.0],
  [3.0, 8.0, 15.0, 26.0, 40.0],
  [2.0, 6.0, 12.0, 22.0, 35.0],
  [2.0, 5.0, 10.0, 18.0, 28.0],
  [1.0, 4.0, 8.0, 14.0, 22.0],
];
const LSIT_FEMALE: [[f64; 5]; 7] = [
  [3.0, 8.0, 16.0, 27.0, 40.0],
  [3.0, 7.0, 14.0, 25.0, 38.0],
  [2.0, 6.0, 12.0, 22.0, 34.0],
  [2.0, 5.0, 10.0, 19.0, 30.0],
  [1.0, 4.0, 8.0, 16.0, 25.0],
  [1.0, 3.0, 6.0, 12.0, 20.0],
  [1.0, 2.0, 5.0, 10.0, 16.0],
];

// Runs, seconds. Descending: p10 is the slow time.

const R400_MALE: [[f64; 5]; 7] = [
  [96.0, 78.0, 64.0, 54.0, 48.0],
  [100.0, 82.0, 66.0, 56.0, 50.0],
  [105.0, 86.0, 70.0, 59.0, 53.0],
  [112.0, 91.0, 74.0, 63.0, 56.0],
  [120.0, 98.0, 80.0, 68.0, 60.0],
  [135.0, 110.0, 90.0, 76.0, 66.0],
  [152.0, 124.0, 102.0, 86.0, 75.0],
];
const R400_FEMALE: [[f64; 5]; 7] = [
  [112.0, 92.0, 76.0, 64.0, 56.0],
  [116.0, 96.0, 79.0, 66.0, 58.0],
  [122.0, 101.0, 83.0, 70.0, 61.0],
  [130.0, 107.0, 88.0, 74.0, 65.0],
  [140.0, 116.0, 95.0, 80.0, 70.0],
  [155.0, 128.0, 105.0, 88.0, 77.0],
  [175.0, 144.0, 118.0, 100.0, 86.0],
];

const R1600_MALE: [[f64; 5]; 7] = [
  [540.0, 420.0, 340.0, 280.0, 240.0],
  [560.0, 440.0, 360.0, 295.0, 250.0],
  [590.0, 465.0, 380.0, 310.0, 265.0],
  [625.0, 495.0, 405.0, 330.0, 280.0],
  [680.0, 540.0, 440.0, 360.0, 305.0],
  [760.0, 600.0, 490.0, 400.0, 340.0],
  [880.0, 695.0, 565.0, 460.0, 390.0],
];
const R1600_FEMALE: [[f64; 5]; 7] = [
  [650.0, 510.0, 410.0, 330.0, 280.0],
  [675.0, 530.0, 425.0, 345.0, 295.0],
  [705.0, 555.0, 450.0, 365.0, 310.0],
  [750.0, 590.0, 476.0, 385.0, 330.0],
  [820.0, 645.0, 520.0, 420.0, 360.0],
  [920.0, 720.0, 580.0, 470.0, 400.0],
  [1060.0, 830.0, 666.0, 540.0, 455.0],
];

const R5K_MALE: [[f64; 5]; 7] = [
  [2100.0, 1620.0, 1290.0, 1050.0, 900.0],
  [2200.0, 1700.0, 1350.0, 1100.0, 940.0],
  [2340.0, 1810.0, 1440.0, 1170.0, 1000.0],
  [2500.0, 1930.0, 1535.0, 1250.0, 1070.0],
  [2720.0, 2100.0, 1670.0, 1360.0, 1160.0],
  [3060.0, 2355.0, 1870.0, 1520.0, 1300.0],
  [3540.0, 2730.0, 2170.0, 1760.0, 1500.0],
];
const R5K_FEMALE: [[f64; 5]; 7] = [
  [2560.0, 1970.0, 1560.0, 1240.0, 1050.0],
  [2680.0, 2060.0, 1630.0, 1295.0, 1100.0],
  [2850.0, 2190.0, 1730.0, 1380.0, 1170.0],
  [3040.0, 2340.0, 1845.0, 1470.0, 1250.0],
  [3325.0, 2555.0, 2015.0, 1605.0, 1360.0],
  [3755.0, 2885.0, 2270.0, 1805.0, 1530.0],
  [4330.0, 3325.0, 2615.0, 2080.0, 1760.0],
];

// Pull-ups, dead hang start, chin over bar

const PULLUP_MALE: [[f64; 5]; 7] = [
  [3.0, 6.0, 10.0, 15.0, 20.0],
  [2.0, 5.0, 9.0, 14.0, 19.0],
  [2.0, 4.0, 8.0, 13.0, 17.0],
  [1.0, 3.0, 7.0, 11.0, 16.0],
  [1.0, 3.0, 6.0, 10.0, 14.0],
  [0.0, 2.0, 4.0, 8.0, 11.0],
  [0.0, 1.0, 3.0, 6.0, 9.0],
];
const PULLUP_FEMALE: [[f64; 5]; 7] = [
  [0.0, 1.0, 3.0, 6.0, 10.0],
  [0.0, 1.0, 2.0, 5.0, 9.0],
  [0.0, 1.0, 2.0, 4.0, 8.0],
  [0.0, 0.0, 1.0, 3.0, 6.0],
  [0.0, 0.0, 1.0, 2.0, 5.0],
  [0.0, 0.0, 1.0, 2.0, 4.0],
  [0.0, 0.0, 0.0, 1.0, 3.0],
];

// Bodyweight bench press reps (NSCA muscular endurance)

const BW_BENCH_MALE: [[f64; 5]; 7] = [
  [3.0, 8.0, 15.0, 22.0, 30.0],
  [2.0, 7.0, 13.0, 20.0, 28.0],
  [2.0, 6.0, 12.0, 18.0, 25.0],
  [1.0, 5.0, 10.0, 16.0, 22.0],
  [1.0, 4.0, 8.0, 13.0, 18.0],
  [0.0, 3.0, 6.0, 10.0, 14.0],
  [0.0, 2.0, 4.0, 7.0, 10.0],
];
const BW_BENCH_FEMALE: [[f64; 5]; 7] = [
  [1.0, 4.0, 8.0, 14.0, 20.0],
  [1.0, 3.0, 7.0, 12.0, 18.0],
  [1.0, 3.0, 6.0, 11.0, 16.0],
  [0.0, 2.0, 5.0, 9.0, 14.0],
  [0.0, 2.0, 4.0, 7.0, 11.0],
  [0.0, 1.0, 3.0, 5.0, 8.0],
  [0.0, 1.0, 2.0, 4.0, 6.0],
];

// Dead hang, seconds (grip research and longevity benchmarks)

const DEAD_HANG_MALE: [[f64; 5]; 7] = [
  [20.0, 35.0, 55.0, 80.0, 115.0],
  [18.0, 32.0, 50.0, 75.0, 110.0],
  [16.0, 28.0, 45.0, 70.0, 105.0],
  [14.0, 25.0, 40.0, 65.0, 100.0],
  [12.0, 22.0, 35.0, 55.0, 85.0],
  [10.0, 18.0, 28.0, 45.0, 70.0],
  [8.0, 14.0, 22.0, 35.0, 55.0],
];
const DEAD_HANG_FEMALE: [[f64; 5]; 7] = [
  [12.0, 22.0, 38.0, 58.0, 85.0],
  [10.0, 20.0, 35.0, 55.0, 80.0],
  [9.0, 18.0, 30.0, 48.0, 72.0],
  [8.0, 15.0, 26.0, 42.0, 65.0],
  [6.0, 12.0, 22.0, 35.0, 55.0],
  [5.0, 10.0, 18.0, 28.0, 45.0],
  [4.0, 8.0, 14.0, 22.0, 35.0],
];

// Rowing, seconds (Concept2 rankings). Descending.

const ROW500_MALE: [[f64; 5]; 7] = [
  [130.0, 118.0, 108.0, 99.0, 93.0],
  [132.0, 120.0, 110.0, 101.0, 95.0],
  [136.0, 124.0, 113.0, 104.0, 98.0],
  [141.0, 128.0, 117.0, 108.0, 102.0],
  [148.0, 135.0, 123.0, 114.0, 107.0],
  [158.0, 144.0, 132.0, 122.0, 115.0],
  [170.0, 156.0, 143.0, 132.0, 125.0],
];
const ROW500_FEMALE: [[f64; 5]; 7] = [
  [150.0, 137.0, 125.0, 116.0, 109.0],
  [153.0, 140.0, 128.0, 118.0, 111.0],
  [157.0, 143.0, 131.0, 121.0, 114.0],
  [163.0, 149.0, 136.0, 126.0, 119.0],
  [171.0, 156.0, 143.0, 132.0, 125.0],
  [182.0, 166.0, 153.0, 141.0, 134.0],
  [196.0, 179.0, 165.0, 153.0, 145.0],
];

const ROW5K_MALE: [[f64; 5]; 7] = [
  [1380.0, 1260.0, 1140.0, 1050.0, 990.0],
  [1410.0, 1290.0, 1170.0, 1080.0, 1020.0],
  [1455.0, 1335.0, 1210.0, 1115.0, 1055.0],
  [1505.0, 1380.0, 1255.0, 1155.0, 1090.0],
  [1575.0, 1445.0, 1315.0, 1210.0, 1145.0],
  [1680.0, 1540.0, 1405.0, 1295.0, 1225.0],
  [1810.0, 1660.0, 1515.0, 1400.0, 1325.0],
];
const ROW5K_FEMALE: [[f64; 5]; 7] = [
  [1590.0, 1455.0, 1320.0, 1215.0, 1148.0],
  [1625.0, 1490.0, 1350.0, 1245.0, 1176.0],
  [1675.0, 1535.0, 1395.0, 1285.0, 1215.0],
  [1735.0, 1590.0, 1445.0, 1330.0, 1258.0],
  [1820.0, 1670.0, 1520.0, 1400.0, 1324.0],
  [1945.0, 1785.0, 1625.0, 1497.0, 1416.0],
  [2095.0, 1925.0, 1755.0, 1617.0, 1530.0],
];

// Jumps, inches

const VERT_JUMP_MALE: [[f64; 5]; 7] = [
  [14.0, 18.0, 23.0, 29.0, 35.0],
  [13.0, 17.0, 22.0, 27.0, 33.0],
  [12.0, 16.0, 21.0, 26.0, 31.0],
  [11.0, 15.0, 20.0, 24.0, 29.0],
  [10.0, 14.0, 18.0, 22.0, 26.0],
  [8.0, 12.0, 15.0, 19.0, 23.0],
  [6.0, 9.0, 12.0, 16.0, 19.0],
];
const VERT_JUMP_FEMALE: [[f64; 5]; 7] = [
  [10.0, 13.0, 17.0, 21.0, 26.0],
  [9.0, 12.0, 16.0, 20.0, 24.0],
  [8.0, 11.0, 15.0, 19.0, 23.0],
  [7.0, 10.0, 14.0, 17.0, 21.0],
  [6.0, 9.0, 12.0, 15.0, 18.0],
  [5.0, 7.0, 10.0, 13.0, 16.0],
  [4.0, 6.0, 8.0, 11.0, 13.0],
];

const BROAD_JUMP_MALE: [[f64; 5]; 7] = [
  [68.0, 80.0, 94.0, 108.0, 120.0],
  [64.0, 76.0, 90.0, 104.0, 116.0],
  [60.0, 72.0, 86.0, 99.0, 110.0],
  [56.0, 68.0, 80.0, 94.0, 105.0],
  [50.0, 62.0, 74.0, 86.0, 97.0],
  [42.0, 54.0, 66.0, 78.0, 88.0],
  [34.0, 46.0, 56.0, 68.0, 78.0],
];
const BROAD_JUMP_FEMALE: [[f64; 5]; 7] = [
  [46.0, 58.0, 70.0, 82.0, 95.0],
  [42.0, 54.0, 66.0, 78.0, 91.0],
  [38.0, 50.0, 62.0, 74.0, 85.0],
  [34.0, 46.0, 58.0, 70.0, 81.0],
  [30.0, 42.0, 53.0, 64.0, 75.0],
  [26.0, 36.0, 46.0, 56.0, 66.0],
  [22.0, 32.0, 40.0, 50.0, 58.0],
];
