//! Percentile interpolation and rating curve
//!
//! Norm rows are sparse percentile checkpoints. A raw value is placed between
//! the two checkpoints that bracket it, then the percentile is mapped onto the
//! 40-99 rating scale.

use serde::{Deserialize, Serialize};

/// Percentile tag for each anchor position. Rows with 5 anchors stop at p90.
pub const PERCENTILE_TAGS: [f64; 6] = [10.0, 25.0, 50.0, 75.0, 90.0, 99.0];

pub const MIN_PERCENTILE: f64 = 1.0;
pub const MAX_PERCENTILE: f64 = 99.5;
pub const MIN_RATING: u8 = 40;
pub const MAX_RATING: u8 = 99;

/// Returned when no anchor pair brackets the value: a NaN value or anchor,
/// or an empty row. Finite values in a non-empty row are always bracketed.
const FALLBACK_PERCENTILE: f64 = 50.0;

/// ---------------------------------------------------------------------------
/// Percentile Interpolation
/// ---------------------------------------------------------------------------

/// Estimate the percentile of `value` within a norm row.
///
/// `anchors` hold 5 or 6 checkpoints tagged with [`PERCENTILE_TAGS`]. When
/// `higher_is_better` the row is ascending; otherwise it is descending so
/// `anchors[0]` is always the p10 threshold.
///
/// Below the p10 anchor the estimate scales proportionally toward zero
/// (ascending) or inversely with the value (descending), floored at 1.
/// At or past the last anchor it clamps to the last tag.
pub fn interpolate_percentile(value: f64, anchors: &[f64], higher_is_better: bool) -> f64 {
  let n = anchors.len().min(PERCENTILE_TAGS.len());
  if n == 0 {
    return fallback(value, anchors);
  }
  let anchors = &anchors[..n];
  let tags = &PERCENTILE_TAGS[..n];
  let first = anchors[0];
  let last = anchors[n - 1];

  if higher_is_better {
    if value <= first {
      // A zero p10 anchor leaves nothing to scale against
      if first <= 0.0 {
        return MIN_PERCENTILE;
      }
      return (tags[0] * (value / first)).max(MIN_PERCENTILE);
    }
    if value >= last {
      return tags[n - 1].min(MAX_PERCENTILE);
    }
    for i in 0..n - 1 {
      let (lo, hi) = (anchors[i], anchors[i + 1]);
      if value >= lo && value <= hi {
        return lerp_tags(tags, i, value - lo, hi - lo);
      }
    }
  } else {
    if value >= first {
      if value <= 0.0 {
        return MIN_PERCENTILE;
      }
      return (tags[0] * (first / value)).max(MIN_PERCENTILE);
    }
    if value <= last {
      return tags[n - 1].min(MAX_PERCENTILE);
    }
    for i in 0..n - 1 {
      let (hi, lo) = (anchors[i], anchors[i + 1]);
      if value <= hi && value >= lo {
        return lerp_tags(tags, i, hi - value, hi - lo);
      }
    }
  }

  fallback(value, anchors)
}

fn lerp_tags(tags: &[f64], i: usize, offset: f64, span: f64) -> f64 {
  if span == 0.0 {
    return tags[i];
  }
  let t = offset / span;
  tags[i] + t * (tags[i + 1] - tags[i])
}

fn fallback(value: f64, anchors: &[f64]) -> f64 {
  tracing::error!(value, ?anchors, "no anchor pair brackets value; norm row is not monotonic");
  debug_assert!(false, "unbracketed value {} for anchors {:?}", value, anchors);
  FALLBACK_PERCENTILE
}

/// ---------------------------------------------------------------------------
/// Rating Curve
/// ---------------------------------------------------------------------------

/// Map a percentile (0-100) onto the 40-99 rating scale.
///
/// Bands are checked top-down. 95, 97 and 99 are snap points; every other
/// band is linear across its percentile span and rounded.
pub fn percentile_to_rating(p: f64) -> u8 {
  let rating = match p {
    p if p >= 99.0 => 99.0,
    p if p >= 97.0 => 97.0,
    p if p >= 95.0 => 95.0,
    p if p >= 90.0 => (90.0 + (p - 90.0) / 10.0 * 5.0).round(),
    p if p >= 75.0 => (80.0 + (p - 75.0) / 15.0 * 10.0).round(),
    p if p >= 50.0 => (70.0 + (p - 50.0) / 25.0 * 10.0).round(),
    p if p >= 25.0 => (55.0 + (p - 25.0) / 25.0 * 15.0).round(),
    p if p >= 10.0 => (48.0 + (p - 10.0) / 15.0 * 7.0).round(),
    p => (40.0 + p / 10.0 * 8.0).round(),
  };
  // NaN falls through to the bottom band and clamps to the floor
  if rating.is_nan() {
    return MIN_RATING;
  }
  rating.clamp(MIN_RATING as f64, MAX_RATING as f64) as u8
}

/// ---------------------------------------------------------------------------
/// Tiers and Bands
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
  Elite,
  #[serde(rename = "ALL-PRO")]
  AllPro,
  Starter,
  Solid,
  Backup,
  Rookie,
}

impl Tier {
  pub fn from_rating(rating: u8) -> Self {
    match rating {
      r if r >= 95 => Tier::Elite,
      r if r >= 88 => Tier::AllPro,
      r if r >= 80 => Tier::Starter,
      r if r >= 70 => Tier::Solid,
      r if r >= 55 => Tier::Backup,
      _ => Tier::Rookie,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Tier::Elite => "ELITE",
      Tier::AllPro => "ALL-PRO",
      Tier::Starter => "STARTER",
      Tier::Solid => "SOLID",
      Tier::Backup => "BACKUP",
      Tier::Rookie => "ROOKIE",
    }
  }
}

impl std::fmt::Display for Tier {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Coarse bucket used by renderers for coloring scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
  Elite,
  Great,
  Good,
  Average,
  Below,
}

impl RatingBand {
  pub fn from_rating(rating: u8) -> Self {
    match rating {
      r if r >= 90 => RatingBand::Elite,
      r if r >= 80 => RatingBand::Great,
      r if r >= 70 => RatingBand::Good,
      r if r >= 55 => RatingBand::Average,
      _ => RatingBand::Below,
    }
  }
}
