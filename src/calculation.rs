//! Full rating calculation
//!
//! Scores every supplied metric, rolls ratings up into category scores and an
//! overall rating, and runs the weakest-link analysis. Pure: the same input
//! and tables always produce the same `Calculation`.

use serde::Serialize;

use crate::imbalance::{analyze, WeakestLinkReport};
use crate::models::{
  AthleteInput, AthleteProfile, Category, CategoryScores, MetricKey, OverallResult, ScoredMetric,
};
use crate::norms::NormTables;
use crate::scorer::{MetricScorer, StrengthOutcome};
use crate::scoring::Tier;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum CalculationError {
  /// Nothing could be scored. Advisories raised while scoring are kept so
  /// the caller still learns why, e.g. lifts entered without bodyweight.
  #[error("{}", no_data_message(.warnings))]
  NoData { warnings: Vec<Warning> },
}

const NO_DATA_MESSAGE: &str = "Please enter at least one metric to generate ratings.";

fn no_data_message(warnings: &[Warning]) -> String {
  let mut message = NO_DATA_MESSAGE.to_string();
  for warning in warnings {
    message.push('\n');
    message.push_str(warning.message());
  }
  message
}

/// Advisory conditions raised while scoring, reported with the result or with `NoData`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
  /// A strength lift was entered without a usable bodyweight
  MissingBodyweight,
}

impl Warning {
  pub fn message(&self) -> &'static str {
    match self {
      Warning::MissingBodyweight => {
        "Enter bodyweight to score strength lifts (relative strength = lift ÷ BW)."
      }
    }
  }
}

impl std::fmt::Display for Warning {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.message())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
  pub athlete: AthleteProfile,
  pub result: OverallResult,
  pub warnings: Vec<Warning>,
  pub weakest_link: Option<WeakestLinkReport>,
}

/// ---------------------------------------------------------------------------
/// Scoring Pass
/// ---------------------------------------------------------------------------

/// Score every metric present in `input`, in `MetricKey::ALL` order.
/// Returns the scored metrics and any advisories raised along the way.
pub fn score_all(input: &AthleteInput, tables: &NormTables) -> (Vec<ScoredMetric>, Vec<Warning>) {
  let scorer = MetricScorer::new(tables, input.sex, input.effective_age());
  let bodyweight = input.valid_bodyweight();
  let mut metrics = Vec::new();
  let mut warnings = Vec::new();

  for key in MetricKey::ALL {
    let raw = input.raw_value(key);
    if key.is_relative_strength() {
      match scorer.score_strength(key, raw, bodyweight) {
        StrengthOutcome::Scored(metric) => metrics.push(metric),
        StrengthOutcome::NeedsBodyweight => {
          tracing::debug!(metric = %key, "Strength lift skipped without bodyweight");
          if !warnings.contains(&Warning::MissingBodyweight) {
            warnings.push(Warning::MissingBodyweight);
          }
        }
        StrengthOutcome::Missing => {}
      }
    } else if let Some(metric) = scorer.score(key, raw) {
      metrics.push(metric);
    }
  }

  (metrics, warnings)
}

/// ---------------------------------------------------------------------------
/// Aggregation
/// ---------------------------------------------------------------------------

/// Round a mean the way ratings round: halves go up
fn rounded_mean(values: &[f64]) -> Option<f64> {
  if values.is_empty() {
    return None;
  }
  Some((values.iter().sum::<f64>() / values.len() as f64).round())
}

/// Category scores and overall rating from scored metrics.
///
/// Categories with no scored members stay `None`. The overall is the rounded
/// mean of the present category scores, not of the raw metric ratings.
pub fn aggregate(metrics: &[ScoredMetric]) -> Result<(CategoryScores, u8), CalculationError> {
  if metrics.is_empty() {
    return Err(CalculationError::NoData { warnings: Vec::new() });
  }

  let mut scores = CategoryScores::new();
  for category in Category::ALL {
    let ratings: Vec<f64> = metrics
      .iter()
      .filter(|m| m.key.category() == category)
      .map(|m| m.rating as f64)
      .collect();
    scores.set(category, rounded_mean(&ratings).map(|r| r as u8));
  }

  let present: Vec<f64> = scores.present().map(|(_, s)| s as f64).collect();
  let overall = rounded_mean(&present).ok_or(CalculationError::NoData { warnings: Vec::new() })? as u8;
  Ok((scores, overall))
}

/// Rounded mean percentile across every scored metric
pub fn overall_percentile(metrics: &[ScoredMetric]) -> Option<u8> {
  let percentiles: Vec<f64> = metrics
    .iter()
    .map(|m| m.percentile)
    .filter(|p| p.is_finite())
    .collect();
  rounded_mean(&percentiles).map(|p| p as u8)
}

/// Run a full calculation.
///
/// Fails only when nothing at all could be scored. Missing metrics are
/// skipped; a strength lift without bodyweight is skipped with a warning.
pub fn calculate(input: &AthleteInput, tables: &NormTables) -> Result<Calculation, CalculationError> {
  let (metrics, warnings) = score_all(input, tables);
  let (category_scores, overall) = match aggregate(&metrics) {
    Ok(aggregated) => aggregated,
    Err(CalculationError::NoData { .. }) => {
      tracing::warn!(warnings = warnings.len(), "No metrics could be scored");
      return Err(CalculationError::NoData { warnings });
    }
  };
  let overall_percentile = overall_percentile(&metrics).unwrap_or_default();
  let weakest_link = analyze(&category_scores);

  tracing::info!(
    overall,
    metrics = metrics.len(),
    categories = category_scores.present_count(),
    "Calculated ratings"
  );

  Ok(Calculation {
    athlete: input.profile(),
    result: OverallResult {
      overall,
      tier: Tier::from_rating(overall),
      category_scores,
      metrics,
      overall_percentile,
    },
    warnings,
    weakest_link,
  })
}
