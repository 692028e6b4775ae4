use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::metric::{Category, MetricKey};
use crate::scoring::Tier;

/// One scored test result. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredMetric {
  pub key: MetricKey,
  pub label: String,
  pub display_value: String,
  /// Secondary unit text, e.g. "1.49× BW" for relative strength
  #[serde(default)]
  pub unit: String,
  /// Continuous percentile in 1..=99.5
  pub percentile: f64,
  /// Rating in 40..=99
  pub rating: u8,
}

/// Category → rounded mean rating, `None` when no member metric was supplied.
/// Always holds every category, in category order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores(BTreeMap<Category, Option<u8>>);

impl CategoryScores {
  pub fn new() -> Self {
    Self(Category::ALL.iter().map(|c| (*c, None)).collect())
  }

  pub fn set(&mut self, category: Category, score: Option<u8>) {
    self.0.insert(category, score);
  }

  pub fn get(&self, category: Category) -> Option<u8> {
    self.0.get(&category).copied().flatten()
  }

  /// All categories with their optional score, in category order
  pub fn iter(&self) -> impl Iterator<Item = (Category, Option<u8>)> + '_ {
    self.0.iter().map(|(c, s)| (*c, *s))
  }

  /// Only categories that have a score, in category order
  pub fn present(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
    self.0.iter().filter_map(|(c, s)| s.map(|score| (*c, score)))
  }

  pub fn present_count(&self) -> usize {
    self.present().count()
  }
}

impl Default for CategoryScores {
  fn default() -> Self {
    Self::new()
  }
}

impl FromIterator<(Category, u8)> for CategoryScores {
  fn from_iter<I: IntoIterator<Item = (Category, u8)>>(iter: I) -> Self {
    let mut scores = Self::new();
    for (category, score) in iter {
      scores.set(category, Some(score));
    }
    scores
  }
}

/// Snapshot of one full calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallResult {
  pub overall: u8,
  pub tier: Tier,
  pub category_scores: CategoryScores,
  pub metrics: Vec<ScoredMetric>,
  /// Rounded mean of every metric percentile
  pub overall_percentile: u8,
}

impl OverallResult {
  pub fn metric(&self, key: MetricKey) -> Option<&ScoredMetric> {
    self.metrics.iter().find(|m| m.key == key)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_category_scores_keep_every_category() {
    let scores: CategoryScores = [(Category::Conditioning, 72)].into_iter().collect();
    assert_eq!(scores.iter().count(), 5);
    assert_eq!(scores.get(Category::Conditioning), Some(72));
    assert_eq!(scores.get(Category::Strength), None);
    assert_eq!(scores.present_count(), 1);
  }

  #[test]
  fn test_category_scores_serialize_null_for_missing() {
    let scores: CategoryScores = [(Category::Strength, 90)].into_iter().collect();
    let json = serde_json::to_value(&scores).unwrap();
    assert_eq!(json["STRENGTH"], 90);
    assert!(json["EXPLOSIVENESS"].is_null());
  }

  #[test]
  fn test_present_is_in_category_order() {
    let scores: CategoryScores = [
      (Category::Explosiveness, 60),
      (Category::Strength, 80),
      (Category::SpeedEndurance, 70),
    ]
    .into_iter()
    .collect();
    let order: Vec<Category> = scores.present().map(|(c, _)| c).collect();
    assert_eq!(
      order,
      vec![Category::Strength, Category::SpeedEndurance, Category::Explosiveness]
    );
  }
}
