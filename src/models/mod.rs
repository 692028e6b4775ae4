pub mod input;
pub mod metric;
pub mod result;

pub use input::{AthleteInput, AthleteProfile, Sex, TimeEntry};
pub use metric::{Category, MetricKey};
pub use result::{CategoryScores, OverallResult, ScoredMetric};
