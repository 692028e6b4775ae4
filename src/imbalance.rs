//! Weakest-link analysis
//!
//! Compares the best and worst category scores. A gap of 8 points or more is
//! worth calling out; the gap size sets the severity.

use serde::Serialize;

use crate::models::{Category, CategoryScores};

/// Smallest gap that produces a report
pub const MIN_GAP: u8 = 8;
pub const SIGNIFICANT_GAP: u8 = 15;
pub const CRITICAL_GAP: u8 = 25;
/// Gap at which the meter is full
const GAP_METER_SPAN: f64 = 32.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
  Moderate,
  Significant,
  Critical,
}

impl Severity {
  pub fn from_gap(gap: u8) -> Self {
    match gap {
      g if g >= CRITICAL_GAP => Severity::Critical,
      g if g >= SIGNIFICANT_GAP => Severity::Significant,
      _ => Severity::Moderate,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Severity::Moderate => "MODERATE",
      Severity::Significant => "SIGNIFICANT",
      Severity::Critical => "CRITICAL",
    }
  }
}

impl std::fmt::Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeakestLinkReport {
  pub worst: Category,
  pub worst_score: u8,
  pub best: Category,
  pub best_score: u8,
  pub gap: u8,
  pub severity: Severity,
  /// 0.0 at the minimum reportable gap, 1.0 at 40+ points. Presentation only.
  pub gap_fraction: f64,
  pub tips: ImprovementTips,
}

impl WeakestLinkReport {
  pub fn summary(&self) -> String {
    format!(
      "Your {} rating of {} trails your best category ({} at {}) by {} points.",
      self.worst, self.worst_score, self.best, self.best_score, self.gap
    )
  }
}

/// Find the weakest category and how far it trails the strongest.
///
/// Needs at least two scored categories. Ties go to the first category in
/// category order.
pub fn analyze(scores: &CategoryScores) -> Option<WeakestLinkReport> {
  let mut present = scores.present();
  let first = present.next()?;
  let (mut worst, mut best) = (first, first);
  let mut count = 1;

  for entry in present {
    count += 1;
    if entry.1 < worst.1 {
      worst = entry;
    }
    if entry.1 > best.1 {
      best = entry;
    }
  }

  if count < 2 {
    return None;
  }

  let gap = best.1 - worst.1;
  if gap < MIN_GAP {
    tracing::debug!(gap, "Categories balanced; no weakest link");
    return None;
  }

  let gap_fraction = ((gap - MIN_GAP) as f64 / GAP_METER_SPAN).clamp(0.0, 1.0);

  Some(WeakestLinkReport {
    worst: worst.0,
    worst_score: worst.1,
    best: best.0,
    best_score: best.1,
    gap,
    severity: Severity::from_gap(gap),
    gap_fraction,
    tips: tips_for(worst.0),
  })
}

/// ---------------------------------------------------------------------------
/// Improvement Tips
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImprovementTips {
  pub icon: &'static str,
  pub tips: &'static [&'static str],
}

pub fn tips_for(category: Category) -> ImprovementTips {
  match category {
    Category::Strength => ImprovementTips {
      icon: "🏋️",
      tips: &[
        "Follow a progressive overload program like 5/3/1 or GZCL — add weight systematically each cycle to the squat, bench, deadlift, and overhead press.",
        "Prioritize compound lifts 3–4× per week. Frequency and consistency beat single-session intensity for building raw strength.",
        "Eat at a slight caloric surplus (250–500 cal/day) with at least 0.8g protein per pound of bodyweight to fuel recovery and growth.",
        "Address sticking points with targeted accessories: pause squats, deficit deadlifts, close-grip bench, and pin presses.",
      ],
    },
    Category::Conditioning => ImprovementTips {
      icon: "🫀",
      tips: &[
        "Build an aerobic base with 3–4 sessions of Zone 2 cardio (conversational pace) lasting 30–60 minutes each week.",
        "Add 1–2 high-intensity interval sessions per week (e.g. 30s on / 60s off × 8–12 rounds) to drive VO₂ max improvements.",
        "Incorporate push-up density work: set a timer for 10 minutes and accumulate as many quality reps as possible, resting as needed.",
        "Build your L-sit by starting with a tucked hold on parallettes, gradually extending legs over weeks. Aim for 3×max-hold daily.",
        "Track your resting heart rate each morning — it's one of the most reliable markers of improving aerobic fitness over time.",
      ],
    },
    Category::SpeedEndurance => ImprovementTips {
      icon: "🏃",
      tips: &[
        "Follow the 80/20 rule: 80% of your weekly running volume at easy, conversational pace and 20% at tempo or interval intensity.",
        "Add weekly tempo runs at your lactate threshold pace (comfortably hard, roughly 10K race effort) for 20–30 minutes.",
        "Include one speed session per week: 400m repeats at your goal mile pace with equal rest intervals.",
        "Don't neglect mileage. Gradually build weekly volume by no more than 10% per week to strengthen your aerobic engine.",
      ],
    },
    Category::StrengthEndurance => ImprovementTips {
      icon: "💪",
      tips: &[
        "Train pull-ups with grease-the-groove: multiple sub-max sets spread throughout the day, 5–6 days per week.",
        "For bench reps, train high-rep sets (3×15–20) at 50–60% of your 1RM twice a week to build pressing endurance.",
        "Add rowing intervals (500m repeats with 1:1 rest) 2× per week to build both power and aerobic capacity on the erg.",
        "Train dead hangs 3–4× per week: 3 sets to failure at the end of your session. Grip strength adapts fast with consistent work.",
        "Muscular endurance responds well to density training — set a 15-minute clock and accumulate reps across your weak lifts.",
      ],
    },
    Category::Explosiveness => ImprovementTips {
      icon: "🚀",
      tips: &[
        "Train box jumps and depth jumps 2–3× per week — focus on maximal intent and full recovery between sets (3–5 reps × 4–5 sets).",
        "Add Olympic lift variations: power cleans and hang snatches develop the same fast-twitch recruitment that drives vertical and broad jump.",
        "Plyometric progressions: start with squat jumps, progress to tuck jumps, then single-leg bounds. Quality over volume.",
        "Strengthen your posterior chain with heavy hip hinges (trap bar deadlifts, RDLs) — ground force production starts at the hips.",
      ],
    },
  }
}
