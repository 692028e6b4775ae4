use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::calculation::Calculation;
use crate::commands::{self, history as history_commands};
use crate::db::AppState;
use crate::history::{Comparison, HistoryEntry, Session};
use crate::imbalance::WeakestLinkReport;
use crate::models::AthleteInput;

#[derive(Parser, Debug)]
#[command(name = "combine-rating")]
#[command(about = "Madden-style 40-99 athletic ratings from fitness test results", long_about = None)]
#[command(version)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Rate an athlete from a JSON input file
  Rate {
    /// Athlete input JSON (see `preset` for the shape)
    #[arg(short, long)]
    input: PathBuf,

    /// Save the result to history
    #[arg(long)]
    save: bool,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
  },

  /// Manage saved results
  History {
    #[command(subcommand)]
    command: HistoryCommand,
  },

  /// Print the example athlete input as JSON
  Preset,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommand {
  /// List saved results, newest first
  List {
    #[arg(long)]
    json: bool,
  },

  /// Compare a fresh rating against a saved result
  Compare {
    /// Newest-first index from `history list`
    index: usize,

    /// Athlete input JSON to rate
    #[arg(short, long)]
    input: PathBuf,

    #[arg(long)]
    json: bool,
  },

  /// Delete one saved result
  Delete {
    /// Newest-first index from `history list`
    index: usize,
  },

  /// Delete every saved result
  Clear,
}

/// Read an athlete input file
pub fn read_input(path: &Path) -> Result<AthleteInput, String> {
  let raw = std::fs::read_to_string(path)
    .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
  serde_json::from_str(&raw).map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
  serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {}", e))
}

/// Run one CLI command and return what should be printed
pub async fn execute(command: Commands, state: &AppState) -> Result<String, String> {
  let mut session = Session::new();

  match command {
    Commands::Rate { input, save, json } => {
      let calc = commands::calculate_ratings(state, &mut session, read_input(&input)?).await?;
      let mut out = if json { to_json(&calc)? } else { render_calculation(&calc) };
      if save {
        let entry = history_commands::save_last_result(state, &session).await?;
        tracing::info!(id = entry.id, "Result saved to history");
        if !json {
          out.push_str("\nSaved to history.\n");
        }
      }
      Ok(out)
    }

    Commands::History { command } => match command {
      HistoryCommand::List { json } => {
        let entries = history_commands::get_history(state).await?;
        if json {
          to_json(&entries)
        } else {
          Ok(render_history(&entries))
        }
      }
      HistoryCommand::Compare { index, input, json } => {
        commands::calculate_ratings(state, &mut session, read_input(&input)?).await?;
        match history_commands::compare_with_history(state, &mut session, index).await? {
          Some(cmp) if json => to_json(&cmp),
          Some(cmp) => Ok(render_comparison(&cmp)),
          None => Ok(String::new()),
        }
      }
      HistoryCommand::Delete { index } => {
        let remaining = history_commands::delete_history_entry(state, &mut session, index).await?;
        Ok(format!("Deleted entry {}. {} saved.\n", index, remaining.len()))
      }
      HistoryCommand::Clear => {
        let removed = history_commands::clear_history(state, &mut session).await?;
        Ok(format!("Cleared {} saved results.\n", removed))
      }
    },

    Commands::Preset => to_json(&commands::get_preset()),
  }
}

/// ---------------------------------------------------------------------------
/// Text Output
/// ---------------------------------------------------------------------------

fn score_or_dash(score: Option<u8>) -> String {
  score.map_or_else(|| "--".to_string(), |s| s.to_string())
}

fn signed(delta: i16) -> String {
  if delta > 0 {
    format!("+{}", delta)
  } else {
    delta.to_string()
  }
}

pub fn render_calculation(calc: &Calculation) -> String {
  let mut out = String::new();
  let athlete = &calc.athlete;
  let result = &calc.result;

  let _ = writeln!(out, "{} | Age {} | {}", athlete.name, athlete.age, athlete.sex);
  let _ = writeln!(
    out,
    "OVERALL {} {} (avg percentile {})",
    result.overall, result.tier, result.overall_percentile
  );
  out.push('\n');

  for (category, score) in result.category_scores.iter() {
    let _ = writeln!(out, "{:<22} {:>3}", category.as_str(), score_or_dash(score));
    for metric in result.metrics.iter().filter(|m| m.key.category() == category) {
      let value = if metric.unit.is_empty() {
        metric.display_value.clone()
      } else {
        format!("{} ({})", metric.display_value, metric.unit)
      };
      let _ = writeln!(
        out,
        "  {:<20} {:>3}  p{:<4.0} {}",
        metric.label, metric.rating, metric.percentile, value
      );
    }
  }

  for warning in &calc.warnings {
    let _ = writeln!(out, "\n! {}", warning);
  }

  if let Some(report) = &calc.weakest_link {
    out.push_str(&render_weakest_link(report));
  }

  out
}

fn render_weakest_link(report: &WeakestLinkReport) -> String {
  let mut out = String::new();
  let _ = writeln!(out, "\n{} WEAKEST LINK: {} [{}]", report.tips.icon, report.worst, report.severity);
  let _ = writeln!(out, "{}", report.summary());
  for tip in report.tips.tips {
    let _ = writeln!(out, "  - {}", tip);
  }
  out
}

pub fn render_history(entries: &[HistoryEntry]) -> String {
  if entries.is_empty() {
    return "No saved results.\n".to_string();
  }

  let mut out = String::new();
  for (index, entry) in entries.iter().enumerate() {
    let _ = writeln!(
      out,
      "[{}] {}  {:<20} {:>3} {}",
      index,
      entry.created_at.format("%Y-%m-%d %H:%M"),
      entry.athlete.name,
      entry.result.overall,
      entry.result.tier
    );
  }
  out
}

pub fn render_comparison(cmp: &Comparison) -> String {
  let mut out = String::new();
  let _ = writeln!(
    out,
    "OVERALL {} vs {} ({})",
    cmp.overall_current,
    cmp.overall_previous,
    signed(cmp.overall_delta)
  );
  for row in &cmp.categories {
    let delta = row.delta.map_or_else(|| "--".to_string(), signed);
    let _ = writeln!(
      out,
      "{:<22} {:>3} vs {:>3} ({})",
      row.category.as_str(),
      score_or_dash(row.current),
      score_or_dash(row.previous),
      delta
    );
  }
  out
}
