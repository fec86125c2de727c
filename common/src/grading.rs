use std::fmt::Display;

use bitcode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Outcome of comparing a student grid against a solution grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct SubmissionResult {
  pub total_cells: u32,
  pub correct_cells: u32,
  /// `correct_cells / total_cells`, or 0 when the solution has no cells.
  pub score_fraction: f64,
}

impl Display for SubmissionResult {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}/{} cells correct ({:.1}%)",
      self.correct_cells,
      self.total_cells,
      self.score_fraction * 100.
    )
  }
}

/// A stored grading outcome: the result plus the identifiers the caller attaches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct GradingRecord {
  pub result_id: String,
  pub assignment_id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub submission_id: Option<String>,
  #[serde(flatten)]
  pub result: SubmissionResult,
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use super::{GradingRecord, SubmissionResult};

  #[gtest]
  fn test_display() {
    let result = SubmissionResult { total_cells: 4, correct_cells: 3, score_fraction: 0.75 };
    expect_that!(result.to_string(), eq("3/4 cells correct (75.0%)"));
  }

  #[gtest]
  fn test_record_json_is_flat() {
    let record = GradingRecord {
      result_id: "r1".to_owned(),
      assignment_id: "a1".to_owned(),
      submission_id: None,
      result: SubmissionResult { total_cells: 6, correct_cells: 6, score_fraction: 1. },
    };
    let value = serde_json::to_value(&record).unwrap();
    expect_that!(value["total_cells"].as_u64(), some(eq(6)));
    expect_that!(value["score_fraction"].as_f64(), some(eq(1.)));
    expect_true!(value.get("submission_id").is_none());

    let decoded: GradingRecord = serde_json::from_value(value).unwrap();
    expect_that!(decoded, eq(&record));
  }
}
