use common::{crossword::PuzzleRecord, grading::SubmissionResult};

fn same_letter(expected: char, actual: char) -> bool {
  expected == actual || expected.to_uppercase().eq(actual.to_uppercase())
}

fn saturating_u32(count: usize) -> u32 {
  u32::try_from(count).unwrap_or(u32::MAX)
}

/// Scores a student's grid against the solution, cell by cell and ignoring case.
///
/// The solution's first row sets the width. Cells the student left out (short or
/// missing rows) count as wrong; nothing about the student's grid is an error.
pub fn grade_submission<S, T>(solution: &[S], student: &[T]) -> SubmissionResult
where
  S: AsRef<str>,
  T: AsRef<str>,
{
  let rows = solution.len();
  let cols = solution
    .first()
    .map_or(0, |row| row.as_ref().chars().count());
  let total_cells = rows * cols;

  let correct_cells: usize = solution
    .iter()
    .enumerate()
    .map(|(r, solution_row)| {
      let student_row = student.get(r).map_or("", |row| row.as_ref());
      solution_row
        .as_ref()
        .chars()
        .zip(student_row.chars())
        .take(cols)
        .filter(|&(expected, actual)| same_letter(expected, actual))
        .count()
    })
    .sum();

  let score_fraction = if total_cells > 0 {
    correct_cells as f64 / total_cells as f64
  } else {
    0.
  };

  SubmissionResult {
    total_cells: saturating_u32(total_cells),
    correct_cells: saturating_u32(correct_cells),
    score_fraction,
  }
}

pub fn grade_puzzle<T: AsRef<str>>(puzzle: &PuzzleRecord, student: &[T]) -> SubmissionResult {
  grade_submission(&puzzle.grid, student)
}
