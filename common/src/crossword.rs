use std::{collections::HashMap, fmt::Display};

use bitcode::{Decode, Encode};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use util::{
  error::{XWordError, XWordResult},
  grid::{Grid, Gridlike},
  pos::{Diff, Pos},
};

/// A candidate answer and the clue shown for it.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct WordClue {
  pub word: String,
  pub clue: String,
}

impl WordClue {
  pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
    Self { word: word.into(), clue: clue.into() }
  }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
  Across,
  Down,
}

impl Direction {
  pub fn perpendicular(self) -> Self {
    match self {
      Direction::Across => Direction::Down,
      Direction::Down => Direction::Across,
    }
  }

  /// Offset between consecutive letters of a word running this way.
  pub fn step(self) -> Diff {
    match self {
      Direction::Across => Diff::DX,
      Direction::Down => Diff::DY,
    }
  }
}

impl Display for Direction {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "{}",
      match self {
        Direction::Across => "across",
        Direction::Down => "down",
      }
    )
  }
}

/// A word committed to the grid, anchored at its top-left cell.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct Placement {
  pub word: String,
  pub row: u32,
  pub col: u32,
  #[serde(alias = "dir")]
  pub direction: Direction,
}

impl Placement {
  pub fn anchor(&self) -> Pos {
    Pos::from_row_col(self.row as i32, self.col as i32)
  }

  pub fn letter_positions(&self) -> impl Iterator<Item = (char, Pos)> + '_ {
    letter_positions(&self.word, self.anchor(), self.direction)
  }
}

/// Pairs each letter of `word` with the cell it occupies when anchored at `anchor`.
pub fn letter_positions(
  word: &str,
  anchor: Pos,
  direction: Direction,
) -> impl Iterator<Item = (char, Pos)> + '_ {
  let step = direction.step();
  word
    .chars()
    .enumerate()
    .map(move |(idx, c)| (c, anchor + idx as i32 * step))
}

/// A finished crossword, as persisted and handed to students.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct PuzzleRecord {
  /// Candidate words in the order the word source produced them.
  pub words: Vec<String>,
  pub clues: HashMap<String, String>,
  /// `size` rows of `size` letters each. Every cell holds a letter.
  pub grid: Vec<String>,
  pub placed: Vec<Placement>,
  pub unused: Vec<String>,
  pub size: u32,
}

impl PuzzleRecord {
  pub fn clue(&self, word: &str) -> Option<&str> {
    self.clues.get(word).map(|clue| clue.as_str())
  }

  pub fn solution_grid(&self) -> XWordResult<Grid<char>> {
    if self.grid.len() != self.size as usize {
      return Err(
        XWordError::Parse(format!(
          "Puzzle has {} rows, expected {}",
          self.grid.len(),
          self.size
        ))
        .into(),
      );
    }
    if let Some((idx, row)) = self
      .grid
      .iter()
      .enumerate()
      .find(|(_, row)| row.chars().count() != self.size as usize)
    {
      return Err(
        XWordError::Parse(format!(
          "Puzzle row {idx} has {} cells, expected {}",
          row.chars().count(),
          self.size
        ))
        .into(),
      );
    }

    Grid::from_vec(
      self.grid.iter().flat_map(|row| row.chars()).collect(),
      self.size,
      self.size,
    )
  }

  /// Checks that the grid is dense with letters and that every placed word reads
  /// out of the grid at its recorded position.
  pub fn verify(&self) -> XWordResult {
    let grid = self.solution_grid()?;
    if let Some(pos) = grid
      .positions()
      .find(|&pos| grid.get(pos).is_none_or(|c| !c.is_ascii_uppercase()))
    {
      return Err(XWordError::Parse(format!("Cell {pos} is not a letter")).into());
    }

    for placement in &self.placed {
      for (c, pos) in placement.letter_positions() {
        match grid.get(pos) {
          Some(&tile) if tile == c => {}
          Some(&tile) => {
            return Err(
              XWordError::Parse(format!(
                "Word {} expects '{c}' at {pos}, grid has '{tile}'",
                placement.word
              ))
              .into(),
            )
          }
          None => {
            return Err(
              XWordError::Parse(format!(
                "Word {} runs out of bounds at {pos}",
                placement.word
              ))
              .into(),
            )
          }
        }
      }
    }

    Ok(())
  }
}

impl Display for PuzzleRecord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for row in &self.grid {
      writeln!(f, "{}", row.chars().join(" "))?;
    }

    writeln!(f)?;
    writeln!(f, "Clues:")?;
    for (idx, placement) in self.placed.iter().enumerate() {
      writeln!(
        f,
        "{:>3}. ({}, {}) {:<6} {} [{}]",
        idx + 1,
        placement.row,
        placement.col,
        placement.direction,
        self.clue(&placement.word).unwrap_or("-"),
        placement.word.chars().count()
      )?;
    }

    if !self.unused.is_empty() {
      writeln!(f)?;
      writeln!(f, "Unused: {}", self.unused.iter().join(", "))?;
    }

    Ok(())
  }
}
