use std::{
  fmt::Display,
  ops::{Add, Mul},
};

/// A cell coordinate. `x` is the column and `y` is the row, so `Pos { x: 0, y: 0 }`
/// is the top-left cell.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Pos {
  pub x: i32,
  pub y: i32,
}

impl Pos {
  pub const fn zero() -> Self {
    Self { x: 0, y: 0 }
  }

  pub const fn from_row_col(row: i32, col: i32) -> Self {
    Self { x: col, y: row }
  }

  pub const fn row(&self) -> i32 {
    self.y
  }

  pub const fn col(&self) -> i32 {
    self.x
  }
}

impl Add<Diff> for Pos {
  type Output = Self;

  fn add(self, rhs: Diff) -> Self {
    Self { x: self.x + rhs.x, y: self.y + rhs.y }
  }
}

impl Display for Pos {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Diff {
  pub x: i32,
  pub y: i32,
}

impl Diff {
  pub const DX: Diff = Diff { x: 1, y: 0 };
  pub const DY: Diff = Diff { x: 0, y: 1 };
}

impl Mul<Diff> for i32 {
  type Output = Diff;

  fn mul(self, rhs: Diff) -> Diff {
    Diff { x: self * rhs.x, y: self * rhs.y }
  }
}

impl Display for Diff {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

#[cfg(test)]
mod tests {
  use googletest::prelude::*;

  use super::{Diff, Pos};

  #[gtest]
  fn test_row_col() {
    let pos = Pos::from_row_col(3, 5);
    expect_that!(pos.row(), eq(3));
    expect_that!(pos.col(), eq(5));
    expect_that!(pos, eq(Pos { x: 5, y: 3 }));
  }

  #[gtest]
  fn test_step() {
    expect_that!(Pos::zero() + 4 * Diff::DX, eq(Pos { x: 4, y: 0 }));
    expect_that!(Pos { x: 2, y: 1 } + 3 * Diff::DY, eq(Pos { x: 2, y: 4 }));
  }
}
