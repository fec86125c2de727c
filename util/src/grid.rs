use std::fmt::Debug;

use crate::{
  error::{XWordError, XWordResult},
  pos::Pos,
};

pub trait Gridlike<T> {
  fn width(&self) -> u32;
  fn height(&self) -> u32;
  fn in_bounds(&self, pos: Pos) -> bool;

  fn get(&self, pos: Pos) -> Option<&T>;

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a;
}

pub trait MutGridlike<T>: Gridlike<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T>;
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
  grid: Vec<T>,
  width: u32,
  height: u32,
}

impl<T> Grid<T> {
  pub fn from_vec(grid: Vec<T>, width: u32, height: u32) -> XWordResult<Self> {
    let expected_size = width as usize * height as usize;
    if grid.len() != expected_size {
      return Err(
        XWordError::Internal(format!(
          "Expected grid.len() == expected_size, {} != {expected_size}",
          grid.len()
        ))
        .into(),
      );
    }

    Ok(Self { grid, width, height })
  }

  fn idx(&self, pos: Pos) -> usize {
    debug_assert!(self.in_bounds(pos));
    let x = pos.x as usize;
    let y = pos.y as usize;
    x + y * self.width as usize
  }

  pub fn positions(&self) -> impl Iterator<Item = Pos> {
    let width = self.width;
    (0..self.height as i32).flat_map(move |y| (0..width as i32).map(move |x| Pos { x, y }))
  }

  pub fn map<F, U>(&self, f: F) -> Grid<U>
  where
    F: FnMut(&T) -> U,
  {
    Grid {
      grid: self.grid.iter().map(f).collect(),
      width: self.width,
      height: self.height,
    }
  }
}

impl<T> Grid<T>
where
  T: Default,
{
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      grid: (0..width as usize * height as usize)
        .map(|_| T::default())
        .collect(),
      width,
      height,
    }
  }
}

impl Grid<char> {
  /// One string per row, top to bottom.
  pub fn to_rows(&self) -> Vec<String> {
    (0..self.height)
      .map(|y| self.iter_row(y).collect())
      .collect()
  }
}

impl<T> Gridlike<T> for Grid<T> {
  fn width(&self) -> u32 {
    self.width
  }

  fn height(&self) -> u32 {
    self.height
  }

  fn in_bounds(&self, pos: Pos) -> bool {
    pos.x >= 0 && pos.x < self.width() as i32 && pos.y >= 0 && pos.y < self.height() as i32
  }

  fn get(&self, pos: Pos) -> Option<&T> {
    self
      .in_bounds(pos)
      .then(|| self.grid.get(self.idx(pos)))
      .flatten()
  }

  fn iter_row<'a, 'b>(&'a self, y: u32) -> impl Iterator<Item = &'b T>
  where
    'a: 'b,
    T: 'a,
  {
    let y = y as i32;
    (0..self.width()).flat_map(move |x| self.get(Pos { x: x as i32, y }))
  }
}

impl<T> MutGridlike<T> for Grid<T> {
  fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
    self
      .in_bounds(pos)
      .then(|| {
        let index = self.idx(pos);
        self.grid.get_mut(index)
      })
      .flatten()
  }
}

impl<T: Debug> Debug for Grid<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    (0..self.height).try_fold((), |_, y| {
      self.iter_row(y).try_fold((), |_, t| write!(f, "{t:?} "))?;
      writeln!(f)
    })
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use googletest::prelude::*;

  use crate::pos::Pos;

  use super::{Grid, Gridlike, MutGridlike};

  #[gtest]
  fn test_from_vec_size_mismatch() {
    expect_that!(Grid::from_vec(vec!['a', 'b', 'c'], 2, 2), err(anything()));
    expect_that!(Grid::from_vec(vec!['a', 'b', 'c', 'd'], 2, 2), ok(anything()));
  }

  #[gtest]
  fn test_out_of_bounds() {
    let grid: Grid<Option<char>> = Grid::new(3, 2);
    expect_true!(grid.in_bounds(Pos { x: 2, y: 1 }));
    expect_false!(grid.in_bounds(Pos { x: 3, y: 0 }));
    expect_false!(grid.in_bounds(Pos { x: 0, y: -1 }));
    expect_that!(grid.get(Pos { x: -1, y: 0 }), none());
    expect_that!(grid.get(Pos { x: 1, y: 1 }).cloned(), some(none()));
  }

  #[gtest]
  fn test_get_mut() {
    let mut grid: Grid<Option<char>> = Grid::new(2, 2);
    *grid.get_mut(Pos { x: 1, y: 0 }).unwrap() = Some('q');
    expect_that!(grid.get(Pos { x: 1, y: 0 }).cloned().flatten(), some(eq('q')));
    expect_true!(grid.get_mut(Pos { x: 2, y: 0 }).is_none());
  }

  #[gtest]
  fn test_to_rows() {
    let grid = Grid::from_vec("ABCDEF".chars().collect(), 3, 2).unwrap();
    expect_that!(grid.to_rows(), container_eq(["ABC".to_owned(), "DEF".to_owned()]));
  }

  #[gtest]
  fn test_new_fills_every_cell() {
    let grid: Grid<u8> = Grid::new(4, 3);
    expect_that!(grid.positions().count(), eq(12));
    expect_that!(grid.get(Pos { x: 3, y: 2 }), some(eq(&0)));
    expect_that!(grid.get(Pos { x: 4, y: 2 }), none());
  }

  #[gtest]
  fn test_positions_row_major() {
    let grid: Grid<u8> = Grid::new(2, 2);
    expect_that!(
      grid.positions().collect::<Vec<_>>(),
      container_eq([
        Pos { x: 0, y: 0 },
        Pos { x: 1, y: 0 },
        Pos { x: 0, y: 1 },
        Pos { x: 1, y: 1 }
      ])
    );
  }
}
