use common::crossword::{letter_positions, Direction};
use util::{
  grid::{Grid, Gridlike, MutGridlike},
  pos::Pos,
};

/// The square letter surface a puzzle is built on. Unset cells are `None`.
#[derive(Clone, Debug)]
pub struct Board {
  grid: Grid<Option<char>>,
}

impl Board {
  pub fn new(size: u32) -> Self {
    Self { grid: Grid::new(size, size) }
  }

  pub fn size(&self) -> u32 {
    self.grid.width()
  }

  pub fn grid(&self) -> &Grid<Option<char>> {
    &self.grid
  }

  pub fn tile(&self, pos: Pos) -> Option<char> {
    self.grid.get(pos).cloned().flatten()
  }

  /// Whether `word` fits at `anchor`: every cell it would cover is on the board
  /// and either unset or already holds the same letter.
  pub fn fits(&self, word: &str, anchor: Pos, direction: Direction) -> bool {
    !word.is_empty()
      && letter_positions(word, anchor, direction).all(|(c, pos)| {
        self
          .grid
          .get(pos)
          .is_some_and(|tile| tile.is_none_or(|existing| existing == c))
      })
  }

  /// Writes `word` at `anchor` if it fits, leaving the board untouched otherwise.
  pub fn try_write(&mut self, word: &str, anchor: Pos, direction: Direction) -> bool {
    if !self.fits(word, anchor, direction) {
      return false;
    }

    for (c, pos) in letter_positions(word, anchor, direction) {
      if let Some(tile) = self.grid.get_mut(pos) {
        *tile = Some(c);
      }
    }
    true
  }
}
