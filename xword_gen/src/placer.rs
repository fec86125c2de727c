use std::cmp::Reverse;

use common::crossword::{Direction, Placement};
use itertools::Itertools;
use rand::{seq::IndexedRandom, Rng};
use tracing::debug;
use util::pos::Pos;

use crate::board::Board;

/// The board after placement, with every input word accounted for in exactly one
/// of `placed` or `unused`.
#[derive(Clone, Debug)]
pub struct PlacementOutcome {
  pub board: Board,
  pub placed: Vec<Placement>,
  pub unused: Vec<String>,
}

/// Lays words out on a square board. Longer words go first; each later word tries
/// to cross an already placed word, then to land anywhere it fits.
pub struct Placer<'r, R: ?Sized> {
  board: Board,
  rng: &'r mut R,
  attempts: u32,
  placed: Vec<Placement>,
  unused: Vec<String>,
}

impl<'r, R> Placer<'r, R>
where
  R: Rng + ?Sized,
{
  pub fn new(size: u32, attempts: u32, rng: &'r mut R) -> Self {
    Self {
      board: Board::new(size),
      rng,
      attempts,
      placed: vec![],
      unused: vec![],
    }
  }

  pub fn place_all<S>(mut self, words: impl IntoIterator<Item = S>) -> PlacementOutcome
  where
    S: AsRef<str>,
  {
    let words = words
      .into_iter()
      .map(|word| word.as_ref().to_owned())
      .sorted_by_key(|word| Reverse(word.chars().count()))
      .collect_vec();

    for (idx, word) in words.into_iter().enumerate() {
      let placed = if idx == 0 {
        self.place_centered(&word) || self.place_randomly(&word)
      } else {
        self.place_crossing(&word) || self.place_randomly(&word)
      };

      if !placed {
        debug!(%word, "No room for word");
        self.unused.push(word);
      }
    }

    PlacementOutcome {
      board: self.board,
      placed: self.placed,
      unused: self.unused,
    }
  }

  fn commit(&mut self, word: &str, anchor: Pos, direction: Direction) -> bool {
    if !self.board.try_write(word, anchor, direction) {
      return false;
    }

    self.placed.push(Placement {
      word: word.to_owned(),
      row: anchor.row() as u32,
      col: anchor.col() as u32,
      direction,
    });
    true
  }

  /// Across, on the middle row, horizontally centered.
  fn place_centered(&mut self, word: &str) -> bool {
    let size = self.board.size() as i32;
    let len = word.chars().count() as i32;
    let anchor = Pos::from_row_col(size / 2, ((size - len) / 2).max(0));
    self.commit(word, anchor, Direction::Across)
  }

  fn random_anchor(&mut self) -> (Pos, Direction) {
    let size = self.board.size();
    let anchor = Pos::from_row_col(
      self.rng.random_range(0..size) as i32,
      self.rng.random_range(0..size) as i32,
    );
    let direction = if self.rng.random_bool(0.5) {
      Direction::Across
    } else {
      Direction::Down
    };
    (anchor, direction)
  }

  fn try_random(&mut self, word: &str) -> bool {
    if self.board.size() == 0 {
      return false;
    }
    let (anchor, direction) = self.random_anchor();
    self.commit(word, anchor, direction)
  }

  /// Up to `attempts` tries at a random anchor and orientation.
  fn place_randomly(&mut self, word: &str) -> bool {
    (0..self.attempts).any(|_| self.try_random(word))
  }

  /// Up to `attempts` tries at crossing a random placed word on a shared letter.
  /// A try against a word with no letter in common is spent on a random anchor
  /// instead.
  fn place_crossing(&mut self, word: &str) -> bool {
    let letters = word.chars().collect_vec();
    for _ in 0..self.attempts {
      let Some(base) = self.placed.choose(&mut *self.rng).cloned() else {
        return false;
      };

      let crossings = base
        .word
        .chars()
        .enumerate()
        .flat_map(|(i, base_letter)| {
          letters
            .iter()
            .enumerate()
            .filter(move |&(_, &letter)| letter == base_letter)
            .map(move |(j, _)| (i, j))
        })
        .collect_vec();

      let placed = match crossings.choose(&mut *self.rng) {
        Some(&(i, j)) => {
          let direction = base.direction.perpendicular();
          let shared = base.anchor() + i as i32 * base.direction.step();
          let anchor = shared + -(j as i32) * direction.step();
          self.commit(word, anchor, direction)
        }
        None => self.try_random(word),
      };

      if placed {
        return true;
      }
    }
    false
  }
}

/// Places `words` on a fresh `size` x `size` board.
pub fn place_words<R, S>(
  words: impl IntoIterator<Item = S>,
  size: u32,
  attempts: u32,
  rng: &mut R,
) -> PlacementOutcome
where
  R: Rng + ?Sized,
  S: AsRef<str>,
{
  Placer::new(size, attempts, rng).place_all(words)
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use std::collections::HashSet;

  use common::crossword::{Direction, Placement};
  use googletest::prelude::*;
  use rand::{rngs::StdRng, SeedableRng};
  use util::pos::Pos;

  use super::{place_words, PlacementOutcome};

  const WORDS: [&str; 10] = [
    "PHOTOSYNTHESIS",
    "CHLOROPHYLL",
    "MITOCHONDRIA",
    "NUCLEUS",
    "ENZYME",
    "OSMOSIS",
    "PROTEIN",
    "GENE",
    "CELL",
    "ATOM",
  ];

  fn assert_valid(outcome: &PlacementOutcome, size: u32) {
    for placement in &outcome.placed {
      for (c, pos) in placement.letter_positions() {
        assert!(
          pos.x >= 0 && pos.y >= 0 && pos.x < size as i32 && pos.y < size as i32,
          "{} out of bounds at {pos}",
          placement.word
        );
        assert_eq!(outcome.board.tile(pos), Some(c), "{} mismatch at {pos}", placement.word);
      }
    }
  }

  #[gtest]
  fn test_first_word_is_centered() {
    let mut rng = StdRng::seed_from_u64(1);
    let outcome = place_words(["ENZYME", "CELL"], 15, 200, &mut rng);
    expect_that!(
      outcome.placed[0],
      eq(&Placement { word: "ENZYME".to_owned(), row: 7, col: 4, direction: Direction::Across })
    );
  }

  #[gtest]
  fn test_longest_word_goes_first() {
    let mut rng = StdRng::seed_from_u64(2);
    let outcome = place_words(["CELL", "NUCLEUS", "GENE"], 15, 200, &mut rng);
    expect_that!(outcome.placed[0].word, eq("NUCLEUS"));
    expect_that!(outcome.placed[0].anchor(), eq(Pos::from_row_col(7, 4)));
  }

  #[gtest]
  fn test_word_exactly_as_wide_as_board() {
    let mut rng = StdRng::seed_from_u64(3);
    let outcome = place_words(["ABCDE"], 5, 200, &mut rng);
    expect_that!(outcome.placed[0].anchor(), eq(Pos::from_row_col(2, 0)));
  }

  #[gtest]
  fn test_crossing_shares_a_letter() {
    // The second word has a letter in common with the first, so every try at
    // crossing computes a perpendicular anchor through a shared cell.
    for seed in 0..20 {
      let mut rng = StdRng::seed_from_u64(seed);
      let outcome = place_words(["PLANET", "ORBIT"], 15, 200, &mut rng);
      assert_that!(outcome.placed.len(), eq(2));
      let second = &outcome.placed[1];
      expect_that!(second.direction, eq(Direction::Down));
      let first_cells: HashSet<_> = outcome.placed[0].letter_positions().collect();
      expect_true!(second
        .letter_positions()
        .any(|cell| first_cells.contains(&cell)));
      assert_valid(&outcome, 15);
    }
  }

  #[gtest]
  fn test_structural_invariants_across_seeds() {
    for seed in 0..50 {
      let mut rng = StdRng::seed_from_u64(seed);
      let outcome = place_words(WORDS, 15, 200, &mut rng);
      assert_valid(&outcome, 15);
      expect_that!(outcome.placed.len() + outcome.unused.len(), eq(WORDS.len()));
      let mut accounted = outcome
        .placed
        .iter()
        .map(|placement| placement.word.clone())
        .chain(outcome.unused.iter().cloned())
        .collect::<Vec<_>>();
      accounted.sort();
      let mut expected = WORDS.map(str::to_owned).to_vec();
      expected.sort();
      expect_that!(accounted, eq(&expected));
    }
  }

  #[gtest]
  fn test_too_long_words_are_unused() {
    let mut rng = StdRng::seed_from_u64(4);
    let outcome = place_words(["ELEPHANT", "CAT"], 5, 200, &mut rng);
    expect_that!(outcome.unused, container_eq(["ELEPHANT".to_owned()]));
    expect_that!(outcome.placed.len(), eq(1));
    expect_that!(outcome.placed[0].word, eq("CAT"));
    assert_valid(&outcome, 5);
  }

  #[gtest]
  fn test_no_words() {
    let mut rng = StdRng::seed_from_u64(5);
    let outcome = place_words(Vec::<String>::new(), 15, 200, &mut rng);
    expect_true!(outcome.placed.is_empty());
    expect_true!(outcome.unused.is_empty());
  }

  #[gtest]
  fn test_zero_size_board() {
    let mut rng = StdRng::seed_from_u64(6);
    let outcome = place_words(["CAT", "DOG"], 0, 200, &mut rng);
    expect_true!(outcome.placed.is_empty());
    expect_that!(outcome.unused.len(), eq(2));
  }

  #[gtest]
  fn test_crowded_board_conserves_words() {
    for seed in 0..20 {
      let mut rng = StdRng::seed_from_u64(seed);
      let outcome = place_words(["AAA", "BBB", "CCC", "DDD", "EEE", "FFF"], 3, 200, &mut rng);
      assert_valid(&outcome, 3);
      expect_that!(outcome.placed.len() + outcome.unused.len(), eq(6));
      expect_that!(outcome.placed.len(), le(3));
    }
  }

  #[gtest]
  fn test_zero_attempts_only_centers_first_word() {
    let mut rng = StdRng::seed_from_u64(7);
    let outcome = place_words(["NUCLEUS", "CELL"], 15, 0, &mut rng);
    expect_that!(outcome.placed.len(), eq(1));
    expect_that!(outcome.unused, container_eq(["CELL".to_owned()]));
  }
}
