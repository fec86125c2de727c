use rand::Rng;
use util::grid::Grid;

use crate::board::Board;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
  ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

/// Copies the board's letters, filling every unset cell with a uniformly random
/// letter so that no blanks remain.
pub fn fill_blanks<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Grid<char> {
  board
    .grid()
    .map(|tile| tile.unwrap_or_else(|| random_letter(rng)))
}
