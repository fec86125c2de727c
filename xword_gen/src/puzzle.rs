use std::collections::HashMap;

use common::crossword::{PuzzleRecord, WordClue};
use rand::Rng;
use textgen::TextGenerator;
use tracing::info;
use util::{error::XWordResult, time::time_fn};
use xword_clues::WordClueSource;

use crate::{config::PuzzleConfig, fill::fill_blanks, placer::place_words};

/// Builds crossword puzzles from source documents.
#[derive(Debug)]
pub struct PuzzleBuilder<G> {
  config: PuzzleConfig,
  source: WordClueSource<G>,
}

impl<G> PuzzleBuilder<G>
where
  G: TextGenerator,
{
  pub fn new(config: PuzzleConfig, generator: G) -> XWordResult<Self> {
    config.validate()?;
    Ok(Self { config, source: WordClueSource::new(generator) })
  }

  pub fn build<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> PuzzleRecord {
    let pairs = self.source.words_and_clues(text, self.config.num_words);
    puzzle_from_pairs(pairs, &self.config, rng)
  }
}

/// Lays out `pairs` and fills the rest of the grid. `words` keeps the order of
/// `pairs`, not the order the words were placed in.
pub fn puzzle_from_pairs<R: Rng + ?Sized>(
  pairs: Vec<WordClue>,
  config: &PuzzleConfig,
  rng: &mut R,
) -> PuzzleRecord {
  let words: Vec<String> = pairs.iter().map(|pair| pair.word.clone()).collect();
  let clues: HashMap<String, String> = pairs
    .into_iter()
    .map(|WordClue { word, clue }| (word, clue))
    .collect();

  let (elapsed, outcome) =
    time_fn(|| place_words(&words, config.grid_size, config.attempts, &mut *rng));
  let grid = fill_blanks(&outcome.board, rng).to_rows();

  info!(
    placed = outcome.placed.len(),
    unused = outcome.unused.len(),
    "Built {0}x{0} puzzle in {1:.3}ms",
    config.grid_size,
    elapsed.as_secs_f64() * 1000.
  );

  PuzzleRecord {
    words,
    clues,
    grid,
    placed: outcome.placed,
    unused: outcome.unused,
    size: config.grid_size,
  }
}
