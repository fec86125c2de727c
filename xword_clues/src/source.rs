use std::collections::HashSet;

use common::crossword::WordClue;
use textgen::TextGenerator;
use tracing::{debug, warn};

use crate::{frequency::TermFrequency, parse::parse_word_clues};

/// Source text beyond this many characters is not sent to the generator.
pub const PROMPT_TEXT_LIMIT: usize = 4500;
/// The generator must produce at least this many pairs (or the full request, if
/// smaller) before its output is trusted without topping up from the fallback.
pub const MIN_GENERATED_PAIRS: usize = 3;
pub const PLACEHOLDER_CLUE: &str = "Definition not available";

/// Produces crossword answers and clues for a document.
#[derive(Debug)]
pub struct WordClueSource<G> {
  generator: G,
}

impl<G> WordClueSource<G>
where
  G: TextGenerator,
{
  pub fn new(generator: G) -> Self {
    Self { generator }
  }

  pub fn prompt(text: &str, desired: usize) -> String {
    let excerpt = match text.char_indices().nth(PROMPT_TEXT_LIMIT) {
      Some((end, _)) => &text[..end],
      None => text,
    };

    format!(
      "From the text below, extract the {desired} most important single-word terms \
       useful for a classroom crossword. For each word give a short clue (one sentence).\n\
       Return one pair per line in the format: WORD|Clue\n\
       \n\
       Text:\n\
       {excerpt}\n"
    )
  }

  /// Asks the generator for up to `desired` pairs. When it fails or yields too few,
  /// the most frequent long tokens of `text` fill the remainder with a placeholder
  /// clue. The result may be shorter than `desired`, or empty.
  pub fn words_and_clues(&self, text: &str, desired: usize) -> Vec<WordClue> {
    let pairs = match self.generator.generate(&Self::prompt(text, desired)) {
      Ok(output) => parse_word_clues(&output, desired),
      Err(err) => {
        warn!("Word generation failed, using frequency fallback: {err}");
        vec![]
      }
    };

    if pairs.len() >= desired.min(MIN_GENERATED_PAIRS) {
      debug!(pairs = pairs.len(), "Using generated words");
      return pairs;
    }

    warn!(
      generated = pairs.len(),
      desired, "Too few generated words, topping up from term frequency"
    );
    top_up_from_frequency(pairs, text, desired)
  }
}

/// Appends the most frequent terms of `text` that are not already among `pairs`,
/// then truncates to `desired`.
pub fn top_up_from_frequency(
  mut pairs: Vec<WordClue>,
  text: &str,
  desired: usize,
) -> Vec<WordClue> {
  let frequency = TermFrequency::from_text(text);
  let mut seen: HashSet<String> = pairs.iter().map(|pair| pair.word.clone()).collect();
  pairs.extend(
    frequency
      .top_n_words(desired)
      .into_iter()
      .filter(|word| seen.insert((*word).to_owned()))
      .map(|word| WordClue::new(word, PLACEHOLDER_CLUE)),
  );
  pairs.truncate(desired);
  pairs
}
