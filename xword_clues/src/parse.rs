use common::crossword::WordClue;

pub const MIN_WORD_LEN: usize = 3;
pub const MAX_WORD_LEN: usize = 15;

/// Ways a `WORD<sep>clue` line may be split, in priority order. A line is split
/// by the first delimiter that applies to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Delimiter {
  Separator(&'static str),
  Whitespace,
}

const DELIMITERS: [Delimiter; 6] = [
  Delimiter::Separator("|"),
  Delimiter::Separator(":"),
  Delimiter::Separator("-"),
  Delimiter::Separator("\u{2014}"),
  Delimiter::Separator("\u{2013}"),
  Delimiter::Whitespace,
];

impl Delimiter {
  fn split<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
    match self {
      Delimiter::Separator(sep) => line.split_once(sep),
      Delimiter::Whitespace => line.trim().split_once(char::is_whitespace),
    }
    .map(|(word, clue)| (word.trim(), clue.trim()))
  }
}

fn split_pair(line: &str) -> Option<(&str, &str)> {
  DELIMITERS
    .iter()
    .find_map(|delimiter| delimiter.split(line))
}

/// Uppercases `raw` and drops everything but ASCII letters, keeping at most
/// `MAX_WORD_LEN` of them.
pub fn clean_word(raw: &str) -> String {
  raw
    .chars()
    .filter(char::is_ascii_alphabetic)
    .map(|c| c.to_ascii_uppercase())
    .take(MAX_WORD_LEN)
    .collect()
}

/// Parses one line of generator output into a pair, if it holds a usable one.
pub fn parse_line(line: &str) -> Option<WordClue> {
  let line = line.trim();
  if line.is_empty() {
    return None;
  }

  let (raw_word, clue) = split_pair(line)?;
  let word = clean_word(raw_word);
  (word.len() >= MIN_WORD_LEN && !clue.is_empty()).then(|| WordClue::new(word, clue))
}

/// Collects up to `limit` pairs from free-form generator output, one per line.
/// Lines that do not hold a usable pair are skipped.
pub fn parse_word_clues(text: &str, limit: usize) -> Vec<WordClue> {
  text.lines().filter_map(parse_line).take(limit).collect()
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

  use common::crossword::WordClue;
  use googletest::prelude::*;

  use super::{clean_word, parse_line, parse_word_clues};

  #[gtest]
  fn test_separators() {
    expect_that!(
      parse_line("ATOM|Smallest unit of an element"),
      some(eq(&WordClue::new("ATOM", "Smallest unit of an element")))
    );
    expect_that!(
      parse_line("Photosynthesis: How plants make food"),
      some(eq(&WordClue::new("PHOTOSYNTHESIS", "How plants make food")))
    );
    expect_that!(
      parse_line("enzyme - A biological catalyst"),
      some(eq(&WordClue::new("ENZYME", "A biological catalyst")))
    );
    expect_that!(
      parse_line("Nucleus \u{2014} Control centre of the cell"),
      some(eq(&WordClue::new("NUCLEUS", "Control centre of the cell")))
    );
  }

  #[gtest]
  fn test_separator_priority() {
    // The pipe wins even though a colon appears earlier in the line.
    expect_that!(
      parse_line("Ratio: part | A comparison of two quantities"),
      some(eq(&WordClue::new("RATIOPART", "A comparison of two quantities")))
    );
  }

  #[gtest]
  fn test_whitespace_fallback() {
    expect_that!(
      parse_line("  GRAVITY pulls objects together "),
      some(eq(&WordClue::new("GRAVITY", "pulls objects together")))
    );
    expect_that!(parse_line("GRAVITY"), none());
  }

  #[gtest]
  fn test_rejects_short_words_and_empty_clues() {
    expect_that!(parse_line("OX|A strong animal"), none());
    expect_that!(parse_line("MAGNET|"), none());
    expect_that!(parse_line("   "), none());
  }

  #[gtest]
  fn test_clean_word() {
    expect_that!(clean_word("**1. Mito-chondria**"), eq("MITOCHONDRIA"));
    expect_that!(
      clean_word("antidisestablishmentarianism"),
      eq("ANTIDISESTABLIS")
    );
    expect_that!(clean_word("Öl"), eq("L"));
  }

  #[gtest]
  fn test_limit() {
    let text = "ATOM|one\n\nnonsense\nCELL|two\nGENE|three\nMASS|four";
    let pairs = parse_word_clues(text, 2);
    expect_that!(
      pairs.iter().map(|pair| pair.word.as_str()).collect::<Vec<_>>(),
      container_eq(["ATOM", "CELL"])
    );
    expect_true!(parse_word_clues(text, 0).is_empty());
  }
}
