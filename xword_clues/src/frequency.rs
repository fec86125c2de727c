use std::collections::HashMap;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest token the frequency fallback will offer as a word.
pub const MIN_FALLBACK_TOKEN_LEN: usize = 4;

#[allow(clippy::expect_used)]
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(&format!(r"\b[A-Za-z]{{{MIN_FALLBACK_TOKEN_LEN},}}\b"))
    .expect("token pattern is a valid regex")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TermCount {
  count: u32,
  first_seen: usize,
}

/// Uppercased alphabetic tokens of a text, counted.
#[derive(Clone, Debug, Default)]
pub struct TermFrequency {
  terms: HashMap<String, TermCount>,
}

impl TermFrequency {
  pub fn from_text(text: &str) -> Self {
    let terms = TOKEN_RE.find_iter(text).enumerate().fold(
      HashMap::<String, TermCount>::new(),
      |mut terms, (idx, token)| {
        terms
          .entry(token.as_str().to_ascii_uppercase())
          .or_insert(TermCount { count: 0, first_seen: idx })
          .count += 1;
        terms
      },
    );
    Self { terms }
  }

  pub fn count(&self, term: &str) -> u32 {
    self.terms.get(term).map_or(0, |term| term.count)
  }

  pub fn len(&self) -> usize {
    self.terms.len()
  }

  pub fn is_empty(&self) -> bool {
    self.terms.is_empty()
  }

  /// The `n` most frequent terms, most frequent first. Equally frequent terms keep
  /// the order in which they first appear in the text.
  pub fn top_n_words(&self, n: usize) -> Vec<&str> {
    self
      .terms
      .iter()
      .sorted_by_key(|&(_, term)| (!term.count, term.first_seen))
      .map(|(word, _)| word.as_str())
      .take(n)
      .collect()
  }
}
