#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod gemini;

use util::error::{XWordError, XWordResult};

/// A prompt-in, text-out generation service. Output has no guaranteed format;
/// callers parse it tolerantly.
pub trait TextGenerator {
  fn generate(&self, prompt: &str) -> XWordResult<String>;
}

impl<G> TextGenerator for &G
where
  G: TextGenerator + ?Sized,
{
  fn generate(&self, prompt: &str) -> XWordResult<String> {
    (**self).generate(prompt)
  }
}

impl<G> TextGenerator for Box<G>
where
  G: TextGenerator + ?Sized,
{
  fn generate(&self, prompt: &str) -> XWordResult<String> {
    (**self).generate(prompt)
  }
}

/// Stands in for the generation service when none is configured. Every call
/// fails, which sends callers down their local fallback paths.
#[derive(Clone, Copy, Debug, Default)]
pub struct Offline;

impl TextGenerator for Offline {
  fn generate(&self, _prompt: &str) -> XWordResult<String> {
    Err(XWordError::Generation("No text generation service configured".to_owned()).into())
  }
}
