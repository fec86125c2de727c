use util::error::{XWordError, XWordResult};

/// Tries per word for each placement strategy before giving up on it.
pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 200;
pub const DEFAULT_GRID_SIZE: u32 = 15;
pub const MAX_GRID_SIZE: u32 = 100;
pub const DEFAULT_NUM_WORDS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleConfig {
  pub num_words: usize,
  pub grid_size: u32,
  pub attempts: u32,
}

impl PuzzleConfig {
  pub fn validate(&self) -> XWordResult {
    if self.grid_size == 0 {
      return Err(XWordError::Config("Grid size must be at least 1".to_owned()).into());
    }
    if self.grid_size > MAX_GRID_SIZE {
      return Err(
        XWordError::Config(format!(
          "Grid size {} exceeds the maximum of {MAX_GRID_SIZE}",
          self.grid_size
        ))
        .into(),
      );
    }
    Ok(())
  }
}

impl Default for PuzzleConfig {
  fn default() -> Self {
    Self {
      num_words: DEFAULT_NUM_WORDS,
      grid_size: DEFAULT_GRID_SIZE,
      attempts: DEFAULT_PLACEMENT_ATTEMPTS,
    }
  }
}
