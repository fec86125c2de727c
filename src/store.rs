use std::{fs, path::Path};

use common::{
  bitcode::{self, Decode, Encode},
  crossword::PuzzleRecord,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;
use util::error::{XWordError, XWordResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
  Json,
  Bitcode,
}

impl Format {
  fn for_path(path: &Path) -> Self {
    match path.extension() {
      Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
      _ => Format::Bitcode,
    }
  }
}

/// Writes `record` to `path`, as pretty JSON when the path ends in `.json` and as
/// bitcode otherwise.
pub fn save<T>(record: &T, path: &Path) -> XWordResult
where
  T: Serialize + Encode,
{
  let bytes = match Format::for_path(path) {
    Format::Json => serde_json::to_vec_pretty(record)?,
    Format::Bitcode => bitcode::encode(record),
  };
  fs::write(path, bytes)?;
  debug!(path = %path.display(), "Saved record");
  Ok(())
}

pub fn load<T>(path: &Path) -> XWordResult<T>
where
  T: DeserializeOwned + for<'a> Decode<'a>,
{
  let bytes = fs::read(path)?;
  Ok(match Format::for_path(path) {
    Format::Json => serde_json::from_slice(&bytes)?,
    Format::Bitcode => bitcode::decode(&bytes)?,
  })
}

/// Loads a puzzle and checks that its grid agrees with its placements.
pub fn load_puzzle(path: &Path) -> XWordResult<PuzzleRecord> {
  let puzzle: PuzzleRecord = load(path)?;
  puzzle.verify().map_err(|err| {
    XWordError::Parse(format!("{} is not a valid puzzle: {err}", path.display()))
  })?;
  Ok(puzzle)
}
