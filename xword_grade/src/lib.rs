#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod answers;
pub mod crossword;

pub use crossword::{grade_puzzle, grade_submission};
