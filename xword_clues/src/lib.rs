#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod frequency;
pub mod parse;
pub mod source;

pub use source::WordClueSource;
