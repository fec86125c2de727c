#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod board;
pub mod config;
pub mod fill;
pub mod placer;
pub mod puzzle;
