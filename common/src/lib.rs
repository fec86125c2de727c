pub mod crossword;
pub mod grading;

pub use bitcode;
