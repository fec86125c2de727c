use std::path::PathBuf;

use clap::{Parser, Subcommand};
use xword_gen::config::{DEFAULT_GRID_SIZE, DEFAULT_NUM_WORDS, DEFAULT_PLACEMENT_ATTEMPTS};

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Command {
  /// Builds a crossword from the terms of a text document.
  Build {
    text: PathBuf,

    /// Where to store the puzzle. Paths ending in `.json` get JSON, anything else bitcode.
    #[arg(long)]
    out: PathBuf,

    #[arg(long, default_value_t = DEFAULT_NUM_WORDS)]
    words: usize,

    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: u32,

    #[arg(long, default_value_t = DEFAULT_PLACEMENT_ATTEMPTS)]
    attempts: u32,

    #[arg(long)]
    seed: Option<u64>,

    /// Skip the generation service and take words from term frequency.
    #[arg(long)]
    offline: bool,
  },

  /// Prints a stored puzzle and its clues.
  Show { puzzle: PathBuf },

  /// Scores a student grid, one row per line, against a stored puzzle.
  Grade {
    puzzle: PathBuf,
    submission: PathBuf,

    #[arg(long, default_value = "local")]
    assignment_id: String,

    #[arg(long)]
    submission_id: Option<String>,

    #[arg(long)]
    out: Option<PathBuf>,
  },

  /// Marks a short answer against a model answer.
  GradeAnswer {
    #[arg(long)]
    model_answer: String,

    #[arg(long)]
    student_answer: String,

    #[arg(long, default_value_t = 1.)]
    max_marks: f64,

    #[arg(long)]
    offline: bool,
  },
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
  #[arg(long, global = true)]
  pub verbose: bool,

  #[command(subcommand)]
  pub command: Command,
}
