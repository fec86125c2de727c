#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod args;
mod store;

use std::{fs, path::Path, process::ExitCode};

use args::{Args, Command};
use clap::Parser;
use common::grading::GradingRecord;
use rand::{rngs::StdRng, SeedableRng};
use textgen::{
  gemini::{GeminiClient, GeminiEnv},
  Offline, TextGenerator,
};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{fmt, prelude::*};
use util::error::XWordResult;
use uuid::Uuid;
use xword_gen::{config::PuzzleConfig, puzzle::PuzzleBuilder};
use xword_grade::{answers::grade_short_answer, grade_puzzle};

fn init_logging(verbose: bool) {
  let fmt = fmt::layer()
    .without_time()
    .with_file(false)
    .with_line_number(false);
  let filter = if verbose {
    LevelFilter::DEBUG
  } else {
    LevelFilter::INFO
  };
  tracing_subscriber::registry().with(fmt).with(filter).init();
}

fn text_generator(offline: bool) -> XWordResult<Box<dyn TextGenerator>> {
  if offline {
    return Ok(Box::new(Offline));
  }

  match GeminiEnv::from_env() {
    Some(env) => {
      info!(model = env.model(), "Using Gemini for text generation");
      Ok(Box::new(GeminiClient::new(env)?))
    }
    None => {
      warn!("GEMINI_API_KEY is not set, working offline");
      Ok(Box::new(Offline))
    }
  }
}

fn rng(seed: Option<u64>) -> StdRng {
  match seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_os_rng(),
  }
}

/// One row of the student grid per line. Trailing whitespace is dropped; anything
/// else, including interior blanks, stays a cell.
fn read_submission(path: &Path) -> XWordResult<Vec<String>> {
  Ok(
    fs::read_to_string(path)?
      .lines()
      .map(|line| line.trim_end().to_owned())
      .collect(),
  )
}

fn run(command: Command) -> XWordResult {
  match command {
    Command::Build { text, out, words, size, attempts, seed, offline } => {
      let config = PuzzleConfig { num_words: words, grid_size: size, attempts };
      let builder = PuzzleBuilder::new(config, text_generator(offline)?)?;
      let document = fs::read_to_string(&text)?;
      let puzzle = builder.build(&document, &mut rng(seed));
      store::save(&puzzle, &out)?;
      println!("{puzzle}");
      println!("Saved to {}", out.display());
    }
    Command::Show { puzzle } => {
      println!("{}", store::load_puzzle(&puzzle)?);
    }
    Command::Grade { puzzle, submission, assignment_id, submission_id, out } => {
      let puzzle = store::load_puzzle(&puzzle)?;
      let result = grade_puzzle(&puzzle, &read_submission(&submission)?);
      info!("{result}");
      let record = GradingRecord {
        result_id: Uuid::new_v4().to_string(),
        assignment_id,
        submission_id,
        result,
      };
      println!("{}", serde_json::to_string_pretty(&record)?);
      if let Some(out) = out {
        store::save(&record, &out)?;
      }
    }
    Command::GradeAnswer { model_answer, student_answer, max_marks, offline } => {
      let generator = text_generator(offline)?;
      let score = grade_short_answer(&generator, &model_answer, &student_answer, max_marks);
      println!("{score}/{max_marks}");
    }
  }
  Ok(())
}

fn main() -> ExitCode {
  dotenvy::dotenv().ok();
  let args = Args::parse();
  init_logging(args.verbose);

  if let Err(err) = run(args.command) {
    println!("Error: {err}");
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  }
}
