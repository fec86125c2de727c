use std::collections::HashSet;

use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use textgen::TextGenerator;
use tracing::warn;
use util::error::XWordResult;

#[allow(clippy::expect_used)]
static WORD_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"));

fn short_answer_prompt(model_answer: &str, student_answer: &str, max_marks: f64) -> String {
  format!(
    "You are a grader. Given a model answer and a student answer, return EXACTLY one JSON \
     object:\n\
     {{\"score\": number_between_0_and_{max_marks}}}\n\
     \n\
     Model answer:\n\
     {model_answer}\n\
     \n\
     Student answer:\n\
     {student_answer}\n"
  )
}

fn multiple_choice_prompt(question: &str, options: &[impl AsRef<str>], choice: &str) -> String {
  format!(
    "You are a strict grader. Given a question, its options, and a student's chosen option, \
     answer only the single word CORRECT or INCORRECT.\n\
     \n\
     Question:\n\
     {question}\n\
     \n\
     Options:\n\
     {}\n\
     \n\
     Student answer:\n\
     {choice}\n",
    options.iter().map(|option| option.as_ref()).join("\n")
  )
}

fn strip_code_fence(raw: &str) -> &str {
  let trimmed = raw.trim();
  match trimmed.strip_prefix("```") {
    Some(rest) => rest
      .split_once('\n')
      .map_or(rest, |(_, body)| body)
      .trim_end()
      .trim_end_matches("```")
      .trim(),
    None => trimmed,
  }
}

/// Reads `{"score": n}` from a grader reply. A JSON object without a score counts
/// as 0; anything else is unreadable.
fn parse_score(raw: &str, max_marks: f64) -> Option<f64> {
  let value: Value = serde_json::from_str(strip_code_fence(raw)).ok()?;
  let score = match value.as_object()?.get("score") {
    None => 0.,
    Some(Value::Number(number)) => number.as_f64()?,
    Some(Value::String(text)) => text.trim().parse::<f64>().ok()?,
    Some(_) => return None,
  };
  score
    .is_finite()
    .then(|| score.min(max_marks).max(0.))
}

/// Share of the model answer's distinct words that appear in the student answer,
/// scaled to `max_marks` and rounded to three decimals.
pub fn keyword_overlap_score(model_answer: &str, student_answer: &str, max_marks: f64) -> f64 {
  let model_answer = model_answer.to_lowercase();
  let key_terms: HashSet<&str> = WORD_RE
    .find_iter(&model_answer)
    .map(|term| term.as_str())
    .collect();
  if key_terms.is_empty() {
    return 0.;
  }

  let student_answer = student_answer.to_lowercase();
  let matches = key_terms
    .iter()
    .filter(|term| student_answer.contains(*term))
    .count();
  let score = matches as f64 / key_terms.len() as f64 * max_marks;
  (score * 1000.).round() / 1000.
}

/// Asks the generator to mark a short answer out of `max_marks`. Falls back to
/// keyword overlap with the model answer when the generator fails or its reply
/// holds no readable score.
pub fn grade_short_answer<G: TextGenerator>(
  generator: &G,
  model_answer: &str,
  student_answer: &str,
  max_marks: f64,
) -> f64 {
  let reply = generator.generate(&short_answer_prompt(model_answer, student_answer, max_marks));
  match reply.map(|reply| parse_score(&reply, max_marks)) {
    Ok(Some(score)) => score,
    Ok(None) => {
      warn!("Unreadable score from grader, using keyword overlap");
      keyword_overlap_score(model_answer, student_answer, max_marks)
    }
    Err(err) => {
      warn!("Short answer grading failed, using keyword overlap: {err}");
      keyword_overlap_score(model_answer, student_answer, max_marks)
    }
  }
}

fn verdict_is_correct(reply: &str) -> bool {
  let reply = reply.to_uppercase();
  reply.contains("CORRECT") && !reply.contains("INCORRECT")
}

/// 1 if the generator judges `choice` to be the right option, else 0.
pub fn grade_multiple_choice<G: TextGenerator>(
  generator: &G,
  question: &str,
  options: &[impl AsRef<str>],
  choice: &str,
) -> XWordResult<f64> {
  let reply = generator.generate(&multiple_choice_prompt(question, options, choice))?;
  Ok(if verdict_is_correct(&reply) { 1. } else { 0. })
}
