use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use util::error::{XWordError, XWordResult};

use crate::TextGenerator;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for the Gemini `generateContent` endpoint.
#[derive(Clone, Debug)]
pub struct GeminiEnv {
  api_key: String,
  model: String,
  endpoint: String,
  timeout: Duration,
}

impl GeminiEnv {
  /// Reads `GEMINI_API_KEY`, `GEMINI_MODEL`, `GEMINI_ENDPOINT` and
  /// `GEMINI_TIMEOUT_SECS`. Returns `None` when no key is set.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("GEMINI_API_KEY").ok()?.trim().to_owned();
    if api_key.is_empty() {
      return None;
    }

    let model = non_empty_var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned());
    let endpoint =
      non_empty_var("GEMINI_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
    let timeout = std::env::var("GEMINI_TIMEOUT_SECS")
      .ok()
      .and_then(|value| value.parse::<u64>().ok())
      .map(Duration::from_secs)
      .unwrap_or_else(|| Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    Some(Self { api_key, model, endpoint, timeout })
  }

  pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
    Self {
      api_key: api_key.into(),
      model: model.into(),
      endpoint: DEFAULT_ENDPOINT.to_owned(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }

  pub fn model(&self) -> &str {
    &self.model
  }

  fn url(&self) -> String {
    format!(
      "{}/models/{}:generateContent",
      self.endpoint.trim_end_matches('/'),
      self.model
    )
  }
}

fn non_empty_var(name: &str) -> Option<String> {
  std::env::var(name)
    .ok()
    .map(|value| value.trim().to_owned())
    .filter(|value| !value.is_empty())
}

#[derive(Deserialize, Debug, Default)]
struct Part {
  #[serde(default)]
  text: String,
}

#[derive(Deserialize, Debug, Default)]
struct Content {
  #[serde(default)]
  parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
struct GenerateRequest<'a> {
  contents: [RequestContent<'a>; 1],
}

#[derive(Serialize, Debug)]
struct RequestContent<'a> {
  parts: [RequestPart<'a>; 1],
}

#[derive(Serialize, Debug)]
struct RequestPart<'a> {
  text: &'a str,
}

#[derive(Deserialize, Debug, Default)]
struct Candidate {
  #[serde(default)]
  content: Content,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
  #[serde(default)]
  candidates: Vec<Candidate>,
}

impl GenerateResponse {
  /// Concatenated text of the first candidate, or empty if there is none.
  fn text(&self) -> String {
    self
      .candidates
      .first()
      .map(|candidate| {
        candidate
          .content
          .parts
          .iter()
          .map(|part| part.text.as_str())
          .collect()
      })
      .unwrap_or_default()
  }
}

pub struct GeminiClient {
  env: GeminiEnv,
  http_client: Client,
}

impl GeminiClient {
  pub fn new(env: GeminiEnv) -> XWordResult<Self> {
    let http_client = Client::builder()
      .timeout(env.timeout)
      .build()
      .map_err(|err| XWordError::Config(format!("Failed to construct HTTP client: {err}")))?;
    Ok(Self { env, http_client })
  }

  pub fn from_env() -> XWordResult<Self> {
    let env = GeminiEnv::from_env()
      .ok_or_else(|| XWordError::Config("GEMINI_API_KEY is not set".to_owned()))?;
    Self::new(env)
  }
}

impl TextGenerator for GeminiClient {
  fn generate(&self, prompt: &str) -> XWordResult<String> {
    let request = GenerateRequest {
      contents: [RequestContent { parts: [RequestPart { text: prompt }] }],
    };

    debug!(model = self.env.model(), prompt_len = prompt.len(), "Requesting generation");
    let response = self
      .http_client
      .post(self.env.url())
      .header("x-goog-api-key", &self.env.api_key)
      .json(&request)
      .send()?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().unwrap_or_default();
      return Err(XWordError::Generation(format!("Gemini returned {status}: {body}")).into());
    }

    Ok(response.json::<GenerateResponse>()?.text())
  }
}
