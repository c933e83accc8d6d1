use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

use crate::config::Config;

const WARMUP_TEXT: &str = "The summarization service is starting up. This request checks that the \
    model endpoint is reachable and able to produce a summary before any traffic is accepted.";

/// Length limits and decoding mode passed to the model for every chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryBounds {
    pub max_length: u32,
    pub min_length: u32,
    pub do_sample: bool,
}

impl Default for SummaryBounds {
    fn default() -> Self {
        Self {
            max_length: 130,
            min_length: 30,
            do_sample: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("model returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("invalid response format from model: {0}")]
    InvalidResponse(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Produces one summary for a span of text.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizerError>;
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: SummaryBounds,
    options: InferenceOptions,
}

/// Summarization pipeline served by a Hugging Face inference endpoint.
pub struct HuggingFaceSummarizer {
    client: Client,
    model_url: String,
    api_token: Option<String>,
}

impl HuggingFaceSummarizer {
    pub fn new(config: &Config) -> Result<Self, SummarizerError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            model_url: format!(
                "{}/{}",
                config.summarizer_endpoint.trim_end_matches('/'),
                config.summarizer_model
            ),
            api_token: config.hf_api_token.clone(),
        })
    }

    /// Builds the handle and, unless disabled, runs one summarization so a
    /// model that cannot be reached fails startup instead of the first request.
    pub async fn load(config: &Config) -> Result<Self, SummarizerError> {
        let summarizer = Self::new(config)?;

        if config.summarizer_warmup {
            info!("Warming up summarization model {}", config.summarizer_model);
            summarizer.summarize(WARMUP_TEXT, SummaryBounds::default()).await?;
        }

        info!("Summarization model {} ready", config.summarizer_model);
        Ok(summarizer)
    }
}

#[async_trait]
impl Summarizer for HuggingFaceSummarizer {
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizerError> {
        let body = InferenceRequest {
            inputs: text,
            parameters: bounds,
            options: InferenceOptions { wait_for_model: true },
        };

        let mut request = self.client.post(&self.model_url).json(&body);
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let res = request.send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(SummarizerError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let json: serde_json::Value = serde_json::from_str(&body)
            .map_err(|_| SummarizerError::InvalidResponse(body.clone()))?;
        parse_summary(&json)
    }
}

/// Error text from a failed call: the `error` field of a JSON body, or the
/// raw body when a gateway answered with something else.
fn error_message(body: &str) -> String {
    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(_) => return body.trim().to_string(),
    };

    match &json["error"] {
        serde_json::Value::String(message) => message.clone(),
        serde_json::Value::Array(messages) => messages
            .iter()
            .filter_map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join("; "),
        _ => json.to_string(),
    }
}

/// Reads `[{"summary_text": "..."}]`, the summarization pipeline output.
fn parse_summary(json: &serde_json::Value) -> Result<String, SummarizerError> {
    json[0]["summary_text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| SummarizerError::InvalidResponse(json.to_string()))
}
