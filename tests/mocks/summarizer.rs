use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_summarizer::summarizer::{Summarizer, SummarizerError, SummaryBounds};

/// Answers `summary of chunk N`, optionally failing on one call.
#[derive(Clone)]
pub struct MockSummarizer {
    pub calls: Arc<Mutex<Vec<(String, SummaryBounds)>>>,
    pub fail_on_call: Option<usize>,
}

impl MockSummarizer {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on_call: None,
        }
    }

    pub fn failing_on(call: usize) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_on_call: Some(call),
        }
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, text: &str, bounds: SummaryBounds) -> Result<String, SummarizerError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((text.to_string(), bounds));
            calls.len() - 1
        };

        if self.fail_on_call == Some(index) {
            return Err(SummarizerError::Api {
                status: 503,
                message: "Model is overloaded".to_string(),
            });
        }
        Ok(format!("summary of chunk {index}"))
    }
}
