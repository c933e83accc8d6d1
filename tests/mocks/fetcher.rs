use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_summarizer::transcript::{TranscriptError, TranscriptFetcher, TranscriptSegment};

#[derive(Clone)]
pub struct MockFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockFetcher {
    pub fn new(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment {
                text: text.to_string(),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect();

        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptFetcher for MockFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(TranscriptError::Fetch(msg.clone()));
        }
        Ok(self.segments.clone())
    }
}
