use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// One timed unit of caption text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("could not create transcript client: {0}")]
    Client(String),

    #[error("{0}")]
    Fetch(String),
}

/// Fetches the ordered caption segments of a video.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError>;
}

/// Returns everything after the first `=` in `link`.
///
/// Further query parameters are not stripped, so `watch?v=abc&t=10` yields
/// `abc&t=10`, and a parameter placed before `v=` is mistaken for the id.
pub fn extract_video_id(link: &str) -> Option<&str> {
    link.split_once('=').map(|(_, id)| id)
}

pub fn join_segments(segments: &[TranscriptSegment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transcript fetcher backed by `yt_transcript_rs`, trying the preferred
/// languages in order.
pub struct YouTubeTranscriptFetcher {
    api: YouTubeTranscriptApi,
    languages: Vec<String>,
}

impl YouTubeTranscriptFetcher {
    pub fn new(languages: Vec<String>) -> Result<Self, TranscriptError> {
        // No cookie file, proxy or custom HTTP client
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::Client(e.to_string()))?;

        Ok(Self { api, languages })
    }
}

#[async_trait]
impl TranscriptFetcher for YouTubeTranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();

        let transcript = self
            .api
            .fetch_transcript(video_id, &languages, false)
            .await
            .map_err(|e| TranscriptError::Fetch(e.to_string()))?;

        info!(
            "Using {} transcript (generated: {}) for {}",
            transcript.language_code, transcript.is_generated, video_id
        );

        let segments: Vec<TranscriptSegment> = transcript
            .snippets
            .into_iter()
            .map(|snippet| TranscriptSegment {
                text: snippet.text,
                start: snippet.start,
                duration: snippet.duration,
            })
            .collect();

        if segments.is_empty() {
            warn!("Transcript for {} contained no text", video_id);
        }
        Ok(segments)
    }
}
