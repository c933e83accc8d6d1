pub mod api;
pub mod chunking;
pub mod config;
pub mod error;
pub mod summarizer;
pub mod transcript;

use std::sync::Arc;
use summarizer::Summarizer;
use transcript::TranscriptFetcher;

/// Application state that will be shared across handlers. Both collaborators
/// are built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn TranscriptFetcher>,
    pub summarizer: Arc<dyn Summarizer>,
}
