use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use yt_summarizer::{
    config::Config,
    api::routes::create_router,
    summarizer::HuggingFaceSummarizer,
    transcript::YouTubeTranscriptFetcher,
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("yt_summarizer=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = Config::load()?;
    let server_addr = config.server_addr;

    // The model must be usable before any request is accepted
    let summarizer = match HuggingFaceSummarizer::load(&config).await {
        Ok(summarizer) => summarizer,
        Err(e) => {
            error!("Error initializing the summarization model {}: {}", config.summarizer_model, e);
            return Err(e.into());
        }
    };

    let fetcher = YouTubeTranscriptFetcher::new(config.transcript_languages.clone())?;

    let app_state = AppState {
        fetcher: Arc::new(fetcher),
        summarizer: Arc::new(summarizer),
    };

    let app = create_router(app_state);

    let listener = TcpListener::bind(server_addr).await?;

    info!("Listening on {}", server_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
