use axum::{
    routing::{get, post},
    Router,
    extract::{rejection::JsonRejection, Json, State},
    response::{IntoResponse, Response},
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::error::{Result, AppError};
use crate::api::models::{SummarizeRequest, SummarizeResponse};
use crate::api::response;
use crate::chunking::{chunk_text, CHUNK_SIZE};
use crate::summarizer::SummaryBounds;
use crate::transcript::{extract_video_id, join_segments};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/test", post(summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn index() -> &'static str {
    "Hello, the transcript summarizer is running!"
}

async fn summarize_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SummarizeRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return AppError::invalid_link().into_response();
        }
    };

    let start_time = std::time::Instant::now();
    let result = process_summarize_request(&state, &req).await;
    info!("Request processing took: {:?}", start_time.elapsed());

    match result {
        Ok(response_data) => response::success(response_data).into_response(),
        Err(err) => {
            match &err {
                AppError::InvalidInput(_) => warn!("Invalid input: {:?}", req.ytlink),
                other => error!("{}", other),
            }
            err.into_response()
        }
    }
}

/// Runs validate → fetch → chunk → summarize for one request. Any failing
/// stage ends the request; summaries gathered so far are dropped.
pub async fn process_summarize_request(
    state: &AppState,
    req: &SummarizeRequest,
) -> Result<SummarizeResponse> {
    let link = req
        .ytlink
        .as_deref()
        .filter(|link| !link.is_empty())
        .ok_or_else(AppError::invalid_link)?;
    let video_id = extract_video_id(link).ok_or_else(AppError::invalid_link)?;

    info!("Fetching transcript for video id: {}", video_id);
    let segments = state.fetcher.fetch(video_id).await?;
    debug!("Fetched {} transcript segments", segments.len());

    let transcript = join_segments(&segments);
    let chunks = chunk_text(&transcript, CHUNK_SIZE);
    info!(
        "Transcript is {} chars, summarizing {} chunk(s)",
        transcript.chars().count(),
        chunks.len()
    );

    let bounds = SummaryBounds::default();
    let mut summarized_text = Vec::with_capacity(chunks.len());

    for (index, chunk) in chunks.iter().enumerate() {
        let chunk_start = std::time::Instant::now();
        let summary = state.summarizer.summarize(chunk, bounds).await?;
        debug!("Chunk {} summarized in {:?}", index, chunk_start.elapsed());
        summarized_text.push(summary);
    }

    Ok(SummarizeResponse { summarized_text })
}
