use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    /// Missing or `null` is treated the same as an empty link.
    #[serde(default)]
    pub ytlink: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summarized_text: Vec<String>,
}
