//! Lead extraction — turns raw pasted text into structured lead candidates via
//! one JSON-mode LLM call. Pure request/response; no local intelligence beyond
//! payload shaping.

pub mod handlers;
pub mod prompts;

use serde::Deserialize;

fn unknown() -> String {
    "Unknown".to_string()
}

/// One lead candidate as returned by the extraction model, before an id and
/// status are assigned. Only `context` is required; the extractor is told to
/// fill "Unknown" for missing identity fields, but we default them here too in
/// case it omits keys entirely.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedLead {
    #[serde(default = "unknown")]
    pub name: String,
    #[serde(default = "unknown")]
    pub company: String,
    #[serde(default = "unknown")]
    pub role: String,
    #[serde(default = "unknown")]
    pub industry: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub post_date: Option<String>,
    #[serde(default)]
    pub post_link: Option<String>,
    #[serde(default)]
    pub original_post_text: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    /// Free-form label; coerced to the closed `Priority` enum at ingestion.
    #[serde(default)]
    pub priority: Option<String>,
}
