//! Application Configuration
//!
//! Static settings baked into the page. A host page may override them by
//! handing a JSON object to `AppConfig::from_json`; omitted fields keep their
//! defaults.

use serde::Deserialize;

/// Candidate item-store base URLs, in probe priority order
pub const DEFAULT_ENDPOINTS: &[&str] = &[
    "https://kbtu-ldoc.uc.r.appspot.com",
    "http://136.113.60.130",
    "http://localhost:8080",
];

/// localStorage key holding the client identifier
pub const CLIENT_ID_KEY: &str = "todo_client_id";

pub const MAX_TEXT_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoints: Vec<String>,
    pub storage_key: String,
    pub max_text_len: usize,
    /// How long a success banner stays visible
    pub success_banner_ms: u32,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            storage_key: CLIENT_ID_KEY.to_string(),
            max_text_len: MAX_TEXT_LEN,
            success_banner_ms: 3000,
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
