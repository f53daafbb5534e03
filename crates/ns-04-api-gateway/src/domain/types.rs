//! Request and response bodies.

use ns_02_admission::StoreStats;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/secrets`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub submitted_by: Option<String>,
}

/// Error body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Body of `GET /` and `GET /api/riddle`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RiddleResponse {
    pub riddle: String,
    pub rules: Vec<String>,
    pub hint: String,
    pub endpoint: String,
    pub stats: StoreStats,
}

impl RiddleResponse {
    pub fn new(stats: StoreStats) -> Self {
        Self {
            riddle: RIDDLE.to_string(),
            rules: RULES.iter().map(|r| r.to_string()).collect(),
            hint: HINT.to_string(),
            endpoint: r#"POST /api/secrets {"value": "...", "submitted_by": "..."}"#.to_string(),
            stats,
        }
    }
}

pub const SERVICE_NAME: &str = "nexus-secrets";

/// Body of `GET /api/exposed` when nothing has been exposed.
pub const EMPTY_WALL_MESSAGE: &str = "No exposed secrets yet. Submit one to begin.";

const RIDDLE: &str = "A secret told once stays a secret. \
    Told again, by anyone, it is everyone's. \
    But beware: some words are the same word wearing a different face.";

const RULES: &[&str] = &[
    "Submit a secret. If no one has said it before, it stays private.",
    "If someone later says something equivalent, your secret is exposed.",
    "Some secrets betray themselves the moment they are spoken.",
    "Equivalence is... flexible. Discovering how is the game.",
];

const HINT: &str = "How many ways can you say the same thing?";
