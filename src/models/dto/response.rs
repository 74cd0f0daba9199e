use serde::{Deserialize, Serialize};

use crate::models::domain::{LessonProgressRecord, UserProfile};

/// The backend wraps most payloads in a `{ "data": ... }` envelope.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub data: UserProfile,
}

/// Profile payload: the user document with their per-lesson progress.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserProfile,
    #[serde(default)]
    pub progress: Vec<LessonProgressRecord>,
}

/// XP award returned by the backend for one completion record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionResponse {
    pub xp_gained: i64,
    pub level: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_xp: Option<i64>,
}
