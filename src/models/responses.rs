use serde::{Deserialize, Serialize};
use crate::models::domain::{RankedMentor, Violation};

/// Response for the find mentors endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMentorsResponse {
    pub mentors: Vec<RankedMentor>,
    pub total_candidates: usize,
}

/// Response for a moderated submission (post or comment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub accepted: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
}

/// Response for the violation log endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationsResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub violations: Vec<Violation>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
