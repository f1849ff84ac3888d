use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to find mentor recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMentorsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[serde(default = "default_limit")]
    #[serde(alias = "limit", rename = "limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    10
}

/// Request to submit a new post (title + body go through moderation)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitPostRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub content: String,
}

/// Request to submit a comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitCommentRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub content: String,
}
