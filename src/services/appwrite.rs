use crate::models::{AlumniProfile, StudentProfile};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with Appwrite
#[derive(Debug, Error)]
pub enum AppwriteError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid API key or token")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Appwrite API client
///
/// Handles all communication with the Appwrite backend including:
/// - Fetching student and alumni profile documents
/// - Listing mentorship-available alumni
/// - Persisting accepted posts and comments
pub struct AppwriteClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    client: Client,
    collections: AppwriteCollections,
}

/// Collection IDs in Appwrite
#[derive(Debug, Clone)]
pub struct AppwriteCollections {
    pub student_profiles: String,
    pub alumni_profiles: String,
    pub posts: String,
    pub comments: String,
}

impl AppwriteClient {
    /// Create a new Appwrite client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        collections: AppwriteCollections,
    ) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            project_id,
            database_id,
            client,
            collections,
        }
    }

    /// Fetch a student profile by user ID
    ///
    /// Absence of the document is reported as `NotFound`, which callers map
    /// to the user-correctable "profile incomplete" condition.
    pub async fn get_student_profile(
        &self,
        user_id: &str,
    ) -> Result<StudentProfile, AppwriteError> {
        // Build Appwrite query format: JSON array of query strings
        let query_json = format!(r#"["userId={}"]"#, user_id);
        let encoded_query = urlencoding::encode(&query_json);

        let url = format!(
            "{}/databases/{}/collections/{}/documents?query={}",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collections.student_profiles,
            encoded_query
        );

        tracing::debug!("Fetching student profile for user: {}", user_id);

        let response = self
            .client
            .get(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppwriteError::ApiError(format!(
                "Failed to fetch student profile: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| AppwriteError::InvalidResponse("Missing documents array".into()))?;

        let doc = documents
            .first()
            .ok_or_else(|| AppwriteError::NotFound(format!("Profile not found for user {}", user_id)))?;

        let data = doc.get("data").unwrap_or(doc);

        serde_json::from_value(data.clone())
            .map_err(|e| AppwriteError::InvalidResponse(format!("Failed to parse student profile: {}", e)))
    }

    /// List alumni profiles flagged as mentorship-available
    ///
    /// Documents that fail to parse are skipped rather than failing the
    /// whole listing, so partial documents degrade to fewer candidates.
    pub async fn list_available_alumni(&self) -> Result<Vec<AlumniProfile>, AppwriteError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            self.collections.alumni_profiles
        );

        let queries = vec![
            "equal(\"mentorshipAvailability\", true)".to_string(),
            "equal(\"isActive\", true)".to_string(),
        ];

        let queries_json = serde_json::to_string(&queries)
            .map_err(|e| AppwriteError::InvalidResponse(e.to_string()))?;
        let encoded_queries = urlencoding::encode(&queries_json);

        let full_url = format!("{}?query={}", url, encoded_queries);

        let response = self
            .client
            .get(&full_url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppwriteError::ApiError(format!(
                "Failed to list alumni: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let total = json
            .get("total")
            .and_then(|t| t.as_u64())
            .unwrap_or(0);

        let documents = json
            .get("documents")
            .and_then(|d| d.as_array())
            .ok_or_else(|| AppwriteError::InvalidResponse("Missing documents array".into()))?;

        let alumni: Vec<AlumniProfile> = documents
            .iter()
            .filter_map(|doc| {
                let data = doc.get("data").unwrap_or(doc);
                serde_json::from_value(data.clone()).ok()
            })
            .collect();

        tracing::debug!("Listed {} available alumni (total: {})", alumni.len(), total);

        Ok(alumni)
    }

    /// Persist an accepted post document, returning its document ID
    pub async fn create_post(
        &self,
        user_id: &str,
        title: &str,
        content: &str,
    ) -> Result<String, AppwriteError> {
        let document_id = uuid::Uuid::new_v4().to_string();
        let payload = serde_json::json!({
            "$id": document_id,
            "userId": user_id,
            "title": title,
            "content": content,
            "createdAt": chrono::Utc::now(),
        });

        self.create_document(&self.collections.posts, &payload).await?;

        tracing::debug!("Created post {} for user {}", document_id, user_id);

        Ok(document_id)
    }

    /// Persist an accepted comment document, returning its document ID
    pub async fn create_comment(
        &self,
        post_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<String, AppwriteError> {
        let document_id = uuid::Uuid::new_v4().to_string();
        let payload = serde_json::json!({
            "$id": document_id,
            "postId": post_id,
            "userId": user_id,
            "content": content,
            "createdAt": chrono::Utc::now(),
        });

        self.create_document(&self.collections.comments, &payload).await?;

        tracing::debug!("Created comment {} on post {} for user {}", document_id, post_id, user_id);

        Ok(document_id)
    }

    async fn create_document(
        &self,
        collection_id: &str,
        payload: &Value,
    ) -> Result<(), AppwriteError> {
        let url = format!(
            "{}/databases/{}/collections/{}/documents",
            self.base_url.trim_end_matches('/'),
            self.database_id,
            collection_id
        );

        let response = self
            .client
            .post(&url)
            .header("X-Appwrite-Key", &self.api_key)
            .header("X-Appwrite-Project", &self.project_id)
            .json(payload)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(()),
            reqwest::StatusCode::UNAUTHORIZED => Err(AppwriteError::Unauthorized),
            status => Err(AppwriteError::ApiError(format!(
                "Failed to create document: {}",
                status
            ))),
        }
    }
}
