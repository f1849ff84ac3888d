use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{FindMentorsRequest, FindMentorsResponse, HealthResponse, ErrorResponse, StudentProfile};
use crate::services::{AppwriteClient, AppwriteError, CacheManager, CacheKey, PostgresClient, SentimentAnalyzer};
use crate::core::{MentorMatcher, ModerationGate};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub appwrite: Arc<AppwriteClient>,
    pub cache: Arc<CacheManager>,
    pub postgres: Arc<PostgresClient>,
    pub matcher: MentorMatcher,
    pub gate: ModerationGate,
    pub analyzer: SentimentAnalyzer,
    pub max_results: usize,
}

/// Configure mentor matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors/find", web::post().to(find_mentors));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    // Check PostgreSQL health
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find mentors endpoint
///
/// POST /api/v1/mentors/find
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "limit": 10
/// }
/// ```
async fn find_mentors(
    state: web::Data<AppState>,
    req: web::Json<FindMentorsRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_mentors request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = &req.user_id;
    let limit = (req.limit as usize).min(state.max_results);

    tracing::info!("Finding mentors for student: {}, limit: {}", user_id, limit);

    // Read the student profile through the cache
    let cache_key = CacheKey::student_profile(user_id);
    let student: StudentProfile = match state.cache.get(&cache_key).await {
        Ok(profile) => profile,
        Err(_) => {
            let profile = match state.appwrite.get_student_profile(user_id).await {
                Ok(profile) => profile,
                Err(AppwriteError::NotFound(_)) => {
                    // Distinct, user-correctable condition: the student has no
                    // profile yet, so there is nothing to score against
                    tracing::info!("No profile on record for student {}", user_id);
                    return HttpResponse::NotFound().json(ErrorResponse {
                        error: "profile_incomplete".to_string(),
                        message: "Complete your profile to get mentor recommendations".to_string(),
                        status_code: 404,
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to fetch student profile for {}: {}", user_id, e);
                    return HttpResponse::InternalServerError().json(ErrorResponse {
                        error: "Failed to fetch student profile".to_string(),
                        message: e.to_string(),
                        status_code: 500,
                    });
                }
            };

            if let Err(e) = state.cache.set(&cache_key, &profile).await {
                tracing::warn!("Failed to cache student profile for {}: {}", user_id, e);
            }

            profile
        }
    };

    // Fetch mentorship-available alumni
    // Note: rankings are not cached so availability changes show up immediately
    let candidates = match state.appwrite.list_available_alumni().await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to list alumni candidates for {}: {}", user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list alumni candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("Found {} alumni candidates for {}", candidates.len(), user_id);

    // Run the ranking pass
    let result = state.matcher.rank_mentors(&student, candidates, limit);

    let response = FindMentorsResponse {
        mentors: result.mentors,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} mentors for student {} (from {} candidates)",
        response.mentors.len(),
        user_id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
