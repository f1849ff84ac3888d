use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{SubmitPostRequest, SubmitCommentRequest, SubmissionResponse, ViolationsResponse, ErrorResponse};
use crate::core::ModerationGate;
use crate::services::PostgresClient;
use std::sync::Arc;

use super::mentors::AppState;

/// Configure moderated submission routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/posts", web::post().to(submit_post))
        .route("/posts/{postId}/comments", web::post().to(submit_comment))
        .route("/violations", web::get().to(get_violations));
}

/// Label a rejected post the way it is stored in the violation log
fn labeled_post(title: &str, content: &str) -> String {
    format!("Title: {}, Content: {}", title, content)
}

/// Label a rejected comment the way it is stored in the violation log
fn labeled_comment(content: &str) -> String {
    format!("Comment: {}", content)
}

/// Append a violation in the background
///
/// The rejection response is already decided when this runs; a failed
/// append is logged and never surfaces to the caller.
fn record_violation_async(postgres: Arc<PostgresClient>, user_id: String, content: String) {
    tokio::spawn(async move {
        if let Err(e) = postgres.record_violation(&user_id, &content).await {
            tracing::warn!("Failed to record violation for {}: {}", user_id, e);
        }
    });
}

/// Submit a post endpoint
///
/// POST /api/v1/posts
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "title": "string",
///   "content": "string"
/// }
/// ```
///
/// The title and body run through the moderation gate before anything is
/// persisted. A blocked submission returns 422 with the rejection reason
/// and is appended to the user's violation log.
async fn submit_post(
    state: web::Data<AppState>,
    req: web::Json<SubmitPostRequest>,
) -> impl Responder {
    // Validate request: empty text is rejected before any analysis
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let submitted = format!("{} {}", req.title, req.content);
    let comparative = state.analyzer.comparative(&submitted);

    if state.gate.is_blocked(comparative) {
        tracing::info!(
            "Blocked post from {} (comparative: {:.3})",
            req.user_id,
            comparative
        );

        record_violation_async(
            state.postgres.clone(),
            req.user_id.clone(),
            labeled_post(&req.title, &req.content),
        );

        return HttpResponse::UnprocessableEntity().json(SubmissionResponse {
            accepted: false,
            message: ModerationGate::rejection_message().to_string(),
            document_id: None,
        });
    }

    match state.appwrite.create_post(&req.user_id, &req.title, &req.content).await {
        Ok(document_id) => {
            tracing::debug!("Accepted post {} from {}", document_id, req.user_id);
            HttpResponse::Created().json(SubmissionResponse {
                accepted: true,
                message: "Post published".to_string(),
                document_id: Some(document_id),
            })
        }
        Err(e) => {
            tracing::error!("Failed to persist post for {}: {}", req.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to persist post".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Submit a comment endpoint
///
/// POST /api/v1/posts/{postId}/comments
async fn submit_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<SubmitCommentRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let post_id = path.into_inner();
    let comparative = state.analyzer.comparative(&req.content);

    if state.gate.is_blocked(comparative) {
        tracing::info!(
            "Blocked comment from {} on post {} (comparative: {:.3})",
            req.user_id,
            post_id,
            comparative
        );

        record_violation_async(
            state.postgres.clone(),
            req.user_id.clone(),
            labeled_comment(&req.content),
        );

        return HttpResponse::UnprocessableEntity().json(SubmissionResponse {
            accepted: false,
            message: ModerationGate::rejection_message().to_string(),
            document_id: None,
        });
    }

    match state.appwrite.create_comment(&post_id, &req.user_id, &req.content).await {
        Ok(document_id) => HttpResponse::Created().json(SubmissionResponse {
            accepted: true,
            message: "Comment published".to_string(),
            document_id: Some(document_id),
        }),
        Err(e) => {
            tracing::error!("Failed to persist comment for {}: {}", req.user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to persist comment".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Get a user's violation log
///
/// GET /api/v1/violations?userId={userId}
///
/// Returns the append-only list of submissions that failed moderation,
/// for administrative review.
async fn get_violations(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let user_id = match query.get("userId") {
        Some(id) => id,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing userId parameter".to_string(),
                message: "userId query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    match state.postgres.get_violations(user_id).await {
        Ok(violations) => {
            let count = violations.len();
            HttpResponse::Ok().json(ViolationsResponse {
                user_id: user_id.clone(),
                violations,
                count,
            })
        }
        Err(e) => {
            tracing::error!("Failed to fetch violations for {}: {}", user_id, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch violations".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_post_format() {
        assert_eq!(
            labeled_post("Job hunt", "Any referrals?"),
            "Title: Job hunt, Content: Any referrals?"
        );
    }

    #[test]
    fn test_labeled_comment_format() {
        assert_eq!(labeled_comment("Congrats!"), "Comment: Congrats!");
    }
}
