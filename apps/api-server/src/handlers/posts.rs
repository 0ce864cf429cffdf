//! Post submission endpoint.

use actix_web::{HttpResponse, web};

use voyage_core::domain::NewPost;
use voyage_shared::dto::CreatePostRequest;

use super::submission::Submission;
use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: Submission<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new_post = NewPost::new(req.title, req.image_url, req.description)?;

    let post = state.posts.create(new_post).await.map_err(|e| {
        tracing::error!(request_id = %request_id.as_str(), error = %e, "Error creating post");
        AppError::Internal("Failed to create post".to_string())
    })?;

    tracing::info!(
        request_id = %request_id.as_str(),
        post_id = %post.id,
        title = %post.title,
        "New post created"
    );

    Ok(HttpResponse::Created().json(post))
}
