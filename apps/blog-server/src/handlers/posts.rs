//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{PostDraft, PostId};
use blog_shared::{MessageResponse, PostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft =
        PostDraft::parse(req.title.as_deref(), req.content.as_deref())?.within_title_limit()?;

    let post = state.posts.create(draft).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
///
/// Only presence is validated; the title length limit is left to the column
/// type.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<PostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let draft = PostDraft::parse(req.title.as_deref(), req.content.as_deref())?;

    let post = state.posts.update(id, draft).await?;
    tracing::info!(post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}
