//! Timeline guestbook handlers.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use folio_core::domain::TimelinePost;
use folio_shared::MessageResponse;
use folio_shared::dto::TimelinePostForm;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
struct TimelineFeed {
    timeline_posts: Vec<TimelinePost>,
}

/// POST /api/timeline_post
///
/// Form-encoded `name`, `email`, `content`. Returns the created post as a
/// flat field map; 400 with a plain-text reason on validation failure.
pub async fn create_timeline_post(
    state: web::Data<AppState>,
    body: web::Form<TimelinePostForm>,
) -> AppResult<HttpResponse> {
    let form = body.into_inner();

    let post = state
        .timeline
        .create(form.name, form.email, form.content)
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/timeline_post
///
/// All posts, newest first; an empty timeline is an empty array.
pub async fn list_timeline_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.timeline.list().await?;

    Ok(HttpResponse::Ok().json(TimelineFeed {
        timeline_posts: posts,
    }))
}

/// DELETE /api/timeline_post
///
/// Removes the most recent post; 404 when the timeline is empty or the
/// targeted post was already removed.
pub async fn delete_newest_timeline_post(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let id = state.timeline.delete_newest().await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Post {id} deleted successfully."
    ))))
}
