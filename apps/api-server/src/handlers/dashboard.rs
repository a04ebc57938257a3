//! Owner dashboard handlers.
//!
//! All of these pass the (possibly anonymous) caller into the dashboard
//! service, which refuses anonymous callers before touching storage. The
//! handlers never inspect ownership themselves.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use lokal_shared::dto::{PageQuery, PostInput, PostPageResponse, PostResponse};

use crate::middleware::auth::OptionalIdentity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/dashboard/posts - the caller's own posts, paginated.
pub async fn my_posts(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state.dashboard.my_posts(&identity, query.page()).await?;

    Ok(HttpResponse::Ok().json(PostPageResponse::from(page)))
}

/// POST /api/dashboard/posts - create a post owned by the caller.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();
    let created = state
        .dashboard
        .create(&identity, input.title, input.content)
        .await?;

    Ok(HttpResponse::Created().json(PostResponse::from(created)))
}

/// PUT /api/dashboard/posts/{id} - update title/content of an owned post.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let input = body.into_inner();
    let updated = state
        .dashboard
        .update(&identity, path.into_inner(), input.title, input.content)
        .await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(updated)))
}

/// DELETE /api/dashboard/posts/{id} - hard-delete an owned post.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: OptionalIdentity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state.dashboard.delete(&identity, path.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
