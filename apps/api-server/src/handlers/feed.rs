//! Public feed handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use lokal_shared::dto::{PageQuery, PostPageResponse, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts - one page of the public feed, newest first.
pub async fn feed(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let page = state.feed.feed(query.page()).await?;

    Ok(HttpResponse::Ok().json(PostPageResponse::from(page)))
}

/// GET /api/posts/{id} - a single post.
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let found = state.feed.post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(found)))
}
