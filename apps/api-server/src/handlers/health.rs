//! Liveness endpoint.

use actix_web::HttpResponse;
use serde_json::json;

/// GET /api/health - report that the process is up.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
