//! HTTP handlers and route configuration.

mod auth;
mod dashboard;
mod feed;
mod health;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Public feed
            .service(
                web::scope("/posts")
                    .route("", web::get().to(feed::feed))
                    .route("/{id}", web::get().to(feed::post_detail)),
            )
            // Owner dashboard
            .service(
                web::scope("/dashboard/posts")
                    .route("", web::get().to(dashboard::my_posts))
                    .route("", web::post().to(dashboard::create_post))
                    .route("/{id}", web::put().to(dashboard::update_post))
                    .route("/{id}", web::delete().to(dashboard::delete_post)),
            ),
    );
}
