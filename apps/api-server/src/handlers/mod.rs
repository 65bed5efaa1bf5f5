//! HTTP handlers and route configuration.

mod health;
mod timeline;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            // Timeline guestbook
            .route(
                "/timeline_post",
                web::post().to(timeline::create_timeline_post),
            )
            .route(
                "/timeline_post",
                web::get().to(timeline::list_timeline_posts),
            )
            .route(
                "/timeline_post",
                web::delete().to(timeline::delete_newest_timeline_post),
            ),
    );
}
