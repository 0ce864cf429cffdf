//! HTTP handlers and route configuration.

mod destinations;
mod forms;
mod health;
mod posts;
mod spa;
mod submission;

use std::path::Path;

use actix_web::{Resource, web};

/// Configure all application routes. Static files and the SPA fallback go last.
///
/// Requests under `/api` that match no route (including a GET on a POST-only
/// path) are handled by [`spa::api_fallback`], not actix's bare 404/405.
pub fn configure_routes(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg.app_data(web::Data::new(spa::SpaIndex::new(static_dir)))
        .service(
            web::scope("/api")
                .service(api_resource("/health").route(web::get().to(health::health_check)))
                .service(
                    api_resource("/destinations")
                        .route(web::get().to(destinations::list_destinations)),
                )
                .service(api_resource("/posts").route(web::post().to(posts::create_post)))
                .service(api_resource("/contact").route(web::post().to(forms::contact)))
                .service(api_resource("/newsletter").route(web::post().to(forms::newsletter)))
                .default_service(web::to(spa::api_fallback)),
        )
        .service(spa::static_files(static_dir));
}

fn api_resource(path: &str) -> Resource {
    web::resource(path).default_service(web::to(spa::api_fallback))
}
