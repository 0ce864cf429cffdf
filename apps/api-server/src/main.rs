//! # Voyage API Server
//!
//! The main entry point for the Actix-web HTTP server: destination catalog,
//! post submissions, site forms, and the single-page app's static files.

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        posts_file = ?config.posts_file,
        static_dir = %config.static_dir.display(),
        "Starting Voyage API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(&config).await;
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        let static_dir = static_dir.clone();
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .configure(move |cfg| handlers::configure_routes(cfg, &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
