//! Static assets with single-page-application fallback.

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    dev::{ServiceRequest, ServiceResponse, fn_service},
    http::Method,
    web,
};

use crate::middleware::error::AppError;

const INDEX_FILE: &str = "index.html";

/// Location of the SPA entry document, shared with the `/api` fallback.
pub struct SpaIndex(PathBuf);

impl SpaIndex {
    pub fn new(static_dir: &Path) -> Self {
        Self(static_dir.join(INDEX_FILE))
    }
}

/// Serve files under `static_dir`; any GET that matches no file gets `index.html`.
///
/// Mount this after every other route: it claims the whole path space.
pub fn static_files(static_dir: &Path) -> Files {
    let index = static_dir.join(INDEX_FILE);

    Files::new("/", static_dir)
        .index_file(INDEX_FILE)
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let res = serve_index(&req, &index).await;
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

/// Default for everything under `/api` that no route claims.
///
/// GET and HEAD fall through to the SPA like any other path; other methods get 404.
pub async fn api_fallback(req: HttpRequest, index: web::Data<SpaIndex>) -> HttpResponse {
    if req.method() == Method::GET || req.method() == Method::HEAD {
        serve_index(&req, &index.0).await
    } else {
        AppError::NotFound("Route not found".to_string()).error_response()
    }
}

async fn serve_index(req: &HttpRequest, index: &Path) -> HttpResponse {
    match NamedFile::open_async(index).await {
        Ok(file) => file.into_response(req),
        Err(e) => {
            tracing::warn!(path = %index.display(), error = %e, "SPA entry document missing");
            AppError::NotFound("Page not found".to_string()).error_response()
        }
    }
}
