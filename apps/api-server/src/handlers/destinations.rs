//! Destination catalog endpoint.

use actix_web::{HttpResponse, web};
use voyage_shared::dto::DestinationsResponse;

use crate::state::AppState;

/// GET /api/destinations
pub async fn list_destinations(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(DestinationsResponse {
        destinations: state.catalog.all().to_vec(),
    })
}
