//! Contact and newsletter forms. Submissions are logged, never stored.

use actix_web::HttpResponse;
use voyage_shared::Acknowledgement;
use voyage_shared::dto::{ContactRequest, NewsletterRequest};

use super::submission::Submission;
use crate::observability::{RequestId, mask_email};

/// POST /api/contact
pub async fn contact(request_id: RequestId, body: Submission<ContactRequest>) -> HttpResponse {
    let req = body.into_inner();

    tracing::info!(
        request_id = %request_id.as_str(),
        name = ?req.name,
        email = ?req.email.as_deref().map(mask_email),
        message = ?req.message,
        "Contact form submission"
    );

    HttpResponse::Ok().json(Acknowledgement::ok("Message received!"))
}

/// POST /api/newsletter
pub async fn newsletter(request_id: RequestId, body: Submission<NewsletterRequest>) -> HttpResponse {
    let req = body.into_inner();

    tracing::info!(
        request_id = %request_id.as_str(),
        email = ?req.email.as_deref().map(mask_email),
        "Newsletter subscription"
    );

    HttpResponse::Ok().json(Acknowledgement::ok("Subscribed successfully!"))
}
