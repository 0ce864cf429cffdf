//! Lenient body extractor for site form submissions.
//!
//! Accepts JSON or `application/x-www-form-urlencoded` bodies. A body that is
//! empty or cannot be decoded yields `T::default()`, so required-field checks
//! happen in the handler (or not at all, for the fire-and-forget forms).

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload, web::Bytes};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Decoded submission body.
#[derive(Debug)]
pub struct Submission<T>(pub T);

impl<T> Submission<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Submission<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_form = req.content_type() == FORM_CONTENT_TYPE;
        let body = Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await?;
            Ok(Submission(decode(&body, is_form)))
        })
    }
}

fn decode<T>(body: &[u8], is_form: bool) -> T
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }

    let decoded = if is_form {
        serde_urlencoded::from_bytes(body).map_err(|e| e.to_string())
    } else {
        serde_json::from_slice(body).map_err(|e| e.to_string())
    };

    decoded.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Undecodable submission body, treating as empty");
        T::default()
    })
}
