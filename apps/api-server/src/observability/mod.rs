//! Observability module - request IDs, alerting and log redaction.

mod alert;
mod redact;
mod request_id;

pub use alert::AlertLayer;
pub use redact::mask_email;
pub use request_id::{RequestId, RequestIdMiddleware};
