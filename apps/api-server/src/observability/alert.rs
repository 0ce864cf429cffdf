//! Error alerting layer for tracing.
//!
//! ERROR events (failed post writes, unreadable posts file, failed post
//! creation) are copied to an alert sink so that storage problems the HTTP
//! caller never sees still reach an operator.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{Event, Subscriber};
use tracing_subscriber::{Layer, layer::Context};

const ALERT_BUFFER: usize = 100;

/// Alert message containing error details.
#[derive(Debug, Clone)]
pub struct AlertMessage {
    pub message: String,
    pub target: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub fields: Vec<(String, String)>,
}

impl AlertMessage {
    /// `key=value` pairs of the event's structured fields.
    fn field_summary(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Destination for alerts.
#[async_trait::async_trait]
pub trait AlertSender: Send + Sync {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("Failed to send alert: {0}")]
    SendError(String),
}

/// Writes alerts to stderr (for development).
pub struct ConsoleAlertSender;

#[async_trait::async_trait]
impl AlertSender for ConsoleAlertSender {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError> {
        eprintln!(
            "\n[ALERT] {} | {} | {} | {}\n",
            alert.timestamp,
            alert.target,
            alert.message,
            alert.field_summary()
        );
        Ok(())
    }
}

/// Posts alerts to a chat webhook (Slack, Discord, etc.).
pub struct WebhookAlertSender {
    url: String,
    client: reqwest::Client,
}

impl WebhookAlertSender {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl AlertSender for WebhookAlertSender {
    async fn send(&self, alert: AlertMessage) -> Result<(), AlertError> {
        let payload = serde_json::json!({
            "text": format!(
                "*Voyage error*\n*Target:* {}\n*Message:* {}\n*Fields:* {}\n*Time:* {}",
                alert.target,
                alert.message,
                alert.field_summary(),
                alert.timestamp
            )
        });

        self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|e| AlertError::SendError(e.to_string()))?;

        Ok(())
    }
}

/// Tracing layer that forwards ERROR events to an [`AlertSender`].
pub struct AlertLayer {
    sender: mpsc::Sender<AlertMessage>,
}

impl AlertLayer {
    /// Create a layer and spawn the task that drains it into `alert_sender`.
    pub fn new(alert_sender: Arc<dyn AlertSender>) -> Self {
        let (tx, mut rx) = mpsc::channel::<AlertMessage>(ALERT_BUFFER);

        tokio::spawn(async move {
            while let Some(alert) = rx.recv().await {
                if let Err(e) = alert_sender.send(alert).await {
                    // Not traced: an ERROR here would feed back into this layer.
                    eprintln!("{}", e);
                }
            }
        });

        Self { sender: tx }
    }

    pub fn console() -> Self {
        Self::new(Arc::new(ConsoleAlertSender))
    }

    pub fn webhook(url: String) -> Self {
        Self::new(Arc::new(WebhookAlertSender::new(url)))
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields
                .push((field.name().to_string(), value.to_string()));
        }
    }
}

impl<S> Layer<S> for AlertLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != tracing::Level::ERROR {
            return;
        }

        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let alert = AlertMessage {
            message: visitor.message,
            target: event.metadata().target().to_string(),
            timestamp: chrono::Utc::now(),
            fields: visitor.fields,
        };

        // Drop the alert rather than block the request when the buffer is full.
        let _ = self.sender.try_send(alert);
    }
}
