//! Telemetry initialization - tracing and alerting setup.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::observability::AlertLayer;

const DEFAULT_FILTER: &str = "info,api_server=debug,voyage_infra=debug";

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Enable JSON logging (for production).
    pub json_logs: bool,
    /// Service name attached to the startup event.
    pub service_name: String,
    /// Forward ERROR events (e.g. failed post writes) to an alert sink.
    pub alerts_enabled: bool,
    /// Webhook URL for alerts (Slack, Discord, etc.).
    pub alert_webhook_url: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            service_name: "voyage-api".to_string(),
            alerts_enabled: true,
            alert_webhook_url: None,
        }
    }
}

impl TelemetryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            json_logs: std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            alerts_enabled: std::env::var("ALERTS_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(defaults.alerts_enabled),
            alert_webhook_url: std::env::var("ALERT_WEBHOOK_URL").ok(),
        }
    }
}

/// Initialize telemetry (tracing and alerting).
///
/// Must run inside the async runtime: the alert layer spawns its dispatcher task.
pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let alert_layer = config.alerts_enabled.then(|| match &config.alert_webhook_url {
        Some(url) => AlertLayer::webhook(url.clone()),
        None => AlertLayer::console(),
    });

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .with(alert_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .with(alert_layer)
            .init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        alerts_enabled = config.alerts_enabled,
        webhook = config.alert_webhook_url.is_some(),
        "Telemetry initialized"
    );
}
