//! Operator notification on breaker trips.

use tracing::warn;

/// Destination for trip notifications.
///
/// The breaker emits exactly one alert per actual state change; swap in
/// an implementation to route them to a pager or ticket queue.
pub trait AlertSink: Send + Sync {
    fn emit(&self, tenant_id: &str, message: &str);
}

/// Default sink that writes a structured warning to the service log.
#[derive(Debug, Default)]
pub struct LogAlertSink;

impl AlertSink for LogAlertSink {
    fn emit(&self, tenant_id: &str, message: &str) {
        warn!(tenant_id = %tenant_id, alert = %message, "synthetic data quality alert");
    }
}
