//! Quality monitoring and circuit breaking for synthetic training data.
//!
//! [`QualityMonitor`] assembles per-tenant daily snapshots (accuracy by
//! source, trailing-week trend, distribution drift) from the sample
//! store. [`CircuitBreaker`] judges those snapshots against configured
//! thresholds and flips a tenant's synthesis switch off when synthetic
//! data starts hurting the model; recovery is a manual reset.

pub mod alerts;
pub mod breaker;
pub mod divergence;
pub mod monitor;
pub mod trend;

pub use alerts::{AlertSink, LogAlertSink};
pub use breaker::CircuitBreaker;
pub use divergence::distribution_drift;
pub use monitor::{mixed_accuracy, QualityMonitor};
pub use trend::seven_day_trend;
