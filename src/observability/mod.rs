//! Observability module for monitoring and metrics.
//!
//! Counters are in-process only and are exposed over HTTP by the server module.

pub mod metrics;

pub use metrics::{MetricsSnapshot, MetricsTracker, Timer};
