//! Flow timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Timing knobs for the registration flow.
///
/// Defaults: a 2000ms simulated registration delay, 5000ms alert
/// auto-expiry, and a particle spawned every 300ms. Tests shrink them to
/// keep the suite fast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Simulated network latency for the registration call.
    pub submit_delay: Duration,
    /// Lifetime of non-persistent alerts.
    pub alert_ttl: Duration,
    /// Interval between decorative particle spawns.
    pub particle_period: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_millis(2_000),
            alert_ttl: Duration::from_millis(5_000),
            particle_period: Duration::from_millis(300),
        }
    }
}
