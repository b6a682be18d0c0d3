//! Runs in its own process so the global subscriber can be installed once.

use ripple_telemetry::{init_subscriber, TelemetryConfig};

#[test]
fn test_init_json_subscriber() {
    let config = TelemetryConfig {
        level: "debug".to_string(),
        json_output: true,
    };

    init_subscriber(&config);
    tracing::debug!(target: "ripple", "json subscriber installed");
}
