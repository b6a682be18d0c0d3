mod subscriber;

pub use subscriber::{init_subscriber, try_init_test_subscriber, TelemetryConfig};
