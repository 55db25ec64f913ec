mod health;
mod leaders;
mod metrics;

pub use health::health_handler;
pub use leaders::{LEADERS_PATH, fallback_handler, leaders_handler};
pub use metrics::metrics_handler;
