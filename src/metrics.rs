use lazy_static::lazy_static;
use prometheus::{Counter, Histogram, register_counter, register_histogram};


lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("wakaboard_requests_total", "Total number of leaderboard requests").unwrap();
    pub static ref QUOTA_REJECTIONS: Counter =
        register_counter!("wakaboard_quota_rejections_total", "Requests rejected by the hourly quota").unwrap();
    pub static ref UPSTREAM_ERRORS: Counter =
        register_counter!("wakaboard_upstream_errors_total", "Failed upstream leaderboard fetches").unwrap();
    pub static ref RECORDS_SERVED: Counter =
        register_counter!("wakaboard_records_served_total", "Leader records returned to clients").unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "wakaboard_upstream_latency_seconds",
        "Upstream leaderboard latency in seconds"
    )
    .unwrap();
}
