use clap::{Parser, ValueEnum};
use std::time::Duration;

pub const WAKATIME_LEADERS_URL: &str = "https://wakatime.com/api/v1/leaders";

// What to do with an upstream entry that lacks a required field
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedEntryPolicy {
    // Abort the whole fetch (500)
    #[default]
    Fail,
    // Drop the entry and keep going
    Skip,
}

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "wakaboard-gateway")]
#[command(about = "Rate limited gateway for the WakaTime leaderboard")]
pub struct Args {
    // Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Upstream leaderboard endpoint
    #[arg(short, long, default_value = WAKATIME_LEADERS_URL)]
    pub upstream_url: String,

    // Upstream request timeout in seconds
    #[arg(long, default_value_t = 5)]
    pub upstream_timeout: u64,

    // How to treat entries missing user.username or rank
    #[arg(long, value_enum, default_value_t = MalformedEntryPolicy::Fail)]
    pub malformed_entries: MalformedEntryPolicy,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}
