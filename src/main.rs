use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wakaboard_gateway::config::Args;
use wakaboard_gateway::leaderboard::{DISPLAY_CAP, LeaderboardClient, UPSTREAM_RESULT_CAP};
use wakaboard_gateway::rate_limit::{MAX_REQUESTS_PER_HOUR, QUOTA_WINDOW};
use wakaboard_gateway::router;
use wakaboard_gateway::state::AppState;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // parse cli arguments
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let leaderboard = match LeaderboardClient::new(
        args.upstream_url.clone(),
        args.upstream_timeout(),
        args.malformed_entries,
    ) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build upstream HTTP client");
            return Err(std::io::Error::other(e));
        }
    };

    let state = Arc::new(AppState::new(leaderboard));
    let app = router(state);

    let addr = args.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Gateway running on http://{}", addr);
    info!(
        upstream = %args.upstream_url,
        timeout_secs = args.upstream_timeout,
        malformed_entries = ?args.malformed_entries,
        "Forwarding leaderboard requests"
    );
    info!(
        "Quota: {} requests per {} seconds, upstream cap {}, display cap {}",
        MAX_REQUESTS_PER_HOUR,
        QUOTA_WINDOW.as_secs(),
        UPSTREAM_RESULT_CAP,
        DISPLAY_CAP
    );

    axum::serve(listener, app).await
}
