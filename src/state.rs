use crate::leaderboard::LeaderboardClient;
use crate::rate_limit::QuotaGuard;

// app's shared state
pub struct AppState {
    pub leaderboard: LeaderboardClient,
    pub quota: QuotaGuard, // single hourly budget for all callers
}

impl AppState {
    pub fn new(leaderboard: LeaderboardClient) -> Self {
        Self {
            leaderboard,
            quota: QuotaGuard::new(),
        }
    }
}
