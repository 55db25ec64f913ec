use std::sync::Mutex;
use std::time::{Duration, Instant};

// Max admitted requests per window, shared by every caller
pub const MAX_REQUESTS_PER_HOUR: u32 = 60;
pub const QUOTA_WINDOW: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Rejected,
}

// Process-wide quota state - count of admitted requests since window_start
#[derive(Debug, Clone, Copy)]
pub struct QuotaState {
    pub count: u32,
    pub window_start: Instant,
}

// Single global hourly budget. Rejected requests never consume budget.
pub struct QuotaGuard {
    state: Mutex<QuotaState>,
}

impl QuotaGuard {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(window_start: Instant) -> Self {
        Self {
            state: Mutex::new(QuotaState {
                count: 0,
                window_start,
            }),
        }
    }

    pub fn admit(&self) -> Decision {
        self.admit_at(Instant::now())
    }

    // Reset check, threshold check and increment all happen under one lock
    pub fn admit_at(&self, now: Instant) -> Decision {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        // window expired..? reset it
        if now.saturating_duration_since(state.window_start) > QUOTA_WINDOW {
            state.count = 0;
            state.window_start = now;
        }

        if state.count >= MAX_REQUESTS_PER_HOUR {
            return Decision::Rejected;
        }

        state.count += 1;
        Decision::Allowed
    }

    pub fn snapshot(&self) -> QuotaState {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for QuotaGuard {
    fn default() -> Self {
        Self::new()
    }
}
