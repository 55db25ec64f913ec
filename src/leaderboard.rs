use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::config::MalformedEntryPolicy;
use crate::error::{GatewayError, GatewayResult};
use crate::metrics::{UPSTREAM_ERRORS, UPSTREAM_LATENCY};
use crate::models::{
    DailyAverage, LanguageSummary, LeaderRecord, LeadersResponse, UpstreamLeaderEntry,
};

// Upstream is asked for this many leaders...
pub const UPSTREAM_RESULT_CAP: u32 = 10;
// ...and at most this many are shown. Both caps are kept as-is.
pub const DISPLAY_CAP: usize = 15;
pub const TOP_LANGUAGES: usize = 3;

// Fetches the upstream leaderboard and reshapes it into LeaderRecords
pub struct LeaderboardClient {
    client: reqwest::Client,
    url: String,
    policy: MalformedEntryPolicy,
}

impl LeaderboardClient {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        policy: MalformedEntryPolicy,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            policy,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    // One upstream GET per call, no caching and no retries
    pub async fn fetch_top(
        &self,
        limit: usize,
        country_code: Option<&str>,
    ) -> GatewayResult<Vec<LeaderRecord>> {
        let params = upstream_params(country_code);
        let start = Instant::now();

        let result = self.client.get(&self.url).query(&params).send().await;
        UPSTREAM_LATENCY.observe(start.elapsed().as_secs_f64());

        let res = result.map_err(|e| {
            UPSTREAM_ERRORS.inc();
            warn!(url = %self.url, error = %e, "upstream request failed");
            GatewayError::from(e)
        })?;

        let status = res.status();
        if status != reqwest::StatusCode::OK {
            UPSTREAM_ERRORS.inc();
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status = status.as_u16(), error = %e, "failed to read upstream error body");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), "upstream returned non-200");
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let payload = res.json::<LeadersResponse>().await.map_err(|e| {
            UPSTREAM_ERRORS.inc();
            GatewayError::from(e)
        })?;
        let data = payload.data.ok_or_else(|| {
            UPSTREAM_ERRORS.inc();
            warn!("upstream 200 body has no data array");
            GatewayError::MissingData
        })?;
        debug!(entries = data.len(), "upstream leaderboard received");

        normalize(&data, limit, self.policy)
    }
}

// limit is always sent, country_code only when non-empty
pub fn upstream_params(country_code: Option<&str>) -> Vec<(&'static str, String)> {
    let mut params = vec![("limit", UPSTREAM_RESULT_CAP.to_string())];
    if let Some(code) = country_code.filter(|c| !c.is_empty()) {
        params.push(("country_code", code.to_string()));
    }
    params
}

// Project at most `limit` upstream entries, preserving upstream order
pub fn normalize(
    entries: &[UpstreamLeaderEntry],
    limit: usize,
    policy: MalformedEntryPolicy,
) -> GatewayResult<Vec<LeaderRecord>> {
    let mut records = Vec::with_capacity(entries.len().min(limit));

    for (index, entry) in entries.iter().take(limit).enumerate() {
        match project_entry(index, entry) {
            Ok(record) => records.push(record),
            Err(err) if policy == MalformedEntryPolicy::Skip => {
                warn!(error = %err, "skipping malformed leaderboard entry");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(records)
}

// A missing rank, user or username is malformed. An explicit null passes through.
pub fn project_entry(index: usize, entry: &UpstreamLeaderEntry) -> GatewayResult<LeaderRecord> {
    let rank = entry
        .rank
        .ok_or(GatewayError::MalformedUpstream { index, field: "rank" })?;

    let user = entry
        .user
        .as_ref()
        .ok_or(GatewayError::MalformedUpstream { index, field: "user" })?;
    let username = user
        .username
        .clone()
        .ok_or(GatewayError::MalformedUpstream { index, field: "user.username" })?;

    let (city, country_code) = match &user.city {
        Some(city) => (
            city.title.clone().unwrap_or_default(),
            city.country_code.clone().unwrap_or_default(),
        ),
        None => (String::new(), String::new()),
    };

    let (running_daily_average, running_total_human_readable, top3_languages) =
        match &entry.running_total {
            Some(total) => (
                total
                    .human_readable_daily_average
                    .clone()
                    .map_or(DailyAverage::Unavailable, DailyAverage::Text),
                total.human_readable_total.clone().unwrap_or_default(),
                total
                    .languages
                    .iter()
                    .flatten()
                    .take(TOP_LANGUAGES)
                    .map(|lang| LanguageSummary {
                        name: lang.name.clone().unwrap_or_default(),
                        total_seconds: lang.total_seconds.unwrap_or_default(),
                    })
                    .collect(),
            ),
            None => (DailyAverage::Unavailable, String::new(), Vec::new()),
        };

    Ok(LeaderRecord {
        rank,
        username,
        city,
        country_code,
        running_daily_average,
        running_total_human_readable,
        top3_languages,
    })
}
