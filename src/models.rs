use serde::{Deserialize, Deserializer, Serialize, Serializer};

// WakaTime /leaders response format. Only the fields we project are modeled.
// `data` absent or null is a broken payload, checked by the normalizer.
#[derive(Deserialize, Debug, Clone)]
pub struct LeadersResponse {
    pub data: Option<Vec<UpstreamLeaderEntry>>,
}

// rank/username: None = key absent, Some(None) = key present with null
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpstreamLeaderEntry {
    #[serde(default, deserialize_with = "present")]
    pub rank: Option<Option<i64>>,
    pub user: Option<UpstreamUser>,
    pub running_total: Option<RunningTotal>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpstreamUser {
    #[serde(default, deserialize_with = "present")]
    pub username: Option<Option<String>>,
    pub city: Option<UpstreamCity>,
}

// WakaTime sends null for unset profile fields
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpstreamCity {
    pub title: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RunningTotal {
    pub human_readable_daily_average: Option<String>,
    pub human_readable_total: Option<String>,
    pub languages: Option<Vec<UpstreamLanguage>>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpstreamLanguage {
    pub name: Option<String>,
    pub total_seconds: Option<f64>,
}

// Only runs when the key exists, so a null becomes Some(None)
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Daily average is a string from upstream, or the number 0 when unavailable
#[derive(Debug, Clone, PartialEq)]
pub enum DailyAverage {
    Text(String),
    Unavailable,
}

impl Serialize for DailyAverage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DailyAverage::Text(text) => serializer.serialize_str(text),
            DailyAverage::Unavailable => serializer.serialize_u8(0),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageSummary {
    pub name: String,
    pub total_seconds: f64,
}

// Projection served to our clients. rank/username are null only when upstream sent null.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeaderRecord {
    pub rank: Option<i64>,
    pub username: Option<String>,
    pub city: String,
    pub country_code: String,
    pub running_daily_average: DailyAverage,
    pub running_total_human_readable: String,
    pub top3_languages: Vec<LanguageSummary>,
}

// Query string accepted on /api/leaders
#[derive(Debug, Default, PartialEq)]
pub struct LeadersQuery {
    pub country_code: Option<String>,
}

impl LeadersQuery {
    // First value wins when a key repeats; empty values count as absent
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let country_code = pairs
            .iter()
            .find(|(key, _)| key == "country_code")
            .map(|(_, value)| value.clone())
            .filter(|value| !value.is_empty());
        Self { country_code }
    }
}
