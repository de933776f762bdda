use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A Toggl time entry as returned by `GET /time_entries`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceEntry {
    pub id: u64,
    #[serde(rename = "wid")]
    pub workspace_id: u64,
    #[serde(rename = "pid", default)]
    pub project_id: Option<u64>,
    #[serde(default)]
    pub billable: bool,
    pub start: DateTime<Utc>,
    /// Missing while the timer is still running.
    #[serde(default)]
    pub stop: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceProject {
    pub id: u64,
    #[serde(rename = "wid")]
    pub workspace_id: u64,
    pub name: String,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
}

/// Body of `GET /me?with_related_data=true`; only the project list is used.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceUser {
    #[serde(default)]
    pub since: i64,
    pub data: SourceUserData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceUserData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<SourceProject>,
}

/// Payload for `POST /workspaces/{id}/time-entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationEntry {
    pub start: DateTime<Utc>,
    /// Left out for a timer that is still running.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub description: String,
    pub project_id: String,
    pub billable: bool,
    pub tag_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectClient {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub workspace_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationProject {
    pub id: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub billable: bool,
    #[serde(default)]
    pub client: Option<ProjectClient>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    pub name: String,
    pub workspace_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HourlyRate {
    #[serde(default)]
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationWorkspace {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hourly_rate: Option<HourlyRate>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
