use chrono::{DateTime, SecondsFormat, TimeZone};
use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::error::{Resource, SyncError};
use crate::matching::{MatchPolicy, find_named};
use crate::models::{SourceEntry, SourceProject, SourceUser};
use crate::transport::{AuthTransport, Credentials, HttpRequest, HttpTransport, Transport};

pub const DEFAULT_BASE_URL: &str = "https://api.track.toggl.com/api/v8";

/// Password Toggl expects when the API token is sent as the Basic user.
const API_TOKEN_PASSWORD: &str = "api_token";

pub struct TogglClient {
    http: Box<dyn Transport>,
    base_url: String,
}

impl TogglClient {
    /// Builds the Basic-auth chain over `http`. Without a user the token is sent
    /// as the user name.
    pub fn new(user: Option<String>, token: String, http: HttpTransport, base_url: &str) -> Self {
        let credentials = match user {
            Some(user) => Credentials::Basic {
                user,
                password: token,
            },
            None => Credentials::Basic {
                user: token,
                password: API_TOKEN_PASSWORD.to_string(),
            },
        };
        Self::with_transport(Box::new(AuthTransport::new(credentials, http)), base_url)
    }

    pub fn with_transport(http: Box<dyn Transport>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve_project(
        &self,
        name: &str,
        policy: MatchPolicy,
    ) -> Result<SourceProject, SyncError> {
        let url = self.url("me", &[("with_related_data", "true")])?;
        let user: SourceUser = self.fetch(url)?;
        find_named(
            user.data.projects,
            name,
            |project| project.name.as_str(),
            policy,
            Resource::Project,
        )
    }

    /// Entries started inside `[start, end]` that belong to `project_id`, in the
    /// order Toggl returned them.
    pub fn fetch_entries<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
        project_id: u64,
    ) -> Result<Vec<SourceEntry>, SyncError>
    where
        Tz::Offset: std::fmt::Display,
    {
        let start = start.to_rfc3339_opts(SecondsFormat::Secs, true);
        let end = end.to_rfc3339_opts(SecondsFormat::Secs, true);
        let url = self.url(
            "time_entries",
            &[("start_date", start.as_str()), ("end_date", end.as_str())],
        )?;
        let entries: Vec<SourceEntry> = self.fetch(url)?;
        let fetched = entries.len();
        let filtered: Vec<SourceEntry> = entries
            .into_iter()
            .filter(|entry| entry.project_id == Some(project_id))
            .collect();
        tracing::debug!(fetched, kept = filtered.len(), project_id, "filtered toggl entries");
        Ok(filtered)
    }

    fn url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, SyncError> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|err| SyncError::RequestBuild(err.to_string()))
    }

    fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, SyncError> {
        tracing::debug!(%url, "toggl request");
        let response = self.http.send(HttpRequest::get(url))?;
        if !response.status.is_success() {
            return Err(response.rejection());
        }
        response.json()
    }
}
