use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::{Resource, SyncError};
use crate::matching::{MatchPolicy, find_named, pick};
use crate::models::{DestinationEntry, DestinationProject, DestinationWorkspace};
use crate::sync::EntrySink;
use crate::transport::{
    AuthTransport, ContentTypeTransport, Credentials, HttpRequest, HttpTransport, Transport,
};

pub const DEFAULT_BASE_URL: &str = "https://api.clockify.me/api/v1";

pub struct ClockifyClient {
    http: Box<dyn Transport>,
    base_url: String,
}

impl ClockifyClient {
    pub fn new(token: String, http: HttpTransport, base_url: &str) -> Self {
        let chain = AuthTransport::new(
            Credentials::ApiKey(token),
            ContentTypeTransport::new("application/json", http),
        );
        Self::with_transport(Box::new(chain), base_url)
    }

    pub fn with_transport(http: Box<dyn Transport>, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn resolve_workspace(
        &self,
        name: &str,
        policy: MatchPolicy,
    ) -> Result<DestinationWorkspace, SyncError> {
        let url = self.url(&["workspaces"], &[])?;
        let workspaces: Vec<DestinationWorkspace> = self.fetch(url)?;
        find_named(
            workspaces,
            name,
            |workspace| workspace.name.as_str(),
            policy,
            Resource::Workspace,
        )
    }

    /// Looks the workspace up by name, then lets Clockify filter its projects by
    /// `project`. `policy` applies to whatever the server sends back.
    pub fn resolve_project(
        &self,
        workspace: &str,
        project: &str,
        policy: MatchPolicy,
    ) -> Result<DestinationProject, SyncError> {
        let workspace = self.resolve_workspace(workspace, MatchPolicy::FirstMatch)?;
        let url = self.url(
            &["workspaces", workspace.id.as_str(), "projects"],
            &[("name", project)],
        )?;
        let projects: Vec<DestinationProject> = self.fetch(url)?;
        pick(projects, policy, Resource::Project, project)
    }

    pub fn add_entry(&self, workspace_id: &str, entry: &DestinationEntry) -> Result<(), SyncError> {
        let url = self.url(&["workspaces", workspace_id, "time-entries"], &[])?;
        let request = HttpRequest::post_json(url, entry)?;
        if let Some(body) = &request.body {
            tracing::debug!(body = %String::from_utf8_lossy(body), "clockify time entry");
        }

        let response = self.http.send(request)?;
        if response.status != StatusCode::CREATED {
            return Err(response.rejection());
        }
        Ok(())
    }

    fn url(&self, segments: &[&str], params: &[(&str, &str)]) -> Result<Url, SyncError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| SyncError::RequestBuild(err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| SyncError::RequestBuild(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<T, SyncError> {
        tracing::debug!(%url, "clockify request");
        let response = self.http.send(HttpRequest::get(url))?;
        if !response.status.is_success() {
            return Err(response.rejection());
        }
        response.json()
    }
}

impl EntrySink for ClockifyClient {
    fn add_entry(&self, workspace_id: &str, entry: &DestinationEntry) -> Result<(), SyncError> {
        ClockifyClient::add_entry(self, workspace_id, entry)
    }
}
