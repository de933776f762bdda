use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Kind of remote record a name lookup was resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Workspace,
    Project,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Workspace => f.write_str("workspace"),
            Resource::Project => f.write_str("project"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request failed to build: {0}")]
    RequestBuild(String),
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("response parse failed: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("no {resource} with name '{name}' found")]
    NotFound { resource: Resource, name: String },
    #[error("name '{name}' associated with {count} {resource}s")]
    Ambiguous {
        resource: Resource,
        name: String,
        count: usize,
    },
    #[error("request responded with status {status}{}", detail_suffix(.detail))]
    Rejected {
        status: StatusCode,
        detail: Option<serde_json::Value>,
    },
    #[error("entry {position} failed after {committed} committed: {source}")]
    Aborted {
        position: usize,
        committed: usize,
        #[source]
        source: Box<SyncError>,
    },
    #[error("{0}")]
    Config(String),
}

fn detail_suffix(detail: &Option<serde_json::Value>) -> String {
    match detail {
        Some(value) => format!(": {value}"),
        None => String::new(),
    }
}
