use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Resource, SyncError};

/// How a resolver treats several records sharing the requested name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MatchPolicy {
    /// Take the first candidate in the order the service returned them.
    FirstMatch,
    /// Fail unless exactly one candidate is left.
    RequireUnique,
}

/// Picks one record out of `candidates`, which must already be narrowed to `name`.
pub fn pick<T>(
    candidates: Vec<T>,
    policy: MatchPolicy,
    resource: Resource,
    name: &str,
) -> Result<T, SyncError> {
    let count = candidates.len();
    if count > 1 && policy == MatchPolicy::RequireUnique {
        return Err(SyncError::Ambiguous {
            resource,
            name: name.to_string(),
            count,
        });
    }

    candidates
        .into_iter()
        .next()
        .ok_or_else(|| SyncError::NotFound {
            resource,
            name: name.to_string(),
        })
}

/// Exact-name scan over a full listing, then [`pick`].
pub fn find_named<T>(
    items: Vec<T>,
    name: &str,
    name_of: impl Fn(&T) -> &str,
    policy: MatchPolicy,
    resource: Resource,
) -> Result<T, SyncError> {
    let candidates = items
        .into_iter()
        .filter(|item| name_of(item) == name)
        .collect();
    pick(candidates, policy, resource, name)
}
