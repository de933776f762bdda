use crate::error::SyncError;
use crate::models::{DestinationEntry, DestinationProject, SourceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    DryRun,
    Execute,
}

#[derive(Debug, Clone, Copy)]
pub struct SyncOptions {
    pub mode: SyncMode,
    /// Marks every generated entry billable. Never clears the flag.
    pub force_billable: bool,
}

/// Where generated entries are committed in execute mode.
pub trait EntrySink {
    fn add_entry(&self, workspace_id: &str, entry: &DestinationEntry) -> Result<(), SyncError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    Planned(DestinationEntry),
    Committed(DestinationEntry),
}

impl EntryOutcome {
    pub fn entry(&self) -> &DestinationEntry {
        match self {
            EntryOutcome::Planned(entry) | EntryOutcome::Committed(entry) => entry,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub mode: SyncMode,
    pub outcomes: Vec<EntryOutcome>,
}

impl SyncReport {
    pub fn count(&self) -> usize {
        self.outcomes.len()
    }

    pub fn committed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, EntryOutcome::Committed(_)))
            .count()
    }

    pub fn summary(&self) -> String {
        match self.mode {
            SyncMode::DryRun => format!("{} entries to export", self.count()),
            SyncMode::Execute => format!("exported {} entries", self.count()),
        }
    }
}

/// Ascending by start; entries sharing a start keep their fetch order.
pub fn sort_entries(entries: &mut [SourceEntry]) {
    entries.sort_by_key(|entry| entry.start);
}

/// A running Toggl timer maps to a Clockify entry without an end.
pub fn map_entry(
    entry: &SourceEntry,
    project: &DestinationProject,
    force_billable: bool,
) -> DestinationEntry {
    DestinationEntry {
        start: entry.start,
        end: entry.stop,
        description: entry.description.clone(),
        project_id: project.id.clone(),
        billable: force_billable || entry.billable,
        // task and tag mapping are not carried over
        tag_ids: Vec::new(),
    }
}

/// Replays `entries` in order against `project`. In execute mode the first
/// failed submission ends the run; entries already committed stay committed.
pub fn run(
    entries: &[SourceEntry],
    project: &DestinationProject,
    options: SyncOptions,
    sink: &dyn EntrySink,
) -> Result<SyncReport, SyncError> {
    let mut outcomes = Vec::with_capacity(entries.len());

    for entry in entries {
        let generated = map_entry(entry, project, options.force_billable);
        if generated.end.is_none() {
            tracing::warn!(id = entry.id, start = %entry.start, "toggl entry is still running");
        }

        match options.mode {
            SyncMode::DryRun => {
                tracing::info!("generated entry: {generated:?}");
                outcomes.push(EntryOutcome::Planned(generated));
            }
            SyncMode::Execute => {
                let end = generated
                    .end
                    .map_or_else(|| "running".to_string(), |end| end.to_string());
                tracing::info!(
                    "creating entry '{}' ({} ~ {})",
                    generated.description,
                    generated.start,
                    end
                );
                if let Err(err) = sink.add_entry(&project.workspace_id, &generated) {
                    return Err(SyncError::Aborted {
                        position: outcomes.len() + 1,
                        committed: outcomes.len(),
                        source: Box::new(err),
                    });
                }
                outcomes.push(EntryOutcome::Committed(generated));
            }
        }
    }

    Ok(SyncReport {
        mode: options.mode,
        outcomes,
    })
}
