use std::io::{self, Write};

use crate::cli::Cli;
use crate::clockify::ClockifyClient;
use crate::dates::TimeWindow;
use crate::error::SyncError;
use crate::storage::Settings;
use crate::sync::{self, SyncMode, SyncOptions, SyncReport};
use crate::toggl::TogglClient;
use crate::transport::HttpTransport;

/// Resolves both projects, pulls the window's entries and replays them.
pub fn run(cli: &Cli, settings: Settings) -> Result<SyncReport, SyncError> {
    let window = TimeWindow::from_options(cli.start, cli.end, cli.from, cli.to)
        .map_err(SyncError::Config)?;
    tracing::info!("seeking entries in {}", window.label());

    let toggl = TogglClient::new(
        settings.toggl_user,
        settings.toggl_token,
        HttpTransport::new(settings.timeout)?,
        &settings.toggl_base_url,
    );
    let toggl_project = toggl.resolve_project(&cli.toggl_project, cli.toggl_match)?;
    tracing::info!("toggl: project '{}' ({})", toggl_project.name, toggl_project.id);

    let mut entries = toggl.fetch_entries(window.start(), window.end(), toggl_project.id)?;
    sync::sort_entries(&mut entries);

    let clockify = ClockifyClient::new(
        settings.clockify_token,
        HttpTransport::new(settings.timeout)?,
        &settings.clockify_base_url,
    );
    let clockify_project = clockify.resolve_project(
        &cli.clockify_workspace,
        &cli.clockify_project,
        cli.clockify_match,
    )?;
    tracing::info!(
        "clockify: project '{}' ({}), workspace '{}' ({})",
        clockify_project.name,
        clockify_project.id,
        cli.clockify_workspace,
        clockify_project.workspace_id
    );

    let options = SyncOptions {
        mode: if cli.exec {
            SyncMode::Execute
        } else {
            SyncMode::DryRun
        },
        force_billable: cli.clockify_billable,
    };
    sync::run(&entries, &clockify_project, options, &clockify)
}

/// Writes the closing count line, independent of the log filter.
pub fn print_summary(report: &SyncReport, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", report.summary())
}
