use chrono::NaiveDate;
use clap::Parser;

use crate::dates::parse_date;
use crate::matching::MatchPolicy;

#[derive(Debug, Parser)]
#[command(
    name = "toggl2clockify",
    version,
    about = "Toggl to Clockify exporter.",
    after_help = "EXAMPLE:\n  toggl2clockify --toggl-project sumus-portal --clockify-workspace bobheadxi --clockify-project \"Sumus Portal\"\n\n\
                  Credentials come from TOGGL_USER, TOGGL_TOKEN and CLOCKIFY_TOKEN, or ~/.toggl2clockify.json."
)]
pub struct Cli {
    /// Start of the window, in days ago
    #[arg(long, default_value_t = 7)]
    pub start: u32,

    /// End of the window, in days ago
    #[arg(long, default_value_t = 0)]
    pub end: u32,

    /// First calendar day to export (YYYY-MM-DD), overrides --start/--end
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Last calendar day to export (YYYY-MM-DD), defaults to today with --from
    #[arg(long, value_parser = parse_date, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Execute updates instead of just printing them
    #[arg(long)]
    pub exec: bool,

    /// Toggl project to sync
    #[arg(long)]
    pub toggl_project: String,

    /// Clockify workspace the Clockify project belongs to
    #[arg(long)]
    pub clockify_workspace: String,

    /// Clockify project to sync to
    #[arg(long)]
    pub clockify_project: String,

    /// Force billable status on every exported entry
    #[arg(long)]
    pub clockify_billable: bool,

    /// How to treat several Toggl projects with the same name
    #[arg(long, value_enum, default_value_t = MatchPolicy::FirstMatch)]
    pub toggl_match: MatchPolicy,

    /// How to treat several Clockify projects matching the name
    #[arg(long, value_enum, default_value_t = MatchPolicy::RequireUnique)]
    pub clockify_match: MatchPolicy,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
