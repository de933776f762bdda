use chrono::Duration;
use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

/// The window whose entries get exported, bounds inclusive.
#[derive(Debug, Clone)]
pub struct TimeWindow {
    start: DateTime<Local>,
    end: DateTime<Local>,
    label: String,
}

impl TimeWindow {
    /// `start_days` and `end_days` count back from `now`.
    pub fn from_days_ago(
        start_days: u32,
        end_days: u32,
        now: DateTime<Local>,
    ) -> Result<Self, String> {
        if start_days < end_days {
            return Err(
                "Start cannot be after end: --start must be at least --end days ago.".to_string(),
            );
        }
        let start = now - Duration::days(i64::from(start_days));
        let end = now - Duration::days(i64::from(end_days));
        let label = format!(
            "{} → {}",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        );
        Ok(Self { start, end, label })
    }

    /// Whole calendar days, local time.
    pub fn from_bounds(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        let start = local_datetime(start_date, 0, 0, 0);
        let end = local_datetime(end_date, 23, 59, 59);
        let label = if start_date == end_date {
            format!("{}", start_date.format("%Y-%m-%d"))
        } else {
            format!(
                "{} → {}",
                start_date.format("%Y-%m-%d"),
                end_date.format("%Y-%m-%d")
            )
        };
        Self { start, end, label }
    }

    /// Calendar dates win over day offsets when given.
    pub fn from_options(
        start_days: u32,
        end_days: u32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, String> {
        match (start_date, end_date) {
            (Some(start), Some(end)) => {
                if start > end {
                    return Err("Start date cannot be after end date.".to_string());
                }
                Ok(Self::from_bounds(start, end))
            }
            (Some(start), None) => {
                let end = Local::now().date_naive();
                if start > end {
                    return Err("Start date cannot be after end date.".to_string());
                }
                Ok(Self::from_bounds(start, end))
            }
            (None, None) => Self::from_days_ago(start_days, end_days, Local::now()),
            (None, Some(_)) => Err("End date requires a start date.".to_string()),
        }
    }

    pub fn start(&self) -> &DateTime<Local> {
        &self.start
    }

    pub fn end(&self) -> &DateTime<Local> {
        &self.end
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD.".to_string())
}

fn local_datetime(date: NaiveDate, hour: u32, minute: u32, second: u32) -> DateTime<Local> {
    let result = Local.with_ymd_and_hms(
        date.year(),
        date.month(),
        date.day(),
        hour,
        minute,
        second,
    );
    result
        .earliest()
        .or_else(|| result.latest())
        .unwrap_or_else(Local::now)
}
