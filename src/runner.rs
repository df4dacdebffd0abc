// Backup orchestrator: one fetch, then a sequential loop over target days.
// A day's rotation or write failure is recorded and logged, never allowed to
// stop the remaining days; only config and fetch/decode problems are fatal.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::config::{AppConfig, BackupConfig};
use crate::error::{DayError, RunError};
use crate::filter::filter_for_date;
use crate::models::StatisticsDocument;
use crate::rotation::{backup_stamp, write_with_rotation};
use crate::source::SourceClient;

/// Result of one day's filter + rotate-write. `Ok(Some(path))` means a prior
/// file was preserved at `path` before the write.
#[derive(Debug)]
pub struct DayOutcome {
    pub date: NaiveDate,
    pub path: PathBuf,
    pub result: Result<Option<PathBuf>, DayError>,
}

/// Per-day outcomes of one run. The run as a whole counts as completed as
/// long as the fetch succeeded, whatever the individual days did.
#[derive(Debug)]
pub struct RunSummary {
    pub outcomes: Vec<DayOutcome>,
}

impl RunSummary {
    pub fn days_ok(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn days_failed(&self) -> usize {
        self.outcomes.len() - self.days_ok()
    }
}

/// The dates a run covers: yesterday first, going back `days_back` days.
/// "Today" in the configured zone is never included - its data is still
/// accumulating upstream.
pub fn target_dates<Tz: TimeZone>(now: DateTime<Tz>, days_back: u32) -> Vec<NaiveDate> {
    (1..=i64::from(days_back))
        .map(|i| (now.clone() - chrono::Duration::days(i)).date_naive())
        .collect()
}

/// Full pipeline: ensure directories, fetch once, then filter + rotate-write
/// every target day.
pub async fn run(config: &AppConfig, client: &SourceClient) -> Result<RunSummary, RunError> {
    std::fs::create_dir_all(&config.backup.output_dir)
        .map_err(|e| RunError::config(anyhow::anyhow!("create output dir: {}", e)))?;
    std::fs::create_dir_all(&config.backup.backup_dir)
        .map_err(|e| RunError::config(anyhow::anyhow!("create backup dir: {}", e)))?;

    let doc = client.fetch().await?;
    tracing::info!(
        interfaces = doc.interfaces.len(),
        days_back = config.backup.days_back,
        "statistics fetched"
    );

    let now = Utc::now().with_timezone(&config.timezone());
    let stamp = backup_stamp(now);
    let dates = target_dates(now, config.backup.days_back);
    Ok(backup_days(&doc, &dates, &config.backup, &stamp))
}

/// Day loop, separated from the fetch so tests can drive it with a document
/// and a fixed clock. One bad day never aborts the batch.
pub fn backup_days(
    doc: &StatisticsDocument,
    dates: &[NaiveDate],
    backup: &BackupConfig,
    stamp: &str,
) -> RunSummary {
    let mut outcomes = Vec::with_capacity(dates.len());
    for &date in dates {
        let path = output_path(&backup.output_dir, &backup.file_prefix, date);
        let filtered = filter_for_date(doc, date);
        let result =
            write_with_rotation(&path, &filtered, Path::new(&backup.backup_dir), stamp);
        match &result {
            Ok(Some(preserved)) => {
                tracing::info!(
                    date = %date,
                    path = %path.display(),
                    preserved = %preserved.display(),
                    "day backed up, previous file rotated"
                );
            }
            Ok(None) => {
                tracing::info!(date = %date, path = %path.display(), "day backed up");
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    date = %date,
                    path = %path.display(),
                    operation = "write_with_rotation",
                    "day skipped"
                );
            }
        }
        outcomes.push(DayOutcome { date, path, result });
    }
    RunSummary { outcomes }
}

/// `<output_dir>/<prefix>_<YYYYMMDD>.json` - the filename the serving front
/// end looks up by day string.
pub fn output_path(output_dir: &str, prefix: &str, date: NaiveDate) -> PathBuf {
    Path::new(output_dir).join(format!("{}_{}.json", prefix, date.format("%Y%m%d")))
}
