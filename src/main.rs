use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;
use vnstat_backup::*;

use error::RunError;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Back up vnStat traffic statistics as one filtered JSON file per day.
#[derive(Debug, Parser)]
#[command(name = "vnstat-backup", version)]
struct Cli {
    /// Back up the N most-recent days (overrides the config file).
    #[arg(short, long)]
    days: Option<u32>,

    /// Config file path (falls back to $CONFIG_FILE, then ./config.toml).
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "run aborted");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), RunError> {
    let mut app_config = match &cli.config {
        Some(path) => config::AppConfig::load_from_path(path),
        None => config::AppConfig::load(),
    }
    .map_err(RunError::config)?;
    if let Some(days) = cli.days {
        if days == 0 {
            return Err(RunError::config(anyhow::anyhow!("--days must be > 0")));
        }
        app_config.backup.days_back = days;
    }

    tracing::info!(
        api_url = %app_config.source.api_url,
        output_dir = %app_config.backup.output_dir,
        backup_dir = %app_config.backup.backup_dir,
        days_back = app_config.backup.days_back,
        timezone = %app_config.time.timezone,
        "starting backup run"
    );

    let client = source::SourceClient::new(
        &app_config.source.api_url,
        Duration::from_secs(app_config.source.timeout_secs),
    )?;
    let summary = runner::run(&app_config, &client).await?;

    tracing::info!(
        days_ok = summary.days_ok(),
        days_failed = summary.days_failed(),
        "backup run complete"
    );
    Ok(())
}
