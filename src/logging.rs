// Logging setup: `tracing` events go to stderr and, when enabled, are teed
// into a timestamped log file created on every launch:
//   <logs_dir>/portfolio-2026-03-01_14-30-00.log
//
// Only the newest `keep_files` log files are kept.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use crate::settings::LoggingSettings;

static INIT: Once = Once::new();

const LOG_PREFIX: &str = "portfolio-";

/// Initialize logging. Call once at startup; later calls are no-ops.
pub fn init(settings: &LoggingSettings) {
    INIT.call_once(|| {
        if let Err(e) = setup_logging(settings) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }
    });
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn setup_logging(settings: &LoggingSettings) -> Result<(), Box<dyn std::error::Error>> {
    if !settings.file_logging {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .try_init()
            .map_err(|e| e.to_string())?;
        return Ok(());
    }

    fs::create_dir_all(&settings.logs_dir)?;

    // Make room for the file about to be created.
    rotate_logs(&settings.logs_dir, settings.keep_files.saturating_sub(1))?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    let log_file_path = settings
        .logs_dir
        .join(format!("{}{}.log", LOG_PREFIX, timestamp));

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(io::stderr.and(Mutex::new(log_file)))
        .try_init()
        .map_err(|e| e.to_string())?;

    tracing::info!(path = %log_file_path.display(), "writing log file");
    Ok(())
}

/// Delete old log files, keeping the most recent `keep` files.
/// Files not created by this module are left alone.
fn rotate_logs(logs_dir: &Path, keep: usize) -> Result<(), io::Error> {
    let mut log_files: Vec<(PathBuf, std::time::SystemTime)> = Vec::new();

    for entry in fs::read_dir(logs_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("log")
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.starts_with(LOG_PREFIX))
                .unwrap_or(false)
        {
            if let Ok(metadata) = entry.metadata() {
                let modified = metadata.modified().unwrap_or(std::time::UNIX_EPOCH);
                log_files.push((path, modified));
            }
        }
    }

    // Newest first; names embed the launch time, so they break mtime ties.
    log_files.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    for (path, _) in log_files.iter().skip(keep) {
        let _ = fs::remove_file(path);
    }

    Ok(())
}
