//! Structured JSONL logging to a file, with optional human-readable stderr.
//!
//! The terminal belongs to the picker while it runs, so by default logs only
//! go to `~/.utilhub/logs/utilhub.jsonl`. Set `UTILHUB_LOG_STDERR=1` to add a
//! compact stderr layer (useful with `2>utilhub.log`).
//!
//! # Usage
//!
//! ```rust,ignore
//! use utilhub::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "app_start", "Launcher started");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2026-01-05T10:30:45.123Z","level":"INFO","target":"utilhub::executor::runner","fields":{"event_type":"utility_event","utility":"Utilities/backup.csx","action":"run","duration_ms":4210,"success":true}}
//! ```

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "utilhub.jsonl";

/// Set to any non-empty value to mirror logs to stderr
pub const ENV_LOG_STDERR: &str = "UTILHUB_LOG_STDERR";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize logging.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// A log file that cannot be opened disables the file layer; the launcher
/// still starts.
pub fn init() -> LoggingGuard {
    let log_dir = get_log_dir();
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("[LOGGING] Failed to create log directory: {}", e);
    }
    let log_path = log_dir.join(LOG_FILE_NAME);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| eprintln!("[LOGGING] Failed to open log file: {}", e))
        .ok();

    let (json_layer, file_guard) = match file {
        Some(file) => {
            // Non-blocking so a slow disk never stalls key handling
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking_file)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let stderr_layer = stderr_enabled().then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .compact()
    });

    // Default to info, allow override via RUST_LOG
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .try_init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        "Application logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn stderr_enabled() -> bool {
    std::env::var(ENV_LOG_STDERR)
        .map(|v| !v.is_empty())
        .unwrap_or(false)
}

/// Get the log directory path (~/.utilhub/logs/)
fn get_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".utilhub").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("utilhub-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

// =============================================================================
// STRUCTURED LOGGING HELPERS
// =============================================================================

/// Log the result of a catalog load cycle
pub fn log_catalog_loaded(count: usize, skipped: usize, dirs: usize) {
    tracing::info!(
        event_type = "catalog_loaded",
        count = count,
        skipped = skipped,
        dirs = dirs,
        "Loaded {} utilities ({} skipped) from {} folder(s)",
        count,
        skipped,
        dirs
    );
}

/// Log a utility build/run event with structured fields
pub fn log_utility_event(utility: &str, action: &str, duration_ms: Option<u64>, success: bool) {
    match duration_ms {
        Some(duration) => {
            tracing::info!(
                event_type = "utility_event",
                utility = utility,
                action = action,
                duration_ms = duration,
                success = success,
                "Utility {} {}",
                action,
                utility
            );
        }
        None => {
            tracing::info!(
                event_type = "utility_event",
                utility = utility,
                action = action,
                success = success,
                "Utility {} {}",
                action,
                utility
            );
        }
    }
}

/// Log a menu action chosen by the user
pub fn log_action(action: &str, utility: Option<&str>) {
    tracing::info!(
        event_type = "action",
        action = action,
        utility = utility,
        "Action {} selected",
        action
    );
}
