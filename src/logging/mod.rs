// Logging module - subscriber setup and in-memory capture for the log strip
//
// While the TUI owns the terminal, anything written to stdout/stderr would
// garble the alternate screen. `TuiLogLayer` captures tracing events into a
// bounded ring buffer instead; the TUI renders the most recent lines.

use crate::config::{LogRotation, LoggingConfig};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Maximum number of log entries kept in memory
const MAX_LOG_ENTRIES: usize = 500;

/// A single captured log line
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub message: String,
}

impl LogEntry {
    /// `HH:MM:SS LEVEL message`
    pub fn display_line(&self) -> String {
        format!(
            "{} {:5} {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.as_str(),
            self.message
        )
    }
}

/// Shared ring buffer of captured log entries
#[derive(Clone, Default)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, evicting the oldest when full
    pub fn push(&self, entry: LogEntry) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The `count` most recent entries, oldest first
    pub fn recent(&self, count: usize) -> Vec<LogEntry> {
        let Ok(entries) = self.entries.lock() else {
            return Vec::new();
        };
        let skip = entries.len().saturating_sub(count);
        entries.iter().skip(skip).cloned().collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

/// Tracing layer that records events into a [`LogBuffer`]
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        self.buffer.push(LogEntry {
            timestamp: Local::now(),
            level: *event.metadata().level(),
            message: visitor.finish(),
        });
    }
}

/// Collects the `message` field plus any structured fields as `key=value`
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// Install the global subscriber
///
/// - TUI mode: events go to `buffer` (the log strip)
/// - Headless mode: events go to stderr, keeping stdout for the snapshot
/// - File logging (optional): JSON lines through a rotating non-blocking writer
///
/// Precedence: RUST_LOG env var > config level. The returned guard must be
/// kept alive for the duration of the program to ensure file logs flush.
pub fn init(config: &LoggingConfig, enable_tui: bool, buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("docfinder={}", config.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let tui_layer = enable_tui.then(|| TuiLogLayer::new(buffer.clone()));
    let stderr_layer =
        (!enable_tui).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let (file_layer, guard) = match file_writer(config) {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tui_layer)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Rolling file writer, if file logging is enabled and the directory is usable
fn file_writer(config: &LoggingConfig) -> Option<(NonBlocking, WorkerGuard)> {
    if !config.file_enabled {
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        return None;
    }

    let appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    };

    Some(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Local::now(),
            level: Level::INFO,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_is_bounded() {
        let buffer = LogBuffer::new();
        for i in 0..(MAX_LOG_ENTRIES + 10) {
            buffer.push(entry(&i.to_string()));
        }
        assert_eq!(buffer.len(), MAX_LOG_ENTRIES);
        let recent = buffer.recent(2);
        assert_eq!(recent[0].message, (MAX_LOG_ENTRIES + 8).to_string());
        assert_eq!(recent[1].message, (MAX_LOG_ENTRIES + 9).to_string());
    }

    #[test]
    fn test_recent_with_fewer_entries() {
        let buffer = LogBuffer::new();
        buffer.push(entry("only"));
        assert_eq!(buffer.recent(5).len(), 1);
    }

    #[test]
    fn test_layer_captures_message_and_fields() {
        let buffer = LogBuffer::new();
        let subscriber = tracing_subscriber::registry().with(TuiLogLayer::new(buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(count = 3, "Loaded doctors");
        });

        let recent = buffer.recent(1);
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].level, Level::WARN);
        assert_eq!(recent[0].message, "Loaded doctors count=3");
        assert!(recent[0].display_line().contains("WARN"));
    }

    #[test]
    fn test_file_writer_disabled() {
        let config = LoggingConfig::default();
        assert!(file_writer(&config).is_none());
    }

    #[test]
    fn test_file_writer_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file_enabled: true,
            file_dir: dir.path().join("nested"),
            file_rotation: LogRotation::Never,
            ..LoggingConfig::default()
        };

        let writer = file_writer(&config);
        assert!(writer.is_some());
        assert!(dir.path().join("nested").is_dir());
    }
}
