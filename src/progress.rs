//! Library import progress.
//!
//! [`load_library`](crate::library::load_library) emits an
//! [`ImportProgressEvent`] when it starts scanning, after each file and once
//! at the end. Reporters write to stderr only; stdout carries command output.

use serde::Serialize;
use std::fmt;

/// One step of a library import.
///
/// Serializes as a flat JSON object tagged by `event`, e.g.
/// `{"event":"imported","name":"notes.md","n":3,"total":40}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ImportProgressEvent {
    Scanning { root: String },
    /// File `n` of `total` was processed, whether imported or skipped.
    Imported { name: String, n: u64, total: u64 },
    Finished { imported: u64, skipped: u64 },
}

impl fmt::Display for ImportProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportProgressEvent::Scanning { root } => write!(f, "scanning {}", root),
            ImportProgressEvent::Imported { name, n, total } => write!(
                f,
                "[{}/{}] {}",
                format_number(*n),
                format_number(*total),
                name
            ),
            ImportProgressEvent::Finished { imported, skipped } => write!(
                f,
                "imported {} document(s), {} skipped",
                format_number(*imported),
                format_number(*skipped)
            ),
        }
    }
}

pub trait ImportProgressReporter: Send + Sync {
    fn report(&self, event: ImportProgressEvent);
}

/// `qalam: [3/40] notes.md`
pub struct StderrProgress;

impl ImportProgressReporter for StderrProgress {
    fn report(&self, event: ImportProgressEvent) {
        eprintln!("qalam: {}", event);
    }
}

/// JSON lines on stderr.
pub struct JsonProgress;

impl ImportProgressReporter for JsonProgress {
    fn report(&self, event: ImportProgressEvent) {
        if let Ok(line) = serde_json::to_string(&event) {
            eprintln!("{}", line);
        }
    }
}

pub struct NoProgress;

impl ImportProgressReporter for NoProgress {
    fn report(&self, _event: ImportProgressEvent) {}
}

/// `1234567` → `"1,234,567"`.
pub(crate) fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Value of the global `--progress` flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// `Human` when stderr is a terminal, `Off` when it is piped.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    pub fn reporter(&self) -> Box<dyn ImportProgressReporter> {
        match self {
            ProgressMode::Off => Box::new(NoProgress),
            ProgressMode::Human => Box::new(StderrProgress),
            ProgressMode::Json => Box::new(JsonProgress),
        }
    }
}
