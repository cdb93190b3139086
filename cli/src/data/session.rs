//! Recording session state and change-detection.
//!
//! A session collects one `LogEntry` per observed battery level *change*.
//! Two consecutive entries never share the same level; identical readings
//! between the two are dropped on the floor.

use chrono::NaiveTime;
use tracing::{debug, info};

/// One recorded battery level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry {
    pub time: NaiveTime,
    pub level: u8,
}

impl LogEntry {
    pub fn new(time: NaiveTime, level: u8) -> Self {
        Self { time, level }
    }

    /// Timestamp rendered as `HH:MM:SS`, the format used in exports.
    pub fn formatted_time(&self) -> String {
        self.time.format("%H:%M:%S").to_string()
    }
}

/// Mutable recording state spanning one start/stop cycle.
///
/// Entries only grow while the session is active. Starting a new recording
/// discards the previous session's entries; stopping leaves them readable
/// for export.
#[derive(Debug, Default)]
pub struct RecordingSession {
    active: bool,
    last_level: Option<u8>,
    entries: Vec<LogEntry>,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_entry(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    /// Begin a new recording, discarding any previous session's entries.
    ///
    /// Resetting `last_level` here means the first reading after a restart
    /// is always logged, even if it equals the last level before the stop.
    pub fn start(&mut self) {
        self.active = true;
        self.last_level = None;
        self.entries.clear();
        info!("Recording started");
    }

    /// Stop recording. Entries are kept so they can still be exported.
    pub fn stop(&mut self) {
        self.active = false;
        info!(points = self.entries.len(), "Recording stopped");
    }

    /// Feed one sensor reading into the session.
    ///
    /// Appends a new entry when the session is active and the level differs
    /// from the previously recorded one (or nothing has been recorded yet).
    /// Returns the appended entry, or `None` when nothing was logged.
    pub fn observe(&mut self, level: u8, at: NaiveTime) -> Option<&LogEntry> {
        if !self.active {
            return None;
        }

        if self.last_level == Some(level) {
            return None;
        }

        let entry = LogEntry::new(at, level);
        self.entries.push(entry);
        self.last_level = Some(level);
        debug!(level, time = %entry.formatted_time(), "Logged battery change");
        self.entries.last()
    }
}
