pub mod battery;
pub mod export;
pub mod session;

pub use battery::BatteryData;
pub use export::{export_csv, ExportError, ExportOutcome};
pub use session::{LogEntry, RecordingSession};
