//! Application core module.
//!
//! Holds the `App` struct driving the sample-on-tick loop: read the sensor,
//! feed the recording session, and expose display state for the UI.

mod actions;
mod tui;
pub mod types;

pub use tui::run_tui;
pub use types::{Action, AppView, MAX_TICK_MS, MIN_TICK_MS};

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info, warn};

use crate::config::UserConfig;
use crate::data::{BatteryData, RecordingSession};

/// Main application state for the TUI.
pub struct App {
    pub view: AppView,
    pub battery: BatteryData,
    pub session: RecordingSession,
    pub status: String,
    pub tick_ms: u64,
    export_dir: PathBuf,
    tick_count: u64,
}

impl App {
    pub fn new(config: UserConfig) -> Self {
        let battery = BatteryData::new(config.simulate);
        Self::with_battery(config, battery)
    }

    /// Build an app around an existing sensor wrapper. Tests use this to
    /// inject scripted readings.
    pub fn with_battery(config: UserConfig, battery: BatteryData) -> Self {
        let tick_ms = config.tick_ms.clamp(MIN_TICK_MS, MAX_TICK_MS);
        let export_dir = config.resolve_export_dir();
        info!(
            tick_ms,
            sensor = battery.sensor_name(),
            export_dir = %export_dir.display(),
            "Initializing app"
        );

        Self {
            view: AppView::default(),
            battery,
            session: RecordingSession::new(),
            status: "Idle".to_string(),
            tick_ms,
            export_dir,
            tick_count: 0,
        }
    }

    /// Performs a single tick: poll the sensor once and, while recording,
    /// log the reading if the level changed.
    ///
    /// Returns `true` when the display needs a redraw. A failed sensor read
    /// skips the sample and leaves all recording state untouched.
    pub fn tick(&mut self) -> bool {
        self.tick_count = self.tick_count.wrapping_add(1);

        match self.battery.refresh() {
            Ok(level) => {
                if self.session.is_active() {
                    if let Some(entry) = self.session.observe(level, Local::now().time()) {
                        self.status =
                            format!("Logged {}% at {}", entry.level, entry.formatted_time());
                    }
                }
                debug!(
                    level,
                    recording = self.session.is_active(),
                    points = self.session.len(),
                    tick_count = self.tick_count,
                    "Tick completed"
                );
                true
            }
            Err(e) => {
                warn!(error = %e, "Battery read failed, skipping sample");
                false
            }
        }
    }

    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use voltlog_platform::{BatterySensor, SensorError};

    /// Sensor that replays a fixed list of readings; `None` means the
    /// battery could not be read on that tick.
    struct ScriptedSensor {
        readings: Vec<Option<u8>>,
        index: usize,
    }

    impl ScriptedSensor {
        fn new(readings: Vec<Option<u8>>) -> Self {
            Self { readings, index: 0 }
        }
    }

    impl BatterySensor for ScriptedSensor {
        fn read(&mut self) -> Result<u8, SensorError> {
            let reading = self.readings.get(self.index).copied().flatten();
            self.index += 1;
            reading.ok_or(SensorError::NoBattery)
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    fn app_with_readings(readings: Vec<Option<u8>>) -> App {
        let battery = BatteryData::with_sensor(Box::new(ScriptedSensor::new(readings)));
        App::with_battery(UserConfig::default(), battery)
    }

    #[test]
    fn test_tick_logs_only_changes() {
        let mut app = app_with_readings(vec![Some(80), Some(80), Some(79), Some(79), Some(80)]);
        app.handle_action(Action::ToggleRecording);

        for _ in 0..5 {
            app.tick();
        }

        let levels: Vec<u8> = app.session.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![80, 79, 80]);
    }

    #[test]
    fn test_failed_read_leaves_state_untouched() {
        let mut app = app_with_readings(vec![Some(60), None, Some(60)]);
        app.handle_action(Action::ToggleRecording);

        app.tick();
        assert_eq!(app.session.len(), 1);
        assert_eq!(app.battery.current_percent(), Some(60));

        let redraw = app.tick();
        assert!(!redraw);
        assert_eq!(app.session.len(), 1);
        assert_eq!(app.battery.current_percent(), Some(60));
        assert!(app.session.is_active());

        // Duplicate level after the failed tick is still deduplicated.
        app.tick();
        assert_eq!(app.session.len(), 1);
    }

    #[test]
    fn test_idle_ticks_update_display_only() {
        let mut app = app_with_readings(vec![Some(42), Some(41)]);

        app.tick();
        app.tick();

        assert_eq!(app.battery.current_percent(), Some(41));
        assert!(app.session.is_empty());
    }

    #[test]
    fn test_toggle_recording_updates_status() {
        let mut app = app_with_readings(vec![Some(90), Some(89)]);

        app.handle_action(Action::ToggleRecording);
        assert!(app.session.is_active());
        assert_eq!(app.status, "Recording started");

        app.tick();
        app.tick();

        app.handle_action(Action::ToggleRecording);
        assert!(!app.session.is_active());
        assert_eq!(app.status, "Recording stopped (2 points logged)");
    }

    #[test]
    fn test_export_empty_session_reports_no_data() {
        let mut app = app_with_readings(vec![]);

        app.handle_action(Action::Export);

        assert_eq!(app.status, "No data to export!");
    }

    #[test]
    fn test_export_writes_file_and_reports_name() {
        let dir = tempfile::tempdir().unwrap();
        let config = UserConfig {
            export_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let battery = BatteryData::with_sensor(Box::new(ScriptedSensor::new(vec![
            Some(70),
            Some(69),
        ])));
        let mut app = App::with_battery(config, battery);

        app.handle_action(Action::ToggleRecording);
        app.tick();
        app.tick();
        app.handle_action(Action::Export);

        assert!(app.status.starts_with("Exported to phone_battery_"));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
        assert_eq!(app.session.len(), 2);
    }

    #[test]
    fn test_settings_are_applied_at_construction() {
        let dir = tempfile::tempdir().unwrap();
        let config = UserConfig {
            tick_ms: 1,
            export_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let battery = BatteryData::with_sensor(Box::new(ScriptedSensor::new(vec![])));
        let app = App::with_battery(config, battery);

        assert_eq!(app.tick_ms, MIN_TICK_MS);
        assert_eq!(app.export_dir().as_path(), dir.path());
    }

    #[test]
    fn test_quit_action_returns_false() {
        let mut app = app_with_readings(vec![]);
        assert!(!app.handle_action(Action::Quit));
        assert!(app.handle_action(Action::None));
    }
}
