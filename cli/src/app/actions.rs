//! Action handling methods for App.

use chrono::Local;
use tracing::info;

use crate::data::{export_csv, ExportOutcome};

use super::types::{Action, AppView};
use super::App;

impl App {
    /// Process one user action.
    ///
    /// Returns `false` if the application should quit, `true` otherwise.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return false,
            Action::None => {}
            Action::ToggleHelp => {
                self.view = match self.view {
                    AppView::Help => AppView::Main,
                    _ => AppView::Help,
                };
            }
            Action::ToggleRecording => self.toggle_recording(),
            Action::Export => self.export(),
        }
        true
    }

    fn toggle_recording(&mut self) {
        if self.session.is_active() {
            self.session.stop();
            self.status = format!("Recording stopped ({} points logged)", self.session.len());
        } else {
            self.session.start();
            self.status = "Recording started".to_string();
        }
    }

    fn export(&mut self) {
        match export_csv(self.session.entries(), &self.export_dir, Local::now()) {
            Ok(ExportOutcome::Written(path)) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                info!(path = %path.display(), "Export completed");
                self.status = format!("Exported to {}", name);
            }
            Ok(ExportOutcome::NothingToExport) => {
                self.status = "No data to export!".to_string();
            }
            Err(e) => {
                self.status = format!("Export failed - {}", e);
            }
        }
    }
}
