//! Core types and constants for the TUI application.

/// Minimum sampling interval in milliseconds.
pub const MIN_TICK_MS: u64 = 100;

/// Maximum sampling interval in milliseconds.
pub const MAX_TICK_MS: u64 = 60_000;

/// Actions that can be performed in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleRecording,
    Export,
    ToggleHelp,
    None,
}

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    #[default]
    Main,
    Help,
}
