use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Action, App, AppView};

pub mod keys {
    pub const RECORD: &str = "r";
    pub const EXPORT: &str = "e";
    pub const HELP: &str = "?";
    pub const QUIT: &str = "q";
}

pub fn handle_key(app: &App, key: KeyEvent) -> Action {
    match app.view {
        AppView::Main => handle_main_keys(key),
        AppView::Help => handle_help_keys(key),
    }
}

fn handle_main_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('?') | KeyCode::Char('/') => Action::ToggleHelp,
        KeyCode::Char('r') | KeyCode::Char(' ') => Action::ToggleRecording,
        KeyCode::Char('e') => Action::Export,
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::UserConfig;
    use crate::data::BatteryData;
    use voltlog_platform::SimulatedSensor;

    fn test_app() -> App {
        let battery = BatteryData::with_sensor(Box::new(SimulatedSensor::new()));
        App::with_battery(UserConfig::default(), battery)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_main_keybindings() {
        let app = test_app();

        assert_eq!(handle_key(&app, press(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key(&app, press(KeyCode::Char('r'))),
            Action::ToggleRecording
        );
        assert_eq!(
            handle_key(&app, press(KeyCode::Char(' '))),
            Action::ToggleRecording
        );
        assert_eq!(handle_key(&app, press(KeyCode::Char('e'))), Action::Export);
        assert_eq!(
            handle_key(&app, press(KeyCode::Char('?'))),
            Action::ToggleHelp
        );
        assert_eq!(handle_key(&app, press(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_help_view_swallows_main_keys() {
        let mut app = test_app();
        app.handle_action(Action::ToggleHelp);

        assert_eq!(handle_key(&app, press(KeyCode::Char('e'))), Action::None);
        assert_eq!(handle_key(&app, press(KeyCode::Esc)), Action::ToggleHelp);
    }
}
