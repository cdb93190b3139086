mod battery;
mod help;
mod session;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, AppView};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Min(6),
            Constraint::Length(3),
        ])
        .split(frame.area());

    battery::render(frame, chunks[0], app);
    session::render(frame, chunks[1], app);
    status_bar::render(frame, chunks[2], app);

    if app.view == AppView::Help {
        help::render(frame);
    }
}
