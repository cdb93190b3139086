use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::input::keys;

fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Black)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {}  ", label)),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(40), Constraint::Min(10)])
        .split(inner);

    let record_label = if app.session.is_active() {
        "stop"
    } else {
        "record"
    };
    let mut spans = Vec::new();
    spans.extend(key_hint(keys::RECORD, record_label));
    spans.extend(key_hint(keys::EXPORT, "export"));
    spans.extend(key_hint(keys::HELP, "help"));
    spans.extend(key_hint(keys::QUIT, "quit"));
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let status = Paragraph::new(format!("Status: {}", app.status))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(status, chunks[1]);
}
