use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Recording ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let state_span = if app.session.is_active() {
        Span::styled(
            "● Recording",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("○ Idle", Style::default().fg(Color::DarkGray))
    };

    let last_logged = match app.session.last_entry() {
        Some(entry) => format!("{}% at {}", entry.level, entry.formatted_time()),
        None => "-".to_string(),
    };

    let lines = vec![
        Line::from(state_span),
        Line::from(format!("Data points logged: {}", app.session.len())),
        Line::from(format!("Last logged: {}", last_logged)),
        Line::from(format!("Export dir: {}", app.export_dir().display())),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
