use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::VERSION;

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1])[1]
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<8}", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ])
}

pub fn render(frame: &mut Frame) {
    let area = centered_rect(46, 12, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" voltlog v{} help ", VERSION))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines = vec![
        Line::from(""),
        Line::from("Logs battery % only when it changes.").alignment(Alignment::Center),
        Line::from(""),
        key_line("r / space", "start or stop recording"),
        key_line("e", "export logged points to CSV"),
        key_line("?", "toggle this help"),
        key_line("q / Esc", "quit"),
        Line::from(""),
        Line::from("CSV files land in the export dir.").alignment(Alignment::Center),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
