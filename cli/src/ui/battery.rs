use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;

/// Battery gauge color by charge level.
fn color_for_percent(percent: u8) -> Color {
    match percent {
        p if p >= 50 => Color::Green,
        p if p >= 20 => Color::Yellow,
        _ => Color::Red,
    }
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Battery ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    match app.battery.current_percent() {
        Some(percent) => {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color_for_percent(percent)))
                .ratio(f64::from(percent) / 100.0)
                .label(format!("{}%", percent))
                .use_unicode(true);
            frame.render_widget(gauge, chunks[0]);
        }
        None => {
            let waiting = Paragraph::new("Battery: N/A (waiting for first reading)")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(waiting, chunks[0]);
        }
    }

    let sensor = Paragraph::new(format!("sensor: {}", app.battery.sensor_name()))
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sensor, chunks[1]);
}
