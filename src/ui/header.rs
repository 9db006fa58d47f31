use chrono::Utc;
use chrono_tz::Tz;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::str::FromStr;

use crate::app::App;
use crate::ui::colors::{BRIGHT_GREEN, DARK_GREEN, PITCH_GREEN, TEXT_DIM};

pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    let mut spans = vec![Span::styled(
        " // MATCHDAY_UPLINK",
        Style::default().fg(PITCH_GREEN).add_modifier(Modifier::BOLD),
    )];
    if app.from_cache {
        spans.push(Span::styled("  [CACHED]", Style::default().fg(TEXT_DIM)));
    }
    let masthead = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(DARK_GREEN)),
    );
    f.render_widget(masthead, chunks[0]);

    let tz_str = app.config.get_user_timezone();
    let user_tz: Tz = Tz::from_str(&tz_str).unwrap_or(chrono_tz::UTC);
    let now = Utc::now().with_timezone(&user_tz);
    let mut right = now.format("%I:%M:%S %p %Z").to_string();
    if let Some(country) = &app.country {
        right = format!("{} | {}", country, right);
    }

    let clock = Paragraph::new(right)
        .alignment(Alignment::Right)
        .style(Style::default().fg(BRIGHT_GREEN))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(DARK_GREEN)),
        );
    f.render_widget(clock, chunks[1]);
}
