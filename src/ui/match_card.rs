use chrono::TimeZone;
use chrono_tz::Tz;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::str::FromStr;

use crate::app::App;
use crate::status::MatchStatus;
use crate::ui::colors::{LIVE_RED, PITCH_GREEN, TEXT_DIM, UPCOMING_AMBER};
use crate::ui::common::render_panel;

fn badge(status: MatchStatus) -> Span<'static> {
    let (label, bg) = match status {
        MatchStatus::Live => (" LIVE ", LIVE_RED),
        MatchStatus::Upcoming => (" UPCOMING ", UPCOMING_AMBER),
        MatchStatus::Finished => (" FINISHED ", TEXT_DIM),
        MatchStatus::Error => (" ERROR ", TEXT_DIM),
    };
    Span::styled(
        label,
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn render_match_card(f: &mut Frame, app: &App, area: Rect) {
    let inner = render_panel(f, area, " // MATCH_FEED ", PITCH_GREEN);

    let Some(event) = &app.event else {
        let p = Paragraph::new("Resolving match...")
            .style(Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC));
        f.render_widget(p, inner);
        return;
    };

    let mut lines = Vec::new();

    let mut title_spans = vec![Span::styled(
        event.match_name.clone(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    title_spans.push(Span::raw("  "));
    if let Some(status) = app.status {
        title_spans.push(badge(status));
    }
    lines.push(Line::from(title_spans));

    lines.push(Line::from(vec![
        Span::styled(event.tournament.clone(), Style::default().fg(TEXT_DIM)),
        Span::styled(
            format!("  ({})", event.sport),
            Style::default().fg(TEXT_DIM),
        ),
    ]));

    let kickoff = match event.start_seconds() {
        Ok(secs) => {
            let tz_str = app.config.get_user_timezone();
            let user_tz: Tz = Tz::from_str(&tz_str).unwrap_or(chrono_tz::UTC);
            user_tz
                .timestamp_opt(secs, 0)
                .single()
                .map(|dt| dt.format("%a, %b %-d, %-I:%M %p").to_string())
                .unwrap_or_else(|| "unknown".to_string())
        }
        Err(_) => "unknown".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("KICKOFF: ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(kickoff, Style::default().fg(PITCH_GREEN)),
    ]));

    let p = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(p, inner);
}
