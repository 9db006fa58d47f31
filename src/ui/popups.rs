use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::errors::WatchError;
use crate::ui::colors::{DARK_GREEN, LIVE_RED, PITCH_GREEN, TEXT_DIM};
use crate::ui::common::{centered_rect, render_panel};

/// The full-page error card: everything else on the page is gone.
pub fn render_error_page(f: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect(60, 8, area);
    let inner = render_panel(f, card, " // SIGNAL_LOST ", LIVE_RED);

    let (title, message) = match &app.error {
        Some(err) => (err.title().to_string(), err.message()),
        None => (
            "Error".to_string(),
            WatchError::MissingParameter("id").message(),
        ),
    };

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(LIVE_RED).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "r retry · Esc home · q quit",
            Style::default().fg(TEXT_DIM),
        )),
    ];

    let p = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(p, inner);
}

pub fn render_help(f: &mut Frame, area: Rect) {
    let card = centered_rect(52, 14, area);
    f.render_widget(Clear, card);
    let inner = render_panel(f, card, " // KEYMAP ", PITCH_GREEN);

    let entries = [
        ("Enter", "switch to the selected channel"),
        ("↑/↓ or j/k", "move through channels"),
        ("y", "copy the selected channel's share link"),
        ("o", "open the current stream in the browser"),
        ("r", "refresh the schedule (skips the cache)"),
        ("PgUp/PgDn", "scroll the page"),
        ("f", "close the floating player"),
        ("a", "open the sponsor link"),
        ("x", "close the sticky banner"),
        ("Esc", "back to the link prompt"),
        ("q", "quit"),
    ];

    let lines: Vec<Line> = entries
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(
                    format!(" {:>10} ", key),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*what, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

pub fn render_loading(f: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect(40, 3, area);
    f.render_widget(Clear, card);
    let inner = render_panel(f, card, "", DARK_GREEN);

    let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];
    let spinner = frames[(app.loading_tick as usize) % frames.len()];
    let p = Paragraph::new(format!("{} SYNCING SCHEDULE...", spinner))
        .alignment(Alignment::Center)
        .style(Style::default().fg(PITCH_GREEN).add_modifier(Modifier::BOLD));
    f.render_widget(p, inner);
}
