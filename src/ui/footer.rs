use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, CurrentScreen, InputMode};
use crate::ui::colors::BRIGHT_GREEN;

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::default()
        .fg(ratatui::style::Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(ratatui::style::Color::White);

    let mut spans = vec![
        Span::styled(" q ", key_style),
        Span::styled("Quit  ", label_style),
        Span::styled(" Esc ", key_style),
        Span::styled("Back  ", label_style),
    ];

    if app.input_mode() == InputMode::Editing {
        spans.push(Span::styled(" Enter ", key_style));
        spans.push(Span::styled("Open Link", label_style));
    } else if app.current_screen == CurrentScreen::Watch {
        spans.extend([
            Span::styled(" ↑↓ ", key_style),
            Span::styled("Channel  ", label_style),
            Span::styled(" Enter ", key_style),
            Span::styled("Switch  ", label_style),
            Span::styled(" y ", key_style),
            Span::styled("Copy Link  ", label_style),
            Span::styled(" r ", key_style),
            Span::styled("Refresh  ", label_style),
            Span::styled(" PgUp/PgDn ", key_style),
            Span::styled("Scroll  ", label_style),
            Span::styled(" h ", key_style),
            Span::styled("Help", label_style),
        ]);
    }

    let left = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    f.render_widget(left, area);

    if let Some(notice) = &app.notice {
        let right = Paragraph::new(Span::styled(
            format!("{} ", notice),
            Style::default().fg(BRIGHT_GREEN).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right);
        f.render_widget(right, area);
    }
}
