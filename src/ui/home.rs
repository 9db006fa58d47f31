use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::colors::{DARK_GREEN, LIVE_RED, PITCH_GREEN, TEXT_DIM};
use crate::ui::common::{centered_rect, render_panel};

pub fn render_home(f: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect(72, 9, area);
    let inner = render_panel(f, card, " // MATCHDAY ", PITCH_GREEN);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let prompt = Paragraph::new("Paste a watch link (or its ?id=..&stream=.. query) and press Enter")
        .style(Style::default().fg(TEXT_DIM));
    f.render_widget(prompt, rows[0]);

    let input_area = rows[2];
    let input_inner = render_panel(f, input_area, "", DARK_GREEN);
    let value = app.link_input.value();
    let scroll = app.link_input.visual_scroll(input_inner.width.max(1) as usize);
    let input = Paragraph::new(value)
        .style(Style::default().fg(PITCH_GREEN))
        .scroll((0, scroll as u16));
    f.render_widget(input, input_inner);
    let cursor_x = input_inner.x
        + (app.link_input.visual_cursor().saturating_sub(scroll)) as u16;
    f.set_cursor_position((cursor_x.min(input_inner.right().saturating_sub(1)), input_inner.y));

    if let Some(err) = &app.home_error {
        let line = Line::from(vec![
            Span::styled("✗ ", Style::default().fg(LIVE_RED).add_modifier(Modifier::BOLD)),
            Span::styled(err.clone(), Style::default().fg(LIVE_RED)),
        ]);
        f.render_widget(Paragraph::new(line), rows[3]);
    } else {
        let hint = Paragraph::new("Esc quits")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, rows[3]);
    }
}
