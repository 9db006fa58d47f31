use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::status::CountdownParts;
use crate::ui::colors::{BRIGHT_GREEN, DARK_GREEN, UPCOMING_AMBER};
use crate::ui::common::render_panel;

/// Four unit boxes, recomputed from the deadline on every draw; the
/// one-second timer only forces redraws.
pub fn render_countdown(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let now = chrono::Utc::now().timestamp();
    let Some(remaining) = session.countdown_remaining(now) else {
        return;
    };
    let parts = CountdownParts::from_remaining(remaining);

    let inner = render_panel(f, area, " // KICKOFF_IN ", UPCOMING_AMBER);
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(inner);

    for (slot, (label, value)) in boxes.iter().zip(parts.units()) {
        let cell = render_panel(f, *slot, label, DARK_GREEN);
        let digits = Paragraph::new(format!("{:02}", value))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(BRIGHT_GREEN)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(digits, cell);
    }
}
