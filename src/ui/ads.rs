use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::colors::{AD_GOLD, LIVE_RED};
use crate::ui::common::render_panel;

/// Sticky footer banner; the [x] area is stored for the mouse handler.
pub fn render_sticky_ad(f: &mut Frame, app: &mut App, area: Rect) {
    let inner = render_panel(f, area, "", AD_GOLD);

    let line = Line::from(vec![
        Span::styled(" ⚡ ", Style::default().fg(AD_GOLD)),
        Span::styled(
            "HIGH SPEED SERVER — REGISTER NOW",
            Style::default().fg(AD_GOLD).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (a opens, x closes)", Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(line), inner);

    if inner.width >= 4 {
        let close = Rect::new(inner.x + inner.width - 3, inner.y, 3, 1);
        app.area_sticky_close = close;
        f.render_widget(
            Paragraph::new("[x]").style(Style::default().fg(LIVE_RED).add_modifier(Modifier::BOLD)),
            close,
        );
    }
}
