use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Bordered panel with the title embedded in the top edge; returns the inner
/// drawing area.
pub fn render_panel(f: &mut Frame, area: Rect, title: &str, border_color: Color) -> Rect {
    use ratatui::symbols::border;
    use ratatui::widgets::{Block, Borders};

    let clean_title = title.trim().trim_matches('/').trim();

    let block = if !clean_title.is_empty() {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(vec![Span::styled(
                format!(" {} ", clean_title),
                Style::default().fg(border_color).add_modifier(Modifier::BOLD),
            )]))
    } else {
        Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color))
    };

    let inner = block.inner(area);
    f.render_widget(block, area);
    inner
}

/// A centered sub-rectangle, clipped to the parent.
pub fn centered_rect(width: u16, height: u16, parent: Rect) -> Rect {
    let w = width.min(parent.width);
    let h = height.min(parent.height);
    Rect::new(
        parent.x + (parent.width - w) / 2,
        parent.y + (parent.height - h) / 2,
        w,
        h,
    )
}
