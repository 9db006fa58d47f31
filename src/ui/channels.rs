use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::channels::ChannelState;
use crate::ui::colors::{AD_GOLD, BRIGHT_GREEN, PITCH_GREEN, TEXT_DIM, UPCOMING_AMBER};
use crate::ui::common::render_panel;

pub fn render_channels(f: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" // ALT_CHANNELS ({}) ", app.channels.len());
    let inner = render_panel(f, area, &title, PITCH_GREEN);

    let show_ad = app.config.show_ads && app.affiliate_link().is_some();
    let (ad_area, list_area) = if show_ad && inner.height > 1 {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        (Some(rows[0]), rows[1])
    } else {
        (None, inner)
    };

    // In-feed sponsor row ahead of the real channels.
    if let Some(ad) = ad_area {
        app.area_infeed_ad = ad;
        let line = Line::from(vec![
            Span::styled(" ★ REC ", Style::default().fg(Color::Black).bg(AD_GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(" High Speed Server", Style::default().fg(AD_GOLD).add_modifier(Modifier::BOLD)),
            Span::styled("  [Watch]", Style::default().fg(AD_GOLD)),
        ]);
        f.render_widget(Paragraph::new(line), ad);
    } else {
        app.area_infeed_ad = Rect::default();
    }

    app.area_channels = list_area;

    if app.channels.is_empty() {
        let placeholder = if app.loading {
            "Scanning for channels..."
        } else {
            "No alternate channels for this match."
        };
        let p = Paragraph::new(placeholder)
            .style(Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC));
        f.render_widget(p, list_area);
        return;
    }

    let items: Vec<ListItem> = app
        .channels
        .iter()
        .map(|view| {
            let (name_style, label_style) = match view.state {
                ChannelState::Running => (
                    Style::default().fg(BRIGHT_GREEN).add_modifier(Modifier::BOLD),
                    Style::default().fg(BRIGHT_GREEN).add_modifier(Modifier::BOLD),
                ),
                ChannelState::Switching => (
                    Style::default().fg(UPCOMING_AMBER),
                    Style::default().fg(UPCOMING_AMBER).add_modifier(Modifier::ITALIC),
                ),
                ChannelState::Idle => (
                    Style::default().fg(Color::White),
                    Style::default().fg(TEXT_DIM),
                ),
            };
            ListItem::new(Line::from(vec![
                Span::styled("⏵ ", Style::default().fg(PITCH_GREEN)),
                Span::styled(view.name.clone(), name_style),
                Span::styled(
                    format!("  [{}]", view.state.button_label()),
                    label_style,
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(PITCH_GREEN)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" » ");

    f.render_stateful_widget(list, list_area, &mut app.channel_list_state);
}
