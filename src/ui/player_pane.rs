use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{clamp_float_pos, App, FLOAT_H, FLOAT_W};
use crate::channels::ChannelState;
use crate::ui::colors::{AD_GOLD, BRIGHT_GREEN, LIVE_RED, PITCH_GREEN, TEXT_DIM};
use crate::ui::common::render_panel;

fn playing_name(app: &App) -> String {
    app.channels
        .iter()
        .find(|c| c.state == ChannelState::Running)
        .map(|c| c.name.clone())
        .or_else(|| {
            app.session
                .as_ref()
                .map(|s| s.request.stream_url.clone())
        })
        .unwrap_or_default()
}

fn player_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled("NOW PLAYING: ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(playing_name(app), Style::default().fg(PITCH_GREEN)),
    ])];

    if let Some(err) = &app.player_error {
        lines.push(Line::from(Span::styled(
            format!("✗ {}", err),
            Style::default().fg(LIVE_RED),
        )));
    } else if app.switching_to.is_some() {
        lines.push(Line::from(Span::styled(
            "⟳ switching channel...",
            Style::default().fg(AD_GOLD).add_modifier(Modifier::ITALIC),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "▶ streaming via mpv",
            Style::default().fg(BRIGHT_GREEN),
        )));
    }
    lines
}

pub fn render_docked(f: &mut Frame, app: &mut App, area: Rect) {
    let inner = render_panel(f, area, " // STREAM_PLAYER ", PITCH_GREEN);
    app.area_player = inner;

    let mut lines = player_lines(app);

    let overlay_up = app.config.show_ads
        && app.affiliate_link().is_some()
        && app
            .session
            .as_ref()
            .map_or(false, |s| s.overlay_ad_visible);
    if overlay_up {
        lines.push(Line::from(vec![
            Span::styled("⚡ SPONSOR ", Style::default().fg(Color::Black).bg(AD_GOLD).add_modifier(Modifier::BOLD)),
            Span::styled(
                " High Speed Server — press a (or click) to open",
                Style::default().fg(AD_GOLD),
            ),
        ]));
    }

    let p = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(p, inner);
}

/// The floating picture-in-picture box, drawn over everything at the dragged
/// position.
pub fn render_floating(f: &mut Frame, app: &mut App) {
    let frame = app.frame_area;
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let (x, y) = clamp_float_pos(
        session.floating.pos.0 as i32,
        session.floating.pos.1 as i32,
        frame,
    );
    let area = Rect::new(x, y, FLOAT_W.min(frame.width), FLOAT_H.min(frame.height));
    app.area_floating = area;

    f.render_widget(Clear, area);
    let inner = render_panel(f, area, " ⠿ STREAM_PIP ", BRIGHT_GREEN);

    // Close control in the top border, matched by the mouse hit test.
    if area.width >= 5 {
        let close = Rect::new(area.x + area.width - 4, area.y, 3, 1);
        f.render_widget(
            Paragraph::new("[x]").style(Style::default().fg(LIVE_RED).add_modifier(Modifier::BOLD)),
            close,
        );
    }

    let mut lines = player_lines(app);
    lines.push(Line::from(Span::styled(
        "drag to move · f closes",
        Style::default().fg(TEXT_DIM),
    )));
    let p = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(p, inner);
}
