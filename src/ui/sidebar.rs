use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::colors::{AD_GOLD, BRIGHT_GREEN, DARK_GREEN, PITCH_GREEN, TEXT_DIM};
use crate::ui::common::render_panel;

pub fn render_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let promo = app.config.show_ads && app.affiliate_link().is_some();
    let rows = if promo {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(area)
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6)])
            .split(area)
    };

    render_discord_pane(f, app, rows[0]);
    if promo {
        render_promo_pane(f, app, rows[1]);
    }
}

/// Widget failure hides this pane; nothing else on the page reacts.
fn render_discord_pane(f: &mut Frame, app: &App, area: Rect) {
    if app.widget_hidden {
        return;
    }

    let inner = render_panel(f, area, " // DISCORD_LOUNGE ", PITCH_GREEN);

    let Some(widget) = &app.widget else {
        let p = Paragraph::new("Calling the lounge...")
            .style(Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC));
        f.render_widget(p, inner);
        return;
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("● ", Style::default().fg(BRIGHT_GREEN)),
        Span::styled(
            format!("{} ONLINE", widget.online_display()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(invite) = &widget.instant_invite {
        lines.push(Line::from(vec![
            Span::styled("JOIN: ", Style::default().fg(Color::White)),
            Span::styled(invite.clone(), Style::default().fg(Color::Cyan)),
        ]));
    }

    if !widget.members.is_empty() {
        lines.push(Line::from(""));
        for member in widget.top_members(5) {
            lines.push(Line::from(vec![
                Span::styled(" • ", Style::default().fg(DARK_GREEN)),
                Span::styled(member.username.clone(), Style::default().fg(PITCH_GREEN)),
            ]));
        }
    }

    let p = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(p, inner);
}

fn render_promo_pane(f: &mut Frame, app: &App, area: Rect) {
    let inner = render_panel(f, area, " // SPONSOR ", AD_GOLD);
    let link = app.affiliate_link().unwrap_or_default().to_string();
    let lines = vec![
        Line::from(Span::styled(
            "High Speed Server",
            Style::default().fg(AD_GOLD).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(link, Style::default().fg(TEXT_DIM))),
        Line::from(Span::styled("press a to open", Style::default().fg(TEXT_DIM))),
    ];
    let p = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(p, inner);
}
