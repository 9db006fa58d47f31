pub mod ads;
pub mod channels;
pub mod colors;
pub mod common;
pub mod countdown;
pub mod footer;
pub mod header;
pub mod home;
pub mod match_card;
pub mod player_pane;
pub mod popups;
pub mod sidebar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, CurrentScreen};
use crate::status::MatchStatus;

pub fn ui(f: &mut Frame, app: &mut App) {
    let area = f.area();
    app.frame_area = area;

    match app.current_screen {
        CurrentScreen::Home => home::render_home(f, app, area),
        CurrentScreen::Error => popups::render_error_page(f, app, area),
        CurrentScreen::Watch => render_watch(f, app, area),
    }

    if app.show_help {
        popups::render_help(f, area);
    }
}

fn render_watch(f: &mut Frame, app: &mut App, area: Rect) {
    let sticky = app.config.show_ads
        && app.affiliate_link().is_some()
        && app
            .session
            .as_ref()
            .map_or(false, |s| s.sticky_ad_visible);

    let mut constraints = vec![Constraint::Length(2), Constraint::Min(10)];
    if sticky {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Length(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    header::render_header(f, app, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(46), Constraint::Length(34)])
        .split(rows[1]);
    render_main_column(f, app, cols[0]);
    sidebar::render_sidebar(f, app, cols[1]);

    if sticky {
        ads::render_sticky_ad(f, app, rows[2]);
    } else {
        app.area_sticky_close = Rect::default();
    }
    footer::render_footer(f, app, rows[rows.len() - 1]);

    if app.loading {
        popups::render_loading(f, app, area);
    }

    if app.floating_visible() {
        player_pane::render_floating(f, app);
    } else {
        app.area_floating = Rect::default();
    }
}

/// The scrollable "page": match card, countdown (while upcoming), player,
/// then the channel grid. `page_scroll` hides leading sections; once the
/// player section is out, the floating box takes over.
fn render_main_column(f: &mut Frame, app: &mut App, area: Rect) {
    let hidden = app.page_scroll;
    let show_card = hidden < 1;
    let show_countdown = app.status == Some(MatchStatus::Upcoming) && hidden < 2;
    let show_player = hidden < app.dock_sections();

    let mut constraints = Vec::new();
    if show_card {
        constraints.push(Constraint::Length(5));
    }
    if show_countdown {
        constraints.push(Constraint::Length(5));
    }
    if show_player {
        constraints.push(Constraint::Length(6));
    }
    constraints.push(Constraint::Min(4));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut slot = 0;
    if show_card {
        match_card::render_match_card(f, app, chunks[slot]);
        slot += 1;
    }
    if show_countdown {
        countdown::render_countdown(f, app, chunks[slot]);
        slot += 1;
    }
    if show_player {
        player_pane::render_docked(f, app, chunks[slot]);
        slot += 1;
    } else {
        app.area_player = Rect::default();
    }
    channels::render_channels(f, app, chunks[slot]);
}
