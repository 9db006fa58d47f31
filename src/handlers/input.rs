use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;
use tui_input::backend::crossterm::EventHandler;

use crate::app::{launch_page_load, App, AsyncAction, CurrentScreen};
use crate::cache::CachedSchedule;
use crate::channels::ChannelState;
use crate::params::WatchRequest;
use crate::player::Player;

pub fn handle_key_event(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AsyncAction>,
    player: &Player,
) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.current_screen {
        CurrentScreen::Home => handle_home_keys(app, key, tx),
        CurrentScreen::Watch => handle_watch_keys(app, key, tx, player),
        CurrentScreen::Error => handle_error_keys(app, key, tx),
    }
}

fn handle_home_keys(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) {
    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Enter => {
            let link = app.link_input.value().to_string();
            match WatchRequest::parse(&link, &app.config.page_base) {
                Ok(request) => {
                    app.home_error = None;
                    launch_page_load(app, request, tx, false);
                }
                Err(e) => app.home_error = Some(e.message()),
            }
        }
        _ => {
            app.link_input.handle_event(&Event::Key(key));
        }
    }
}

fn handle_watch_keys(
    app: &mut App,
    key: KeyEvent,
    tx: &mpsc::Sender<AsyncAction>,
    player: &Player,
) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Backspace => {
            player.stop();
            app.go_home();
        }
        KeyCode::Char('h') => app.show_help = true,
        KeyCode::Char('r') => {
            // Manual refresh skips the cache.
            if let Some(session) = app.session.as_ref() {
                let request = session.request.clone();
                CachedSchedule::invalidate();
                launch_page_load(app, request, tx, true);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.next_channel(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_channel(),
        KeyCode::Enter => activate_selected_channel(app, tx),
        KeyCode::Char('y') => copy_share_link(app),
        KeyCode::Char('o') => {
            if let Some(session) = app.session.as_ref() {
                if let Err(e) = webbrowser::open(&session.request.stream_url) {
                    tracing::warn!("browser open failed: {e}");
                }
            }
        }
        KeyCode::Char('a') => open_offer(app),
        KeyCode::Char('x') => {
            if let Some(session) = app.session.as_mut() {
                session.sticky_ad_visible = false;
            }
        }
        KeyCode::Char('f') => {
            // Close control for the floating player; off until the next load.
            if app.floating_visible() {
                if let Some(session) = app.session.as_mut() {
                    session.floating.dismissed = true;
                    session.floating.drag = None;
                }
            }
        }
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::PageUp => app.scroll_up(),
        _ => {}
    }
}

fn handle_error_keys(app: &mut App, key: KeyEvent, tx: &mpsc::Sender<AsyncAction>) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Backspace => app.go_home(),
        KeyCode::Char('r') | KeyCode::Enter => {
            if let Some(session) = app.session.as_ref() {
                let request = session.request.clone();
                launch_page_load(app, request, tx, true);
            } else {
                app.go_home();
            }
        }
        _ => {}
    }
}

/// Switch to the selected channel by navigating to its rebuilt page link.
/// The schedule is cache-warm, so the hop is instant.
pub fn activate_selected_channel(app: &mut App, tx: &mpsc::Sender<AsyncAction>) {
    let Some(view) = app.selected_channel() else {
        return;
    };
    if matches!(view.state, ChannelState::Running | ChannelState::Switching) {
        return;
    }
    let url = view.url.clone();
    let link = view.switch_link.clone();
    match WatchRequest::parse(&link, &app.config.page_base) {
        Ok(request) => {
            app.switching_to = Some(url);
            launch_page_load(app, request, tx, false);
        }
        Err(e) => app.full_page_error(e),
    }
}

fn copy_share_link(app: &mut App) {
    let Some(view) = app.selected_channel() else {
        return;
    };
    let link = view.switch_link.clone();
    match arboard::Clipboard::new().and_then(|mut clip| clip.set_text(link)) {
        Ok(()) => app.notice = Some("Share link copied".to_string()),
        Err(e) => {
            tracing::warn!("clipboard unavailable: {e}");
            app.notice = Some("Clipboard unavailable".to_string());
        }
    }
}

/// Open the session's offer in the browser and retire the overlay ad.
pub fn open_offer(app: &mut App) {
    let Some(link) = app.affiliate_link().map(str::to_string) else {
        return;
    };
    if let Err(e) = webbrowser::open(&link) {
        tracing::warn!("browser open failed: {e}");
    }
    if let Some(session) = app.session.as_mut() {
        session.overlay_ad_visible = false;
    }
}
