use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tui_input::Input;

use crate::api::{Schedule, ScheduleClient, ScheduleEvent};
use crate::cache;
use crate::channels::{build_channel_views, ChannelView};
use crate::config::AppConfig;
use crate::discord::{fetch_widget, GuildWidget};
use crate::errors::WatchError;
use crate::geo;
use crate::params::WatchRequest;
use crate::session::WatchSession;
use crate::status::MatchStatus;

/// Floating player box footprint in cells.
pub const FLOAT_W: u16 = 30;
pub const FLOAT_H: u16 = 6;

#[derive(Debug)]
pub enum AsyncAction {
    /// Payload plus whether it came from the cache.
    ScheduleLoaded(Schedule, bool),
    ScheduleFailed(WatchError),
    WidgetLoaded(GuildWidget),
    WidgetFailed(String),
    CountryDetected(String),
    CountdownTick,
    CountdownExpired,
    /// Stream URL that came up.
    PlayerStarted(String),
    PlayerFailed(String),
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum CurrentScreen {
    /// Paste-a-link prompt.
    Home,
    Watch,
    /// Full-page error card.
    Error,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App {
    pub config: AppConfig,
    pub current_screen: CurrentScreen,
    pub should_quit: bool,
    pub show_help: bool,

    // Home
    pub link_input: Input,
    pub home_error: Option<String>,

    // Page session
    pub session: Option<WatchSession>,
    pub schedule: Option<Schedule>,
    pub event: Option<ScheduleEvent>,
    /// None while the schedule is in flight.
    pub status: Option<MatchStatus>,
    pub channels: Vec<ChannelView>,
    /// Stream URL a swap is in flight toward.
    pub switching_to: Option<String>,
    pub widget: Option<GuildWidget>,
    pub widget_hidden: bool,
    pub error: Option<WatchError>,
    pub country: Option<String>,
    pub from_cache: bool,
    pub loading: bool,
    pub loading_tick: u64,
    pub player_error: Option<String>,
    pub notice: Option<String>,

    // Watch layout
    pub selected_channel_index: usize,
    pub channel_list_state: ListState,
    /// How many leading page sections are scrolled off the top.
    pub page_scroll: u16,
    pub frame_area: Rect,
    pub area_player: Rect,
    pub area_channels: Rect,
    pub area_infeed_ad: Rect,
    pub area_floating: Rect,
    pub area_sticky_close: Rect,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            current_screen: CurrentScreen::Home,
            should_quit: false,
            show_help: false,
            link_input: Input::default(),
            home_error: None,
            session: None,
            schedule: None,
            event: None,
            status: None,
            channels: Vec::new(),
            switching_to: None,
            widget: None,
            widget_hidden: false,
            error: None,
            country: None,
            from_cache: false,
            loading: false,
            loading_tick: 0,
            player_error: None,
            notice: None,
            selected_channel_index: 0,
            channel_list_state: ListState::default(),
            page_scroll: 0,
            frame_area: Rect::default(),
            area_player: Rect::default(),
            area_channels: Rect::default(),
            area_infeed_ad: Rect::default(),
            area_floating: Rect::default(),
            area_sticky_close: Rect::default(),
        }
    }

    pub fn input_mode(&self) -> InputMode {
        match self.current_screen {
            CurrentScreen::Home => InputMode::Editing,
            _ => InputMode::Normal,
        }
    }

    pub fn next_channel(&mut self) {
        if self.channels.is_empty() {
            return;
        }
        self.selected_channel_index = (self.selected_channel_index + 1) % self.channels.len();
        self.channel_list_state.select(Some(self.selected_channel_index));
    }

    pub fn previous_channel(&mut self) {
        if self.channels.is_empty() {
            return;
        }
        self.selected_channel_index = self
            .selected_channel_index
            .checked_sub(1)
            .unwrap_or(self.channels.len() - 1);
        self.channel_list_state.select(Some(self.selected_channel_index));
    }

    pub fn selected_channel(&self) -> Option<&ChannelView> {
        self.channels.get(self.selected_channel_index)
    }

    /// Rebuild the channel grid from the resolved event and session state.
    pub fn refresh_channels(&mut self) {
        let (Some(event), Some(session)) = (&self.event, &self.session) else {
            self.channels.clear();
            self.channel_list_state.select(None);
            return;
        };
        let urls = event.channel_urls();
        self.channels = build_channel_views(
            &urls,
            &session.request.stream_url,
            &session.request,
            self.switching_to.as_deref(),
        );
        if self.selected_channel_index >= self.channels.len() {
            self.selected_channel_index = 0;
        }
        self.channel_list_state.select(if self.channels.is_empty() {
            None
        } else {
            Some(self.selected_channel_index)
        });
    }

    /// Page sections above the channel list: match card, countdown (while
    /// upcoming), player. Scrolling hides them top-down.
    pub fn dock_sections(&self) -> u16 {
        if self.status == Some(MatchStatus::Upcoming) {
            3
        } else {
            2
        }
    }

    pub fn scroll_down(&mut self) {
        self.page_scroll = (self.page_scroll + 1).min(self.dock_sections());
    }

    pub fn scroll_up(&mut self) {
        self.page_scroll = self.page_scroll.saturating_sub(1);
    }

    pub fn player_scrolled_out(&self) -> bool {
        self.page_scroll >= self.dock_sections()
    }

    /// The docked player left the viewport and the user hasn't closed the
    /// overlay this page load.
    pub fn floating_visible(&self) -> bool {
        self.current_screen == CurrentScreen::Watch
            && !self.loading
            && self.player_scrolled_out()
            && self
                .session
                .as_ref()
                .map_or(false, |s| !s.floating.dismissed)
    }

    pub fn affiliate_link(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.affiliate_link.as_deref())
    }

    /// Full-page failure: show the card and stop this path.
    pub fn full_page_error(&mut self, err: WatchError) {
        tracing::warn!("page error: {err}");
        if let Some(session) = self.session.as_mut() {
            session.teardown();
        }
        self.loading = false;
        self.error = Some(err);
        self.current_screen = CurrentScreen::Error;
    }

    /// Leave the watch page for the home prompt.
    pub fn go_home(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.teardown();
        }
        self.schedule = None;
        self.event = None;
        self.status = None;
        self.channels.clear();
        self.switching_to = None;
        self.widget = None;
        self.widget_hidden = false;
        self.error = None;
        self.notice = None;
        self.player_error = None;
        self.page_scroll = 0;
        self.current_screen = CurrentScreen::Home;
    }
}

/// Clamp a floating-box origin so the whole box stays inside the frame.
pub fn clamp_float_pos(x: i32, y: i32, frame: Rect) -> (u16, u16) {
    let max_x = frame.width.saturating_sub(FLOAT_W) as i32;
    let max_y = frame.height.saturating_sub(FLOAT_H) as i32;
    (
        x.clamp(0, max_x.max(0)) as u16,
        y.clamp(0, max_y.max(0)) as u16,
    )
}

/// Start a page load for `request`: fresh session, schedule + widget fetched
/// together (each with local error handling), geo detection on its own path.
pub fn launch_page_load(
    app: &mut App,
    request: WatchRequest,
    tx: &mpsc::Sender<AsyncAction>,
    bypass_cache: bool,
) {
    app.session = Some(WatchSession::new(request));
    app.current_screen = CurrentScreen::Watch;
    app.error = None;
    app.loading = true;
    app.schedule = None;
    app.event = None;
    app.status = None;
    app.channels.clear();
    app.channel_list_state.select(None);
    app.selected_channel_index = 0;
    app.widget = None;
    app.widget_hidden = false;
    app.player_error = None;
    app.notice = None;
    app.page_scroll = 0;
    app.from_cache = false;
    app.country = None;

    let api_url = app.config.api_url.clone();
    let guild_id = app.config.discord_server_id.clone();

    // The page waits for both fetches to settle; neither aborts the other.
    let tx_init = tx.clone();
    tokio::spawn(async move {
        let schedule_client = ScheduleClient::new(api_url);
        let http = reqwest::Client::new();
        let (schedule, widget) = tokio::join!(
            cache::load_or_fetch(&schedule_client, bypass_cache),
            fetch_widget(&http, &guild_id),
        );
        match schedule {
            Ok((data, from_cache)) => {
                let _ = tx_init
                    .send(AsyncAction::ScheduleLoaded(data, from_cache))
                    .await;
            }
            Err(e) => {
                let _ = tx_init.send(AsyncAction::ScheduleFailed(e)).await;
            }
        }
        match widget {
            Ok(widget) => {
                let _ = tx_init.send(AsyncAction::WidgetLoaded(widget)).await;
            }
            Err(e) => {
                let _ = tx_init.send(AsyncAction::WidgetFailed(e.to_string())).await;
            }
        }
    });

    let tx_geo = tx.clone();
    tokio::spawn(async move {
        let http = reqwest::Client::new();
        let country = geo::detect_country(&http).await;
        let _ = tx_geo.send(AsyncAction::CountryDetected(country)).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_positions_clamp_to_the_frame() {
        let frame = Rect::new(0, 0, 100, 40);
        assert_eq!(clamp_float_pos(-5, -5, frame), (0, 0));
        assert_eq!(clamp_float_pos(500, 500, frame), (100 - FLOAT_W, 40 - FLOAT_H));
        assert_eq!(clamp_float_pos(10, 10, frame), (10, 10));
    }

    #[test]
    fn tiny_frames_pin_the_float_to_origin() {
        let frame = Rect::new(0, 0, 10, 3);
        assert_eq!(clamp_float_pos(4, 2, frame), (0, 0));
    }

    #[test]
    fn scroll_depth_depends_on_the_countdown_section() {
        let mut app = App::new(AppConfig::default());
        app.status = Some(MatchStatus::Live);
        assert_eq!(app.dock_sections(), 2);
        app.status = Some(MatchStatus::Upcoming);
        assert_eq!(app.dock_sections(), 3);

        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.page_scroll, 3);
        assert!(app.player_scrolled_out());
    }
}
