//! Channel grid view-model: pure data in, display records out. Binding to the
//! ratatui layer happens in `ui::channels`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::params::WatchRequest;

/// Bare numeric feed ids ("12345", "ex9876") carry no display value.
static GENERIC_SEGMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(ex)?\d{3,}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// This entry is what the player is on right now.
    Running,
    /// Activated, waiting for the player to confirm.
    Switching,
    Idle,
}

impl ChannelState {
    pub fn button_label(&self) -> &'static str {
        match self {
            ChannelState::Running => "Running",
            ChannelState::Switching => "Switching",
            ChannelState::Idle => "Watch",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelView {
    pub url: String,
    pub name: String,
    /// Rebuilt page link carrying the same match id and this entry's stream.
    pub switch_link: String,
    pub state: ChannelState,
}

/// Display name for a channel URL: the last path segment, percent-decoded,
/// unless it is empty or generic, which falls back to a positional label.
pub fn display_name(url: &str, index: usize) -> String {
    let last = url.rsplit('/').next().unwrap_or("");
    if last.is_empty() || GENERIC_SEGMENT.is_match(last) {
        return format!("Channel {}", index + 1);
    }
    match urlencoding::decode(last) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => format!("Channel {}", index + 1),
    }
}

/// Build the grid records. `switching_to` overrides the running mark while a
/// swap is in flight. An empty `urls` yields an empty list; the UI renders the
/// placeholder line, not an error.
pub fn build_channel_views(
    urls: &[String],
    current_stream: &str,
    request: &WatchRequest,
    switching_to: Option<&str>,
) -> Vec<ChannelView> {
    urls.iter()
        .enumerate()
        .map(|(index, url)| {
            let state = if switching_to == Some(url.as_str()) {
                ChannelState::Switching
            } else if url == current_stream {
                ChannelState::Running
            } else {
                ChannelState::Idle
            };
            ChannelView {
                url: url.clone(),
                name: display_name(url, index),
                switch_link: request.switch_link(url),
                state,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segments_fall_back_to_positional_labels() {
        assert_eq!(display_name("https://s.tv/live/12345", 0), "Channel 1");
        assert_eq!(display_name("https://s.tv/live/ex9876", 3), "Channel 4");
    }

    #[test]
    fn short_numbers_are_kept() {
        // Only three-or-more digits count as generic ids.
        assert_eq!(display_name("https://s.tv/live/7", 0), "7");
    }

    #[test]
    fn encoded_segments_are_decoded() {
        assert_eq!(
            display_name("https://s.tv/live/My%20Channel", 0),
            "My Channel"
        );
    }

    #[test]
    fn empty_segments_fall_back() {
        assert_eq!(display_name("https://s.tv/live/", 1), "Channel 2");
        assert_eq!(display_name("", 0), "Channel 1");
    }

    #[test]
    fn the_current_stream_is_marked_running() {
        let request = WatchRequest::parse(
            "https://x.tv/watch.html?id=abc&stream=https://s.tv/live/a",
            "https://x.tv/watch.html",
        )
        .unwrap();
        let urls = vec![
            "https://s.tv/live/a".to_string(),
            "https://s.tv/live/b".to_string(),
        ];

        let views = build_channel_views(&urls, &request.stream_url, &request, None);
        assert_eq!(views[0].state, ChannelState::Running);
        assert_eq!(views[1].state, ChannelState::Idle);

        let again = WatchRequest::parse(&views[1].switch_link, "https://x.tv/watch.html").unwrap();
        assert_eq!(again.match_id, "abc");
        assert_eq!(again.stream_url, "https://s.tv/live/b");
    }

    #[test]
    fn a_swap_in_flight_shows_switching() {
        let request = WatchRequest::parse(
            "https://x.tv/watch.html?id=abc&stream=https://s.tv/live/a",
            "https://x.tv/watch.html",
        )
        .unwrap();
        let urls = vec![
            "https://s.tv/live/a".to_string(),
            "https://s.tv/live/b".to_string(),
        ];

        let views =
            build_channel_views(&urls, &request.stream_url, &request, Some("https://s.tv/live/b"));
        assert_eq!(views[1].state, ChannelState::Switching);
        assert_eq!(views[1].state.button_label(), "Switching");
    }
}
