//! Watch-link parsing. A share link looks like
//! `https://host/watch.html?id=<fingerprint>&stream=<url>`; we also accept the
//! bare query string, resolved against the configured page base.

use url::Url;

use crate::errors::WatchError;

/// A parsed watch link: which match, which stream, and the page URL the link
/// can be rebuilt from when switching channels.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchRequest {
    pub match_id: String,
    pub stream_url: String,
    page: Url,
}

impl WatchRequest {
    /// Accepts a full page URL or just its query string (`id=..&stream=..`).
    pub fn parse(input: &str, fallback_base: &str) -> Result<Self, WatchError> {
        let trimmed = input.trim();
        let page = if trimmed.contains("://") {
            Url::parse(trimmed).map_err(|_| WatchError::MissingParameter("id"))?
        } else {
            let mut page =
                Url::parse(fallback_base).map_err(|_| WatchError::MissingParameter("id"))?;
            page.set_query(Some(trimmed.trim_start_matches('?')));
            page
        };

        let mut match_id = None;
        let mut stream_url = None;
        for (key, value) in page.query_pairs() {
            match key.as_ref() {
                "id" => match_id = Some(value.into_owned()),
                "stream" => stream_url = Some(value.into_owned()),
                _ => {}
            }
        }

        let match_id = match_id
            .filter(|v| !v.is_empty())
            .ok_or(WatchError::MissingParameter("id"))?;
        let stream_url = stream_url
            .filter(|v| !v.is_empty())
            .ok_or(WatchError::MissingParameter("stream"))?;

        Ok(Self {
            match_id,
            stream_url,
            page,
        })
    }

    /// Rebuild the page URL carrying the same identifier and another stream.
    pub fn switch_link(&self, stream: &str) -> String {
        let mut url = self.page.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("id", &self.match_id)
            .append_pair("stream", stream);
        url.to_string()
    }

    /// The full page URL for this request, e.g. for a reload.
    pub fn page_link(&self) -> String {
        self.page.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://matchday.example/watch.html";

    #[test]
    fn parses_a_full_link() {
        let req =
            WatchRequest::parse("https://x.tv/watch.html?id=abc&stream=https://cdn/a", BASE)
                .unwrap();
        assert_eq!(req.match_id, "abc");
        assert_eq!(req.stream_url, "https://cdn/a");
    }

    #[test]
    fn parses_a_bare_query_against_the_base() {
        let req = WatchRequest::parse("?id=abc&stream=https%3A%2F%2Fcdn%2Fa", BASE).unwrap();
        assert_eq!(req.stream_url, "https://cdn/a");
        assert!(req.page_link().starts_with(BASE));
    }

    #[test]
    fn missing_parameters_fail_fast() {
        assert!(matches!(
            WatchRequest::parse("?stream=https://cdn/a", BASE),
            Err(WatchError::MissingParameter("id"))
        ));
        assert!(matches!(
            WatchRequest::parse("?id=abc", BASE),
            Err(WatchError::MissingParameter("stream"))
        ));
        assert!(matches!(
            WatchRequest::parse("?id=abc&stream=", BASE),
            Err(WatchError::MissingParameter("stream"))
        ));
    }

    #[test]
    fn switch_links_keep_the_id_and_replace_the_stream() {
        let req = WatchRequest::parse("https://x.tv/w?id=abc&stream=https://cdn/a", BASE).unwrap();
        let link = req.switch_link("https://cdn/b");
        let again = WatchRequest::parse(&link, BASE).unwrap();
        assert_eq!(again.match_id, "abc");
        assert_eq!(again.stream_url, "https://cdn/b");
        assert!(link.starts_with("https://x.tv/w?"));
    }
}
