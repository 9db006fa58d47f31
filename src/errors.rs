use thiserror::Error;

/// Which external call a fetch failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Schedule,
    Widget,
    Geo,
}

impl FetchSource {
    pub fn display_name(&self) -> &'static str {
        match self {
            FetchSource::Schedule => "schedule API",
            FetchSource::Widget => "Discord widget",
            FetchSource::Geo => "geolocation",
        }
    }
}

impl std::fmt::Display for FetchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Where on the page a failure is allowed to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSurface {
    /// Replaces the whole watch page; that code path stops.
    FullPage,
    /// Status badge only; the rest of the page keeps working.
    Badge,
    /// The failing component hides itself.
    Component,
    /// Swallowed into a default value.
    Silent,
}

/// Everything that can go wrong on a watch page. Failures are handled at the
/// boundary where they occur and never propagate past their surface.
#[derive(Debug, Error, Clone)]
pub enum WatchError {
    #[error("required parameter `{0}` is missing")]
    MissingParameter(&'static str),

    #[error("{0} request failed: {1}")]
    FetchFailure(FetchSource, String),

    #[error("no scheduled event matches identifier `{0}`")]
    NotFound(String),

    #[error("unreadable start time `{0}`")]
    MalformedTimestamp(String),
}

impl WatchError {
    /// Headline for the full-page error card.
    pub fn title(&self) -> &'static str {
        match self {
            WatchError::MissingParameter(_) => "Invalid URL",
            WatchError::FetchFailure(FetchSource::Schedule, _) => "API Error",
            WatchError::FetchFailure(_, _) => "Connection Error",
            WatchError::NotFound(_) => "Match Not Found",
            WatchError::MalformedTimestamp(_) => "Error",
        }
    }

    /// User-facing one-liner under the headline.
    pub fn message(&self) -> String {
        match self {
            WatchError::MissingParameter(_) => "Match ID or Stream URL is missing.".to_string(),
            WatchError::FetchFailure(FetchSource::Schedule, _) => {
                "Could not fetch match data.".to_string()
            }
            WatchError::NotFound(_) => "The requested match could not be found.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn surface(&self) -> ErrorSurface {
        match self {
            WatchError::MissingParameter(_) | WatchError::NotFound(_) => ErrorSurface::FullPage,
            WatchError::FetchFailure(FetchSource::Schedule, _) => ErrorSurface::FullPage,
            WatchError::FetchFailure(FetchSource::Widget, _) => ErrorSurface::Component,
            WatchError::FetchFailure(FetchSource::Geo, _) => ErrorSurface::Silent,
            WatchError::MalformedTimestamp(_) => ErrorSurface::Badge,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_follow_the_taxonomy() {
        assert_eq!(
            WatchError::MissingParameter("id").surface(),
            ErrorSurface::FullPage
        );
        assert_eq!(
            WatchError::FetchFailure(FetchSource::Schedule, "503".into()).surface(),
            ErrorSurface::FullPage
        );
        assert_eq!(
            WatchError::FetchFailure(FetchSource::Widget, "timeout".into()).surface(),
            ErrorSurface::Component
        );
        assert_eq!(
            WatchError::FetchFailure(FetchSource::Geo, "dns".into()).surface(),
            ErrorSurface::Silent
        );
        assert_eq!(
            WatchError::MalformedTimestamp("soon".into()).surface(),
            ErrorSurface::Badge
        );
    }

    #[test]
    fn full_page_titles_match_the_page_copy() {
        assert_eq!(WatchError::MissingParameter("stream").title(), "Invalid URL");
        assert_eq!(WatchError::NotFound("abc".into()).title(), "Match Not Found");
    }
}
