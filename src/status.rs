//! Match lifecycle, derived fresh from the clock on every look.

use std::fmt;

/// A match counts as live for this long after kick-off.
pub const LIVE_WINDOW_MINUTES: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Finished,
    /// Start time was unreadable; badge-level only.
    Error,
}

impl MatchStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::Live => "Live",
            MatchStatus::Finished => "Finished",
            MatchStatus::Error => "Error",
        }
    }

    /// Error shares the finished badge styling.
    pub fn is_over(&self) -> bool {
        matches!(self, MatchStatus::Finished | MatchStatus::Error)
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

pub fn classify(now_secs: i64, start_secs: Option<i64>) -> MatchStatus {
    let Some(start) = start_secs else {
        return MatchStatus::Error;
    };
    let elapsed_minutes = (now_secs - start) as f64 / 60.0;
    if (0.0..LIVE_WINDOW_MINUTES).contains(&elapsed_minutes) {
        MatchStatus::Live
    } else if elapsed_minutes < 0.0 {
        MatchStatus::Upcoming
    } else {
        MatchStatus::Finished
    }
}

/// One-second countdown readout. Each unit is its own field so display code
/// never goes digging by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownParts {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CountdownParts {
    pub fn from_remaining(remaining_secs: i64) -> Self {
        let r = remaining_secs.max(0);
        Self {
            days: r / 86400,
            hours: (r % 86400) / 3600,
            minutes: (r % 3600) / 60,
            seconds: r % 60,
        }
    }

    /// Label/value pairs in display order.
    pub fn units(&self) -> [(&'static str, i64); 4] {
        [
            ("DAYS", self.days),
            ("HRS", self.hours),
            ("MIN", self.minutes),
            ("SEC", self.seconds),
        ]
    }
}

impl fmt::Display for CountdownParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_770_000_000;

    #[test]
    fn kick_off_is_live() {
        assert_eq!(classify(START, Some(START)), MatchStatus::Live);
    }

    #[test]
    fn just_under_the_window_is_live() {
        // 149.98 minutes in
        assert_eq!(classify(START + 8999, Some(START)), MatchStatus::Live);
    }

    #[test]
    fn the_window_edge_is_finished() {
        // exactly 150 minutes in
        assert_eq!(classify(START + 9000, Some(START)), MatchStatus::Finished);
    }

    #[test]
    fn any_time_before_kick_off_is_upcoming() {
        assert_eq!(classify(START - 1, Some(START)), MatchStatus::Upcoming);
        assert_eq!(classify(START - 86400, Some(START)), MatchStatus::Upcoming);
    }

    #[test]
    fn unreadable_start_is_the_error_badge() {
        assert_eq!(classify(START, None), MatchStatus::Error);
        assert!(MatchStatus::Error.is_over());
    }

    #[test]
    fn countdown_decomposes_by_integer_division() {
        let parts = CountdownParts::from_remaining(90061);
        assert_eq!(parts.days, 1);
        assert_eq!(parts.hours, 1);
        assert_eq!(parts.minutes, 1);
        assert_eq!(parts.seconds, 1);
        assert_eq!(parts.to_string(), "01:01:01:01");
    }

    #[test]
    fn countdown_clamps_at_zero() {
        let parts = CountdownParts::from_remaining(-5);
        assert_eq!(parts.to_string(), "00:00:00:00");
    }
}
