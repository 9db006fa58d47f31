//! Match identifiers and schedule lookup.
//!
//! An identifier is the content fingerprint of an event:
//! `base64("{unix_timestamp}_{sport}_{match}")` over the timestamp's raw text.
//! Links are only as stable as the event content; if the feed edits a name the
//! old link stops resolving, which surfaces as Match Not Found.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::api::{Schedule, ScheduleEvent};

/// None when the event lacks any of the three identifying fields; such events
/// can never be linked to and are skipped during lookup.
pub fn fingerprint(event: &ScheduleEvent) -> Option<String> {
    if event.sport.is_empty() || event.match_name.is_empty() || !event.unix_timestamp.is_present()
    {
        return None;
    }
    let unique = format!(
        "{}_{}_{}",
        event.unix_timestamp, event.sport, event.match_name
    );
    Some(STANDARD.encode(unique.as_bytes()))
}

/// Scan every date bucket for the event behind `match_id`; first exact match
/// wins, None when the whole payload is exhausted.
pub fn find_match<'a>(schedule: &'a Schedule, match_id: &str) -> Option<&'a ScheduleEvent> {
    for bucket in schedule.events.values() {
        for event in bucket.as_slice() {
            if let Some(id) = fingerprint(event) {
                if id == match_id {
                    return Some(event);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RawStamp;

    fn event(sport: &str, name: &str, ts: i64) -> ScheduleEvent {
        ScheduleEvent {
            sport: sport.to_string(),
            match_name: name.to_string(),
            tournament: "Test Cup".to_string(),
            unix_timestamp: RawStamp::Number(ts),
            channels: None,
        }
    }

    #[test]
    fn fingerprint_matches_the_link_format() {
        let e = event("Soccer", "A vs B", 1770000000);
        // base64("1770000000_Soccer_A vs B")
        assert_eq!(
            fingerprint(&e).unwrap(),
            STANDARD.encode("1770000000_Soccer_A vs B")
        );
    }

    #[test]
    fn incomplete_events_get_no_identifier() {
        let mut e = event("Soccer", "A vs B", 1);
        e.sport.clear();
        assert!(fingerprint(&e).is_none());

        let mut e = event("Soccer", "A vs B", 1);
        e.unix_timestamp = RawStamp::Missing;
        assert!(fingerprint(&e).is_none());
    }

    #[test]
    fn garbage_timestamps_still_fingerprint_raw() {
        let mut e = event("Soccer", "A vs B", 1);
        e.unix_timestamp = RawStamp::Text("soon".to_string());
        assert_eq!(fingerprint(&e).unwrap(), STANDARD.encode("soon_Soccer_A vs B"));
    }

    #[test]
    fn lookup_round_trips_through_the_fingerprint() {
        let json = r#"{"events": {
            "2026-08-07": {"sport": "Tennis", "match": "C vs D", "tournament": "Open",
                           "unix_timestamp": 1770003600},
            "2026-08-08": [
                {"sport": "Soccer", "match": "A vs B", "tournament": "Cup",
                 "unix_timestamp": 1770000000},
                {"sport": "Soccer", "match": "E vs F", "tournament": "Cup",
                 "unix_timestamp": "1770007200"}
            ]
        }}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();

        for bucket in schedule.events.values() {
            for expected in bucket.as_slice() {
                let id = fingerprint(expected).unwrap();
                let found = find_match(&schedule, &id).unwrap();
                assert_eq!(found, expected);
            }
        }
    }

    #[test]
    fn unknown_identifiers_resolve_to_none() {
        let schedule: Schedule = serde_json::from_str(r#"{"events": {}}"#).unwrap();
        assert!(find_match(&schedule, "bm9wZQ==").is_none());
    }
}
