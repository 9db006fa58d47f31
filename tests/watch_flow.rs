//! End-to-end over a canned schedule payload: mint a share link for an event,
//! resolve it back, classify it, and build the channel grid.

use matchday_lib::api::Schedule;
use matchday_lib::channels::{build_channel_views, ChannelState};
use matchday_lib::params::WatchRequest;
use matchday_lib::resolver::{find_match, fingerprint};
use matchday_lib::status::{classify, MatchStatus};

const PAGE_BASE: &str = "https://matchday.stream/watch.html";

const PAYLOAD: &str = r#"{
  "events": {
    "2026-08-08": [
      {
        "sport": "Soccer",
        "match": "Arsenal vs Liverpool",
        "tournament": "Premier League",
        "unix_timestamp": 1770000000,
        "channels": [
          "https://streams.example/live/12345",
          {"channel": "https://streams.example/live/Sky%20Sports"},
          "https://streams.example/live/ex9876"
        ]
      },
      {
        "sport": "Tennis",
        "match": "Alcaraz vs Sinner",
        "tournament": "US Open",
        "unix_timestamp": "1770007200",
        "channels": {"channel": ["https://streams.example/live/court-one"]}
      }
    ],
    "2026-08-09": {
      "sport": "Boxing",
      "match": "Main Event",
      "tournament": "Fight Night",
      "unix_timestamp": "tba"
    }
  }
}"#;

#[test]
fn a_minted_link_resolves_to_its_own_event() {
    let schedule: Schedule = serde_json::from_str(PAYLOAD).unwrap();

    let first = schedule.events["2026-08-08"].as_slice()[0].clone();
    let id = fingerprint(&first).unwrap();
    let stream = first.channel_urls()[0].clone();

    let link = format!(
        "{}?id={}&stream={}",
        PAGE_BASE,
        urlencoding::encode(&id),
        urlencoding::encode(&stream)
    );
    let request = WatchRequest::parse(&link, PAGE_BASE).unwrap();
    assert_eq!(request.match_id, id);
    assert_eq!(request.stream_url, stream);

    let resolved = find_match(&schedule, &request.match_id).unwrap();
    assert_eq!(resolved, &first);
}

#[test]
fn every_listed_event_round_trips() {
    let schedule: Schedule = serde_json::from_str(PAYLOAD).unwrap();
    for bucket in schedule.events.values() {
        for event in bucket.as_slice() {
            let id = fingerprint(event).unwrap();
            assert_eq!(find_match(&schedule, &id).unwrap(), event);
        }
    }
}

#[test]
fn the_channel_grid_labels_and_marks_entries() {
    let schedule: Schedule = serde_json::from_str(PAYLOAD).unwrap();
    let event = schedule.events["2026-08-08"].as_slice()[0].clone();
    let urls = event.channel_urls();
    assert_eq!(urls.len(), 3);

    let id = fingerprint(&event).unwrap();
    let link = format!(
        "{}?id={}&stream={}",
        PAGE_BASE,
        urlencoding::encode(&id),
        urlencoding::encode(&urls[1])
    );
    let request = WatchRequest::parse(&link, PAGE_BASE).unwrap();

    let views = build_channel_views(&urls, &request.stream_url, &request, None);

    // Numeric ids fall back to positional labels, names decode.
    assert_eq!(views[0].name, "Channel 1");
    assert_eq!(views[1].name, "Sky Sports");
    assert_eq!(views[2].name, "Channel 3");

    assert_eq!(views[0].state, ChannelState::Idle);
    assert_eq!(views[1].state, ChannelState::Running);

    // Switch links hop to the same match with the other stream.
    let hop = WatchRequest::parse(&views[2].switch_link, PAGE_BASE).unwrap();
    assert_eq!(hop.match_id, id);
    assert_eq!(hop.stream_url, urls[2]);
}

#[test]
fn lifecycle_follows_the_live_window() {
    let schedule: Schedule = serde_json::from_str(PAYLOAD).unwrap();
    let event = schedule.events["2026-08-08"].as_slice()[0].clone();
    let start = event.start_seconds().unwrap();

    assert_eq!(classify(start - 3600, Some(start)), MatchStatus::Upcoming);
    assert_eq!(classify(start, Some(start)), MatchStatus::Live);
    assert_eq!(classify(start + 8999, Some(start)), MatchStatus::Live);
    assert_eq!(classify(start + 9000, Some(start)), MatchStatus::Finished);

    // The boxing card has no readable start; badge-level error only.
    let tba = schedule.events["2026-08-09"].as_slice()[0].clone();
    assert!(tba.start_seconds().is_err());
    assert_eq!(
        classify(start, tba.unix_timestamp.as_seconds()),
        MatchStatus::Error
    );
    // It still fingerprints, so the link itself resolves.
    assert!(find_match(&schedule, &fingerprint(&tba).unwrap()).is_some());
}
