//! Wire model and client for the day-bucketed schedule API.
//!
//! The feed is `{ "events": { "<date>": Event | [Event, ...] } }` and is sloppy
//! about scalar types: timestamps arrive as numbers or quoted numbers (or
//! garbage), channels as plain URLs or `{"channel": url}` objects, sometimes
//! wrapped one level deeper. Everything here deserializes all observed shapes.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{FetchSource, WatchError};

/// A start time as the feed sent it. The raw text feeds identifier
/// computation either way; only status classification needs a real integer,
/// and its absence is the malformed-timestamp case.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RawStamp {
    Number(i64),
    Text(String),
    #[default]
    Missing,
}

impl RawStamp {
    pub fn as_seconds(&self) -> Option<i64> {
        match self {
            RawStamp::Number(n) => Some(*n),
            RawStamp::Text(s) => s.trim().parse().ok(),
            RawStamp::Missing => None,
        }
    }

    /// Whether the feed sent anything at all (even garbage counts).
    pub fn is_present(&self) -> bool {
        match self {
            RawStamp::Number(_) => true,
            RawStamp::Text(s) => !s.is_empty(),
            RawStamp::Missing => false,
        }
    }
}

impl fmt::Display for RawStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawStamp::Number(n) => write!(f, "{}", n),
            RawStamp::Text(s) => write!(f, "{}", s),
            RawStamp::Missing => write!(f, "null"),
        }
    }
}

impl Serialize for RawStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RawStamp::Number(n) => serializer.serialize_i64(*n),
            RawStamp::Text(s) => serializer.serialize_str(s),
            RawStamp::Missing => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for RawStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct StampVisitor;

        impl<'de> Visitor<'de> for StampVisitor {
            type Value = RawStamp;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a unix timestamp as number, string, or null")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(RawStamp::Number(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(RawStamp::Number(v as i64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(RawStamp::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(RawStamp::Text(v))
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawStamp::Missing)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(RawStamp::Missing)
            }
        }

        deserializer.deserialize_any(StampVisitor)
    }
}

/// One channel reference; some feeds tag the URL, some don't.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChannelRef {
    Url(String),
    Tagged { channel: String },
}

impl ChannelRef {
    pub fn url(&self) -> &str {
        match self {
            ChannelRef::Url(u) => u,
            ChannelRef::Tagged { channel } => channel,
        }
    }
}

/// The `channels` field: a list, or an object wrapping the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChannelSet {
    List(Vec<ChannelRef>),
    Wrapped { channel: Vec<ChannelRef> },
}

impl ChannelSet {
    pub fn urls(&self) -> Vec<String> {
        let refs = match self {
            ChannelSet::List(v) => v,
            ChannelSet::Wrapped { channel } => channel,
        };
        refs.iter()
            .map(|r| r.url().to_string())
            .filter(|u| !u.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScheduleEvent {
    #[serde(default)]
    pub sport: String,
    #[serde(rename = "match", default)]
    pub match_name: String,
    #[serde(default)]
    pub tournament: String,
    #[serde(default)]
    pub unix_timestamp: RawStamp,
    #[serde(default)]
    pub channels: Option<ChannelSet>,
}

impl ScheduleEvent {
    pub fn start_seconds(&self) -> Result<i64, WatchError> {
        self.unix_timestamp
            .as_seconds()
            .ok_or_else(|| WatchError::MalformedTimestamp(self.unix_timestamp.to_string()))
    }

    pub fn channel_urls(&self) -> Vec<String> {
        self.channels.as_ref().map(ChannelSet::urls).unwrap_or_default()
    }
}

/// A date bucket holds either one event or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DayEvents {
    Many(Vec<ScheduleEvent>),
    One(ScheduleEvent),
}

impl DayEvents {
    pub fn as_slice(&self) -> &[ScheduleEvent] {
        match self {
            DayEvents::Many(v) => v,
            DayEvents::One(e) => std::slice::from_ref(e),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Schedule {
    #[serde(default)]
    pub events: BTreeMap<String, DayEvents>,
}

#[derive(Debug, Clone)]
pub struct ScheduleClient {
    api_url: String,
    client: reqwest::Client,
}

impl ScheduleClient {
    pub fn new(api_url: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36")
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { api_url, client }
    }

    pub async fn fetch(&self) -> Result<Schedule, WatchError> {
        tracing::debug!("fetching schedule from {}", self.api_url);
        let resp = self
            .client
            .get(&self.api_url)
            .send()
            .await
            .map_err(|e| WatchError::FetchFailure(FetchSource::Schedule, e.to_string()))?;
        if !resp.status().is_success() {
            return Err(WatchError::FetchFailure(
                FetchSource::Schedule,
                format!("status {}", resp.status()),
            ));
        }
        resp.json::<Schedule>()
            .await
            .map_err(|e| WatchError::FetchFailure(FetchSource::Schedule, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_day_with_a_list() {
        let json = r#"{"events": {"2026-08-08": [
            {"sport": "Soccer", "match": "A vs B", "tournament": "Cup",
             "unix_timestamp": 1770000000, "channels": ["https://s/one", {"channel": "https://s/two"}]}
        ]}}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        let events = schedule.events["2026-08-08"].as_slice();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].unix_timestamp.as_seconds(), Some(1770000000));
        assert_eq!(
            events[0].channel_urls(),
            vec!["https://s/one".to_string(), "https://s/two".to_string()]
        );
    }

    #[test]
    fn deserializes_a_single_event_bucket() {
        let json = r#"{"events": {"2026-08-08":
            {"sport": "Tennis", "match": "C vs D", "tournament": "Open",
             "unix_timestamp": "1770000000"}
        }}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        let events = schedule.events["2026-08-08"].as_slice();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].unix_timestamp.as_seconds(), Some(1770000000));
        assert!(events[0].channel_urls().is_empty());
    }

    #[test]
    fn deserializes_wrapped_channels() {
        let json = r#"{"sport": "Boxing", "match": "E vs F", "tournament": "",
                       "unix_timestamp": 1, "channels": {"channel": ["https://s/x"]}}"#;
        let event: ScheduleEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.channel_urls(), vec!["https://s/x".to_string()]);
    }

    #[test]
    fn garbage_timestamps_are_kept_raw_but_unreadable() {
        let json = r#"{"sport": "Darts", "match": "G vs H", "tournament": "T",
                       "unix_timestamp": "soon"}"#;
        let event: ScheduleEvent = serde_json::from_str(json).unwrap();
        assert!(event.unix_timestamp.is_present());
        assert_eq!(event.unix_timestamp.to_string(), "soon");
        assert!(matches!(
            event.start_seconds(),
            Err(WatchError::MalformedTimestamp(_))
        ));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let event: ScheduleEvent = serde_json::from_str(r#"{"match": "I vs J"}"#).unwrap();
        assert!(event.sport.is_empty());
        assert!(!event.unix_timestamp.is_present());
    }
}
