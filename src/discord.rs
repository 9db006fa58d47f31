//! Discord guild widget: online count, invite link, a few member names for
//! the sidebar. Failure hides the pane, never the page.

use serde::{Deserialize, Serialize};

use crate::errors::{FetchSource, WatchError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetMember {
    #[serde(default)]
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GuildWidget {
    pub presence_count: Option<u64>,
    pub instant_invite: Option<String>,
    #[serde(default)]
    pub members: Vec<WidgetMember>,
}

impl GuildWidget {
    pub fn online_display(&self) -> String {
        self.presence_count.unwrap_or(0).to_string()
    }

    pub fn top_members(&self, count: usize) -> &[WidgetMember] {
        &self.members[..self.members.len().min(count)]
    }
}

pub async fn fetch_widget(
    client: &reqwest::Client,
    server_id: &str,
) -> Result<GuildWidget, WatchError> {
    if server_id.is_empty() {
        return Err(WatchError::FetchFailure(
            FetchSource::Widget,
            "no server configured".to_string(),
        ));
    }

    let url = format!("https://discord.com/api/guilds/{server_id}/widget.json");
    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(|e| WatchError::FetchFailure(FetchSource::Widget, e.to_string()))?;
    if !resp.status().is_success() {
        return Err(WatchError::FetchFailure(
            FetchSource::Widget,
            format!("status {}", resp.status()),
        ));
    }
    resp.json::<GuildWidget>()
        .await
        .map_err(|e| WatchError::FetchFailure(FetchSource::Widget, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_payloads_deserialize() {
        let json = r#"{
            "presence_count": 42,
            "instant_invite": "https://discord.gg/abc",
            "members": [
                {"username": "kai", "avatar_url": "https://cdn/a.png"},
                {"username": "ren"}
            ]
        }"#;
        let widget: GuildWidget = serde_json::from_str(json).unwrap();
        assert_eq!(widget.online_display(), "42");
        assert_eq!(widget.top_members(5).len(), 2);
        assert_eq!(widget.top_members(1)[0].username, "kai");
    }

    #[test]
    fn sparse_payloads_default() {
        let widget: GuildWidget = serde_json::from_str("{}").unwrap();
        assert_eq!(widget.online_display(), "0");
        assert!(widget.top_members(5).is_empty());
    }
}
