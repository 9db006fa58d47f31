use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;

pub const DEFAULT_API_URL: &str = "https://topembed.pw/api.php?format=json";
pub const DEFAULT_GUILD_ID: &str = "1422384816472457288";
pub const DEFAULT_PAGE_BASE: &str = "https://matchday.stream/watch.html";

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "matchday", "matchday")
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_guild_id() -> String {
    DEFAULT_GUILD_ID.to_string()
}

fn default_page_base() -> String {
    DEFAULT_PAGE_BASE.to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Schedule endpoint; override for mirrors.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Guild whose widget fills the sidebar. Empty disables the widget.
    #[serde(default = "default_guild_id")]
    pub discord_server_id: String,
    /// Base used to rebuild share links when the input was a bare query.
    #[serde(default = "default_page_base")]
    pub page_base: String,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default = "default_true")]
    pub show_ads: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            discord_server_id: default_guild_id(),
            page_base: default_page_base(),
            timezone: None,
            show_ads: true,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, anyhow::Error> {
        if let Some(proj_dirs) = project_dirs() {
            let config_path = proj_dirs.config_dir().join("config.json");
            if config_path.exists() {
                let content = fs::read_to_string(config_path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(AppConfig::default())
    }

    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(proj_dirs) = project_dirs() {
            let config_dir = proj_dirs.config_dir();
            fs::create_dir_all(config_dir)?;
            let config_path = config_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }

    pub fn get_user_timezone(&self) -> String {
        if let Some(tz) = &self.timezone {
            return tz.clone();
        }

        if let Ok(tz) = iana_time_zone::get_timezone() {
            return tz;
        }

        "UTC".to_string()
    }

    pub fn set_timezone(&mut self, tz: String) {
        self.timezone = Some(tz);
        let _ = self.save();
    }
}
