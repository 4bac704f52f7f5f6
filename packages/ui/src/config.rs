use serde::Deserialize;

use crate::error::SiteError;
use crate::i18n::Lang;

const BUNDLED_SITE_JSON: &str = include_str!("../site.json");

/// Static page configuration: screenshot list, asset layout and the few
/// tunables of the page controllers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub game_title: String,
    pub default_lang: Lang,
    /// Directory the screenshot filenames are joined onto.
    pub screenshot_dir: String,
    pub screenshots: Vec<String>,
    pub background_video: Option<String>,
    pub header_scroll_threshold: f64,
    pub steam_app_id: Option<u32>,
    /// Opt-in gallery rotation. `None` keeps the gallery still.
    pub auto_advance_secs: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            game_title: "Starfall Vanguard".to_string(),
            default_lang: Lang::Ko,
            screenshot_dir: "/screenshots/".to_string(),
            screenshots: [
                "title.jpg",
                "battle_01.jpg",
                "battle_02.gif",
                "village.jpg",
                "skills.gif",
                "boss_01.jpg",
                "party.jpg",
                "ending_teaser.gif",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            background_video: Some("/video/background_loop.mp4".to_string()),
            header_scroll_threshold: 100.0,
            steam_app_id: None,
            auto_advance_secs: None,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configuration shipped with the bundle. A broken file degrades to defaults.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_SITE_JSON) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("site config: {e}; using defaults");
                Self::default()
            }
        }
    }
}

pub fn join_asset_path(dir: &str, file: &str) -> String {
    if dir.is_empty() {
        return file.to_string();
    }
    format!(
        "{}/{}",
        dir.trim_end_matches('/'),
        file.trim_start_matches('/')
    )
}
