/// Application configuration
///
/// Loaded from `config.toml` in the user's config directory:
/// - Linux: ~/.config/wedding-guestbook/config.toml
/// - macOS: ~/Library/Application Support/wedding-guestbook/config.toml
/// - Windows: %APPDATA%\wedding-guestbook\config.toml
///
/// Every field has a default, so the file is optional and may be partial.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Directory name used under the platform data/config directories
pub const APP_DIR: &str = "wedding-guestbook";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Key under which the serialized gallery is stored
    pub storage_key: String,
    /// Shared passcode required to delete an item
    pub delete_passcode: String,
    /// Minimum horizontal travel (px) for a swipe to navigate
    pub swipe_threshold: f32,
    /// Number of masonry columns in the gallery
    pub gallery_columns: usize,
    /// Override for the database location
    pub database_path: Option<PathBuf>,
    pub event: EventConfig,
    pub media: MediaConfig,
    pub captions: CaptionConfig,
}

/// Texts shown in the header and footer
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventConfig {
    pub initials: String,
    pub couple_names: String,
    pub gallery_title: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// ffmpeg binary used to grab a still frame from videos
    pub ffmpeg_path: String,
    /// Position of the captured frame; shorter clips use their first frame
    pub thumbnail_seek_secs: f32,
    /// JPEG quality (1-100) of video thumbnails
    pub thumbnail_jpeg_quality: u8,
}

/// Generative caption service. Off unless explicitly enabled.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CaptionConfig {
    pub enabled: bool,
    pub model: String,
    pub endpoint: String,
    pub temperature: f32,
    pub top_p: f32,
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: "schupka_wedding_gallery_v1".to_string(),
            delete_passcode: "6666".to_string(),
            swipe_threshold: 50.0,
            gallery_columns: 3,
            database_path: None,
            event: EventConfig::default(),
            media: MediaConfig::default(),
            captions: CaptionConfig::default(),
        }
    }
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            initials: "P & R".to_string(),
            couple_names: "Patrick & Romy Schupka".to_string(),
            gallery_title: "Schupka Hochzeitsgalerie".to_string(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            thumbnail_seek_secs: 1.0,
            thumbnail_jpeg_quality: 80,
        }
    }
}

impl Default for CaptionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: "gemini-3-flash-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            temperature: 0.7,
            top_p: 0.95,
            api_key: None,
        }
    }
}

impl Config {
    /// Load the config file if present, then apply environment overrides.
    ///
    /// A malformed file is logged and ignored.
    pub fn load() -> Self {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                tracing::error!(path = %path.display(), error = %e, "ignoring config file");
                Self::default()
            }),
            _ => Self::default(),
        };
        config.apply_env_overrides();
        config
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("API_KEY") {
            if !key.is_empty() {
                self.captions.api_key = Some(key);
            }
        }
        if let Ok(path) = std::env::var("GUESTBOOK_DB") {
            if !path.is_empty() {
                self.database_path = Some(PathBuf::from(path));
            }
        }
    }

    /// Where the gallery database lives.
    ///
    /// Defaults to `<data_dir>/wedding-guestbook/guestbook.db`, falling back to
    /// the home directory and finally the working directory.
    pub fn database_path(&self) -> PathBuf {
        if let Some(path) = &self.database_path {
            return path.clone();
        }
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push("guestbook.db");
        path
    }
}
