/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the storage layer and the UI layer. The JSON shape is the
/// persisted format, so field names must stay stable.
use chrono::{Local, TimeZone, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Remote photo shown to first-time visitors
const DEMO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1511795409834-ef04bbd61622?auto=format&fit=crop&w=1200&q=80";

/// Length of generated item ids
const ID_LENGTH: usize = 9;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Kind of uploaded media
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// One uploaded photo or video with its metadata
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    /// Unique within the gallery
    pub id: String,
    /// Data URL for uploads, remote URL for the demo item
    pub url: String,
    /// Still frame for videos, as a JPEG data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub caption: String,
    pub guest_name: String,
    /// Upload time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl MediaItem {
    /// The welcome item seeded on first launch
    pub fn demo() -> Self {
        Self {
            id: "welcome-1".to_string(),
            url: DEMO_IMAGE_URL.to_string(),
            thumbnail: None,
            media_type: MediaType::Image,
            caption: String::new(),
            guest_name: "Hochzeits-Team".to_string(),
            timestamp: now_millis(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Suggested file name when saving the item
    pub fn download_file_name(&self) -> String {
        let extension = match self.media_type {
            MediaType::Image => "jpg",
            MediaType::Video => "mp4",
        };
        format!("hochzeit_{}.{}", self.id, extension)
    }

    /// Name used when the item is handed to the system as a plain link
    pub fn fallback_file_name(&self) -> String {
        format!("hochzeit_{}", self.id)
    }

    /// Upload date in German notation (e.g. "14.6.2025")
    pub fn display_date(&self) -> String {
        match Utc.timestamp_millis_opt(self.timestamp).single() {
            Some(utc) => utc.with_timezone(&Local).format("%-d.%-m.%Y").to_string(),
            None => String::new(),
        }
    }
}

/// Generate a random 9-character base-36 id
pub fn new_item_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
