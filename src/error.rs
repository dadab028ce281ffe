/// Error types shared across the guestbook
use thiserror::Error;

/// Errors raised by storage, media handling and configuration
#[derive(Debug, Error)]
pub enum GuestbookError {
    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("could not serialize gallery: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid config file: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid data URL: {0}")]
    InvalidDataUrl(String),

    #[error("unreadable picture: {0}")]
    UnreadablePicture(String),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedUrl(String),

    #[error("caption service has no API key")]
    MissingApiKey,

    #[error("thumbnail capture failed: {0}")]
    Thumbnail(String),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, GuestbookError>;

/// Rejections from the upload form.
///
/// The `Display` text is shown to the guest as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Bitte gib zuerst deinen Namen ein.")]
    MissingName,

    #[error("Bitte nur Fotos oder Videos hochladen.")]
    UnsupportedType(String),

    #[error("Die Datei konnte nicht gelesen werden: {0}")]
    Read(String),
}
