/// Upload flow
///
/// Turns a picked file plus the guest's name into a new `MediaItem`:
/// validate, read into a data URL, grab a video thumbnail if possible,
/// and optionally caption the photo.
use std::path::{Path, PathBuf};

use super::{data_url, thumbnail};
use crate::caption::CaptionService;
use crate::config::MediaConfig;
use crate::error::UploadError;
use crate::state::data::{new_item_id, now_millis, MediaItem, MediaType};

/// Fallback when the extension is unknown; always rejected as upload
const UNKNOWN_MIME: &str = "application/octet-stream";

/// Extensions the file picker offers and their MIME types
const MIME_TYPES: &[(&str, &str)] = &[
    // Photos
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("avif", "image/avif"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    // Videos
    ("mp4", "video/mp4"),
    ("m4v", "video/x-m4v"),
    ("mov", "video/quicktime"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("avi", "video/x-msvideo"),
    ("3gp", "video/3gpp"),
];

/// Extensions for the native file picker filter
pub fn supported_extensions() -> Vec<&'static str> {
    MIME_TYPES.iter().map(|(ext, _)| *ext).collect()
}

/// What the guest submitted
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub guest_name: String,
    pub path: PathBuf,
}

impl MediaType {
    /// Classify a MIME type; anything other than a photo or video is refused
    pub fn from_mime(mime: &str) -> Result<Self, UploadError> {
        if mime.starts_with("image/") {
            Ok(MediaType::Image)
        } else if mime.starts_with("video/") {
            Ok(MediaType::Video)
        } else {
            Err(UploadError::UnsupportedType(mime.to_string()))
        }
    }
}

/// The trimmed display name, or `MissingName` if nothing is left
pub fn validate_guest_name(name: &str) -> Result<&str, UploadError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(UploadError::MissingName)
    } else {
        Ok(trimmed)
    }
}

/// Guess the MIME type from the file extension
pub fn detect_mime(path: &Path) -> &'static str {
    let Some(extension) = path.extension() else {
        return UNKNOWN_MIME;
    };
    let ext = extension.to_string_lossy().to_lowercase();

    MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
        .unwrap_or(UNKNOWN_MIME)
}

/// Validate the request and build the new gallery item.
///
/// Validation happens before any file access, so a rejected upload
/// touches nothing.
pub async fn prepare_upload(
    request: UploadRequest,
    media: MediaConfig,
    captions: Option<CaptionService>,
) -> Result<MediaItem, UploadError> {
    let guest_name = validate_guest_name(&request.guest_name)?.to_string();
    let mime = detect_mime(&request.path);
    let media_type = MediaType::from_mime(mime)?;

    let bytes = tokio::fs::read(&request.path)
        .await
        .map_err(|e| UploadError::Read(e.to_string()))?;

    let thumbnail = match media_type {
        MediaType::Video => match thumbnail::capture_video_frame(request.path.clone(), media).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!(error = %e, "Could not generate thumbnail");
                None
            }
        },
        MediaType::Image => None,
    };

    let url = data_url::encode(mime, &bytes);

    let caption = match (&captions, media_type) {
        (Some(service), MediaType::Image) if service.is_enabled() => {
            let payload = data_url::payload(&url).unwrap_or_default();
            service.generate_wedding_caption(payload, mime).await
        }
        _ => String::new(),
    };

    tracing::info!(
        "📤 Prepared {:?} upload from {} ({} KB)",
        media_type,
        guest_name,
        bytes.len() / 1024
    );

    Ok(MediaItem {
        id: new_item_id(),
        url,
        thumbnail,
        media_type,
        caption,
        guest_name,
        timestamp: now_millis(),
    })
}
