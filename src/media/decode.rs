/// Display previews for gallery items
///
/// Photos show their own pixels, videos show their thumbnail. The bytes
/// are handed to iced undecoded; only the dimensions are read here so
/// the masonry layout knows each tile's height.
use iced::widget::image::Handle;
use image::ImageReader;
use std::io::Cursor;

use super::download::fetch_bytes;
use crate::error::{GuestbookError, Result};
use crate::state::data::{MediaItem, MediaType};

/// A decoded-on-demand picture plus its size
#[derive(Debug, Clone)]
pub struct Preview {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl Preview {
    /// Height divided by width, used to stack masonry columns
    pub fn aspect_ratio(&self) -> f32 {
        if self.width == 0 {
            return 1.0;
        }
        self.height as f32 / self.width as f32
    }
}

/// URL of the picture to show for `item`, if there is one
pub fn preview_source(item: &MediaItem) -> Option<&str> {
    match item.media_type {
        MediaType::Image => Some(&item.url),
        MediaType::Video => item.thumbnail.as_deref(),
    }
}

/// Build the preview for `item`. `Ok(None)` means a video without thumbnail.
pub async fn load_preview(item: MediaItem) -> Result<Option<Preview>> {
    let Some(source) = preview_source(&item) else {
        return Ok(None);
    };
    let bytes = fetch_bytes(source).await?;

    tokio::task::spawn_blocking(move || preview_from_bytes(bytes).map(Some)).await?
}

/// Read the dimensions and wrap the bytes for iced
pub fn preview_from_bytes(bytes: Vec<u8>) -> Result<Preview> {
    let (width, height) = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| GuestbookError::UnreadablePicture(e.to_string()))?;

    Ok(Preview {
        handle: Handle::from_bytes(bytes),
        width,
        height,
    })
}
