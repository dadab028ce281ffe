/// Video thumbnails
///
/// A still frame is grabbed with an external `ffmpeg` binary and stored as
/// a JPEG data URL next to the video. Everything here is best-effort: the
/// caller logs failures and shows a placeholder tile instead.
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::data_url;
use crate::config::MediaConfig;
use crate::error::{GuestbookError, Result};

/// Longest edge of a stored thumbnail
const MAX_THUMBNAIL_EDGE: u32 = 1280;

/// Capture one frame from `video_path` and return it as a JPEG data URL
pub async fn capture_video_frame(video_path: PathBuf, options: MediaConfig) -> Result<String> {
    // Spawn blocking because ffmpeg and JPEG encoding are slow
    tokio::task::spawn_blocking(move || capture_video_frame_blocking(&video_path, &options))
        .await?
}

/// Blocking implementation of frame capture
fn capture_video_frame_blocking(video_path: &Path, options: &MediaConfig) -> Result<String> {
    if !video_path.exists() {
        return Err(GuestbookError::Thumbnail(format!(
            "file not found: {}",
            video_path.display()
        )));
    }

    // Clips shorter than the seek position produce no frame at all,
    // so fall back to the very first frame.
    let mut frame = extract_frame(video_path, options, Some(options.thumbnail_seek_secs))?;
    if frame.is_empty() {
        frame = extract_frame(video_path, options, None)?;
    }
    if frame.is_empty() {
        return Err(GuestbookError::Thumbnail("ffmpeg returned no frame".to_string()));
    }

    let data_url = frame_to_data_url(&frame, options.thumbnail_jpeg_quality)?;
    tracing::debug!("📸 Captured video frame for {:?}", video_path.file_name());
    Ok(data_url)
}

/// Ask ffmpeg for a single PNG frame on stdout
fn extract_frame(video_path: &Path, options: &MediaConfig, seek_secs: Option<f32>) -> Result<Vec<u8>> {
    let mut command = Command::new(&options.ffmpeg_path);
    command.args(["-v", "error"]);
    if let Some(secs) = seek_secs.filter(|s| *s > 0.0) {
        command.arg("-ss").arg(format!("{secs:.3}"));
    }
    command
        .arg("-i")
        .arg(video_path)
        .args(["-frames:v", "1", "-f", "image2pipe", "-vcodec", "png", "-"]);

    let output = command.output().map_err(|e| {
        GuestbookError::Thumbnail(format!("could not run {}: {}", options.ffmpeg_path, e))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GuestbookError::Thumbnail(format!(
            "ffmpeg exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    Ok(output.stdout)
}

/// Re-encode an image as a JPEG data URL, shrinking very large frames
pub fn frame_to_data_url(frame: &[u8], quality: u8) -> Result<String> {
    let img = image::load_from_memory(frame)
        .map_err(|e| GuestbookError::Thumbnail(format!("undecodable frame: {e}")))?;

    let img = if img.width().max(img.height()) > MAX_THUMBNAIL_EDGE {
        img.resize(MAX_THUMBNAIL_EDGE, MAX_THUMBNAIL_EDGE, FilterType::Lanczos3)
    } else {
        img
    };

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut jpeg = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut jpeg, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)
        .map_err(|e| GuestbookError::Thumbnail(format!("JPEG encoding failed: {e}")))?;

    Ok(data_url::encode("image/jpeg", &jpeg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 120, 90, 128]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_frame_becomes_jpeg_data_url() {
        let url = frame_to_data_url(&png(64, 48), 80).unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));

        let (_, jpeg) = data_url::decode(&url).unwrap();
        let decoded = image::load_from_memory_with_format(&jpeg, ImageFormat::Jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 48));
    }

    #[test]
    fn test_large_frames_are_shrunk() {
        let url = frame_to_data_url(&png(2560, 1440), 80).unwrap();
        let (_, jpeg) = data_url::decode(&url).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.width(), 1280);
        assert_eq!(decoded.height(), 720);
    }

    #[test]
    fn test_garbage_frame_is_an_error() {
        assert!(frame_to_data_url(b"not an image", 80).is_err());
    }

    #[tokio::test]
    async fn test_missing_ffmpeg_fails_gracefully() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"\x00\x00\x00\x18ftypmp42").unwrap();

        let options = MediaConfig {
            ffmpeg_path: "/nonexistent/ffmpeg-for-tests".to_string(),
            ..MediaConfig::default()
        };

        let result = capture_video_frame(video, options).await;
        assert!(matches!(result, Err(GuestbookError::Thumbnail(_))));
    }

    #[tokio::test]
    async fn test_missing_video_fails_gracefully() {
        let result =
            capture_video_frame(PathBuf::from("/nonexistent/clip.mp4"), MediaConfig::default()).await;
        assert!(result.is_err());
    }
}
