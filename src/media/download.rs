/// Saving gallery items to disk
///
/// Inline items are decoded locally, remote ones are fetched over HTTP.
/// If that fails the URL is handed to the system browser instead.
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::data_url;
use crate::error::{GuestbookError, Result};
use crate::state::data::MediaItem;

/// How a download request ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Saved(PathBuf),
    /// Saving failed; the link was opened instead
    OpenedLink,
    /// Saving failed and the link could not be opened either
    Failed(String),
}

/// Give up on hosts that do not accept the connection in time
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client used for remote item URLs
fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Load the bytes behind an item URL
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    if data_url::is_data_url(url) {
        let (_, bytes) = data_url::decode(url)?;
        return Ok(bytes);
    }

    if url.starts_with("https://") || url.starts_with("http://") {
        let response = http_client().get(url).send().await?.error_for_status()?;
        return Ok(response.bytes().await?.to_vec());
    }

    Err(GuestbookError::UnsupportedUrl(url.to_string()))
}

/// Fetch `item` and write it to `destination`
pub async fn save_to(item: &MediaItem, destination: &Path) -> Result<()> {
    let bytes = fetch_bytes(&item.url).await?;
    tokio::fs::write(destination, &bytes).await?;
    Ok(())
}

/// Save `item` to `destination`, falling back to opening the URL directly
pub async fn download(item: MediaItem, destination: PathBuf) -> DownloadOutcome {
    match save_to(&item, &destination).await {
        Ok(()) => {
            tracing::info!("💾 Saved {} to {}", item.id, destination.display());
            DownloadOutcome::Saved(destination)
        }
        Err(e) => {
            tracing::error!(error = %e, "Download fehlgeschlagen");
            open_link(&item).await
        }
    }
}

/// Best-effort: let the system deal with the item URL.
///
/// Data URLs are too long for most handlers, so they are written to a
/// temporary file first and that file is opened.
pub async fn open_link(item: &MediaItem) -> DownloadOutcome {
    let target = if data_url::is_data_url(&item.url) {
        match write_temp_copy(item).await {
            Ok(path) => path.to_string_lossy().to_string(),
            Err(e) => return DownloadOutcome::Failed(e.to_string()),
        }
    } else {
        item.url.clone()
    };

    match webbrowser::open(&target) {
        Ok(()) => DownloadOutcome::OpenedLink,
        Err(e) => {
            tracing::error!(error = %e, "could not open {}", item.fallback_file_name());
            DownloadOutcome::Failed(e.to_string())
        }
    }
}

/// Write an inline item into the temp directory, e.g. to play a video
pub async fn write_temp_copy(item: &MediaItem) -> Result<PathBuf> {
    let path = std::env::temp_dir().join(item.download_file_name());
    save_to(item, &path).await?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::MediaType;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Serve one canned HTTP response on a local port
    fn serve_once(status: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        });

        format!("http://{address}/foto.jpg")
    }

    fn inline_item(url: &str) -> MediaItem {
        MediaItem {
            id: "dl0000001".to_string(),
            url: url.to_string(),
            thumbnail: None,
            media_type: MediaType::Image,
            caption: String::new(),
            guest_name: "Papa".to_string(),
            timestamp: 1_718_000_000_000,
        }
    }

    #[tokio::test]
    async fn test_fetch_inline_bytes() {
        assert_eq!(fetch_bytes("data:image/png;base64,aGk=").await.unwrap(), b"hi");
    }

    #[tokio::test]
    async fn test_fetch_rejects_unknown_scheme() {
        let result = fetch_bytes("ftp://example.com/a.jpg").await;
        assert!(matches!(result, Err(GuestbookError::UnsupportedUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_remote_bytes() {
        let url = serve_once("200 OK", b"remote");
        assert_eq!(fetch_bytes(&url).await.unwrap(), b"remote");
    }

    #[tokio::test]
    async fn test_fetch_remote_error_status() {
        let url = serve_once("404 Not Found", b"");
        assert!(matches!(fetch_bytes(&url).await, Err(GuestbookError::Http(_))));
    }

    #[test]
    fn test_connect_timeout_is_bounded() {
        assert!(CONNECT_TIMEOUT <= Duration::from_secs(10));
        assert!(CONNECT_TIMEOUT > Duration::ZERO);
    }

    #[tokio::test]
    async fn test_save_writes_decoded_file() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("hochzeit_dl0000001.jpg");

        let outcome = download(inline_item("data:image/png;base64,aGk="), destination.clone()).await;

        assert_eq!(outcome, DownloadOutcome::Saved(destination.clone()));
        assert_eq!(std::fs::read(destination).unwrap(), b"hi");
    }

    #[tokio::test]
    async fn test_save_to_reports_bad_payload() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("broken.jpg");

        let result = save_to(&inline_item("data:image/png;base64,@@@"), &destination).await;

        assert!(result.is_err());
        assert!(!destination.exists());
    }

    #[tokio::test]
    async fn test_temp_copy_uses_download_name() {
        let item = inline_item("data:image/png;base64,aGk=");
        let path = write_temp_copy(&item).await.unwrap();

        assert!(path.ends_with("hochzeit_dl0000001.jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"hi");
        let _ = std::fs::remove_file(path);
    }
}
