/// `data:<mime>;base64,<payload>` URLs
///
/// Uploaded files are stored inline in the gallery as data URLs, the
/// same representation the gallery JSON has always used.
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::{GuestbookError, Result};

const PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Wrap raw bytes into a data URL
pub fn encode(mime: &str, bytes: &[u8]) -> String {
    format!("{PREFIX}{mime}{BASE64_MARKER},{}", BASE64.encode(bytes))
}

/// Split a data URL into its MIME type and decoded bytes
pub fn decode(url: &str) -> Result<(String, Vec<u8>)> {
    let rest = url
        .strip_prefix(PREFIX)
        .ok_or_else(|| GuestbookError::InvalidDataUrl("missing data: prefix".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| GuestbookError::InvalidDataUrl("missing payload".to_string()))?;

    let mime = header.strip_suffix(BASE64_MARKER).ok_or_else(|| {
        GuestbookError::InvalidDataUrl("only base64 payloads are supported".to_string())
    })?;

    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|e| GuestbookError::InvalidDataUrl(e.to_string()))?;

    Ok((mime.to_string(), bytes))
}

/// The base64 payload without decoding it
pub fn payload(url: &str) -> Option<&str> {
    url.strip_prefix(PREFIX)?.split_once(',').map(|(_, data)| data)
}

pub fn is_data_url(url: &str) -> bool {
    url.starts_with(PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_format() {
        assert_eq!(encode("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_decode_recovers_mime_and_bytes() {
        let (mime, bytes) = decode("data:video/mp4;base64,aGk=").unwrap();
        assert_eq!(mime, "video/mp4");
        assert_eq!(bytes, b"hi");
    }

    #[test]
    fn test_decode_rejects_remote_urls() {
        assert!(matches!(
            decode("https://example.com/a.jpg"),
            Err(GuestbookError::InvalidDataUrl(_))
        ));
    }

    #[test]
    fn test_decode_rejects_plain_text_payloads() {
        assert!(decode("data:text/plain,hello").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        assert!(decode("data:image/png;base64,@@@").is_err());
    }

    #[test]
    fn test_payload() {
        assert_eq!(payload("data:image/png;base64,aGk="), Some("aGk="));
        assert_eq!(payload("https://example.com"), None);
        assert!(is_data_url("data:image/png;base64,aGk="));
    }
}
