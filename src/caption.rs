/// Generated captions for uploaded photos
///
/// Sends the photo to a Gemini model and asks for a short German greeting.
/// The service never fails from the caller's point of view: errors turn
/// into a stock caption. It is disabled unless `captions.enabled` is set.
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::CaptionConfig;
use crate::error::{GuestbookError, Result};

const PROMPT: &str = "Analysiere dieses Hochzeitsfoto und schreibe einen kurzen, poetischen und \
herzlichen Kommentar oder Glückwunsch auf Deutsch (maximal 15 Wörter). Erzeuge nur den Text ohne \
Anführungszeichen.";

/// Used when the model answers with no text
pub const EMPTY_RESPONSE_CAPTION: &str = "Ein unvergesslicher Moment.";

/// Used when the request fails
pub const FAILURE_CAPTION: &str = "Ein wunderschöner Moment für die Ewigkeit.";

#[derive(Debug, Clone)]
pub struct CaptionService {
    config: CaptionConfig,
    client: reqwest::Client,
}

impl CaptionService {
    pub fn new(config: CaptionConfig) -> Self {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self { config, client }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Caption a base64-encoded image. Always returns some text.
    pub async fn generate_wedding_caption(&self, base64_image: &str, mime_type: &str) -> String {
        match self.request_caption(base64_image, mime_type).await {
            Ok(Some(text)) => text,
            Ok(None) => EMPTY_RESPONSE_CAPTION.to_string(),
            Err(e) => {
                tracing::error!(error = %e, "Gemini Error");
                FAILURE_CAPTION.to_string()
            }
        }
    }

    async fn request_caption(&self, base64_image: &str, mime_type: &str) -> Result<Option<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(GuestbookError::MissingApiKey)?;

        let url = format!(
            "{}/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        );

        let response: Value = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(&self.request_body(base64_image, mime_type))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(extract_text(&response))
    }

    /// JSON body of a `generateContent` call
    fn request_body(&self, base64_image: &str, mime_type: &str) -> Value {
        json!({
            "contents": [{
                "parts": [
                    { "inlineData": { "mimeType": mime_type, "data": base64_image } },
                    { "text": PROMPT }
                ]
            }],
            "generationConfig": {
                "temperature": self.config.temperature,
                "topP": self.config.top_p
            }
        })
    }
}

/// Concatenate the text parts of the first candidate
fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
