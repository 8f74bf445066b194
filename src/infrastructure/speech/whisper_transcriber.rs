use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use crate::application::ports::{TranscribeError, Transcriber};

/// Speech-to-text over a Whisper-style `audio/transcriptions` HTTP API.
///
/// Failure classification: connection errors and 429/5xx responses mean the
/// engine is unavailable and the caller may retry later; a successful
/// response with an empty transcript means the engine could not understand
/// the speech.
pub struct OpenAiWhisperTranscriber {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    language: String,
}

impl OpenAiWhisperTranscriber {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        language: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
            language: language.unwrap_or_else(|| "en".to_string()),
        }
    }
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[async_trait]
impl Transcriber for OpenAiWhisperTranscriber {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscribeError> {
        let url = format!("{}/audio/transcriptions", self.base_url);

        let file_part = multipart::Part::bytes(audio.to_vec())
            .file_name("audio.wav")
            .mime_str("audio/wav")
            .map_err(|e| TranscribeError::Internal(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("language", self.language.clone())
            .text("response_format", "json")
            .part("file", file_part);

        tracing::debug!(model = %self.model, language = %self.language, "Sending audio to transcription API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscribeError::ServiceUnavailable(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            let message = format!("status {}: {}", status, body);

            if status == reqwest::StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                return Err(TranscribeError::ServiceUnavailable(message));
            }
            return Err(TranscribeError::Internal(message));
        }

        let result: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| TranscribeError::Internal(format!("parse response: {}", e)))?;

        let text = result.text.trim().to_string();
        if text.is_empty() {
            return Err(TranscribeError::Unintelligible);
        }

        tracing::info!(chars = text.len(), "Transcription completed");

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcription_response_parses() {
        let json = r#"{"text": "hello world"}"#;
        let result: TranscriptionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(result.text, "hello world");
    }

    #[test]
    fn transcription_response_tolerates_extra_fields() {
        let json = r#"{"text": "hi", "duration": 1.5}"#;
        let result: TranscriptionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(result.text, "hi");
    }
}
