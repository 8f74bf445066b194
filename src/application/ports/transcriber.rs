use async_trait::async_trait;

/// Seam for the external speech-to-text engine. One call per request; any
/// retrying is the caller's decision.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio: &[u8]) -> Result<String, TranscribeError>;
}

/// Classified transcription failure. The variant decides the HTTP status at
/// the request boundary, so callers can distinguish their own bad input from
/// a retriable engine outage.
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    #[error("{0}")]
    Input(String),
    #[error("Could not understand audio")]
    Unintelligible,
    #[error("speech service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("{0}")]
    Internal(String),
}
