use async_trait::async_trait;

/// Seam for the external text-to-speech engine.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>, SynthesizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesizeError {
    #[error("{0}")]
    Input(String),
    #[error("{0}")]
    Internal(String),
}
