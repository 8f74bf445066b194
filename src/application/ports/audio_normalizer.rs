use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

/// Seam for the transcoding step that turns an arbitrary uploaded container
/// into canonical PCM (mono, 16 kHz, 16-bit) at `output`.
///
/// Failure is an ordinary result, never fatal: the pipeline's fallback to
/// the original file is an explicit branch in the caller.
#[async_trait]
pub trait AudioNormalizer: Send + Sync {
    async fn normalize(&self, input: &Path, output: &Path) -> Result<(), NormalizeError>;
}

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("transcoder spawn failed: {0}")]
    Spawn(String),
    #[error("transcode failed: {0}")]
    Transcode(String),
    #[error("transcode timed out after {0:?}")]
    TimedOut(Duration),
}
