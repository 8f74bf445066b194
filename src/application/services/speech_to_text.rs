use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{AudioNormalizer, TranscribeError, Transcriber};
use crate::domain::UploadedAudio;
use crate::infrastructure::storage::MediaDir;

const DEFAULT_UPLOAD_EXTENSION: &str = "wav";

/// The upload pipeline: persist the clip, normalize it to canonical PCM,
/// transcribe, and clean up.
///
/// Invariant: both temporary files this service creates are removed before
/// `transcribe_upload` returns, on every exit path.
pub struct SpeechToTextService {
    media: Arc<MediaDir>,
    normalizer: Arc<dyn AudioNormalizer>,
    transcriber: Arc<dyn Transcriber>,
}

impl SpeechToTextService {
    pub fn new(
        media: Arc<MediaDir>,
        normalizer: Arc<dyn AudioNormalizer>,
        transcriber: Arc<dyn Transcriber>,
    ) -> Self {
        Self {
            media,
            normalizer,
            transcriber,
        }
    }

    pub async fn transcribe_upload(
        &self,
        upload: UploadedAudio,
    ) -> Result<String, TranscribeError> {
        if upload.filename.is_empty() {
            return Err(TranscribeError::Input("No selected file".to_string()));
        }

        let extension = upload.extension().unwrap_or(DEFAULT_UPLOAD_EXTENSION);
        let raw_path = self.media.upload_path(extension);
        let pcm_path = self.media.normalized_path();

        let result = self.run(&upload, &raw_path, &pcm_path).await;

        self.media.remove_quietly(&raw_path).await;
        self.media.remove_quietly(&pcm_path).await;

        result
    }

    async fn run(
        &self,
        upload: &UploadedAudio,
        raw_path: &Path,
        pcm_path: &Path,
    ) -> Result<String, TranscribeError> {
        self.media
            .save(raw_path, &upload.data)
            .await
            .map_err(|e| TranscribeError::Internal(format!("saving upload: {}", e)))?;

        match self.media.persisted_len(raw_path).await {
            Some(len) if len > 0 => {}
            _ => {
                return Err(TranscribeError::Input(
                    "failed to save or file is empty".to_string(),
                ));
            }
        }

        let audio_path = match self.normalizer.normalize(raw_path, pcm_path).await {
            Ok(()) => pcm_path,
            Err(e) => {
                tracing::warn!(error = %e, "Normalization failed, transcribing original upload");
                raw_path
            }
        };

        let audio = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscribeError::Internal(format!("reading audio: {}", e)))?;

        let text = self.transcriber.transcribe(&audio).await?;

        tracing::info!(chars = text.len(), "Upload transcribed");

        Ok(text)
    }
}
