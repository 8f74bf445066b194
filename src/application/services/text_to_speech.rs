use std::sync::Arc;

use crate::application::ports::{SynthesizeError, Synthesizer};
use crate::domain::ArtifactName;
use crate::infrastructure::storage::MediaDir;

/// Synthesizes speech for non-empty text and persists it as a uniquely named
/// artifact. Identical inputs always produce distinct artifacts.
pub struct TextToSpeechService {
    media: Arc<MediaDir>,
    synthesizer: Arc<dyn Synthesizer>,
}

impl TextToSpeechService {
    pub fn new(media: Arc<MediaDir>, synthesizer: Arc<dyn Synthesizer>) -> Self {
        Self { media, synthesizer }
    }

    pub async fn synthesize_to_artifact(
        &self,
        text: &str,
    ) -> Result<ArtifactName, SynthesizeError> {
        if text.is_empty() {
            return Err(SynthesizeError::Input("No text provided".to_string()));
        }

        let audio = self.synthesizer.synthesize(text).await?;

        let name = ArtifactName::generate();
        self.media
            .write_artifact(&name, &audio)
            .await
            .map_err(|e| SynthesizeError::Internal(format!("writing artifact: {}", e)))?;

        tracing::info!(artifact = %name, bytes = audio.len(), "Synthesis artifact written");

        Ok(name)
    }
}
