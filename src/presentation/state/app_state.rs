use std::sync::Arc;

use crate::application::services::{SpeechToTextService, TextToSpeechService};
use crate::infrastructure::storage::MediaDir;

/// Dependency-injected services handed to request handlers; there is no
/// module-level state anywhere in the crate.
#[derive(Clone)]
pub struct AppState {
    pub speech_to_text: Arc<SpeechToTextService>,
    pub text_to_speech: Arc<TextToSpeechService>,
    pub media: Arc<MediaDir>,
}
