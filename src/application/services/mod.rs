mod artifact_sweeper;
mod speech_to_text;
mod text_to_speech;

pub use artifact_sweeper::spawn_artifact_sweeper;
pub use speech_to_text::SpeechToTextService;
pub use text_to_speech::TextToSpeechService;
