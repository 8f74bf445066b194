mod speech_synthesizer;
mod whisper_transcriber;

pub use speech_synthesizer::OpenAiSpeechSynthesizer;
pub use whisper_transcriber::OpenAiWhisperTranscriber;
