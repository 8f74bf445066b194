mod audio_normalizer;
mod synthesizer;
mod transcriber;

pub use audio_normalizer::{AudioNormalizer, NormalizeError};
pub use synthesizer::{SynthesizeError, Synthesizer};
pub use transcriber::{TranscribeError, Transcriber};
