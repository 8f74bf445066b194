mod settings;

pub use settings::{
    LoggingSettings, MediaSettings, ServerSettings, Settings, SynthesisSettings,
    TranscriptionSettings,
};
