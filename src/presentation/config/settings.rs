use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub media: MediaSettings,
    pub transcription: TranscriptionSettings,
    pub synthesis: SynthesisSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MediaSettings {
    pub dir: PathBuf,
    pub max_upload_mb: usize,
    /// Synthesis artifacts older than this are swept; 0 disables sweeping
    /// and artifacts are retained indefinitely.
    pub artifact_ttl_secs: u64,
    pub sweep_interval_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SynthesisSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub voice: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Build settings from environment variables, with defaults suitable for
    /// local development.
    pub fn from_env() -> Self {
        let openai_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();

        Self {
            server: ServerSettings {
                host: env_or("VOICEGATE_HOST", "0.0.0.0"),
                port: env_parse_or("VOICEGATE_PORT", 5000),
            },
            media: MediaSettings {
                dir: PathBuf::from(env_or("VOICEGATE_MEDIA_DIR", "uploads")),
                max_upload_mb: env_parse_or("VOICEGATE_MAX_UPLOAD_MB", 25),
                artifact_ttl_secs: env_parse_or("VOICEGATE_ARTIFACT_TTL_SECS", 3600),
                sweep_interval_secs: env_parse_or("VOICEGATE_SWEEP_INTERVAL_SECS", 300),
            },
            transcription: TranscriptionSettings {
                api_key: env_or("VOICEGATE_TRANSCRIPTION_API_KEY", &openai_key),
                base_url: env_or(
                    "VOICEGATE_TRANSCRIPTION_BASE_URL",
                    "https://api.openai.com/v1",
                ),
                model: env_or("VOICEGATE_TRANSCRIPTION_MODEL", "whisper-1"),
                language: env_or("VOICEGATE_TRANSCRIPTION_LANGUAGE", "en"),
            },
            synthesis: SynthesisSettings {
                api_key: env_or("VOICEGATE_SYNTHESIS_API_KEY", &openai_key),
                base_url: env_or("VOICEGATE_SYNTHESIS_BASE_URL", "https://api.openai.com/v1"),
                model: env_or("VOICEGATE_SYNTHESIS_MODEL", "tts-1"),
                voice: env_or("VOICEGATE_SYNTHESIS_VOICE", "alloy"),
            },
            logging: LoggingSettings {
                level: env_or("VOICEGATE_LOG_LEVEL", "debug"),
                enable_json: std::env::var("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
            },
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.media.max_upload_mb * 1024 * 1024
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
