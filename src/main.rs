use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use voicegate::application::services::{
    SpeechToTextService, TextToSpeechService, spawn_artifact_sweeper,
};
use voicegate::infrastructure::audio::{
    DEFAULT_FFMPEG_BINARY, FfmpegNormalizer, check_ffmpeg_binary,
};
use voicegate::infrastructure::observability::{TracingConfig, init_tracing};
use voicegate::infrastructure::speech::{OpenAiSpeechSynthesizer, OpenAiWhisperTranscriber};
use voicegate::infrastructure::storage::MediaDir;
use voicegate::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(
        TracingConfig {
            default_level: settings.logging.level.clone(),
            json_format: settings.logging.enable_json,
            ..TracingConfig::default()
        },
        settings.server.port,
    );

    if !check_ffmpeg_binary(DEFAULT_FFMPEG_BINARY) {
        tracing::warn!("ffmpeg not found; uploads will be transcribed without normalization");
    }

    let media = Arc::new(MediaDir::new(settings.media.dir.clone())?);

    let transcriber = Arc::new(OpenAiWhisperTranscriber::new(
        settings.transcription.api_key.clone(),
        Some(settings.transcription.base_url.clone()),
        Some(settings.transcription.model.clone()),
        Some(settings.transcription.language.clone()),
    ));
    let synthesizer = Arc::new(OpenAiSpeechSynthesizer::new(
        settings.synthesis.api_key.clone(),
        Some(settings.synthesis.base_url.clone()),
        Some(settings.synthesis.model.clone()),
        Some(settings.synthesis.voice.clone()),
    ));

    let speech_to_text = Arc::new(SpeechToTextService::new(
        Arc::clone(&media),
        Arc::new(FfmpegNormalizer::default()),
        transcriber,
    ));
    let text_to_speech = Arc::new(TextToSpeechService::new(Arc::clone(&media), synthesizer));

    if settings.media.artifact_ttl_secs > 0 {
        spawn_artifact_sweeper(
            Arc::clone(&media),
            Duration::from_secs(settings.media.artifact_ttl_secs),
            Duration::from_secs(settings.media.sweep_interval_secs.max(1)),
        );
    }

    let state = AppState {
        speech_to_text,
        text_to_speech,
        media,
    };

    let router = create_router(state, settings.max_upload_bytes());

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
