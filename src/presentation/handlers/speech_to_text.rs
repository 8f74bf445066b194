use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::TranscribeError;
use crate::domain::UploadedAudio;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub text: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn speech_to_text_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut upload: Option<UploadedAudio> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!(
                        "Failed to read multipart: {}",
                        e
                    ))),
                )
                    .into_response();
            }
        };

        if field.name() != Some("audio") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = match field.bytes().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read audio field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::new(format!("Failed to read file: {}", e))),
                )
                    .into_response();
            }
        };

        upload = Some(UploadedAudio::new(filename, data.to_vec()));
        break;
    }

    let Some(upload) = upload else {
        tracing::warn!("Speech-to-text request without an audio field");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No audio file provided")),
        )
            .into_response();
    };

    if upload.filename.is_empty() {
        tracing::warn!("Speech-to-text request with an unnamed file");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No selected file")),
        )
            .into_response();
    }

    tracing::debug!(filename = %upload.filename, bytes = upload.data.len(), "Processing audio upload");

    match state.speech_to_text.transcribe_upload(upload).await {
        Ok(text) => (StatusCode::OK, Json(TranscriptResponse { text })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Transcription failed");
            (error_status(&e), Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}

fn error_status(error: &TranscribeError) -> StatusCode {
    match error {
        TranscribeError::Input(_) | TranscribeError::Unintelligible => StatusCode::BAD_REQUEST,
        TranscribeError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        TranscribeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
