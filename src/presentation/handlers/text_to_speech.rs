use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::SynthesizeError;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct SynthesisRequest {
    pub text: Option<String>,
}

#[derive(Serialize)]
pub struct SynthesisResponse {
    pub url: String,
    pub text: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn text_to_speech_handler(
    State(state): State<AppState>,
    Json(request): Json<SynthesisRequest>,
) -> impl IntoResponse {
    let Some(text) = request.text.filter(|t| !t.is_empty()) else {
        tracing::warn!("Text-to-speech request without text");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("No text provided")),
        )
            .into_response();
    };

    match state.text_to_speech.synthesize_to_artifact(&text).await {
        Ok(name) => (
            StatusCode::OK,
            Json(SynthesisResponse {
                url: format!("/api/audio/{}", name),
                text,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Synthesis failed");
            let status = match e {
                SynthesizeError::Input(_) => StatusCode::BAD_REQUEST,
                SynthesizeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ErrorResponse::new(e.to_string()))).into_response()
        }
    }
}
