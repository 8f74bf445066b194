use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::domain::ArtifactName;
use crate::infrastructure::storage::MediaStoreError;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

/// Serve a previously generated synthesis artifact by name. Lookups are
/// confined to the media directory: names that fail validation are
/// indistinguishable from missing artifacts.
#[tracing::instrument(skip(state))]
pub async fn audio_file_handler(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> impl IntoResponse {
    let Some(name) = ArtifactName::parse(&filename) else {
        tracing::warn!(filename = %filename, "Rejected artifact name");
        return not_found();
    };

    match state.media.read_artifact(&name).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, name.content_type())],
            bytes,
        )
            .into_response(),
        Err(MediaStoreError::NotFound(_)) => not_found(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read artifact");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("Audio file not found")),
    )
        .into_response()
}
