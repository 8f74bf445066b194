use serde::Serialize;

/// JSON error body shared by every endpoint. All failures are converted to
/// this shape at the request boundary; nothing propagates as an unhandled
/// fault.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
