// POST /moderate — classify one chat message.
//
// The body is taken as raw bytes and validated by ModerationRequest::from_json
// rather than through axum's Json extractor, so every rejection carries the
// offending field name:
//   not JSON at all                 → 400
//   wrong shape / missing / mistyped → 422
// No result body is produced for a rejected request.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::{ModerationRequest, ValidationError};
use crate::web::{api_error, AppState};

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::Malformed(_) => StatusCode::BAD_REQUEST,
            ValidationError::NotAnObject
            | ValidationError::MissingField { .. }
            | ValidationError::WrongType { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.to_string(),
            "field": self.field(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

pub async fn moderate(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match ModerationRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected moderation request");
            return e.into_response();
        }
    };

    match state.scorer.moderate(&request).await {
        Ok(result) => {
            tracing::info!(
                user_id = %request.user_id,
                chars = request.text.chars().count(),
                is_toxic = result.is_toxic,
                "Moderated message"
            );
            Json(result).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, user_id = %request.user_id, "Scorer failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Moderation failed")
        }
    }
}
