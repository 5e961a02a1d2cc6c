/**
 * Error-to-Response Conversion
 *
 * Converts `ApiError` values into HTTP responses with a JSON body of the
 * shape `{"error": "...", "status": 400}` (plus `"field"` for validation
 * errors). 5xx errors log the underlying cause and send only an opaque
 * message to the client.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            match &self {
                ApiError::Persistence(err) => {
                    tracing::error!("Database error: {:?}", err);
                }
                ApiError::Internal { message } => {
                    tracing::error!("Internal error: {}", message);
                }
                other => {
                    tracing::error!("Unexpected server error: {:?}", other);
                }
            }
        } else {
            tracing::warn!("Request failed ({}): {}", status, self);
        }

        let body = match &self {
            ApiError::Validation { field, message } => json!({
                "error": message,
                "field": field,
                "status": status.as_u16(),
            }),
            other => json!({
                "error": other.to_string(),
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_validation_response_includes_field() {
        let response = ApiError::validation("email", "Invalid email format").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["field"], "email");
        assert_eq!(body["status"], 400);
    }

    #[tokio::test]
    async fn test_persistence_response_hides_details() {
        let response = ApiError::Persistence(sqlx::Error::RowNotFound).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Internal server error");
    }
}
