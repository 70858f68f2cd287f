use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use albums_types::{AlbumId, DecodeError};

pub const NOT_FOUND_MESSAGE: &str = "album not found";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("album not found: {0}")]
    AlbumNotFound(AlbumId),

    #[error("invalid album payload: {0}")]
    Decode(#[from] DecodeError),

    #[error("failed to read request body: {0}")]
    Body(String),

    #[error("store error: {0}")]
    Store(#[from] albums_store::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::AlbumNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::AlbumNotFound(_) => json!({ "message": NOT_FOUND_MESSAGE }),
            // The decoder's own diagnostic, without the variant prefix.
            Self::Decode(err) => json!({ "error": err.to_string() }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use albums_types::Album;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_response() {
        let response = ServerError::AlbumNotFound(AlbumId::from("999")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "album not found" }));
    }

    #[tokio::test]
    async fn decode_response_carries_decoder_text() {
        let decode = Album::from_json(b"{").unwrap_err();
        let text = decode.to_string();
        let response = ServerError::from(decode).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "error": text }));
    }

    #[tokio::test]
    async fn store_error_is_internal() {
        let err = ServerError::from(albums_store::StoreError::Poisoned("boom".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(err.into_response()).await;
        assert!(body["error"].as_str().unwrap().contains("boom"));
    }

    #[tokio::test]
    async fn body_error_is_json() {
        let response = ServerError::Body("length limit exceeded".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "failed to read request body: length limit exceeded" })
        );
    }

    #[test]
    fn display() {
        let err = ServerError::AlbumNotFound(AlbumId::from("7"));
        assert_eq!(err.to_string(), "album not found: 7");
        assert_eq!(
            ServerError::Config("bad".into()).to_string(),
            "configuration error: bad"
        );
    }
}
