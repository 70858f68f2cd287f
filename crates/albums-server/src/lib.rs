//! HTTP server for the album service.
//!
//! Serves a JSON REST API over an in-memory [`AlbumStore`]:
//!
//! | Method | Path           | Success                 | Failure                               |
//! |--------|----------------|-------------------------|---------------------------------------|
//! | GET    | `/albums`      | 200, all albums         |                                       |
//! | GET    | `/albums/:id`  | 200, first match        | 404 `{"message":"album not found"}`   |
//! | POST   | `/albums`      | 201, the created album  | 500 `{"error":"<decode error>"}`      |
//! | GET    | `/health`      | 200, health report      |                                       |
//!
//! [`AlbumStore`]: albums_store::AlbumStore

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod shutdown;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use handler::HealthResponse;
pub use router::build_router;
pub use server::AlbumServer;
pub use state::AppState;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn health_endpoint() {
        let app = build_router(AppState::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(health, HealthResponse::default());
    }

    #[tokio::test]
    async fn albums_endpoint() {
        let app = build_router(AppState::default());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/albums")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
    }
}
