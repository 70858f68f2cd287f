//! Album handlers.
//!
//! Handlers are thin: pull the request apart, call the store, shape the
//! response. Every store call is a single lock acquisition.

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use albums_types::{Album, AlbumId};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Lists every album in insertion order.
///
/// `GET /albums`
pub async fn list_albums(State(state): State<AppState>) -> ServerResult<Json<Vec<Album>>> {
    let albums = state.store.list()?;
    Ok(Json(albums))
}

/// Returns the first album whose id matches the path parameter.
///
/// `GET /albums/:id`
///
/// An id that does not percent-decode to UTF-8 cannot match any stored id,
/// so it is answered as a miss.
pub async fn get_album(
    State(state): State<AppState>,
    uri: Uri,
    id: Result<Path<String>, PathRejection>,
) -> ServerResult<Json<Album>> {
    let id = match id {
        Ok(Path(id)) => AlbumId::from(id),
        Err(rejection) => {
            let raw = uri.path().rsplit('/').next().unwrap_or_default();
            tracing::debug!(raw, "undecodable album id: {}", rejection.body_text());
            return Err(ServerError::AlbumNotFound(AlbumId::from(raw)));
        }
    };
    match state.store.get(&id)? {
        Some(album) => Ok(Json(album)),
        None => {
            tracing::debug!(%id, "album lookup missed");
            Err(ServerError::AlbumNotFound(id))
        }
    }
}

/// Decodes an album from the request body and appends it.
///
/// `POST /albums`
///
/// The body is decoded regardless of `Content-Type`. A payload that cannot be
/// read or does not decode is rejected before the store is touched.
pub async fn add_album(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ServerResult<(StatusCode, Json<Album>)> {
    let body = body.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "failed to read album payload");
        ServerError::Body(rejection.body_text())
    })?;
    let album = Album::from_json(&body).inspect_err(|err| {
        tracing::warn!(
            category = %err.category,
            line = err.line,
            column = err.column,
            "rejected album payload: {err}"
        );
    })?;
    let album = state.store.append(album)?;
    tracing::info!(id = %album.id, title = %album.title, "album added");
    Ok((StatusCode::CREATED, Json(album)))
}
