use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// HTTP endpoint paths.
pub mod endpoints {
    pub const ALBUMS: &str = "/albums";
    pub const ALBUM: &str = "/albums/:id";
    pub const HEALTH: &str = "/health";
}

/// Build the axum router with all album endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::ALBUMS,
            get(handler::list_albums).post(handler::add_album),
        )
        .route(endpoints::ALBUM, get(handler::get_album))
        .route(endpoints::HEALTH, get(handler::health_handler))
        // Album payloads are unbounded.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::ALBUMS, "/albums");
        assert_eq!(endpoints::ALBUM, "/albums/:id");
        assert_eq!(endpoints::HEALTH, "/health");
    }

    #[test]
    fn router_builds() {
        let _router = build_router(AppState::default());
    }
}
