use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{delete, get, post, MethodRouter};
use axum::Router;
use fstore_protocol::endpoints;
use fstore_store::FileService;
use tower_http::trace::TraceLayer;

use crate::handler::{self, AppState};

/// Build the axum router with all fstore endpoints.
///
/// `max_upload_size` caps every request body, multipart uploads included.
pub fn build_router(service: Arc<FileService>, max_upload_size: usize) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::FILES, get(handler::list_files))
        .route(
            endpoints::ADD,
            post(handler::add_files).merge(reserved_file(endpoints::ADD)),
        )
        .route(
            endpoints::WORD_COUNT,
            get(handler::word_count).merge(reserved_file(endpoints::WORD_COUNT)),
        )
        .route(
            endpoints::FREQ_WORDS,
            get(handler::frequent_words).merge(reserved_file(endpoints::FREQ_WORDS)),
        )
        .route(
            endpoints::FILE,
            delete(handler::remove_file).put(handler::update_file),
        )
        .layer(DefaultBodyLimit::max(max_upload_size))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(service))
}

/// DELETE and PUT for a stored file named like the last segment of a static
/// path. The static route matches first, so `/files/:name` never sees it.
fn reserved_file(path: &'static str) -> MethodRouter<AppState> {
    let name = path.rsplit('/').next().unwrap_or(path);
    delete(move |State(state): State<AppState>| handler::remove_named(state, name.to_string())).put(
        move |State(state): State<AppState>, multipart: Multipart| {
            handler::update_named(state, name.to_string(), multipart)
        },
    )
}
