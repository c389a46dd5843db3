use std::sync::Arc;

use axum::extract::multipart::Field;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Multipart, Path, Query, State};
use axum::response::Json;
use fstore_protocol::{
    fields, FileListResponse, FrequentWordsQuery, FrequentWordsResponse, HealthResponse,
    MessageResponse, WordCountResponse,
};
use fstore_store::{FileService, NewFile, StoreError, StoreResult};
use fstore_types::FileName;

use crate::error::{ServerError, ServerResult};
use crate::messages;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FileService>,
}

impl AppState {
    pub fn new(service: Arc<FileService>) -> Self {
        Self { service }
    }
}

/// Run a store operation on the blocking pool.
async fn blocking<T, F>(f: F) -> ServerResult<StoreResult<T>>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ServerError::Internal(format!("store task failed: {e}")))
}

fn multipart_error(err: impl std::fmt::Display) -> ServerError {
    tracing::debug!(error = %err, "failed to read multipart body");
    ServerError::BadRequest(format!("Invalid multipart data: {err}"))
}

async fn read_file_part(field: Field<'_>) -> ServerResult<NewFile> {
    let name = field
        .file_name()
        .map(str::to_string)
        .ok_or_else(|| ServerError::BadRequest("File part has no filename".into()))?;
    let data = field.bytes().await.map_err(multipart_error)?;
    Ok(NewFile::new(name, data.to_vec()))
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> ServerResult<Json<HealthResponse>> {
    let service = state.service.clone();
    let stats = blocking(move || service.stats()).await??;
    Ok(Json(HealthResponse::ok(stats.files, stats.bytes)))
}

/// POST /files/add
///
/// Request body: multipart/form-data with one `files` part per upload.
pub async fn add_files(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ServerResult<Json<MessageResponse>> {
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(fields::ADD_FILES) {
            continue;
        }
        files.push(read_file_part(field).await?);
    }
    if files.is_empty() {
        return Err(ServerError::BadRequest("No files provided".into()));
    }

    tracing::debug!(count = files.len(), "adding files");
    let service = state.service.clone();
    blocking(move || service.add(files)).await??;
    Ok(Json(MessageResponse::new(messages::FILES_UPLOADED)))
}

/// GET /files
pub async fn list_files(State(state): State<AppState>) -> ServerResult<Json<FileListResponse>> {
    let service = state.service.clone();
    let names = blocking(move || service.list()).await??;
    Ok(Json(FileListResponse {
        files: names.into_iter().map(FileName::into_string).collect(),
    }))
}

/// DELETE /files/:name
pub async fn remove_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ServerResult<Json<MessageResponse>> {
    remove_named(state, name).await
}

/// Remove the stored file `name`. Shared by every DELETE route.
pub async fn remove_named(state: AppState, name: String) -> ServerResult<Json<MessageResponse>> {
    let service = state.service.clone();
    let message = match blocking(move || service.remove(&name)).await? {
        Ok(name) => messages::removed(&name),
        Err(StoreError::NotFound(name)) => messages::remove_not_found(&name),
        Err(e) => return Err(e.into()),
    };
    Ok(Json(MessageResponse::new(message)))
}

/// PUT /files/:name
///
/// Request body: multipart/form-data with a single `file` part.
pub async fn update_file(
    State(state): State<AppState>,
    Path(name): Path<String>,
    multipart: Multipart,
) -> ServerResult<Json<MessageResponse>> {
    update_named(state, name, multipart).await
}

/// Replace the stored file `name` with the request's `file` part.
pub async fn update_named(
    state: AppState,
    name: String,
    mut multipart: Multipart,
) -> ServerResult<Json<MessageResponse>> {
    let mut upload = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some(fields::UPDATE_FILE) {
            upload = Some(field.bytes().await.map_err(multipart_error)?);
            break;
        }
    }
    let data = upload.ok_or_else(|| ServerError::BadRequest("No file provided".into()))?;

    let service = state.service.clone();
    let message = match blocking(move || service.update(&name, &data)).await? {
        Ok(name) => messages::updated(&name),
        Err(StoreError::NotFound(name)) => messages::update_not_found(&name),
        Err(e) => return Err(e.into()),
    };
    Ok(Json(MessageResponse::new(message)))
}

/// GET /files/wc
pub async fn word_count(State(state): State<AppState>) -> ServerResult<Json<WordCountResponse>> {
    let service = state.service.clone();
    let total_words = blocking(move || service.word_count()).await??;
    Ok(Json(WordCountResponse { total_words }))
}

/// GET /files/freq-words?limit=10&order=dsc
pub async fn frequent_words(
    State(state): State<AppState>,
    query: Result<Query<FrequentWordsQuery>, QueryRejection>,
) -> ServerResult<Json<FrequentWordsResponse>> {
    let Query(query) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let service = state.service.clone();
    let frequent_words =
        blocking(move || service.frequent_words(query.limit, query.order)).await??;
    Ok(Json(FrequentWordsResponse { frequent_words }))
}
