//! HTTP client for the fstore server.

use std::time::Duration;

use fstore_protocol::{
    endpoints, fields, FileListResponse, FrequentWordsQuery, FrequentWordsResponse,
    HealthResponse, MessageResponse, WordCountResponse,
};
use fstore_types::SortOrder;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid server URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

/// One local file to upload: the name it is stored under and its bytes.
#[derive(Clone, Debug)]
pub struct Upload {
    pub name: String,
    pub data: Vec<u8>,
}

/// Thin typed wrapper over the fstore HTTP API. One call, one request.
#[derive(Clone, Debug)]
pub struct StoreClient {
    base: Url,
    http: reqwest::Client,
}

impl StoreClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let base = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base URL".into(),
            });
        }
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { base, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }

    /// `/files/{name}`, with `name` percent-encoded as a single segment.
    fn file_url(&self, name: &str) -> Url {
        let mut url = self.endpoint(endpoints::FILES);
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(name);
        }
        url
    }

    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let resp = self.http.get(self.endpoint(endpoints::HEALTH)).send().await?;
        decode(resp).await
    }

    /// POST /files/add with one `files` part per upload.
    pub async fn add(&self, uploads: Vec<Upload>) -> ClientResult<MessageResponse> {
        let form = uploads.into_iter().fold(Form::new(), |form, upload| {
            form.part(
                fields::ADD_FILES,
                Part::bytes(upload.data).file_name(upload.name),
            )
        });
        tracing::debug!(url = %self.endpoint(endpoints::ADD), "uploading files");
        let resp = self
            .http
            .post(self.endpoint(endpoints::ADD))
            .multipart(form)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn list(&self) -> ClientResult<FileListResponse> {
        let resp = self.http.get(self.endpoint(endpoints::FILES)).send().await?;
        decode(resp).await
    }

    pub async fn remove(&self, name: &str) -> ClientResult<MessageResponse> {
        let resp = self.http.delete(self.file_url(name)).send().await?;
        decode(resp).await
    }

    /// PUT /files/{name} with the new content as the `file` part.
    pub async fn update(&self, name: &str, upload: Upload) -> ClientResult<MessageResponse> {
        let form = Form::new().part(
            fields::UPDATE_FILE,
            Part::bytes(upload.data).file_name(upload.name),
        );
        let resp = self
            .http
            .put(self.file_url(name))
            .multipart(form)
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn word_count(&self) -> ClientResult<WordCountResponse> {
        let resp = self
            .http
            .get(self.endpoint(endpoints::WORD_COUNT))
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn frequent_words(
        &self,
        limit: usize,
        order: SortOrder,
    ) -> ClientResult<FrequentWordsResponse> {
        let resp = self
            .http
            .get(self.endpoint(endpoints::FREQ_WORDS))
            .query(&FrequentWordsQuery { limit, order })
            .send()
            .await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ClientResult<T> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json().await?);
    }
    let text = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<MessageResponse>(&text)
        .map(|m| m.message)
        .unwrap_or(text);
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}
