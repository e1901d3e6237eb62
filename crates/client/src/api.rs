//! The client data layer: one method per server operation.

use std::time::Duration;

use async_trait::async_trait;
use notes_core::category::Category;
use notes_core::types::DbId;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::model::{ApiErrorBody, NewNote, Note, NoteChanges};

/// Operations offered by the notes API.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// `POST /notes`
    async fn create(&self, note: &NewNote) -> ClientResult<Note>;

    /// `GET /notes/active`
    async fn list_active(&self) -> ClientResult<Vec<Note>>;

    /// `GET /notes/archived`
    async fn list_archived(&self) -> ClientResult<Vec<Note>>;

    /// `GET /notes/category/{category}`
    async fn list_by_category(&self, category: Category) -> ClientResult<Vec<Note>>;

    /// `PUT /notes/{id}`
    async fn update(&self, id: DbId, changes: &NoteChanges) -> ClientResult<Note>;

    /// `DELETE /notes/{id}`
    async fn delete(&self, id: DbId) -> ClientResult<()>;

    /// `PUT /notes/{id}/archive`
    ///
    /// Returns `None` when the note does not exist; nothing changed.
    async fn toggle_archive(&self, id: DbId) -> ClientResult<Option<Note>>;
}

/// [`NotesApi`] over HTTP with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpNotesApi {
    http: reqwest::Client,
    notes_url: String,
}

impl HttpNotesApi {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            notes_url: format!("{}/notes", config.base_url),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.notes_url)
    }
}

/// Decode a successful JSON response or turn the error body into
/// [`ClientError::Api`].
async fn parse_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = ensure_success(response).await?;
    Ok(response.json().await?)
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };
    tracing::warn!(%status, %message, "Notes API request failed");
    Err(ClientError::Api { status, message })
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn create(&self, note: &NewNote) -> ClientResult<Note> {
        tracing::debug!(title = %note.title, "POST /notes");
        let response = self.http.post(self.url("")).json(note).send().await?;
        parse_json(response).await
    }

    async fn list_active(&self) -> ClientResult<Vec<Note>> {
        tracing::debug!("GET /notes/active");
        let response = self.http.get(self.url("/active")).send().await?;
        parse_json(response).await
    }

    async fn list_archived(&self) -> ClientResult<Vec<Note>> {
        tracing::debug!("GET /notes/archived");
        let response = self.http.get(self.url("/archived")).send().await?;
        parse_json(response).await
    }

    async fn list_by_category(&self, category: Category) -> ClientResult<Vec<Note>> {
        tracing::debug!(%category, "GET /notes/category");
        let response = self
            .http
            .get(self.url(&format!("/category/{category}")))
            .send()
            .await?;
        parse_json(response).await
    }

    async fn update(&self, id: DbId, changes: &NoteChanges) -> ClientResult<Note> {
        tracing::debug!(note_id = id, "PUT /notes/{{id}}");
        let response = self
            .http
            .put(self.url(&format!("/{id}")))
            .json(changes)
            .send()
            .await?;
        parse_json(response).await
    }

    async fn delete(&self, id: DbId) -> ClientResult<()> {
        tracing::debug!(note_id = id, "DELETE /notes/{{id}}");
        let response = self.http.delete(self.url(&format!("/{id}"))).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    async fn toggle_archive(&self, id: DbId) -> ClientResult<Option<Note>> {
        tracing::debug!(note_id = id, "PUT /notes/{{id}}/archive");
        let response = self
            .http
            .put(self.url(&format!("/{id}/archive")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        parse_json(response).await.map(Some)
    }
}
