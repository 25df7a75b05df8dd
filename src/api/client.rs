use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::wire::{FilesReply, RenderReply};
use super::{ApiError, Backend};
use crate::state::data::{CatalogEntry, CatalogId, SelectedFile};

/// Multipart field the backend reads the capture from
const FILE_FIELD: &str = "file";

/// [`Backend`] over HTTP using a shared reqwest client.
///
/// Cloning is cheap: the connection pool is reference-counted.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn file_form(file: &SelectedFile) -> Form {
        let part = Part::bytes(file.bytes().to_vec()).file_name(file.name().to_string());
        Form::new().part(FILE_FIELD, part)
    }

    /// Parse a JSON body regardless of the HTTP status code.
    /// The backend reports domain errors as `{ error }` with a 4xx status.
    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, len = body.len(), "response received");
        Ok(serde_json::from_slice(&body)?)
    }
}

impl Backend for HttpBackend {
    async fn upload(&self, file: SelectedFile) -> Result<RenderReply, ApiError> {
        let url = self.endpoint(&["upload"])?;
        tracing::info!("⬆️  Uploading {} to {}", file.name(), url);

        let response = self
            .client
            .post(url)
            .multipart(Self::file_form(&file))
            .send()
            .await?;

        Self::read_json(response).await
    }

    async fn save(&self, file: SelectedFile) -> Result<(), ApiError> {
        let url = self.endpoint(&["save"])?;
        tracing::info!("💾 Saving {} to {}", file.name(), url);

        let response = self
            .client
            .post(url)
            .multipart(Self::file_form(&file))
            .send()
            .await?;

        // Whatever the backend answers, the save counts as done
        tracing::debug!(status = %response.status(), "save acknowledged");
        Ok(())
    }

    async fn list_files(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        let url = self.endpoint(&["files"])?;
        let response = self.client.get(url).send().await?;
        let reply: FilesReply = Self::read_json(response).await?;
        Ok(reply.files)
    }

    async fn load_spectrogram(&self, id: CatalogId) -> Result<RenderReply, ApiError> {
        let url = self.endpoint(&["file", id.as_str(), "spectrogram"])?;
        tracing::info!("🔍 Loading spectrogram for {}", id);

        let response = self.client.get(url).send().await?;
        Self::read_json(response).await
    }

    async fn clear_files(&self) -> Result<(), ApiError> {
        let url = self.endpoint(&["clear_files"])?;
        tracing::info!("🗑️  Clearing saved files at {}", url);

        let response = self.client.delete(url).send().await?;
        tracing::debug!(status = %response.status(), "clear acknowledged");
        Ok(())
    }
}
