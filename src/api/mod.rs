/// Backend boundary
///
/// Architecture:
/// - `wire.rs` - JSON reply shapes
/// - `client.rs` - reqwest implementation talking to the real service
/// - `fake.rs` - scripted in-memory backend used by tests
///
/// Coordinators only ever see the [`Backend`] trait.

pub mod client;
pub mod wire;

#[cfg(test)]
pub mod fake;

use std::future::Future;

use crate::state::data::{CatalogEntry, CatalogId, SelectedFile};
pub use client::HttpBackend;
pub use wire::RenderReply;

/// A request that could not complete at the transport level
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("backend URL cannot be used as a base: {0}")]
    BaseUrl(String),
}

/// The processing and storage service.
///
/// Each method issues exactly one request. Domain errors come back inside
/// `Ok` (see [`RenderReply::Rejected`]); `Err` always means the exchange
/// itself failed.
pub trait Backend: Clone + Send + Sync + 'static {
    /// `POST /upload` and render the capture
    fn upload(&self, file: SelectedFile) -> impl Future<Output = Result<RenderReply, ApiError>> + Send;

    /// `POST /save`; any response counts as saved
    fn save(&self, file: SelectedFile) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// `GET /files`
    fn list_files(&self) -> impl Future<Output = Result<Vec<CatalogEntry>, ApiError>> + Send;

    /// `GET /file/{id}/spectrogram`
    fn load_spectrogram(&self, id: CatalogId) -> impl Future<Output = Result<RenderReply, ApiError>> + Send;

    /// `DELETE /clear_files`; any response counts as cleared
    fn clear_files(&self) -> impl Future<Output = Result<(), ApiError>> + Send;
}
