/// JSON bodies returned by the backend

use serde::Deserialize;

use crate::state::data::CatalogEntry;

/// Reply of `POST /upload` and `GET /file/{id}/spectrogram`.
///
/// A body carrying `error` is a rejection even if it also has a
/// `spectrogram`, so that variant is tried first.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RenderReply {
    Rejected { error: String },
    Rendered { spectrogram: String },
}

/// Reply of `GET /files`
#[derive(Debug, Deserialize)]
pub struct FilesReply {
    pub files: Vec<CatalogEntry>,
}
