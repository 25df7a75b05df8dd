/// Persist the selected capture, then refresh the catalog
///
/// The save endpoint's reply body is not inspected: any response counts
/// as saved, unlike upload and load which surface `{ error }` replies.

use super::refresh::{self, RefreshRequest};
use super::Settled;
use crate::api::Backend;
use crate::state::data::SelectedFile;
use crate::state::guard::{OperationKind, Ticket};
use crate::state::Session;

pub const LOADING: &str = "Saving file to database...";
pub const SUCCESS: &str = "File successfully saved to database";
pub const FAILURE: &str = "Error saving file";

#[derive(Debug)]
pub struct SaveRequest {
    ticket: Ticket,
    file: SelectedFile,
}

/// Start saving the selected file; no-op without a selection
pub fn begin(session: &mut Session) -> Option<SaveRequest> {
    let Some(file) = session.selected().cloned() else {
        tracing::warn!("Save requested but no file is selected");
        return None;
    };

    session.status_mut().loading(LOADING);
    let ticket = session.issue(OperationKind::Save);

    Some(SaveRequest { ticket, file })
}

impl SaveRequest {
    pub async fn send<B: Backend>(self, backend: B) -> Settled<()> {
        let result = backend.save(self.file).await;
        Settled::new(self.ticket, result)
    }
}

/// Apply a finished save. On success the returned refresh must be sent
/// so the catalog picks up the new file.
pub fn settle(session: &mut Session, settled: Settled<()>) -> Option<RefreshRequest> {
    if !session.admit(&settled.ticket) {
        return None;
    }

    match settled.outcome {
        Ok(()) => {
            tracing::info!("💾 Save acknowledged, refreshing catalog");
            session.status_mut().success(SUCCESS);
            Some(refresh::begin(session))
        }
        Err(err) => {
            tracing::error!("❌ Save failed: {}", err);
            session.status_mut().error(FAILURE);
            None
        }
    }
}
