/// Delete every saved file on the backend, after the user confirms

use super::Settled;
use crate::api::Backend;
use crate::state::guard::{OperationKind, Ticket};
use crate::state::Session;

pub const CONFIRM_PROMPT: &str = "Are you sure you want to clear all saved files?";
pub const LOADING: &str = "Clearing files...";
pub const SUCCESS: &str = "Files successfully cleared";
pub const FAILURE: &str = "Error clearing files";

#[derive(Debug)]
pub struct ClearRequest {
    ticket: Ticket,
}

/// Ask `confirm` first; if the user declines nothing at all happens.
pub fn begin(session: &mut Session, confirm: impl FnOnce(&str) -> bool) -> Option<ClearRequest> {
    if !confirm(CONFIRM_PROMPT) {
        tracing::info!("Clear cancelled by user");
        return None;
    }

    session.status_mut().loading(LOADING);
    let ticket = session.issue(OperationKind::Clear);

    Some(ClearRequest { ticket })
}

impl ClearRequest {
    pub async fn send<B: Backend>(self, backend: B) -> Settled<()> {
        let result = backend.clear_files().await;
        Settled::new(self.ticket, result)
    }
}

pub fn settle(session: &mut Session, settled: Settled<()>) {
    if !session.admit(&settled.ticket) {
        return;
    }

    match settled.outcome {
        Ok(()) => {
            tracing::info!("🗑️  Catalog cleared");
            session.catalog_mut().clear();
            session.status_mut().success(SUCCESS);
        }
        Err(err) => {
            tracing::error!("❌ Clear failed: {}", err);
            session.status_mut().error(FAILURE);
        }
    }
}
