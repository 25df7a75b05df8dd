/// Re-read the saved-file list from the backend
///
/// Refresh never shows a loading status of its own; only a failure
/// is surfaced. A failed refresh keeps the stale list on screen.

use super::Settled;
use crate::api::Backend;
use crate::state::data::CatalogEntry;
use crate::state::guard::{OperationKind, Ticket};
use crate::state::Session;

pub const FAILURE: &str = "Error fetching saved files";

#[derive(Debug)]
pub struct RefreshRequest {
    ticket: Ticket,
}

pub fn begin(session: &mut Session) -> RefreshRequest {
    RefreshRequest {
        ticket: session.issue(OperationKind::Refresh),
    }
}

impl RefreshRequest {
    pub async fn send<B: Backend>(self, backend: B) -> Settled<Vec<CatalogEntry>> {
        let result = backend.list_files().await;
        Settled::new(self.ticket, result)
    }
}

pub fn settle(session: &mut Session, settled: Settled<Vec<CatalogEntry>>) {
    if !session.admit(&settled.ticket) {
        return;
    }

    match settled.outcome {
        Ok(entries) => session.catalog_mut().replace(entries),
        Err(err) => {
            tracing::error!("❌ Catalog refresh failed: {}", err);
            session.status_mut().error(FAILURE);
        }
    }
}
