/// Render a capture that is already saved on the backend

use super::{settle_render, RenderMessages, Settled};
use crate::api::{Backend, RenderReply};
use crate::state::data::CatalogId;
use crate::state::guard::{OperationKind, Ticket};
use crate::state::Session;

pub const LOADING: &str = "Loading file...";
pub const SUCCESS: &str = "File successfully loaded";
pub const FAILURE: &str = "Error loading file";

const MESSAGES: RenderMessages = RenderMessages {
    operation: "Load",
    success: SUCCESS,
    failure: FAILURE,
};

#[derive(Debug)]
pub struct LoadRequest {
    ticket: Ticket,
    id: CatalogId,
}

/// Start loading `id`. Membership in the catalog is not checked here;
/// the backend decides whether the ID exists.
pub fn begin(session: &mut Session, id: CatalogId) -> LoadRequest {
    if session.catalog().lookup(&id).is_none() {
        tracing::debug!("Loading {} which is not in the local catalog", id);
    }

    session.status_mut().loading(LOADING);
    let ticket = session.issue(OperationKind::Load);

    LoadRequest { ticket, id }
}

impl LoadRequest {
    pub async fn send<B: Backend>(self, backend: B) -> Settled<RenderReply> {
        let result = backend.load_spectrogram(self.id).await;
        Settled::new(self.ticket, result)
    }
}

pub fn settle(session: &mut Session, settled: Settled<RenderReply>) {
    settle_render(session, settled, &MESSAGES);
}
