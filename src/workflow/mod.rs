/// User-triggered workflows
///
/// Each module owns one workflow end to end and follows the same shape:
/// - `begin` checks preconditions, sets the loading status and issues a ticket
/// - the returned request's `send` performs exactly one network call
/// - `settle` applies the result: one terminal status plus the data update
///
/// The update loop runs `send` as a background task and feeds the
/// [`Settled`] value back into `settle`, so workflows for different
/// buttons can overlap freely.

pub mod clear;
pub mod load;
pub mod refresh;
pub mod save;
pub mod upload;

use std::sync::Arc;

use crate::api::{ApiError, RenderReply};
use crate::state::data::SpectrogramImage;
use crate::state::guard::Ticket;
use crate::state::Session;

/// Result of one network call. Transport errors are shared so the
/// value stays `Clone` on its way back through the message loop.
pub type Outcome<T> = Result<T, Arc<ApiError>>;

/// A finished request, ready to be applied to the session
#[derive(Debug, Clone)]
pub struct Settled<T> {
    pub ticket: Ticket,
    pub outcome: Outcome<T>,
}

impl<T> Settled<T> {
    fn new(ticket: Ticket, result: Result<T, ApiError>) -> Self {
        Self {
            ticket,
            outcome: result.map_err(Arc::new),
        }
    }
}

/// Fixed status texts of a render-producing workflow
struct RenderMessages {
    /// Used in operator logs only
    operation: &'static str,
    success: &'static str,
    failure: &'static str,
}

/// Shared settle logic of upload and load-by-id.
///
/// Only a rendered reply touches the image; a rejection or a failed
/// exchange leaves the previous one on screen.
fn settle_render(session: &mut Session, settled: Settled<RenderReply>, messages: &RenderMessages) {
    if !session.admit(&settled.ticket) {
        return;
    }

    match settled.outcome {
        Ok(RenderReply::Rendered { spectrogram }) => {
            tracing::info!("✅ {} rendered ({} chars)", messages.operation, spectrogram.len());
            session.install_image(SpectrogramImage::new(spectrogram));
            session.status_mut().success(messages.success);
        }
        Ok(RenderReply::Rejected { error }) => {
            tracing::warn!("⚠️  {} rejected by backend: {}", messages.operation, error);
            session.status_mut().error(error);
        }
        Err(err) => {
            tracing::error!("❌ {} failed: {}", messages.operation, err);
            session.status_mut().error(messages.failure);
        }
    }
}
