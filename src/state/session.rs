use super::catalog::CatalogStore;
use super::data::{SelectedFile, SpectrogramImage};
use super::guard::{OperationKind, SettleGuard, SettlePolicy, Ticket};
use super::status::{Status, StatusProjector};
use crate::capture::validator::{self, Rejected};

/// Everything the workflow mutates, owned in one place.
///
/// Coordinators receive `&mut Session`; nothing here is global, so each
/// test builds its own isolated instance.
#[derive(Debug, Default)]
pub struct Session {
    selected: Option<SelectedFile>,
    image: Option<SpectrogramImage>,
    /// Bumped every time a new image is installed so views can cache decoding
    image_revision: u64,
    catalog: CatalogStore,
    status: StatusProjector,
    guard: SettleGuard,
}

impl Session {
    pub fn new(policy: SettlePolicy) -> Self {
        Self {
            guard: SettleGuard::new(policy),
            ..Self::default()
        }
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    /// Run a candidate through the validator and install it if accepted.
    ///
    /// On rejection the previous selection stays and the status turns
    /// into an error naming the accepted extensions. On acceptance the
    /// file replaces any previous selection and a pending error is cleared.
    pub fn select(&mut self, name: String, bytes: Vec<u8>) -> Result<(), Rejected> {
        match validator::validate(name, bytes) {
            Ok(file) => {
                tracing::info!("📄 Selected file: {} ({} bytes)", file.name(), file.bytes().len());
                self.selected = Some(file);
                self.status.clear_error();
                Ok(())
            }
            Err(rejected) => {
                tracing::info!("🚫 Rejected file: {}", rejected.name);
                self.status.error(validator::rejection_message());
                Err(rejected)
            }
        }
    }

    pub fn image(&self) -> Option<&SpectrogramImage> {
        self.image.as_ref()
    }

    pub fn image_revision(&self) -> u64 {
        self.image_revision
    }

    /// Replace the displayed spectrogram wholesale
    pub fn install_image(&mut self, image: SpectrogramImage) {
        self.image = Some(image);
        self.image_revision += 1;
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    pub fn status(&self) -> &Status {
        self.status.current()
    }

    pub fn status_mut(&mut self) -> &mut StatusProjector {
        &mut self.status
    }

    pub fn settle_policy(&self) -> SettlePolicy {
        self.guard.policy()
    }

    /// Register a request that is about to be sent
    pub fn issue(&mut self, kind: OperationKind) -> Ticket {
        self.guard.issue(kind)
    }

    /// Whether a settling request may still apply its result
    pub fn admit(&self, ticket: &Ticket) -> bool {
        let admitted = self.guard.admit(ticket);
        if !admitted {
            tracing::debug!(kind = ?ticket.kind, epoch = ticket.epoch, "discarding stale response");
        }
        admitted
    }
}
