/// Upload the selected capture and display the rendered spectrogram

use super::{settle_render, RenderMessages, Settled};
use crate::api::{Backend, RenderReply};
use crate::state::data::SelectedFile;
use crate::state::guard::{OperationKind, Ticket};
use crate::state::Session;

pub const LOADING: &str = "Uploading file...";
pub const SUCCESS: &str = "File successfully uploaded";
pub const FAILURE: &str = "Error uploading file";

const MESSAGES: RenderMessages = RenderMessages {
    operation: "Upload",
    success: SUCCESS,
    failure: FAILURE,
};

/// An upload that has been started but not sent yet
#[derive(Debug)]
pub struct UploadRequest {
    ticket: Ticket,
    file: SelectedFile,
}

/// Start an upload of the selected file.
///
/// Without a selection this is a no-op for the user: nothing changes
/// and only the operator log mentions it.
pub fn begin(session: &mut Session) -> Option<UploadRequest> {
    let Some(file) = session.selected().cloned() else {
        tracing::warn!("Upload requested but no file is selected");
        return None;
    };

    session.status_mut().loading(LOADING);
    let ticket = session.issue(OperationKind::Upload);

    Some(UploadRequest { ticket, file })
}

impl UploadRequest {
    pub async fn send<B: Backend>(self, backend: B) -> Settled<RenderReply> {
        let result = backend.upload(self.file).await;
        Settled::new(self.ticket, result)
    }
}

pub fn settle(session: &mut Session, settled: Settled<RenderReply>) {
    settle_render(session, settled, &MESSAGES);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, Reply, ScriptedBackend};
    use crate::state::data::SpectrogramImage;
    use crate::state::guard::SettlePolicy;
    use crate::state::status::Status;
    use crate::workflow::testing::session_with_capture;

    fn rendered(image: &str) -> Reply<RenderReply> {
        Reply::Ok(RenderReply::Rendered {
            spectrogram: image.to_string(),
        })
    }

    #[test]
    fn test_upload_without_selection_is_noop() {
        let mut session = Session::default();
        session.status_mut().success("File successfully loaded");

        assert!(begin(&mut session).is_none());
        assert_eq!(session.status(), &Status::Success("File successfully loaded".into()));
        assert!(session.image().is_none());
    }

    #[tokio::test]
    async fn test_upload_success_installs_backend_image() {
        let backend = ScriptedBackend::default().on_upload(rendered("iVBORw0KG..."));
        let mut session = session_with_capture();

        let request = begin(&mut session).unwrap();
        assert_eq!(session.status(), &Status::Loading(LOADING.into()));

        settle(&mut session, request.send(backend.clone()).await);

        assert_eq!(session.status(), &Status::Success(SUCCESS.into()));
        assert_eq!(session.image().map(|i| i.encoded()), Some("iVBORw0KG..."));
        assert_eq!(
            backend.calls(),
            vec![Call::Upload {
                name: "capture1.iq".into(),
                bytes: vec![0, 0, 128, 63, 0, 0, 128, 191],
            }]
        );
    }

    #[tokio::test]
    async fn test_upload_domain_error_keeps_previous_image() {
        let backend = ScriptedBackend::default().on_upload(Reply::Ok(RenderReply::Rejected {
            error: "No file uploaded".into(),
        }));
        let mut session = session_with_capture();
        session.install_image(SpectrogramImage::new("previous"));

        let request = begin(&mut session).unwrap();
        settle(&mut session, request.send(backend).await);

        assert_eq!(session.status(), &Status::Error("No file uploaded".into()));
        assert_eq!(session.image().map(|i| i.encoded()), Some("previous"));
    }

    #[tokio::test]
    async fn test_upload_transport_failure_uses_fixed_message() {
        let backend = ScriptedBackend::default().on_upload(Reply::Malformed);
        let mut session = session_with_capture();
        session.install_image(SpectrogramImage::new("previous"));

        let request = begin(&mut session).unwrap();
        settle(&mut session, request.send(backend).await);

        assert_eq!(session.status(), &Status::Error(FAILURE.into()));
        assert_eq!(session.image().map(|i| i.encoded()), Some("previous"));
    }

    #[tokio::test]
    async fn test_overlapping_uploads_last_settled_wins() {
        let mut session = session_with_capture();
        let first = begin(&mut session).unwrap();
        let second = begin(&mut session).unwrap();

        let second_done = second.send(ScriptedBackend::default().on_upload(rendered("second"))).await;
        let first_done = first.send(ScriptedBackend::default().on_upload(rendered("first"))).await;

        settle(&mut session, second_done);
        settle(&mut session, first_done);

        assert_eq!(session.image().map(|i| i.encoded()), Some("first"));
    }

    #[tokio::test]
    async fn test_discard_stale_keeps_newest_upload() {
        let mut session = Session::new(SettlePolicy::DiscardStale);
        session.select("capture1.iq".into(), vec![1, 2]).unwrap();

        let first = begin(&mut session).unwrap();
        let second = begin(&mut session).unwrap();

        let second_done = second.send(ScriptedBackend::default().on_upload(rendered("second"))).await;
        let first_done = first.send(ScriptedBackend::default().on_upload(rendered("first"))).await;

        settle(&mut session, second_done);
        settle(&mut session, first_done);

        assert_eq!(session.image().map(|i| i.encoded()), Some("second"));
        assert_eq!(session.status(), &Status::Success(SUCCESS.into()));
    }
}
