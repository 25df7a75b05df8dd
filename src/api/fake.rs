/// Scripted in-memory backend for tests
///
/// Replies are configured up front and replayed on every call; each call
/// is recorded so tests can count network effects.

use std::sync::{Arc, Mutex};

use super::{ApiError, Backend, RenderReply};
use crate::state::data::{CatalogEntry, CatalogId, SelectedFile};

/// What a scripted endpoint answers with
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// A body that is not the expected JSON, surfaced as a transport error
    Malformed,
}

impl<T: Clone> Reply<T> {
    fn produce(&self) -> Result<T, ApiError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Malformed => {
                let err = serde_json::from_str::<serde_json::Value>("<html>502 Bad Gateway</html>")
                    .unwrap_err();
                Err(ApiError::Malformed(err))
            }
        }
    }
}

/// A recorded network call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload { name: String, bytes: Vec<u8> },
    Save { name: String },
    ListFiles,
    LoadSpectrogram(CatalogId),
    ClearFiles,
}

#[derive(Debug)]
struct Script {
    upload: Reply<RenderReply>,
    save: Reply<()>,
    list_files: Reply<Vec<CatalogEntry>>,
    load: Reply<RenderReply>,
    clear: Reply<()>,
    calls: Vec<Call>,
}

#[derive(Debug, Clone)]
pub struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
}

impl Default for ScriptedBackend {
    fn default() -> Self {
        Self {
            script: Arc::new(Mutex::new(Script {
                upload: Reply::Malformed,
                save: Reply::Ok(()),
                list_files: Reply::Ok(Vec::new()),
                load: Reply::Malformed,
                clear: Reply::Ok(()),
                calls: Vec::new(),
            })),
        }
    }
}

impl ScriptedBackend {
    pub fn on_upload(self, reply: Reply<RenderReply>) -> Self {
        self.script.lock().unwrap().upload = reply;
        self
    }

    pub fn on_save(self, reply: Reply<()>) -> Self {
        self.script.lock().unwrap().save = reply;
        self
    }

    pub fn on_list_files(self, reply: Reply<Vec<CatalogEntry>>) -> Self {
        self.script.lock().unwrap().list_files = reply;
        self
    }

    pub fn on_load(self, reply: Reply<RenderReply>) -> Self {
        self.script.lock().unwrap().load = reply;
        self
    }

    pub fn on_clear(self, reply: Reply<()>) -> Self {
        self.script.lock().unwrap().clear = reply;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.lock().unwrap().calls.clone()
    }

    fn record<T: Clone>(&self, call: Call, pick: impl FnOnce(&Script) -> &Reply<T>) -> Result<T, ApiError> {
        let mut script = self.script.lock().unwrap();
        script.calls.push(call);
        pick(&*script).produce()
    }
}

impl Backend for ScriptedBackend {
    async fn upload(&self, file: SelectedFile) -> Result<RenderReply, ApiError> {
        let call = Call::Upload {
            name: file.name().to_string(),
            bytes: file.bytes().to_vec(),
        };
        self.record(call, |s| &s.upload)
    }

    async fn save(&self, file: SelectedFile) -> Result<(), ApiError> {
        let call = Call::Save {
            name: file.name().to_string(),
        };
        self.record(call, |s| &s.save)
    }

    async fn list_files(&self) -> Result<Vec<CatalogEntry>, ApiError> {
        self.record(Call::ListFiles, |s| &s.list_files)
    }

    async fn load_spectrogram(&self, id: CatalogId) -> Result<RenderReply, ApiError> {
        self.record(Call::LoadSpectrogram(id), |s| &s.load)
    }

    async fn clear_files(&self) -> Result<(), ApiError> {
        self.record(Call::ClearFiles, |s| &s.clear)
    }
}
