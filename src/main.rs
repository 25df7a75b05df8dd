use clap::Parser;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Task, Theme};
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing_subscriber::EnvFilter;

mod api;
mod capture;
mod config;
mod state;
mod ui;
mod workflow;

use api::{HttpBackend, RenderReply};
use capture::picker::{self, PickedFile};
use config::{Args, Config};
use state::data::{CatalogEntry, CatalogId};
use state::Session;
use ui::viewer::Viewer;
use workflow::{clear, load, refresh, save, upload, Settled};

/// Main application state
struct Gc3Client {
    /// Selection, image, catalog and status
    session: Session,
    /// Connection to the processing/storage service
    backend: HttpBackend,
    /// Decoded spectrogram for display
    viewer: Viewer,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Choose File"
    ChooseFile,
    /// File dialog closed (None if cancelled)
    FilePicked(Option<PickedFile>),
    /// The `--file` capture was read from disk
    InitialFileRead(Result<PickedFile, String>),
    Upload,
    Uploaded(Settled<RenderReply>),
    Save,
    Saved(Settled<()>),
    Refresh,
    CatalogRefreshed(Settled<Vec<CatalogEntry>>),
    /// User clicked "Load" on a catalog row
    Load(CatalogId),
    Loaded(Settled<RenderReply>),
    Clear,
    Cleared(Settled<()>),
}

impl Gc3Client {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let mut session = Session::new(config.settle_policy);
        let backend = HttpBackend::new(config.backend_url);

        tracing::info!(
            "🎨 GC3 client initialized, backend at {} ({:?})",
            backend.base(),
            session.settle_policy()
        );

        // Show whatever is already saved as soon as the window opens
        let request = refresh::begin(&mut session);
        let mut tasks = vec![Task::perform(
            request.send(backend.clone()),
            Message::CatalogRefreshed,
        )];

        if let Some(path) = config.initial_file {
            tasks.push(Task::perform(
                picker::read_capture(path),
                Message::InitialFileRead,
            ));
        }

        (
            Gc3Client {
                session,
                backend,
                viewer: Viewer::default(),
            },
            Task::batch(tasks),
        )
    }

    /// Handle application messages and update state.
    /// Every user action starts at most one workflow.
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::ChooseFile => Task::perform(picker::pick_capture(), Message::FilePicked),
            Message::FilePicked(picked) => {
                if let Some(picked) = picked {
                    self.select(picked);
                }
                Task::none()
            }
            Message::InitialFileRead(result) => {
                match result {
                    Ok(picked) => self.select(picked),
                    Err(err) => {
                        tracing::error!("❌ {}", err);
                        self.session.status_mut().error(err);
                    }
                }
                Task::none()
            }
            Message::Upload => match upload::begin(&mut self.session) {
                Some(request) => Task::perform(request.send(self.backend.clone()), Message::Uploaded),
                None => Task::none(),
            },
            Message::Uploaded(settled) => {
                upload::settle(&mut self.session, settled);
                Task::none()
            }
            Message::Save => match save::begin(&mut self.session) {
                Some(request) => Task::perform(request.send(self.backend.clone()), Message::Saved),
                None => Task::none(),
            },
            Message::Saved(settled) => match save::settle(&mut self.session, settled) {
                Some(request) => Task::perform(
                    request.send(self.backend.clone()),
                    Message::CatalogRefreshed,
                ),
                None => Task::none(),
            },
            Message::Refresh => {
                let request = refresh::begin(&mut self.session);
                Task::perform(request.send(self.backend.clone()), Message::CatalogRefreshed)
            }
            Message::CatalogRefreshed(settled) => {
                refresh::settle(&mut self.session, settled);
                Task::none()
            }
            Message::Load(id) => {
                let request = load::begin(&mut self.session, id);
                Task::perform(request.send(self.backend.clone()), Message::Loaded)
            }
            Message::Loaded(settled) => {
                load::settle(&mut self.session, settled);
                Task::none()
            }
            Message::Clear => match clear::begin(&mut self.session, confirm_with_dialog) {
                Some(request) => Task::perform(request.send(self.backend.clone()), Message::Cleared),
                None => Task::none(),
            },
            Message::Cleared(settled) => {
                clear::settle(&mut self.session, settled);
                Task::none()
            }
        };

        self.viewer.sync(&self.session);
        task
    }

    fn select(&mut self, picked: PickedFile) {
        // The status line already shows the rejection to the user
        if let Err(rejected) = self.session.select(picked.name, picked.bytes) {
            tracing::debug!("Selection of {} ignored", rejected.name);
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let controls = row![
            button("Choose File").on_press(Message::ChooseFile).padding(10),
            button("Upload").on_press(Message::Upload).padding(10),
            button("Save").on_press(Message::Save).padding(10),
            button("Refresh").on_press(Message::Refresh).padding(10),
            button("Clear").on_press(Message::Clear).padding(10),
        ]
        .spacing(10);

        let selected = match self.session.selected() {
            Some(file) => text(format!("Selected file: {}", file.name())),
            None => text("No file selected"),
        }
        .size(14);

        let content: Column<Message> = column![
            text("GC³").size(48),
            controls,
            selected,
            ui::status_line(self.session.status()),
            self.viewer.view(),
            ui::catalog::view(self.session.catalog()),
        ]
        .spacing(20)
        .padding(40)
        .max_width(1000.0)
        .align_x(Alignment::Center);

        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Native yes/no dialog guarding the destructive clear
fn confirm_with_dialog(prompt: &str) -> bool {
    let answer = MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title("Clear saved files")
        .set_description(prompt)
        .set_buttons(MessageButtons::YesNo)
        .show();

    matches!(answer, MessageDialogResult::Yes)
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("❌ {}", err);
            std::process::exit(2);
        }
    };

    iced::application("GC³", Gc3Client::update, Gc3Client::view)
        .theme(Gc3Client::theme)
        .centered()
        .run_with(move || Gc3Client::new(config))
}
