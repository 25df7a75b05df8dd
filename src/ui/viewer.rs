use iced::widget::{column, container, image, text};
use iced::{Element, Length};

use crate::state::Session;
use crate::Message;

/// What the image surface currently shows
#[derive(Debug, Clone)]
enum Surface {
    /// Nothing rendered yet
    Empty,
    Image {
        handle: image::Handle,
        width: u32,
        height: u32,
    },
    /// The live spectrogram could not be decoded as a PNG
    Undecodable,
}

/// Image surface bound to the session's spectrogram.
///
/// Decoding is cached per image revision so redraws never re-decode.
#[derive(Debug)]
pub struct Viewer {
    revision: u64,
    surface: Surface,
}

impl Default for Viewer {
    fn default() -> Self {
        Self {
            revision: 0,
            surface: Surface::Empty,
        }
    }
}

impl Viewer {
    /// Rebuild the image handle if a new spectrogram was installed
    pub fn sync(&mut self, session: &Session) {
        if session.image_revision() == self.revision {
            return;
        }
        self.revision = session.image_revision();

        self.surface = match session.image() {
            None => Surface::Empty,
            Some(spectrogram) => match spectrogram.decode_png() {
                Ok(png) => {
                    tracing::debug!("🖼️  Spectrogram {}x{}", png.width, png.height);
                    Surface::Image {
                        handle: image::Handle::from_bytes(png.bytes),
                        width: png.width,
                        height: png.height,
                    }
                }
                Err(err) => {
                    tracing::warn!("⚠️  Cannot display spectrogram: {}", err);
                    Surface::Undecodable
                }
            },
        };
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.surface {
            Surface::Empty => text("Upload or load a capture to see its spectrogram").size(14).into(),
            Surface::Image { handle, width, height } => column![
                image(handle.clone()).width(Length::Fill),
                text(format!("{} × {} px", width, height)).size(12),
            ]
            .spacing(6)
            .into(),
            Surface::Undecodable => text("The spectrogram could not be displayed").size(14).into(),
        };

        container(content).width(Length::Fill).center_x(Length::Fill).into()
    }
}
