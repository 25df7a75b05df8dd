/// Widgets for the main window
///
/// - `viewer.rs` - spectrogram image surface
/// - `catalog.rs` - saved-file list

pub mod catalog;
pub mod viewer;

use iced::widget::text;
use iced::{Color, Element};

use crate::state::status::Status;
use crate::Message;

/// The single status line
pub fn status_line(status: &Status) -> Element<'_, Message> {
    let color = match status {
        Status::Idle | Status::Loading(_) => Color::from_rgb(0.75, 0.75, 0.75),
        Status::Error(_) => Color::from_rgb(0.95, 0.35, 0.35),
        Status::Success(_) => Color::from_rgb(0.4, 0.85, 0.45),
    };

    if status.is_loading() {
        return text(format!("⏳ {}", status.message())).size(16).color(color).into();
    }

    text(status.message()).size(16).color(color).into()
}
