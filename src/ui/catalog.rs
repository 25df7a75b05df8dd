use iced::widget::{button, column, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::state::catalog::CatalogStore;
use crate::Message;

/// List of saved files with a Load action per row
pub fn view(catalog: &CatalogStore) -> Element<'_, Message> {
    let heading = text(format!("Saved files ({})", catalog.len())).size(20);

    let refreshed = match catalog.refreshed_at() {
        Some(at) => text(format!("Last refreshed {}", at.format("%H:%M:%S"))),
        None => text("Not refreshed yet"),
    }
    .size(12);

    let rows: Element<'_, Message> = if catalog.is_empty() {
        text("No saved files").size(14).into()
    } else {
        Column::with_children(catalog.entries().iter().map(|entry| {
            row![
                text(entry.filename.as_str()).width(Length::Fill),
                button("Load").on_press(Message::Load(entry.id.clone())).padding(6),
            ]
            .spacing(10)
            .align_y(Alignment::Center)
            .into()
        }))
        .spacing(6)
        .into()
    };

    column![heading, refreshed, rows]
        .spacing(10)
        .width(Length::Fill)
        .into()
}
