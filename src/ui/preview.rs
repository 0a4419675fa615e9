use iced::widget::{container, image, text};
use iced::{Element, Length};

use crate::config::{PREVIEW_PANEL_HEIGHT, PREVIEW_PANEL_WIDTH};
use crate::state::data::PreviewState;
use crate::Message;

/// Sunken panel showing the preview bitmap or a placeholder label
pub fn preview_panel(preview: &PreviewState) -> Element<'_, Message> {
    let content: Element<'_, Message> = match preview {
        PreviewState::Empty => text("No image selected").into(),
        PreviewState::Failed => text("Failed to load image").into(),
        PreviewState::Ready(preview) => image(preview.handle.clone())
            .width(Length::Fixed(preview.width as f32))
            .height(Length::Fixed(preview.height as f32))
            .into(),
    };

    container(content)
        .center_x(Length::Fixed(PREVIEW_PANEL_WIDTH))
        .center_y(Length::Fixed(PREVIEW_PANEL_HEIGHT))
        .style(container::bordered_box)
        .into()
}
