use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::config::EventConfig;
use crate::Message;

pub fn view(event: &EventConfig) -> Element<'_, Message> {
    container(
        column![
            text(format!("In Liebe, {}", event.initials)).size(24),
            text(event.gallery_title.to_uppercase()).size(10),
        ]
        .spacing(32)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([80, 24])
    .center_x(Length::Fill)
    .into()
}
