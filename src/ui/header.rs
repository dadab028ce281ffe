use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::config::EventConfig;
use crate::Message;

/// Couple initials in a bordered box with the full names below
pub fn view(event: &EventConfig) -> Element<'_, Message> {
    let initials = container(text(&event.initials).size(72))
        .padding(16)
        .style(container::bordered_box);

    container(
        column![initials, text(event.couple_names.to_uppercase()).size(14)]
            .spacing(24)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([48, 24])
    .center_x(Length::Fill)
    .into()
}
