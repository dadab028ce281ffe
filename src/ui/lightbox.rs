use iced::widget::{
    button, column, container, horizontal_space, image, mouse_area, opaque, row, text, Space,
};
use iced::{Alignment, Color, ContentFit, Element, Length};

use super::PreviewState;
use crate::state::data::MediaItem;
use crate::state::lightbox::Navigation;
use crate::Message;

/// Full-window viewer for one item.
///
/// The layer swallows every pointer event so nothing reaches the gallery
/// beneath it. Pressing the backdrop closes it; the media and the info
/// block are opaque and keep it open.
pub fn view<'a>(
    item: &'a MediaItem,
    preview: Option<&'a PreviewState>,
    position: String,
    notice: Option<&'a str>,
) -> Element<'a, Message> {
    let close = row![
        horizontal_space(),
        button(text("✕").size(24))
            .style(button::text)
            .on_press(Message::CloseLightbox),
    ];

    let media: Element<'a, Message> = match preview {
        Some(PreviewState::Ready(preview)) => image(preview.handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        Some(PreviewState::Loading) | None => centered_label("…"),
        Some(PreviewState::Unavailable) if item.is_video() => centered_label("VIDEO"),
        Some(PreviewState::Unavailable) => centered_label("Bild nicht verfügbar"),
    };

    let stage = row![
        nav_button("‹", Navigation::Previous),
        opaque(container(media).width(Length::Fill).height(Length::Fill)),
        nav_button("›", Navigation::Next),
    ]
    .spacing(16)
    .align_y(Alignment::Center)
    .height(Length::FillPortion(4));

    let mut actions = row![button(text("HERUNTERLADEN").size(12))
        .padding([14, 36])
        .style(button::secondary)
        .on_press(Message::Download)]
    .spacing(12);

    if item.is_video() {
        actions = actions.push(
            button(text("VIDEO ABSPIELEN").size(12))
                .padding([14, 36])
                .style(button::secondary)
                .on_press(Message::PlayVideo),
        );
    }

    let mut info = column![
        text(format!("GETEILT VON {}", item.guest_name.to_uppercase())).size(15),
        text(position).size(10),
    ]
    .spacing(6)
    .align_x(Alignment::Center);

    if !item.caption.is_empty() {
        info = info.push(text(&item.caption).size(14));
    }

    let mut footer = column![opaque(info), actions, text("← Wischen zum Navigieren →").size(9)]
        .spacing(18)
        .align_x(Alignment::Center);

    if let Some(notice) = notice {
        footer = footer.push(text(notice).size(12));
    }

    let backdrop = container(
        column![close, stage, footer, Space::with_height(Length::Fixed(24.0))]
            .spacing(16)
            .padding(24)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Color::WHITE.into()),
        ..container::Style::default()
    });

    opaque(mouse_area(backdrop).on_press(Message::CloseLightbox))
}

fn nav_button<'a>(label: &'a str, navigation: Navigation) -> Element<'a, Message> {
    button(text(label).size(40))
        .padding([8, 16])
        .style(button::text)
        .on_press(Message::Navigate(navigation))
        .into()
}

fn centered_label(label: &str) -> Element<'_, Message> {
    container(text(label).size(18))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
