use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, row, stack, text,
    Column, Row,
};
use iced::{Element, Length};
use std::collections::HashMap;

use super::{masonry, PreviewState};
use crate::state::data::MediaItem;
use crate::Message;

const TILE_SPACING: f32 = 16.0;

/// Share of the tile height taken by the name/date strip
const INFO_STRIP_RATIO: f32 = 0.15;

/// Masonry grid of all items, or the empty-state notice
pub fn view<'a>(
    items: &'a [MediaItem],
    previews: &'a HashMap<String, PreviewState>,
    columns: usize,
) -> Element<'a, Message> {
    if items.is_empty() {
        return container(text("Noch keine Momente in der Galerie...").size(16))
            .width(Length::Fill)
            .padding([80, 0])
            .center_x(Length::Fill)
            .into();
    }

    let heights: Vec<f32> = items
        .iter()
        .map(|item| {
            let ratio = previews.get(&item.id).map_or(0.75, PreviewState::aspect_ratio);
            ratio + INFO_STRIP_RATIO
        })
        .collect();

    let grid = masonry::assign_columns(&heights, columns)
        .into_iter()
        .map(|indices| -> Element<'a, Message> {
            Column::with_children(
                indices
                    .into_iter()
                    .map(|index| tile(&items[index], previews.get(&items[index].id))),
            )
            .spacing(TILE_SPACING)
            .width(Length::FillPortion(1))
            .into()
        });

    Row::with_children(grid).spacing(TILE_SPACING).into()
}

/// One card: picture, guest name and date, delete control in the corner
fn tile<'a>(item: &'a MediaItem, preview: Option<&'a PreviewState>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match preview {
        Some(PreviewState::Ready(preview)) => {
            let picture = image(preview.handle.clone()).width(Length::Fill);
            if item.is_video() {
                stack![picture, center(play_badge())].into()
            } else {
                picture.into()
            }
        }
        None | Some(PreviewState::Loading) => placeholder("…"),
        Some(PreviewState::Unavailable) if item.is_video() => {
            stack![placeholder("VIDEO"), center(play_badge())].into()
        }
        Some(PreviewState::Unavailable) => placeholder("Bild nicht verfügbar"),
    };

    let info = row![
        text(item.guest_name.to_uppercase()).size(11),
        horizontal_space(),
        text(item.display_date()).size(11),
    ]
    .padding(14);

    let card = mouse_area(column![picture, info]).on_press(Message::OpenLightbox(item.id.clone()));

    let delete = button(text("✕").size(14))
        .padding([6, 10])
        .style(button::danger)
        .on_press(Message::RequestDelete(item.id.clone()));

    container(stack![
        card,
        container(delete).padding(10).align_right(Length::Fill),
    ])
    .style(container::bordered_box)
    .into()
}

fn play_badge<'a>() -> Element<'a, Message> {
    container(text("▶").size(28))
        .padding([12, 18])
        .style(container::rounded_box)
        .into()
}

fn placeholder(label: &str) -> Element<'_, Message> {
    container(text(label).size(12))
        .width(Length::Fill)
        .height(Length::Fixed(180.0))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(180.0))
        .style(container::rounded_box)
        .into()
}
