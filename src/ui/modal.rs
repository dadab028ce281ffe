/// Passcode prompt and alert overlays
use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text, text_input};
use iced::{border, Color, Element, Length, Theme};

use crate::Message;

/// Darken `base` and show `content` on top; clicking outside sends `on_blur`
pub fn modal<'a>(
    base: Element<'a, Message>,
    content: Element<'a, Message>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(
                    Color {
                        a: 0.8,
                        ..Color::BLACK
                    }
                    .into(),
                ),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// Asks for the admin passcode before deleting
pub fn passcode(input: &str) -> Element<'_, Message> {
    let field = text_input("Passwort", input)
        .secure(true)
        .on_input(Message::PasscodeChanged)
        .on_submit(Message::SubmitPasscode)
        .padding(8);

    let actions = row![
        button(text("Abbrechen"))
            .style(button::secondary)
            .on_press(Message::CancelPasscode),
        button(text("Löschen"))
            .style(button::danger)
            .on_press(Message::SubmitPasscode),
    ]
    .spacing(12);

    dialog(
        column![
            text("Admin-Passwort zum Löschen erforderlich").size(16),
            field,
            actions,
        ]
        .spacing(16)
        .into(),
    )
}

/// A message with a single OK button
pub fn alert(message: &str) -> Element<'_, Message> {
    dialog(
        column![
            text(message).size(16),
            button(text("OK")).on_press(Message::DismissAlert),
        ]
        .spacing(16)
        .into(),
    )
}

fn dialog(content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fixed(360.0))
        .padding(24)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.palette().background.into()),
            border: border::rounded(4),
            ..container::Style::default()
        })
        .into()
}
