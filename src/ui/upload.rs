use iced::widget::{button, column, container, text, text_input};
use iced::{Alignment, Element, Length};

use crate::Message;

/// State of the "Moment teilen" form
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub guest_name: String,
    /// A file is being read; the choose button is disabled meanwhile
    pub is_uploading: bool,
}

impl UploadForm {
    /// Reset after a successful upload
    pub fn finish(&mut self) {
        self.is_uploading = false;
        self.guest_name.clear();
    }
}

pub fn view(form: &UploadForm) -> Element<'_, Message> {
    let name = column![
        text("DEIN NAME").size(11),
        text_input("Wer lädt hoch?", &form.guest_name)
            .on_input(Message::GuestNameChanged)
            .padding(8),
    ]
    .spacing(4);

    let label = if form.is_uploading {
        "VERARBEITUNG..."
    } else {
        "FOTO ODER VIDEO WÄHLEN"
    };

    let choose = button(container(text(label).size(14)).center_x(Length::Fill))
        .width(Length::Fill)
        .padding([16, 24])
        .style(button::secondary)
        .on_press_maybe((!form.is_uploading).then_some(Message::ChooseFile));

    container(
        column![
            text("MOMENT TEILEN").size(20),
            column![name, choose].spacing(24),
        ]
        .spacing(24)
        .align_x(Alignment::Center),
    )
    .padding(32)
    .max_width(640.0)
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_clears_name() {
        let mut form = UploadForm {
            guest_name: "Tante Uschi".to_string(),
            is_uploading: true,
        };
        form.finish();
        assert!(form.guest_name.is_empty());
        assert!(!form.is_uploading);
    }
}
