//! Toolbar component
//!
//! App title on top, action buttons below the entry fields.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Topic App").size(24),
        Space::new().width(Length::Fill),
        text("topic > subtopic > subject").size(11).color([0.6, 0.6, 0.6]),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Render the Done / New / Create PDF button row
pub fn view_actions() -> Element<'static, Message> {
    row![
        button(text("Done").size(12))
            .on_press(Message::Done)
            .padding(Padding::from([6, 14]))
            .style(button::primary),
        button(text("New").size(12))
            .on_press(Message::New)
            .padding(Padding::from([6, 14]))
            .style(button::text),
        button(text("Create PDF").size(12))
            .on_press(Message::CreatePdf)
            .padding(Padding::from([6, 14]))
            .style(button::primary),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .into()
}
