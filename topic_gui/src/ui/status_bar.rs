//! Status Bar (Bottom)
//!
//! Displays the outcome of the last action and the export target.

use std::path::Path;

use iced::widget::{row, text, Space};
use iced::{Element, Length, Padding};

use crate::Message;

/// Render the status bar
pub fn view_status_bar<'a>(status: &'a str, is_error: bool, output_path: &'a Path) -> Element<'a, Message> {
    let status_color = if is_error { [0.9, 0.4, 0.4] } else { [0.8, 0.8, 0.8] };

    row![
        text(status).size(10).color(status_color),
        Space::new().width(Length::Fill),
        text(format!("Output: {}", output_path.display())).size(10).color([0.5, 0.5, 0.5]),
    ]
    .padding(Padding::from([4, 0]))
    .into()
}
