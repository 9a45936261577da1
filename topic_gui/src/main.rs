//! # Topic App GUI
//!
//! Single-screen data-entry form: topic, subtopic count, subtopic and subject
//! fields, each submitted with Enter, plus "Done", "New" and "Create PDF".
//! Built with Iced; all state lives in [`App`] and changes only in
//! [`App::update`].

mod ui;
mod update;

use iced::widget::{column, container, rule, Space};
use iced::{Element, Length, Task, Theme};
use tracing_subscriber::EnvFilter;

use topic_core::{ExportSettings, Field, TopicForm};

/// Application state
pub struct App {
    /// Field text, entry cursor and accumulated outline
    pub form: TopicForm,
    /// Where and how "Create PDF" writes
    pub settings: ExportSettings,
    /// Last status message shown in the status bar
    pub status: String,
    /// Whether `status` describes a failure
    pub status_is_error: bool,
}

/// Messages produced by the view
#[derive(Debug, Clone)]
pub enum Message {
    /// A field's text was edited
    FieldChanged(Field, String),
    /// Enter was pressed in a field
    FieldSubmitted(Field),
    /// "Done" button
    Done,
    /// "New" button
    New,
    /// "Create PDF" button
    CreatePdf,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let app = App {
            form: TopicForm::new(),
            settings: ExportSettings::default(),
            status: "Enter a topic to begin".to_string(),
            status_is_error: false,
        };
        (app, ui::entry_panel::focus(Field::Topic))
    }

    fn view(&self) -> Element<'_, Message> {
        let content = column![
            ui::toolbar::view_header(),
            rule::horizontal(1),
            ui::entry_panel::view(&self.form),
            ui::toolbar::view_actions(),
            rule::horizontal(1),
            ui::preview_panel::view(&self.form),
            Space::new().height(Length::Fill),
            ui::status_bar::view_status_bar(&self.status, self.status_is_error, &self.settings.output_path),
        ]
        .spacing(12)
        .padding(8);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

pub fn main() -> iced::Result {
    init_tracing();

    iced::application(App::new, App::update, App::view)
        .title("Topic App")
        .theme(App::theme)
        .window_size((520.0, 680.0))
        .run()
}

