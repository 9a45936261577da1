//! Message handling for the GUI.
//!
//! Every user action is forwarded to the [`TopicForm`](topic_core::TopicForm);
//! the returned outcome decides which field gets focus and what the status
//! bar says. Nothing here touches the outline directly.

use iced::Task;
use tracing::error;

use topic_core::{export_with_settings, Field, Submission, TopicError};

use crate::ui::entry_panel;
use crate::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                self.form.set_field(field, value);
                Task::none()
            }
            Message::FieldSubmitted(field) => self.submit_field(field),
            Message::Done => {
                let focus = self.form.done();
                self.set_status("Fields cleared");
                entry_panel::focus(focus)
            }
            Message::New => {
                let focus = self.form.reset_inputs();
                self.set_status("Fields cleared");
                entry_panel::focus(focus)
            }
            Message::CreatePdf => {
                self.create_pdf();
                Task::none()
            }
        }
    }

    fn submit_field(&mut self, field: Field) -> Task<Message> {
        match self.form.submit(field) {
            Ok(Submission::Accepted { focus }) => {
                self.set_status(accepted_status(field, self.form.fields.get(field)));
                entry_panel::focus(focus)
            }
            // Invalid counts and empty fields are silently ignored
            Ok(Submission::Ignored) => Task::none(),
            Err(e) => {
                self.set_error(&e);
                Task::none()
            }
        }
    }

    fn create_pdf(&mut self) {
        match export_with_settings(self.form.topics(), &self.settings) {
            Ok(summary) => {
                self.set_status(format!(
                    "PDF created successfully: {} ({} rows)",
                    summary.path.display(),
                    summary.rows
                ));
            }
            Err(e) => {
                error!(code = e.error_code(), "{}", e);
                self.set_error(&e);
            }
        }
    }

    fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, e: &TopicError) {
        self.status = e.to_string();
        self.status_is_error = true;
    }
}

/// Status line after a field was accepted
fn accepted_status(field: Field, text: &str) -> String {
    match field {
        Field::Topic => format!("Topic: {}", text),
        Field::SubtopicCount => format!("Planning {} subtopics", text.trim()),
        Field::Subtopic => format!("Subtopic added: {}", text),
        // The subject field now holds the next suggestion
        Field::Subject => "Subject added".to_string(),
    }
}
