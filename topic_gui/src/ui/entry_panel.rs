//! Entry Panel
//!
//! The four text fields. Each submits on Enter; after an accepted submit the
//! form names the next field and [`focus`] moves the caret there.

use iced::widget::{column, operation, text, text_input, Column, Id};
use iced::{Element, Task};

use topic_core::{Field, TopicForm};

use crate::Message;

/// Widget id of a field's text input
fn field_id(field: Field) -> Id {
    match field {
        Field::Topic => Id::new("topic_input"),
        Field::SubtopicCount => Id::new("subtopic_count_input"),
        Field::Subtopic => Id::new("subtopic_input"),
        Field::Subject => Id::new("subject_input"),
    }
}

/// Move keyboard focus to `field`
pub fn focus(field: Field) -> Task<Message> {
    operation::focus(field_id(field))
}

/// Render the four entry fields
pub fn view(form: &TopicForm) -> Column<'_, Message> {
    Field::ALL
        .iter()
        .fold(column![].spacing(10), |panel, &field| {
            panel.push(labeled_field(field, form.fields.get(field)))
        })
}

fn labeled_field(field: Field, value: &str) -> Element<'_, Message> {
    column![
        text_input(field.hint(), value)
            .id(field_id(field))
            .on_input(move |text| Message::FieldChanged(field, text))
            .on_submit(Message::FieldSubmitted(field))
            .padding(6)
            .size(14),
        text(field.helper()).size(10).color([0.5, 0.5, 0.5]),
    ]
    .spacing(2)
    .into()
}
