//! Preview Panel
//!
//! Read-only rendering of the rows "Create PDF" will write, indented the same
//! way as the exported table, plus where the next entry will land.

use iced::widget::{column, container, row, scrollable, text, Column, Space};
use iced::{Element, Length};

use topic_core::{flatten, EntryState, TopicForm};

use crate::Message;

/// Indent per table column, in pixels
const INDENT_PX: f32 = 20.0;

/// Render the outline preview
pub fn view(form: &TopicForm) -> Element<'_, Message> {
    let rows = flatten(form.topics());

    let mut list: Column<'_, Message> = column![].spacing(2);
    if rows.is_empty() {
        list = list.push(text("(nothing entered yet)").size(11).color([0.5, 0.5, 0.5]));
    }
    for table_row in rows {
        let label = text(table_row.text().to_string());
        let label = match table_row.depth() {
            0 => label.size(13),
            1 => label.size(12),
            _ => label.size(11),
        };
        list = list.push(row![
            Space::new().width(INDENT_PX * table_row.depth() as f32),
            label,
        ]);
    }

    column![
        text("Outline").size(14),
        text(cursor_summary(form)).size(10).color([0.6, 0.6, 0.6]),
        container(scrollable(list)).height(Length::Fixed(220.0)).width(Length::Fill),
    ]
    .spacing(6)
    .into()
}

/// One-line description of where the next entry goes
fn cursor_summary(form: &TopicForm) -> String {
    let position = match &form.cursor().state {
        EntryState::Idle => "No topic chosen".to_string(),
        EntryState::TopicChosen { topic } => format!("Topic '{}' - add a subtopic", topic),
        EntryState::SubtopicOpen { topic, subtopic } => {
            format!("Adding subjects to '{}' > '{}'", topic, subtopic)
        }
    };

    match form.pending_subtopic_count() {
        Some(count) => format!("{} ({} subtopics planned)", position, count),
        None => position,
    }
}
