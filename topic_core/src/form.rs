//! # Entry Form
//!
//! The form state behind the four text fields. Each field submit is one
//! operation on [`TopicForm`]; the entry position is an explicit
//! [`EntryState`] rather than a set of optional fields, so submitting out of
//! order yields a reported error instead of a crash.
//!
//! ```text
//! Idle --topic--> TopicChosen --subtopic--> SubtopicOpen --subject--> SubtopicOpen
//!                      ^                          |
//!                      +---------topic------------+   (subtopic loops back to SubtopicOpen)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use topic_core::form::TopicForm;
//!
//! let mut form = TopicForm::new();
//! form.add_topic("Math");
//! form.add_subtopic("Algebra").unwrap();
//! form.add_subject("Equations").unwrap();
//! form.add_subject("Factoring").unwrap();
//!
//! assert_eq!(
//!     form.topics().subjects("Math", "Algebra").unwrap(),
//!     ["Equations", "Factoring"]
//! );
//! ```

use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{TopicError, TopicResult};
use crate::topic_map::TopicMap;

/// The four text-entry fields, in entry order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Topic,
    SubtopicCount,
    Subtopic,
    Subject,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Topic, Field::SubtopicCount, Field::Subtopic, Field::Subject];

    /// Placeholder shown in the empty field
    pub fn hint(&self) -> &'static str {
        match self {
            Field::Topic => "Enter a topic",
            Field::SubtopicCount => "Enter number of subtopics",
            Field::Subtopic => "Enter a subtopic",
            Field::Subject => "Enter a subject",
        }
    }

    /// Short helper text shown under the field
    pub fn helper(&self) -> &'static str {
        match self {
            Field::SubtopicCount => "Press 'Enter' to continue",
            _ => "Press 'Enter' to add",
        }
    }
}

/// Text currently shown in each field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub topic: String,
    pub subtopic_count: String,
    pub subtopic: String,
    pub subject: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Topic => &self.topic,
            Field::SubtopicCount => &self.subtopic_count,
            Field::Subtopic => &self.subtopic,
            Field::Subject => &self.subject,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Topic => self.topic = value,
            Field::SubtopicCount => self.subtopic_count = value,
            Field::Subtopic => self.subtopic = value,
            Field::Subject => self.subject = value,
        }
    }

    pub fn clear(&mut self) {
        *self = FormFields::default();
    }
}

/// Where the next subtopic or subject will go
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A topic was submitted; subjects have nowhere to go yet
    TopicChosen { topic: String },
    /// Subjects append to the last subtopic of `topic`, which is `subtopic`
    SubtopicOpen { topic: String, subtopic: String },
}

impl EntryState {
    pub fn topic(&self) -> Option<&str> {
        match self {
            EntryState::Idle => None,
            EntryState::TopicChosen { topic } | EntryState::SubtopicOpen { topic, .. } => Some(topic),
        }
    }

    pub fn subtopic(&self) -> Option<&str> {
        match self {
            EntryState::SubtopicOpen { subtopic, .. } => Some(subtopic),
            _ => None,
        }
    }
}

/// Transient cursor tracking the entry position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCursor {
    pub state: EntryState,
    /// Collected but never used to limit how many subtopics are entered
    pub pending_subtopic_count: Option<NonZeroU64>,
    /// Number used for the next "Subject N" suggestion
    pub subject_counter: u32,
}

/// Outcome of a field submit that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Input was stored; `focus` is the field to move the caret to
    Accepted { focus: Field },
    /// Input was empty or not a positive count; nothing changed
    Ignored,
}

/// Application state for the entry form: visible fields, cursor and the
/// accumulated topic outline.
#[derive(Debug, Clone, Default)]
pub struct TopicForm {
    pub fields: FormFields,
    cursor: EntryCursor,
    topics: TopicMap,
}

impl TopicForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn topics(&self) -> &TopicMap {
        &self.topics
    }

    pub fn cursor(&self) -> &EntryCursor {
        &self.cursor
    }

    pub fn current_topic(&self) -> Option<&str> {
        self.cursor.state.topic()
    }

    pub fn pending_subtopic_count(&self) -> Option<u64> {
        self.cursor.pending_subtopic_count.map(NonZeroU64::get)
    }

    /// Replace the text of one field (typing, without submitting)
    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        self.fields.set(field, text);
    }

    /// Submit the current text of `field`
    pub fn submit(&mut self, field: Field) -> TopicResult<Submission> {
        let text = self.fields.get(field).to_string();
        match field {
            Field::Topic => Ok(self.add_topic(&text)),
            Field::SubtopicCount => Ok(self.set_subtopic_count(&text)),
            Field::Subtopic => self.add_subtopic(&text),
            Field::Subject => self.add_subject(&text),
        }
    }

    /// Choose the topic that subsequent subtopics go under.
    ///
    /// Does not create a map entry. Choosing a topic that already has
    /// subtopics reopens its last subtopic for further subjects.
    pub fn add_topic(&mut self, text: &str) -> Submission {
        if text.is_empty() {
            return Submission::Ignored;
        }

        self.cursor.state = match self.topics.get(text).and_then(|s| s.last_subtopic()) {
            Some(subtopic) => EntryState::SubtopicOpen {
                topic: text.to_string(),
                subtopic: subtopic.to_string(),
            },
            None => EntryState::TopicChosen {
                topic: text.to_string(),
            },
        };
        debug!(topic = text, "topic chosen");

        Submission::Accepted {
            focus: Field::SubtopicCount,
        }
    }

    /// Record how many subtopics the user intends to enter.
    ///
    /// Anything that is not a positive integer is ignored silently and the
    /// previous count is kept.
    pub fn set_subtopic_count(&mut self, text: &str) -> Submission {
        let count = text.trim().parse::<u64>().ok().and_then(NonZeroU64::new);

        match count {
            Some(count) => {
                self.cursor.pending_subtopic_count = Some(count);
                debug!(count = count.get(), "subtopic count set");
                Submission::Accepted {
                    focus: Field::Subtopic,
                }
            }
            None => {
                warn!(input = text, "ignoring subtopic count that is not a positive integer");
                Submission::Ignored
            }
        }
    }

    /// Add a subtopic under the current topic and open it for subjects.
    pub fn add_subtopic(&mut self, text: &str) -> TopicResult<Submission> {
        if text.is_empty() {
            return Ok(Submission::Ignored);
        }

        let topic = self
            .cursor
            .state
            .topic()
            .ok_or_else(|| TopicError::NoTopicSelected {
                subtopic: text.to_string(),
            })?
            .to_string();

        let subtopics = self.topics.ensure_topic(&topic);
        subtopics.open_subtopic(text);
        // Re-submitting an earlier name resets it in place; subjects keep
        // going to the last subtopic
        let subtopic = subtopics.last_subtopic().unwrap_or(text).to_string();
        self.cursor.subject_counter = 1;
        debug!(topic = %topic, subtopic = text, "subtopic added");
        self.cursor.state = EntryState::SubtopicOpen { topic, subtopic };

        Ok(Submission::Accepted { focus: Field::Subject })
    }

    /// Append a subject to the open subtopic and suggest the next one.
    pub fn add_subject(&mut self, text: &str) -> TopicResult<Submission> {
        if text.is_empty() {
            return Ok(Submission::Ignored);
        }

        let EntryState::SubtopicOpen { topic, .. } = &self.cursor.state else {
            return Err(TopicError::NoSubtopicOpen {
                subject: text.to_string(),
            });
        };

        let (subtopic, _) = self
            .topics
            .get_mut(topic)
            .and_then(|subtopics| subtopics.append_to_last(text))
            .ok_or_else(|| TopicError::NoSubtopicOpen {
                subject: text.to_string(),
            })?;
        debug!(topic = %topic, subtopic = subtopic, subject = text, "subject added");

        self.cursor.subject_counter += 1;
        self.fields.subject = format!("Subject {}", self.cursor.subject_counter);

        Ok(Submission::Accepted { focus: Field::Subject })
    }

    /// Clear all four fields. The outline and cursor are kept.
    ///
    /// Returns the field that should receive focus.
    pub fn reset_inputs(&mut self) -> Field {
        self.fields.clear();
        Field::Topic
    }

    /// Same as [`reset_inputs`](Self::reset_inputs)
    pub fn done(&mut self) -> Field {
        self.reset_inputs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_topic_sets_current_without_map_entry() {
        let mut form = TopicForm::new();
        let outcome = form.add_topic("Math");

        assert_eq!(outcome, Submission::Accepted { focus: Field::SubtopicCount });
        assert_eq!(form.current_topic(), Some("Math"));
        assert!(form.topics().is_empty());
    }

    #[test]
    fn test_empty_topic_ignored() {
        let mut form = TopicForm::new();
        form.add_topic("Math");
        assert_eq!(form.add_topic(""), Submission::Ignored);
        assert_eq!(form.current_topic(), Some("Math"));
    }

    #[test]
    fn test_subtopic_count_accepts_positive() {
        let mut form = TopicForm::new();
        assert_eq!(
            form.set_subtopic_count(" 3 "),
            Submission::Accepted { focus: Field::Subtopic }
        );
        assert_eq!(form.pending_subtopic_count(), Some(3));

        form.set_subtopic_count("99999999999");
        assert_eq!(form.pending_subtopic_count(), Some(99_999_999_999));
    }

    #[test]
    fn test_subtopic_count_rejects_invalid() {
        let mut form = TopicForm::new();
        for input in ["0", "-2", "abc", "", "2.5"] {
            assert_eq!(form.set_subtopic_count(input), Submission::Ignored, "input {:?}", input);
        }
        assert_eq!(form.pending_subtopic_count(), None);

        form.set_subtopic_count("4");
        form.set_subtopic_count("-1");
        form.set_subtopic_count("four");
        assert_eq!(form.pending_subtopic_count(), Some(4));
    }

    #[test]
    fn test_subjects_accumulate_in_order() {
        let mut form = TopicForm::new();
        form.add_topic("T");
        form.add_subtopic("S1").unwrap();
        form.add_subject("A").unwrap();
        form.add_subject("B").unwrap();

        assert_eq!(form.topics().subjects("T", "S1").unwrap(), strings(&["A", "B"]).as_slice());
    }

    #[test]
    fn test_subject_goes_to_newest_subtopic_only() {
        let mut form = TopicForm::new();
        form.add_topic("T");
        form.add_subtopic("S1").unwrap();
        form.add_subject("A").unwrap();
        form.add_subtopic("S2").unwrap();
        form.add_subject("B").unwrap();

        assert_eq!(form.topics().subjects("T", "S1").unwrap(), strings(&["A"]).as_slice());
        assert_eq!(form.topics().subjects("T", "S2").unwrap(), strings(&["B"]).as_slice());
    }

    #[test]
    fn test_resubmitted_subtopic_resets_in_place() {
        let mut form = TopicForm::new();
        form.add_topic("T");
        form.add_subtopic("S1").unwrap();
        form.add_subject("A").unwrap();
        form.add_subtopic("S2").unwrap();
        form.add_subtopic("S1").unwrap();
        form.add_subject("X").unwrap();

        let subtopics: Vec<(&str, &[String])> = form.topics().get("T").unwrap().iter().collect();
        assert_eq!(
            subtopics,
            vec![("S1", &[][..]), ("S2", strings(&["X"]).as_slice())]
        );
        assert_eq!(form.cursor().state.subtopic(), Some("S2"));
    }

    #[test]
    fn test_subject_suggestion_counts_up() {
        let mut form = TopicForm::new();
        form.add_topic("T");
        form.add_subtopic("S1").unwrap();
        assert_eq!(form.cursor().subject_counter, 1);

        form.add_subject("first").unwrap();
        assert_eq!(form.fields.subject, "Subject 2");
        form.add_subject("second").unwrap();
        assert_eq!(form.fields.subject, "Subject 3");

        form.add_subtopic("S2").unwrap();
        assert_eq!(form.cursor().subject_counter, 1);
    }

    #[test]
    fn test_subtopic_without_topic_is_reported() {
        let mut form = TopicForm::new();
        let err = form.add_subtopic("Algebra").unwrap_err();
        assert_eq!(err, TopicError::NoTopicSelected { subtopic: "Algebra".into() });
        assert!(form.topics().is_empty());
    }

    #[test]
    fn test_subject_without_subtopic_is_reported() {
        let mut form = TopicForm::new();
        assert!(matches!(form.add_subject("x"), Err(TopicError::NoSubtopicOpen { .. })));

        form.add_topic("Math");
        assert!(matches!(form.add_subject("x"), Err(TopicError::NoSubtopicOpen { .. })));
        assert!(form.topics().is_empty());
    }

    #[test]
    fn test_empty_subtopic_and_subject_ignored() {
        let mut form = TopicForm::new();
        assert_eq!(form.add_subtopic("").unwrap(), Submission::Ignored);
        form.add_topic("T");
        form.add_subtopic("S").unwrap();
        assert_eq!(form.add_subject("").unwrap(), Submission::Ignored);
        assert!(form.topics().subjects("T", "S").unwrap().is_empty());
    }

    #[test]
    fn test_new_topic_needs_new_subtopic() {
        let mut form = TopicForm::new();
        form.add_topic("Math");
        form.add_subtopic("Algebra").unwrap();
        form.add_topic("Art");

        assert!(form.add_subject("Painting").is_err());
        assert!(!form.topics().contains_topic("Art"));
    }

    #[test]
    fn test_returning_to_topic_resumes_last_subtopic() {
        let mut form = TopicForm::new();
        form.add_topic("Math");
        form.add_subtopic("Algebra").unwrap();
        form.add_topic("Art");
        form.add_subtopic("Painting").unwrap();
        form.add_topic("Math");
        form.add_subject("Factoring").unwrap();

        assert_eq!(
            form.topics().subjects("Math", "Algebra").unwrap(),
            strings(&["Factoring"]).as_slice()
        );
        assert!(form.topics().subjects("Art", "Painting").unwrap().is_empty());
    }

    #[test]
    fn test_reset_keeps_outline_and_cursor() {
        let mut form = TopicForm::new();
        form.set_field(Field::Topic, "Math");
        form.submit(Field::Topic).unwrap();
        form.set_field(Field::Subtopic, "Algebra");
        form.submit(Field::Subtopic).unwrap();
        form.set_field(Field::Subject, "Equations");
        form.submit(Field::Subject).unwrap();

        let before = form.topics().clone();
        assert_eq!(form.reset_inputs(), Field::Topic);

        assert_eq!(form.fields, FormFields::default());
        assert_eq!(form.topics(), &before);
        assert_eq!(form.cursor().state.subtopic(), Some("Algebra"));
    }

    #[test]
    fn test_done_matches_reset() {
        let mut form = TopicForm::new();
        form.set_field(Field::SubtopicCount, "2");
        assert_eq!(form.done(), Field::Topic);
        assert_eq!(form.fields, FormFields::default());
    }

    #[test]
    fn test_submit_reads_field_text() {
        let mut form = TopicForm::new();
        form.set_field(Field::SubtopicCount, "5");
        assert_eq!(
            form.submit(Field::SubtopicCount).unwrap(),
            Submission::Accepted { focus: Field::Subtopic }
        );
        assert_eq!(form.pending_subtopic_count(), Some(5));
        // Submitting does not clear the field
        assert_eq!(form.fields.get(Field::SubtopicCount), "5");
    }
}
