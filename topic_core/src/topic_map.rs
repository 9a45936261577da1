//! # Topic Outline Data Structures
//!
//! The `TopicMap` is the root container for everything the user enters. It is
//! a three-level ordered structure:
//!
//! ```text
//! TopicMap
//! └── topic name -> SubtopicMap
//!                   └── subtopic name -> [subject, subject, ...]
//! ```
//!
//! Insertion order is preserved at every level (both maps are backed by
//! `IndexMap`), which is the order the exporter writes rows in.
//!
//! ## Example
//!
//! ```rust
//! use topic_core::topic_map::TopicMap;
//!
//! let mut topics = TopicMap::new();
//! let math = topics.ensure_topic("Math");
//! math.open_subtopic("Algebra");
//! math.append_subject("Algebra", "Equations");
//!
//! assert_eq!(topics.subjects("Math", "Algebra"), Some(&["Equations".to_string()][..]));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping of subtopic name to its ordered subjects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubtopicMap {
    subtopics: IndexMap<String, Vec<String>>,
}

impl SubtopicMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a subtopic with an empty subject list.
    ///
    /// An existing subtopic of the same name loses its subjects but keeps its
    /// position.
    pub fn open_subtopic(&mut self, name: impl Into<String>) {
        self.subtopics.insert(name.into(), Vec::new());
    }

    /// Append a subject to the named subtopic.
    ///
    /// Returns the new subject count, or `None` if the subtopic does not exist.
    pub fn append_subject(&mut self, subtopic: &str, subject: impl Into<String>) -> Option<usize> {
        let subjects = self.subtopics.get_mut(subtopic)?;
        subjects.push(subject.into());
        Some(subjects.len())
    }

    /// Append a subject to the last subtopic.
    ///
    /// Returns the subtopic name and its new subject count, or `None` if there
    /// are no subtopics.
    pub fn append_to_last(&mut self, subject: impl Into<String>) -> Option<(&str, usize)> {
        let (name, subjects) = self.subtopics.last_mut()?;
        subjects.push(subject.into());
        Some((name.as_str(), subjects.len()))
    }

    /// The last subtopic in insertion order
    pub fn last_subtopic(&self) -> Option<&str> {
        self.subtopics.last().map(|(name, _)| name.as_str())
    }

    pub fn subjects(&self, subtopic: &str) -> Option<&[String]> {
        self.subtopics.get(subtopic).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.subtopics
            .iter()
            .map(|(name, subjects)| (name.as_str(), subjects.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.subtopics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subtopics.is_empty()
    }

    /// Total number of subjects across all subtopics
    pub fn subject_count(&self) -> usize {
        self.subtopics.values().map(Vec::len).sum()
    }
}

/// Ordered mapping of topic name to its subtopics.
///
/// Never cleared by the form; it accumulates for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicMap {
    topics: IndexMap<String, SubtopicMap>,
}

impl TopicMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the subtopics of `topic`, creating an empty entry if absent.
    pub fn ensure_topic(&mut self, topic: &str) -> &mut SubtopicMap {
        self.topics.entry(topic.to_string()).or_default()
    }

    pub fn get(&self, topic: &str) -> Option<&SubtopicMap> {
        self.topics.get(topic)
    }

    pub fn get_mut(&mut self, topic: &str) -> Option<&mut SubtopicMap> {
        self.topics.get_mut(topic)
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    /// Convenience lookup of a subject list two levels down
    pub fn subjects(&self, topic: &str, subtopic: &str) -> Option<&[String]> {
        self.get(topic)?.subjects(subtopic)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubtopicMap)> {
        self.topics.iter().map(|(name, subtopics)| (name.as_str(), subtopics))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insertion_order_preserved() {
        let mut topics = TopicMap::new();
        topics.ensure_topic("Zoology");
        topics.ensure_topic("Art");
        topics.ensure_topic("Math");

        let names: Vec<&str> = topics.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zoology", "Art", "Math"]);
    }

    #[test]
    fn test_ensure_topic_deduplicates() {
        let mut topics = TopicMap::new();
        topics.ensure_topic("Math").open_subtopic("Algebra");
        topics.ensure_topic("Math");

        assert_eq!(topics.len(), 1);
        assert_eq!(topics.get("Math").unwrap().len(), 1);
    }

    #[test]
    fn test_append_to_missing_subtopic() {
        let mut subtopics = SubtopicMap::new();
        assert_eq!(subtopics.append_subject("Algebra", "Equations"), None);
        assert!(subtopics.is_empty());
    }

    #[test]
    fn test_reopen_subtopic_resets_in_place() {
        let mut subtopics = SubtopicMap::new();
        subtopics.open_subtopic("Algebra");
        subtopics.append_subject("Algebra", "Equations");
        subtopics.open_subtopic("Geometry");
        subtopics.open_subtopic("Algebra");

        assert_eq!(subtopics.last_subtopic(), Some("Geometry"));
        assert_eq!(subtopics.subjects("Algebra"), Some(&[][..]));
        let names: Vec<&str> = subtopics.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Algebra", "Geometry"]);
    }

    #[test]
    fn test_append_to_last() {
        let mut subtopics = SubtopicMap::new();
        assert_eq!(subtopics.append_to_last("orphan"), None);

        subtopics.open_subtopic("Algebra");
        subtopics.open_subtopic("Geometry");
        assert_eq!(subtopics.append_to_last("Triangles"), Some(("Geometry", 1)));
        assert_eq!(subtopics.subjects("Algebra"), Some(&[][..]));
    }

    #[test]
    fn test_subject_count() {
        let mut subtopics = SubtopicMap::new();
        subtopics.open_subtopic("A");
        subtopics.append_subject("A", "1");
        subtopics.append_subject("A", "2");
        subtopics.open_subtopic("B");
        subtopics.append_subject("B", "3");
        assert_eq!(subtopics.subject_count(), 3);
    }

    #[test]
    fn test_json_keeps_order() {
        let mut topics = TopicMap::new();
        let math = topics.ensure_topic("Math");
        math.open_subtopic("Algebra");
        math.append_subject("Algebra", "Equations");
        math.append_subject("Algebra", "Factoring");

        let json = serde_json::to_string(&topics).unwrap();
        assert_eq!(json, r#"{"Math":{"Algebra":["Equations","Factoring"]}}"#);

        let roundtrip: TopicMap = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, topics);
    }
}
