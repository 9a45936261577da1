//! # topic_core - Topic Outline Engine
//!
//! `topic_core` holds everything behind the topic entry form that is not
//! widget wiring: the three-level outline, the entry state machine driven by
//! field submits, and the PDF table export. Front ends (`topic_gui`,
//! `topic_cli`) own a [`TopicForm`] and forward user actions to it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use topic_core::{export, TopicForm};
//! use std::path::Path;
//!
//! let mut form = TopicForm::new();
//! form.add_topic("Math");
//! form.add_subtopic("Algebra")?;
//! form.add_subject("Equations")?;
//!
//! export(form.topics(), Path::new("topic_document.pdf"))?;
//! # Ok::<(), topic_core::TopicError>(())
//! ```
//!
//! ## Modules
//!
//! - [`topic_map`] - Ordered topic -> subtopic -> subjects container
//! - [`form`] - Field contents, entry cursor and submit operations
//! - [`export`] - Row flattening and PDF table export
//! - [`pdf`] - In-memory Typst compilation
//! - [`settings`] - Export styling and output location
//! - [`file_io`] - Atomic file writes
//! - [`errors`] - Structured error types

pub mod errors;
pub mod export;
pub mod file_io;
pub mod form;
pub mod pdf;
pub mod settings;
pub mod topic_map;

// Re-export commonly used types at crate root for convenience
pub use errors::{TopicError, TopicResult};
pub use export::{export, export_with_settings, flatten, ExportSummary, TableRow};
pub use form::{EntryState, Field, Submission, TopicForm};
pub use settings::{ExportSettings, DEFAULT_OUTPUT_FILE};
pub use topic_map::{SubtopicMap, TopicMap};
