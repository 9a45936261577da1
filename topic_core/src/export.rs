//! # Document Export
//!
//! Flattens a [`TopicMap`] into table rows and writes them as a single grid
//! table to a PDF file.
//!
//! Rows are produced depth-first in insertion order:
//!
//! ```text
//! Math                         <- topic:    ["Math"]
//! |        | Algebra           <- subtopic: ["", "Algebra"]
//! |        |        | Equations <- subject:  ["", "", "Equations"]
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use topic_core::export::export;
//! use topic_core::form::TopicForm;
//! use std::path::Path;
//!
//! let mut form = TopicForm::new();
//! form.add_topic("Math");
//! form.add_subtopic("Algebra")?;
//! form.add_subject("Equations")?;
//!
//! let summary = export(form.topics(), Path::new("topic_document.pdf"))?;
//! println!("PDF created successfully: {}", summary.path.display());
//! # Ok::<(), topic_core::errors::TopicError>(())
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{TopicError, TopicResult};
use crate::file_io::write_atomic;
use crate::pdf::{compile_pdf, typst_string};
use crate::settings::ExportSettings;
use crate::topic_map::TopicMap;

/// Number of grid columns; shorter rows are padded with empty cells
pub const TABLE_COLUMNS: usize = 3;

/// Typst preamble and table opening; cells are appended after it
const TABLE_TEMPLATE: &str = r##"#set page(paper: {{PAPER}})
#set text(size: {{FONT_SIZE}}pt)

#table(
  columns: {{COLUMNS}},
  align: left,
  stroke: {{STROKE}}pt + rgb({{GRID_COLOR}}),
"##;

/// One row of the exported table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableRow {
    Topic(String),
    Subtopic(String),
    Subject(String),
}

impl TableRow {
    /// Indentation level (number of leading blank cells)
    pub fn depth(&self) -> usize {
        match self {
            TableRow::Topic(_) => 0,
            TableRow::Subtopic(_) => 1,
            TableRow::Subject(_) => 2,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TableRow::Topic(text) | TableRow::Subtopic(text) | TableRow::Subject(text) => text,
        }
    }

    /// Cells of this row: blanks up to the depth, then the text
    pub fn cells(&self) -> Vec<&str> {
        let mut cells = vec![""; self.depth()];
        cells.push(self.text());
        cells
    }
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// File that was written
    pub path: PathBuf,
    /// Table rows rendered
    pub rows: usize,
    /// Size of the PDF in bytes
    pub bytes: usize,
}

/// Flatten the outline into table rows, depth-first, in insertion order.
pub fn flatten(topics: &TopicMap) -> Vec<TableRow> {
    let mut rows = Vec::new();
    for (topic, subtopics) in topics.iter() {
        rows.push(TableRow::Topic(topic.to_string()));
        for (subtopic, subjects) in subtopics.iter() {
            rows.push(TableRow::Subtopic(subtopic.to_string()));
            rows.extend(subjects.iter().cloned().map(TableRow::Subject));
        }
    }
    rows
}

/// Build the Typst source for the table.
///
/// The first row gets the header decoration (fill, text color, bottom
/// padding); every cell gets the grid stroke and left alignment.
pub fn table_source(rows: &[TableRow], settings: &ExportSettings) -> String {
    let mut source = TABLE_TEMPLATE
        .replace("{{PAPER}}", &typst_string(&settings.paper))
        .replace("{{FONT_SIZE}}", &settings.font_size_pt.to_string())
        .replace("{{COLUMNS}}", &TABLE_COLUMNS.to_string())
        .replace("{{STROKE}}", &settings.grid_stroke_pt.to_string())
        .replace("{{GRID_COLOR}}", &typst_string(&settings.grid_color));

    for (index, row) in rows.iter().enumerate() {
        let mut cells = row.cells();
        cells.resize(TABLE_COLUMNS, "");

        let rendered: Vec<String> = if index == 0 {
            cells.iter().map(|cell| header_cell(cell, settings)).collect()
        } else {
            cells.iter().map(|cell| body_cell(cell)).collect()
        };
        source.push_str(&format!("  {},\n", rendered.join(", ")));
    }

    source.push_str(")\n");
    source
}

fn body_cell(text: &str) -> String {
    if text.is_empty() {
        "[]".to_string()
    } else {
        format!("[#{}]", typst_string(text))
    }
}

fn header_cell(text: &str, settings: &ExportSettings) -> String {
    let body = if text.is_empty() {
        String::new()
    } else {
        format!(
            "#text(fill: rgb({}))[#{}]",
            typst_string(&settings.header_text),
            typst_string(text)
        )
    };
    format!(
        "table.cell(fill: rgb({}), inset: (x: 5pt, top: 5pt, bottom: {}pt))[{}]",
        typst_string(&settings.header_fill),
        settings.header_bottom_padding_pt,
        body
    )
}

/// Render the outline to PDF bytes.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(TopicError::EmptyDocument)` - Nothing has been entered
/// * `Err(TopicError::RenderFailed)` - Typst rejected the document
pub fn render_pdf(topics: &TopicMap, settings: &ExportSettings) -> TopicResult<Vec<u8>> {
    let rows = flatten(topics);
    if rows.is_empty() {
        return Err(TopicError::EmptyDocument);
    }
    compile_pdf(table_source(&rows, settings))
}

/// Export the outline to `path` with the default table styling.
///
/// Overwrites an existing file without asking.
pub fn export(topics: &TopicMap, path: &Path) -> TopicResult<ExportSummary> {
    export_with_settings(topics, &ExportSettings::with_output_path(path))
}

/// Export the outline to `settings.output_path`.
pub fn export_with_settings(topics: &TopicMap, settings: &ExportSettings) -> TopicResult<ExportSummary> {
    let path = &settings.output_path;

    let pdf_bytes = render_pdf(topics, settings).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "PDF export failed");
    })?;
    write_atomic(path, &pdf_bytes).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "PDF export failed");
    })?;

    let summary = ExportSummary {
        path: path.clone(),
        rows: flatten(topics).len(),
        bytes: pdf_bytes.len(),
    };
    info!(path = %summary.path.display(), rows = summary.rows, "PDF created successfully");
    Ok(summary)
}
