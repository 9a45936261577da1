//! # Export Settings
//!
//! Table styling and output location for the PDF export. Front ends use
//! [`ExportSettings::default()`]; the struct exists so tests and callers can
//! point the export somewhere else without touching the renderer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fixed output file name, written to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "topic_document.pdf";

/// Settings for rendering the topic table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Output file (relative paths resolve against the working directory)
    pub output_path: PathBuf,

    /// Typst paper name
    pub paper: String,

    /// Body text size in points
    pub font_size_pt: f32,

    /// First-row background (hex)
    pub header_fill: String,

    /// First-row text color (hex)
    pub header_text: String,

    /// Extra bottom padding of the first row, in points
    pub header_bottom_padding_pt: f32,

    /// Grid line width, in points
    pub grid_stroke_pt: f32,

    /// Grid line color (hex)
    pub grid_color: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            paper: "us-letter".to_string(),
            font_size_pt: 10.0,
            header_fill: "#808080".to_string(),
            header_text: "#f5f5f5".to_string(),
            header_bottom_padding_pt: 12.0,
            grid_stroke_pt: 1.0,
            grid_color: "#000000".to_string(),
        }
    }
}

impl ExportSettings {
    /// Default styling, writing to `path`
    pub fn with_output_path(path: impl AsRef<Path>) -> Self {
        ExportSettings {
            output_path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output() {
        let settings = ExportSettings::default();
        assert_eq!(settings.output_path, Path::new("topic_document.pdf"));
        assert_eq!(settings.paper, "us-letter");
    }

    #[test]
    fn test_with_output_path_keeps_styling() {
        let settings = ExportSettings::with_output_path("/tmp/out.pdf");
        assert_eq!(settings.output_path, Path::new("/tmp/out.pdf"));
        assert_eq!(settings.header_bottom_padding_pt, 12.0);
        assert_eq!(settings.header_fill, ExportSettings::default().header_fill);
    }
}
