//! # PDF Generation Module
//!
//! Compiles Typst source to PDF bytes entirely in memory.
//!
//! ## Architecture
//!
//! - Documents are generated as Typst source strings by the caller
//! - User text is embedded as Typst string literals ([`typst_string`]) so it
//!   is never interpreted as markup
//! - Fonts come from `typst-assets` and are loaded once per process
//! - Output is raw PDF bytes (`Vec<u8>`)
//!
//! ## Example
//!
//! ```rust,no_run
//! use topic_core::pdf::{compile_pdf, typst_string};
//!
//! let source = format!("#table(columns: 1, [#{}])", typst_string("Math"));
//! let pdf_bytes = compile_pdf(source).unwrap();
//! assert!(pdf_bytes.starts_with(b"%PDF"));
//! ```

use chrono::Utc;
use once_cell::sync::Lazy;
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};
use typst_pdf::PdfOptions;

use crate::errors::{TopicError, TopicResult};

/// Bundled fonts, parsed on first use
static FONTS: Lazy<Vec<Font>> = Lazy::new(|| {
    typst_assets::fonts()
        .flat_map(|font_bytes| Font::iter(Bytes::new(font_bytes.to_vec())))
        .collect()
});

// ============================================================================
// Typst World Implementation
// ============================================================================

/// A minimal Typst world for compiling documents without external files.
struct PdfWorld {
    /// The main source document
    main: Source,
    /// Font book
    book: LazyHash<FontBook>,
    /// Library (standard functions)
    library: LazyHash<Library>,
}

impl PdfWorld {
    fn new(source: String) -> Self {
        PdfWorld {
            main: Source::detached(source),
            book: LazyHash::new(FontBook::from_fonts(FONTS.iter())),
            library: LazyHash::new(Library::default()),
        }
    }
}

impl World for PdfWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, _offset: Option<i64>) -> Option<Datetime> {
        let now = Utc::now();
        Datetime::from_ymd(
            now.format("%Y").to_string().parse().ok()?,
            now.format("%m").to_string().parse().ok()?,
            now.format("%d").to_string().parse().ok()?,
        )
    }
}

// ============================================================================
// Compilation
// ============================================================================

/// Compile a Typst document to PDF bytes.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - PDF file as bytes
/// * `Err(TopicError::RenderFailed)` - Compilation or PDF export failed
pub fn compile_pdf(source: String) -> TopicResult<Vec<u8>> {
    let world = PdfWorld::new(source);
    let warned = typst::compile(&world);

    let document = warned.output.map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        TopicError::render_failed("typst compilation", error_msgs.join("; "))
    })?;

    typst_pdf::pdf(&document, &PdfOptions::default()).map_err(|errors| {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.message.to_string()).collect();
        TopicError::render_failed("pdf rendering", error_msgs.join("; "))
    })
}

/// Quote user text as a Typst string literal
pub fn typst_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typst_string_escaping() {
        assert_eq!(typst_string("Math"), "\"Math\"");
        assert_eq!(typst_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(typst_string("a\\b"), "\"a\\\\b\"");
        assert_eq!(typst_string("line\nbreak"), "\"line\\nbreak\"");
        // Markup characters pass through untouched inside a string literal
        assert_eq!(typst_string("#*_$[]"), "\"#*_$[]\"");
    }

    #[test]
    fn test_compile_simple_document() {
        let source = format!("#table(columns: 1, [#{}])", typst_string("= not a heading #[x]"));
        let pdf = compile_pdf(source);
        assert!(pdf.is_ok(), "PDF generation failed: {:?}", pdf.err());
        assert!(pdf.unwrap().starts_with(b"%PDF"), "Output is not a valid PDF");
    }

    #[test]
    fn test_compile_error_is_reported() {
        let err = compile_pdf("#let x = (".to_string()).unwrap_err();
        assert_eq!(err.error_code(), "RENDER_FAILED");
    }
}
