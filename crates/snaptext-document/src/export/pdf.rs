// SPDX-License-Identifier: MIT
// Copyright (c) 2026 The SnapText Authors
//
// PDF export — render the current text onto a single fixed-size page using
// `printpdf` 0.8.
//
// printpdf 0.8 uses a data-oriented API: documents are built by constructing
// `PdfPage` structs containing `Vec<Op>` operation lists, then serialised
// via `PdfDocument::save()`.
//
// The artifact is a one-page snapshot: text is word-wrapped to the usable
// page width and lines that would fall below the bottom margin are dropped.
// There is no pagination — exactly one page regardless of text length.

use std::path::Path;

use printpdf::{
    BuiltinFont, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, Point, Pt, TextItem,
};
use snaptext_core::error::{Result, SnapTextError};
use tracing::{debug, info, instrument};

/// Fixed page size in PDF points (1/72 inch).
pub const PAGE_WIDTH_PT: f32 = 300.0;
pub const PAGE_HEIGHT_PT: f32 = 600.0;

/// Text anchor offset from the top-left corner; also used as the margin on
/// the remaining three sides.
const ANCHOR_PT: f32 = 50.0;
const FONT_SIZE_PT: f32 = 12.0;
const LINE_HEIGHT_PT: f32 = 14.0;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Renders text to the single-page PDF artifact.
pub struct PdfExporter {
    /// Title embedded in the PDF /Info dictionary.
    title: String,
}

impl PdfExporter {
    pub fn new() -> Self {
        Self {
            title: "SnapText Export".into(),
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Render `text` to PDF bytes.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub fn render(&self, text: &str) -> Result<Vec<u8>> {
        let doc = self.build_document(text);
        let mut warnings: Vec<PdfWarnMsg> = Vec::new();
        let bytes = doc.save(&PdfSaveOptions::default(), &mut warnings);
        info!(bytes = bytes.len(), "PDF rendered");
        Ok(bytes)
    }

    /// Render `text` and overwrite the artifact at `path`.
    pub fn write_to_file(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render(text)?;
        std::fs::write(path.as_ref(), &bytes).map_err(|err| {
            SnapTextError::PdfError(format!("cannot write {}: {}", path.as_ref().display(), err))
        })?;
        info!(path = %path.as_ref().display(), "PDF artifact written");
        Ok(())
    }

    /// Build the one-page document for `text`.
    fn build_document(&self, text: &str) -> PdfDocument {
        let page_w = Mm(PAGE_WIDTH_PT * MM_PER_PT);
        let page_h = Mm(PAGE_HEIGHT_PT * MM_PER_PT);

        let lines = layout(text, max_chars_per_line());
        let capacity = max_lines_per_page();
        let visible = &lines[..lines.len().min(capacity)];
        if visible.len() < lines.len() {
            debug!(
                dropped = lines.len() - visible.len(),
                "text exceeds the fixed page, dropping overflow lines"
            );
        }

        let mut ops: Vec<Op> = Vec::new();
        for (idx, line) in visible.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            // Baselines run downward from the top-left anchor.
            let y_pt = PAGE_HEIGHT_PT - ANCHOR_PT - (idx as f32 * LINE_HEIGHT_PT);

            ops.push(Op::StartTextSection);
            ops.push(Op::SetTextCursor {
                pos: Point {
                    x: Pt(ANCHOR_PT),
                    y: Pt(y_pt),
                },
            });
            ops.push(Op::SetFontSizeBuiltinFont {
                size: Pt(FONT_SIZE_PT),
                font: BuiltinFont::Helvetica,
            });
            ops.push(Op::WriteTextBuiltinFont {
                items: vec![TextItem::Text(line.clone())],
                font: BuiltinFont::Helvetica,
            });
            ops.push(Op::EndTextSection);
        }

        let mut doc = PdfDocument::new(&self.title);
        doc.with_pages(vec![PdfPage::new(page_w, page_h, ops)]);
        doc
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Characters that fit on one line, estimated from the average Helvetica
/// glyph width (roughly half the font size).
fn max_chars_per_line() -> usize {
    ((PAGE_WIDTH_PT - 2.0 * ANCHOR_PT) / (0.5 * FONT_SIZE_PT)) as usize
}

/// Baselines that fit between the top anchor and the bottom margin.
fn max_lines_per_page() -> usize {
    ((PAGE_HEIGHT_PT - 2.0 * ANCHOR_PT) / LINE_HEIGHT_PT) as usize + 1
}

/// Word-wrap `text` so no line exceeds `max_width` characters.
///
/// Explicit newlines are preserved; words longer than `max_width` are broken
/// at character boundaries.
fn layout(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;

        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();

            if word_len > max_width {
                // Flush what we have, then hard-break the oversized word.
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                for ch in word.chars() {
                    if current_len == max_width {
                        lines.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                    current.push(ch);
                    current_len += 1;
                }
            } else if current_len == 0 {
                current.push_str(word);
                current_len = word_len;
            } else if current_len + 1 + word_len <= max_width {
                current.push(' ');
                current.push_str(word);
                current_len += 1 + word_len;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_len = word_len;
            }
        }

        // Empty paragraphs still occupy a baseline.
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_respects_max_width() {
        let lines = layout("alpha beta gamma delta epsilon", 11);
        assert!(lines.iter().all(|l| l.chars().count() <= 11));
        assert_eq!(lines.join(" "), "alpha beta gamma delta epsilon");
    }

    #[test]
    fn layout_preserves_explicit_newlines() {
        let lines = layout("one\n\ntwo", 20);
        assert_eq!(lines, vec!["one", "", "two"]);
    }

    #[test]
    fn layout_breaks_oversized_words() {
        let lines = layout("abcdefghij", 4);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn render_produces_pdf_bytes() {
        let bytes = PdfExporter::new().render("Hello World").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn long_text_still_renders_exactly_one_page() {
        let long_text = "word ".repeat(5_000);
        let doc = PdfExporter::new().build_document(&long_text);
        assert_eq!(doc.pages.len(), 1);
    }

    #[test]
    fn whitespace_only_text_renders_a_blank_single_page() {
        // Export preconditions reject blank text upstream; the renderer
        // itself still degrades to one empty page.
        let doc = PdfExporter::new().build_document("   ");
        assert_eq!(doc.pages.len(), 1);
    }

    #[test]
    fn write_to_file_overwrites_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.pdf");
        let exporter = PdfExporter::new();

        exporter.write_to_file("first export", &path).unwrap();
        let first_len = std::fs::metadata(&path).unwrap().len();

        exporter.write_to_file("x", &path).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert!(second.starts_with(b"%PDF"));
        // Overwritten, not appended.
        assert!((second.len() as u64) < first_len * 2);
    }
}
