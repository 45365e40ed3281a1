use std::path::Path;

use anyhow::{Context, Result};
use pdf::content::Operation;
use pdf::file::File;
use pdf::primitive::Primitive;
use tracing::{debug, info};

/// Kerning in a TJ array beyond this (in thousandths of an em) reads as a space
const WORD_GAP_THRESHOLD: f32 = -200.0;

/// One rendered page of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// One-based page number
    pub number: usize,
    text: String,
}

impl Page {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Plain extracted text in reading order
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Source of page text for a document path
pub trait DocumentReader {
    fn read_pages(&self, path: &Path) -> Result<Vec<Page>>;
}

/// Reads page text from PDF content streams
#[derive(Debug, Clone, Default)]
pub struct PdfDocumentReader;

impl DocumentReader for PdfDocumentReader {
    fn read_pages(&self, path: &Path) -> Result<Vec<Page>> {
        let file = File::<Vec<u8>>::open(path)
            .with_context(|| format!("Failed to open PDF: {:?}", path))?;

        let mut pages = Vec::new();
        for (i, page) in file.pages().enumerate() {
            let page = page.with_context(|| format!("Unable to read page {}", i + 1))?;
            let ops = match &page.contents {
                Some(content) => text_ops(&content.operations),
                None => Vec::new(),
            };
            let text = render_text(&ops);
            debug!("Page {}: {} characters", i + 1, text.len());
            pages.push(Page::new(i + 1, text));
        }

        info!("Read {} pages from {:?}", pages.len(), path);
        Ok(pages)
    }
}

/// Text-relevant content stream operation
#[derive(Debug, Clone, PartialEq)]
pub enum TextOp {
    /// Show a string (`Tj`)
    Show(String),
    /// Show strings with positioning adjustments (`TJ`)
    ShowArray(Vec<TjItem>),
    /// Move to a new line or position (`Td`, `TD`, `T*`, `Tm`)
    NextLine,
    /// End of a text object (`ET`)
    EndText,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TjItem {
    Text(String),
    Offset(f32),
}

fn decode(primitive: &Primitive) -> Option<String> {
    match primitive {
        Primitive::String(s) => s.as_str().ok().map(|text| text.into_owned()),
        _ => None,
    }
}

/// Keep only the operations that affect extracted text
fn text_ops(operations: &[Operation]) -> Vec<TextOp> {
    let mut ops = Vec::new();

    for Operation { operator, operands } in operations {
        match (operator.as_str(), operands.as_slice()) {
            ("Tj", [text]) => ops.extend(decode(text).map(TextOp::Show)),
            ("TJ", [Primitive::Array(items)]) => {
                let items = items
                    .iter()
                    .filter_map(|item| match item {
                        Primitive::String(_) => decode(item).map(TjItem::Text),
                        other => other.as_number().ok().map(TjItem::Offset),
                    })
                    .collect();
                ops.push(TextOp::ShowArray(items));
            }
            ("'", [text]) | ("\"", [_, _, text]) => {
                ops.push(TextOp::NextLine);
                ops.extend(decode(text).map(TextOp::Show));
            }
            ("Td" | "TD" | "T*" | "Tm", _) => ops.push(TextOp::NextLine),
            ("ET", _) => ops.push(TextOp::EndText),
            _ => continue,
        }
    }

    ops
}

/// Flatten text operations into plain text; layout is not preserved
pub fn render_text(ops: &[TextOp]) -> String {
    let mut out = String::new();

    for op in ops {
        match op {
            TextOp::Show(text) => out.push_str(text),
            TextOp::ShowArray(items) => {
                for item in items {
                    match item {
                        TjItem::Text(text) => out.push_str(text),
                        TjItem::Offset(gap) if *gap < WORD_GAP_THRESHOLD => {
                            if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                                out.push(' ');
                            }
                        }
                        TjItem::Offset(_) => {}
                    }
                }
            }
            TextOp::NextLine | TextOp::EndText => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_text_breaks_lines() {
        let ops = vec![
            TextOp::Show("Mary Jones:".to_string()),
            TextOp::NextLine,
            TextOp::NextLine,
            TextOp::Show("Good morning.".to_string()),
            TextOp::EndText,
        ];

        assert_eq!(render_text(&ops), "Mary Jones:\nGood morning.");
    }

    #[test]
    fn test_render_text_kerning_gaps() {
        let ops = vec![TextOp::ShowArray(vec![
            TjItem::Text("Acme".to_string()),
            TjItem::Offset(-250.0),
            TjItem::Text("Co".to_string()),
            TjItem::Offset(-20.0),
            TjItem::Text("rp".to_string()),
        ])];

        assert_eq!(render_text(&ops), "Acme Corp");
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[TextOp::EndText]), "");
    }

    #[test]
    fn test_missing_pdf_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = PdfDocumentReader.read_pages(&dir.path().join("missing.pdf"));

        assert!(result.is_err());
    }
}
