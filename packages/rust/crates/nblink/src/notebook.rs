//! Notebook document model.
//!
//! Wraps the raw JSON object so every field this tool does not touch
//! (metadata, outputs, nbformat versions, unknown keys) round-trips
//! unchanged and in its original order.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::error::DocumentError;

/// A parsed notebook document with a validated `cells` array.
#[derive(Debug, Clone, PartialEq)]
pub struct Notebook {
    root: Map<String, Value>,
}

impl Notebook {
    /// Parse notebook JSON text.
    ///
    /// # Errors
    /// Returns a [`DocumentError`] when the text is not JSON, not an object,
    /// has no `cells` array, or contains a cell that is not an object.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let Value::Object(root) = serde_json::from_str::<Value>(text)? else {
            return Err(DocumentError::NotAnObject);
        };

        let cells = root
            .get("cells")
            .and_then(Value::as_array)
            .ok_or(DocumentError::MissingCells)?;

        if let Some(index) = cells.iter().position(|cell| !cell.is_object()) {
            return Err(DocumentError::CellNotObject(index));
        }

        Ok(Self { root })
    }

    /// All cells in document order.
    #[must_use]
    pub fn cells(&self) -> &[Value] {
        self.root
            .get("cells")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    /// True when the notebook has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }

    /// Read view of the cell at `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<CellRef<'_>> {
        self.cells()
            .get(index)
            .and_then(Value::as_object)
            .map(CellRef)
    }

    /// Insert `cell` at `index`, shifting later cells down.
    ///
    /// An index past the end appends.
    pub fn insert_cell(&mut self, index: usize, cell: Value) {
        if let Some(cells) = self.root.get_mut("cells").and_then(Value::as_array_mut) {
            let index = index.min(cells.len());
            cells.insert(index, cell);
        }
    }

    /// Serialize with one-space indentation and a trailing newline,
    /// the layout Jupyter writes.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn to_pretty_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b" ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        self.root.serialize(&mut serializer)?;
        buffer.push(b'\n');
        Ok(buffer)
    }
}

/// Borrowed view of a single cell.
#[derive(Debug, Clone, Copy)]
pub struct CellRef<'a>(&'a Map<String, Value>);

impl<'a> CellRef<'a> {
    /// `cell_type` field, e.g. `markdown` or `code`.
    #[must_use]
    pub fn cell_type(&self) -> Option<&'a str> {
        self.0.get("cell_type").and_then(Value::as_str)
    }

    /// True for markdown cells.
    #[must_use]
    pub fn is_markdown(&self) -> bool {
        self.cell_type() == Some("markdown")
    }

    /// Cell metadata mapping.
    #[must_use]
    pub fn metadata(&self) -> Option<&'a Map<String, Value>> {
        self.0.get("metadata").and_then(Value::as_object)
    }

    /// First line of `source`.
    ///
    /// Notebooks store source either as a list of lines or as one string;
    /// both forms are accepted.
    #[must_use]
    pub fn first_source_line(&self) -> Option<&'a str> {
        match self.0.get("source")? {
            Value::Array(lines) => lines.first().and_then(Value::as_str),
            Value::String(text) => text.lines().next(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            Notebook::parse("[1, 2]"),
            Err(DocumentError::NotAnObject)
        ));
    }

    #[test]
    fn test_parse_rejects_missing_cells() {
        assert!(matches!(
            Notebook::parse(r#"{"metadata": {}}"#),
            Err(DocumentError::MissingCells)
        ));
    }

    #[test]
    fn test_parse_rejects_non_object_cell() {
        assert!(matches!(
            Notebook::parse(r#"{"cells": [{}, "oops"]}"#),
            Err(DocumentError::CellNotObject(1))
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            Notebook::parse("{\"cells\": ["),
            Err(DocumentError::Json(_))
        ));
    }

    #[test]
    fn test_first_source_line_string_form() {
        let text = json!({
            "cells": [{"cell_type": "markdown", "metadata": {}, "source": "# Title\nbody"}]
        })
        .to_string();
        let notebook = Notebook::parse(&text).expect("parse");
        let cell = notebook.cell(0).expect("cell 0");
        assert_eq!(cell.first_source_line(), Some("# Title"));
        assert!(cell.is_markdown());
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut notebook = Notebook::parse(r#"{"cells": []}"#).expect("parse");
        notebook.insert_cell(5, json!({"cell_type": "code", "metadata": {}, "source": []}));
        assert_eq!(notebook.len(), 1);
        assert_eq!(notebook.cell(0).and_then(|c| c.cell_type()), Some("code"));
    }

    #[test]
    fn test_pretty_bytes_preserves_number_text() {
        let text = r#"{"cells": [{"cell_type": "code", "metadata": {"x": 1e-07, "big": 123456789012345678901234567890, "f": 0.1}, "source": []}]}"#;
        let notebook = Notebook::parse(text).expect("parse");
        let out = String::from_utf8(notebook.to_pretty_bytes().expect("serialize")).expect("utf8");

        assert!(out.contains("\"x\": 1e-07"), "got: {out}");
        assert!(
            out.contains("\"big\": 123456789012345678901234567890"),
            "got: {out}"
        );
        assert!(out.contains("\"f\": 0.1"), "got: {out}");
    }

    #[test]
    fn test_pretty_bytes_preserves_key_order() {
        let text = r#"{"nbformat": 4, "cells": [], "metadata": {"z": 1, "a": 2}}"#;
        let notebook = Notebook::parse(text).expect("parse");
        let out = String::from_utf8(notebook.to_pretty_bytes().expect("serialize")).expect("utf8");

        let nbformat = out.find("nbformat").expect("nbformat key");
        let cells = out.find("cells").expect("cells key");
        let z = out.find("\"z\"").expect("z key");
        let a = out.find("\"a\"").expect("a key");
        assert!(nbformat < cells);
        assert!(z < a);
        assert!(out.starts_with("{\n \"nbformat\": 4"));
        assert!(out.ends_with("}\n"));
    }
}
