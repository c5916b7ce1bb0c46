//! Colab link construction, detection and insertion.

use serde_json::{Value, json};

use crate::notebook::Notebook;

/// Static badge image shown by every link.
pub const COLAB_BADGE_URL: &str = "https://colab.research.google.com/assets/colab-badge.svg";

/// Prefix Colab uses to open a notebook straight from GitHub.
const COLAB_GITHUB_PREFIX: &str = "https://colab.research.google.com/github/";

/// Raw HTML anchor form.
const ANCHOR_PATTERN: &str = "<a href=\"https://colab";

/// Markdown image-link badge form.
const BADGE_PATTERN: &str =
    "[![Open in Colab](https://colab.research.google.com/assets/colab-badge.svg)";

/// Position the link cell occupies: right after the title cell.
pub const LINK_CELL_INDEX: usize = 1;

/// Markup used for the inserted link.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkFormat {
    /// `[![Open in Colab](badge)](url)`
    #[default]
    Badge,
    /// `<a href="url" target="_parent"><img src="badge" .../></a>`
    Anchor,
}

/// Target URL that opens `relative_path` from the repository in Colab.
///
/// Plain concatenation; no URL escaping.
#[must_use]
pub fn colab_url(github_base: &str, relative_path: &str) -> String {
    format!("{COLAB_GITHUB_PREFIX}{github_base}{relative_path}")
}

/// Build the link markup for a notebook.
#[must_use]
pub fn build_link(github_base: &str, relative_path: &str, format: LinkFormat) -> String {
    let url = colab_url(github_base, relative_path);
    match format {
        LinkFormat::Badge => format!("[![Open in Colab]({COLAB_BADGE_URL})]({url})"),
        LinkFormat::Anchor => format!(
            "<a href=\"{url}\" target=\"_parent\"><img src=\"{COLAB_BADGE_URL}\" alt=\"Open In Colab\"/></a>"
        ),
    }
}

/// Whether the cell at [`LINK_CELL_INDEX`] already holds a Colab link.
///
/// Only that position is inspected. Missing cell, non-markdown cell or a
/// first source line without either link pattern all mean "no link".
/// Both link formats are recognized whichever one is configured.
#[must_use]
pub fn detect_existing_link(notebook: &Notebook) -> bool {
    let Some(cell) = notebook.cell(LINK_CELL_INDEX) else {
        return false;
    };
    if !cell.is_markdown() {
        return false;
    }
    cell.first_source_line()
        .is_some_and(|line| line.contains(ANCHOR_PATTERN) || line.contains(BADGE_PATTERN))
}

/// Insert a link cell holding `link` at [`LINK_CELL_INDEX`].
///
/// An empty notebook first gets an empty markdown cell so the link still
/// lands at index 1 and a second run detects it.
pub fn inject(notebook: &mut Notebook, link: String) {
    if notebook.is_empty() {
        notebook.insert_cell(0, empty_markdown_cell());
    }
    notebook.insert_cell(LINK_CELL_INDEX, link_cell(link));
}

fn link_cell(link: String) -> Value {
    json!({
        "cell_type": "markdown",
        "metadata": {
            "colab_type": "text",
            "id": "view-in-github"
        },
        "source": [link]
    })
}

fn empty_markdown_cell() -> Value {
    json!({
        "cell_type": "markdown",
        "metadata": {},
        "source": []
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notebook(cells: Value) -> Notebook {
        Notebook::parse(&json!({ "cells": cells }).to_string()).expect("parse")
    }

    #[test]
    fn test_colab_url() {
        assert_eq!(
            colab_url(
                "OpenJij/OpenJijTutorial/blob/master/",
                "ja/2-Evaluation_errorbar.ipynb"
            ),
            "https://colab.research.google.com/github/OpenJij/OpenJijTutorial/blob/master/ja/2-Evaluation_errorbar.ipynb"
        );
    }

    #[test]
    fn test_build_badge_link() {
        let link = build_link("o/r/blob/main/", "a.ipynb", LinkFormat::Badge);
        assert_eq!(
            link,
            "[![Open in Colab](https://colab.research.google.com/assets/colab-badge.svg)](https://colab.research.google.com/github/o/r/blob/main/a.ipynb)"
        );
    }

    #[test]
    fn test_build_anchor_link() {
        let link = build_link("o/r/blob/main/", "a.ipynb", LinkFormat::Anchor);
        assert!(link.starts_with(
            "<a href=\"https://colab.research.google.com/github/o/r/blob/main/a.ipynb\""
        ));
        assert!(link.contains("alt=\"Open In Colab\""));
    }

    #[test]
    fn test_detect_handles_short_notebooks() {
        assert!(!detect_existing_link(&notebook(json!([]))));
        assert!(!detect_existing_link(&notebook(json!([
            {"cell_type": "markdown", "metadata": {}, "source": [BADGE_PATTERN]}
        ]))));
    }

    #[test]
    fn test_detect_empty_source() {
        let nb = notebook(json!([
            {"cell_type": "markdown", "metadata": {}, "source": ["# T"]},
            {"cell_type": "markdown", "metadata": {}, "source": []}
        ]));
        assert!(!detect_existing_link(&nb));
    }

    #[test]
    fn test_inject_empty_notebook_pads() {
        let mut nb = notebook(json!([]));
        inject(&mut nb, build_link("o/r/", "a.ipynb", LinkFormat::Badge));
        assert_eq!(nb.len(), 2);
        assert!(detect_existing_link(&nb));
    }

    #[test]
    fn test_inject_single_cell_appends() {
        let mut nb = notebook(json!([
            {"cell_type": "markdown", "metadata": {}, "source": ["# Title"]}
        ]));
        inject(&mut nb, build_link("o/r/", "a.ipynb", LinkFormat::Anchor));
        assert_eq!(nb.len(), 2);
        assert_eq!(
            nb.cell(0).and_then(|c| c.first_source_line()),
            Some("# Title")
        );
        assert!(detect_existing_link(&nb));
    }
}
