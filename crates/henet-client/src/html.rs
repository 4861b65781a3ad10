//! Small DOM helpers shared by the page extractors.

use std::sync::LazyLock;

use henet_core::error::AppError;
use regex::Regex;
use scraper::{ElementRef, Selector};

#[allow(clippy::expect_used)]
static LAYOUT_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\t|\n| {2,})").expect("whitespace regex is valid"));

pub(crate) fn parse_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css)
        .map_err(|e| AppError::ExtractionError(format!("Invalid selector {css:?}: {e}")))
}

/// Element children of a table row, i.e. its cells.
pub(crate) fn cells<'a>(row: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    row.children().filter_map(ElementRef::wrap).collect()
}

/// All descendant text of an element, untrimmed. A missing element is "".
pub(crate) fn text_of(element: Option<&ElementRef<'_>>) -> String {
    element
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default()
}

/// Text of the cell's first child element, or of the cell itself when it
/// has no child elements.
pub(crate) fn first_child_text(cell: Option<&ElementRef<'_>>) -> String {
    let Some(cell) = cell else {
        return String::new();
    };
    match cell.children().filter_map(ElementRef::wrap).next() {
        Some(child) => text_of(Some(&child)),
        None => text_of(Some(cell)),
    }
}

/// Text of the cell's last child element, or of the cell itself when it
/// has no child elements.
pub(crate) fn last_child_text(cell: Option<&ElementRef<'_>>) -> String {
    let Some(cell) = cell else {
        return String::new();
    };
    match cell.children().filter_map(ElementRef::wrap).last() {
        Some(child) => text_of(Some(&child)),
        None => text_of(Some(cell)),
    }
}

/// Drop layout whitespace: every tab, newline and run of two or more spaces
/// is removed outright, not replaced by a single space.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    LAYOUT_WHITESPACE.replace_all(text, "").into_owned()
}

/// `None` for text that is blank after trimming, otherwise the text verbatim.
pub(crate) fn non_blank(text: String) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
