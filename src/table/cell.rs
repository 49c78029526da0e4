// src/table/cell.rs

use scraper::ElementRef;

/// How far down a cell's value reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSpan {
    /// The cell covers this many rows, its own included.
    Rows(usize),
    /// `rowspan="0"`: the cell covers every remaining row.
    Remaining,
}

impl Default for RowSpan {
    fn default() -> Self {
        RowSpan::Rows(1)
    }
}

impl RowSpan {
    /// Parse a `rowspan` attribute. Absent or unparsable values count as 1.
    pub fn parse(attr: Option<&str>) -> Self {
        match attr.map(str::trim).map(str::parse::<usize>) {
            Some(Ok(0)) => RowSpan::Remaining,
            Some(Ok(n)) => RowSpan::Rows(n),
            _ => RowSpan::default(),
        }
    }

    /// Exclusive end index of the rows covered when the cell sits in row
    /// `index` of a table holding `len` rows. Never past `len`.
    pub fn end(self, index: usize, len: usize) -> usize {
        match self {
            RowSpan::Rows(n) => index.saturating_add(n).min(len),
            RowSpan::Remaining => len,
        }
    }
}

/// A table cell reduced to what the extractor needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub value: String,
    pub rowspan: RowSpan,
}

impl Cell {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            rowspan: RowSpan::default(),
        }
    }

    pub fn spanning(value: impl Into<String>, rows: usize) -> Self {
        Self {
            value: value.into(),
            rowspan: RowSpan::Rows(rows),
        }
    }

    pub fn from_element(el: ElementRef<'_>) -> Self {
        Self {
            value: cell_text(el),
            rowspan: RowSpan::parse(el.value().attr("rowspan")),
        }
    }
}

/// Whether `el` is a `td` or `th`.
pub fn is_cell(el: &ElementRef<'_>) -> bool {
    matches!(el.value().name(), "td" | "th")
}

/// All text fragments under `el`, each trimmed, blanks dropped, joined by a
/// single space. Text inside `<style>` and `<script>` is not content.
pub fn cell_text(el: ElementRef<'_>) -> String {
    el.descendants()
        .filter(|node| {
            node.parent()
                .and_then(|p| p.value().as_element())
                .map_or(true, |p| !matches!(p.name(), "style" | "script"))
        })
        .filter_map(|node| node.value().as_text().map(|t| &**t))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first(html: &Html, css: &str) -> Cell {
        let sel = Selector::parse(css).unwrap();
        Cell::from_element(html.select(&sel).next().unwrap())
    }

    #[test]
    fn rowspan_parsing() {
        assert_eq!(RowSpan::parse(None), RowSpan::Rows(1));
        assert_eq!(RowSpan::parse(Some("3")), RowSpan::Rows(3));
        assert_eq!(RowSpan::parse(Some(" 2 ")), RowSpan::Rows(2));
        // HTML semantics: zero spans the rest of the table rather than
        // assigning the value nowhere.
        assert_eq!(RowSpan::parse(Some("0")), RowSpan::Remaining);
        assert_eq!(RowSpan::parse(Some("two")), RowSpan::Rows(1));
        assert_eq!(RowSpan::parse(Some("")), RowSpan::Rows(1));
    }

    #[test]
    fn span_end_is_clamped_to_table() {
        assert_eq!(RowSpan::Rows(1).end(0, 3), 1);
        assert_eq!(RowSpan::Rows(3).end(0, 3), 3);
        assert_eq!(RowSpan::Rows(5).end(1, 3), 3);
        assert_eq!(RowSpan::Rows(usize::MAX).end(2, 3), 3);
        assert_eq!(RowSpan::Remaining.end(1, 4), 4);
    }

    #[test]
    fn text_fragments_are_trimmed_and_space_joined() {
        let html = Html::parse_fragment(
            "<table><tr><td rowspan=\"2\">\n  Apollo <b>11</b>\n<sup>[1]</sup>  </td></tr></table>",
        );
        let cell = first(&html, "td");
        assert_eq!(cell.value, "Apollo 11 [1]");
        assert_eq!(cell.rowspan, RowSpan::Rows(2));
    }

    #[test]
    fn style_and_script_text_is_skipped() {
        let html = Html::parse_fragment(
            "<table><tr><td><style>.mw-parser-output .plainlist ol{margin:0}</style>\
             <div class=\"plainlist\">Armstrong</div><script>var x = 1;</script></td></tr></table>",
        );
        assert_eq!(first(&html, "td").value, "Armstrong");
    }

    #[test]
    fn whitespace_only_cell_is_empty() {
        let html = Html::parse_fragment("<table><tr><td>  \n </td></tr></table>");
        assert_eq!(first(&html, "td").value, "");
    }
}
