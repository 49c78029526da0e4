// src/locate.rs

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").expect("CSS selector for body"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:h[1-6]|p)$").expect("heading element pattern"));

/// Class MediaWiki puts on the `<div>` wrapping section headings.
const MW_HEADING_CLASS: &str = "mw-heading";

/// Every table introduced by a heading whose text is exactly `name`.
///
/// Text nodes equal to `name` with no heading or paragraph ancestor are
/// ignored. A heading with no table after it is a structural error.
pub fn locate<'a>(doc: &'a Html, name: &str) -> Result<Vec<ElementRef<'a>>> {
    let mut tables = Vec::new();
    for heading in headings(doc, name) {
        let table = following_table(heading)?;
        trace!(heading = heading.value().name(), "Found table after heading");
        tables.push(table);
    }
    tables.dedup_by_key(|t| t.id());
    debug!(name, matches = tables.len(), "Located tables");
    Ok(tables)
}

/// The nearest `h1`..`h6` or `p` above each text node equal to `name`.
pub fn headings<'a>(doc: &'a Html, name: &str) -> Vec<ElementRef<'a>> {
    let scope = doc
        .select(&BODY)
        .next()
        .unwrap_or_else(|| doc.root_element());
    scope
        .descendants()
        .filter(|node| node.value().as_text().map_or(false, |t| &**t == name))
        .filter_map(|node| node.ancestors().filter_map(ElementRef::wrap).find(is_heading))
        .collect()
}

/// The first `<table>` among the siblings after `heading`.
///
/// When the heading sits inside a MediaWiki heading wrapper, the wrapper's
/// siblings are searched as well.
pub fn following_table(heading: ElementRef<'_>) -> Result<ElementRef<'_>> {
    if let Some(table) = next_table(heading) {
        return Ok(table);
    }
    let wrapper = heading
        .parent()
        .and_then(ElementRef::wrap)
        .filter(is_heading_wrapper);
    if let Some(table) = wrapper.and_then(next_table) {
        return Ok(table);
    }
    bail!("no table follows <{}> heading", heading.value().name())
}

fn next_table(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sib| sib.value().name() == "table")
}

fn is_heading(el: &ElementRef<'_>) -> bool {
    HEADING.is_match(el.value().name())
}

fn is_heading_wrapper(el: &ElementRef<'_>) -> bool {
    el.value().name() == "div"
        && el
            .value()
            .attr("class")
            .map_or(false, |c| c.split_whitespace().any(|c| c == MW_HEADING_CLASS))
}
