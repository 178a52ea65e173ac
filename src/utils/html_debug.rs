// src/utils/html_debug.rs
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::extractors::matchers::Matcher;
use crate::utils::error::StorageError;

/// A highlighted byte range of the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight<'a> {
    pub start: usize,
    pub end: usize,
    pub kind: &'a str,
    pub matcher: &'a str,
}

/// Saves a HTML document to a file with debug highlights.
/// Highlights overlapping an earlier one are dropped.
pub fn save_debug_html(html: &str, path: &Path, highlights: &[Highlight<'_>]) -> Result<(), StorageError> {
    let mut file = File::create(path)?;
    file.write_all(render_debug_html(html, highlights).as_bytes())?;

    tracing::info!("Saved debug HTML to {}", path.display());
    Ok(())
}

fn render_debug_html(html: &str, highlights: &[Highlight<'_>]) -> String {
    // Add debug styling in head
    let mut debug_html = String::from("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
    debug_html.push_str(".highlight-container { background-color: #FFFF00; }\n");
    debug_html.push_str(".highlight-name { background-color: #90EE90; }\n");
    debug_html.push_str(".highlight-price { background-color: #ADD8E6; }\n");
    debug_html.push_str(".highlight-rating { background-color: #FFA500; }\n");
    debug_html.push_str(".highlight-custom { background-color: #FFC0CB; }\n");
    debug_html.push_str("</style>\n</head>\n<body>\n");

    let mut sorted = highlights.to_vec();
    sorted.sort_by_key(|h| (h.start, std::cmp::Reverse(h.end)));

    let mut last_pos = 0;
    for h in sorted {
        if h.start < last_pos {
            tracing::trace!("Skipping overlapping highlight {}..{} ({})", h.start, h.end, h.matcher);
            continue;
        }
        debug_html.push_str(&html[last_pos..h.start]);

        let css_class = match h.kind {
            "container" => "highlight-container",
            "name" => "highlight-name",
            "price" => "highlight-price",
            "rating" => "highlight-rating",
            _ => "highlight-custom",
        };

        debug_html.push_str(&format!(
            "<span class=\"{}\" title=\"Position: {}-{}, Type: {}, Matcher: {}\">",
            css_class, h.start, h.end, h.kind, h.matcher
        ));
        debug_html.push_str(&html[h.start..h.end]);
        debug_html.push_str("</span>");

        last_pos = h.end;
    }

    debug_html.push_str(&html[last_pos..]);
    debug_html.push_str("\n</body>\n</html>");
    debug_html
}

/// Collects every match of every matcher in each group as a highlight.
pub fn collect_highlights<'a>(html: &str, groups: &[(&'a str, &'a [Matcher])]) -> Vec<Highlight<'a>> {
    let mut highlights = Vec::new();
    for &(kind, matchers) in groups {
        for matcher in matchers.iter() {
            for mat in matcher.re.find_iter(html) {
                highlights.push(Highlight {
                    start: mat.start(),
                    end: mat.end(),
                    kind,
                    matcher: matcher.name,
                });
            }
        }
    }
    highlights
}

/// Creates a debug copy of `html` with the locations of the given matcher groups highlighted.
pub fn create_debug_html(html: &str, path: &Path, groups: &[(&str, &[Matcher])]) -> Result<(), StorageError> {
    let highlights = collect_highlights(html, groups);
    tracing::debug!("Annotating {} pattern matches", highlights.len());
    save_debug_html(html, path, &highlights)
}
