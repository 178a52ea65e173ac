// src/extractors/text.rs
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]*>").expect("Failed to compile TAG_RE")
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Failed to compile WHITESPACE_RE")
});

// Only these named entities are decoded; numeric entities are left as-is.
const ENTITIES: [(&str, &str); 5] = [
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
];

/// Turns a fragment of (possibly tagged) HTML into a single line of plain text.
///
/// Tags are stripped before entities are decoded, so `&lt;b&gt;` survives as
/// the literal text `<b>`.
pub fn clean_text(raw: &str) -> String {
    let mut cleaned = TAG_RE.replace_all(raw, "").into_owned();

    for (entity, replacement) in ENTITIES {
        if cleaned.contains(entity) {
            cleaned = cleaned.replace(entity, replacement);
        }
    }

    WHITESPACE_RE.replace_all(&cleaned, " ").trim().to_string()
}
