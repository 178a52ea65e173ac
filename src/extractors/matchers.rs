// src/extractors/matchers.rs

// --- Imports ---
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A named, compiled pattern. Tables of matchers are tried in priority order.
#[derive(Debug)]
pub struct Matcher {
    pub name: &'static str,
    pub re: Regex,
}

impl Matcher {
    fn compile(name: &'static str, pattern: &str) -> Self {
        // Case-insensitive, and `.` may cross line breaks inside a container.
        let re = Regex::new(&format!("(?is){}", pattern))
            .unwrap_or_else(|e| panic!("Failed to compile matcher '{}': {}", name, e));
        Self { name, re }
    }
}

fn table(entries: &[(&'static str, &str)]) -> Vec<Matcher> {
    entries
        .iter()
        .map(|(name, pattern)| Matcher::compile(name, pattern))
        .collect()
}

// --- Container patterns ---
// Each has a single capture group holding the container's inner HTML.
pub static CONTAINER_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    table(&[
        // Search-result component blocks, closed by three nested divs
        ("search-result", r#"<div[^>]*data-component-type="s-search-result"[^>]*>(.*?)</div>\s*</div>\s*</div>"#),
        ("product-item-div", r#"<div[^>]*class="[^"]*product[^"]*item[^"]*"[^>]*>(.*?)</div>"#),
        ("product-card-div", r#"<div[^>]*class="[^"]*product[^"]*card[^"]*"[^>]*>(.*?)</div>"#),
        ("product-article", r#"<article[^>]*class="[^"]*product[^"]*"[^>]*>(.*?)</article>"#),
        ("product-li", r#"<li[^>]*class="[^"]*product[^"]*"[^>]*>(.*?)</li>"#),
        ("item-div", r#"<div[^>]*class="[^"]*item[^"]*"[^>]*>(.*?)</div>"#),
    ])
});

// --- Field patterns ---
pub static NAME_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    table(&[
        ("heading-title", r#"<h[1-6][^>]*class="[^"]*title[^"]*"[^>]*>(.*?)</h[1-6]>"#),
        ("heading-name", r#"<h[1-6][^>]*class="[^"]*name[^"]*"[^>]*>(.*?)</h[1-6]>"#),
        ("heading-product-title", r#"<h[1-6][^>]*class="[^"]*product[^"]*title[^"]*"[^>]*>(.*?)</h[1-6]>"#),
        ("link-title", r#"<a[^>]*class="[^"]*title[^"]*"[^>]*>(.*?)</a>"#),
        ("link-name", r#"<a[^>]*class="[^"]*name[^"]*"[^>]*>(.*?)</a>"#),
        ("link-product-link", r#"<a[^>]*class="[^"]*product[^"]*link[^"]*"[^>]*>(.*?)</a>"#),
        ("span-title", r#"<span[^>]*class="[^"]*title[^"]*"[^>]*>(.*?)</span>"#),
        ("div-name", r#"<div[^>]*class="[^"]*name[^"]*"[^>]*>(.*?)</div>"#),
        ("span-name", r#"<span[^>]*class="[^"]*name[^"]*"[^>]*>(.*?)</span>"#),
    ])
});

pub static PRICE_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    table(&[
        ("span-price", r#"<span[^>]*class="[^"]*price[^"]*"[^>]*>(.*?)</span>"#),
        ("div-price", r#"<div[^>]*class="[^"]*price[^"]*"[^>]*>(.*?)</div>"#),
        ("p-price", r#"<p[^>]*class="[^"]*price[^"]*"[^>]*>(.*?)</p>"#),
        ("dollar", r"\$\s*[0-9,]+\.?[0-9]*"),
        ("rupee", r"₹\s*[0-9,]+\.?[0-9]*"),
        ("euro", r"€\s*[0-9,]+\.?[0-9]*"),
        ("pound", r"£\s*[0-9,]+\.?[0-9]*"),
        ("usd-prefix", r"USD\s*[0-9,]+\.?[0-9]*"),
        ("inr-prefix", r"INR\s*[0-9,]+\.?[0-9]*"),
        ("price-label", r"Price:\s*([0-9,]+\.?[0-9]*)"),
        ("cost-label", r"Cost:\s*([0-9,]+\.?[0-9]*)"),
    ])
});

pub static RATING_MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    table(&[
        ("span-rating", r#"<span[^>]*class="[^"]*rating[^"]*"[^>]*>([0-9.]+)</span>"#),
        ("div-star", r#"<div[^>]*class="[^"]*star[^"]*"[^>]*>([0-9.]+)</div>"#),
        ("span-star", r#"<span[^>]*class="[^"]*star[^"]*"[^>]*>([0-9.]+)</span>"#),
        ("out-of", r"([0-9.]+)\s*out\s*of\s*[0-9]+"),
        ("slash", r"([0-9.]+)\s*/\s*[0-9]+"),
        ("rating-label", r"Rating:\s*([0-9.]+)"),
        ("star-glyph", r"★\s*([0-9.]+)"),
    ])
});

pub static URL_MATCHER: Lazy<Matcher> = Lazy::new(|| {
    Matcher::compile("href", r#"<a[^>]*href="([^"]*)""#)
});

/// Tries each matcher in order against `fragment` and returns the first value
/// that `select` accepts.
///
/// Only the first match of each pattern is considered; when `select` rejects
/// it, the search moves on to the next matcher rather than the next match.
pub fn first_match<T, F>(matchers: &[Matcher], fragment: &str, mut select: F) -> Option<T>
where
    F: FnMut(&Captures<'_>) -> Option<T>,
{
    matchers.iter().find_map(|matcher| {
        let caps = matcher.re.captures(fragment)?;
        let selected = select(&caps);
        if selected.is_some() {
            tracing::trace!("Matcher '{}' accepted", matcher.name);
        }
        selected
    })
}

/// The first capture group, if it participated in the match.
pub fn group_one<'t>(caps: &Captures<'t>) -> Option<&'t str> {
    caps.get(1).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(CONTAINER_MATCHERS.len(), 6);
        assert_eq!(NAME_MATCHERS.len(), 9);
        assert_eq!(PRICE_MATCHERS.len(), 11);
        assert_eq!(RATING_MATCHERS.len(), 7);
    }

    #[test]
    fn test_first_match_respects_priority() {
        let fragment = r#"<span class="name">Span Name Here</span><h3 class="title">Heading Title</h3>"#;
        let found = first_match(&NAME_MATCHERS, fragment, |caps| group_one(caps).map(str::to_string));
        assert_eq!(found.as_deref(), Some("Heading Title"));
    }

    #[test]
    fn test_first_match_skips_rejected_candidates() {
        let fragment = r#"<h3 class="title">Tiny</h3><a class="name" href="/x">Long enough name</a>"#;
        let found = first_match(&NAME_MATCHERS, fragment, |caps| {
            group_one(caps).filter(|s| s.len() > 5).map(str::to_string)
        });
        assert_eq!(found.as_deref(), Some("Long enough name"));
    }

    #[test]
    fn test_first_match_none_when_nothing_matches() {
        let found = first_match(&RATING_MATCHERS, "no digits here", |caps| group_one(caps).map(str::to_string));
        assert!(found.is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let caps = PRICE_MATCHERS[0].re.captures(r#"<SPAN CLASS="Price">$5</SPAN>"#);
        assert_eq!(caps.and_then(|c| group_one(&c).map(str::to_string)).as_deref(), Some("$5"));
    }

    #[test]
    fn test_url_matcher_takes_first_href() {
        let caps = URL_MATCHER.re.captures(r#"<a class="x" href="/first">a</a><a href="/second">b</a>"#);
        assert_eq!(caps.and_then(|c| group_one(&c).map(str::to_string)).as_deref(), Some("/first"));
    }
}
