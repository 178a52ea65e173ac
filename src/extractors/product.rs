// src/extractors/product.rs

// --- Imports ---
use crate::catalog::models::Product;
use crate::extractors::matchers::{
    first_match, group_one, CONTAINER_MATCHERS, NAME_MATCHERS, PRICE_MATCHERS, RATING_MATCHERS,
    URL_MATCHER,
};
use crate::extractors::text::clean_text;

// --- Constants ---
pub const DEFAULT_MAX_PRODUCTS: usize = 100;
pub const DEFAULT_EARLY_EXIT_THRESHOLD: usize = 10;
const MIN_NAME_CHARS: usize = 5; // exclusive
const MAX_NAME_CHARS: usize = 200; // exclusive

/// Tuning knobs for the extraction cascade.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Hard cap on products collected across all container patterns.
    pub max_products: usize,
    /// Once a finished container pattern leaves at least this many products,
    /// later container patterns are not tried.
    pub early_exit_threshold: usize,
    pub min_name_chars: usize,
    pub max_name_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_products: DEFAULT_MAX_PRODUCTS,
            early_exit_threshold: DEFAULT_EARLY_EXIT_THRESHOLD,
            min_name_chars: MIN_NAME_CHARS,
            max_name_chars: MAX_NAME_CHARS,
        }
    }
}

// --- Main Extractor Structure ---
pub struct ProductExtractor {
    config: ExtractorConfig,
}

impl ProductExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extracts product listings from a whole HTML document.
    ///
    /// Never fails: a document without recognizable containers yields an
    /// empty list.
    pub fn extract_products(&self, html: &str) -> Vec<Product> {
        let mut products = Vec::new();
        tracing::info!("Analyzing HTML content ({} bytes)...", html.len());

        for (index, container) in CONTAINER_MATCHERS.iter().enumerate() {
            let mut found_with_pattern = 0;

            for caps in container.re.captures_iter(html) {
                if products.len() >= self.config.max_products {
                    break;
                }

                let fragment = group_one(&caps).unwrap_or_default();
                let product = self.extract_from_fragment(fragment);

                if product.is_retainable() {
                    products.push(product);
                    found_with_pattern += 1;
                }
            }

            tracing::info!(
                "Pattern {} ({}) found {} products.",
                index + 1,
                container.name,
                found_with_pattern
            );

            if products.len() >= self.config.early_exit_threshold {
                tracing::debug!(
                    "Reached {} products, skipping remaining container patterns",
                    products.len()
                );
                break;
            }
        }

        products
    }

    /// Builds a candidate product from one container fragment. The caller
    /// decides whether it is worth keeping.
    pub fn extract_from_fragment(&self, fragment: &str) -> Product {
        let mut product = Product::default();

        if let Some(name) = self.extract_name(fragment) {
            product.name = name;
        }
        if let Some(price) = extract_price(fragment) {
            product.price = price;
        }
        if let Some(rating) = extract_rating(fragment) {
            product.rating = rating;
        }
        if let Some(url) = URL_MATCHER.re.captures(fragment).and_then(|caps| group_one(&caps).map(str::to_string)) {
            product.url = url;
        }

        product
    }

    fn extract_name(&self, fragment: &str) -> Option<String> {
        first_match(&NAME_MATCHERS, fragment, |caps| {
            let candidate = clean_text(group_one(caps)?);
            let chars = candidate.chars().count();
            (chars > self.config.min_name_chars && chars < self.config.max_name_chars).then_some(candidate)
        })
    }
}

fn extract_price(fragment: &str) -> Option<String> {
    first_match(&PRICE_MATCHERS, fragment, |caps| {
        // Prefer the captured amount, fall back to the whole match (currency included)
        let raw = group_one(caps)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| caps.get(0).map_or("", |m| m.as_str()));
        let price = clean_text(raw);
        (!price.is_empty()).then_some(price)
    })
}

fn extract_rating(fragment: &str) -> Option<String> {
    first_match(&RATING_MATCHERS, fragment, |caps| {
        group_one(caps)
            .filter(|s| !s.is_empty())
            .map(clean_text)
    })
}
