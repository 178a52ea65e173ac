// src/catalog/models.rs
use serde::Serialize;

/// One scraped or synthesized listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub name: String,
    pub price: String,
    pub rating: String,
    pub url: String,
    #[serde(skip)]
    pub description: String, // Never filled by any producer yet
}

impl Default for Product {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            rating: "0.0".to_string(),
            url: String::new(),
            description: String::new(),
        }
    }
}

impl Product {
    pub fn new(name: impl Into<String>, price: impl Into<String>, rating: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            rating: rating.into(),
            url: url.into(),
            description: String::new(),
        }
    }

    /// A product is kept only with a name and at least a price or a rating.
    pub fn is_retainable(&self) -> bool {
        !self.name.is_empty() && (!self.price.is_empty() || !self.rating.is_empty())
    }
}

/// Top-level shape of the JSON output file.
#[derive(Debug, Serialize)]
pub struct ProductListing<'a> {
    pub products: &'a [Product],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rating() {
        assert_eq!(Product::default().rating, "0.0");
    }

    #[test]
    fn test_retention_rules() {
        assert!(Product::new("Widget Pro", "$5", "", "").is_retainable());
        assert!(Product::new("Widget Pro", "", "4.1", "").is_retainable());
        assert!(!Product::new("Widget Pro", "", "", "/w").is_retainable());
        assert!(!Product::new("", "$5", "4.1", "/w").is_retainable());
    }

    #[test]
    fn test_serializes_in_fixed_key_order_without_description() {
        let mut product = Product::new("A \"quoted\" name", "$1", "4.0", "/a");
        product.description = "ignored".to_string();
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"name":"A \"quoted\" name","price":"$1","rating":"4.0","url":"/a"}"#);
    }
}
