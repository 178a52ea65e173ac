// src/catalog/fixture.rs
use std::fs;
use std::path::Path;

use crate::utils::error::StorageError;

pub const DEFAULT_FIXTURE_PATH: &str = "sample.html";

/// Five-product storefront page used to try the extractor end to end.
pub const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Sample E-commerce Page</title>
</head>
<body>
    <div class="product-grid">
        <div class="product-card">
            <h2 class="product-title">iPhone 14 Pro Max 128GB</h2>
            <span class="price">$1099.00</span>
            <span class="rating">4.5</span>
            <a href="/iphone-14-pro">View Product</a>
        </div>

        <div class="product-card">
            <h2 class="product-title">Samsung Galaxy S23 Ultra</h2>
            <span class="price">$1199.99</span>
            <span class="rating">4.4</span>
            <a href="/galaxy-s23">View Product</a>
        </div>

        <div class="product-card">
            <h2 class="product-title">MacBook Air M2 13-inch</h2>
            <span class="price">$1199.00</span>
            <span class="rating">4.7</span>
            <a href="/macbook-air">View Product</a>
        </div>

        <div class="product-card">
            <h2 class="product-title">Sony WH-1000XM4 Headphones</h2>
            <span class="price">$349.99</span>
            <span class="rating">4.6</span>
            <a href="/sony-headphones">View Product</a>
        </div>

        <div class="product-card">
            <h2 class="product-title">Dell XPS 13 Laptop</h2>
            <span class="price">$999.99</span>
            <span class="rating">4.3</span>
            <a href="/dell-xps13">View Product</a>
        </div>
    </div>
</body>
</html>"#;

/// Writes the sample page to `path`, replacing any existing file.
pub fn write_fixture<P: AsRef<Path>>(path: P) -> Result<(), StorageError> {
    let path = path.as_ref();
    fs::write(path, SAMPLE_HTML).map_err(StorageError::IoError)?;
    tracing::info!("Sample HTML file created: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fixture_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fixture.html");
        write_fixture(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE_HTML);
    }

    #[test]
    fn test_write_fixture_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("fixture.html");
        assert!(matches!(write_fixture(&path), Err(StorageError::IoError(_))));
    }
}
