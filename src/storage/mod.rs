// src/storage/mod.rs
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::catalog::models::{Product, ProductListing};
use crate::utils::error::StorageError;

pub const DEFAULT_OUTPUT_PATH: &str = "products.csv";
const CSV_HEADER: &str = "Product Name,Price,Rating,URL";

/// Reads an HTML document into memory, one `\n` after every line.
/// Carriage returns are kept as read.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_html<P: AsRef<Path>>(path: P) -> Result<String, StorageError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StorageError::FileNotFound(path.display().to_string()),
        _ => StorageError::IoError(e),
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let mut html = String::with_capacity(text.len() + 1);
    for line in text.split_terminator('\n') {
        html.push_str(line);
        html.push('\n');
    }

    tracing::info!("Loaded {} characters from {}", html.chars().count(), path.display());
    Ok(html)
}

/// Quotes a CSV field when it contains a comma, quote or newline,
/// doubling any embedded quotes.
pub fn escape_csv_field(value: &str) -> String {
    if value.contains(&[',', '"', '\n'][..]) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Appends `.csv` unless the path already carries that extension.
pub fn normalize_csv_path(raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    let has_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if has_csv {
        path
    } else {
        PathBuf::from(format!("{}.csv", raw))
    }
}

/// The JSON file written next to a CSV: same stem, `.json` extension.
pub fn json_sibling_path(csv_path: &Path) -> PathBuf {
    csv_path.with_extension("json")
}

/// Writes a product list as CSV plus a sibling JSON file.
pub struct ProductWriter {
    csv_path: PathBuf,
    json_path: PathBuf,
}

impl ProductWriter {
    /// Creates a writer for `csv_path`, creating its parent directory if needed.
    pub fn new<P: AsRef<Path>>(csv_path: P) -> Result<Self, StorageError> {
        let csv_path = csv_path.as_ref().to_path_buf();

        if let Some(parent) = csv_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(StorageError::IoError)?;
            }
        }

        let json_path = json_sibling_path(&csv_path);
        Ok(Self { csv_path, json_path })
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    pub fn save_csv(&self, products: &[Product]) -> Result<PathBuf, StorageError> {
        let file = fs::File::create(&self.csv_path).map_err(StorageError::IoError)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{}", CSV_HEADER)?;
        for product in products {
            let row = [&product.name, &product.price, &product.rating, &product.url]
                .iter()
                .map(|field| escape_csv_field(field))
                .collect::<Vec<_>>()
                .join(",");
            writeln!(out, "{}", row)?;
        }
        out.flush()?;

        tracing::info!("Successfully saved {} products to {}", products.len(), self.csv_path.display());
        Ok(self.csv_path.clone())
    }

    pub fn save_json(&self, products: &[Product]) -> Result<PathBuf, StorageError> {
        let listing = ProductListing { products };
        let mut json = serde_json::to_string_pretty(&listing)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        json.push('\n');

        fs::write(&self.json_path, json).map_err(StorageError::IoError)?;

        tracing::info!("Successfully saved {} products to {}", products.len(), self.json_path.display());
        Ok(self.json_path.clone())
    }
}
