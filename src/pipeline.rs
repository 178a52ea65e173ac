// src/pipeline.rs
use std::path::{Path, PathBuf};

use console::style;
use rand::Rng;

use crate::catalog::models::Product;
use crate::catalog::sample::{generate_samples, FALLBACK_SAMPLE_COUNT};
use crate::extractors::matchers::{CONTAINER_MATCHERS, NAME_MATCHERS, PRICE_MATCHERS, RATING_MATCHERS};
use crate::extractors::{ExtractorConfig, ProductExtractor};
use crate::storage::{self, ProductWriter};
use crate::utils::{html_debug, AppError};

const PREVIEW_LIMIT: usize = 10;

/// Where the products come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    /// Extract from an HTML file on disk.
    ParseFile(PathBuf),
    /// Synthesize this many sample products.
    Generate(usize),
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    /// CSV destination; the JSON file is written next to it.
    pub output: PathBuf,
    /// Write an annotated copy of parsed documents next to the CSV.
    pub debug: bool,
    pub extractor: ExtractorConfig,
}

/// Runs one job end to end: obtain products, write CSV and JSON, print a preview.
///
/// Returns the products that were written. An unreadable or empty input file
/// is logged and produces an empty result without writing anything.
pub fn process<R: Rng>(job: &Job, options: &RunOptions, rng: &mut R) -> Result<Vec<Product>, AppError> {
    let products = match job {
        Job::ParseFile(input) => {
            let html = match storage::load_html(input) {
                Ok(html) => html,
                Err(e) => {
                    tracing::error!("Error: {}", e);
                    return Ok(Vec::new());
                }
            };
            if html.is_empty() {
                tracing::warn!("{} is empty, nothing to extract", input.display());
                return Ok(Vec::new());
            }

            if options.debug {
                write_annotated_copy(&html, &options.output);
            }

            let extractor = ProductExtractor::new(options.extractor.clone());
            let products = extractor.extract_products(&html);
            if products.is_empty() {
                tracing::warn!("No products found in HTML file. The file might not contain recognizable e-commerce patterns.");
                tracing::info!("Generating sample data instead...");
                generate_samples(FALLBACK_SAMPLE_COUNT, rng)
            } else {
                products
            }
        }
        Job::Generate(count) => {
            let products = generate_samples(*count, rng);
            tracing::info!("Generated {} sample products.", products.len());
            products
        }
    };

    if products.is_empty() {
        return Ok(products);
    }

    let writer = ProductWriter::new(&options.output)?;
    match writer.save_csv(&products) {
        Ok(path) => tracing::debug!("CSV written: {}", path.display()),
        Err(e) => tracing::error!("Could not create CSV file {}: {}", writer.csv_path().display(), e),
    }
    match writer.save_json(&products) {
        Ok(path) => tracing::debug!("JSON written: {}", path.display()),
        Err(e) => tracing::error!("Could not create JSON file {}: {}", writer.json_path().display(), e),
    }

    println!("{}", render_preview(&products));
    Ok(products)
}

/// Path of the annotated debug copy for a given CSV output.
pub fn annotated_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "products".to_string());
    output.with_file_name(format!("{}_annotated.html", stem))
}

fn write_annotated_copy(html: &str, output: &Path) {
    let path = annotated_path(output);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            tracing::warn!("Failed to create debug directory {}: {}", parent.display(), e);
            return;
        }
    }

    let groups = [
        ("container", &CONTAINER_MATCHERS[..]),
        ("name", &NAME_MATCHERS[..]),
        ("price", &PRICE_MATCHERS[..]),
        ("rating", &RATING_MATCHERS[..]),
    ];
    if let Err(e) = html_debug::create_debug_html(html, &path, &groups) {
        tracing::warn!("Failed to create debug HTML: {}", e);
    } else {
        tracing::info!("Created annotated debug HTML: {}", path.display());
    }
}

/// Human-readable listing of the first few products.
pub fn render_preview(products: &[Product]) -> String {
    let rule = "=".repeat(80);
    let mut out = format!("\n{}\n{}\n{}\n", rule, style("EXTRACTED PRODUCTS PREVIEW:").bold(), rule);

    for (i, product) in products.iter().take(PREVIEW_LIMIT).enumerate() {
        out.push_str(&format!("\nProduct #{}:\n", i + 1));
        out.push_str(&format!("  Name: {}\n", product.name));
        out.push_str(&format!("  Price: {}\n", product.price));
        out.push_str(&format!("  Rating: {}\n", product.rating));
        out.push_str(&format!("  URL: {}\n", product.url));
    }

    if products.len() > PREVIEW_LIMIT {
        out.push_str(&format!("\n... and {} more products.\n", products.len() - PREVIEW_LIMIT));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixture::write_fixture;
    use crate::catalog::sample::seeded_rng;

    fn options(output: PathBuf) -> RunOptions {
        RunOptions { output, debug: false, extractor: ExtractorConfig::default() }
    }

    #[test]
    fn test_parse_fixture_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.html");
        write_fixture(&input).unwrap();

        let output = dir.path().join("products.csv");
        let products = process(&Job::ParseFile(input), &options(output.clone()), &mut seeded_rng(Some(3))).unwrap();

        assert_eq!(products.len(), 5);
        assert_eq!(products[4].name, "Dell XPS 13 Laptop");
        let csv = std::fs::read_to_string(&output).unwrap();
        assert_eq!(csv.lines().count(), 6);
        assert!(csv.contains("Samsung Galaxy S23 Ultra,$1199.99,4.4,/galaxy-s23"));
        assert!(dir.path().join("products.json").exists());
    }

    #[test]
    fn test_unrecognized_document_falls_back_to_samples() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("plain.html");
        std::fs::write(&input, "<html><body><p>Closed for the holidays</p></body></html>").unwrap();

        let output = dir.path().join("out.csv");
        let products = process(&Job::ParseFile(input), &options(output.clone()), &mut seeded_rng(Some(3))).unwrap();

        assert_eq!(products.len(), FALLBACK_SAMPLE_COUNT);
        assert!(products[0].url.starts_with("https://example-store.com/product/"));
        assert!(output.exists());
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.csv");
        let job = Job::ParseFile(dir.path().join("absent.html"));

        let products = process(&job, &options(output.clone()), &mut seeded_rng(Some(3))).unwrap();
        assert!(products.is_empty());
        assert!(!output.exists());
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.html");
        std::fs::write(&input, "").unwrap();
        let output = dir.path().join("out.csv");

        let products = process(&Job::ParseFile(input), &options(output.clone()), &mut seeded_rng(Some(3))).unwrap();
        assert!(products.is_empty());
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_job() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("gen.csv");
        let products = process(&Job::Generate(25), &options(output.clone()), &mut seeded_rng(Some(11))).unwrap();
        assert_eq!(products.len(), 20);
        assert_eq!(std::fs::read_to_string(output).unwrap().lines().count(), 21);
    }

    #[test]
    fn test_debug_writes_annotated_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("sample.html");
        write_fixture(&input).unwrap();
        let output = dir.path().join("run").join("items.csv");

        let mut opts = options(output.clone());
        opts.debug = true;
        process(&Job::ParseFile(input), &opts, &mut seeded_rng(Some(3))).unwrap();

        assert!(dir.path().join("run").join("items_annotated.html").exists());
    }

    #[test]
    fn test_preview_truncates_after_ten() {
        let products = generate_samples(20, &mut seeded_rng(Some(5)));
        let preview = render_preview(&products);
        assert!(preview.contains("Product #10:"));
        assert!(!preview.contains("Product #11:"));
        assert!(preview.contains("... and 10 more products."));

        let short = render_preview(&products[..3]);
        assert!(!short.contains("more products"));
    }

    #[test]
    fn test_annotated_path() {
        assert_eq!(annotated_path(Path::new("out/products.csv")), PathBuf::from("out/products_annotated.html"));
    }
}
