// src/catalog/sample.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::models::Product;

pub const DEFAULT_SAMPLE_COUNT: usize = 20;
/// Products substituted when a parsed document yields nothing.
pub const FALLBACK_SAMPLE_COUNT: usize = 10;

const SAMPLE_URL_BASE: &str = "https://example-store.com/product";

const SAMPLE_NAMES: [&str; 20] = [
    "iPhone 14 Pro Max 128GB Space Black",
    "Samsung Galaxy S23 Ultra 256GB Phantom Black",
    "MacBook Air M2 13-inch Silver",
    "Sony WH-1000XM4 Wireless Headphones",
    "Dell XPS 13 Laptop Intel i7 16GB RAM",
    "iPad Air 5th Generation 64GB WiFi",
    "Nintendo Switch OLED White",
    "Apple AirPods Pro 2nd Generation",
    "Amazon Kindle Paperwhite 11th Gen",
    "Echo Dot 5th Gen with Alexa",
    "Samsung 55-inch 4K Smart TV",
    "HP LaserJet Pro Printer",
    "Logitech MX Master 3S Wireless Mouse",
    "JBL Flip 6 Bluetooth Speaker",
    "Canon EOS R6 Mark II Camera Body",
    "Microsoft Surface Pro 9 Tablet",
    "Google Nest Hub Max Smart Display",
    "Fitbit Charge 5 Fitness Tracker",
    "Bose QuietComfort 45 Headphones",
    "LG UltraWide 34-inch Monitor",
];

const SAMPLE_PRICES: [&str; 20] = [
    "$1099.00", "$1199.99", "$1199.00", "$349.99", "$999.99",
    "$599.00", "$349.99", "$249.00", "$139.99", "$49.99",
    "$799.99", "$229.99", "$99.99", "$129.99", "$2499.00",
    "$1099.99", "$229.99", "$149.95", "$329.00", "$499.99",
];

/// Builds the generator's random source. Without an explicit seed the
/// current wall-clock time is used, so runs are not reproducible.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| {
        let now = chrono::Utc::now();
        now.timestamp_nanos_opt()
            .map(|nanos| nanos as u64)
            .unwrap_or_else(|| now.timestamp() as u64)
    });
    tracing::debug!("Seeding sample generator with {}", seed);
    StdRng::seed_from_u64(seed)
}

/// Produces up to `count` synthetic products (at most one per table entry).
/// Ratings are drawn uniformly from 3.0..=5.0 in steps of 0.1.
pub fn generate_samples<R: Rng>(count: usize, rng: &mut R) -> Vec<Product> {
    SAMPLE_NAMES
        .iter()
        .zip(SAMPLE_PRICES.iter())
        .take(count)
        .enumerate()
        .map(|(i, (name, price))| {
            let tenths: u32 = 30 + rng.gen_range(0..=20);
            Product::new(
                *name,
                *price,
                format!("{}.{}", tenths / 10, tenths % 10),
                format!("{}/{}", SAMPLE_URL_BASE, i + 1),
            )
        })
        .collect()
}
