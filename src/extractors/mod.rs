// src/extractors/mod.rs
pub mod matchers;
pub mod product;
pub mod text;

// Re-export key extraction types for convenience
pub use product::{ExtractorConfig, ProductExtractor};
