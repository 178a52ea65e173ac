// src/catalog/mod.rs
pub mod fixture;
pub mod models;
pub mod sample;
