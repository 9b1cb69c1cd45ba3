// src/core/mod.rs
pub mod classifier;
pub mod dictionary;
pub mod engine;
pub mod mappings;
pub mod types;
