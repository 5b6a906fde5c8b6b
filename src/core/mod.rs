// File: src/core/mod.rs
pub mod engine;
pub mod frequency;
pub mod mapping;
pub mod types;
