// src/core/mod.rs

pub mod generator;
pub mod rules;
pub mod syllables;
pub mod types;
