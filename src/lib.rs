// src/lib.rs

pub mod config;
pub mod core;
pub mod data_file;
pub mod error;
pub mod persistence;
pub mod validation;

pub use crate::core::generator::{generate_pronunciation, GeneratorOptions, PronunciationGenerator};
pub use crate::core::types::VocabularyEntry;
pub use crate::error::{PronounceError, PronounceResult};
