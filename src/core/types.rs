// src/core/types.rs
use serde::{Deserialize, Serialize};

/// A single syllable produced by segmentation, before any transformation.
pub type Syllable = String;

/// One word or phrase of the vocabulary dataset.
/// This is the "row" of the data file the batch tool rewrites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub kannada: String,
    /// Latin-script rendering, e.g. "namaskara". Input to the generator.
    pub transliteration: String,
    /// Hyphen-separated guide, e.g. "NA-MA-ska-ra".
    /// `None` when the data file literal has no pronunciation field.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pronunciation: Option<String>,
    pub english: String,
    pub category: String,
}

impl VocabularyEntry {
    pub fn needs_pronunciation(&self) -> bool {
        self.pronunciation.is_none()
    }
}
