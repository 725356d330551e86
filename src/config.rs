// File: src/config.rs
use crate::core::generator::{GeneratorOptions, DEFAULT_WORD_SEPARATOR};
use crate::error::{PronounceError, PronounceResult};
use crate::validation::ValidationRules;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "kn_pronounce.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PronounceConfig {
    /// Vocabulary data file used when a command is given no path.
    pub data_file: Option<PathBuf>,
    /// Separator between the words of a phrase.
    pub word_separator: String,
    /// English translations must be shorter than this.
    pub max_english_len: usize,
    /// Allowed categories. Empty accepts any.
    pub categories: Vec<String>,
    /// Categories that may have no entries.
    pub coverage_exempt: Vec<String>,
    pub min_distinct_categories: usize,
}

impl Default for PronounceConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            word_separator: DEFAULT_WORD_SEPARATOR.to_string(),
            max_english_len: 100,
            categories: Vec::new(),
            coverage_exempt: ValidationRules::default().coverage_exempt,
            min_distinct_categories: 0,
        }
    }
}

impl PronounceConfig {
    /// Loads the config at `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> PronounceResult<Self> {
        if !path.exists() {
            tracing::info!("Config file not found, using defaults: {:?}", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content).map_err(|reason| PronounceError::ConfigParse {
            path: path.display().to_string(),
            reason,
        })?;

        tracing::info!("Loaded config: {:?}", path);
        tracing::debug!(
            "word_separator={:?}, max_english_len={}, categories={}",
            config.word_separator,
            config.max_english_len,
            config.categories.len()
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    pub fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions { word_separator: self.word_separator.clone() }
    }

    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            max_english_len: self.max_english_len,
            categories: self.categories.clone(),
            coverage_exempt: self.coverage_exempt.clone(),
            min_distinct_categories: self.min_distinct_categories,
        }
    }
}
