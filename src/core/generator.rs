use crate::core::rules::apply_substitutions;
use crate::core::syllables::segment;

pub const DEFAULT_WORD_SEPARATOR: &str = "-";
const SYLLABLE_SEPARATOR: char = '-';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Placed between the guides of each word in a phrase.
    ///
    /// Defaults to "-", the same as the syllable separator, so a reader of
    /// "NA-nu-NE-E-nu" cannot tell where "nanu" ends and "neenu" starts.
    pub word_separator: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self { word_separator: DEFAULT_WORD_SEPARATOR.to_string() }
    }
}

/// A stateless transliteration to pronunciation-guide converter.
#[derive(Debug, Clone, Default)]
pub struct PronunciationGenerator {
    options: GeneratorOptions,
}

impl PronunciationGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Converts a transliteration such as "namaskara" into "NA-MA-ska-ra".
    ///
    /// Empty and whitespace-only input gives an empty string. Phrases are
    /// split on every single space and each token is converted on its own.
    /// Trimming uses the ECMAScript whitespace set: U+FEFF is stripped,
    /// U+0085 is not.
    pub fn generate(&self, transliteration: &str) -> String {
        let cleaned = transliteration.trim_matches(is_trimmed_whitespace);
        if cleaned.is_empty() {
            return String::new();
        }

        if cleaned.contains(' ') {
            return cleaned
                .split(' ')
                .map(|word| self.generate(word))
                .collect::<Vec<_>>()
                .join(&self.options.word_separator);
        }

        self.generate_word(cleaned)
    }

    fn generate_word(&self, word: &str) -> String {
        let syllables = segment(word);
        let stress_second = syllables.len() > 2;

        let mut result = String::with_capacity(word.len() * 2);
        for (index, syllable) in syllables.iter().enumerate() {
            if index > 0 {
                result.push(SYLLABLE_SEPARATOR);
            }
            let transformed = apply_substitutions(syllable);
            if index == 0 || (stress_second && index == 1) {
                result.push_str(&transformed.to_uppercase());
            } else {
                result.push_str(&transformed.to_lowercase());
            }
        }
        result
    }
}

fn is_trimmed_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Converts with the default options.
pub fn generate_pronunciation(transliteration: &str) -> String {
    PronunciationGenerator::new().generate(transliteration)
}
