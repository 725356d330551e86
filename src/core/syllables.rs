// File: src/core/syllables.rs
use crate::core::types::Syllable;

pub(crate) fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Splits a single word (no spaces) into heuristic syllables.
///
/// A syllable closes after the current char when it is a vowel followed by
/// a non-vowel, when the next char is the same char (doubled letter), or at
/// the end of the word. An input that yields nothing comes back whole.
/// Doubles are compared per `char`, so a repeated non-BMP char splits too.
pub fn segment(word: &str) -> Vec<Syllable> {
    let mut syllables = Vec::new();
    let mut current = String::new();
    let mut chars = word.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);

        let should_break = match chars.peek() {
            Some(&next) => (is_vowel(c) && !is_vowel(next)) || c == next,
            None => true,
        };

        if should_break && !current.is_empty() {
            syllables.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        syllables.push(current);
    }

    if syllables.is_empty() {
        syllables.push(word.to_string());
    }
    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vowel_before_consonant_closes_syllable() {
        assert_eq!(segment("namaskara"), vec!["na", "ma", "ska", "ra"]);
    }

    #[test]
    fn doubled_letter_splits_between_the_pair() {
        assert_eq!(segment("amma"), vec!["a", "m", "ma"]);
        assert_eq!(segment("neenu"), vec!["ne", "e", "nu"]);
    }

    #[test]
    fn doubled_letter_check_is_case_sensitive() {
        // 'a' then 'A' is neither a double nor a vowel/consonant boundary.
        assert_eq!(segment("kaAn"), vec!["kaA", "n"]);
    }

    #[test]
    fn vowel_runs_stay_together() {
        assert_eq!(segment("kai"), vec!["kai"]);
        assert_eq!(segment("aeiou"), vec!["aeiou"]);
    }

    #[test]
    fn consonant_cluster_is_one_syllable() {
        assert_eq!(segment("shm"), vec!["shm"]);
    }

    #[test]
    fn single_char_and_empty() {
        assert_eq!(segment("a"), vec!["a"]);
        assert_eq!(segment(""), vec![""]);
    }

    #[test]
    fn identical_chars_split_each() {
        assert_eq!(segment("mmm"), vec!["m", "m", "m"]);
    }

    #[test]
    fn doubled_astral_chars_split_per_char() {
        assert_eq!(segment("😀😀"), vec!["😀", "😀"]);
    }

    #[test]
    fn uppercase_vowels_count() {
        assert_eq!(segment("NAmU"), vec!["NA", "mU"]);
    }
}
