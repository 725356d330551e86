// File: src/core/rules.rs

/// Ordered transliteration -> pronunciation substitutions.
/// Longer vowel digraphs come first so they win over partial overlaps.
/// The aspirated consonants map to themselves and are kept so new
/// spellings can be slotted in without touching the pipeline.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("aa", "ah"),
    ("ee", "ee"),
    ("oo", "oo"),
    ("ai", "ay"),
    ("au", "ow"),
    ("kh", "kh"),
    ("ch", "ch"),
    ("sh", "sh"),
    ("th", "th"),
    ("dh", "dh"),
    ("ph", "ph"),
    ("bh", "bh"),
    ("gh", "gh"),
];

/// Applies every rule of `SUBSTITUTIONS` in order.
pub fn apply_substitutions(syllable: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(syllable.to_string(), |acc, (from, to)| {
            replace_ignore_ascii_case(&acc, from, to)
        })
}

/// Replaces every non-overlapping occurrence of `pattern`, scanning left to
/// right and comparing ASCII letters without regard to case.
pub fn replace_ignore_ascii_case(haystack: &str, pattern: &str, replacement: &str) -> String {
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return haystack.to_string();
    }

    let chars: Vec<char> = haystack.chars().collect();
    let mut result = String::with_capacity(haystack.len());
    let mut i = 0;

    while i < chars.len() {
        let matches_here = chars.len() - i >= pattern.len()
            && chars[i..i + pattern.len()]
                .iter()
                .zip(&pattern)
                .all(|(a, b)| a.eq_ignore_ascii_case(b));

        if matches_here {
            result.push_str(replacement);
            i += pattern.len();
        } else {
            result.push(chars[i]);
            i += 1;
        }
    }
    result
}
