//! Pronunciation generator behaviour over whole words and phrases.

use pronounce_core::{generate_pronunciation, GeneratorOptions, PronunciationGenerator};

#[test]
fn test_common_vocabulary() {
    assert_eq!(generate_pronunciation("ka"), "KA");
    assert_eq!(generate_pronunciation("namaskara"), "NA-MA-ska-ra");
    assert_eq!(generate_pronunciation("dhanyavadagalu"), "DHA-NYA-va-da-ga-lu");
    assert_eq!(generate_pronunciation("hegiddeera"), "HE-GI-d-de-e-ra");
}

#[test]
fn test_doubled_letters_force_a_boundary() {
    assert_eq!(generate_pronunciation("amma"), "A-M-ma");
    assert_eq!(generate_pronunciation("appa"), "A-P-pa");
    assert_eq!(generate_pronunciation("aaa"), "A-A-a");
}

#[test]
fn test_vowel_digraphs() {
    assert_eq!(generate_pronunciation("kai"), "KAY");
    assert_eq!(generate_pronunciation("gau"), "GOW");
    // "aa" is only kept inside one syllable when the case differs.
    assert_eq!(generate_pronunciation("kaAl"), "KAH-l");
    assert_eq!(generate_pronunciation("khaana"), "KHA-A-na");
}

#[test]
fn test_degenerate_inputs() {
    assert_eq!(generate_pronunciation(""), "");
    assert_eq!(generate_pronunciation("  "), "");
    assert_eq!(generate_pronunciation("a"), "A");
    assert_eq!(generate_pronunciation("z"), "Z");
    assert_eq!(generate_pronunciation("shm"), "SHM");
    assert_eq!(generate_pronunciation("ನಮ"), "ನಮ");
}

#[test]
fn test_phrase_is_join_of_words() {
    assert_eq!(
        generate_pronunciation("nanu neenu"),
        format!("{}-{}", generate_pronunciation("nanu"), generate_pronunciation("neenu"))
    );
    assert_eq!(generate_pronunciation("nanu neenu"), "NA-nu-NE-E-nu");

    for phrase in ["oota aayitha", "ninna hesaru enu", "shubha dina"] {
        let expected: Vec<String> = phrase.split(' ').map(generate_pronunciation).collect();
        assert_eq!(generate_pronunciation(phrase), expected.join("-"), "phrase {:?}", phrase);
    }
}

#[test]
fn test_output_uses_only_letters_and_hyphens() {
    for word in ["namaskara", "amma", "kai", "nanu neenu", "dhanyavadagalu"] {
        let guide = generate_pronunciation(word);
        assert!(!guide.is_empty());
        assert!(guide.chars().all(|c| c.is_ascii_alphabetic() || c == '-'), "{}", guide);
        assert!(guide.split('-').next().is_some_and(|s| s == s.to_uppercase()));
    }
}

#[test]
fn test_generator_is_shareable_across_threads() {
    let generator = std::sync::Arc::new(PronunciationGenerator::with_options(GeneratorOptions {
        word_separator: " | ".to_string(),
    }));
    let handles: Vec<_> = ["nanu neenu", "amma appa"]
        .into_iter()
        .map(|phrase| {
            let generator = generator.clone();
            std::thread::spawn(move || generator.generate(phrase))
        })
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!["NA-nu | NE-E-nu", "A-M-ma | A-P-pa"]);
}
