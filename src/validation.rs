// File: src/validation.rs
use crate::core::types::VocabularyEntry;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// English translations must be strictly shorter than this.
    pub max_english_len: usize,
    /// Allowed categories. Empty accepts any and skips coverage checks.
    pub categories: Vec<String>,
    /// Categories allowed to have no entries ("all" is a UI filter,
    /// "introductions" only holds phrases).
    pub coverage_exempt: Vec<String>,
    /// Minimum number of distinct categories in use. 0 disables the check.
    pub min_distinct_categories: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            max_english_len: 100,
            categories: Vec::new(),
            coverage_exempt: vec!["all".to_string(), "introductions".to_string()],
            min_distinct_categories: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    EmptyField(&'static str),
    /// Same Kannada word as the entry at this index.
    DuplicateKannada { first_index: usize },
    EnglishTooLong { len: usize },
    UnknownCategory(String),
    MalformedPronunciation(String),
    /// A configured category that no entry uses.
    CategoryWithoutEntries(String),
    TooFewCategories { found: usize, required: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// `None` for problems with the dataset as a whole.
    pub index: Option<usize>,
    pub kind: IssueKind,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "entry {}: ", index)?,
            None => f.write_str("dataset: ")?,
        }
        match &self.kind {
            IssueKind::EmptyField(field) => write!(f, "empty {} field", field),
            IssueKind::DuplicateKannada { first_index } => {
                write!(f, "duplicate kannada word (first seen at entry {})", first_index)
            }
            IssueKind::EnglishTooLong { len } => write!(f, "english translation too long ({} chars)", len),
            IssueKind::UnknownCategory(category) => write!(f, "invalid category: {}", category),
            IssueKind::MalformedPronunciation(p) => write!(f, "malformed pronunciation: {:?}", p),
            IssueKind::CategoryWithoutEntries(category) => {
                write!(f, "category {:?} has no entries", category)
            }
            IssueKind::TooFewCategories { found, required } => {
                write!(f, "only {} distinct categories, need at least {}", found, required)
            }
        }
    }
}

/// A pronunciation guide is non-blank and made only of ASCII letters and hyphens.
pub fn is_well_formed_pronunciation(pronunciation: &str) -> bool {
    !pronunciation.trim().is_empty()
        && pronunciation.chars().all(|c| c.is_ascii_alphabetic() || c == '-')
}

/// Checks every entry, then the dataset as a whole. Per-entry problems come
/// first, in entry order.
pub fn validate<'a, I>(entries: I, rules: &ValidationRules) -> Vec<ValidationIssue>
where
    I: IntoIterator<Item = &'a VocabularyEntry>,
{
    let mut issues = Vec::new();
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut used_categories: HashSet<&str> = HashSet::new();

    for (index, entry) in entries.into_iter().enumerate() {
        let mut report = |kind| issues.push(ValidationIssue { index: Some(index), kind });

        for (name, value) in [
            ("kannada", &entry.kannada),
            ("transliteration", &entry.transliteration),
            ("english", &entry.english),
            ("category", &entry.category),
        ] {
            if value.trim().is_empty() {
                report(IssueKind::EmptyField(name));
            }
        }

        if let Some(&first_index) = first_seen.get(entry.kannada.as_str()) {
            report(IssueKind::DuplicateKannada { first_index });
        } else {
            first_seen.insert(entry.kannada.as_str(), index);
        }

        let len = entry.english.chars().count();
        if len >= rules.max_english_len {
            report(IssueKind::EnglishTooLong { len });
        }

        if !entry.category.trim().is_empty() {
            used_categories.insert(entry.category.as_str());
        }
        if !rules.categories.is_empty() && !rules.categories.iter().any(|c| *c == entry.category) {
            report(IssueKind::UnknownCategory(entry.category.clone()));
        }

        if let Some(pronunciation) = &entry.pronunciation {
            if !is_well_formed_pronunciation(pronunciation) {
                report(IssueKind::MalformedPronunciation(pronunciation.clone()));
            }
        }
    }

    let mut report = |kind| issues.push(ValidationIssue { index: None, kind });
    for category in &rules.categories {
        if !rules.coverage_exempt.contains(category) && !used_categories.contains(category.as_str()) {
            report(IssueKind::CategoryWithoutEntries(category.clone()));
        }
    }
    if used_categories.len() < rules.min_distinct_categories {
        report(IssueKind::TooFewCategories {
            found: used_categories.len(),
            required: rules.min_distinct_categories,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kannada: &str, english: &str, category: &str, pronunciation: Option<&str>) -> VocabularyEntry {
        VocabularyEntry {
            kannada: kannada.to_string(),
            transliteration: "nanu".to_string(),
            pronunciation: pronunciation.map(str::to_string),
            english: english.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn clean_entries_pass() {
        let entries = vec![
            entry("ನಾನು", "I", "pronouns", Some("NA-nu")),
            entry("ನೀನು", "You", "pronouns", None),
        ];
        assert!(validate(&entries, &ValidationRules::default()).is_empty());
    }

    #[test]
    fn duplicates_point_at_first_occurrence() {
        let entries = vec![
            entry("ನಾನು", "I", "pronouns", None),
            entry("ನೀನು", "You", "pronouns", None),
            entry("ನಾನು", "Me", "pronouns", None),
        ];
        let issues = validate(&entries, &ValidationRules::default());
        assert_eq!(
            issues,
            vec![ValidationIssue { index: Some(2), kind: IssueKind::DuplicateKannada { first_index: 0 } }]
        );
    }

    #[test]
    fn each_rule_is_reported() {
        let rules = ValidationRules {
            max_english_len: 5,
            categories: vec!["numbers".to_string()],
            ..ValidationRules::default()
        };
        let entries = vec![entry(" ", "Seventy", "colors", Some("ONE two"))];
        let kinds: Vec<_> = validate(&entries, &rules).into_iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::EmptyField("kannada"),
                IssueKind::EnglishTooLong { len: 7 },
                IssueKind::UnknownCategory("colors".to_string()),
                IssueKind::MalformedPronunciation("ONE two".to_string()),
                IssueKind::CategoryWithoutEntries("numbers".to_string()),
            ]
        );
    }

    #[test]
    fn configured_categories_need_entries_except_exempt_ones() {
        let rules = ValidationRules {
            categories: ["all", "introductions", "pronouns", "numbers"].map(String::from).to_vec(),
            ..ValidationRules::default()
        };
        let entries = vec![entry("ನಾನು", "I", "pronouns", None)];
        let issues = validate(&entries, &rules);
        assert_eq!(
            issues,
            vec![ValidationIssue { index: None, kind: IssueKind::CategoryWithoutEntries("numbers".to_string()) }]
        );
        assert_eq!(issues[0].to_string(), "dataset: category \"numbers\" has no entries");
    }

    #[test]
    fn distinct_category_minimum() {
        let rules = ValidationRules { min_distinct_categories: 6, ..ValidationRules::default() };
        let entries = vec![
            entry("ನಾನು", "I", "pronouns", None),
            entry("ಒಂದು", "One", "numbers", None),
        ];
        assert_eq!(
            validate(&entries, &rules).into_iter().map(|i| i.kind).collect::<Vec<_>>(),
            vec![IssueKind::TooFewCategories { found: 2, required: 6 }]
        );
        assert!(validate(&entries, &ValidationRules::default()).is_empty());
    }

    #[test]
    fn pronunciation_shape() {
        assert!(is_well_formed_pronunciation("NA-MA-ska-ra"));
        assert!(!is_well_formed_pronunciation(""));
        assert!(!is_well_formed_pronunciation("ನ-ಮ"));
    }
}
