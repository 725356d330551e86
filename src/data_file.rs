// File: src/data_file.rs
use crate::core::generator::PronunciationGenerator;
use crate::core::types::VocabularyEntry;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Any entry literal, blank fields included. Used to read the file so
/// `check` and `export` see every entry.
fn entry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r#"\{ kannada: "(?P<kannada>[^"]*)", "#,
            r#"transliteration: "(?P<transliteration>[^"]*)", "#,
            r#"(?:pronunciation: "(?P<pronunciation>[^"]*)", )?"#,
            r#"english: "(?P<english>[^"]*)", "#,
            r#"category: "(?P<category>[^"]*)" \}"#,
        ))
        .expect("entry pattern is a valid regex")
    })
}

/// The only literal shape `fill` rewrites: no pronunciation field and
/// every other field non-empty.
fn fillable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(concat!(
            r#"^\{ kannada: "[^"]+", transliteration: "[^"]+", "#,
            r#"english: "[^"]+", category: "[^"]+" \}$"#,
        ))
        .expect("fillable pattern is a valid regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// File content between entry literals, kept verbatim.
    Text(String),
    Entry(VocabularyEntry),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    pub entries: usize,
    pub updated: usize,
}

/// A vocabulary source file held as an ordered list of segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFile {
    segments: Vec<Segment>,
}

impl DataFile {
    /// Splits `source` into entry literals and the text around them.
    /// Anything that is not a literal stays as text. Literals with empty
    /// fields are still entries, so validation can report them.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut last_end = 0;

        for caps in entry_pattern().captures_iter(source) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last_end {
                segments.push(Segment::Text(source[last_end..whole.start()].to_string()));
            }
            let field = |name: &str| caps.name(name).map_or_else(String::new, |m| m.as_str().to_string());
            segments.push(Segment::Entry(VocabularyEntry {
                kannada: field("kannada"),
                transliteration: field("transliteration"),
                pronunciation: caps.name("pronunciation").map(|m| m.as_str().to_string()),
                english: field("english"),
                category: field("category"),
            }));
            last_end = whole.end();
        }

        if last_end < source.len() {
            segments.push(Segment::Text(source[last_end..].to_string()));
        }

        tracing::debug!("Parsed data file: {} segments", segments.len());
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn entries(&self) -> impl Iterator<Item = &VocabularyEntry> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Entry(entry) => Some(entry),
            Segment::Text(_) => None,
        })
    }

    /// Generates a pronunciation for every entry that lacks one.
    /// Entries with an empty field are left for `check` to report.
    pub fn fill_missing(&mut self, generator: &PronunciationGenerator) -> FillReport {
        let mut report = FillReport::default();
        for segment in &mut self.segments {
            if let Segment::Entry(entry) = segment {
                report.entries += 1;
                if is_fillable(entry) {
                    let pronunciation = generator.generate(&entry.transliteration);
                    tracing::debug!("{} -> {}", entry.transliteration, pronunciation);
                    entry.pronunciation = Some(pronunciation);
                    report.updated += 1;
                }
            }
        }
        report
    }

    /// Serializes back to source text. Untouched input round-trips exactly.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => f.write_str(text)?,
                Segment::Entry(entry) => write_entry(f, entry)?,
            }
        }
        Ok(())
    }
}

fn is_fillable(entry: &VocabularyEntry) -> bool {
    entry.needs_pronunciation() && fillable_pattern().is_match(&EntryLiteral(entry).to_string())
}

/// One entry rendered as its source literal.
struct EntryLiteral<'a>(&'a VocabularyEntry);

impl fmt::Display for EntryLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entry(f, self.0)
    }
}

fn write_entry<W: fmt::Write>(out: &mut W, entry: &VocabularyEntry) -> fmt::Result {
    write!(
        out,
        r#"{{ kannada: "{}", transliteration: "{}", "#,
        entry.kannada, entry.transliteration
    )?;
    if let Some(pronunciation) = &entry.pronunciation {
        write!(out, r#"pronunciation: "{}", "#, pronunciation)?;
    }
    write!(
        out,
        r#"english: "{}", category: "{}" }}"#,
        entry.english, entry.category
    )
}
