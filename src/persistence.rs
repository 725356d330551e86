// File: src/persistence.rs
use crate::core::generator::PronunciationGenerator;
use crate::data_file::{DataFile, FillReport};
use crate::error::{PronounceError, PronounceResult};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

pub fn read_data_file(path: &Path) -> PronounceResult<DataFile> {
    let source = fs::read_to_string(path)?;
    Ok(DataFile::parse(&source))
}

/// Replaces `path` with `contents` through a temp file in the same
/// directory, so readers never see a half-written file.
pub fn write_atomically(path: &Path, contents: &str) -> PronounceResult<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        writer.write_all(contents.as_bytes())?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|source| PronounceError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Fills missing pronunciations in the data file at `path`.
/// The file is rewritten only when something changed and `dry_run` is off.
pub fn fill_file(
    path: &Path,
    generator: &PronunciationGenerator,
    dry_run: bool,
) -> PronounceResult<FillReport> {
    let mut data_file = read_data_file(path)?;
    let report = data_file.fill_missing(generator);
    tracing::info!(
        "{}: {} entries, {} missing a pronunciation",
        path.display(),
        report.entries,
        report.updated
    );

    if dry_run {
        tracing::info!("Dry run, leaving {} untouched", path.display());
    } else if report.updated > 0 {
        write_atomically(path, &data_file.render())?;
        tracing::info!("Rewrote {}", path.display());
    }
    Ok(report)
}
