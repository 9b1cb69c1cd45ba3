// File: src/persistence.rs
use crate::core::dictionary::Dictionary;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Reads a dialect source file as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let source = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

/// Replaces `path` with `contents` without ever exposing a half-written file.
pub fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(contents.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

/// Loads and validates a JSON dictionary file.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let text = fs::read_to_string(path)?;
    let dictionary = Dictionary::from_json(&text)?;
    debug!(
        path = %path.display(),
        structural = dictionary.structural().len(),
        callable = dictionary.callable().len(),
        "loaded dictionary"
    );
    Ok(dictionary)
}
