use super::{LoadError, LoadedLibrary};
use std::path::Path;

/// Reads a UTF-8 file, rejecting files with nothing but whitespace.
pub fn read_text_safe(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path.to_path_buf()));
    }

    Ok(content)
}

/// Load a plain-text sentence library.
pub fn load(path: &str) -> Result<LoadedLibrary, LoadError> {
    let path = Path::new(path);
    let content = read_text_safe(path)?;
    LoadedLibrary::from_content(&content, format!("text:{}", path.display()))
}
