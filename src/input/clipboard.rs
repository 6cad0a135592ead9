use super::{LoadError, LoadedLibrary};
use arboard::Clipboard;

/// Load a sentence library from the system clipboard text.
pub fn load() -> Result<LoadedLibrary, LoadError> {
    let mut clipboard = Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let text = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    LoadedLibrary::from_content(&text, "clipboard".to_string())
}
