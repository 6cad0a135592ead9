use super::{LoadError, LoadedLibrary};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a sentence library from a PDF file using the pdf-extract crate.
///
/// The extracted text goes through the same parser as plain-text libraries,
/// so both the `text|translation` and paired-line layouts work.
pub fn load(path: &str) -> Result<LoadedLibrary, LoadError> {
    let path = Path::new(path);

    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut file = File::open(path).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let text =
        pdf_extract::extract_text_from_mem(&buffer).map_err(|e| LoadError::PdfParse(e.to_string()))?;

    LoadedLibrary::from_content(&text, format!("pdf:{}", path.display()))
}
