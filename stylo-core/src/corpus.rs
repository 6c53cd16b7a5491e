//! Whole-file document loading.
//!
//! Source texts are read fully into memory as UTF-8. A missing,
//! unreadable, or undecodable file is a fatal input error — the batch
//! run aborts with no partial analysis attempted.

use std::fs;
use std::path::Path;

use log::info;
use stylo_types::Document;

use crate::error::{Result, StyloError};

/// Loads one document from `path`.
///
/// The document name is the file stem ("texts/RJ_Martin.txt" →
/// "RJ_Martin"); when the stem is not representable, the full path's
/// display form is used instead.
///
/// # Errors
///
/// Returns [`StyloError::FileNotFound`] when the path does not exist,
/// [`StyloError::Io`] on read failure, and [`StyloError::InvalidUtf8`]
/// when the contents do not decode.
pub fn load_document(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(StyloError::FileNotFound(path.to_path_buf()));
    }

    let bytes = fs::read(path).map_err(|source| StyloError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|err| StyloError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })?;

    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string());

    info!("loaded {} ({} bytes)", name, text.len());
    Ok(Document::new(name, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_fatal() {
        let err = load_document(Path::new("/nonexistent/RJ_Martin.txt")).unwrap_err();
        assert!(matches!(err, StyloError::FileNotFound(_)));
    }

    #[test]
    fn loads_name_from_file_stem() {
        let dir = std::env::temp_dir();
        let path = dir.join("stylo_corpus_test.txt");
        {
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(b"Two households, both alike in dignity").unwrap();
        }

        let doc = load_document(&path).unwrap();
        assert_eq!(doc.name(), "stylo_corpus_test");
        assert!(doc.raw_text().contains("households"));

        fs::remove_file(&path).ok();
    }

    #[test]
    fn invalid_utf8_is_fatal() {
        let dir = std::env::temp_dir();
        let path = dir.join("stylo_corpus_bad_utf8.txt");
        fs::write(&path, [0xff, 0xfe, 0x41]).unwrap();

        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, StyloError::InvalidUtf8 { .. }));

        fs::remove_file(&path).ok();
    }
}
