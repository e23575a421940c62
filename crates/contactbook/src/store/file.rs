//! Reading and writing the contacts JSON document.
//!
//! The document is a JSON array of contact objects, pretty-printed with
//! four-space indentation. Writes overwrite the whole file in place.

use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, trace};

use crate::contact::Contact;
use crate::error::{Error, Result};

/// Indentation used for the persisted document.
const INDENT: &[u8] = b"    ";

/// Read contacts from `path`.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn read_contacts(path: &Path) -> Result<Option<Vec<Contact>>> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            debug!("No contacts file at {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(Error::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let contacts: Vec<Contact> = serde_json::from_slice(&bytes)?;
    trace!("Parsed {} contacts from {}", contacts.len(), path.display());
    Ok(Some(contacts))
}

/// Serialize contacts to the on-disk representation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_document(contacts: &[Contact]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    contacts.serialize(&mut serializer)?;
    Ok(buf)
}

/// Overwrite `path` with `contacts`.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written.
pub fn write_contacts(path: &Path, contacts: &[Contact], create_parent_dirs: bool) -> Result<()> {
    if create_parent_dirs {
        ensure_parent_dir(path)?;
    }

    let document = to_document(contacts)?;
    std::fs::write(path, document).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} contacts to {}", contacts.len(), path.display());
    Ok(())
}

/// Create the parent directory of `path` if it is missing.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("Alice", "555-0100", "alice@example.com"),
            Contact::new("Bob", "555-1111", ""),
        ]
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_contacts(&dir.path().join("absent.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");

        write_contacts(&path, &sample(), false).unwrap();
        let loaded = read_contacts(&path).unwrap().unwrap();

        assert_eq!(loaded, sample());
    }

    #[test]
    fn test_document_uses_four_space_indent() {
        let document = String::from_utf8(to_document(&sample()).unwrap()).unwrap();
        let expected = r#"[
    {
        "name": "Alice",
        "phone": "555-0100",
        "email": "alice@example.com"
    },
    {
        "name": "Bob",
        "phone": "555-1111",
        "email": ""
    }
]"#;
        assert_eq!(document, expected);
    }

    #[test]
    fn test_empty_document() {
        let document = to_document(&[]).unwrap();
        assert_eq!(document, b"[]");
    }

    #[test]
    fn test_read_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = read_contacts(&path).unwrap_err();
        assert!(err.is_parse_error());
    }

    #[test]
    fn test_read_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, r#"{"name": "Alice"}"#).unwrap();

        assert!(matches!(read_contacts(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_contacts(dir.path()).unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/contacts.json");

        write_contacts(&path, &sample(), true).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_without_parent_dirs_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/contacts.json");

        let err = write_contacts(&path, &sample(), false).unwrap_err();
        assert!(matches!(err, Error::WriteFile { .. }));
    }

    #[test]
    fn test_ensure_parent_dir_bare_file_name() {
        assert!(ensure_parent_dir(Path::new("contacts.json")).is_ok());
    }
}
