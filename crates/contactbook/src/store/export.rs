//! CSV export of the contact collection.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::contact::Contact;
use crate::error::{Error, Result};

/// Column header written as the first row of every export.
const EXPORT_HEADER: [&str; 3] = ["name", "phone", "email"];

/// Write the header and one row per contact to `writer`.
///
/// Returns the number of data rows written.
///
/// # Errors
///
/// Returns an error if a record cannot be written or flushed.
pub fn write_csv<W: Write>(writer: W, contacts: &[Contact]) -> Result<usize> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    out.write_record(EXPORT_HEADER)?;
    for contact in contacts {
        out.write_record([&contact.name, &contact.phone, &contact.email])?;
    }
    out.flush()?;

    Ok(contacts.len())
}

/// Export `contacts` to a CSV file at `path`, overwriting it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_csv(path: &Path, contacts: &[Contact], create_parent_dirs: bool) -> Result<usize> {
    if create_parent_dirs {
        super::file::ensure_parent_dir(path)?;
    }

    let file = File::create(path).map_err(|source| Error::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = write_csv(file, contacts)?;

    debug!("Exported {} contacts to {}", rows, path.display());
    Ok(rows)
}
