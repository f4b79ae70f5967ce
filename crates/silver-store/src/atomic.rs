//! Atomic full-table CSV rewrites.
//!
//! Each rewrite serializes the whole table into memory first, writes it to a
//! temp file next to the destination, and lands via rename. The table on disk
//! is always either the old version or the new one. The header row is written
//! explicitly: an empty table still persists as a file with the defined
//! columns.

use std::fs::File;
use std::io::{ErrorKind, Write as _};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Read all rows of a persisted table.
///
/// A missing file is not an error: it reads as an empty table.
pub(crate) fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source: error,
            });
        }
    };

    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?);
    }
    Ok(rows)
}

/// Rewrite the whole table: headers plus every row, then atomic rename.
pub(crate) fn write_rows<T: Serialize>(
    path: &Path,
    headers: &[&str],
    rows: &[T],
) -> Result<(), StoreError> {
    let buffer = serialize_table(path, headers, rows)?;

    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    temp.write_all(&buffer)
        .and_then(|()| temp.flush())
        .map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    temp.persist(path).map_err(|source| StoreError::Replace {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Serialize the full table into memory before touching the filesystem.
fn serialize_table<T: Serialize>(
    path: &Path,
    headers: &[&str],
    rows: &[T],
) -> Result<Vec<u8>, StoreError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(&mut buffer);

        writer
            .write_record(headers)
            .map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        for row in rows {
            writer.serialize(row).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(buffer)
}
