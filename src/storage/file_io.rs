//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Every
//! write goes to a sibling temp file which is synced and then renamed over
//! the target.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use csv::StringRecord;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::WalletsError;

/// Sibling temp path used while writing `path`
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The parent directory must already exist; a missing namespace is reported
/// rather than silently recreated. The temp file is removed on any failure.
pub fn write_atomic<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), WalletsError> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path);

    let result = write_synced(&temp_path, path, bytes).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| WalletsError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// Write `bytes` to `temp_path` and sync it to disk
fn write_synced(temp_path: &Path, path: &Path, bytes: &[u8]) -> Result<(), WalletsError> {
    let file = File::create(temp_path).map_err(|e| {
        WalletsError::Storage(format!("Failed to create temp file for {}: {}", path.display(), e))
    })?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(bytes)
        .map_err(|e| WalletsError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| WalletsError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| WalletsError::Storage(format!("Failed to sync data: {}", e)))
}

/// Read every row of a headerless CSV file
///
/// The file must exist. Rows may have differing lengths; callers check the
/// shape they expect.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<StringRecord>, WalletsError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(WalletsError::Storage(format!("No such file: {}", path.display())));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| WalletsError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    reader
        .records()
        .map(|record| {
            record.map_err(|e| {
                WalletsError::Storage(format!("Failed to parse {}: {}", path.display(), e))
            })
        })
        .collect()
}

/// Write rows as a headerless CSV file, atomically
pub fn write_records_atomic<P: AsRef<Path>>(
    path: P,
    rows: &[Vec<String>],
) -> Result<(), WalletsError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WalletsError::Storage(format!("Failed to serialize rows: {}", e)))?;

    write_atomic(path, &bytes)
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, WalletsError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| WalletsError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| WalletsError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically, creating parent directories
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), WalletsError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WalletsError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let bytes = serde_json::to_vec_pretty(data)
        .map_err(|e| WalletsError::Storage(format!("Failed to serialize data: {}", e)))?;

    write_atomic(path, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/data/steve/accounts.csv");
        assert_eq!(temp_path_for(path), Path::new("/data/steve/accounts.csv.tmp"));
    }

    #[test]
    fn test_write_and_read_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");

        let data = rows(&[&["cash", "325"], &["bank account", "2475"]]);
        write_records_atomic(&path, &data).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(&records[1][0], "bank account");
        assert_eq!(&records[1][1], "2475");
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wallets.csv");

        write_records_atomic(&path, &rows(&[&["food, drink", "12.5"]])).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(&records[0][0], "food, drink");
    }

    #[test]
    fn test_read_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("funding.csv");
        fs::write(&path, "").unwrap();

        assert!(read_records(&path).unwrap().is_empty());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_records(temp_dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, WalletsError::Storage(_)));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gone").join("accounts.csv");

        let err = write_records_atomic(&path, &rows(&[&["cash", "1"]])).unwrap_err();
        assert!(matches!(err, WalletsError::Storage(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");

        write_records_atomic(&path, &rows(&[&["cash", "1"]])).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("accounts.csv.tmp").exists());
    }

    #[test]
    fn test_failed_write_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.csv");
        // A non-empty directory in the way makes the final rename fail
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let err = write_records_atomic(&path, &rows(&[&["cash", "1"]])).unwrap_err();
        assert!(matches!(err, WalletsError::Storage(_)));
        assert!(!temp_dir.path().join("accounts.csv.tmp").exists());
        assert!(path.join("keep").exists());
    }

    #[test]
    fn test_json_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("test.json");

        let data = TestData {
            name: "test".to_string(),
            value: 42,
        };

        write_json_atomic(&path, &data).unwrap();
        let loaded: TestData = read_json(&path).unwrap();
        assert_eq!(data, loaded);
    }

    #[test]
    fn test_read_json_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let data: TestData = read_json(temp_dir.path().join("none.json")).unwrap();
        assert_eq!(data, TestData::default());
    }
}
