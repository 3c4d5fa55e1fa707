//! Whole-file I/O for the pipeline
//!
//! Reads and writes are done in one shot with `tokio::fs`; chunkmill never
//! streams.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("Input file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Check whether `path` exists and is reachable
pub async fn exists(path: &Path) -> bool {
    tokio::fs::try_exists(path).await.unwrap_or(false)
}

/// Read the entire file at `path` as UTF-8 text
pub async fn read_text(path: &Path) -> Result<String, FileError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => FileError::NotFound {
                path: path.to_path_buf(),
            },
            _ => FileError::Read {
                path: path.to_path_buf(),
                source,
            },
        })
}

/// Write `contents` to `path`, replacing anything already there
pub async fn write_text(path: &Path, contents: &str) -> Result<(), FileError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| FileError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_missing_file_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.txt");

        assert!(!exists(&path).await);
        let err = read_text(&path).await.unwrap_err();
        assert!(matches!(err, FileError::NotFound { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_text(&path, "first version").await.unwrap();
        write_text(&path, "second").await.unwrap();

        assert!(exists(&path).await);
        assert_eq!(read_text(&path).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn test_read_invalid_utf8_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = read_text(&path).await.unwrap_err();
        assert!(matches!(err, FileError::Read { .. }));
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no/such/dir/out.txt");

        let err = write_text(&path, "x").await.unwrap_err();
        assert!(matches!(err, FileError::Write { .. }));
    }
}
