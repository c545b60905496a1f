//! Store file setup and whole-file read/write helpers.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use pessoas_domain::collection::Collection;

use crate::error::StorageError;

/// Contents written to a freshly initialized store.
const EMPTY_COLLECTION: &str = "[]";

/// Configuration for the flat-file storage adapter.
pub struct Config {
    /// Location of the JSON array file (e.g. `pessoas.json`).
    pub path: PathBuf,
    /// Write an empty collection when the file does not exist yet.
    pub create_if_missing: bool,
}

impl Config {
    /// Build a [`JsonFile`] from this configuration.
    ///
    /// Creates the file (and its parent directory) with an empty collection
    /// when `create_if_missing` is set and nothing exists at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the existence check or initialization fails.
    pub async fn build(self) -> Result<JsonFile, StorageError> {
        let file = JsonFile { path: self.path };
        if self.create_if_missing {
            file.initialize().await?;
        }
        Ok(file)
    }
}

/// Handle on the store file.
///
/// Holds no cached data: every call goes to disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Borrow the store location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn initialize(&self) -> Result<(), StorageError> {
        if tokio::fs::try_exists(&self.path)
            .await
            .map_err(StorageError::Read)?
        {
            return Ok(());
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(StorageError::Write)?;
        }
        tokio::fs::write(&self.path, EMPTY_COLLECTION)
            .await
            .map_err(StorageError::Write)?;
        tracing::info!(path = %self.path.display(), "initialized empty store");
        Ok(())
    }

    /// Read the store exactly as persisted, byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the file cannot be read.
    pub async fn read_bytes(&self) -> Result<Vec<u8>, StorageError> {
        tokio::fs::read(&self.path).await.map_err(StorageError::Read)
    }

    /// Read and parse the whole collection.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD` before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the file cannot be read and
    /// [`StorageError::Decode`] when its content is not a collection.
    pub async fn load(&self) -> Result<Collection, StorageError> {
        let bytes = self.read_bytes().await?;
        Collection::parse(&String::from_utf8_lossy(&bytes)).map_err(StorageError::Decode)
    }

    /// Replace the whole file with `collection`.
    ///
    /// The new content goes to a sibling temporary file first and is then
    /// renamed over the store, so readers see either the old or the new
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Encode`] if serialization fails and
    /// [`StorageError::Write`] if writing or renaming fails.
    pub async fn save(&self, collection: &Collection) -> Result<(), StorageError> {
        let text = collection.to_pretty_json().map_err(StorageError::Encode)?;
        let staging = self.staging_path();
        tokio::fs::write(&staging, text)
            .await
            .map_err(StorageError::Write)?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(StorageError::Write)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_initialize_missing_file_with_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("pessoas.json");

        let file = Config {
            path: path.clone(),
            create_if_missing: true,
        }
        .build()
        .await
        .unwrap();

        assert_eq!(file.read_bytes().await.unwrap(), b"[]");
        assert!(file.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_keep_existing_file_when_initializing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pessoas.json");
        std::fs::write(&path, r#"[{"id":1,"nome":"Natan"}]"#).unwrap();

        let file = Config {
            path,
            create_if_missing: true,
        }
        .build()
        .await
        .unwrap();

        assert_eq!(file.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_fail_to_read_missing_file_without_initialization() {
        let dir = tempfile::tempdir().unwrap();
        let file = Config {
            path: dir.path().join("absent.json"),
            create_if_missing: false,
        }
        .build()
        .await
        .unwrap();

        assert!(matches!(file.read_bytes().await, Err(StorageError::Read(_))));
    }

    #[tokio::test]
    async fn should_load_file_with_invalid_utf8_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pessoas.json");
        std::fs::write(&path, b"[{\"id\":1,\"nome\":\"\xff\"}]").unwrap();

        let file = Config {
            path,
            create_if_missing: false,
        }
        .build()
        .await
        .unwrap();

        let people = file.load().await.unwrap();
        assert_eq!(people.len(), 1);
    }

    #[tokio::test]
    async fn should_report_decode_error_for_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pessoas.json");
        std::fs::write(&path, "{corrupt").unwrap();

        let file = Config {
            path,
            create_if_missing: false,
        }
        .build()
        .await
        .unwrap();

        assert!(matches!(file.load().await, Err(StorageError::Decode(_))));
    }

    #[tokio::test]
    async fn should_replace_file_and_leave_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pessoas.json");
        let file = Config {
            path: path.clone(),
            create_if_missing: true,
        }
        .build()
        .await
        .unwrap();

        let collection = Collection::parse(r#"[{"id":1,"nome":"Natan"}]"#).unwrap();
        file.save(&collection).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[\n  {\n    \"id\": 1,\n    \"nome\": \"Natan\"\n  }\n]"
        );
        assert!(!dir.path().join("pessoas.json.tmp").exists());
    }
}
