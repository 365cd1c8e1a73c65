//! Image bucket. Objects are flat `<uuid>.<ext>` names under one directory,
//! exposed to browsers under [`PUBLIC_PREFIX`].

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::common::StorageError;

pub const PUBLIC_PREFIX: &str = "/storage";

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Stores `bytes` and returns the public URL of the new object.
    async fn put(&self, content_type: &str, bytes: &[u8]) -> Result<String, StorageError>;

    /// Removes an object by name. Missing objects are not an error.
    async fn delete(&self, name: &str) -> Result<(), StorageError>;
}

/// File extension for an accepted image content type.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();

    match essence.as_str() {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/webp" => Some("webp"),
        "image/gif" => Some("gif"),
        _ => None,
    }
}

/// Object names are exactly what [`object_name`] produces.
pub fn is_valid_name(name: &str) -> bool {
    match name.split_once('.') {
        Some((stem, ext)) => {
            Uuid::parse_str(stem).is_ok()
                && matches!(ext, "png" | "jpg" | "webp" | "gif")
        }
        None => false,
    }
}

pub fn object_name(ext: &str) -> String {
    format!("{}.{}", Uuid::new_v4().simple(), ext)
}

/// Object name of a URL previously returned by [`BlobStore::put`].
pub fn name_from_url(url: &str) -> Option<&str> {
    url.strip_prefix(PUBLIC_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .filter(|name| is_valid_name(name))
}

pub struct FsBlobStore {
    root: PathBuf,
    max_bytes: usize,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Creates the upload directory if needed.
    pub async fn ensure_root(&self) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }
}

/// Writes a new object, removing whatever was written if the write fails.
async fn write_or_discard(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    let mut file = tokio::fs::File::create(path).await?;
    let written = match file.write_all(bytes).await {
        Ok(()) => file.flush().await,
        Err(e) => Err(e),
    };
    drop(file);

    if let Err(e) = written {
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            log::warn!("Failed to remove partial upload {}: {}", path.display(), cleanup);
        }
        return Err(e.into());
    }
    Ok(())
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn put(&self, content_type: &str, bytes: &[u8]) -> Result<String, StorageError> {
        if bytes.len() > self.max_bytes {
            return Err(StorageError::TooLarge(self.max_bytes));
        }

        let ext = extension_for(content_type)
            .ok_or_else(|| StorageError::UnsupportedType(content_type.to_string()))?;

        self.ensure_root().await?;

        let name = object_name(ext);
        write_or_discard(&self.root.join(&name), bytes).await?;

        log::info!("Stored upload {} ({} bytes)", name, bytes.len());

        Ok(format!("{}/{}", PUBLIC_PREFIX, name))
    }

    async fn delete(&self, name: &str) -> Result<(), StorageError> {
        if !is_valid_name(name) {
            return Err(StorageError::InvalidName(name.to_string()));
        }

        match tokio::fs::remove_file(self.root.join(name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_for() {
        assert_eq!(extension_for("image/png"), Some("png"));
        assert_eq!(extension_for("IMAGE/JPEG; charset=binary"), Some("jpg"));
        assert_eq!(extension_for("image/svg+xml"), None);
        assert_eq!(extension_for("text/html"), None);
    }

    #[test]
    fn test_name_validation() {
        let name = object_name("webp");
        assert!(is_valid_name(&name));
        assert!(!is_valid_name("../etc/passwd"));
        assert!(!is_valid_name("abc.png"));
        assert!(!is_valid_name(&format!("{}.exe", Uuid::new_v4().simple())));
    }

    #[test]
    fn test_name_from_url() {
        let name = object_name("png");
        let url = format!("/storage/{}", name);
        assert_eq!(name_from_url(&url), Some(name.as_str()));
        assert_eq!(name_from_url("https://cdn.example.com/a.png"), None);
        assert_eq!(name_from_url("/storage/../secret"), None);
    }

    #[tokio::test]
    async fn test_put_and_delete() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsBlobStore::new(dir.path().join("uploads"), 1024);

        let url = store.put("image/png", b"\x89PNG fake").await.expect("put");
        let name = name_from_url(&url).expect("url should carry an object name");
        let path = dir.path().join("uploads").join(name);
        assert!(path.exists());

        store.delete(name).await.expect("delete");
        assert!(!path.exists());

        // Deleting twice is fine
        store.delete(name).await.expect("second delete");
    }

    #[tokio::test]
    async fn test_put_rejects_large_and_unsupported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FsBlobStore::new(dir.path(), 4);

        assert!(matches!(
            store.put("image/png", b"too large").await,
            Err(StorageError::TooLarge(4))
        ));
        assert!(matches!(
            store.put("application/pdf", b"ok").await,
            Err(StorageError::UnsupportedType(_))
        ));
        assert!(matches!(
            store.delete("../../x").await,
            Err(StorageError::InvalidName(_))
        ));
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_failed_write_leaves_no_file() {
        if !Path::new("/dev/full").exists() {
            return;
        }
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(object_name("png"));
        std::os::unix::fs::symlink("/dev/full", &path).expect("symlink");

        let result = write_or_discard(&path, &[0u8; 64 * 1024]).await;
        assert!(matches!(result, Err(StorageError::Io(_))));
        assert!(std::fs::symlink_metadata(&path).is_err());
    }
}
