use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::item::errors::ImageStoreError;
use crate::domain::item::ports::ImageStore;

/// Filesystem-backed image store.
///
/// Writes each upload once under the configured directory with a random
/// prefix, so distinct uploads of the same filename never collide.
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, ImageStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;

        let stored_name = format!("{}_{}", Uuid::new_v4(), filename);
        let path = self.root.join(&stored_name);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;

        Ok(path.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_writes_bytes_under_root() {
        let root = std::env::temp_dir().join(format!("market-images-{}", Uuid::new_v4()));
        let store = FsImageStore::new(&root);

        let path = store.store("lamp.png", b"png-bytes").await.unwrap();

        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"png-bytes");
        assert!(path.contains("lamp.png"));

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_same_filename_twice_yields_distinct_paths() {
        let root = std::env::temp_dir().join(format!("market-images-{}", Uuid::new_v4()));
        let store = FsImageStore::new(&root);

        let first = store.store("lamp.png", b"one").await.unwrap();
        let second = store.store("lamp.png", b"two").await.unwrap();

        assert_ne!(first, second);

        tokio::fs::remove_dir_all(&root).await.unwrap();
    }
}
