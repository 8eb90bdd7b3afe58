/**
 * Local Image Asset Store
 *
 * This module implements the external asset store on local disk. Uploaded
 * portfolio images are written under the configured upload directory with
 * a generated unique name; the directory is served statically so each
 * asset has a public URL.
 *
 * The stored name doubles as the asset's public id, which is persisted on
 * the portfolio item so the file can be deleted when the item is updated
 * with a new image or removed. Deletion is best-effort at the call sites:
 * a failed delete is logged and never blocks the record operation.
 */

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Reference to a stored asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    /// Public URL the marketing site can embed
    pub url: String,
    /// Identifier used to delete the asset later
    pub public_id: String,
}

/// Asset store writing to a local directory
#[derive(Debug, Clone)]
pub struct LocalAssetStore {
    root: PathBuf,
    public_base: String,
}

impl LocalAssetStore {
    /// Create a store rooted at `root`, serving assets under `public_base`
    pub fn new(root: PathBuf, public_base: String) -> Self {
        Self { root, public_base }
    }

    /// Store an uploaded file and return its public reference
    ///
    /// The file is written as `<uuid>.<ext>`, keeping only a sanitized
    /// extension from the client-supplied name. Client names are never
    /// used as paths.
    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> io::Result<StoredAsset> {
        let public_id = match sanitized_extension(original_name) {
            Some(ext) => format!("{}.{}", Uuid::new_v4(), ext),
            None => Uuid::new_v4().to_string(),
        };

        tokio::fs::write(self.root.join(&public_id), bytes).await?;
        tracing::debug!("Stored asset {} ({} bytes)", public_id, bytes.len());

        Ok(StoredAsset {
            url: format!("{}/{}", self.public_base, public_id),
            public_id,
        })
    }

    /// Delete a previously stored asset
    ///
    /// Rejects anything that is not a bare file name; public ids are
    /// generated by `store` and never contain path separators.
    pub async fn remove(&self, public_id: &str) -> io::Result<()> {
        if public_id.is_empty()
            || public_id.contains('/')
            || public_id.contains('\\')
            || public_id.contains("..")
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid asset id: {public_id}"),
            ));
        }

        tokio::fs::remove_file(self.root.join(public_id)).await?;
        tracing::debug!("Deleted asset {}", public_id);
        Ok(())
    }
}

/// Extract a safe lowercase extension from a client-supplied file name
fn sanitized_extension(name: &str) -> Option<String> {
    let ext = Path::new(name).extension()?.to_str()?;
    if ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(dir: &tempfile::TempDir) -> LocalAssetStore {
        LocalAssetStore::new(
            dir.path().to_path_buf(),
            "http://localhost:5000/uploads".to_string(),
        )
    }

    #[tokio::test]
    async fn test_store_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);

        let asset = store.store("hero.PNG", b"fake image bytes").await.unwrap();
        assert!(asset.public_id.ends_with(".png"));
        assert_eq!(
            asset.url,
            format!("http://localhost:5000/uploads/{}", asset.public_id)
        );
        assert!(dir.path().join(&asset.public_id).exists());

        store.remove(&asset.public_id).await.unwrap();
        assert!(!dir.path().join(&asset.public_id).exists());
    }

    #[tokio::test]
    async fn test_remove_missing_asset_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);

        let result = store.remove("nonexistent.png").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_remove_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);

        for id in ["../secret", "a/b.png", "..", ""] {
            let err = store.remove(id).await.unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
    }

    #[tokio::test]
    async fn test_store_without_usable_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = test_store(&dir);

        let asset = store.store("no_extension", b"bytes").await.unwrap();
        assert!(!asset.public_id.contains('.'));

        let asset = store.store("weird.<script>", b"bytes").await.unwrap();
        assert!(!asset.public_id.contains('.'));
    }
}
