//! Public asset storage for post banner images.

use bytes::Bytes;
use object_store::{ObjectStore, PutOptions, local::LocalFileSystem, path::Path};
use std::path::Path as FsPath;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Clone, Debug)]
pub struct AssetStore {
    store: Arc<dyn ObjectStore>,
    base_path: String,
}

impl AssetStore {
    /// Opens a local asset store rooted at `base_path`, creating the
    /// directory if it does not exist yet.
    pub fn new_local(base_path: String) -> Result<Self, AppError> {
        std::fs::create_dir_all(&base_path)?;
        let store = Arc::new(LocalFileSystem::new_with_prefix(&base_path)?);
        Ok(Self { store, base_path })
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Deletes the whole public asset tree at `base_path` and leaves an
    /// empty directory behind. A missing directory is a no-op.
    pub fn wipe(base_path: impl AsRef<FsPath>) -> Result<(), AppError> {
        let base_path = base_path.as_ref();
        match std::fs::remove_dir_all(base_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        std::fs::create_dir_all(base_path)?;
        Ok(())
    }

    pub async fn store_banner(&self, post_id: Uuid, content: Bytes) -> Result<String, AppError> {
        let object_path = format!("posts/{post_id}/banner");
        let path = Path::from(object_path.clone());

        self.store
            .put_opts(&path, content.into(), PutOptions::default())
            .await?;

        Ok(object_path)
    }

    pub async fn get_file(&self, object_path: &str) -> Result<Bytes, AppError> {
        let path = Path::from(object_path);

        let result = self.store.get(&path).await.map_err(|_| AppError::NotFound)?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file: {}", e)))?;

        Ok(bytes)
    }

    pub async fn delete_file(&self, object_path: &str) -> Result<(), AppError> {
        let path = Path::from(object_path);
        self.store.delete(&path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("backoffice-assets-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_wipe_missing_directory_is_noop() {
        let dir = scratch_dir();
        assert!(!dir.exists());
        AssetStore::wipe(&dir).unwrap();
        assert!(dir.exists());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_wipe_removes_stored_files() {
        let dir = scratch_dir();
        std::fs::create_dir_all(dir.join("posts/abc")).unwrap();
        std::fs::write(dir.join("posts/abc/banner"), b"image-bytes").unwrap();

        AssetStore::wipe(&dir).unwrap();

        assert!(dir.exists());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_banner_round_trip() {
        let dir = scratch_dir();
        let store = AssetStore::new_local(dir.to_string_lossy().into_owned()).unwrap();

        let post_id = Uuid::new_v4();
        let path = store
            .store_banner(post_id, Bytes::from_static(b"image-bytes"))
            .await
            .unwrap();

        let bytes = store.get_file(&path).await.unwrap();
        assert_eq!(&bytes[..], b"image-bytes");

        store.delete_file(&path).await.unwrap();
        assert!(matches!(
            store.get_file(&path).await,
            Err(AppError::NotFound)
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
